use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::rules::RiskFlag;
use super::tiers::TierTable;
use crate::assessment::catalog::{Pillar, QuestionId};

/// Threshold test on one question's 0-4 response band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerCondition {
    pub question: QuestionId,
    pub min_band: u8,
}

/// Category flag rule: the pillar score must reach its floor and at least
/// `min_met` of the answer conditions must hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagRule {
    pub flag: RiskFlag,
    pub pillar: Pillar,
    pub pillar_floor: f64,
    pub conditions: Vec<AnswerCondition>,
    pub min_met: usize,
}

/// Independent systemic rule: fires on a high composite index or on broad
/// load across several pillars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemicStrainRule {
    pub index_floor: u8,
    pub pillar_floor: f64,
    pub min_pillars: usize,
}

/// Full rubric for the scoring engine: pillar weights, tier table, flag
/// rules, and output caps. Everything the evaluation algorithm reads is data
/// here, tunable without touching the algorithm itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub pillar_weights: BTreeMap<Pillar, f64>,
    pub tiers: TierTable,
    pub flag_rules: Vec<FlagRule>,
    pub systemic: SystemicStrainRule,
    pub max_flags: usize,
    pub max_drivers: usize,
}

impl ScoringConfig {
    /// The production rubric. Weights are equal across pillars; the composite
    /// still divides by the weight sum so injected rubrics with non-unit
    /// sums keep the 0-100 range.
    pub fn standard() -> Self {
        let condition = |id: &str, min_band: u8| AnswerCondition {
            question: QuestionId::new(id),
            min_band,
        };

        Self {
            pillar_weights: Pillar::ALL.iter().map(|pillar| (*pillar, 0.2)).collect(),
            tiers: TierTable::standard(),
            flag_rules: vec![
                FlagRule {
                    flag: RiskFlag::MetabolicRisk,
                    pillar: Pillar::Metabolic,
                    pillar_floor: 65.0,
                    conditions: vec![
                        condition("q1", 3),
                        condition("q2", 3),
                        condition("q3", 2),
                        condition("q4", 3),
                        condition("q5", 2),
                    ],
                    min_met: 3,
                },
                FlagRule {
                    flag: RiskFlag::InflammatoryRisk,
                    pillar: Pillar::Inflammatory,
                    pillar_floor: 60.0,
                    conditions: vec![
                        condition("q6", 3),
                        condition("q7", 3),
                        condition("q8", 2),
                        condition("q9", 3),
                        condition("q10", 3),
                    ],
                    min_met: 3,
                },
                FlagRule {
                    flag: RiskFlag::CardiovascularStrain,
                    pillar: Pillar::Cardiovascular,
                    pillar_floor: 55.0,
                    conditions: vec![
                        condition("q11", 3),
                        condition("q12", 3),
                        condition("q13", 2),
                        condition("q14", 3),
                    ],
                    min_met: 2,
                },
                FlagRule {
                    flag: RiskFlag::StressRecoveryImbalance,
                    pillar: Pillar::Hormonal,
                    pillar_floor: 60.0,
                    conditions: vec![
                        condition("q16", 3),
                        condition("q17", 3),
                        condition("q18", 3),
                        condition("q19", 3),
                    ],
                    min_met: 3,
                },
            ],
            systemic: SystemicStrainRule {
                index_floor: 70,
                pillar_floor: 60.0,
                min_pillars: 3,
            },
            max_flags: 3,
            max_drivers: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog::QuestionCatalog;

    #[test]
    fn standard_rules_reference_catalog_questions() {
        let catalog = QuestionCatalog::standard();
        let config = ScoringConfig::standard();
        for rule in &config.flag_rules {
            for condition in &rule.conditions {
                assert!(
                    catalog.get(&condition.question).is_some(),
                    "rule for {:?} references unknown question {}",
                    rule.flag,
                    condition.question.as_str()
                );
            }
        }
    }

    #[test]
    fn standard_weights_cover_every_pillar() {
        let config = ScoringConfig::standard();
        for pillar in Pillar::ALL {
            assert!(config.pillar_weights.contains_key(&pillar));
        }
        assert!(config.pillar_weights.values().all(|weight| *weight >= 0.0));
    }

    #[test]
    fn rubric_round_trips_through_json() {
        let config = ScoringConfig::standard();
        let json = serde_json::to_string(&config).expect("serializes");
        let restored: ScoringConfig = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(restored, config);
    }
}
