use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::config::ScoringConfig;
use crate::assessment::catalog::{Pillar, QuestionId};

/// Named risk indicator raised by the flag engine. Severity is an explicit
/// per-kind rank rather than a position in an ordering array, so ranking never
/// depends on string matching.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskFlag {
    SystemicStrain,
    CardiovascularStrain,
    InflammatoryRisk,
    MetabolicRisk,
    StressRecoveryImbalance,
}

impl RiskFlag {
    /// Rank used to order raised flags; lower is more severe.
    pub fn severity_rank(&self) -> u8 {
        match self {
            RiskFlag::SystemicStrain => 0,
            RiskFlag::CardiovascularStrain => 1,
            RiskFlag::InflammatoryRisk => 2,
            RiskFlag::MetabolicRisk => 3,
            RiskFlag::StressRecoveryImbalance => 4,
        }
    }

    /// Human-readable label forwarded to result views and explanation prompts.
    pub fn label(&self) -> &'static str {
        match self {
            RiskFlag::SystemicStrain => "High Systemic Lifestyle Strain",
            RiskFlag::CardiovascularStrain => "Cardiovascular Strain Indicators Detected",
            RiskFlag::InflammatoryRisk => "Inflammatory Lifestyle Risk Signals Present",
            RiskFlag::MetabolicRisk => "Elevated Metabolic Risk Signals",
            RiskFlag::StressRecoveryImbalance => "Stress Load & Recovery Imbalance",
        }
    }
}

/// Collapse a normalized 0-10 score onto the 0-4 response band used by rule
/// conditions. Slider and pre-scored choice values land on the same bands.
pub(crate) fn response_band(score: f64) -> u8 {
    if score <= 1.0 {
        0
    } else if score <= 3.5 {
        1
    } else if score <= 6.5 {
        2
    } else if score <= 9.0 {
        3
    } else {
        4
    }
}

/// Evaluate every category rule plus the systemic rule against the computed
/// scores. Order independent: each rule reads only the score maps, raised
/// flags deduplicate through the set, and the result is severity-ranked and
/// truncated to the configured cap.
pub(crate) fn evaluate_flags(
    config: &ScoringConfig,
    pillar_scores: &BTreeMap<Pillar, f64>,
    question_scores: &BTreeMap<QuestionId, f64>,
    strain_index: u8,
) -> Vec<RiskFlag> {
    let mut raised = BTreeSet::new();

    for rule in &config.flag_rules {
        let pillar_score = pillar_scores.get(&rule.pillar).copied().unwrap_or(0.0);
        if pillar_score < rule.pillar_floor {
            continue;
        }
        let met = rule
            .conditions
            .iter()
            .filter(|condition| {
                question_scores
                    .get(&condition.question)
                    .map(|score| response_band(*score) >= condition.min_band)
                    .unwrap_or(false)
            })
            .count();
        if met >= rule.min_met {
            raised.insert(rule.flag);
        }
    }

    // The systemic rule fires in addition to the category rules, never instead
    // of them.
    let high_pillars = pillar_scores
        .values()
        .filter(|score| **score >= config.systemic.pillar_floor)
        .count();
    if strain_index >= config.systemic.index_floor || high_pillars >= config.systemic.min_pillars {
        raised.insert(RiskFlag::SystemicStrain);
    }

    let mut flags: Vec<RiskFlag> = raised.into_iter().collect();
    flags.sort_by_key(RiskFlag::severity_rank);
    flags.truncate(config.max_flags);
    flags
}
