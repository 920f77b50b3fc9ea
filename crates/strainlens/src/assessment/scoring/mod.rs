mod config;
mod rules;
mod tiers;

pub use config::{AnswerCondition, FlagRule, ScoringConfig, SystemicStrainRule};
pub use rules::RiskFlag;
pub use tiers::{Tier, TierBand, TierTable};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::catalog::{Pillar, Question, QuestionCatalog, QuestionId, SCORE_SCALE};

/// Normalized 0-100 sub-scores keyed by pillar.
pub type PillarScores = BTreeMap<Pillar, f64>;

/// One of the questions that contributed most strongly to the computed
/// strain, cited by downstream explanation generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskDriver {
    pub question_id: QuestionId,
    pub question_text: String,
    pub answer_value: f64,
}

/// Complete output of one scoring run. Immutable; nothing about the answers
/// survives beyond this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultData {
    pub strain_index: u8,
    pub tier: Tier,
    pub pillar_scores: PillarScores,
    pub risk_flags: Vec<RiskFlag>,
    pub primary_risk_drivers: Vec<RiskDriver>,
}

/// Stateless engine applying a rubric to an immutable catalog. Construction
/// injection keeps test doubles trivial; there is no global registry.
pub struct ScoringEngine {
    catalog: QuestionCatalog,
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(catalog: QuestionCatalog, config: ScoringConfig) -> Self {
        Self { catalog, config }
    }

    /// Production catalog and rubric.
    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard(), ScoringConfig::standard())
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one answer set: normalize per-question scores, aggregate per
    /// pillar, compute the weighted composite, then classify the tier, raise
    /// risk flags, and rank the primary drivers. Pure and deterministic.
    pub fn calculate_scores(&self, answers: &AnswerSet) -> ResultData {
        // Unanswered questions are omitted, never defaulted.
        let mut scored: Vec<(&Question, f64)> = Vec::new();
        for question in self.catalog.questions() {
            if let Some(raw) = answers.get(&question.id) {
                scored.push((question, question.transform.apply(raw)));
            }
        }

        let mut totals: BTreeMap<Pillar, (f64, usize)> = BTreeMap::new();
        for (question, score) in &scored {
            let entry = totals.entry(question.pillar).or_insert((0.0, 0));
            entry.0 += score;
            entry.1 += 1;
        }

        let mut pillar_scores = PillarScores::new();
        for pillar in self.config.pillar_weights.keys() {
            let score = match totals.get(pillar) {
                Some((sum, count)) if *count > 0 => sum / (*count as f64 * SCORE_SCALE) * 100.0,
                _ => 0.0,
            };
            pillar_scores.insert(*pillar, score);
        }

        let strain_index = composite_index(&pillar_scores, &self.config.pillar_weights);
        let tier = self.config.tiers.classify(strain_index).clone();

        let question_scores: BTreeMap<QuestionId, f64> = scored
            .iter()
            .map(|(question, score)| (question.id.clone(), *score))
            .collect();
        let risk_flags =
            rules::evaluate_flags(&self.config, &pillar_scores, &question_scores, strain_index);

        // Stable sort keeps catalog order for equal scores.
        let mut ranked = scored;
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        let primary_risk_drivers = ranked
            .into_iter()
            .take(self.config.max_drivers)
            .map(|(question, score)| RiskDriver {
                question_id: question.id.clone(),
                question_text: question.text.clone(),
                answer_value: score,
            })
            .collect();

        ResultData {
            strain_index,
            tier,
            pillar_scores,
            risk_flags,
            primary_risk_drivers,
        }
    }
}

/// Weighted composite normalized by the weight sum, so arbitrary positive
/// weights still land in 0-100. Round-half-up to the nearest integer.
fn composite_index(pillar_scores: &PillarScores, weights: &BTreeMap<Pillar, f64>) -> u8 {
    let weight_total: f64 = weights.values().sum();
    if weight_total <= 0.0 {
        return 0;
    }
    let weighted: f64 = weights
        .iter()
        .map(|(pillar, weight)| pillar_scores.get(pillar).copied().unwrap_or(0.0) * weight)
        .sum();
    (weighted / weight_total).round().clamp(0.0, 100.0) as u8
}
