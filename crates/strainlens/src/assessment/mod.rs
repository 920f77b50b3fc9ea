//! Lifestyle assessment core: catalog, answers, and the scoring engine.
//!
//! Everything here is pure and synchronous. The engine takes an immutable
//! [`QuestionCatalog`] plus a [`ScoringConfig`] at construction time and turns
//! an ephemeral [`AnswerSet`] into a [`ResultData`]; no answer data outlives
//! the call.

pub mod answers;
pub mod catalog;
pub mod scoring;

pub use answers::{AnswerSet, AnswerTokenError};
pub use catalog::{
    ChoiceOption, Pillar, Question, QuestionCatalog, QuestionId, QuestionInput, ScoreTransform,
    SCORE_SCALE,
};
pub use scoring::{
    AnswerCondition, FlagRule, PillarScores, ResultData, RiskDriver, RiskFlag, ScoringConfig,
    ScoringEngine, SystemicStrainRule, Tier, TierBand, TierTable,
};
