//! Scoring and risk-flagging engine behind the lifestyle strain self-assessment.
//!
//! The [`assessment`] module holds the entire core: the immutable question
//! catalog, the answer-set transport codec, and the scoring engine that turns
//! raw answers into a composite strain index, tier, risk flags, and primary
//! drivers. `config`, `telemetry`, and `error` carry the service plumbing
//! shared with the HTTP shell.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
