use std::collections::BTreeMap;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::catalog::QuestionId;

/// Raw answers keyed by question id, collected for a single assessment
/// session. Never persisted; it lives only for the duration of one scoring
/// call plus the URL hop between the quiz and results steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<QuestionId, f64>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: QuestionId, value: f64) {
        self.0.insert(id, value);
    }

    pub fn get(&self, id: &QuestionId) -> Option<f64> {
        self.0.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, f64)> {
        self.0.iter().map(|(id, value)| (id, *value))
    }

    /// Encode the answer set as URL-safe base64 over its JSON form, the shape
    /// the quiz step puts in the results-page query parameter.
    pub fn encode_token(&self) -> Result<String, AnswerTokenError> {
        let json = serde_json::to_vec(self)?;
        Ok(URL_SAFE_NO_PAD.encode(json))
    }

    /// Decode a token produced by [`AnswerSet::encode_token`]. Failure is a
    /// distinct error so callers can route the user back to the assessment
    /// instead of rendering a corrupt score.
    pub fn decode_token(token: &str) -> Result<Self, AnswerTokenError> {
        let json = URL_SAFE_NO_PAD.decode(token.trim())?;
        Ok(serde_json::from_slice(&json)?)
    }
}

impl FromIterator<(QuestionId, f64)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Failure decoding or encoding an answer token.
#[derive(Debug, Error)]
pub enum AnswerTokenError {
    #[error("answer token is not valid base64")]
    Encoding(#[from] base64::DecodeError),
    #[error("answer token payload is not a valid answer set")]
    Payload(#[from] serde_json::Error),
}
