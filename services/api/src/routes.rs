use std::collections::BTreeMap;

use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use strainlens::assessment::{
    AnswerSet, Pillar, QuestionInput, ResultData, RiskFlag, Tier,
};
use strainlens::error::AppError;

use crate::infra::AppState;

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) answers: AnswerSet,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResultQuery {
    /// Base64 answer token produced by the quiz step.
    pub(crate) data: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct FlagView {
    pub(crate) kind: RiskFlag,
    pub(crate) label: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct DriverView {
    pub(crate) question_id: String,
    pub(crate) question_text: String,
    pub(crate) answer_value: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    pub(crate) strain_index: u8,
    pub(crate) tier: Tier,
    pub(crate) pillar_scores: BTreeMap<Pillar, f64>,
    pub(crate) risk_flags: Vec<FlagView>,
    pub(crate) primary_risk_drivers: Vec<DriverView>,
    /// Token the client embeds in the shareable results URL.
    pub(crate) share_token: String,
}

impl AssessmentResponse {
    fn build(result: ResultData, share_token: String) -> Self {
        Self {
            strain_index: result.strain_index,
            tier: result.tier,
            pillar_scores: result.pillar_scores,
            risk_flags: result
                .risk_flags
                .into_iter()
                .map(|flag| FlagView {
                    kind: flag,
                    label: flag.label().to_string(),
                })
                .collect(),
            primary_risk_drivers: result
                .primary_risk_drivers
                .into_iter()
                .map(|driver| DriverView {
                    question_id: driver.question_id.0,
                    question_text: driver.question_text,
                    answer_value: driver.answer_value,
                })
                .collect(),
            share_token,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionView {
    pub(crate) id: String,
    pub(crate) pillar: Pillar,
    pub(crate) pillar_name: String,
    pub(crate) text: String,
    pub(crate) input: QuestionInput,
}

pub(crate) fn assessment_router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/assessment/questions",
            axum::routing::get(questions_endpoint),
        )
        .route(
            "/api/v1/assessment/score",
            axum::routing::post(score_endpoint),
        )
        .route(
            "/api/v1/assessment/result",
            axum::routing::get(result_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn questions_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<Vec<QuestionView>> {
    let views = state
        .engine
        .catalog()
        .questions()
        .iter()
        .map(|question| QuestionView {
            id: question.id.as_str().to_string(),
            pillar: question.pillar,
            pillar_name: question.pillar.display_name().to_string(),
            text: question.text.clone(),
            input: question.input.clone(),
        })
        .collect();
    Json(views)
}

pub(crate) async fn score_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let ScoreRequest { answers } = payload;
    let result = state.engine.calculate_scores(&answers);
    let share_token = answers.encode_token()?;
    Ok(Json(AssessmentResponse::build(result, share_token)))
}

pub(crate) async fn result_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<ResultQuery>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let answers = AnswerSet::decode_token(&query.data)?;
    let result = state.engine.calculate_scores(&answers);
    Ok(Json(AssessmentResponse::build(result, query.data)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use strainlens::assessment::{QuestionId, ScoringEngine};

    fn state() -> AppState {
        let handle = PrometheusBuilder::new()
            .build_recorder()
            .handle();
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(handle),
            engine: Arc::new(ScoringEngine::standard()),
        }
    }

    fn risky_answers() -> AnswerSet {
        let engine = ScoringEngine::standard();
        engine
            .catalog()
            .questions()
            .iter()
            .map(|question| (question.id.clone(), 10.0))
            .collect()
    }

    #[tokio::test]
    async fn score_endpoint_returns_full_result_view() {
        let request = ScoreRequest {
            answers: risky_answers(),
        };

        let Json(body) = score_endpoint(Extension(state()), Json(request))
            .await
            .expect("score computes");

        assert!(body.strain_index >= 70);
        assert_eq!(body.tier.name, "Critical Load");
        assert_eq!(body.risk_flags.len(), 3);
        assert_eq!(body.risk_flags[0].kind, RiskFlag::SystemicStrain);
        assert_eq!(body.pillar_scores.len(), 5);
        assert!(!body.share_token.is_empty());
    }

    #[tokio::test]
    async fn result_endpoint_round_trips_the_token() {
        let answers = risky_answers();
        let token = answers.encode_token().expect("token encodes");

        let Json(direct) = score_endpoint(
            Extension(state()),
            Json(ScoreRequest {
                answers: answers.clone(),
            }),
        )
        .await
        .expect("score computes");

        let Json(via_token) = result_endpoint(
            Extension(state()),
            Query(ResultQuery {
                data: token.clone(),
            }),
        )
        .await
        .expect("token decodes");

        assert_eq!(via_token.strain_index, direct.strain_index);
        assert_eq!(via_token.tier.name, direct.tier.name);
        assert_eq!(via_token.share_token, token);
    }

    #[tokio::test]
    async fn result_endpoint_rejects_corrupt_tokens() {
        let err = result_endpoint(
            Extension(state()),
            Query(ResultQuery {
                data: "!!not-a-token!!".to_string(),
            }),
        )
        .await
        .expect_err("corrupt token must fail");

        assert!(matches!(err, AppError::Token(_)));
    }

    #[tokio::test]
    async fn questions_endpoint_lists_the_standard_catalog() {
        let Json(questions) = questions_endpoint(Extension(state())).await;
        assert_eq!(questions.len(), 24);
        assert_eq!(questions[0].id, "q1");
        assert!(!questions[0].pillar_name.is_empty());
    }

    #[tokio::test]
    async fn partial_answer_sets_score_without_error() {
        let mut answers = AnswerSet::new();
        answers.insert(QuestionId::new("q1"), 10.0);

        let Json(body) = score_endpoint(Extension(state()), Json(ScoreRequest { answers }))
            .await
            .expect("partial set scores");

        assert_eq!(body.strain_index, 20);
        assert_eq!(body.tier.name, "Low Strain");
        assert!(body.risk_flags.is_empty());
    }
}
