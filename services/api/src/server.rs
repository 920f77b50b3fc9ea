use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use strainlens::assessment::{QuestionCatalog, ScoringEngine};
use strainlens::config::AppConfig;
use strainlens::error::AppError;
use strainlens::telemetry;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::assessment_router;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let rubric = config.assessment.load_rubric()?;
    let engine = Arc::new(ScoringEngine::new(QuestionCatalog::standard(), rubric));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        engine,
    };

    let app = assessment_router()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "lifestyle strain assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
