use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryProspectRepository};
use crate::routes::with_portal_routes;
use agency_portal::config::AppConfig;
use agency_portal::error::AppError;
use agency_portal::telemetry;
use agency_portal::workflows::leads::LeadScoringService;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    info!(
        target_metros = config.lead_scoring.target_metros.len(),
        target_states = ?config.lead_scoring.target_states,
        "lead scoring policy loaded"
    );
    let repository = Arc::new(InMemoryProspectRepository::default());
    let lead_service = Arc::new(LeadScoringService::new(
        repository,
        config.lead_scoring.clone(),
    ));

    let app = with_portal_routes(lead_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "agency portal service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
