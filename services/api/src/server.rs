use crate::cli::ServeArgs;
use crate::infra::{load_snapshot, AppState};
use crate::routes::dashboard_router;
use axum_prometheus::PrometheusMetricLayer;
use office_dash::config::AppConfig;
use office_dash::error::AppError;
use office_dash::telemetry;
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

    let snapshot = load_snapshot(config.data.snapshot_path.as_deref())?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        snapshot: Arc::new(snapshot),
    };

    let app = dashboard_router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "office dashboard service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
