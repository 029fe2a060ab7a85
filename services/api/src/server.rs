use crate::cli::ServeArgs;
use crate::infra::{load_store, lodging_state, AppState};
use crate::routes::with_lodging_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use event_lodging::config::AppConfig;
use event_lodging::error::AppError;
use event_lodging::telemetry;
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
    if let Some(seed) = args.seed.take() {
        config.catalog.seed_path = Some(seed);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = load_store(config.catalog.seed_path.as_deref())?;
    let app = with_lodging_routes(lodging_state(store))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(%addr, seed = ?config.catalog.seed_path, "hotel lookup service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
