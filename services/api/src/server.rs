use crate::cli::ServeArgs;
use crate::infra::{planning_service, AppState, InMemoryTripSink};
use crate::routes::with_planning_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use route_policy::config::AppConfig;
use route_policy::error::AppError;
use route_policy::telemetry;
use std::sync::atomic::Ordering;
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let sink = Arc::new(InMemoryTripSink::default());
    let planning = Arc::new(planning_service(config.policy.clone(), sink));

    let app = with_planning_routes(planning)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        large_trailer_threshold_ft = config.policy.large_trailer_threshold_ft,
        max_routes_per_mode = config.policy.max_routes_per_mode,
        "route policy service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
