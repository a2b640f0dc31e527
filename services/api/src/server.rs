use crate::cli::ServeArgs;
use crate::infra::{service_notifier, AppState};
use crate::routes::router;
use axum_prometheus::PrometheusMetricLayer;
use home_valuation::config::AppConfig;
use home_valuation::error::AppError;
use home_valuation::intake::SubmissionHandler;
use home_valuation::telemetry;
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

    // Stand-in for the valuation backend until a transmitting adapter exists.
    let notifier = service_notifier();
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        intake: config.intake.clone(),
        submissions: SubmissionHandler::new(notifier),
    };

    let app = router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "valuation intake service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
