use home_valuation::config::IntakeConfig;
use home_valuation::intake::{
    parse_assignment, render_preview, FieldParseError, FormField, PayloadNotifier, PricingMode,
    SubmissionHandler, ValuationPayload,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) intake: IntakeConfig,
    pub(crate) submissions: SubmissionHandler<dyn PayloadNotifier>,
}

/// Prints the payload preview the way the web form shows it after submit.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ConsoleNotifier;

impl PayloadNotifier for ConsoleNotifier {
    fn notify(&self, payload: &ValuationPayload) {
        match render_preview(payload) {
            Ok(preview) => println!("{preview}"),
            Err(err) => warn!(%err, "unable to render payload preview"),
        }
    }
}

/// Logs each received payload and keeps nothing, so a long-running service
/// holds no per-request state.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TracingNotifier;

impl PayloadNotifier for TracingNotifier {
    fn notify(&self, payload: &ValuationPayload) {
        match serde_json::to_string(payload) {
            Ok(body) => info!(
                pricing_mode = %payload.pricing_mode(),
                %body,
                "valuation request received"
            ),
            Err(err) => warn!(%err, "unable to serialize received payload"),
        }
    }
}

pub(crate) fn service_notifier() -> Arc<dyn PayloadNotifier> {
    Arc::new(TracingNotifier)
}

pub(crate) fn parse_mode(raw: &str) -> Result<PricingMode, String> {
    raw.parse::<PricingMode>().map_err(|err| err.to_string())
}

pub(crate) fn parse_field_assignment(raw: &str) -> Result<(FormField, String), String> {
    parse_assignment(raw).map_err(|err: FieldParseError| err.to_string())
}
