use std::sync::{Arc, Mutex};

use tracing::info;

use super::payload::ValuationPayload;

const PREVIEW_HEADER: &str = "Form submitted.\n\nPayload (preview):\n";

/// Receives built payloads. Production adapters transmit them to the
/// valuation service; the bundled ones only display or record them.
pub trait PayloadNotifier: Send + Sync {
    fn notify(&self, payload: &ValuationPayload);
}

/// Hands each submitted payload to the configured notifier.
pub struct SubmissionHandler<N: ?Sized> {
    notifier: Arc<N>,
}

impl<N> SubmissionHandler<N>
where
    N: PayloadNotifier + ?Sized,
{
    pub fn new(notifier: Arc<N>) -> Self {
        Self { notifier }
    }

    pub fn submit(&self, payload: &ValuationPayload) {
        info!(
            pricing_mode = %payload.pricing_mode(),
            zip_file = payload.zip_file_name().unwrap_or("none"),
            "valuation request submitted"
        );
        self.notifier.notify(payload);
    }
}

impl<N: ?Sized> Clone for SubmissionHandler<N> {
    fn clone(&self) -> Self {
        Self {
            notifier: Arc::clone(&self.notifier),
        }
    }
}

/// Text shown to the user after a submission.
pub fn render_preview(payload: &ValuationPayload) -> Result<String, serde_json::Error> {
    let body = serde_json::to_string_pretty(payload)?;
    Ok(format!("{PREVIEW_HEADER}{body}"))
}

/// Keeps every payload in memory for later inspection.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    received: Arc<Mutex<Vec<ValuationPayload>>>,
}

impl RecordingNotifier {
    pub fn received(&self) -> Vec<ValuationPayload> {
        self.received
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn len(&self) -> usize {
        self.received
            .lock()
            .map(|guard| guard.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PayloadNotifier for RecordingNotifier {
    fn notify(&self, payload: &ValuationPayload) {
        let mut guard = self
            .received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.push(payload.clone());
    }
}
