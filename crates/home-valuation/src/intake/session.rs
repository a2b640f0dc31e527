use chrono::NaiveDate;
use tracing::debug;

use super::domain::{FormField, PricingMode};
use super::fields::FormFieldStore;
use super::files::{DragResponse, DragSignal, FileCandidate, FileSelection, FileSelector};
use super::mode::ModeController;
use super::payload::ValuationPayload;
use super::submission::{PayloadNotifier, SubmissionHandler};
use super::view::{visible_fields, FieldView};

/// One intake form for the lifetime of a user session.
///
/// The session is the form layer: it owns the required-input gate that runs
/// before a payload is built, mirroring what a browser does for inputs marked
/// `required`. Payload construction itself stays infallible.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    mode: ModeController,
    fields: FormFieldStore,
    files: FileSelector,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> PricingMode {
        self.mode.mode()
    }

    pub fn set_mode(&mut self, mode: PricingMode) -> bool {
        self.mode.set_mode(mode)
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set_field(field, value);
    }

    pub fn field(&self, field: FormField) -> &str {
        self.fields.field(field)
    }

    pub fn fields(&self) -> &FormFieldStore {
        &self.fields
    }

    pub fn accept_candidate(&mut self, candidate: FileCandidate) -> bool {
        self.files.accept_candidate(candidate)
    }

    pub fn pick<I>(&mut self, files: I) -> bool
    where
        I: IntoIterator<Item = FileCandidate>,
    {
        self.files.pick(files)
    }

    pub fn handle_drag(&mut self, signal: DragSignal) -> DragResponse {
        self.files.handle_drag(signal)
    }

    pub fn is_drag_active(&self) -> bool {
        self.files.is_drag_active()
    }

    pub fn file_selection(&self) -> Option<&FileSelection> {
        self.files.selection()
    }

    pub fn file_label(&self) -> String {
        self.files.label()
    }

    pub fn visible_fields(&self) -> Vec<FieldView<'_>> {
        visible_fields(self.mode(), &self.fields)
    }

    /// Checks the active mode's required inputs.
    pub fn check_required(&self) -> Result<(), SubmissionBlocked> {
        let mode = self.mode();
        let missing: Vec<FormField> = FormField::for_mode(mode)
            .iter()
            .chain(FormField::SHARED.iter())
            .copied()
            .filter(|field| field.is_required() && self.field(*field).trim().is_empty())
            .collect();

        if !missing.is_empty() {
            return Err(SubmissionBlocked::MissingRequired { fields: missing });
        }

        if mode == PricingMode::SelfReported {
            let month = self.field(FormField::PurchaseMonth);
            if !is_month_value(month) {
                return Err(SubmissionBlocked::InvalidMonth {
                    value: month.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Builds the payload from the current state without checking inputs.
    pub fn build_payload(&self) -> ValuationPayload {
        ValuationPayload::build(
            self.mode(),
            self.fields.self_reported(),
            self.fields.lookup(),
            self.fields.shared(),
            self.files.selection(),
        )
    }

    /// Runs the required-input gate, then builds and hands off the payload.
    pub fn submit<N>(
        &self,
        handler: &SubmissionHandler<N>,
    ) -> Result<ValuationPayload, SubmissionBlocked>
    where
        N: PayloadNotifier + ?Sized,
    {
        if let Err(blocked) = self.check_required() {
            debug!(%blocked, "submission withheld");
            return Err(blocked);
        }

        let payload = self.build_payload();
        handler.submit(&payload);
        Ok(payload)
    }
}

/// A submission the form refused to send.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionBlocked {
    #[error("required fields missing: {}", join_keys(.fields))]
    MissingRequired { fields: Vec<FormField> },
    #[error("purchaseMonth must be YYYY-MM, got '{value}'")]
    InvalidMonth { value: String },
}

fn join_keys(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Exactly `YYYY-MM`: four digits, a dash, two digits, month 01 to 12.
fn is_month_value(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 7
        && bytes[4] == b'-'
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[5..].iter().all(u8::is_ascii_digit);
    shaped && NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::submission::RecordingNotifier;
    use std::sync::Arc;

    fn handler() -> (Arc<RecordingNotifier>, SubmissionHandler<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let handler = SubmissionHandler::new(notifier.clone());
        (notifier, handler)
    }

    #[test]
    fn self_mode_submission_requires_price_and_month() {
        let (notifier, handler) = handler();
        let mut session = FormSession::new();
        session.set_field(FormField::ReportedPrice, "   ");

        match session.submit(&handler) {
            Err(SubmissionBlocked::MissingRequired { fields }) => assert_eq!(
                fields,
                vec![FormField::ReportedPrice, FormField::PurchaseMonth]
            ),
            other => panic!("expected missing fields, got {other:?}"),
        }
        assert!(notifier.is_empty());
    }

    #[test]
    fn malformed_month_is_withheld() {
        let (notifier, handler) = handler();
        let mut session = FormSession::new();
        session.set_field(FormField::ReportedPrice, "525000");

        for bad in [
            "2021-13",
            "2021-00",
            "June 2021",
            "2021-6",
            "2021/06",
            "2021- 6",
            "+202-06",
            " 2021-06 ",
        ] {
            session.set_field(FormField::PurchaseMonth, bad);
            assert_eq!(
                session.submit(&handler),
                Err(SubmissionBlocked::InvalidMonth {
                    value: bad.to_string()
                })
            );
        }
        assert!(notifier.is_empty());
    }

    #[test]
    fn well_formed_month_is_sent_verbatim() {
        let (notifier, handler) = handler();
        let mut session = FormSession::new();
        session.set_field(FormField::ReportedPrice, "1");
        session.set_field(FormField::PurchaseMonth, "2021-06");

        let payload = session.submit(&handler).expect("month is YYYY-MM");
        match &payload {
            ValuationPayload::SelfReported(body) => assert_eq!(body.purchase_month, "2021-06"),
            other => panic!("expected self payload, got {other:?}"),
        }
        assert_eq!(notifier.len(), 1);
    }

    #[test]
    fn lookup_mode_submits_with_everything_blank() {
        let (notifier, handler) = handler();
        let mut session = FormSession::new();
        session.set_mode(PricingMode::Lookup);
        for field in FormField::LOOKUP {
            session.set_field(field, "");
        }

        let payload = session.submit(&handler).expect("lookup has no required fields");
        assert_eq!(payload.pricing_mode(), PricingMode::Lookup);
        assert_eq!(notifier.received(), vec![payload]);
    }

    #[test]
    fn blocked_message_names_the_missing_keys() {
        let blocked = SubmissionBlocked::MissingRequired {
            fields: vec![FormField::PurchaseMonth],
        };
        assert_eq!(blocked.to_string(), "required fields missing: purchaseMonth");
    }

    #[test]
    fn payload_reflects_latest_edits_and_file() {
        let mut session = FormSession::new();
        session.set_field(FormField::ReportedPrice, "1");
        session.set_field(FormField::ReportedPrice, "2");
        session.set_field(FormField::PurchaseMonth, "2020-01");
        session.accept_candidate(FileCandidate::new("a.zip", 1));
        session.accept_candidate(FileCandidate::new("b.zip", 1));

        let payload = session.build_payload();
        assert_eq!(payload.zip_file_name(), Some("b.zip"));
        match payload {
            ValuationPayload::SelfReported(body) => assert_eq!(body.reported_price, "2"),
            other => panic!("expected self payload, got {other:?}"),
        }
    }
}
