//! Property intake form: two pricing modes, an optional photo bundle, and the
//! normalized request handed to the valuation service.

pub mod domain;
pub mod fields;
pub mod files;
mod mode;
pub mod payload;
mod session;
pub mod submission;
pub mod view;

pub use domain::{
    parse_assignment, FieldGroup, FieldParseError, FormField, InputKind, PricingMode,
    DEFAULT_COUNTRY, HOUSE_TYPES,
};
pub use fields::{FormFieldStore, LookupModeFields, SelfModeFields, SharedFields};
pub use files::{
    DragResponse, DragSignal, FileCandidate, FileSelection, FileSelector, ACCEPT_HINT,
    ADVERTISED_LIMIT_MB,
};
pub use mode::ModeController;
pub use payload::{schema_keys, LookupPayload, SelfReportedPayload, ValuationPayload};
pub use session::{FormSession, SubmissionBlocked};
pub use submission::{render_preview, PayloadNotifier, RecordingNotifier, SubmissionHandler};
pub use view::{visible_fields, FieldView};
