use home_valuation::intake::{
    schema_keys, DragSignal, FileCandidate, FormField, FormSession, PricingMode,
    RecordingNotifier, SubmissionHandler, ValuationPayload,
};
use serde_json::{json, Value};
use std::collections::BTreeSet;
use std::sync::Arc;

fn recording_handler() -> (Arc<RecordingNotifier>, SubmissionHandler<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let handler = SubmissionHandler::new(notifier.clone());
    (notifier, handler)
}

fn key_set(payload: &ValuationPayload) -> BTreeSet<String> {
    let value = serde_json::to_value(payload).expect("payload serializes");
    value
        .as_object()
        .expect("payload is a JSON object")
        .keys()
        .cloned()
        .collect()
}

fn filled_session() -> FormSession {
    let mut session = FormSession::new();
    session.set_field(FormField::ReportedPrice, "410000");
    session.set_field(FormField::PurchaseMonth, "2019-04");
    session.set_field(FormField::StateRegion, "IA");
    session.set_field(FormField::City, "Des Moines");
    session.set_field(FormField::Address1, "500 Grand Ave");
    session.set_field(FormField::Beds, "4");
    session.set_field(FormField::Renovations, "finished basement");
    session
}

#[test]
fn payload_keys_match_schema_for_active_mode_only() {
    let mut session = filled_session();
    session.accept_candidate(FileCandidate::new("house.zip", 2048));

    for mode in PricingMode::ordered() {
        session.set_mode(mode);
        let payload = session.build_payload();
        let expected: BTreeSet<String> =
            schema_keys(mode).iter().map(|key| key.to_string()).collect();
        assert_eq!(key_set(&payload), expected, "mode {mode}");
    }
}

#[test]
fn building_twice_yields_identical_payloads() {
    let mut session = filled_session();
    session.set_mode(PricingMode::Lookup);
    session.accept_candidate(FileCandidate::new("house.zip", 2048));

    let first = session.build_payload();
    let second = session.build_payload();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
}

#[test]
fn candidate_acceptance_follows_lowercased_extension() {
    let names = [
        ("photos.zip", true),
        ("PHOTOS.ZIP", true),
        ("archive.Zip", true),
        (".zip", true),
        ("photos.rar", false),
        ("photos.zip.bak", false),
        ("photoszip", false),
        ("photos.tar.gz", false),
    ];

    for (name, expected) in names {
        let mut session = FormSession::new();
        session.accept_candidate(FileCandidate::new("previous.zip", 1));
        let accepted = session.accept_candidate(FileCandidate::new(name, 99));
        assert_eq!(accepted, expected, "candidate {name}");

        let selected = session.file_selection().map(|file| file.name.as_str());
        if expected {
            assert_eq!(selected, Some(name));
        } else {
            assert_eq!(selected, Some("previous.zip"));
        }
    }
}

#[test]
fn toggling_modes_preserves_both_field_groups() {
    let mut session = filled_session();
    let before_self = session.fields().self_reported().clone();
    let before_lookup = session.fields().lookup().clone();

    session.set_mode(PricingMode::Lookup);
    session.set_field(FormField::ZipCode, "50309");
    session.set_mode(PricingMode::SelfReported);

    assert_eq!(session.fields().self_reported(), &before_self);
    assert_eq!(session.fields().lookup().city, before_lookup.city);
    assert_eq!(session.field(FormField::ZipCode), "50309");
}

#[test]
fn self_reported_submission_without_file() {
    let (notifier, handler) = recording_handler();
    let mut session = FormSession::new();
    session.set_field(FormField::ReportedPrice, "525000");
    session.set_field(FormField::PurchaseMonth, "2021-06");
    session.set_field(FormField::Renovations, "");

    let payload = session.submit(&handler).expect("required inputs present");

    assert_eq!(
        serde_json::to_value(&payload).expect("serializes"),
        json!({
            "pricingMode": "self",
            "reportedPrice": "525000",
            "purchaseMonth": "2021-06",
            "renovations": "",
            "zipFileName": null
        })
    );
    assert_eq!(notifier.received(), vec![payload]);
}

#[test]
fn lookup_submission_keeps_original_file_casing() {
    let (notifier, handler) = recording_handler();
    let mut session = FormSession::new();
    session.set_mode(PricingMode::Lookup);
    for field in FormField::LOOKUP {
        session.set_field(field, "");
    }
    session.set_field(FormField::City, "San Francisco");
    session.set_field(FormField::ZipCode, "94103");
    assert!(session.accept_candidate(FileCandidate::new("photos.ZIP", 1_048_576)));

    let payload = session.submit(&handler).expect("lookup submits");
    let value = serde_json::to_value(&payload).expect("serializes");

    assert_eq!(value["zipFileName"], json!("photos.ZIP"));
    assert_eq!(value["city"], json!("San Francisco"));
    assert_eq!(value["zipCode"], json!("94103"));
    assert_eq!(value["country"], json!(""));
    let expected: BTreeSet<String> = schema_keys(PricingMode::Lookup)
        .iter()
        .map(|key| key.to_string())
        .collect();
    assert_eq!(key_set(&payload), expected);
    assert_eq!(notifier.len(), 1);
}

#[test]
fn rejected_rar_leaves_selection_untouched() {
    let mut session = FormSession::new();
    assert!(!session.accept_candidate(FileCandidate::new("photos.rar", 10)));
    assert!(session.file_selection().is_none());

    session.accept_candidate(FileCandidate::new("kept.zip", 10));
    assert!(!session.accept_candidate(FileCandidate::new("photos.rar", 10)));
    assert_eq!(
        session.file_selection(),
        Some(&FileCandidate::new("kept.zip", 10))
    );
}

#[test]
fn drop_clears_drag_indicator_whether_or_not_accepted() {
    let mut session = FormSession::new();

    let enter = session.handle_drag(DragSignal::Enter);
    assert!(enter.suppress_default);
    assert!(session.is_drag_active());

    let rejected = session.handle_drag(DragSignal::Drop(vec![FileCandidate::new("a.rar", 1)]));
    assert!(rejected.suppress_default);
    assert!(!rejected.accepted);
    assert!(!session.is_drag_active());

    session.handle_drag(DragSignal::Enter);
    session.handle_drag(DragSignal::Over);
    assert!(session.is_drag_active());
    let accepted = session.handle_drag(DragSignal::Drop(vec![FileCandidate::new("b.zip", 1)]));
    assert!(accepted.accepted);
    assert!(!session.is_drag_active());
    assert_eq!(session.file_label(), "b.zip • 0.00 MB");
}

#[test]
fn inactive_mode_values_never_leak_into_payload() {
    let mut session = filled_session();
    session.set_mode(PricingMode::Lookup);
    let value: Value = serde_json::to_value(session.build_payload()).expect("serializes");

    assert!(value.get("reportedPrice").is_none());
    assert!(value.get("purchaseMonth").is_none());
    assert_eq!(value["renovations"], json!("finished basement"));
    assert_eq!(value["houseType"], json!("Single Family"));
}
