use crate::infra::{parse_field_assignment, parse_mode, ConsoleNotifier};
use clap::Args;
use home_valuation::error::AppError;
use home_valuation::intake::{
    DragSignal, FileCandidate, FormField, FormSession, PricingMode, SubmissionHandler,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Pricing mode to submit with: "self" or "lookup"
    #[arg(long, value_parser = parse_mode, default_value = "self")]
    pub(crate) mode: PricingMode,
    /// Field assignment such as reportedPrice=525000 (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_field_assignment)]
    pub(crate) assignments: Vec<(FormField, String)>,
    /// Photo bundle to attach; only its name and size are read
    #[arg(long)]
    pub(crate) zip: Option<PathBuf>,
    /// Offer the bundle as a drag-and-drop instead of through the picker
    #[arg(long)]
    pub(crate) drop: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let handler = SubmissionHandler::new(Arc::new(ConsoleNotifier));
    let session = fill_session(args)?;

    println!("Home valuation intake demo");
    println!("Pricing mode: {}", session.mode().label());
    for view in session.visible_fields() {
        let marker = if view.required { " *" } else { "" };
        println!("- {}{}: {}", view.label, marker, view.value);
    }
    println!("Photos: {}\n", session.file_label());

    session.submit(&handler)?;
    Ok(())
}

fn fill_session(args: DemoArgs) -> Result<FormSession, AppError> {
    let DemoArgs {
        mode,
        assignments,
        zip,
        drop,
    } = args;

    let mut session = FormSession::new();
    for (field, value) in assignments {
        session.set_field(field, value);
    }
    session.set_mode(mode);

    if let Some(path) = zip {
        let candidate = candidate_from_path(&path)?;
        let advisory = mime_guess::from_path(&path).first_or_octet_stream();
        println!("Offering {} ({advisory})", path.display());

        let accepted = if drop {
            session.handle_drag(DragSignal::Enter);
            session.handle_drag(DragSignal::Drop(vec![candidate])).accepted
        } else {
            session.pick([candidate])
        };
        if !accepted {
            println!("Ignored {}: only .zip bundles are accepted", path.display());
        }
    }

    Ok(session)
}

/// Reads only filesystem metadata; the archive itself is never opened.
fn candidate_from_path(path: &Path) -> Result<FileCandidate, AppError> {
    let size_bytes = fs::metadata(path)?.len();
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(FileCandidate::new(name, size_bytes))
}
