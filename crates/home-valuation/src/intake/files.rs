use serde::{Deserialize, Serialize};
use tracing::debug;

/// Advisory hint for pickers; acceptance only looks at the extension.
pub const ACCEPT_HINT: &str = ".zip,application/zip";

pub const EMPTY_DROPZONE_LABEL: &str = "Drag & drop .zip with photos, or click to choose";

/// Upload size advertised next to the drop zone. Not enforced.
pub const ADVERTISED_LIMIT_MB: u32 = 500;

const ACCEPTED_EXTENSION: &str = ".zip";

/// Metadata of a file offered by a drop or the picker dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileCandidate {
    pub name: String,
    pub size_bytes: u64,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    pub fn is_zip(&self) -> bool {
        self.name.to_lowercase().ends_with(ACCEPTED_EXTENSION)
    }
}

/// The accepted photo bundle. Contents are never read.
pub type FileSelection = FileCandidate;

/// Drag gestures over the drop zone, stripped of any windowing event model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSignal {
    Enter,
    Over,
    Leave,
    /// Files carried by the drop, in the order the platform reported them.
    Drop(Vec<FileCandidate>),
}

/// What the presentation layer should do after a drag signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragResponse {
    /// Always true: the platform must never open or navigate to a dragged file.
    pub suppress_default: bool,
    pub accepted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelector {
    selection: Option<FileSelection>,
    drag_active: bool,
}

impl FileSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection when the name ends in `.zip` (any case).
    /// Anything else is ignored and the previous selection stays.
    pub fn accept_candidate(&mut self, candidate: FileCandidate) -> bool {
        if !candidate.is_zip() {
            debug!(name = %candidate.name, "ignoring non-zip candidate");
            return false;
        }

        debug!(
            name = %candidate.name,
            size_bytes = candidate.size_bytes,
            "photo bundle selected"
        );
        self.selection = Some(candidate);
        true
    }

    /// Picker dialog result. Only the first chosen file is considered.
    pub fn pick<I>(&mut self, files: I) -> bool
    where
        I: IntoIterator<Item = FileCandidate>,
    {
        match files.into_iter().next() {
            Some(candidate) => self.accept_candidate(candidate),
            None => false,
        }
    }

    pub fn handle_drag(&mut self, signal: DragSignal) -> DragResponse {
        let accepted = match signal {
            DragSignal::Enter => {
                self.drag_active = true;
                false
            }
            DragSignal::Over => false,
            DragSignal::Leave => {
                self.drag_active = false;
                false
            }
            DragSignal::Drop(files) => {
                self.drag_active = false;
                self.pick(files)
            }
        };

        DragResponse {
            suppress_default: true,
            accepted,
        }
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn selection(&self) -> Option<&FileSelection> {
        self.selection.as_ref()
    }

    pub fn label(&self) -> String {
        match &self.selection {
            Some(file) => format!("{} • {}", file.name, format_megabytes(file.size_bytes)),
            None => EMPTY_DROPZONE_LABEL.to_string(),
        }
    }
}

fn format_megabytes(size_bytes: u64) -> String {
    let megabytes = size_bytes as f64 / (1024.0 * 1024.0);
    format!("{megabytes:.2} MB")
}
