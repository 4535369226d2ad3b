// LogLens - core/model.rs
//
// Core data model shared between the scanner, app state, and UI.

use std::path::PathBuf;

/// One discovered log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Path relative to the scanned root, used as the list display name.
    pub display_name: String,

    /// Absolute path used for content loading.
    pub path: PathBuf,
}

/// Content of one display pane.
///
/// The two panes (selected log, aggregate output) are independent. Each
/// transitions only on its own triggering action — folder selection for the
/// aggregate pane, list selection for the log pane — and is fully replaced
/// on every transition, never appended to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaneContent {
    /// Nothing displayed yet.
    #[default]
    Empty,

    /// File content (or the fixed placeholder), displayed as-is.
    Loaded(String),

    /// A human-readable error message displayed in place of content.
    Error(String),
}

impl PaneContent {
    /// Text to render, regardless of state.
    pub fn text(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Loaded(s) | Self::Error(s) => s,
        }
    }

    /// True when the pane shows an error message rather than content.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Everything one folder scan produces.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Discovered log files in traversal order (depth-first, name-sorted
    /// within each directory).
    pub entries: Vec<LogEntry>,

    /// Aggregate pane content: the root output.txt text, the fixed
    /// placeholder when absent, or an inline error message when unreadable.
    pub aggregate: PaneContent,

    /// Non-fatal per-entry access failures encountered during traversal.
    pub warnings: Vec<String>,
}
