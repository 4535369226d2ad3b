// LogLens - app/state.rs
//
// Application state management. One explicit struct owns everything the
// original tool kept as ambient UI globals: current folder, entry list,
// selection, and both pane contents.
// Owned by the eframe::App implementation.

use crate::core::model::{LogEntry, PaneContent};
use std::path::PathBuf;

/// Which main tab is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    LogFiles,
    Output,
}

/// Top-level application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Folder path as typed or browsed in the header entry box.
    pub folder_input: String,

    /// Folder the current entry list was scanned from (None before the
    /// first successful scan). Always in sync with `entries`.
    pub scan_path: Option<PathBuf>,

    /// Log files from the current scan, in traversal order. Replaced
    /// wholesale by each successful scan, never merged.
    pub entries: Vec<LogEntry>,

    /// Index into `entries` of the currently selected file.
    pub selected_index: Option<usize>,

    /// Content pane for the selected log file.
    pub log_pane: PaneContent,

    /// Content pane for the aggregate output file.
    pub aggregate_pane: PaneContent,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings from the current scan.
    pub warnings: Vec<String>,

    /// Active main tab.
    pub active_tab: Tab,

    /// Scan requested by the UI this frame; consumed by the dispatch loop.
    pub pending_scan: Option<PathBuf>,

    /// List selection made by the UI this frame; consumed by the dispatch loop.
    pub pending_selection: Option<usize>,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state.
    pub fn new(debug_mode: bool) -> Self {
        Self {
            status_message: "Ready. Select a folder to list its log files.".to_string(),
            debug_mode,
            ..Default::default()
        }
    }

    /// Currently selected entry, if any.
    pub fn selected_entry(&self) -> Option<&LogEntry> {
        self.selected_index.and_then(|idx| self.entries.get(idx))
    }
}
