// LogLens - app/actions.rs
//
// Explicit dispatch functions for the two user actions. The UI panels only
// record pending requests on AppState; gui.rs calls these once per frame.
// Both run synchronously to completion on the calling thread — one scan or
// one load in flight at a time, never both.

use crate::app::state::AppState;
use crate::core::model::PaneContent;
use crate::core::scan;
use crate::util::constants;
use std::path::PathBuf;

/// Handle a folder selection: run one scan and replace the entry list,
/// selection, and both panes wholesale.
///
/// On `InvalidFolder` nothing but the status message changes, so the
/// displayed entry list and the folder it was derived from stay in sync.
pub fn open_folder(state: &mut AppState, path: PathBuf) {
    match scan::scan_folder(&path) {
        Ok(outcome) => {
            state.status_message = if outcome.entries.is_empty() {
                constants::NO_LOGS_MESSAGE.to_string()
            } else {
                format!("{} log file(s) found.", outcome.entries.len())
            };
            tracing::info!(
                folder = %path.display(),
                entries = outcome.entries.len(),
                warnings = outcome.warnings.len(),
                "Folder scanned"
            );
            state.scan_path = Some(path);
            state.entries = outcome.entries;
            state.selected_index = None;
            state.log_pane = PaneContent::Empty;
            state.aggregate_pane = outcome.aggregate;
            state.warnings = outcome.warnings;
        }
        Err(e) => {
            tracing::warn!(error = %e, "Folder scan rejected");
            state.status_message = e.to_string();
        }
    }
}

/// Handle a list selection: load that entry's full text into the log pane.
///
/// Replace-on-error policy: a failed read replaces the pane with the error
/// message rather than leaving stale content from the previous selection.
/// The entry list itself is unaffected by a failed load.
pub fn select_entry(state: &mut AppState, index: usize) {
    let Some(entry) = state.entries.get(index) else {
        tracing::debug!(index, "Selection out of range, ignoring");
        return;
    };
    state.selected_index = Some(index);
    match scan::load_log_content(&entry.path) {
        Ok(text) => {
            state.status_message = format!("Loaded {}.", entry.display_name);
            state.log_pane = PaneContent::Loaded(text);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Log file read failed");
            state.status_message = e.to_string();
            state.log_pane = PaneContent::Error(e.to_string());
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
