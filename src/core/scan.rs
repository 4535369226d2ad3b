// LogLens - core/scan.rs
//
// Folder scanner and content loader: the two pure core operations consumed
// by the app layer on user actions.
//
// Traversal uses `walkdir` with `sort_by_file_name` so the entry order is
// deterministic (depth-first, alphabetical within each directory) on every
// platform and filesystem.
//
// Per-entry I/O errors during traversal are non-fatal and collected as
// warnings; only an invalid root aborts a scan.

use crate::core::model::{LogEntry, PaneContent, ScanOutcome};
use crate::util::constants;
use crate::util::error::{ReadError, ScanError};
use std::fs;
use std::path::Path;

/// Scan `root` recursively for log files and load the aggregate file.
///
/// # Non-fatal errors
/// Entries that cannot be accessed during traversal are recorded as
/// human-readable strings in `ScanOutcome::warnings` and do NOT cause the
/// function to return `Err`. An absent aggregate file becomes the fixed
/// placeholder; an unreadable one becomes inline error text. Zero matches
/// is a valid, empty result.
///
/// # Fatal errors
/// Returns `Err(ScanError::InvalidFolder)` only when `root` does not exist
/// or is not a directory. The caller must leave its prior state untouched
/// in that case so the displayed entry list and the folder it came from
/// stay in sync.
pub fn scan_folder(root: &Path) -> Result<ScanOutcome, ScanError> {
    let is_dir = fs::metadata(root).map(|m| m.is_dir()).unwrap_or(false);
    if !is_dir {
        return Err(ScanError::InvalidFolder {
            path: root.to_path_buf(),
        });
    }

    tracing::debug!(root = %root.display(), "Scan starting");

    let mut entries: Vec<LogEntry> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    let walker = walkdir::WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                // Inaccessible entry: non-fatal, record warning and continue.
                let path_str = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<unknown>".to_string());
                let msg = format!("Cannot access '{path_str}': {e}");
                tracing::debug!(warning = %msg, "Scan warning");
                warnings.push(msg);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let is_log = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(constants::LOG_SUFFIX));
        if !is_log {
            continue;
        }

        // strip_prefix cannot fail for entries yielded by a walk rooted at
        // `root`; fall back to the full path rather than dropping the entry.
        let display_name = path
            .strip_prefix(root)
            .unwrap_or(path)
            .display()
            .to_string();

        entries.push(LogEntry {
            display_name,
            path: path.to_path_buf(),
        });
    }

    let aggregate = read_aggregate(root);

    tracing::debug!(
        entries = entries.len(),
        warnings = warnings.len(),
        "Scan complete"
    );

    Ok(ScanOutcome {
        entries,
        aggregate,
        warnings,
    })
}

/// Load the aggregate file from the scanned root (non-recursive lookup).
///
/// Always yields displayable pane content: the file text, the fixed
/// placeholder when the file is absent, or an inline error message when it
/// exists but cannot be read. Never fatal to the enclosing scan.
fn read_aggregate(root: &Path) -> PaneContent {
    let path = root.join(constants::AGGREGATE_FILE_NAME);
    if !path.is_file() {
        return PaneContent::Loaded(constants::NO_AGGREGATE_MESSAGE.to_string());
    }
    match fs::read_to_string(&path) {
        Ok(text) => PaneContent::Loaded(text),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Aggregate file unreadable");
            PaneContent::Error(format!(
                "Error reading {}:\n{e}",
                constants::AGGREGATE_FILE_NAME
            ))
        }
    }
}

/// Read the full UTF-8 text of one previously discovered log file.
///
/// The content is returned unmodified. The file handle is scoped to this
/// call and released on all exit paths.
pub fn load_log_content(path: &Path) -> Result<String, ReadError> {
    fs::read_to_string(path).map_err(|source| ReadError {
        path: path.to_path_buf(),
        source,
    })
}

// =============================================================================
// Tests
// =============================================================================
