// LogLens - tests/e2e_scan.rs
//
// End-to-end tests for the scan-then-load flow.
//
// These tests exercise the real filesystem and real walkdir traversal —
// no mocks, no stubs. This covers the full path from a folder on disk to
// the entry list and pane content a user would see.

use loglens::app::actions::{open_folder, select_entry};
use loglens::app::state::AppState;
use loglens::core::model::PaneContent;
use loglens::core::scan::{load_log_content, scan_folder};
use loglens::util::constants;
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Build the reference tree: `a/x.log`, `a/b/y.log`, `z.txt`, `output.txt`.
fn make_reference_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();

    let ab = root.join("a").join("b");
    fs::create_dir_all(&ab).expect("mkdir a/b");
    fs::write(root.join("a").join("x.log"), "x content\n").expect("write x.log");
    fs::write(ab.join("y.log"), "y content\n").expect("write y.log");
    fs::write(root.join("z.txt"), "not a log\n").expect("write z.txt");
    fs::write(root.join("output.txt"), "done").expect("write output.txt");

    dir
}

/// Platform-neutral relative display name.
fn rel(components: &[&str]) -> String {
    components.iter().collect::<PathBuf>().display().to_string()
}

// =============================================================================
// Core E2E
// =============================================================================

/// The reference scenario: two entries with relative names and the
/// aggregate text "done".
#[test]
fn e2e_reference_tree_scan() {
    let dir = make_reference_tree();
    let outcome = scan_folder(dir.path()).unwrap();

    let names: Vec<_> = outcome
        .entries
        .iter()
        .map(|e| e.display_name.clone())
        .collect();
    assert_eq!(names.len(), 2, "only the two .log files, got {names:?}");
    assert!(names.contains(&rel(&["a", "x.log"])));
    assert!(names.contains(&rel(&["a", "b", "y.log"])));
    assert_eq!(outcome.aggregate, PaneContent::Loaded("done".to_string()));
}

/// Every path a scan returns exists under the root, ends with .log, and
/// loads back byte-for-byte.
#[test]
fn e2e_scan_paths_load_exactly() {
    let dir = make_reference_tree();
    let outcome = scan_folder(dir.path()).unwrap();

    for entry in &outcome.entries {
        assert!(entry.path.starts_with(dir.path()));
        assert!(entry.path.exists());
        let expected = fs::read_to_string(&entry.path).unwrap();
        assert_eq!(load_log_content(&entry.path).unwrap(), expected);
    }
}

// =============================================================================
// Full user flow through AppState
// =============================================================================

/// Select folder -> list populated -> select entry -> content shown ->
/// select another entry -> content replaced.
#[test]
fn e2e_full_user_flow() {
    let dir = make_reference_tree();
    let mut state = AppState::new(false);

    open_folder(&mut state, dir.path().to_path_buf());
    assert_eq!(state.entries.len(), 2);
    assert_eq!(state.log_pane, PaneContent::Empty);
    assert_eq!(state.aggregate_pane, PaneContent::Loaded("done".to_string()));
    assert_eq!(state.status_message, "2 log file(s) found.");

    select_entry(&mut state, 0);
    let first = state.log_pane.clone();
    assert!(matches!(first, PaneContent::Loaded(_)));

    select_entry(&mut state, 1);
    assert!(matches!(state.log_pane, PaneContent::Loaded(_)));
    assert_ne!(state.log_pane, first, "second selection replaces the first");
}

/// A rejected folder selection leaves the previous session fully intact.
#[test]
fn e2e_invalid_folder_keeps_previous_session() {
    let dir = make_reference_tree();
    let mut state = AppState::new(false);
    open_folder(&mut state, dir.path().to_path_buf());
    select_entry(&mut state, 0);

    let entries_before = state.entries.clone();
    let pane_before = state.log_pane.clone();
    open_folder(&mut state, PathBuf::from("/nonexistent/loglens-e2e"));

    assert_eq!(state.scan_path.as_deref(), Some(dir.path()));
    assert_eq!(state.entries, entries_before);
    assert_eq!(state.log_pane, pane_before);
}

/// A file deleted between scan and load surfaces as an inline pane error,
/// with no panic and no change to the entry list.
#[test]
fn e2e_deleted_file_shows_read_error() {
    let dir = make_reference_tree();
    let mut state = AppState::new(false);
    open_folder(&mut state, dir.path().to_path_buf());

    let victim = state.entries[0].path.clone();
    fs::remove_file(&victim).unwrap();
    select_entry(&mut state, 0);

    assert!(state.log_pane.is_error());
    assert_eq!(state.entries.len(), 2);
}

/// A folder with no logs and no aggregate still scans successfully, with
/// the informational status and the fixed placeholder.
#[test]
fn e2e_empty_folder_is_informational() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::new(false);

    open_folder(&mut state, dir.path().to_path_buf());

    assert!(state.entries.is_empty());
    assert_eq!(state.status_message, constants::NO_LOGS_MESSAGE);
    assert_eq!(
        state.aggregate_pane,
        PaneContent::Loaded(constants::NO_AGGREGATE_MESSAGE.to_string())
    );
}
