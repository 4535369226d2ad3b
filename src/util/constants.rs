// LogLens - util/constants.rs
//
// Single source of truth for named constants and fixed user-facing strings.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogLens";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Scan
// =============================================================================

/// Filename suffix that marks a file as a log file.
pub const LOG_SUFFIX: &str = ".log";

/// Fixed aggregate report filename, looked up non-recursively in the
/// scanned root.
pub const AGGREGATE_FILE_NAME: &str = "output.txt";

/// Shown in the aggregate pane when the scanned root has no aggregate file.
pub const NO_AGGREGATE_MESSAGE: &str = "No output.txt found in the selected folder.";

/// Status line shown when a scan matches zero log files. Informational only;
/// an empty scan is still a successful scan.
pub const NO_LOGS_MESSAGE: &str = "No .log files found in the selected folder.";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
