// LogLens - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every error keeps the path it relates
// to so diagnostic logging stays actionable.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal scan failure: the requested root cannot be scanned at all.
///
/// Everything else that can go wrong during a scan (unreadable entries,
/// missing or unreadable aggregate file, zero matches) is recovered locally
/// and surfaced as pane text or warnings, never as an `Err`.
#[derive(Debug)]
pub enum ScanError {
    /// The supplied path does not exist or is not a directory.
    InvalidFolder { path: PathBuf },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFolder { path } => write!(
                f,
                "'{}' does not exist or is not a folder. Please select a valid folder.",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ScanError {}

/// A selected log file could not be read (permissions, deletion between
/// scan and load, invalid UTF-8).
#[derive(Debug)]
pub struct ReadError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not read file '{}': {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
