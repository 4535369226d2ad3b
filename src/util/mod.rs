// LogLens - util/mod.rs
//
// Shared utilities: constants, error types, logging setup.

pub mod constants;
pub mod error;
pub mod logging;
