// LogLens - app/mod.rs
//
// Application layer: explicit state plus the action dispatch that bridges
// the UI to the pure core operations.

pub mod actions;
pub mod state;
