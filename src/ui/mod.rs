// LogLens - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (read-only models), egui, rfd.
// Must NOT depend on: core::scan or any direct file I/O.

pub mod panels;
pub mod theme;
