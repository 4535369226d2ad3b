// LogLens - ui/panels/mod.rs
//
// Individual UI panels, one module per region of the window.

pub mod content;
pub mod file_list;
pub mod header;
pub mod output;
