// LogLens - core/mod.rs
//
// Pure core: the data model plus the two filesystem operations
// (folder scan, content load). No UI toolkit dependencies.

pub mod model;
pub mod scan;
