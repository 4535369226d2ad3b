// LogLens - ui/theme.rs
//
// Colour and layout constants. No dependencies on app state or business logic.

use egui::Color32;

/// Inline error text colour (panes showing an error message).
pub const ERROR_TEXT: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Status bar text colour.
pub const STATUS_TEXT: Color32 = Color32::from_rgb(209, 213, 219); // Gray 300

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 260.0;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;
