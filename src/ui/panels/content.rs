// LogLens - ui/panels/content.rs
//
// Log content pane: the selected file's text, or an inline error message.
// Read-only view of AppState.

use crate::app::state::AppState;
use crate::core::model::PaneContent;
use crate::ui::theme;

/// Render the log content pane.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    match &state.log_pane {
        PaneContent::Empty => {
            ui.centered_and_justified(|ui| {
                ui.label("Select a log file to view its content.");
            });
        }
        PaneContent::Loaded(text) => show_text(ui, "log_content", text, false),
        PaneContent::Error(message) => show_text(ui, "log_content", message, true),
    }
}

/// Scrollable monospace text view shared by both content panes.
/// Unwrapped lines; horizontal and vertical scrolling.
pub fn show_text(ui: &mut egui::Ui, id: &str, text: &str, is_error: bool) {
    egui::ScrollArea::both()
        .id_salt(id)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let mut rich = egui::RichText::new(text).monospace();
            if is_error {
                rich = rich.color(theme::ERROR_TEXT);
            }
            ui.add(egui::Label::new(rich).extend());
        });
}
