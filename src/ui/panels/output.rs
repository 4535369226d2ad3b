// LogLens - ui/panels/output.rs
//
// Aggregate output pane: the root output.txt, the fixed placeholder, or an
// inline read error. Populated only by folder-selection actions.

use crate::app::state::AppState;
use crate::core::model::PaneContent;
use crate::ui::panels::content::show_text;

/// Render the aggregate output pane.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    match &state.aggregate_pane {
        PaneContent::Empty => {
            ui.centered_and_justified(|ui| {
                ui.label("Open a folder to load its output.txt.");
            });
        }
        PaneContent::Loaded(text) => show_text(ui, "aggregate_content", text, false),
        PaneContent::Error(message) => show_text(ui, "aggregate_content", message, true),
    }
}
