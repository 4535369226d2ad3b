// LogLens - ui/panels/file_list.rs
//
// Left sidebar: the discovered log files by relative name, in scan order.
//
// This panel writes `state.pending_selection`; gui.rs consumes it each frame.

use crate::app::state::AppState;

/// Render the log file list.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(egui::RichText::new(format!("Log files ({})", state.entries.len())).strong());
    ui.separator();

    if state.entries.is_empty() {
        ui.label("No log files. Open a folder to scan.");
        return;
    }

    let mut clicked: Option<usize> = None;
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (idx, entry) in state.entries.iter().enumerate() {
                let selected = state.selected_index == Some(idx);
                let response = ui.selectable_label(
                    selected,
                    egui::RichText::new(&entry.display_name).monospace(),
                );
                if response.clicked() {
                    clicked = Some(idx);
                }
            }
        });

    if clicked.is_some() {
        state.pending_selection = clicked;
    }
}
