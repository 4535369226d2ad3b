// LogLens - ui/panels/header.rs
//
// Top control bar: folder path entry, Browse dialog, and the Open action.
//
// This panel writes `state.pending_scan`; gui.rs consumes it each frame.
// No direct scan calls from here (presentation boundary).

use crate::app::state::AppState;
use std::path::PathBuf;

/// Render the header bar.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label("Folder:");

        let input_width = (ui.available_width() - 170.0).max(120.0);
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.folder_input)
                .hint_text("Path to a folder containing .log files")
                .desired_width(input_width),
        );

        if ui
            .button("Browse\u{2026}")
            .on_hover_text("Browse for a folder")
            .clicked()
        {
            if let Some(path) = rfd::FileDialog::new().pick_folder() {
                state.folder_input = path.display().to_string();
                state.pending_scan = Some(path);
            }
        }

        let open_clicked = ui
            .button("Open")
            .on_hover_text("Scan the folder for .log files")
            .clicked();
        let enter_pressed =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (open_clicked || enter_pressed) && !state.folder_input.trim().is_empty() {
            state.pending_scan = Some(PathBuf::from(state.folder_input.trim()));
        }
    });
}
