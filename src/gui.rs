// LogLens - gui.rs
//
// Top-level eframe::App implementation.
// Consumes the pending requests the panels record on AppState and dispatches
// them to app::actions — the panels never call the core directly.

use crate::app::actions;
use crate::app::state::{AppState, Tab};
use crate::ui;

/// The LogLens application.
pub struct LogLensApp {
    pub state: AppState,
}

impl LogLensApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LogLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Dispatch requests recorded by the panels. Only one user action is
        // ever pending per frame; each runs to completion before rendering.
        if let Some(path) = self.state.pending_scan.take() {
            actions::open_folder(&mut self.state, path);
        }
        if let Some(index) = self.state.pending_selection.take() {
            actions::select_entry(&mut self.state, index);
        }

        // Header: folder entry + tab strip.
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui::panels::header::render(ui, &mut self.state);
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.state.active_tab, Tab::LogFiles, "Log Files");
                ui.selectable_value(&mut self.state.active_tab, Tab::Output, "Output Viewer");
            });
            ui.add_space(2.0);
        });

        // Status bar.
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.state.status_message)
                            .color(ui::theme::STATUS_TEXT),
                    );
                    if !self.state.warnings.is_empty() {
                        ui.separator();
                        ui.label(format!("{} warning(s)", self.state.warnings.len()))
                            .on_hover_text(self.state.warnings.join("\n"));
                    }
                });
            });

        // Main area: list + content split, or the aggregate viewer.
        match self.state.active_tab {
            Tab::LogFiles => {
                egui::SidePanel::left("file_list")
                    .default_width(ui::theme::SIDEBAR_WIDTH)
                    .show(ctx, |ui| {
                        ui::panels::file_list::render(ui, &mut self.state);
                    });
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui::panels::content::render(ui, &self.state);
                });
            }
            Tab::Output => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui::panels::output::render(ui, &self.state);
                });
            }
        }
    }
}
