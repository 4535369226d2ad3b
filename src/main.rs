// LogLens - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use loglens::app;
pub use loglens::core;
pub use loglens::ui;
pub use loglens::util;

use clap::Parser;
use std::path::PathBuf;

/// LogLens - Desktop log browser.
///
/// Point LogLens at a folder to list its .log files, view any of them, and
/// read the aggregate output.txt report from the same folder.
#[derive(Parser, Debug)]
#[command(name = "LogLens", version, about)]
struct Cli {
    /// Folder to scan on startup (use the Browse button if omitted).
    path: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LogLens starting"
    );

    let mut state = app::state::AppState::new(cli.debug);

    // A folder given on the CLI is scanned by the first frame's dispatch,
    // exactly as if the user had opened it through the header bar.
    if let Some(path) = cli.path {
        state.folder_input = path.display().to_string();
        state.pending_scan = Some(path);
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::LogLensApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch LogLens GUI: {e}");
        std::process::exit(1);
    }
}
