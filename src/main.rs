//! Signal Monitor - a live control-signal dashboard
//!
//! Plots simulated MV and Output samples once per second for two plant orders,
//! with per-order loop mode, plant selection, capacitor discharge and PID
//! parameter fields.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use signal_monitor::app::DashboardApp;
use signal_monitor::settings::UserSettings;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let settings = UserSettings::load();
    let window_size = settings.window_size;

    // Configure native options
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_min_inner_size([900.0, 600.0])
            .with_title("Signal Monitor")
            .with_app_id("signal-monitor"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Signal Monitor",
        native_options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, settings)))),
    )
}
