mod controller;
mod ui;

use controller::session::DashboardSession;
use dashboard_core::load_settings;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use ui::DashboardApp;

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> eframe::Result<()> {
    let (settings, config_error) = load_settings();
    init_tracing(&settings.log_filter);
    if let Some(err) = config_error {
        tracing::warn!("ignoring dashboard config: {err:#}");
    }
    tracing::info!(seed = ?settings.rng_seed, "starting audit dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Audit Dashboard")
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Audit Dashboard",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(DashboardApp::new(DashboardSession::bootstrap(
                settings,
            ))))
        }),
    )
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
