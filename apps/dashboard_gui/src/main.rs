mod config;
mod controller;
mod ui;

use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::ui::DashboardApp;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = config::load_settings();
    tracing::info!(
        locale = %settings.locale,
        sort_field = %settings.initial_sort_field,
        dataset = ?settings.dataset_path,
        "starting people dashboard"
    );
    let app = DashboardApp::from_settings(&settings)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&settings.window_title)
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|err| anyhow::anyhow!("dashboard window failed: {err}"))
}
