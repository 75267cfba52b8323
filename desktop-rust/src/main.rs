mod app;
mod io;
mod model;
mod tree;

use app::{configure_fonts, DesktopApp};
use docscan_common::Config;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load_or_default();
    tracing::info!(endpoint = %config.endpoint(), "starting desktop app");
    let app = DesktopApp::new(&config)?;

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "DocScan",
        options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            Box::new(app)
        }),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
}
