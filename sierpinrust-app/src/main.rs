mod app;
mod canvas;
mod input;
mod ui;

use eframe::egui;
use tracing::info;

use app::SierpinRustApp;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting SierpinRust");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SierpinRust")
            .with_inner_size([900.0, 780.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SierpinRust",
        options,
        Box::new(|cc| {
            egui_material_icons::initialize(&cc.egui_ctx);
            Ok(Box::new(SierpinRustApp::new()))
        }),
    )
}
