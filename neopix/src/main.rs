//! Neopix - a minimal pixel art editor
//!
//! Click cells to paint them, pick a color, clear, and export a 32x32 PNG.

mod app;

use app::NeopixApp;
use eframe::NativeOptions;
use neopix::NeopixConfig;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = NeopixConfig::default();
    log::info!("starting {}", config.title);

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_resizable(false)
            .with_title(config.title.clone())
            .with_app_id(config.app_id.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Neopix",
        options,
        Box::new(|cc| {
            config.theme.apply(&cc.egui_ctx);
            Box::new(NeopixApp::new(cc, config))
        }),
    )
}
