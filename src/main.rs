use egui::ViewportBuilder;
use gridtool_core::GridToolApp;
use gridtool_core::platform::parameters::gui;

fn main() -> eframe::Result<()> {
    // RUST_LOG overrides the default filter
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("egui_file_dialog", log::LevelFilter::Warn)
        .init();

    log::info!("Starting {} v{}", gui::APPLICATION_NAME, gui::VERSION);

    eframe::run_native(
        gui::APPLICATION_NAME,
        eframe::NativeOptions {
            viewport: ViewportBuilder::default()
                .with_title(gui::APPLICATION_NAME)
                .with_inner_size([gui::VIEWPORT_X, gui::VIEWPORT_Y]),
            ..Default::default()
        },
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(GridToolApp::new()))
        }),
    )
}
