use app::DetectorApp;
use config::Config;
use file_picker::impl_rfd::FilePickerRfd;
use image_analyzer::impl_fake::FakeImageAnalyzer;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use std::sync::Arc;

mod analysis;
mod app;
mod config;
mod detector;
mod file_picker;
mod image_analyzer;
mod library;
mod selected_file;
mod ui;


fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let image_analyzer = Arc::new(FakeImageAnalyzer::new(
        logger.clone(),
        config.analysis_delay,
    ));

    let file_picker = Box::new(FilePickerRfd::new(logger.clone()));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    logger.info("Starting brain tumor detection UI")?;

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            Box::new(
                DetectorApp::new(config, logger, image_analyzer, file_picker)
                    .with_waker(&cc.egui_ctx),
            )
        }),
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
