use crate::config::Config;
use crate::detector::core::Event;
use crate::detector::main::Detector;
use crate::file_picker::interface::FilePicker;
use crate::image_analyzer::interface::ImageAnalyzer;
use crate::library::logger::interface::Logger;
use crate::ui::prediction_panel::prediction_view;
use crate::ui::upload_widget::{UploadAction, UploadWidget};
use crate::ui::{feature_panel, prediction_panel};
use egui::Color32;
use std::sync::Arc;

pub struct DetectorApp {
    config: Config,
    detector: Detector,
    upload_widget: UploadWidget,
    file_picker: Box<dyn FilePicker>,
}

impl DetectorApp {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        image_analyzer: Arc<dyn ImageAnalyzer + Send + Sync>,
        file_picker: Box<dyn FilePicker>,
    ) -> Self {
        Self {
            detector: Detector::new(config.clone(), logger.clone(), image_analyzer),
            upload_widget: UploadWidget::new(logger, config.preview_max_width),
            file_picker,
            config,
        }
    }

    /// Lets analysis completions repaint the window without user input.
    pub fn with_waker(mut self, ctx: &egui::Context) -> Self {
        self.detector.set_waker(ctx.clone());
        self
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        self.detector.poll();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            show_header(ui, &self.config.window_title);
        });

        let state = self.detector.state().clone();
        let view = prediction_view(
            state.error(),
            state.is_loading(),
            state.prediction(),
            &self.config.confidence_thresholds,
        );

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| {
                        show_introduction(ui);
                        ui.add_space(16.0);

                        let action = self.upload_widget.show(
                            ui,
                            state.file.as_ref(),
                            state.is_loading(),
                            self.file_picker.as_ref(),
                        );
                        ui.add_space(16.0);

                        ui.columns(2, |columns| {
                            feature_panel::show(
                                &mut columns[0],
                                &state.features(),
                                state.is_loading(),
                            );
                            prediction_panel::show(&mut columns[1], &view);
                        });

                        action
                    })
                    .inner
            })
            .inner;

        match action {
            Some(UploadAction::Select(file)) => self.detector.dispatch(Event::FileSelected(file)),
            Some(UploadAction::Clear) => self.detector.dispatch(Event::FileCleared),
            None => {}
        }
    }
}

#[cfg(test)]
impl DetectorApp {
    pub fn detector(&self) -> &Detector {
        &self.detector
    }
}

// The links have nowhere to go yet; they are placeholders in the header.
fn show_header(ui: &mut egui::Ui, title: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("🧠").size(26.0).color(BLUE));
        ui.heading(title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(egui::Button::new("GitHub").frame(false));
            ui.add(egui::Button::new("📄 Documentation").frame(false));
        });
    });
}

const TOPICS: [(&str, Color32, Color32); 4] = [
    (
        "Feature Extraction",
        Color32::from_rgb(219, 234, 254),
        Color32::from_rgb(30, 64, 175),
    ),
    (
        "Machine Learning",
        Color32::from_rgb(220, 252, 231),
        Color32::from_rgb(22, 101, 52),
    ),
    (
        "Medical Imaging",
        Color32::from_rgb(243, 232, 255),
        Color32::from_rgb(107, 33, 168),
    ),
    (
        "Computer Vision",
        Color32::from_rgb(255, 237, 213),
        Color32::from_rgb(154, 52, 18),
    ),
];

fn show_introduction(ui: &mut egui::Ui) {
    egui::Frame::group(ui.style())
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.heading("Medical Image Analysis for Brain Tumor Detection");
            ui.add_space(4.0);
            ui.label(
                "This system uses advanced machine learning techniques to analyze medical \
                 images and detect potential brain tumors. Upload a medical image to extract \
                 key features and get a prediction based on our trained model.",
            );
            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                for (topic, background, text) in TOPICS {
                    egui::Frame::none()
                        .fill(background)
                        .rounding(12.0)
                        .inner_margin(egui::Margin::symmetric(10.0, 4.0))
                        .show(ui, |ui| {
                            ui.label(egui::RichText::new(topic).small().color(text));
                        });
                }
            });
        });
}

const BLUE: Color32 = Color32::from_rgb(37, 99, 235);

impl eframe::App for DetectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
