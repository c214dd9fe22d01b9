use crate::analysis::{ConfidenceLevel, Prediction};
use crate::config::ConfidenceThresholds;
use egui::{Color32, RichText};

const RED: Color32 = Color32::from_rgb(220, 38, 38);
const YELLOW: Color32 = Color32::from_rgb(202, 138, 4);
const GREEN: Color32 = Color32::from_rgb(22, 163, 74);
const BLUE: Color32 = Color32::from_rgb(37, 99, 235);

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub label: String,
    pub is_tumor: bool,
    pub confidence_text: String,
    pub bar_fraction: f32,
    pub level: ConfidenceLevel,
}

impl ResultView {
    pub fn new(prediction: &Prediction, thresholds: &ConfidenceThresholds) -> Self {
        Self {
            label: prediction.label.clone(),
            is_tumor: prediction.is_tumor(),
            confidence_text: format!("{:.1}%", prediction.confidence * 100.0),
            bar_fraction: prediction.confidence,
            level: prediction.confidence_level(thresholds),
        }
    }

    pub fn interpretation(&self) -> &'static str {
        self.level.interpretation()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionView {
    Error { message: String },
    Loading,
    Idle,
    Result(ResultView),
}

/// Error wins over loading, loading over a result, and a result over idle.
pub fn prediction_view(
    error: Option<&str>,
    loading: bool,
    prediction: Option<&Prediction>,
    thresholds: &ConfidenceThresholds,
) -> PredictionView {
    match (error, loading, prediction) {
        (Some(message), _, _) => PredictionView::Error {
            message: message.to_string(),
        },
        (None, true, _) => PredictionView::Loading,
        (None, false, Some(prediction)) => {
            PredictionView::Result(ResultView::new(prediction, thresholds))
        }
        (None, false, None) => PredictionView::Idle,
    }
}

pub fn level_color(level: ConfidenceLevel) -> Color32 {
    match level {
        ConfidenceLevel::High => GREEN,
        ConfidenceLevel::Moderate => YELLOW,
        ConfidenceLevel::Low => RED,
    }
}

pub fn show(ui: &mut egui::Ui, view: &PredictionView) {
    egui::Frame::group(ui.style()).inner_margin(12.0).show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        match view {
            PredictionView::Error { message } => {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(20.0).color(RED));
                    ui.heading(RichText::new("Error").color(RED));
                });
                ui.label(RichText::new(message).color(RED));
            }
            PredictionView::Loading => {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new().color(BLUE));
                    ui.heading("Processing...");
                });
                ui.add_space(6.0);
                ui.label("Analyzing image features and making prediction...");
            }
            PredictionView::Idle => {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🧠").size(20.0).color(Color32::GRAY));
                    ui.heading("Prediction Results");
                });
                ui.label(
                    RichText::new("Upload an image to see prediction results").color(Color32::GRAY),
                );
            }
            PredictionView::Result(result) => show_result(ui, result),
        }
    });
}

fn show_result(ui: &mut egui::Ui, result: &ResultView) {
    let (icon, scheme) = if result.is_tumor {
        ("⚠", RED)
    } else {
        ("✔", GREEN)
    };
    let confidence_color = level_color(result.level);

    ui.horizontal(|ui| {
        ui.label(RichText::new(icon).size(20.0).color(scheme));
        ui.heading("Prediction Results");
    });
    ui.add_space(6.0);

    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, scheme))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            egui::Grid::new("prediction_grid")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.strong("Classification:");
                    ui.label(RichText::new(&result.label).strong().color(scheme));
                    ui.end_row();

                    ui.strong("Confidence:");
                    ui.label(
                        RichText::new(&result.confidence_text)
                            .strong()
                            .color(confidence_color),
                    );
                    ui.end_row();
                });
            ui.add(egui::ProgressBar::new(result.bar_fraction).fill(confidence_color));
        });

    ui.add_space(6.0);
    ui.strong("Interpretation:");
    ui.label(RichText::new(result.interpretation()).small());
}
