use crate::analysis::{Feature, FeatureSet};
use egui::{Color32, RichText};

const COLUMNS: usize = 3;
const VALUE_COLOR: Color32 = Color32::from_rgb(37, 99, 235);

#[derive(Debug, Clone, PartialEq)]
pub enum SlotValue {
    Loading,
    Missing,
    Value(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSlot {
    pub feature: Feature,
    pub value: SlotValue,
}

/// One slot per entry of [`Feature::ALL`], whatever keys `features` has.
pub fn feature_slots(features: &FeatureSet, loading: bool) -> Vec<FeatureSlot> {
    Feature::ALL
        .iter()
        .map(|&feature| FeatureSlot {
            feature,
            value: if loading {
                SlotValue::Loading
            } else {
                match features.get(feature) {
                    Some(value) => SlotValue::Value(format!("{:.4}", value)),
                    None => SlotValue::Missing,
                }
            },
        })
        .collect()
}

pub fn show(ui: &mut egui::Ui, features: &FeatureSet, loading: bool) {
    egui::Frame::group(ui.style()).inner_margin(12.0).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.heading("Selected Features for Prediction");
        ui.add_space(8.0);

        egui::Grid::new("feature_grid")
            .num_columns(COLUMNS)
            .spacing([10.0, 10.0])
            .show(ui, |ui| {
                for (index, slot) in feature_slots(features, loading).iter().enumerate() {
                    show_slot(ui, slot);
                    if (index + 1) % COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });
    });
}

fn show_slot(ui: &mut egui::Ui, slot: &FeatureSlot) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(140.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(slot.feature.icon()).color(VALUE_COLOR));
            ui.strong(slot.feature.name());
        });
        ui.label(RichText::new(slot.feature.description()).small());

        match &slot.value {
            SlotValue::Loading => {
                ui.add(egui::Spinner::new());
            }
            SlotValue::Missing => {
                ui.label(RichText::new("N/A").size(18.0).strong().color(VALUE_COLOR));
            }
            SlotValue::Value(text) => {
                ui.label(RichText::new(text).size(18.0).strong().color(VALUE_COLOR));
            }
        }
    });
}
