use crate::file_picker::interface::FilePicker;
use crate::library::logger::interface::Logger;
use crate::selected_file::{is_image_mime, resolve_mime, SelectedFile};
use crate::ui::preview::Preview;
use egui::{Color32, RichText};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum UploadAction {
    Select(SelectedFile),
    Clear,
}

/// One entry of a drag-and-drop payload, before its bytes are read.
#[derive(Debug, Clone)]
pub struct DroppedEntry {
    pub name: String,
    pub mime: String,
    pub path: Option<PathBuf>,
    pub bytes: Option<Arc<[u8]>>,
}

impl From<&egui::DroppedFile> for DroppedEntry {
    fn from(file: &egui::DroppedFile) -> Self {
        let name = match (&file.path, file.name.is_empty()) {
            (Some(path), true) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            _ => file.name.clone(),
        };
        Self {
            mime: resolve_mime(&file.mime, file.path.as_deref(), &name),
            name,
            path: file.path.clone(),
            bytes: file.bytes.clone(),
        }
    }
}

impl DroppedEntry {
    pub fn load(self) -> Result<SelectedFile, Box<dyn std::error::Error + Send + Sync>> {
        match (self.bytes, self.path) {
            (Some(bytes), _) => Ok(SelectedFile::new(self.name, self.mime, bytes)),
            (None, Some(path)) => {
                let bytes = std::fs::read(&path)?;
                Ok(SelectedFile::new(self.name, self.mime, bytes.into()))
            }
            (None, None) => Err(format!("dropped file {} has no contents", self.name).into()),
        }
    }
}

/// The first image among the dropped entries. Anything else is ignored.
pub fn first_image(entries: Vec<DroppedEntry>) -> Option<DroppedEntry> {
    entries.into_iter().find(|entry| is_image_mime(&entry.mime))
}

pub struct UploadWidget {
    logger: Arc<dyn Logger + Send + Sync>,
    preview: Preview,
    preview_max_width: f32,
}

impl UploadWidget {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, preview_max_width: f32) -> Self {
        let logger = logger.with_namespace("upload");
        Self {
            preview: Preview::new(logger.clone()),
            logger,
            preview_max_width,
        }
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        file: Option<&SelectedFile>,
        loading: bool,
        file_picker: &dyn FilePicker,
    ) -> Option<UploadAction> {
        let action = egui::Frame::group(ui.style())
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.heading("Upload Medical Image");
                ui.add_space(8.0);

                match file {
                    Some(file) => self.show_selected(ui, file, loading),
                    None => self.show_drop_zone(ui, file_picker),
                }
            })
            .inner;

        // Free the old texture now rather than on the next frame.
        if action.is_some() {
            self.preview.release();
        }
        action
    }

    fn show_selected(
        &mut self,
        ui: &mut egui::Ui,
        file: &SelectedFile,
        loading: bool,
    ) -> Option<UploadAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.label(RichText::new("🖼").size(20.0));
            ui.vertical(|ui| {
                ui.label(RichText::new(&file.name).strong().color(GREEN));
                ui.label(RichText::new(file.size_label()).small().color(GREEN));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if clear_button(ui, loading).clicked() {
                    action = Some(UploadAction::Clear);
                }
            });
        });

        ui.add_space(8.0);

        let max_width = self.preview_max_width;
        let texture = self
            .preview
            .sync(ui.ctx(), Some(file))
            .map(|texture| (texture.id(), texture.size_vec2()));
        ui.vertical_centered(|ui| match texture {
            Some(texture) => {
                ui.add(egui::Image::new(texture).max_width(max_width));
            }
            None if self.preview.is_decoding() => {
                ui.spinner();
            }
            None => {}
        });

        action
    }

    fn show_drop_zone(
        &mut self,
        ui: &mut egui::Ui,
        file_picker: &dyn FilePicker,
    ) -> Option<UploadAction> {
        self.preview.sync(ui.ctx(), None);

        let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
        let mut action = self.take_dropped(ui.ctx());

        let stroke_color = if hovering {
            Color32::from_rgb(96, 165, 250)
        } else {
            Color32::GRAY
        };

        egui::Frame::none()
            .stroke(egui::Stroke::new(2.0, stroke_color))
            .rounding(8.0)
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("⬆").size(36.0).color(Color32::GRAY));
                    if hovering {
                        ui.label("Release to upload");
                    } else {
                        ui.label("Drag and drop your medical image here, or click to browse");
                    }
                    ui.label(RichText::new("Supports: JPG, PNG, TIFF, DICOM").small());
                    ui.add_space(8.0);

                    if ui.button("🖼 Select Image").clicked() && action.is_none() {
                        action = self.pick(file_picker);
                    }
                });
            });

        action
    }

    fn take_dropped(&self, ctx: &egui::Context) -> Option<UploadAction> {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return None;
        }

        let entries = dropped.iter().map(DroppedEntry::from).collect();
        let Some(entry) = first_image(entries) else {
            let _ = self
                .logger
                .info(&format!("Ignoring drop of {} non-image file(s)", dropped.len()));
            return None;
        };

        match entry.load() {
            Ok(file) => Some(UploadAction::Select(file)),
            Err(err) => {
                let _ = self.logger.error(&format!("Cannot read dropped file: {}", err));
                None
            }
        }
    }

    /// Whatever the picker returns is selected, image or not.
    pub fn pick(&self, file_picker: &dyn FilePicker) -> Option<UploadAction> {
        match file_picker.pick() {
            Ok(Some(file)) => Some(UploadAction::Select(file)),
            Ok(None) => None,
            Err(err) => {
                let _ = self.logger.error(&format!("Cannot read picked file: {}", err));
                None
            }
        }
    }
}

/// Disabled while an analysis is running.
fn clear_button(ui: &mut egui::Ui, loading: bool) -> egui::Response {
    ui.add_enabled(!loading, egui::Button::new("✖"))
        .on_hover_text("Clear")
        .on_disabled_hover_text("Wait for the analysis to finish")
}

const GREEN: Color32 = Color32::from_rgb(22, 101, 52);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_picker::impl_fake::FilePickerFake;
    use crate::library::logger::impl_fake::LoggerFake;

    fn entry(name: &str, mime: &str) -> DroppedEntry {
        DroppedEntry {
            name: name.to_string(),
            mime: mime.to_string(),
            path: None,
            bytes: Some(vec![1u8, 2, 3].into()),
        }
    }

    fn clear_enabled(loading: bool) -> bool {
        let ctx = egui::Context::default();
        let mut enabled = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                enabled = Some(clear_button(ui, loading).enabled);
            });
        });
        enabled.unwrap()
    }

    #[test]
    fn test_clear_disabled_while_loading() {
        assert!(!clear_enabled(true));
        assert!(clear_enabled(false));
    }

    #[test]
    fn test_selected_file_while_loading_emits_no_action() {
        let mut widget = UploadWidget::new(Arc::new(LoggerFake::new()), 400.0);
        let picker = FilePickerFake::new(None);
        let file = SelectedFile::new("scan.png", "image/png", vec![1u8, 2, 3].into());
        let ctx = egui::Context::default();

        let mut action = Some(UploadAction::Clear);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                action = widget.show(ui, Some(&file), true, &picker);
            });
        });

        assert_eq!(action, None);
        assert_eq!(picker.opened(), 0);
    }

    #[test]
    fn test_first_image_skips_non_images() {
        let picked = first_image(vec![
            entry("notes.txt", "text/plain"),
            entry("scan.png", "image/png"),
            entry("other.jpg", "image/jpeg"),
        ])
        .unwrap();

        assert_eq!(picked.name, "scan.png");
    }

    #[test]
    fn test_first_image_none_for_non_images() {
        assert!(first_image(vec![
            entry("notes.txt", "text/plain"),
            entry("report.pdf", "application/pdf"),
        ])
        .is_none());
        assert!(first_image(vec![]).is_none());
    }

    #[test]
    fn test_dropped_file_without_mime_uses_extension() {
        let dropped = egui::DroppedFile {
            path: Some(PathBuf::from("/scans/brain.tif")),
            ..Default::default()
        };

        let entry = DroppedEntry::from(&dropped);
        assert_eq!(entry.name, "brain.tif");
        assert_eq!(entry.mime, "image/tiff");
    }

    #[test]
    fn test_load_prefers_inline_bytes() {
        let file = entry("scan.png", "image/png").load().unwrap();
        assert_eq!(file.size, 3);
        assert_eq!(file.mime, "image/png");
    }

    #[test]
    fn test_load_without_contents_fails() {
        let mut empty = entry("scan.png", "image/png");
        empty.bytes = None;
        assert!(empty.load().is_err());
    }

    #[test]
    fn test_picked_file_selected_once_without_type_check() {
        let widget = UploadWidget::new(Arc::new(LoggerFake::new()), 400.0);
        let notes = SelectedFile::new("notes.txt", "text/plain", vec![1u8].into());
        let picker = FilePickerFake::new(Some(notes.clone()));

        let action = widget.pick(&picker);

        assert_eq!(action, Some(UploadAction::Select(notes)));
        assert_eq!(picker.opened(), 1);
    }

    #[test]
    fn test_dismissed_picker_selects_nothing() {
        let widget = UploadWidget::new(Arc::new(LoggerFake::new()), 400.0);
        let picker = FilePickerFake::new(None);

        assert_eq!(widget.pick(&picker), None);
    }
}
