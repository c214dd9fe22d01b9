use crate::library::logger::interface::Logger;
use crate::selected_file::SelectedFile;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;

/// GPU texture for the currently selected file. At most one is alive; the
/// previous one is freed as soon as the file changes or is cleared.
///
/// Decoding happens on a worker thread and the result is scaled down to fit
/// the backend's `max_texture_side`.
pub struct Preview {
    logger: Arc<dyn Logger + Send + Sync>,
    current: Option<LoadedPreview>,
}

struct LoadedPreview {
    name: String,
    source: Arc<[u8]>,
    image: PreviewImage,
}

enum PreviewImage {
    Decoding(Receiver<Result<egui::ColorImage, String>>),
    Ready(egui::TextureHandle),
    Failed,
}

impl Preview {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("preview"),
            current: None,
        }
    }

    pub fn sync(
        &mut self,
        ctx: &egui::Context,
        file: Option<&SelectedFile>,
    ) -> Option<&egui::TextureHandle> {
        let stale = match (&self.current, file) {
            (Some(loaded), Some(file)) => !file.is_same_buffer(&loaded.source),
            (Some(_), None) => true,
            (None, _) => false,
        };
        if stale {
            self.release();
        }

        if self.current.is_none() {
            if let Some(file) = file {
                self.current = Some(start_decode(ctx, file));
            }
        }

        if let Some(loaded) = self.current.as_mut() {
            if let PreviewImage::Decoding(receiver) = &loaded.image {
                let next = match receiver.try_recv() {
                    Ok(Ok(image)) => Some(PreviewImage::Ready(ctx.load_texture(
                        format!("preview:{}", loaded.name),
                        image,
                        egui::TextureOptions::LINEAR,
                    ))),
                    Ok(Err(err)) => {
                        let _ = self
                            .logger
                            .error(&format!("Cannot preview {}: {}", loaded.name, err));
                        Some(PreviewImage::Failed)
                    }
                    Err(TryRecvError::Empty) => None,
                    Err(TryRecvError::Disconnected) => {
                        let _ = self
                            .logger
                            .error(&format!("Preview decoder for {} stopped", loaded.name));
                        Some(PreviewImage::Failed)
                    }
                };
                if let Some(next) = next {
                    loaded.image = next;
                }
            }
        }

        match self.current.as_ref().map(|loaded| &loaded.image) {
            Some(PreviewImage::Ready(texture)) => Some(texture),
            _ => None,
        }
    }

    pub fn is_decoding(&self) -> bool {
        matches!(
            self.current.as_ref().map(|loaded| &loaded.image),
            Some(PreviewImage::Decoding(_))
        )
    }

    pub fn release(&mut self) {
        if let Some(previous) = self.current.take() {
            if let PreviewImage::Ready(texture) = &previous.image {
                let _ = self
                    .logger
                    .info(&format!("Releasing preview texture {:?}", texture.id()));
            }
        }
    }
}

#[cfg(test)]
impl Preview {
    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }
}

fn start_decode(ctx: &egui::Context, file: &SelectedFile) -> LoadedPreview {
    let (sender, receiver) = mpsc::channel();
    let max_side = ctx.input(|i| i.max_texture_side);
    let bytes = file.bytes.clone();
    let waker = ctx.clone();

    std::thread::spawn(move || {
        let result = decode(&bytes, max_side).map_err(|err| err.to_string());
        // receiver is gone once the file was replaced or cleared
        if sender.send(result).is_ok() {
            waker.request_repaint();
        }
    });

    LoadedPreview {
        name: file.name.clone(),
        source: file.bytes.clone(),
        image: PreviewImage::Decoding(receiver),
    }
}

fn decode(bytes: &[u8], max_side: usize) -> Result<egui::ColorImage, image::ImageError> {
    let image = fit_within(image::load_from_memory(bytes)?, max_side);
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Shrinks (never enlarges) so neither side exceeds `max_side`.
fn fit_within(image: image::DynamicImage, max_side: usize) -> image::DynamicImage {
    let max_side = u32::try_from(max_side).unwrap_or(u32::MAX);
    if image.width() <= max_side && image.height() <= max_side {
        image
    } else {
        image.thumbnail(max_side, max_side)
    }
}
