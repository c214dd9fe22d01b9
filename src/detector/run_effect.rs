use crate::detector::core::{Effect, Event};
use crate::image_analyzer::interface::ImageAnalyzer;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    image_analyzer: Arc<dyn ImageAnalyzer + Send + Sync>,
    event_sender: Sender<Event>,
    waker: Option<egui::Context>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        image_analyzer: Arc<dyn ImageAnalyzer + Send + Sync>,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            logger,
            image_analyzer,
            event_sender,
            waker: None,
        }
    }

    pub fn set_waker(&mut self, ctx: egui::Context) {
        self.waker = Some(ctx);
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::Analyze { request, file } => {
                let result = self.image_analyzer.analyze(&file.bytes);
                self.send(Event::AnalyzeDone { request, result });
            }
            Effect::ReportFailure { detail } => {
                let _ = self.logger.error(&format!("Processing error: {}", detail));
            }
        }
    }

    fn send(&self, event: Event) {
        if self.event_sender.send(event).is_err() {
            let _ = self.logger.info("Detector gone, dropping event");
            return;
        }
        if let Some(ctx) = &self.waker {
            ctx.request_repaint();
        }
    }
}
