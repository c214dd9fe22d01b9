use crate::analysis::{AnalysisReport, Feature, FeatureSet, Prediction};
use crate::config::Config;
use crate::detector::main::Detector;
use crate::image_analyzer::{impl_fake::FakeImageAnalyzer, interface::ImageAnalyzer};
use crate::library::logger::impl_fake::LoggerFake;
use crate::selected_file::SelectedFile;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub const WAIT: Duration = Duration::from_secs(5);

pub struct Fixture {
    pub config: Config,
    pub logger: LoggerFake,
    pub detector: Detector,
}

impl Fixture {
    pub fn new() -> Self {
        let config = Config {
            analysis_delay: Duration::ZERO,
            ..Config::default()
        };
        let logger = LoggerFake::new();
        let image_analyzer = Arc::new(FakeImageAnalyzer::new(
            Arc::new(logger.clone()),
            config.analysis_delay,
        ));
        Self::with_analyzer(config, logger, image_analyzer)
    }

    pub fn with_analyzer(
        config: Config,
        logger: LoggerFake,
        image_analyzer: Arc<dyn ImageAnalyzer + Send + Sync>,
    ) -> Self {
        let detector = Detector::new(config.clone(), Arc::new(logger.clone()), image_analyzer);
        Self {
            config,
            logger,
            detector,
        }
    }

    /// Pumps events until the detector has nothing in flight.
    pub fn settle(&mut self) {
        while self.detector.state().is_loading() {
            assert!(
                self.detector.process_next(WAIT),
                "analysis did not complete in time"
            );
        }
    }
}

pub fn jpeg(name: &str, size: usize) -> SelectedFile {
    SelectedFile::new(name, "image/jpeg", vec![0u8; size].into())
}

pub fn report(label: &str, confidence: f32) -> AnalysisReport {
    AnalysisReport {
        features: Feature::ALL.iter().map(|&f| (f, 0.5)).collect::<FeatureSet>(),
        prediction: Prediction {
            label: label.to_string(),
            confidence,
            probability: 0.5,
        },
    }
}

/// Answers by image size, so concurrent calls stay deterministic.
pub struct ScriptedImageAnalyzer {
    script: HashMap<usize, (Duration, Result<AnalysisReport, String>)>,
}

impl ScriptedImageAnalyzer {
    pub fn new(script: Vec<(usize, Duration, Result<AnalysisReport, String>)>) -> Self {
        Self {
            script: script
                .into_iter()
                .map(|(size, delay, outcome)| (size, (delay, outcome)))
                .collect(),
        }
    }
}

impl ImageAnalyzer for ScriptedImageAnalyzer {
    fn analyze(
        &self,
        image: &[u8],
    ) -> Result<AnalysisReport, Box<dyn std::error::Error + Send + Sync>> {
        let Some((delay, outcome)) = self.script.get(&image.len()) else {
            return Err(format!("nothing scripted for {} bytes", image.len()).into());
        };
        std::thread::sleep(*delay);
        outcome.clone().map_err(|message| message.into())
    }
}
