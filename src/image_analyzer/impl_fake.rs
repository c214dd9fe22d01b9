use crate::analysis::{AnalysisReport, Feature, FeatureSet, Prediction};
use crate::image_analyzer::interface::ImageAnalyzer;
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

pub struct FakeImageAnalyzer {
    logger: Arc<dyn Logger + Send + Sync>,
    delay: Duration,
}

impl FakeImageAnalyzer {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, delay: Duration) -> Self {
        Self {
            logger: logger.with_namespace("analyzer").with_namespace("fake"),
            delay,
        }
    }
}

fn sample(
    rng: &mut impl Rng,
    low: f64,
    high: f64,
) -> Result<f64, Box<dyn std::error::Error + Send + Sync>> {
    Ok(Uniform::new(low, high)?.sample(rng))
}

impl ImageAnalyzer for FakeImageAnalyzer {
    fn analyze(
        &self,
        image: &[u8],
    ) -> Result<AnalysisReport, Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("Analyzing {} bytes with fake analyzer...", image.len()))?;
        std::thread::sleep(self.delay);

        let mut rng = rand::rng();

        let features: FeatureSet = [
            (Feature::Entropy, sample(&mut rng, 1.0, 9.0)?),
            (Feature::Mse, sample(&mut rng, 0.001, 0.101)?),
            (Feature::Ssim, sample(&mut rng, 0.7, 1.0)?),
            (Feature::Dc, sample(&mut rng, 0.8, 1.0)?),
            (Feature::Skewness, sample(&mut rng, -2.0, 2.0)?),
            (Feature::Contrast, sample(&mut rng, 20.0, 120.0)?),
            (Feature::Dissimilarity, sample(&mut rng, 0.5, 2.5)?),
        ]
        .into_iter()
        .collect();

        let label = if rng.random_bool(0.5) {
            "Tumor Detected"
        } else {
            "No Tumor"
        };

        let prediction = Prediction {
            label: label.to_string(),
            confidence: sample(&mut rng, 0.6, 1.0)? as f32,
            probability: sample(&mut rng, 0.0, 1.0)? as f32,
        };

        self.logger
            .info(&format!(
                "Fake analysis done: {} (confidence {:.3}, probability {:.3})",
                prediction.label, prediction.confidence, prediction.probability
            ))?;

        Ok(AnalysisReport {
            features,
            prediction,
        })
    }
}
