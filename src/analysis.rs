//! Values that flow from the analysis boundary into the panels.

use crate::config::ConfidenceThresholds;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Entropy,
    Mse,
    Ssim,
    Dc,
    Skewness,
    Contrast,
    Dissimilarity,
}

impl Feature {
    /// Display order of the feature grid.
    pub const ALL: [Feature; 7] = [
        Feature::Entropy,
        Feature::Mse,
        Feature::Ssim,
        Feature::Dc,
        Feature::Skewness,
        Feature::Contrast,
        Feature::Dissimilarity,
    ];

    /// Key used in a [`FeatureSet`].
    pub fn name(&self) -> &'static str {
        match self {
            Feature::Entropy => "Entropy",
            Feature::Mse => "MSE",
            Feature::Ssim => "SSIM",
            Feature::Dc => "DC",
            Feature::Skewness => "Skewness",
            Feature::Contrast => "Contrast",
            Feature::Dissimilarity => "Dissimilarity",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Feature::Entropy => "Information content measure",
            Feature::Mse => "Mean Squared Error",
            Feature::Ssim => "Structural Similarity Index",
            Feature::Dc => "Dice Coefficient",
            Feature::Skewness => "Distribution asymmetry",
            Feature::Contrast => "Texture contrast measure",
            Feature::Dissimilarity => "Texture dissimilarity",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Feature::Entropy => "📈",
            Feature::Mse => "〰",
            Feature::Ssim => "👁",
            Feature::Dc => "⚡",
            Feature::Skewness => "📊",
            Feature::Contrast => "◐",
            Feature::Dissimilarity => "▦",
        }
    }
}

/// Feature name to value. Keys outside [`Feature::ALL`] are allowed and
/// simply never displayed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSet(BTreeMap<String, f64>);

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, feature: Feature) -> Option<f64> {
        self.0.get(feature.name()).copied()
    }
}

#[cfg(test)]
impl FeatureSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.0.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(Feature, f64)> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = (Feature, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(feature, value)| (feature.name().to_string(), value))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Moderate,
    Low,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f32, thresholds: &ConfidenceThresholds) -> Self {
        if confidence > thresholds.high {
            ConfidenceLevel::High
        } else if confidence > thresholds.moderate {
            ConfidenceLevel::Moderate
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn interpretation(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => {
                "High confidence prediction. The model is very certain about this classification."
            }
            ConfidenceLevel::Moderate => {
                "Moderate confidence prediction. Consider additional clinical evaluation."
            }
            ConfidenceLevel::Low => {
                "Low confidence prediction. Recommend further analysis and clinical review."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub confidence: f32,
    pub probability: f32,
}

impl Prediction {
    pub fn is_tumor(&self) -> bool {
        self.label.to_lowercase().contains("tumor")
    }

    pub fn confidence_level(&self, thresholds: &ConfidenceThresholds) -> ConfidenceLevel {
        ConfidenceLevel::from_confidence(self.confidence, thresholds)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub features: FeatureSet,
    pub prediction: Prediction,
}
