use chrono::Offset;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceThresholds {
    pub high: f32,
    pub moderate: f32,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high: 0.8,
            moderate: 0.6,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub analysis_delay: Duration,
    pub confidence_thresholds: ConfidenceThresholds,
    pub preview_max_width: f32,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Brain Tumor Detection System".to_string(),
            window_size: [1100.0, 820.0],
            analysis_delay: Duration::from_secs(2),
            confidence_thresholds: ConfidenceThresholds::default(),
            preview_max_width: 420.0,
            logger_timezone: local_timezone(),
        }
    }
}

fn local_timezone() -> chrono::FixedOffset {
    chrono::Local::now().offset().fix()
}
