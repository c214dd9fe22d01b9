use crate::analysis::{AnalysisReport, FeatureSet, Prediction};
use crate::config::Config;
use crate::selected_file::SelectedFile;

pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to process image. Please try again.";

/// Tags each analysis so late completions can be told apart.
pub type RequestId = u64;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Analysis {
    #[default]
    Idle,
    Pending {
        request: RequestId,
    },
    Failed {
        message: String,
    },
    Done {
        features: FeatureSet,
        prediction: Prediction,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    pub file: Option<SelectedFile>,
    pub analysis: Analysis,
    pub last_request: RequestId,
}

impl State {
    pub fn is_loading(&self) -> bool {
        matches!(self.analysis, Analysis::Pending { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match &self.analysis {
            Analysis::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match &self.analysis {
            Analysis::Done { prediction, .. } => Some(prediction),
            _ => None,
        }
    }

    pub fn features(&self) -> FeatureSet {
        match &self.analysis {
            Analysis::Done { features, .. } => features.clone(),
            _ => FeatureSet::new(),
        }
    }
}

#[derive(Debug)]
pub enum Event {
    FileSelected(SelectedFile),
    FileCleared,
    AnalyzeDone {
        request: RequestId,
        result: Result<AnalysisReport, Box<dyn std::error::Error + Send + Sync>>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Analyze { request: RequestId, file: SelectedFile },
    ReportFailure { detail: String },
}

pub fn init() -> (State, Vec<Effect>) {
    (State::default(), vec![])
}

pub fn transition(_config: &Config, state: State, event: Event) -> (State, Vec<Effect>) {
    match (state.clone(), event) {
        (_, Event::FileSelected(file)) => {
            let request = state.last_request + 1;
            (
                State {
                    file: Some(file.clone()),
                    analysis: Analysis::Pending { request },
                    last_request: request,
                },
                vec![Effect::Analyze { request, file }],
            )
        }

        (_, Event::FileCleared) => (
            State {
                file: None,
                analysis: Analysis::Idle,
                last_request: state.last_request,
            },
            vec![],
        ),

        (
            State {
                analysis: Analysis::Pending { request: pending },
                file,
                last_request,
            },
            Event::AnalyzeDone { request, result },
        ) if pending == request => match result {
            Ok(report) => (
                State {
                    file,
                    analysis: Analysis::Done {
                        features: report.features,
                        prediction: report.prediction,
                    },
                    last_request,
                },
                vec![],
            ),
            Err(err) => (
                State {
                    file,
                    analysis: Analysis::Failed {
                        message: ANALYSIS_FAILED_MESSAGE.to_string(),
                    },
                    last_request,
                },
                vec![Effect::ReportFailure {
                    detail: err.to_string(),
                }],
            ),
        },

        // Superseded or cleared while in flight
        (_, Event::AnalyzeDone { .. }) => (state, vec![]),
    }
}
