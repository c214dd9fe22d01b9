use crate::analysis::AnalysisReport;

/// Seam where a real inference backend plugs in. Calls may block; the
/// detector always runs them off the UI thread.
pub trait ImageAnalyzer: Send + Sync {
    fn analyze(
        &self,
        image: &[u8],
    ) -> Result<AnalysisReport, Box<dyn std::error::Error + Send + Sync>>;
}
