use std::time::Duration;
use tracing::debug;

/// Timings collected while a request moves through the pipeline
#[derive(Debug, Default, Clone)]
pub struct AnalysisMetrics {
    decode_duration: Option<Duration>,
    analysis_duration: Option<Duration>,
}

impl AnalysisMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_decode_duration(&mut self, duration: Duration) {
        self.decode_duration = Some(duration);
    }

    pub fn record_analysis_duration(&mut self, duration: Duration) {
        self.analysis_duration = Some(duration);
    }

    pub fn decode_duration(&self) -> Option<Duration> {
        self.decode_duration
    }

    pub fn analysis_duration(&self) -> Option<Duration> {
        self.analysis_duration
    }

    pub fn log(&self, image_size: &str) {
        debug!(
            "Image {}: decode {:?}, analysis {:?}",
            image_size, self.decode_duration, self.analysis_duration
        );
    }
}
