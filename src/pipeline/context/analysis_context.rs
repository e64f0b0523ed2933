use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::common::ImageGrid;
use crate::error::AppError;
use crate::pipeline::context::metrics::AnalysisMetrics;
use crate::pipeline::context::state::{AnalyzedState, DecodedState, ProcessingState};
use crate::pipeline::types::{ColorAnalysis, SkinToneAnalysis};

// AnalysisContext with compile-time state tracking via the state parameter
pub struct AnalysisContext<S> {
    grid: Arc<ImageGrid>,
    metrics: AnalysisMetrics,
    processing_start: Instant,
    state: S,
}

impl<S: ProcessingState> AnalysisContext<S> {
    pub fn grid(&self) -> &ImageGrid {
        &self.grid
    }

    /// Shared handle for worker threads.
    pub fn shared_grid(&self) -> Arc<ImageGrid> {
        Arc::clone(&self.grid)
    }

    pub fn metrics(&self) -> &AnalysisMetrics {
        &self.metrics
    }

    pub fn elapsed(&self) -> Duration {
        self.processing_start.elapsed()
    }

    pub fn state_name(&self) -> &'static str {
        S::state_name()
    }
}

impl AnalysisContext<DecodedState> {
    pub fn decode(bytes: &[u8]) -> Result<Self, AppError> {
        let processing_start = Instant::now();
        let grid = ImageGrid::decode(bytes)?;

        let mut metrics = AnalysisMetrics::new();
        metrics.record_decode_duration(processing_start.elapsed());
        Ok(Self {
            grid: Arc::new(grid),
            metrics,
            processing_start,
            state: DecodedState,
        })
    }

    pub fn from_grid(grid: ImageGrid) -> Self {
        Self {
            grid: Arc::new(grid),
            metrics: AnalysisMetrics::new(),
            processing_start: Instant::now(),
            state: DecodedState,
        }
    }

    pub fn into_analyzed(
        mut self,
        palette: ColorAnalysis,
        skin_tone: SkinToneAnalysis,
    ) -> AnalysisContext<AnalyzedState> {
        let analysis_time = self
            .elapsed()
            .saturating_sub(self.metrics.decode_duration().unwrap_or_default());
        self.metrics.record_analysis_duration(analysis_time);
        AnalysisContext::<AnalyzedState> {
            grid: self.grid,
            metrics: self.metrics,
            processing_start: self.processing_start,
            state: AnalyzedState { palette, skin_tone },
        }
    }
}

impl AnalysisContext<AnalyzedState> {
    pub fn palette(&self) -> &ColorAnalysis {
        &self.state.palette
    }

    pub fn skin_tone(&self) -> &SkinToneAnalysis {
        &self.state.skin_tone
    }

    pub fn into_analysis(self) -> (ColorAnalysis, SkinToneAnalysis) {
        (self.state.palette, self.state.skin_tone)
    }
}
