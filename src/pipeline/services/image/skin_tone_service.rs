use tracing::debug;

use super::kmeans::KMeans;
use crate::common::ImageGrid;
use crate::config::AnalysisSettings;
use crate::pipeline::types::{RgbColor, SkinToneAnalysis};

/// RGB rule of thumb for skin: warm, red-leaning, not too dark.
pub fn is_skin_like(color: RgbColor) -> bool {
    let (r, g, b) = (i32::from(color.r), i32::from(color.g), i32::from(color.b));
    r > 60 && g > 40 && b > 20 && (r - g).abs() < 15 && r > g && r > b
}

/// Pick the first candidate that passes [`is_skin_like`].
///
/// Candidate order decides the outcome; there is no scoring between matches.
pub fn classify_candidates(candidates: &[RgbColor]) -> SkinToneAnalysis {
    candidates
        .iter()
        .copied()
        .find(|color| is_skin_like(*color))
        .map(SkinToneAnalysis::detected)
        .unwrap_or_else(SkinToneAnalysis::unknown)
}

pub struct SkinToneService {
    sample_size: u32,
    kmeans: KMeans,
}

impl Default for SkinToneService {
    fn default() -> Self {
        Self::new(&AnalysisSettings::default())
    }
}

impl SkinToneService {
    pub fn new(settings: &AnalysisSettings) -> Self {
        Self {
            sample_size: settings.sample_size,
            kmeans: KMeans::new(settings),
        }
    }

    pub fn detect_skin_tone(&self, grid: &ImageGrid) -> SkinToneAnalysis {
        let sampled = grid.downscale(self.sample_size);
        let candidates = self.kmeans.centers(&sampled);
        if candidates.is_empty() {
            debug!("Skipping skin tone detection for empty image");
            return SkinToneAnalysis::unknown();
        }

        let analysis = classify_candidates(&candidates);
        debug!(
            "Skin tone {} ({}) from {} cluster candidates",
            analysis.tone,
            analysis.color,
            candidates.len()
        );
        analysis
    }
}
