use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::common::ImageGrid;
use crate::config::AnalysisSettings;
use crate::error::AppError;
use crate::pipeline::context::AnalysisContext;
use crate::pipeline::journal::{AnalysisJournalEntry, AnalysisJournalWriter};
use crate::pipeline::services::color_transform::generate_alternatives;
use crate::pipeline::services::{ColorAnalysisService, CompatibilityScorer, SkinToneService};
use crate::pipeline::types::{AnalysisResult, ColorAnalysis, SkinTone, SkinToneAnalysis};

/// Starting rating before compatibility adjustments
pub const BASE_RATING: f64 = 8.5;

/// Turns an outfit photograph into rating, palette, skin tone and suggestions
pub struct PipelineOrchestrator {
    palette: Arc<ColorAnalysisService>,
    skin_tone: Arc<SkinToneService>,
    scorer: CompatibilityScorer,
    journal: Option<Arc<dyn AnalysisJournalWriter>>,
}

impl Default for PipelineOrchestrator {
    fn default() -> Self {
        Self::new(&AnalysisSettings::default())
    }
}

impl PipelineOrchestrator {
    pub fn new(settings: &AnalysisSettings) -> Self {
        Self {
            palette: Arc::new(ColorAnalysisService::new(settings)),
            skin_tone: Arc::new(SkinToneService::new(settings)),
            scorer: CompatibilityScorer::new(),
            journal: None,
        }
    }

    pub fn with_journal(mut self, journal: Arc<dyn AnalysisJournalWriter>) -> Self {
        info!("Recording analyses to the {} journal", journal.name());
        self.journal = Some(journal);
        self
    }

    /// Decode an uploaded image and analyze it.
    ///
    /// Palette extraction and skin-tone detection run side by side on the blocking pool.
    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub async fn analyze_bytes(&self, bytes: &[u8]) -> Result<AnalysisResult, AppError> {
        let context = AnalysisContext::decode(bytes)?;
        let image_size = context.grid().size_label();
        debug!("Decoded {} image", image_size);

        let palette_service = Arc::clone(&self.palette);
        let palette_grid = context.shared_grid();
        let palette_task =
            tokio::task::spawn_blocking(move || palette_service.analyze_colors(&palette_grid));

        let skin_tone_service = Arc::clone(&self.skin_tone);
        let skin_tone_grid = context.shared_grid();
        let skin_tone_task =
            tokio::task::spawn_blocking(move || skin_tone_service.detect_skin_tone(&skin_tone_grid));

        let (palette, skin_tone) = tokio::try_join!(palette_task, skin_tone_task)?;

        let analyzed = context.into_analyzed(palette, skin_tone);
        analyzed.metrics().log(&image_size);
        let (palette, skin_tone) = analyzed.into_analysis();

        let result = self.assemble(palette, skin_tone)?;
        info!(
            "Rated {} image {} ({} skin tone)",
            image_size, result.rating, result.skin_tone_analysis.tone
        );

        if let Some(journal) = &self.journal {
            let entry = AnalysisJournalEntry::from_result(result.clone(), image_size);
            if let Err(e) = journal.record(entry).await {
                warn!("Failed to record analysis in {} journal: {}", journal.name(), e);
            }
        }

        Ok(result)
    }

    /// Analyze an already decoded image on the calling thread. Nothing is journaled.
    pub fn analyze_grid(&self, grid: &ImageGrid) -> Result<AnalysisResult, AppError> {
        let palette = self.palette.analyze_colors(grid);
        let skin_tone = self.skin_tone.detect_skin_tone(grid);
        self.assemble(palette, skin_tone)
    }

    fn assemble(
        &self,
        palette: ColorAnalysis,
        skin_tone: SkinToneAnalysis,
    ) -> Result<AnalysisResult, AppError> {
        let alternative_colors = generate_alternatives(&palette.dominant_color())?.into_vec();
        let outcome = self
            .scorer
            .score(BASE_RATING, skin_tone.tone, palette.primary_colors());
        let suggestions = build_suggestions(
            &alternative_colors,
            skin_tone.tone,
            &outcome.compatibility.complementary_colors,
        );

        Ok(AnalysisResult {
            rating: outcome.adjusted_rating,
            color_analysis: palette,
            skin_tone_analysis: skin_tone,
            suggestions,
            alternative_colors,
            color_compatibility: outcome.compatibility,
        })
    }
}

pub fn build_suggestions(
    alternative_colors: &[String],
    tone: SkinTone,
    complementary_colors: &[String],
) -> Vec<String> {
    let bold = alternative_colors.first().map(String::as_str).unwrap_or_default();
    let lighter = alternative_colors.get(1).map(String::as_str).unwrap_or_default();
    let contrast = complementary_colors
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        "The color combination works well together".to_string(),
        format!("Try this outfit in {} for a bold look", bold),
        format!("A lighter shade like {} could work for summer", lighter),
        format!("This outfit complements your {} skin tone", tone),
        format!("Consider trying colors like {} for better contrast", contrast),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PersistenceError;
    use crate::pipeline::journal::InMemoryJournalWriter;
    use async_trait::async_trait;
    use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png_bytes(image: RgbImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(image)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn solid_png(color: Rgb<u8>) -> Vec<u8> {
        png_bytes(ImageBuffer::from_pixel(150, 150, color))
    }

    struct FailingJournal;

    #[async_trait]
    impl AnalysisJournalWriter for FailingJournal {
        async fn record(&self, _entry: AnalysisJournalEntry) -> Result<(), PersistenceError> {
            Err(PersistenceError::Unavailable("store offline".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn white_image_keeps_base_rating() {
        let result = PipelineOrchestrator::default()
            .analyze_bytes(&solid_png(Rgb([255, 255, 255])))
            .await
            .unwrap();

        assert_eq!(result.rating, 8.5);
        assert_eq!(result.color_analysis.primary_colors(), ["#ffffff".to_string()]);
        assert_eq!(result.skin_tone_analysis, SkinToneAnalysis::unknown());
        assert_eq!(result.alternative_colors, vec!["#000000", "#ffffff", "#cdcdcd"]);
        assert_eq!(
            result.suggestions,
            vec![
                "The color combination works well together",
                "Try this outfit in #000000 for a bold look",
                "A lighter shade like #ffffff could work for summer",
                "This outfit complements your Unknown skin tone",
                "Consider trying colors like #000000, #1a1a1a for better contrast",
            ]
        );
        assert_eq!(result.color_compatibility.complementary_colors.len(), 6);
        assert!(result.color_compatibility.avoid_colors.is_empty());
    }

    #[tokio::test]
    async fn black_outfit_matches_fallback_rules() {
        let result = PipelineOrchestrator::default()
            .analyze_bytes(&solid_png(Rgb([0, 0, 0])))
            .await
            .unwrap();

        assert_eq!(result.rating, 9.0);
        assert_eq!(result.alternative_colors, vec!["#ffffff", "#323232", "#000000"]);
    }

    #[tokio::test]
    async fn skin_colored_image_is_classified() {
        let result = PipelineOrchestrator::default()
            .analyze_bytes(&solid_png(Rgb([160, 150, 130])))
            .await
            .unwrap();

        assert_eq!(result.skin_tone_analysis.tone, SkinTone::Medium);
        assert_eq!(result.skin_tone_analysis.color, "#a09682");
        assert_eq!(
            result.suggestions[3],
            "This outfit complements your Medium skin tone"
        );
        assert!((0.0..=10.0).contains(&result.rating));
    }

    #[tokio::test]
    async fn undecodable_bytes_fail() {
        let error = PipelineOrchestrator::default()
            .analyze_bytes(b"not an image at all")
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::ImageDecode(_)));
    }

    #[test]
    fn empty_grid_yields_partial_result() {
        let grid = ImageGrid::from_rgb(RgbImage::new(0, 0));
        let result = PipelineOrchestrator::default().analyze_grid(&grid).unwrap();

        assert!(result.color_analysis.is_empty());
        assert_eq!(result.color_analysis.dominant_color(), "#000000");
        assert_eq!(result.skin_tone_analysis.tone, SkinTone::Unknown);
        assert_eq!(result.alternative_colors, vec!["#ffffff", "#323232", "#000000"]);
        assert_eq!(result.rating, 8.5);
    }

    #[test]
    fn sync_and_async_paths_agree() {
        let image: RgbImage = ImageBuffer::from_fn(60, 40, |x, y| {
            if (x + y) % 3 == 0 {
                Rgb([160, 150, 130])
            } else {
                Rgb([20, 30, 120])
            }
        });
        let bytes = png_bytes(image.clone());
        let orchestrator = PipelineOrchestrator::default();

        let sync_result = orchestrator.analyze_grid(&ImageGrid::from_rgb(image)).unwrap();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let async_result = runtime.block_on(orchestrator.analyze_bytes(&bytes)).unwrap();
        assert_eq!(sync_result, async_result);
    }

    #[tokio::test]
    async fn results_are_journaled() {
        let journal = Arc::new(InMemoryJournalWriter::new(10));
        let orchestrator = PipelineOrchestrator::default().with_journal(journal.clone());

        let bytes = png_bytes(ImageBuffer::from_pixel(40, 25, Rgb([10, 20, 30])));
        let result = orchestrator.analyze_bytes(&bytes).await.unwrap();

        let entries = journal.entries().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].image_size, "40x25");
        assert_eq!(entries[0].result, result);
    }

    #[tokio::test]
    async fn journal_failure_does_not_fail_the_request() {
        let orchestrator = PipelineOrchestrator::default().with_journal(Arc::new(FailingJournal));
        let result = orchestrator
            .analyze_bytes(&solid_png(Rgb([255, 255, 255])))
            .await;
        assert_eq!(result.unwrap().rating, 8.5);
    }

    #[test]
    fn suggestions_follow_template() {
        let suggestions = build_suggestions(
            &["#5f697d".to_string(), "#d2c8b4".to_string(), "#6e6450".to_string()],
            SkinTone::VeryDark,
            &["#ffffff".to_string(), "#f0f0f0".to_string(), "#e6e6e6".to_string()],
        );
        assert_eq!(suggestions.len(), 5);
        assert_eq!(suggestions[1], "Try this outfit in #5f697d for a bold look");
        assert_eq!(suggestions[2], "A lighter shade like #d2c8b4 could work for summer");
        assert_eq!(suggestions[3], "This outfit complements your Very Dark skin tone");
        assert_eq!(
            suggestions[4],
            "Consider trying colors like #ffffff, #f0f0f0 for better contrast"
        );
    }
}
