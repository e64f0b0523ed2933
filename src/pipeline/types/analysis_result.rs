use serde::{Deserialize, Serialize};

use super::color::RgbColor;
use super::skin_tone::SkinToneAnalysis;

pub const NO_COLORS_FOUND: &str = "No colors found";

/// Palette extracted from the photograph.
///
/// An image without pixels yields `Empty`, which serializes as
/// `{"error": "No colors found"}` and does not abort the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorAnalysis {
    Palette {
        primary_colors: Vec<String>,
        dominant_color: String,
    },
    Empty {
        error: String,
    },
}

impl ColorAnalysis {
    pub fn from_colors(colors: &[RgbColor]) -> Self {
        match colors.first() {
            Some(dominant) => ColorAnalysis::Palette {
                primary_colors: colors.iter().map(RgbColor::to_hex).collect(),
                dominant_color: dominant.to_hex(),
            },
            None => ColorAnalysis::empty(),
        }
    }

    pub fn empty() -> Self {
        ColorAnalysis::Empty {
            error: NO_COLORS_FOUND.to_string(),
        }
    }

    pub fn primary_colors(&self) -> &[String] {
        match self {
            ColorAnalysis::Palette { primary_colors, .. } => primary_colors,
            ColorAnalysis::Empty { .. } => &[],
        }
    }

    /// Most frequent color, `#000000` when there is none.
    pub fn dominant_color(&self) -> String {
        match self {
            ColorAnalysis::Palette { dominant_color, .. } => dominant_color.clone(),
            ColorAnalysis::Empty { .. } => RgbColor::BLACK.to_hex(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ColorAnalysis::Empty { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorCompatibility {
    pub complementary_colors: Vec<String>,
    pub avoid_colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub rating: f64,
    pub color_analysis: ColorAnalysis,
    pub skin_tone_analysis: SkinToneAnalysis,
    pub suggestions: Vec<String>,
    pub alternative_colors: Vec<String>,
    pub color_compatibility: ColorCompatibility,
}
