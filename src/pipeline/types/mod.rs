mod analysis_result;
mod color;
mod skin_tone;

pub use analysis_result::{AnalysisResult, ColorAnalysis, ColorCompatibility, NO_COLORS_FOUND};
pub use color::{ColorSample, RgbColor};
pub use skin_tone::{SkinTone, SkinToneAnalysis};
