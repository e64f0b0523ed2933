pub mod color_analysis_service;
pub mod kmeans;
pub mod skin_tone_service;

pub use color_analysis_service::{color_histogram, ColorAnalysisService};
pub use kmeans::KMeans;
pub use skin_tone_service::SkinToneService;
