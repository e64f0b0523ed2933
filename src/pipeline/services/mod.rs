pub mod color_transform;
pub mod compatibility_service;
pub mod image;

pub use color_transform::{generate_alternatives, hex_to_rgb, rgb_to_hex, AlternativeColors};
pub use compatibility_service::{CompatibilityOutcome, CompatibilityScorer};
pub use image::{ColorAnalysisService, SkinToneService};
