use serde::{Deserialize, Serialize};
use std::fmt;

use super::color::RgbColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkinTone {
    #[serde(rename = "Very Light")]
    VeryLight,
    Light,
    Medium,
    Dark,
    #[serde(rename = "Very Dark")]
    VeryDark,
    Unknown,
}

impl SkinTone {
    pub const ALL: [SkinTone; 6] = [
        SkinTone::VeryLight,
        SkinTone::Light,
        SkinTone::Medium,
        SkinTone::Dark,
        SkinTone::VeryDark,
        SkinTone::Unknown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkinTone::VeryLight => "Very Light",
            SkinTone::Light => "Light",
            SkinTone::Medium => "Medium",
            SkinTone::Dark => "Dark",
            SkinTone::VeryDark => "Very Dark",
            SkinTone::Unknown => "Unknown",
        }
    }

    pub fn from_label(label: &str) -> Option<SkinTone> {
        Self::ALL.into_iter().find(|tone| tone.label() == label)
    }

    /// Bucket a channel mean. Thresholds are strict and checked from the top.
    pub fn from_brightness(brightness: f64) -> SkinTone {
        if brightness > 200.0 {
            SkinTone::VeryLight
        } else if brightness > 170.0 {
            SkinTone::Light
        } else if brightness > 140.0 {
            SkinTone::Medium
        } else if brightness > 110.0 {
            SkinTone::Dark
        } else {
            SkinTone::VeryDark
        }
    }
}

impl fmt::Display for SkinTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinToneAnalysis {
    pub tone: SkinTone,
    pub color: String,
}

impl SkinToneAnalysis {
    pub fn detected(color: RgbColor) -> Self {
        Self {
            tone: SkinTone::from_brightness(color.brightness()),
            color: color.to_hex(),
        }
    }

    pub fn unknown() -> Self {
        Self {
            tone: SkinTone::Unknown,
            color: RgbColor::BLACK.to_hex(),
        }
    }
}
