use tracing::debug;

use crate::pipeline::types::{ColorCompatibility, SkinTone};

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;
/// Rating change for any complementary match, and (negated) for any color to avoid.
pub const MATCH_ADJUSTMENT: f64 = 0.5;

#[derive(Debug, PartialEq, Eq)]
pub struct CompatibilityRules {
    pub complementary: &'static [&'static str],
    pub avoid: &'static [&'static str],
}

impl CompatibilityRules {
    pub fn to_compatibility(&self) -> ColorCompatibility {
        ColorCompatibility {
            complementary_colors: self.complementary.iter().map(|c| c.to_string()).collect(),
            avoid_colors: self.avoid.iter().map(|c| c.to_string()).collect(),
        }
    }
}

static VERY_LIGHT: CompatibilityRules = CompatibilityRules {
    complementary: &["#000000", "#1a1a1a", "#333333", "#4d4d4d"],
    avoid: &["#ffffff", "#f0f0f0", "#e6e6e6"],
};

static LIGHT: CompatibilityRules = CompatibilityRules {
    complementary: &["#000000", "#1a1a1a", "#333333", "#4d4d4d", "#666666"],
    avoid: &["#ffffff", "#f0f0f0"],
};

static MEDIUM: CompatibilityRules = CompatibilityRules {
    complementary: &["#000000", "#1a1a1a", "#333333", "#4d4d4d", "#666666", "#808080"],
    avoid: &[],
};

static DARK: CompatibilityRules = CompatibilityRules {
    complementary: &["#ffffff", "#f0f0f0", "#e6e6e6", "#d4d4d4"],
    avoid: &["#000000", "#1a1a1a"],
};

static VERY_DARK: CompatibilityRules = CompatibilityRules {
    complementary: &["#ffffff", "#f0f0f0", "#e6e6e6", "#d4d4d4", "#b8b8b8"],
    avoid: &["#000000"],
};

/// Color rules for a skin tone. Unknown falls back to the Medium rules.
pub fn rules_for(tone: SkinTone) -> &'static CompatibilityRules {
    match tone {
        SkinTone::VeryLight => &VERY_LIGHT,
        SkinTone::Light => &LIGHT,
        SkinTone::Medium | SkinTone::Unknown => &MEDIUM,
        SkinTone::Dark => &DARK,
        SkinTone::VeryDark => &VERY_DARK,
    }
}

/// String-keyed entry point for callers holding a display label such as "Very Dark"
/// (stored journal entries, external input). Unrecognized labels get the Medium rules.
pub fn rules_for_label(label: &str) -> &'static CompatibilityRules {
    SkinTone::from_label(label).map_or(&MEDIUM, rules_for)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompatibilityOutcome {
    pub adjusted_rating: f64,
    pub compatibility: ColorCompatibility,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CompatibilityScorer;

impl CompatibilityScorer {
    pub fn new() -> Self {
        Self
    }

    /// Adjust `rating` by how the outfit colors sit against the tone's rules.
    ///
    /// Matching is exact string equality on lowercase hex.
    pub fn score(
        &self,
        rating: f64,
        tone: SkinTone,
        outfit_colors: &[String],
    ) -> CompatibilityOutcome {
        Self::apply(rating, rules_for(tone), outfit_colors)
    }

    /// [`score`](Self::score) for a skin tone given by its display label.
    pub fn score_label(
        &self,
        rating: f64,
        label: &str,
        outfit_colors: &[String],
    ) -> CompatibilityOutcome {
        Self::apply(rating, rules_for_label(label), outfit_colors)
    }

    fn apply(
        rating: f64,
        rules: &CompatibilityRules,
        outfit_colors: &[String],
    ) -> CompatibilityOutcome {
        let complementary_matches = outfit_colors
            .iter()
            .filter(|c| rules.complementary.contains(&c.as_str()))
            .count();
        let avoid_matches = outfit_colors
            .iter()
            .filter(|c| rules.avoid.contains(&c.as_str()))
            .count();

        let mut adjusted = rating;
        if complementary_matches > 0 {
            adjusted += MATCH_ADJUSTMENT;
        }
        if avoid_matches > 0 {
            adjusted -= MATCH_ADJUSTMENT;
        }
        let adjusted_rating = adjusted.clamp(MIN_RATING, MAX_RATING);

        debug!(
            "Compatibility: {} complementary, {} avoid matches, rating {} -> {}",
            complementary_matches, avoid_matches, rating, adjusted_rating
        );

        CompatibilityOutcome {
            adjusted_rating,
            compatibility: rules.to_compatibility(),
        }
    }
}
