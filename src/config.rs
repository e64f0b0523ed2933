use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::AppError;

const ENV_PREFIX: &str = "OUTFIT_RATER";
/// Largest downscale side; the sampled square is held in memory per analysis.
pub const MAX_SAMPLE_SIZE: u32 = 1024;
/// Cluster labels are stored as `u8`.
pub const MAX_CLUSTER_COUNT: usize = 255;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub analysis: AnalysisSettings,
    pub journal: JournalSettings,
    pub analyzer_timeout_ms: Option<u64>,
    pub log_level: String,
}

/// Tunables for the palette extractor and the skin-tone classifier
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Side length of the square both analyses downscale to
    pub sample_size: u32,
    pub palette_size: usize,
    pub cluster_count: usize,
    pub cluster_seed: u64,
    pub max_iterations: usize,
    /// Convergence threshold, relative to the mean channel variance of the data
    pub tolerance: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JournalSettings {
    /// JSON-lines file receiving one entry per analysis. No journal when unset.
    pub path: Option<PathBuf>,
    pub max_in_memory_entries: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            analysis: AnalysisSettings::default(),
            journal: JournalSettings::default(),
            analyzer_timeout_ms: None,
            log_level: "info".to_string(),
        }
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            sample_size: 150,
            palette_size: 5,
            cluster_count: 5,
            cluster_seed: 42,
            max_iterations: 300,
            tolerance: 1e-4,
        }
    }
}

impl Default for JournalSettings {
    fn default() -> Self {
        Self {
            path: None,
            max_in_memory_entries: 1000,
        }
    }
}

impl Configuration {
    /// Load configuration from an optional file, then `OUTFIT_RATER__*` environment variables.
    ///
    /// Nested keys use `__`, e.g. `OUTFIT_RATER__JOURNAL__PATH=analyses.jsonl`.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let configuration: Self = settings.try_deserialize()?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let analysis = &self.analysis;
        if analysis.sample_size == 0 || analysis.sample_size > MAX_SAMPLE_SIZE {
            return Err(AppError::InvalidConfiguration(format!(
                "Sample size must be between 1 and {}, got {}",
                MAX_SAMPLE_SIZE, analysis.sample_size
            )));
        }

        if analysis.palette_size == 0 {
            return Err(AppError::InvalidConfiguration(
                "Palette size must be greater than 0".to_string(),
            ));
        }

        if analysis.cluster_count == 0 || analysis.cluster_count > MAX_CLUSTER_COUNT {
            return Err(AppError::InvalidConfiguration(format!(
                "Cluster count must be between 1 and {}, got {}",
                MAX_CLUSTER_COUNT, analysis.cluster_count
            )));
        }

        if analysis.max_iterations == 0 {
            return Err(AppError::InvalidConfiguration(
                "Max iterations must be greater than 0".to_string(),
            ));
        }

        if !analysis.tolerance.is_finite() || analysis.tolerance < 0.0 {
            return Err(AppError::InvalidConfiguration(format!(
                "Tolerance must be a finite, non-negative number, got {}",
                analysis.tolerance
            )));
        }

        if self.journal.max_in_memory_entries == 0 {
            return Err(AppError::InvalidConfiguration(
                "In-memory journal size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
