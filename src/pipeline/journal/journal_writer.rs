use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PersistenceError;
use crate::pipeline::types::AnalysisResult;

/// One persisted analysis: the result fields plus identity and provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisJournalEntry {
    pub id: Uuid,
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub timestamp: DateTime<Utc>,
    /// `WxH` of the decoded image, before any downscaling
    pub image_size: String,
}

impl AnalysisJournalEntry {
    pub fn from_result(result: AnalysisResult, image_size: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            result,
            timestamp: Utc::now(),
            image_size: image_size.into(),
        }
    }
}

/// Append-only sink for analysis results
#[async_trait]
pub trait AnalysisJournalWriter: Send + Sync {
    async fn record(&self, entry: AnalysisJournalEntry) -> Result<(), PersistenceError>;

    fn name(&self) -> &'static str;
}
