use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;

use super::journal_writer::{AnalysisJournalEntry, AnalysisJournalWriter};
use crate::error::PersistenceError;

/// Bounded in-memory journal (for testing and development)
pub struct InMemoryJournalWriter {
    entries: Mutex<VecDeque<AnalysisJournalEntry>>,
    max_entries: usize,
}

impl InMemoryJournalWriter {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(max_entries.min(1000))),
            max_entries,
        }
    }

    pub async fn entries(&self) -> Vec<AnalysisJournalEntry> {
        self.entries.lock().await.iter().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }
}

#[async_trait]
impl AnalysisJournalWriter for InMemoryJournalWriter {
    async fn record(&self, entry: AnalysisJournalEntry) -> Result<(), PersistenceError> {
        if self.max_entries == 0 {
            return Err(PersistenceError::Unavailable(
                "in-memory journal has no capacity".to_string(),
            ));
        }

        let mut entries = self.entries.lock().await;
        entries.push_back(entry);
        while entries.len() > self.max_entries {
            entries.pop_front();
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::{
        AnalysisResult, ColorAnalysis, ColorCompatibility, SkinToneAnalysis,
    };

    fn entry(rating: f64) -> AnalysisJournalEntry {
        AnalysisJournalEntry::from_result(
            AnalysisResult {
                rating,
                color_analysis: ColorAnalysis::empty(),
                skin_tone_analysis: SkinToneAnalysis::unknown(),
                suggestions: Vec::new(),
                alternative_colors: Vec::new(),
                color_compatibility: ColorCompatibility {
                    complementary_colors: Vec::new(),
                    avoid_colors: Vec::new(),
                },
            },
            "1x1",
        )
    }

    #[tokio::test]
    async fn oldest_entries_are_evicted() {
        let journal = InMemoryJournalWriter::new(2);
        for rating in [1.0, 2.0, 3.0] {
            journal.record(entry(rating)).await.unwrap();
        }

        let ratings: Vec<f64> = journal
            .entries()
            .await
            .iter()
            .map(|e| e.result.rating)
            .collect();
        assert_eq!(ratings, vec![2.0, 3.0]);
    }

    #[tokio::test]
    async fn zero_capacity_is_unavailable() {
        let journal = InMemoryJournalWriter::new(0);
        assert!(matches!(
            journal.record(entry(1.0)).await,
            Err(PersistenceError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn entries_get_distinct_ids() {
        let journal = InMemoryJournalWriter::new(10);
        journal.record(entry(1.0)).await.unwrap();
        journal.record(entry(1.0)).await.unwrap();

        let entries = journal.entries().await;
        assert_ne!(entries[0].id, entries[1].id);
        journal.clear().await;
        assert_eq!(journal.len().await, 0);
    }
}
