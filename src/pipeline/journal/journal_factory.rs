use std::sync::Arc;
use tracing::warn;

use super::in_memory::InMemoryJournalWriter;
use super::journal_writer::AnalysisJournalWriter;
use super::json_lines::JsonLinesJournalWriter;
use crate::config::JournalSettings;

/// Build the journal described by `settings`.
///
/// A configured path gets a JSON-lines file. Without one, or when the file
/// cannot be opened, results go to a bounded in-memory journal.
pub async fn open_journal(settings: &JournalSettings) -> Arc<dyn AnalysisJournalWriter> {
    if let Some(path) = &settings.path {
        match JsonLinesJournalWriter::open(path).await {
            Ok(journal) => return Arc::new(journal),
            Err(e) => warn!(
                "Journal at {} unavailable, keeping analyses in memory: {}",
                path.display(),
                e
            ),
        }
    }
    Arc::new(InMemoryJournalWriter::new(settings.max_in_memory_entries))
}
