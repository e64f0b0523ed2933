pub mod in_memory;
pub mod journal_factory;
pub mod journal_writer;
pub mod json_lines;

pub use in_memory::InMemoryJournalWriter;
pub use journal_factory::open_journal;
pub use journal_writer::{AnalysisJournalEntry, AnalysisJournalWriter};
pub use json_lines::JsonLinesJournalWriter;
