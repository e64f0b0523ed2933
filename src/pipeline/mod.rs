pub mod context;
pub mod journal;
pub mod orchestration;
pub mod services;
pub mod types;

pub use journal::{
    open_journal, AnalysisJournalWriter, InMemoryJournalWriter, JsonLinesJournalWriter,
};
pub use orchestration::{AnalyzerBuilder, AnalyzerService, PipelineOrchestrator};
pub use types::{AnalysisResult, ColorAnalysis, SkinTone, SkinToneAnalysis};
