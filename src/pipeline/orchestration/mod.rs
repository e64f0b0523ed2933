pub mod analyzer_service;
pub mod pipeline_orchestrator;

pub use analyzer_service::{AnalyzerBuilder, AnalyzerService};
pub use pipeline_orchestrator::{build_suggestions, PipelineOrchestrator, BASE_RATING};
