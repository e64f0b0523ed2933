use crate::pipeline::types::{ColorAnalysis, SkinToneAnalysis};

// Markers to track how far a request has come through the pipeline
pub struct DecodedState;
pub struct AnalyzedState {
    pub(super) palette: ColorAnalysis,
    pub(super) skin_tone: SkinToneAnalysis,
}

pub trait ProcessingState: 'static {
    fn state_name() -> &'static str;
}

impl ProcessingState for DecodedState {
    fn state_name() -> &'static str {
        "Decoded"
    }
}

impl ProcessingState for AnalyzedState {
    fn state_name() -> &'static str {
        "Analyzed"
    }
}
