use crate::analyzer::AnalysisLimits;
use crate::models::ModelSet;

/// Shared state for the HTTP shell: the process-wide model set and the
/// analyzer limits, both immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub models: ModelSet,
    pub limits: AnalysisLimits,
}

impl AppState {
    pub fn new(models: ModelSet, limits: AnalysisLimits) -> Self {
        Self { models, limits }
    }
}
