use crate::models::{ConfigurationError, SelectionError};

/// Errors that can occur while building or running an engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ConfigurationError: {0}")]
    ConfigurationError(#[from] ConfigurationError),
    #[error("SelectionError: {0}")]
    SelectionError(#[from] SelectionError),
    #[error("GenerationLimitReached: all {generation_count} generations have been bred")]
    GenerationLimitReached { generation_count: u32 },
    #[error("AlreadyCompleted: the run has already emitted its final report")]
    AlreadyCompleted,
}
