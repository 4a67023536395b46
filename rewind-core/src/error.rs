use thiserror::Error;

/// Error type shared by every rewind sampler, dataset and loader.
#[derive(Error, Debug, PartialEq, Eq, Clone)] // PartialEq for easier testing
pub enum SamplerError {
    /// End of the current pass. Not a failure: callers stop pulling, or
    /// `reset`/`soft_reset` the sampler to start another pass.
    #[error("Sampler exhausted: no items left in the current pass")]
    Exhausted,

    #[error("Invalid checkpoint: {reason}")]
    InvalidCheckpoint { reason: String },

    #[error("Invalid configuration: {reason}")]
    ConfigurationError { reason: String },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl SamplerError {
    pub fn invalid_checkpoint(reason: impl Into<String>) -> Self {
        SamplerError::InvalidCheckpoint {
            reason: reason.into(),
        }
    }

    pub fn configuration(reason: impl Into<String>) -> Self {
        SamplerError::ConfigurationError {
            reason: reason.into(),
        }
    }

    /// Returns `true` for the end-of-pass signal.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, SamplerError::Exhausted)
    }
}
