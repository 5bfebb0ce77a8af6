use wellcheck_types::{DefinitionError, EngineError};

/// Error type for a survey session.
#[derive(Debug, thiserror::Error)]
pub enum WellCheckError {
    /// The fetched survey could not be loaded.
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    /// An engine call was rejected.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The survey source failed (network, server, parsing...).
    #[error("Survey source error: {0}")]
    Source(#[source] anyhow::Error),

    /// The submission sink failed. The session is still intact.
    #[error("Submission error: {0}")]
    Sink(#[source] anyhow::Error),
}

impl WellCheckError {
    /// Create a source error from any error type.
    ///
    /// A source that fails with a [`DefinitionError`] delivered a malformed survey,
    /// which is reported as [`WellCheckError::Definition`] instead.
    pub fn source_error(err: impl Into<anyhow::Error>) -> Self {
        match err.into().downcast::<DefinitionError>() {
            Ok(definition) => Self::Definition(definition),
            Err(err) => Self::Source(err),
        }
    }

    /// Create a sink error from any error type.
    pub fn sink_error(err: impl Into<anyhow::Error>) -> Self {
        Self::Sink(err.into())
    }

    /// Check if retrying the same call could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Source(_) | Self::Sink(_))
    }
}
