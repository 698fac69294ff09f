use fourier_api::error::SourceError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Descriptor and datum trees fell out of sync: unrecognized kind
    /// pairing or arity mismatch. Fatal for the row, no partial recovery.
    #[error("malformed schema: {0}")]
    MalformedSchema(String),

    #[error("source error: {0}")]
    Source(#[from] SourceError),

    #[error("sink error: {0}")]
    Sink(String),
}

impl EngineError {
    /// Add context to the error.
    ///
    /// For `Source`, context is added to the inner `SourceError`.
    /// For other variants, context is prepended to the message.
    pub fn with_context(self, ctx: impl std::fmt::Display) -> Self {
        match self {
            EngineError::Source(e) => EngineError::Source(e.with_context(ctx)),
            EngineError::MalformedSchema(msg) => {
                EngineError::MalformedSchema(format!("{ctx}: {msg}"))
            }
            EngineError::Sink(msg) => EngineError::Sink(format!("{ctx}: {msg}")),
        }
    }
}
