use std::fmt;

/// Error kind for query-source errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// The collaborator call itself failed (network/service fault).
    Request,
    /// The collaborator's response did not match the expected wire shape.
    Format,
}

/// Error returned by `QuerySource` implementations and the wire adapter.
#[derive(Debug)]
pub struct SourceError {
    pub kind: SourceErrorKind,
    pub message: String,
}

impl SourceError {
    pub fn request(msg: impl Into<String>) -> Self {
        Self { kind: SourceErrorKind::Request, message: msg.into() }
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self { kind: SourceErrorKind::Format, message: msg.into() }
    }

    /// Add context to the error, preserving the original kind.
    ///
    /// Produces: `"context: original message"`.
    pub fn with_context(self, ctx: impl fmt::Display) -> Self {
        Self {
            kind: self.kind,
            message: format!("{ctx}: {}", self.message),
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SourceError {}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        Self::request(e.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        Self::format(e.to_string())
    }
}
