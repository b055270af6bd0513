//! Error types for pubmerge.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations.

/// Errors from a source adapter's HTTP layer.
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    /// HTTP transport error (connection, DNS, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected wire shape.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A pagination link could not be parsed or rewritten.
    #[error("invalid pagination URL: {0}")]
    PaginationUrl(#[from] url::ParseError),

    /// Non-success HTTP status with body context.
    #[error("unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Response body excerpt.
        message: String,
    },
}

impl SourceError {
    /// Create an unexpected status error.
    #[must_use]
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus { status, message: message.into() }
    }
}

/// Errors from the reconciliation engine.
#[derive(thiserror::Error, Debug)]
pub enum ReconcileError {
    /// Every source contributed zero usable records. The run must not
    /// produce output in this state.
    #[error("no usable records from any source")]
    NoUsableRecords,
}

/// Result type alias for source adapter operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Result type alias for engine operations.
pub type ReconcileResult<T> = Result<T, ReconcileError>;
