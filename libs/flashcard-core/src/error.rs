//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using TranslateError.
pub type Result<T> = std::result::Result<T, TranslateError>;

/// Errors that can occur while enriching a single span.
///
/// The card pipeline recovers from every variant by substituting a
/// placeholder card, so none of these abort a run.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("network error: {0}")]
    Network(String),

    #[error("backend error: {status} - {message}")]
    Backend { status: u16, message: String },

    #[error("invalid response body: {0}")]
    Parse(String),

    #[error("malformed reply: {0}")]
    MalformedReply(String),

    #[error("empty reply")]
    EmptyReply,
}
