use thiserror::Error;

#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("Malformed event at index {index}: field `{field}` {reason}")]
    MalformedEvent {
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Worker error: {0}")]
    Worker(String),
}

impl HighlightError {
    pub(crate) fn malformed(index: usize, field: &'static str, reason: impl Into<String>) -> Self {
        HighlightError::MalformedEvent {
            index,
            field,
            reason: reason.into(),
        }
    }
}
