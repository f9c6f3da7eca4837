use crate::adapter::NormalizeError;

/// Failures surfaced by the content source and adapter.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("content provider rejected the credential")]
    Unauthorized,

    #[error("content provider error {status} ({code}): {message}")]
    Provider {
        status: u16,
        code: String,
        message: String,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed provider payload: {0}")]
    Decode(String),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

impl ContentError {
    /// Whether the error means the requested id does not resolve.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound(_) | ContentError::InvalidId(_))
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
