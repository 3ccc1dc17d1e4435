use thiserror::Error;

#[derive(Error, Debug)]
pub enum SitePeekError {
    #[error("Invalid URL: {0}")]
    InvalidInput(String),

    #[error("Failed to fetch {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SitePeekError {
    pub fn fetch_failed(url: &str, reason: impl Into<String>) -> Self {
        Self::FetchFailed {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<tokio::task::JoinError> for SitePeekError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(format!("extraction task failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, SitePeekError>;
