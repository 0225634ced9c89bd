use thiserror::Error;

use crate::logic::RecordError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Fetch(#[from] FetchFailure),
    #[error(transparent)]
    ImagePreload(#[from] ImagePreloadFailure),
    #[error("catalog response is not valid JSON: {0}")]
    InvalidBody(#[source] serde_json::Error),
    #[error(transparent)]
    MalformedRecord(#[from] RecordError),
}

impl CatalogError {
    /// Whether asking the user to try again makes sense
    pub fn is_retryable(&self) -> bool {
        matches!(self, CatalogError::Fetch(_) | CatalogError::ImagePreload(_))
    }
}

#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("could not reach the catalog service, please try again later ({message})")]
    Transport { message: String },
    #[error("catalog service answered with HTTP {status}, please try again later")]
    Status { status: u16 },
}

impl FetchFailure {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchFailure::Status { status } => Some(*status),
            FetchFailure::Transport { .. } => None,
        }
    }
}

impl From<reqwest::Error> for FetchFailure {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchFailure::Status {
                status: status.as_u16(),
            },
            None => FetchFailure::Transport {
                message: err.to_string(),
            },
        }
    }
}

#[derive(Debug, Error)]
#[error("failed to preload logo {url}: {message}")]
pub struct ImagePreloadFailure {
    pub url: String,
    pub message: String,
}

impl ImagePreloadFailure {
    pub fn url(&self) -> &str {
        &self.url
    }
}
