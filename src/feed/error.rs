use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("source returned no usable records")]
    Empty,
    #[error("all element sources failed: {0}")]
    AllSourcesFailed(String),
}
