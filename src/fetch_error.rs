#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP status {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}
