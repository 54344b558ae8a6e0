use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Search error
#[derive(Error, Debug)]
pub enum SearchError {
    /// The request could not be sent or the response body could not be read
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a status other than `200 OK`
    #[error("Search query failed: {0}")]
    HttpStatus(String),

    /// The response body does not match the search result schema
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}
