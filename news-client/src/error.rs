use thiserror::Error;

/// Errors returned by [`crate::NewsClient`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid news API base url: {0:?}")]
    InvalidUrlBase(Option<url::ParseError>),

    /// Connection or DNS failure, or a timeout anywhere in the exchange.
    #[error("News API unavailable: {0}")]
    Unavailable(#[source] reqwest::Error),

    #[error("News API returned status {status}")]
    Status { status: u16, body: String },

    #[error("Failed to read news API response: {0}")]
    Fetching(#[source] reqwest::Error),

    #[error("Failed to decode news API response at JSON path {path}: {source}")]
    Decoding {
        path: String,
        #[source]
        source: serde_path_to_error::Error<serde_json::Error>,
    },
}

impl Error {
    /// True when the upstream could not be reached or did not answer in time.
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}
