use crate::domain::models::ColorPalette;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("could not build a request url for query {query:?}")]
    InvalidUrl { query: String },

    #[error("palette search request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed palette response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaletteSearch: Send + Sync {
    /// Fetch palettes matching `query`. Suspends until the round trip
    /// completes; no retry, no caching.
    async fn fetch_palettes(&self, query: &str) -> Result<Vec<ColorPalette>, SearchError>;
}
