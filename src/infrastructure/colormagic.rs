use crate::domain::models::ColorPalette;
use crate::domain::search::{PaletteSearch, SearchError};
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Url;
use serde::Deserialize;

const SEARCH_ENDPOINT: &str = "https://colormagic.app/api/palette/search";

/// Wire shape of one palette in the search response. The server sends
/// other fields alongside `colors`; they are ignored.
#[derive(Debug, Deserialize)]
struct PaletteBody {
    colors: Vec<String>,
}

pub struct ColorMagicClient {
    http: reqwest::Client,
}

impl ColorMagicClient {
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for ColorMagicClient {
    fn default() -> Self {
        Self::new()
    }
}

fn build_search_url(query: &str) -> Result<Url, SearchError> {
    let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
    Url::parse(&format!("{SEARCH_ENDPOINT}?q={encoded}")).map_err(|_| SearchError::InvalidUrl {
        query: query.to_string(),
    })
}

/// Decode a search response body into palettes, each with a fresh local
/// identity. Any body that is not a JSON array of `{ "colors": [...] }`
/// objects is a decode error.
fn decode_palettes(body: &str) -> Result<Vec<ColorPalette>, serde_json::Error> {
    let bodies: Vec<PaletteBody> = serde_json::from_str(body)?;
    Ok(bodies
        .into_iter()
        .map(|p| ColorPalette::new(p.colors))
        .collect())
}

#[async_trait]
impl PaletteSearch for ColorMagicClient {
    async fn fetch_palettes(&self, query: &str) -> Result<Vec<ColorPalette>, SearchError> {
        let url = build_search_url(query)?;
        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(decode_palettes(&body)?)
    }
}
