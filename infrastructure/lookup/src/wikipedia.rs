use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use business::domain::product_lookup::errors::LookupError;
use business::domain::product_lookup::services::{ProductLookupService, ProductSummary};

use crate::client::LookupClient;

#[derive(Deserialize)]
struct SummaryResponse {
    title: String,
    #[serde(default)]
    extract: String,
    thumbnail: Option<Thumbnail>,
}

#[derive(Deserialize)]
struct Thumbnail {
    source: String,
}

impl From<SummaryResponse> for ProductSummary {
    fn from(response: SummaryResponse) -> Self {
        ProductSummary {
            title: response.title,
            extract: response.extract,
            thumbnail_url: response.thumbnail.map(|thumbnail| thumbnail.source),
        }
    }
}

/// Looks products up through the Wikipedia page summary endpoint.
pub struct ProductLookupWikipedia {
    client: LookupClient,
}

impl ProductLookupWikipedia {
    pub fn new(client: LookupClient) -> Self {
        Self { client }
    }

    fn check_status(status: StatusCode) -> Result<(), LookupError> {
        match status {
            StatusCode::NOT_FOUND => Err(LookupError::NotFound),
            status if !status.is_success() => Err(LookupError::Unavailable),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ProductLookupService for ProductLookupWikipedia {
    async fn lookup(&self, query: &str) -> Result<ProductSummary, LookupError> {
        let url = self.client.summary_url(query)?;

        let response = self
            .client
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|_| LookupError::Unavailable)?;

        Self::check_status(response.status())?;

        let data: SummaryResponse = response
            .json()
            .await
            .map_err(|_| LookupError::Unavailable)?;

        Ok(data.into())
    }
}
