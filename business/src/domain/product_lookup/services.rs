use async_trait::async_trait;

use super::errors::LookupError;

/// Store label given to items added from a lookup result.
pub const LOOKUP_PROVENANCE: &str = "Wikipedia";

/// Summary of a product found by a free-text lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub title: String,
    pub extract: String,
    pub thumbnail_url: Option<String>,
}

/// Service port for looking products up by free text.
#[async_trait]
pub trait ProductLookupService: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<ProductSummary, LookupError>;
}
