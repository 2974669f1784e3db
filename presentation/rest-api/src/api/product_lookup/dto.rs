use poem_openapi::Object;

use business::domain::product_lookup::services::ProductSummary;

#[derive(Debug, Clone, Object)]
pub struct ProductSummaryResponse {
    pub title: String,
    /// Short plain-text description
    pub extract: String,
    #[oai(skip_serializing_if_is_none)]
    pub thumbnail_url: Option<String>,
}

impl From<ProductSummary> for ProductSummaryResponse {
    fn from(summary: ProductSummary) -> Self {
        Self {
            title: summary.title,
            extract: summary.extract,
            thumbnail_url: summary.thumbnail_url,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddLookupResultRequest {
    /// Title of the lookup result, used as the item name
    pub title: String,
    /// Summary kept with the item
    #[oai(default)]
    pub extract: String,
}
