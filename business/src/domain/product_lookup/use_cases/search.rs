use async_trait::async_trait;

use crate::domain::product_lookup::errors::LookupError;
use crate::domain::product_lookup::services::ProductSummary;

pub struct SearchProductParams {
    pub query: String,
}

#[async_trait]
pub trait SearchProductUseCase: Send + Sync {
    async fn execute(&self, params: SearchProductParams) -> Result<ProductSummary, LookupError>;
}
