use async_trait::async_trait;

use crate::domain::shared::price::Price;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct GetBestPriceParams {
    pub name: String,
}

#[async_trait]
pub trait GetBestPriceUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetBestPriceParams,
    ) -> Result<Option<Price>, ShoppingListError>;
}
