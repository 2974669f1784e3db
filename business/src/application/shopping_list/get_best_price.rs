use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shared::price::Price;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::store::ListStore;
use crate::domain::shopping_list::use_cases::get_best_price::{
    GetBestPriceParams, GetBestPriceUseCase,
};

pub struct GetBestPriceUseCaseImpl {
    pub store: Arc<ListStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetBestPriceUseCase for GetBestPriceUseCaseImpl {
    async fn execute(
        &self,
        params: GetBestPriceParams,
    ) -> Result<Option<Price>, ShoppingListError> {
        self.logger
            .debug(&format!("Looking up best price for: {}", params.name));

        let state = self.store.snapshot().await;
        Ok(state.best_price_for(&params.name).cloned())
    }
}
