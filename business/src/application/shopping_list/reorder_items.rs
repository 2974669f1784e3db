use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::store::ListStore;
use crate::domain::shopping_list::use_cases::reorder_items::{
    ReorderItemsParams, ReorderItemsUseCase,
};

pub struct ReorderItemsUseCaseImpl {
    pub store: Arc<ListStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ReorderItemsUseCase for ReorderItemsUseCaseImpl {
    async fn execute(&self, params: ReorderItemsParams) -> Result<bool, ShoppingListError> {
        self.logger.debug(&format!(
            "Moving item from position {} to {}",
            params.from_index, params.to_index
        ));

        let moved = self
            .store
            .apply(|state| state.reorder_items(params.from_index, params.to_index))
            .await;
        Ok(moved)
    }
}
