use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::store::ListStore;
use crate::domain::shopping_list::use_cases::clear_completed::ClearCompletedItemsUseCase;

pub struct ClearCompletedItemsUseCaseImpl {
    pub store: Arc<ListStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCompletedItemsUseCase for ClearCompletedItemsUseCaseImpl {
    async fn execute(&self) -> Result<usize, ShoppingListError> {
        self.logger
            .info("Clearing completed items from the active list");

        let removed = self.store.apply(|state| state.clear_completed()).await;

        self.logger
            .info(&format!("Cleared {} completed items", removed));
        Ok(removed)
    }
}
