use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::store::ListStore;
use crate::domain::shopping_list::use_cases::remove_list::{RemoveListParams, RemoveListUseCase};

pub struct RemoveListUseCaseImpl {
    pub store: Arc<ListStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveListUseCase for RemoveListUseCaseImpl {
    async fn execute(&self, params: RemoveListParams) -> Result<bool, ShoppingListError> {
        self.logger
            .info(&format!("Removing shopping list: {}", params.id));

        let removed = self.store.apply(|state| state.remove_list(&params.id)).await;

        if !removed {
            self.logger
                .warn(&format!("Shopping list {} not found, nothing removed", params.id));
        }
        Ok(removed)
    }
}
