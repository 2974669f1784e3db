use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::Item;
use crate::domain::shopping_list::store::ListStore;
use crate::domain::shopping_list::use_cases::remove_item::{RemoveItemParams, RemoveItemUseCase};

pub struct RemoveItemUseCaseImpl {
    pub store: Arc<ListStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveItemUseCase for RemoveItemUseCaseImpl {
    async fn execute(&self, params: RemoveItemParams) -> Result<Option<Item>, ShoppingListError> {
        self.logger
            .info(&format!("Removing item: {}", params.id));

        let removed = self.store.apply(|state| state.remove_item(&params.id)).await;

        if removed.is_none() {
            self.logger
                .warn(&format!("Item {} not in the active list", params.id));
        }
        Ok(removed)
    }
}
