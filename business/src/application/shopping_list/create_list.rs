use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::store::ListStore;
use crate::domain::shopping_list::use_cases::create_list::{CreateListParams, CreateListUseCase};

pub struct CreateListUseCaseImpl {
    pub store: Arc<ListStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateListUseCase for CreateListUseCaseImpl {
    async fn execute(&self, params: CreateListParams) -> Result<ShoppingList, ShoppingListError> {
        self.logger
            .info(&format!("Creating shopping list: {}", params.name));

        let list = self
            .store
            .try_apply(|state| state.create_list(&params.name))
            .await?;

        self.logger
            .info(&format!("Shopping list created and selected: {}", list.id));
        Ok(list)
    }
}
