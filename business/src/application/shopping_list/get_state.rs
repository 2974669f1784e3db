use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::state::ShoppingState;
use crate::domain::shopping_list::store::ListStore;
use crate::domain::shopping_list::use_cases::get_state::GetShoppingStateUseCase;

pub struct GetShoppingStateUseCaseImpl {
    pub store: Arc<ListStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShoppingStateUseCase for GetShoppingStateUseCaseImpl {
    async fn execute(&self) -> Result<Arc<ShoppingState>, ShoppingListError> {
        self.logger.debug("Reading shopping state");
        Ok(self.store.snapshot().await)
    }
}
