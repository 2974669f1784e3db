use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::store::ListStore;
use crate::domain::shopping_list::use_cases::set_active_list::{
    SetActiveListParams, SetActiveListUseCase,
};

pub struct SetActiveListUseCaseImpl {
    pub store: Arc<ListStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetActiveListUseCase for SetActiveListUseCaseImpl {
    async fn execute(&self, params: SetActiveListParams) -> Result<(), ShoppingListError> {
        self.logger
            .debug(&format!("Selecting shopping list: {}", params.id));

        self.store
            .apply(move |state| state.set_active_list(params.id))
            .await;
        Ok(())
    }
}
