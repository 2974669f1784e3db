use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::merge::MergeOutcome;
use crate::domain::shopping_list::model::ItemDetails;
use crate::domain::shopping_list::store::ListStore;
use crate::domain::shopping_list::use_cases::add_item::{AddItemParams, AddItemUseCase};

pub struct AddItemUseCaseImpl {
    pub store: Arc<ListStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemUseCase for AddItemUseCaseImpl {
    async fn execute(&self, params: AddItemParams) -> Result<MergeOutcome, ShoppingListError> {
        self.logger
            .info(&format!("Adding item to active list: {}", params.name));

        let details = ItemDetails {
            price: params.price,
            store: params.store,
            address: params.address,
            purchase_date: params.purchase_date,
        };
        let outcome = self
            .store
            .apply(|state| state.add_item(&params.name, details))
            .await;

        match &outcome {
            MergeOutcome::Ignored => self.logger.warn(&format!(
                "Item '{}' ignored: blank name or no active list",
                params.name
            )),
            merged => self
                .logger
                .info(&format!("Item '{}' {}", params.name, merged.label())),
        }
        Ok(outcome)
    }
}
