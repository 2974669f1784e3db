use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product_lookup::services::LOOKUP_PROVENANCE;
use crate::domain::product_lookup::use_cases::add_result::{
    AddLookupResultParams, AddLookupResultUseCase,
};
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::merge::MergeOutcome;
use crate::domain::shopping_list::model::ItemDetails;
use crate::domain::shopping_list::store::ListStore;

/// Adds a lookup result to the active list. The result carries no price, so
/// it only ever adds a new item; an existing item with the same name stays
/// as it is.
pub struct AddLookupResultUseCaseImpl {
    pub store: Arc<ListStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddLookupResultUseCase for AddLookupResultUseCaseImpl {
    async fn execute(
        &self,
        params: AddLookupResultParams,
    ) -> Result<MergeOutcome, ShoppingListError> {
        self.logger
            .info(&format!("Adding lookup result to active list: {}", params.title));

        let details = ItemDetails {
            price: None,
            store: Some(LOOKUP_PROVENANCE.to_string()),
            address: Some(params.extract),
            purchase_date: None,
        };
        let outcome = self
            .store
            .apply(|state| state.add_item(&params.title, details))
            .await;

        self.logger
            .info(&format!("Lookup result '{}' {}", params.title, outcome.label()));
        Ok(outcome)
    }
}
