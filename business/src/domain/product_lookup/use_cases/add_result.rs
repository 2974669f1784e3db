use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::merge::MergeOutcome;

pub struct AddLookupResultParams {
    pub title: String,
    pub extract: String,
}

#[async_trait]
pub trait AddLookupResultUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AddLookupResultParams,
    ) -> Result<MergeOutcome, ShoppingListError>;
}
