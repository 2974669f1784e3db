use async_trait::async_trait;

use crate::domain::shared::value_objects::ListId;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct SetActiveListParams {
    pub id: ListId,
}

#[async_trait]
pub trait SetActiveListUseCase: Send + Sync {
    async fn execute(&self, params: SetActiveListParams) -> Result<(), ShoppingListError>;
}
