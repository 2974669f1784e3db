use async_trait::async_trait;

use crate::domain::shared::value_objects::ListId;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct RemoveListParams {
    pub id: ListId,
}

#[async_trait]
pub trait RemoveListUseCase: Send + Sync {
    /// Returns whether a list was removed.
    async fn execute(&self, params: RemoveListParams) -> Result<bool, ShoppingListError>;
}
