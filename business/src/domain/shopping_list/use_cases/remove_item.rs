use async_trait::async_trait;

use crate::domain::shared::value_objects::ItemId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::Item;

pub struct RemoveItemParams {
    pub id: ItemId,
}

#[async_trait]
pub trait RemoveItemUseCase: Send + Sync {
    /// Returns the removed item, `None` when the active list has no such item.
    async fn execute(&self, params: RemoveItemParams) -> Result<Option<Item>, ShoppingListError>;
}
