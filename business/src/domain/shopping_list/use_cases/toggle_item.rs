use async_trait::async_trait;

use crate::domain::shared::value_objects::ItemId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::Item;

pub struct ToggleItemParams {
    pub id: ItemId,
}

#[async_trait]
pub trait ToggleItemUseCase: Send + Sync {
    async fn execute(&self, params: ToggleItemParams) -> Result<Option<Item>, ShoppingListError>;
}
