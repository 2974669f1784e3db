use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct CreateListParams {
    pub name: String,
}

#[async_trait]
pub trait CreateListUseCase: Send + Sync {
    async fn execute(&self, params: CreateListParams) -> Result<ShoppingList, ShoppingListError>;
}
