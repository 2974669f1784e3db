use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;

#[async_trait]
pub trait ClearCompletedItemsUseCase: Send + Sync {
    async fn execute(&self) -> Result<usize, ShoppingListError>;
}
