use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;

pub struct ReorderItemsParams {
    pub from_index: usize,
    pub to_index: usize,
}

#[async_trait]
pub trait ReorderItemsUseCase: Send + Sync {
    /// Returns whether any item moved.
    async fn execute(&self, params: ReorderItemsParams) -> Result<bool, ShoppingListError>;
}
