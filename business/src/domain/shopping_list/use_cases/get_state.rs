use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::state::ShoppingState;

#[async_trait]
pub trait GetShoppingStateUseCase: Send + Sync {
    async fn execute(&self) -> Result<Arc<ShoppingState>, ShoppingListError>;
}
