use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::filter::ItemFilter;

pub struct SetFilterParams {
    pub filter: ItemFilter,
}

#[async_trait]
pub trait SetFilterUseCase: Send + Sync {
    async fn execute(&self, params: SetFilterParams) -> Result<(), ShoppingListError>;
}
