use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ShoppingList;

#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    /// Returns the stored lists, `None` when nothing was saved yet.
    async fn load(&self) -> Result<Option<Vec<ShoppingList>>, RepositoryError>;
    /// Replaces everything stored with `lists`, keeping their order.
    async fn save(&self, lists: &[ShoppingList]) -> Result<(), RepositoryError>;
}
