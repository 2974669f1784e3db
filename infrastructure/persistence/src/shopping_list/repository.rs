use async_trait::async_trait;
use sqlx::SqlitePool;

use business::domain::errors::RepositoryError;
use business::domain::shopping_list::model::ShoppingList;
use business::domain::shopping_list::repository::ShoppingListRepository;

use super::entity::ShoppingListEntity;
use crate::kv_store::KvStore;

pub const SHOPPING_LISTS_KEY: &str = "shoppingLists";

pub struct ShoppingListRepositorySqlite {
    store: KvStore,
}

impl ShoppingListRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            store: KvStore::new(pool),
        }
    }
}

#[async_trait]
impl ShoppingListRepository for ShoppingListRepositorySqlite {
    async fn load(&self) -> Result<Option<Vec<ShoppingList>>, RepositoryError> {
        let Some(raw) = self.store.get(SHOPPING_LISTS_KEY).await? else {
            return Ok(None);
        };

        let entities: Vec<ShoppingListEntity> =
            serde_json::from_str(&raw).map_err(|_| RepositoryError::Deserialization)?;

        Ok(Some(
            entities
                .into_iter()
                .map(ShoppingListEntity::into_domain)
                .collect(),
        ))
    }

    async fn save(&self, lists: &[ShoppingList]) -> Result<(), RepositoryError> {
        let entities: Vec<ShoppingListEntity> = lists.iter().map(ShoppingListEntity::from).collect();
        let raw = serde_json::to_string(&entities).map_err(|_| RepositoryError::Deserialization)?;

        self.store.put(SHOPPING_LISTS_KEY, &raw).await
    }
}
