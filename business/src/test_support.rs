//! Mocks of the domain ports shared by the unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product_lookup::errors::LookupError;
use crate::domain::product_lookup::services::{ProductLookupService, ProductSummary};
use crate::domain::scanned_record::model::ScannedRecord;
use crate::domain::scanned_record::repository::ScannedRecordRepository;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::state::ShoppingState;
use crate::domain::shopping_list::store::ListStore;

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub ShoppingListRepo {}

    #[async_trait]
    impl ShoppingListRepository for ShoppingListRepo {
        async fn load(&self) -> Result<Option<Vec<ShoppingList>>, RepositoryError>;
        async fn save(&self, lists: &[ShoppingList]) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ScannedRecordRepo {}

    #[async_trait]
    impl ScannedRecordRepository for ScannedRecordRepo {
        async fn get_all(&self) -> Result<Vec<ScannedRecord>, RepositoryError>;
        async fn append(&self, records: &[ScannedRecord]) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ProductLookup {}

    #[async_trait]
    impl ProductLookupService for ProductLookup {
        async fn lookup(&self, query: &str) -> Result<ProductSummary, LookupError>;
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// A repository that accepts every save.
pub fn accepting_repo() -> MockShoppingListRepo {
    let mut repo = MockShoppingListRepo::new();
    repo.expect_save().returning(|_| Ok(()));
    repo
}

pub fn store_with(state: ShoppingState, repo: MockShoppingListRepo) -> Arc<ListStore> {
    Arc::new(ListStore::new(state, Arc::new(repo), mock_logger()))
}

pub fn seeded_store() -> Arc<ListStore> {
    store_with(ShoppingState::seed(), accepting_repo())
}
