use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;

use super::errors::ShoppingListError;
use super::model::ensure_unique_ids;
use super::repository::ShoppingListRepository;
use super::state::{ShoppingState, Transition};
use crate::domain::logger::Logger;

/// Owner of the shopping state for the lifetime of the process.
///
/// Transitions run one at a time. Each accepted transition replaces the whole
/// state and, when the lists changed, is written through to the repository
/// before the next transition starts. A failed write is logged and the
/// in-memory state stays authoritative.
///
/// When the stored lists could not be read at startup the store is detached:
/// nothing is written until a later read shows there is no saved data to
/// lose.
pub struct ListStore {
    state: Mutex<Arc<ShoppingState>>,
    repository: Arc<dyn ShoppingListRepository>,
    logger: Arc<dyn Logger>,
    attached: AtomicBool,
}

impl ListStore {
    pub fn new(
        state: ShoppingState,
        repository: Arc<dyn ShoppingListRepository>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            state: Mutex::new(Arc::new(state)),
            repository,
            logger,
            attached: AtomicBool::new(true),
        }
    }

    /// Restores the stored lists, falling back to the default seed when there
    /// is nothing usable to restore.
    pub async fn bootstrap(
        repository: Arc<dyn ShoppingListRepository>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let (state, attached) = match repository.load().await {
            Ok(Some(mut lists)) if !lists.is_empty() => {
                let replaced = ensure_unique_ids(&mut lists);
                if replaced > 0 {
                    logger.warn(&format!("Replaced {} duplicate ids in stored lists", replaced));
                }
                logger.info(&format!("Restored {} shopping lists", lists.len()));
                (ShoppingState::from_lists(lists), true)
            }
            Ok(_) => {
                logger.info("No stored shopping lists, starting from the default list");
                (ShoppingState::seed(), true)
            }
            Err(err) if err.is_storage_failure() => {
                logger.error(&format!(
                    "Stored shopping lists unreachable ({}), starting from the default list without saving",
                    err
                ));
                (ShoppingState::seed(), false)
            }
            Err(err) => {
                logger.warn(&format!(
                    "Stored shopping lists unusable ({}), starting from the default list",
                    err
                ));
                (ShoppingState::seed(), true)
            }
        };

        let store = Self::new(state, repository, logger);
        store.attached.store(attached, Ordering::SeqCst);
        store
    }

    /// An immutable view of the current state.
    pub async fn snapshot(&self) -> Arc<ShoppingState> {
        self.state.lock().await.clone()
    }

    pub async fn apply<T, F>(&self, transition: F) -> T
    where
        F: FnOnce(&ShoppingState) -> Transition<T> + Send,
        T: Send,
    {
        let mut current = self.state.lock().await;
        let Transition { state, outcome } = transition(&**current);
        if let Some(next) = state {
            self.commit(&mut *current, next).await;
        }
        outcome
    }

    /// Like [`ListStore::apply`] for transitions that validate their input.
    pub async fn try_apply<T, F>(&self, transition: F) -> Result<T, ShoppingListError>
    where
        F: FnOnce(&ShoppingState) -> Result<Transition<T>, ShoppingListError> + Send,
        T: Send,
    {
        let mut current = self.state.lock().await;
        let Transition { state, outcome } = transition(&**current)?;
        if let Some(next) = state {
            self.commit(&mut *current, next).await;
        }
        Ok(outcome)
    }

    async fn commit(&self, current: &mut Arc<ShoppingState>, next: ShoppingState) {
        let lists_changed = next.lists() != current.lists();
        *current = Arc::new(next);
        if !lists_changed || !self.reattach().await {
            return;
        }
        if let Err(err) = self.repository.save(current.lists()).await {
            self.logger.error(&format!(
                "Failed to persist shopping lists, keeping in-memory state: {}",
                err
            ));
        }
    }

    /// Whether writes may go through. A detached store reads the repository
    /// again and attaches only when nothing restorable is stored.
    async fn reattach(&self) -> bool {
        if self.attached.load(Ordering::SeqCst) {
            return true;
        }
        match self.repository.load().await {
            Ok(Some(lists)) if !lists.is_empty() => {
                self.logger.warn(
                    "Saved shopping lists exist that were not restored, keeping changes in memory",
                );
                false
            }
            Err(err) if err.is_storage_failure() => {
                self.logger.warn(&format!(
                    "Stored shopping lists still unreachable ({}), keeping changes in memory",
                    err
                ));
                false
            }
            _ => {
                self.logger.info("Storage reachable with nothing to restore, saving again");
                self.attached.store(true, Ordering::SeqCst);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shopping_list::filter::ItemFilter;
    use crate::domain::shopping_list::model::{
        DEFAULT_ITEM_NAMES, DEFAULT_LIST_NAME, ItemDetails, ShoppingList,
    };
    use crate::test_support::{MockShoppingListRepo, accepting_repo, mock_logger, store_with};

    async fn bootstrapped(repo: MockShoppingListRepo) -> ListStore {
        ListStore::bootstrap(Arc::new(repo), mock_logger()).await
    }

    fn assert_seeded(state: &ShoppingState) {
        assert_eq!(state.lists().len(), 1);
        let list = state.active_list().unwrap();
        assert_eq!(list.name, DEFAULT_LIST_NAME);
        let names: Vec<&str> = list.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, DEFAULT_ITEM_NAMES.to_vec());
    }

    #[tokio::test]
    async fn should_restore_stored_lists_on_bootstrap() {
        let mut repo = MockShoppingListRepo::new();
        let stored = vec![
            ShoppingList::new("Weekly").unwrap(),
            ShoppingList::new("Party").unwrap(),
        ];
        let expected = stored.clone();
        repo.expect_load().returning(move || Ok(Some(stored.clone())));

        let store = bootstrapped(repo).await;
        let state = store.snapshot().await;

        assert_eq!(state.lists(), expected.as_slice());
        assert_eq!(state.active_list_id(), Some(&expected[0].id));
    }

    #[tokio::test]
    async fn should_seed_when_nothing_is_stored() {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_load().returning(|| Ok(None));

        let store = bootstrapped(repo).await;

        assert_seeded(&*store.snapshot().await);
    }

    #[tokio::test]
    async fn should_seed_when_stored_array_is_empty() {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_load().returning(|| Ok(Some(Vec::new())));

        let store = bootstrapped(repo).await;

        assert_seeded(&*store.snapshot().await);
    }

    #[tokio::test]
    async fn should_seed_when_stored_data_is_corrupt() {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_load()
            .returning(|| Err(RepositoryError::Deserialization));

        let store = bootstrapped(repo).await;

        assert_seeded(&*store.snapshot().await);
    }

    #[tokio::test]
    async fn should_persist_when_lists_change() {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_save()
            .withf(|lists| lists.len() == 1 && lists[0].items.len() == 4)
            .times(1)
            .returning(|_| Ok(()));
        let store = store_with(ShoppingState::seed(), repo);

        store
            .apply(|state| state.add_item("Butter", ItemDetails::default()))
            .await;

        assert_eq!(store.snapshot().await.active_list().unwrap().items.len(), 4);
    }

    #[tokio::test]
    async fn should_not_persist_selector_or_filter_changes() {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_save().never();
        let store = store_with(ShoppingState::seed(), repo);

        store
            .apply(|state| state.set_filter(ItemFilter::Completed))
            .await;
        store
            .apply(|state| state.set_active_list("elsewhere".into()))
            .await;

        let state = store.snapshot().await;
        assert_eq!(state.filter(), ItemFilter::Completed);
        assert!(state.active_list().is_none());
    }

    #[tokio::test]
    async fn should_not_persist_when_transition_is_a_no_op() {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_save().never();
        let store = store_with(ShoppingState::seed(), repo);

        let moved = store.apply(|state| state.reorder_items(1, 1)).await;

        assert!(!moved);
    }

    #[tokio::test]
    async fn should_keep_state_when_save_fails() {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_save()
            .returning(|_| Err(RepositoryError::QuotaExceeded));
        let store = store_with(ShoppingState::seed(), repo);

        let created = store
            .try_apply(|state| state.create_list("Hardware"))
            .await
            .unwrap();

        let state = store.snapshot().await;
        assert_eq!(state.lists().len(), 2);
        assert_eq!(state.active_list_id(), Some(&created.id));
    }

    #[tokio::test]
    async fn should_leave_state_untouched_when_transition_fails() {
        let store = store_with(ShoppingState::seed(), accepting_repo());
        let before = store.snapshot().await;

        let result = store.try_apply(|state| state.create_list("   ")).await;

        assert!(matches!(result, Err(ShoppingListError::NameEmpty)));
        assert_eq!(store.snapshot().await.lists(), before.lists());
    }

    #[tokio::test]
    async fn should_serialize_concurrent_transitions() {
        let store = Arc::new(ListStore::new(
            ShoppingState::seed(),
            Arc::new(accepting_repo()),
            mock_logger(),
        ));

        let handles: Vec<_> = (0..16)
            .map(|n| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .apply(move |state| {
                            state.add_item(&format!("Item {}", n), ItemDetails::default())
                        })
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let state = store.snapshot().await;
        assert_eq!(state.active_list().unwrap().items.len(), 3 + 16);
    }

    #[tokio::test]
    async fn should_not_overwrite_stored_lists_when_storage_was_unreachable() {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_load()
            .returning(|| Err(RepositoryError::Unavailable));
        repo.expect_save().never();
        let store = bootstrapped(repo).await;

        let outcome = store
            .apply(|state| state.add_item("Butter", ItemDetails::default()))
            .await;

        assert!(outcome.item().is_some());
        assert_eq!(store.snapshot().await.active_list().unwrap().items.len(), 4);
    }

    #[tokio::test]
    async fn should_stay_detached_when_unrestored_lists_appear() {
        let mut repo = MockShoppingListRepo::new();
        let mut loads = 0;
        repo.expect_load().returning(move || {
            loads += 1;
            if loads == 1 {
                Err(RepositoryError::Unavailable)
            } else {
                Ok(Some(vec![ShoppingList::new("Weekly").unwrap()]))
            }
        });
        repo.expect_save().never();
        let store = bootstrapped(repo).await;

        store
            .try_apply(|state| state.create_list("Hardware"))
            .await
            .unwrap();
        store
            .apply(|state| state.add_item("Nails", ItemDetails::default()))
            .await;

        assert_eq!(store.snapshot().await.lists().len(), 2);
    }

    #[tokio::test]
    async fn should_resume_saving_when_storage_recovers_empty() {
        let mut repo = MockShoppingListRepo::new();
        let mut loads = 0;
        repo.expect_load().times(2).returning(move || {
            loads += 1;
            if loads == 1 {
                Err(RepositoryError::Unavailable)
            } else {
                Ok(None)
            }
        });
        repo.expect_save().times(2).returning(|_| Ok(()));
        let store = bootstrapped(repo).await;

        store
            .apply(|state| state.add_item("Butter", ItemDetails::default()))
            .await;
        store
            .apply(|state| state.add_item("Jam", ItemDetails::default()))
            .await;

        assert_eq!(store.snapshot().await.active_list().unwrap().items.len(), 5);
    }

    #[tokio::test]
    async fn should_replace_duplicate_ids_on_bootstrap() {
        let mut repo = MockShoppingListRepo::new();
        let mut list = ShoppingList::default_seed();
        let repeated = list.items[0].id.clone();
        list.items[1].id = repeated.clone();
        repo.expect_load()
            .returning(move || Ok(Some(vec![list.clone()])));

        let store = bootstrapped(repo).await;

        let state = store.snapshot().await;
        let items = &state.active_list().unwrap().items;
        assert_eq!(items[0].id, repeated);
        assert_ne!(items[1].id, repeated);
    }
}
