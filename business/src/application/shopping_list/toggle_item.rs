use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::Item;
use crate::domain::shopping_list::store::ListStore;
use crate::domain::shopping_list::use_cases::toggle_item::{ToggleItemParams, ToggleItemUseCase};

pub struct ToggleItemUseCaseImpl {
    pub store: Arc<ListStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleItemUseCase for ToggleItemUseCaseImpl {
    async fn execute(&self, params: ToggleItemParams) -> Result<Option<Item>, ShoppingListError> {
        let toggled = self.store.apply(|state| state.toggle_item(&params.id)).await;

        match &toggled {
            Some(item) => self.logger.info(&format!(
                "Item {} marked {}",
                item.id,
                if item.completed { "completed" } else { "pending" }
            )),
            None => self
                .logger
                .warn(&format!("Item {} not in the active list", params.id)),
        }
        Ok(toggled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shopping_list::state::ShoppingState;
    use crate::test_support::{accepting_repo, mock_logger, store_with};

    #[tokio::test]
    async fn should_flip_completion_back_and_forth() {
        let state = ShoppingState::seed();
        let bread = state.active_list().unwrap().items[1].id.clone();
        let store = store_with(state, accepting_repo());
        let use_case = ToggleItemUseCaseImpl {
            store: store.clone(),
            logger: mock_logger(),
        };

        let first = use_case
            .execute(ToggleItemParams { id: bread.clone() })
            .await
            .unwrap()
            .unwrap();
        assert!(first.completed);

        let second = use_case
            .execute(ToggleItemParams { id: bread })
            .await
            .unwrap()
            .unwrap();
        assert!(!second.completed);
        assert!(
            store
                .snapshot()
                .await
                .active_list()
                .unwrap()
                .items
                .iter()
                .all(|item| !item.completed)
        );
    }

    #[tokio::test]
    async fn should_return_none_when_item_is_unknown() {
        let use_case = ToggleItemUseCaseImpl {
            store: store_with(ShoppingState::seed(), accepting_repo()),
            logger: mock_logger(),
        };

        let toggled = use_case
            .execute(ToggleItemParams {
                id: "nope".into(),
            })
            .await
            .unwrap();

        assert!(toggled.is_none());
    }
}
