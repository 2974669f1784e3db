use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::store::ListStore;
use crate::domain::shopping_list::use_cases::set_filter::{SetFilterParams, SetFilterUseCase};

pub struct SetFilterUseCaseImpl {
    pub store: Arc<ListStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetFilterUseCase for SetFilterUseCaseImpl {
    async fn execute(&self, params: SetFilterParams) -> Result<(), ShoppingListError> {
        self.logger
            .debug(&format!("Setting item filter: {}", params.filter));

        self.store
            .apply(|state| state.set_filter(params.filter))
            .await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shopping_list::filter::ItemFilter;
    use crate::domain::shopping_list::state::ShoppingState;
    use crate::test_support::{MockShoppingListRepo, mock_logger, store_with};

    #[tokio::test]
    async fn should_project_completed_items_after_filter_change() {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_save().never();
        let seed = ShoppingState::seed();
        let milk = seed.active_list().unwrap().items[0].id.clone();
        let toggled = seed.toggle_item(&milk).state.unwrap();
        let store = store_with(toggled, repo);
        let use_case = SetFilterUseCaseImpl {
            store: store.clone(),
            logger: mock_logger(),
        };

        use_case
            .execute(SetFilterParams {
                filter: ItemFilter::Completed,
            })
            .await
            .unwrap();

        let state = store.snapshot().await;
        assert_eq!(state.filter(), ItemFilter::Completed);
        let names: Vec<String> = state.filtered_items().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Milk".to_string()]);
    }
}
