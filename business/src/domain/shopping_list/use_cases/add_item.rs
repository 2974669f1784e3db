use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::shared::price::Price;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::merge::MergeOutcome;

pub struct AddItemParams {
    pub name: String,
    pub price: Option<Price>,
    pub store: Option<String>,
    pub address: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
}

impl AddItemParams {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: None,
            store: None,
            address: None,
            purchase_date: None,
        }
    }
}

#[async_trait]
pub trait AddItemUseCase: Send + Sync {
    /// Merges the item into the active list. A blank name or a missing active
    /// list is not an error: the outcome is [`MergeOutcome::Ignored`].
    async fn execute(&self, params: AddItemParams) -> Result<MergeOutcome, ShoppingListError>;
}
