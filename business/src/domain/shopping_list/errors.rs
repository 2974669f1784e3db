use crate::domain::shared::price::PriceError;

/// Storage failures never surface here: the list store logs them and keeps
/// the in-memory state authoritative.
#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("shopping_list.name_empty")]
    NameEmpty,
    #[error("shopping_list.invalid_price")]
    InvalidPrice(#[from] PriceError),
}
