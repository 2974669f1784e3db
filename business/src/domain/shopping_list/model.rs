use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::errors::ShoppingListError;
use crate::domain::shared::price::Price;
use crate::domain::shared::value_objects::{ItemId, ListId};

/// Name of the list created when nothing usable is stored yet.
pub const DEFAULT_LIST_NAME: &str = "My Shopping List";

/// Items the default list starts with.
pub const DEFAULT_ITEM_NAMES: [&str; 3] = ["Milk", "Bread", "Eggs"];

/// Folds a product name into the key used for matching and price indexing.
///
/// Matching is exact after trimming and lowercasing; there is no fuzzy step.
pub fn product_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub completed: bool,
    pub price: Option<Price>,
    pub store: Option<String>,
    pub address: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
}

/// Metadata attached to an item observation, whatever its source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDetails {
    pub price: Option<Price>,
    pub store: Option<String>,
    pub address: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
}

impl Item {
    pub fn new(name: &str, details: ItemDetails) -> Result<Self, ShoppingListError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ShoppingListError::NameEmpty);
        }

        Ok(Self {
            id: ItemId::generate(),
            name: name.to_string(),
            completed: false,
            price: details.price,
            store: details.store,
            address: details.address,
            purchase_date: details.purchase_date,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ItemId,
        name: String,
        completed: bool,
        details: ItemDetails,
    ) -> Self {
        Self {
            id,
            name,
            completed,
            price: details.price,
            store: details.store,
            address: details.address,
            purchase_date: details.purchase_date,
        }
    }

    pub fn key(&self) -> String {
        product_key(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingList {
    pub id: ListId,
    pub name: String,
    pub items: Vec<Item>,
}

impl ShoppingList {
    pub fn new(name: &str) -> Result<Self, ShoppingListError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ShoppingListError::NameEmpty);
        }

        Ok(Self {
            id: ListId::generate(),
            name: name.to_string(),
            items: Vec::new(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: ListId, name: String, items: Vec<Item>) -> Self {
        Self { id, name, items }
    }

    /// The list a fresh installation starts with.
    pub fn default_seed() -> Self {
        let items = DEFAULT_ITEM_NAMES
            .iter()
            .map(|name| {
                Item::from_repository(
                    ItemId::generate(),
                    name.to_string(),
                    false,
                    ItemDetails::default(),
                )
            })
            .collect();

        Self {
            id: ListId::generate(),
            name: DEFAULT_LIST_NAME.to_string(),
            items,
        }
    }

    pub fn find_item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn position_by_key(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }
}

/// Gives a fresh id to every list, or item within its list, whose id repeats
/// an earlier one. Returns how many ids were replaced.
pub fn ensure_unique_ids(lists: &mut [ShoppingList]) -> usize {
    let mut replaced = 0;
    let mut list_ids = HashSet::new();
    for list in lists.iter_mut() {
        if !list_ids.insert(list.id.clone()) {
            list.id = ListId::generate();
            list_ids.insert(list.id.clone());
            replaced += 1;
        }

        let mut item_ids = HashSet::new();
        for item in list.items.iter_mut() {
            if !item_ids.insert(item.id.clone()) {
                item.id = ItemId::generate();
                item_ids.insert(item.id.clone());
                replaced += 1;
            }
        }
    }
    replaced
}
