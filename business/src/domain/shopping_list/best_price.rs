use std::collections::BTreeMap;

use super::model::{ShoppingList, product_key};
use crate::domain::shared::price::Price;

/// Lowest price observed per product across every list.
///
/// The index is always rebuilt from the lists themselves, so removing or
/// repricing an item can never leave a stale minimum behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestPriceIndex(BTreeMap<String, Price>);

impl BestPriceIndex {
    pub fn from_lists(lists: &[ShoppingList]) -> Self {
        let mut index = BTreeMap::new();
        for item in lists.iter().flat_map(|list| list.items.iter()) {
            let Some(price) = &item.price else {
                continue;
            };
            index
                .entry(item.key())
                .and_modify(|best: &mut Price| {
                    if *price < *best {
                        *best = price.clone();
                    }
                })
                .or_insert_with(|| price.clone());
        }
        Self(index)
    }

    pub fn get(&self, name: &str) -> Option<&Price> {
        self.0.get(&product_key(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Price)> {
        self.0.iter().map(|(key, price)| (key.as_str(), price))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
