use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::{ItemId, ListId};
use business::domain::shopping_list::model::{Item, ItemDetails, ShoppingList};

use crate::price_value::PriceValue;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListEntity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<ItemEntity>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemEntity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<DateTime<Utc>>,
}

impl ShoppingListEntity {
    pub fn into_domain(self) -> ShoppingList {
        ShoppingList::from_repository(
            ListId::new(self.id),
            self.name,
            self.items.into_iter().map(ItemEntity::into_domain).collect(),
        )
    }
}

impl From<&ShoppingList> for ShoppingListEntity {
    fn from(list: &ShoppingList) -> Self {
        Self {
            id: list.id.to_string(),
            name: list.name.clone(),
            items: list.items.iter().map(ItemEntity::from).collect(),
        }
    }
}

impl ItemEntity {
    /// Prices that do not parse as an amount are dropped.
    pub fn into_domain(self) -> Item {
        Item::from_repository(
            ItemId::new(self.id),
            self.name,
            self.completed,
            ItemDetails {
                price: self.price.as_ref().and_then(PriceValue::to_price),
                store: self.store,
                address: self.address,
                purchase_date: self.purchase_date,
            },
        )
    }
}

impl From<&Item> for ItemEntity {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            completed: item.completed,
            price: item.price.as_ref().map(PriceValue::from),
            store: item.store.clone(),
            address: item.address.clone(),
            purchase_date: item.purchase_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_legacy_items_without_metadata() {
        let json = r#"[{"id":"1","name":"Milk","items":[{"id":"1","name":"Milk","completed":true}]}]"#;

        let lists: Vec<ShoppingListEntity> = serde_json::from_str(json).unwrap();
        let list = lists.into_iter().next().unwrap().into_domain();

        assert_eq!(list.id.as_str(), "1");
        assert!(list.items[0].completed);
        assert!(list.items[0].price.is_none());
    }

    #[test]
    fn should_write_camel_case_fields() {
        let json = r#"{"id":"a","name":"Bread","completed":false,"price":3,"purchaseDate":"2026-01-02T08:00:00.000Z"}"#;
        let item = serde_json::from_str::<ItemEntity>(json).unwrap().into_domain();

        let written = serde_json::to_value(ItemEntity::from(&item)).unwrap();

        assert_eq!(written["price"], "3");
        assert!(written.get("purchaseDate").is_some());
        assert!(written.get("store").is_none());
    }
}
