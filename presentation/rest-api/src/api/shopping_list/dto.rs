use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};

use business::domain::shared::price::Price;
use business::domain::shopping_list::filter::ItemFilter;
use business::domain::shopping_list::merge::MergeOutcome;
use business::domain::shopping_list::model::{Item, ShoppingList};
use business::domain::shopping_list::state::ShoppingState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum ItemFilterDto {
    #[oai(rename = "all")]
    All,
    #[oai(rename = "pending")]
    Pending,
    #[oai(rename = "completed")]
    Completed,
}

impl From<ItemFilter> for ItemFilterDto {
    fn from(filter: ItemFilter) -> Self {
        match filter {
            ItemFilter::All => ItemFilterDto::All,
            ItemFilter::Pending => ItemFilterDto::Pending,
            ItemFilter::Completed => ItemFilterDto::Completed,
        }
    }
}

impl From<ItemFilterDto> for ItemFilter {
    fn from(dto: ItemFilterDto) -> Self {
        match dto {
            ItemFilterDto::All => ItemFilter::All,
            ItemFilterDto::Pending => ItemFilter::Pending,
            ItemFilterDto::Completed => ItemFilter::Completed,
        }
    }
}

fn price_to_wire(price: &Price) -> Option<f64> {
    price.to_f64()
}

#[derive(Debug, Clone, Object)]
pub struct ItemResponse {
    /// Item identifier, unique within its list
    pub id: String,
    /// Display name as first entered
    pub name: String,
    /// Whether the item has been bought
    pub completed: bool,
    /// Lowest price recorded for this item
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Store where the recorded price was seen
    #[oai(skip_serializing_if_is_none)]
    pub store: Option<String>,
    /// Store address, or a product summary for lookup results
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
    /// When the recorded price was seen
    #[oai(skip_serializing_if_is_none)]
    pub purchase_date: Option<DateTime<Utc>>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_string(),
            price: item.price.as_ref().and_then(price_to_wire),
            name: item.name,
            completed: item.completed,
            store: item.store,
            address: item.address,
            purchase_date: item.purchase_date,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ShoppingListResponse {
    pub id: String,
    pub name: String,
    pub items: Vec<ItemResponse>,
}

impl From<ShoppingList> for ShoppingListResponse {
    fn from(list: ShoppingList) -> Self {
        Self {
            id: list.id.to_string(),
            name: list.name,
            items: list.items.into_iter().map(ItemResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BestPriceEntry {
    /// Normalized product name (trimmed, lowercase)
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct ShoppingStateResponse {
    pub lists: Vec<ShoppingListResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub active_list_id: Option<String>,
    pub filter: ItemFilterDto,
    pub best_prices: Vec<BestPriceEntry>,
}

impl From<&ShoppingState> for ShoppingStateResponse {
    fn from(state: &ShoppingState) -> Self {
        Self {
            lists: state
                .lists()
                .iter()
                .cloned()
                .map(ShoppingListResponse::from)
                .collect(),
            active_list_id: state.active_list_id().map(|id| id.to_string()),
            filter: state.filter().into(),
            best_prices: state
                .best_prices()
                .iter()
                .filter_map(|(name, price)| {
                    price_to_wire(price).map(|price| BestPriceEntry {
                        name: name.to_string(),
                        price,
                    })
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateListRequest {
    /// List name (cannot be blank)
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct SetActiveListRequest {
    /// List to select; an unknown id selects nothing
    pub id: String,
}

#[derive(Debug, Clone, Object)]
pub struct SetFilterRequest {
    pub filter: ItemFilterDto,
}

#[derive(Debug, Clone, Object)]
pub struct AddItemRequest {
    /// Item name; matched against existing items ignoring case and surrounding spaces
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub store: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub purchase_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Object)]
pub struct MergeResponse {
    /// One of `added`, `updated`, `unchanged`, `ignored`
    pub outcome: String,
    #[oai(skip_serializing_if_is_none)]
    pub item: Option<ItemResponse>,
}

impl From<MergeOutcome> for MergeResponse {
    fn from(outcome: MergeOutcome) -> Self {
        Self {
            outcome: outcome.label().to_string(),
            item: outcome.item().cloned().map(ItemResponse::from),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ReorderItemsRequest {
    pub from_index: u32,
    pub to_index: u32,
}

#[derive(Debug, Clone, Object)]
pub struct ReorderItemsResponse {
    /// Whether any item moved
    pub moved: bool,
}

#[derive(Debug, Clone, Object)]
pub struct ClearCompletedResponse {
    /// Number of items cleared
    pub count: u64,
}

#[derive(Debug, Clone, Object)]
pub struct BestPriceResponse {
    pub name: String,
    /// Lowest recorded price, absent when never priced
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shopping_list::model::ItemDetails;

    #[test]
    fn should_expose_price_as_number() {
        let item = Item::new(
            "Milk",
            ItemDetails {
                price: Some("2.49".parse().unwrap()),
                ..ItemDetails::default()
            },
        )
        .unwrap();

        let response = ItemResponse::from(item);

        assert_eq!(response.price, Some(2.49));
    }

    #[test]
    fn should_describe_ignored_merge_without_item() {
        let response = MergeResponse::from(MergeOutcome::Ignored);

        assert_eq!(response.outcome, "ignored");
        assert!(response.item.is_none());
    }

    #[test]
    fn should_list_best_prices_in_state_response() {
        let state = ShoppingState::seed()
            .add_item(
                "Eggs",
                ItemDetails {
                    price: Some("3.10".parse().unwrap()),
                    ..ItemDetails::default()
                },
            )
            .state
            .unwrap();

        let response = ShoppingStateResponse::from(&state);

        assert_eq!(response.best_prices.len(), 1);
        assert_eq!(response.best_prices[0].name, "eggs");
        assert_eq!(response.best_prices[0].price, 3.1);
        assert_eq!(response.filter, ItemFilterDto::All);
    }
}
