use serde::{Deserialize, Serialize};

use super::model::{Item, ShoppingList};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            ItemFilter::All => true,
            ItemFilter::Pending => !item.completed,
            ItemFilter::Completed => item.completed,
        }
    }
}

impl std::fmt::Display for ItemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemFilter::All => write!(f, "all"),
            ItemFilter::Pending => write!(f, "pending"),
            ItemFilter::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for ItemFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ItemFilter::All),
            "pending" => Ok(ItemFilter::Pending),
            "completed" => Ok(ItemFilter::Completed),
            _ => Err(format!("Invalid item filter: {}", s)),
        }
    }
}

/// Projects the displayable items of a list, keeping their order.
pub fn filter_items(list: Option<&ShoppingList>, filter: ItemFilter) -> Vec<Item> {
    list.map(|list| {
        list.items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    })
    .unwrap_or_default()
}
