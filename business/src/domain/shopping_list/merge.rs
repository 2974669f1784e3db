//! Reconciles a new item observation with the items a list already holds.
//!
//! Observations come from manual entry, scans accepted by the user and
//! product lookups. Names are matched after folding (see [`product_key`]);
//! a match only changes when the observation carries a strictly lower price.

use super::errors::ShoppingListError;
use super::model::{Item, ItemDetails, ShoppingList, product_key};
use crate::domain::shared::value_objects::ItemId;

/// A normalized item observation.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeCandidate {
    name: String,
    details: ItemDetails,
}

impl MergeCandidate {
    /// Trims the name and drops blank metadata strings.
    pub fn new(name: &str, details: ItemDetails) -> Result<Self, ShoppingListError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ShoppingListError::NameEmpty);
        }

        Ok(Self {
            name: name.to_string(),
            details: ItemDetails {
                price: details.price,
                store: non_blank(details.store),
                address: non_blank(details.address),
                purchase_date: details.purchase_date,
            },
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> String {
        product_key(&self.name)
    }

    pub fn details(&self) -> &ItemDetails {
        &self.details
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq)]
pub enum MergeOutcome {
    /// No item matched; the observation was appended.
    Added(Item),
    /// A matching item took the lower price and the new metadata.
    Updated(Item),
    /// A matching item already had an equal or better price.
    Unchanged(Item),
    /// Nothing to merge into: no active list or a blank name.
    Ignored,
}

impl MergeOutcome {
    pub fn item(&self) -> Option<&Item> {
        match self {
            MergeOutcome::Added(item)
            | MergeOutcome::Updated(item)
            | MergeOutcome::Unchanged(item) => Some(item),
            MergeOutcome::Ignored => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MergeOutcome::Added(_) => "added",
            MergeOutcome::Updated(_) => "updated",
            MergeOutcome::Unchanged(_) => "unchanged",
            MergeOutcome::Ignored => "ignored",
        }
    }
}

/// Merges `candidate` into `list`.
///
/// Returns the rewritten list when anything changed, together with the
/// outcome. The input list is never modified.
pub fn merge_item(
    list: &ShoppingList,
    candidate: MergeCandidate,
) -> (Option<ShoppingList>, MergeOutcome) {
    let Some(position) = list.position_by_key(&candidate.key()) else {
        let item = Item::from_repository(
            ItemId::generate(),
            candidate.name,
            false,
            candidate.details,
        );
        let mut next = list.clone();
        next.items.push(item.clone());
        return (Some(next), MergeOutcome::Added(item));
    };

    let existing = &list.items[position];
    let improves = match (&candidate.details.price, &existing.price) {
        (Some(_), None) => true,
        (Some(offered), Some(current)) => offered < current,
        (None, _) => false,
    };
    if !improves {
        return (None, MergeOutcome::Unchanged(existing.clone()));
    }

    let details = candidate.details;
    let mut updated = existing.clone();
    updated.price = details.price;
    updated.store = details.store.or(updated.store);
    updated.address = details.address.or(updated.address);
    updated.purchase_date = details.purchase_date.or(updated.purchase_date);

    let mut next = list.clone();
    next.items[position] = updated.clone();
    (Some(next), MergeOutcome::Updated(updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::price::Price;
    use chrono::{TimeZone, Utc};

    fn price(s: &str) -> Option<Price> {
        Some(s.parse().unwrap())
    }

    fn candidate(name: &str, price: Option<Price>) -> MergeCandidate {
        MergeCandidate::new(
            name,
            ItemDetails {
                price,
                ..ItemDetails::default()
            },
        )
        .unwrap()
    }

    fn list_with(items: Vec<Item>) -> ShoppingList {
        let mut list = ShoppingList::new("Groceries").unwrap();
        list.items = items;
        list
    }

    fn item(name: &str, price: Option<Price>) -> Item {
        Item::new(
            name,
            ItemDetails {
                price,
                ..ItemDetails::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn should_reject_candidate_when_name_blank() {
        let result = MergeCandidate::new("  ", ItemDetails::default());

        assert!(matches!(result, Err(ShoppingListError::NameEmpty)));
    }

    #[test]
    fn should_drop_blank_metadata_strings() {
        let candidate = MergeCandidate::new(
            "Milk",
            ItemDetails {
                store: Some("  ".to_string()),
                address: Some(" Main St ".to_string()),
                ..ItemDetails::default()
            },
        )
        .unwrap();

        assert!(candidate.details().store.is_none());
        assert_eq!(candidate.details().address.as_deref(), Some("Main St"));
    }

    #[test]
    fn should_append_when_no_match() {
        let list = list_with(vec![item("Milk", None)]);

        let (next, outcome) = merge_item(&list, candidate("Butter", price("1.20")));

        let next = next.unwrap();
        assert_eq!(next.items.len(), 2);
        assert_eq!(next.items[1].name, "Butter");
        assert!(!next.items[1].completed);
        assert!(matches!(outcome, MergeOutcome::Added(ref i) if i.name == "Butter"));
    }

    #[test]
    fn should_leave_unpriced_duplicate_untouched() {
        let list = list_with(vec![item("Milk", None)]);

        let (next, outcome) = merge_item(&list, candidate("Milk", None));

        assert!(next.is_none());
        assert!(matches!(outcome, MergeOutcome::Unchanged(_)));
    }

    #[test]
    fn should_take_lower_price_in_place() {
        let list = list_with(vec![item("Bread", price("3.50")), item("Eggs", None)]);
        let bread_id = list.items[0].id.clone();

        let (next, outcome) = merge_item(&list, candidate("Bread", price("2.99")));

        let next = next.unwrap();
        assert_eq!(next.items.len(), 2);
        assert_eq!(next.items[0].id, bread_id);
        assert_eq!(next.items[0].price, price("2.99"));
        assert!(matches!(outcome, MergeOutcome::Updated(_)));
    }

    #[test]
    fn should_keep_existing_when_offered_price_higher_or_equal() {
        let list = list_with(vec![item("Bread", price("2.99"))]);

        let (higher, _) = merge_item(&list, candidate("Bread", price("4.00")));
        let (equal, _) = merge_item(&list, candidate("Bread", price("2.990")));

        assert!(higher.is_none());
        assert!(equal.is_none());
    }

    #[test]
    fn should_price_unpriced_match() {
        let list = list_with(vec![item("Milk", None)]);

        let (next, _) = merge_item(&list, candidate("MILK", price("2.50")));

        let next = next.unwrap();
        assert_eq!(next.items.len(), 1);
        assert_eq!(next.items[0].name, "Milk");
        assert_eq!(next.items[0].price, price("2.50"));
    }

    #[test]
    fn should_keep_metadata_not_provided_by_candidate() {
        let mut existing = item("Coffee", price("9.00"));
        existing.store = Some("Corner shop".to_string());
        existing.address = Some("1 High St".to_string());
        let date = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        let list = list_with(vec![existing]);

        let candidate = MergeCandidate::new(
            "coffee",
            ItemDetails {
                price: price("7.50"),
                store: Some("Market".to_string()),
                address: None,
                purchase_date: Some(date),
            },
        )
        .unwrap();
        let (next, _) = merge_item(&list, candidate);

        let updated = &next.unwrap().items[0];
        assert_eq!(updated.store.as_deref(), Some("Market"));
        assert_eq!(updated.address.as_deref(), Some("1 High St"));
        assert_eq!(updated.purchase_date, Some(date));
    }

    #[test]
    fn should_preserve_completion_when_updating() {
        let mut existing = item("Tea", price("4.00"));
        existing.completed = true;
        let list = list_with(vec![existing]);

        let (next, _) = merge_item(&list, candidate("Tea", price("3.00")));

        assert!(next.unwrap().items[0].completed);
    }

    #[test]
    fn should_not_modify_input_list() {
        let list = list_with(vec![item("Bread", price("3.50"))]);
        let before = list.clone();

        let _ = merge_item(&list, candidate("Bread", price("1.00")));

        assert_eq!(list, before);
    }
}
