//! The shopping state value and its pure transitions.
//!
//! Every transition borrows the current state and, when something changes,
//! returns a complete replacement. Callers swap the replacement in as a whole,
//! so no partially applied mutation is ever observable.

use super::best_price::BestPriceIndex;
use super::errors::ShoppingListError;
use super::filter::{ItemFilter, filter_items};
use super::merge::{MergeCandidate, MergeOutcome, merge_item};
use super::model::{Item, ItemDetails, ShoppingList};
use crate::domain::shared::price::Price;
use crate::domain::shared::value_objects::{ItemId, ListId};

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingState {
    lists: Vec<ShoppingList>,
    active_list_id: Option<ListId>,
    filter: ItemFilter,
    best_prices: BestPriceIndex,
}

/// What a transition produced: the replacement state (`None` for a no-op)
/// and a result for the caller.
#[derive(Debug)]
pub struct Transition<T> {
    pub state: Option<ShoppingState>,
    pub outcome: T,
}

impl<T> Transition<T> {
    fn unchanged(outcome: T) -> Self {
        Self {
            state: None,
            outcome,
        }
    }

    fn changed(state: ShoppingState, outcome: T) -> Self {
        Self {
            state: Some(state),
            outcome,
        }
    }
}

impl ShoppingState {
    /// Builds the state for freshly loaded lists, activating the first one.
    pub fn from_lists(lists: Vec<ShoppingList>) -> Self {
        let active_list_id = lists.first().map(|list| list.id.clone());
        Self {
            best_prices: BestPriceIndex::from_lists(&lists),
            lists,
            active_list_id,
            filter: ItemFilter::default(),
        }
    }

    /// One default list holding the example items.
    pub fn seed() -> Self {
        Self::from_lists(vec![ShoppingList::default_seed()])
    }

    pub fn lists(&self) -> &[ShoppingList] {
        &self.lists
    }

    pub fn active_list_id(&self) -> Option<&ListId> {
        self.active_list_id.as_ref()
    }

    /// The active list, or `None` when the selector points nowhere.
    pub fn active_list(&self) -> Option<&ShoppingList> {
        let id = self.active_list_id.as_ref()?;
        self.lists.iter().find(|list| &list.id == id)
    }

    pub fn filter(&self) -> ItemFilter {
        self.filter
    }

    pub fn filtered_items(&self) -> Vec<Item> {
        filter_items(self.active_list(), self.filter)
    }

    pub fn best_prices(&self) -> &BestPriceIndex {
        &self.best_prices
    }

    pub fn best_price_for(&self, name: &str) -> Option<&Price> {
        self.best_prices.get(name)
    }

    fn with_lists(&self, lists: Vec<ShoppingList>, active_list_id: Option<ListId>) -> Self {
        Self {
            best_prices: BestPriceIndex::from_lists(&lists),
            lists,
            active_list_id,
            filter: self.filter,
        }
    }

    /// Rewrites the active list through `edit`; `edit` returns `None` when it
    /// has nothing to change.
    fn edit_active<T>(
        &self,
        missing: T,
        edit: impl FnOnce(&ShoppingList) -> (Option<ShoppingList>, T),
    ) -> Transition<T> {
        let Some(active) = self.active_list() else {
            return Transition::unchanged(missing);
        };
        match edit(active) {
            (Some(next), outcome) => {
                let lists = self
                    .lists
                    .iter()
                    .map(|list| {
                        if list.id == next.id {
                            next.clone()
                        } else {
                            list.clone()
                        }
                    })
                    .collect();
                Transition::changed(
                    self.with_lists(lists, self.active_list_id.clone()),
                    outcome,
                )
            }
            (None, outcome) => Transition::unchanged(outcome),
        }
    }

    pub fn create_list(&self, name: &str) -> Result<Transition<ShoppingList>, ShoppingListError> {
        let list = ShoppingList::new(name)?;
        let mut lists = self.lists.clone();
        lists.push(list.clone());
        let next = self.with_lists(lists, Some(list.id.clone()));
        Ok(Transition::changed(next, list))
    }

    /// Removes a list, repointing the selector to the first survivor when the
    /// active list goes away.
    pub fn remove_list(&self, id: &ListId) -> Transition<bool> {
        if !self.lists.iter().any(|list| &list.id == id) {
            return Transition::unchanged(false);
        }

        let lists: Vec<ShoppingList> = self
            .lists
            .iter()
            .filter(|list| &list.id != id)
            .cloned()
            .collect();
        let active_list_id = if self.active_list_id.as_ref() == Some(id) {
            lists.first().map(|list| list.id.clone())
        } else {
            self.active_list_id.clone()
        };
        Transition::changed(self.with_lists(lists, active_list_id), true)
    }

    /// Points the selector at `id` without checking that it exists; derived
    /// views simply come out empty for an unknown id.
    pub fn set_active_list(&self, id: ListId) -> Transition<()> {
        if self.active_list_id.as_ref() == Some(&id) {
            return Transition::unchanged(());
        }
        let mut next = self.clone();
        next.active_list_id = Some(id);
        Transition::changed(next, ())
    }

    pub fn set_filter(&self, filter: ItemFilter) -> Transition<()> {
        if self.filter == filter {
            return Transition::unchanged(());
        }
        let mut next = self.clone();
        next.filter = filter;
        Transition::changed(next, ())
    }

    pub fn add_item(&self, name: &str, details: ItemDetails) -> Transition<MergeOutcome> {
        let Ok(candidate) = MergeCandidate::new(name, details) else {
            return Transition::unchanged(MergeOutcome::Ignored);
        };
        self.edit_active(MergeOutcome::Ignored, |list| merge_item(list, candidate))
    }

    pub fn remove_item(&self, id: &ItemId) -> Transition<Option<Item>> {
        self.edit_active(None, |list| {
            let Some(position) = list.items.iter().position(|item| &item.id == id) else {
                return (None, None);
            };
            let mut next = list.clone();
            let removed = next.items.remove(position);
            (Some(next), Some(removed))
        })
    }

    pub fn toggle_item(&self, id: &ItemId) -> Transition<Option<Item>> {
        self.edit_active(None, |list| {
            let Some(position) = list.items.iter().position(|item| &item.id == id) else {
                return (None, None);
            };
            let mut next = list.clone();
            let item = &mut next.items[position];
            item.completed = !item.completed;
            let toggled = item.clone();
            (Some(next), Some(toggled))
        })
    }

    /// Moves the item at `from` to `to`, shifting the items in between.
    ///
    /// Out-of-range indices are clamped to the last position; when both are
    /// out of range nothing moves.
    pub fn reorder_items(&self, from: usize, to: usize) -> Transition<bool> {
        self.edit_active(false, |list| {
            let len = list.items.len();
            if len == 0 || (from >= len && to >= len) {
                return (None, false);
            }
            let from = from.min(len - 1);
            let to = to.min(len - 1);
            if from == to {
                return (None, false);
            }
            let mut next = list.clone();
            let item = next.items.remove(from);
            next.items.insert(to, item);
            (Some(next), true)
        })
    }

    pub fn clear_completed(&self) -> Transition<usize> {
        self.edit_active(0, |list| {
            let mut next = list.clone();
            next.items.retain(|item| !item.completed);
            let removed = list.items.len() - next.items.len();
            if removed == 0 {
                (None, 0)
            } else {
                (Some(next), removed)
            }
        })
    }
}
