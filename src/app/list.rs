//! Item list view - row selection over the collection owned by `AppState`

use crate::models::Item;

/// Selection state for the list; rows themselves are passed in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemList {
    pub selected: usize,
}

impl ItemList {
    pub fn select_next(&mut self, items: &[Item]) {
        if !items.is_empty() {
            self.selected = (self.selected + 1) % items.len();
        }
    }

    pub fn select_prev(&mut self, items: &[Item]) {
        if !items.is_empty() {
            self.selected = self.selected.checked_sub(1).unwrap_or(items.len() - 1);
        }
    }

    /// Keep the selection on a valid row after the collection is replaced
    pub fn clamp(&mut self, items: &[Item]) {
        self.selected = self.selected.min(items.len().saturating_sub(1));
    }

    pub fn selected_item<'a>(&self, items: &'a [Item]) -> Option<&'a Item> {
        items.get(self.selected)
    }
}
