//! Listing Model
//!
//! The entries currently shown in the main pane and which of them is
//! selected, plus the key describing what they were loaded for.

use super::navigation::ViewMode;
use crate::api::FileRecord;

/// Everything a listing depends on. A listing is re-fetched whenever the
/// key derived from the controller state differs from `loaded_key`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingKey {
    pub view_mode: ViewMode,
    pub folder_id: Option<String>,
    pub search: String,
    pub refresh: u64,
}

#[derive(Clone, Debug, Default)]
pub struct ListingModel {
    pub items: Vec<FileRecord>,
    pub selected: Option<usize>,
    pub loading: bool,
    /// Key of the request whose result is in `items` (or in flight)
    pub loaded_key: Option<ListingKey>,
}

impl ListingModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_item(&self) -> Option<&FileRecord> {
        self.selected.and_then(|idx| self.items.get(idx))
    }

    /// Replace the items, keeping the selection in range
    pub fn set_items(&mut self, items: Vec<FileRecord>) {
        self.items = items;
        self.selected = match self.selected {
            _ if self.items.is_empty() => None,
            Some(idx) if idx < self.items.len() => Some(idx),
            Some(_) => Some(self.items.len() - 1),
            None => Some(0),
        };
    }

    /// Move down one entry, wrapping to the top
    pub fn select_next(&mut self) {
        let len = self.items.len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(idx) if idx + 1 < len => Some(idx + 1),
            _ => Some(0),
        };
    }

    /// Move up one entry, wrapping to the bottom
    pub fn select_prev(&mut self) {
        let len = self.items.len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(idx) if idx > 0 && idx < len => Some(idx - 1),
            _ => Some(len - 1),
        };
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.selected = None;
        self.loading = false;
        self.loaded_key = None;
    }
}
