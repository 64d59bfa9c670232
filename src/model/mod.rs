//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the dashboard.
//! The Model is organized into focused sub-models:
//!
//! - **NavigationModel**: view mode and breadcrumb path
//! - **SearchState**: raw / debounced search input
//! - **ListingModel**: entries shown in the main pane
//! - **UiModel**: preferences, dialogs, error and toast
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: API client, token store and timers live in the controller
//! - Pure accessors: Helper methods are side-effect free

pub mod listing;
pub mod navigation;
pub mod search;
pub mod types;
pub mod ui;

pub use listing::{ListingKey, ListingModel};
pub use navigation::{NavigationModel, NavigationPath, PathEntry, ViewMode};
pub use search::SearchState;
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub navigation: NavigationModel,

    pub search: SearchState,

    pub listing: ListingModel,

    pub ui: UiModel,

    /// Bumped whenever folder contents changed on the server
    pub refresh_counter: u64,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(vim_mode: bool) -> Self {
        Self {
            navigation: NavigationModel::new(),
            search: SearchState::new(),
            listing: ListingModel::new(),
            ui: UiModel::new(vim_mode),
            refresh_counter: 0,
        }
    }

    /// Key describing the listing the current state calls for
    pub fn listing_key(&self) -> ListingKey {
        let view_mode = self.navigation.view_mode;
        let (folder_id, search) = match view_mode {
            ViewMode::Folder => (
                self.navigation.path.current_folder_id().map(str::to_string),
                self.search.debounced.clone(),
            ),
            ViewMode::Recent => (None, String::new()),
        };
        ListingKey {
            view_mode,
            folder_id,
            search,
            refresh: self.refresh_counter,
        }
    }

    /// True when the shown listing no longer matches the state
    pub fn listing_is_stale(&self) -> bool {
        self.listing.loaded_key.as_ref() != Some(&self.listing_key())
    }

    /// Get current breadcrumb entry
    pub fn current_entry(&self) -> &PathEntry {
        self.navigation.path.current()
    }

    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}
