//! Breadcrumb path and view mode transitions
//!
//! Every transition here also clears the search and drops the shown
//! listing; the listing for the new position is fetched on the next
//! [`Controller::refresh_listing_if_stale`].

use tracing::debug;

use super::{Controller, ControllerError};
use crate::model::{PathEntry, ViewMode};

impl Controller {
    /// Descend into a folder: append it to the path and show Folder view
    pub fn enter_folder(&mut self, name: &str, id: &str) {
        debug!(name, id, "enter folder");
        self.model.navigation.path.push(PathEntry::folder(name, id));
        self.model.navigation.view_mode = ViewMode::Folder;
        self.after_navigation();
    }

    /// Truncate the path so breadcrumb `index` becomes the current folder
    pub fn jump_to_breadcrumb(&mut self, index: usize) -> Result<(), ControllerError> {
        self.model
            .navigation
            .path
            .truncate_to(index)
            .map_err(|e| {
                ControllerError::InvalidArgument(format!(
                    "breadcrumb index {} out of range (path length {})",
                    e.index, e.len
                ))
            })?;
        self.model.navigation.view_mode = ViewMode::Folder;
        self.after_navigation();
        Ok(())
    }

    /// Show recent files; the path is kept for returning to Folder view
    pub fn show_recent(&mut self) {
        self.model.navigation.view_mode = ViewMode::Recent;
        self.after_navigation();
    }

    /// Leave Recent view for the folder the path points at
    pub fn show_folder_view(&mut self) {
        self.model.navigation.view_mode = ViewMode::Folder;
        self.after_navigation();
    }

    /// Show the root folder
    pub fn show_dashboard_root(&mut self) {
        self.model.navigation.view_mode = ViewMode::Folder;
        self.model.navigation.path.reset();
        self.after_navigation();
    }

    /// Go to the parent folder; false when already at root
    pub fn go_up(&mut self) -> bool {
        let path = &self.model.navigation.path;
        if path.is_root() {
            return false;
        }
        let parent = path.len() - 2;
        self.jump_to_breadcrumb(parent).is_ok()
    }

    /// Enter the selected entry if it is a folder
    pub fn open_selected(&mut self) -> bool {
        let Some(item) = self.model.listing.selected_item().cloned() else {
            return false;
        };
        if !item.is_folder() {
            return false;
        }
        self.enter_folder(&item.name, &item.id);
        true
    }

    pub fn select_next(&mut self) {
        self.model.listing.select_next();
    }

    pub fn select_prev(&mut self) {
        self.model.listing.select_prev();
    }

    fn after_navigation(&mut self) {
        self.clear_search();
        self.model.listing.clear();
    }
}
