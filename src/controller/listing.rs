//! Background listing fetches

use tracing::debug;

use super::{log_call_failure, Controller, ControllerEvent};
use crate::api::{FileRecord, StorageApi};
use crate::logic::errors::{user_message, LOAD_FAILED};
use crate::logic::search::filter_records;
use crate::logic::sorting::sort_records;
use crate::logic::ui::{cycle_display_mode, cycle_sort_mode};
use crate::model::{ListingKey, Route, ViewMode};
use crate::session::{call_with_refresh, AuthCallError};

impl Controller {
    /// Start a fetch if the shown listing does not match the current
    /// folder / view / search / refresh counter. Returns true if one started.
    pub fn refresh_listing_if_stale(&mut self) -> bool {
        if self.route != Route::Dashboard || !self.model.listing_is_stale() {
            return false;
        }
        self.request_listing();
        true
    }

    /// Fetch the listing for the current state in a background task
    pub fn request_listing(&mut self) {
        self.cancel_listing_task();
        self.listing_generation += 1;

        let generation = self.listing_generation;
        let key = self.model.listing_key();
        self.model.listing.loading = true;
        self.model.listing.loaded_key = Some(key.clone());

        debug!(generation, ?key, "Requesting listing");

        let api = self.api.clone();
        let mut session = self.session.clone();
        let tx = self.events_tx.clone();

        self.listing_task = Some(tokio::spawn(async move {
            let previous_token = session.access_token.clone();
            let api: &dyn StorageApi = api.as_ref();

            let result = match key.view_mode {
                ViewMode::Folder => {
                    let folder = key.folder_id.as_deref();
                    let search = key.search.as_str();
                    call_with_refresh(api, &mut session, |token| async move {
                        api.list_folder(folder, search, &token).await
                    })
                    .await
                }
                ViewMode::Recent => {
                    call_with_refresh(api, &mut session, |token| async move {
                        api.recent_files(&token).await
                    })
                    .await
                }
            };

            let refreshed_token = if session.access_token != previous_token {
                session.access_token
            } else {
                None
            };

            let _ = tx.send(ControllerEvent::ListingLoaded {
                generation,
                key,
                result,
                refreshed_token,
            });
        }));
    }

    pub fn listing_generation(&self) -> u64 {
        self.listing_generation
    }

    pub(super) fn cancel_listing_task(&mut self) {
        if let Some(handle) = self.listing_task.take() {
            handle.abort();
        }
    }

    pub(super) fn on_listing_loaded(
        &mut self,
        generation: u64,
        key: ListingKey,
        result: Result<Vec<FileRecord>, AuthCallError>,
        refreshed_token: Option<String>,
    ) {
        if self.route != Route::Dashboard {
            debug!("Dropping listing that arrived after logout");
            return;
        }

        // Login/logout bump the generation, so a token from another session never lands here
        if generation != self.listing_generation {
            debug!(
                generation,
                current = self.listing_generation,
                "Dropping superseded listing"
            );
            return;
        }

        if let Some(token) = refreshed_token {
            self.session.access_token = Some(token);
            self.persist_session();
        }

        // Navigated since the request went out: token kept, entries dropped
        if key != self.model.listing_key() {
            debug!(?key, "Dropping listing for a previous location");
            return;
        }

        self.listing_task = None;
        self.model.listing.loading = false;

        match result {
            Ok(mut items) => {
                if key.view_mode == ViewMode::Folder {
                    items = filter_records(&items, &key.search);
                    sort_records(&mut items, self.model.ui.sort_mode, self.model.ui.sort_reverse);
                }
                debug!(count = items.len(), "Listing loaded");
                self.model.listing.set_items(items);
            }
            Err(e) => {
                log_call_failure("Listing", &e);
                self.model.ui.error = Some(user_message(&e, LOAD_FAILED));
                self.model.listing.set_items(Vec::new());
            }
        }
    }

    /// A-Z -> Timestamp -> Size -> A-Z, re-sorting what is shown
    pub fn cycle_sort_mode(&mut self) {
        self.model.ui.sort_mode = cycle_sort_mode(self.model.ui.sort_mode);
        self.resort_listing();
    }

    pub fn toggle_sort_reverse(&mut self) {
        self.model.ui.sort_reverse = !self.model.ui.sort_reverse;
        self.resort_listing();
    }

    pub fn cycle_display_mode(&mut self) {
        self.model.ui.display_mode = cycle_display_mode(self.model.ui.display_mode);
    }

    /// Re-sort the shown folder listing after a sort mode change
    pub fn resort_listing(&mut self) {
        if self.model.navigation.view_mode == ViewMode::Folder {
            let (mode, reverse) = (self.model.ui.sort_mode, self.model.ui.sort_reverse);
            sort_records(&mut self.model.listing.items, mode, reverse);
        }
    }
}
