//! Dashboard Controller
//!
//! Owns the [`Model`], the [`Session`] and the injected collaborators
//! (API client, token store) and turns user intents into state changes.
//! Methods are split by domain:
//!
//! - auth: construction, login, logout, session persistence
//! - navigation: breadcrumb path and view mode
//! - search: debounced search input
//! - folders: new-folder and upload dialogs
//! - listing: background listing fetches and event dispatch
//!
//! All handlers take `&mut self` and run to completion. Work that finishes
//! later (debounce timers, listing fetches) reports back through
//! [`ControllerEvent`]s carrying a generation number, so results for a
//! superseded intent are dropped instead of applied.

mod auth;
mod folders;
mod listing;
mod navigation;
mod search;

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::api::{FileRecord, StorageApi};
use crate::logic::errors::{classify_error, format_error_message, user_message, LOGIN_REQUIRED};
use crate::model::{ListingKey, Model, Route};
use crate::session::{AuthCallError, Session};
use crate::token_store::TokenStore;

/// Quiet period before search input is applied to the listing
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Failure of a controller operation. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// Bad user input; no request was made
    #[error("{0}")]
    Validation(String),

    /// No access token at all; no request was made
    #[error("{}", LOGIN_REQUIRED)]
    AuthRequired,

    /// Refresh failed, or the single retry after refresh failed
    #[error("{0}")]
    SessionExpired(String),

    /// Any other request failure
    #[error("{0}")]
    Api(String),

    /// Caller passed an argument outside the valid range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ControllerError {
    pub(crate) fn from_auth_call(error: &AuthCallError, fallback: &str) -> Self {
        let message = user_message(error, fallback);
        if matches!(error, AuthCallError::NoAccessToken) || error.is_session_expired() {
            ControllerError::SessionExpired(message)
        } else {
            ControllerError::Api(message)
        }
    }
}

/// Completion reported by a background task
#[derive(Debug)]
pub enum ControllerEvent {
    /// Debounce timer for search generation `generation` elapsed
    SearchSettled { generation: u64 },

    /// Listing fetch finished
    ListingLoaded {
        generation: u64,
        key: ListingKey,
        result: Result<Vec<FileRecord>, AuthCallError>,
        /// New access token if the fetch had to refresh
        refreshed_token: Option<String>,
    },
}

pub struct Controller {
    pub model: Model,

    api: Arc<dyn StorageApi>,
    store: Box<dyn TokenStore>,
    session: Session,
    route: Route,

    debounce_delay: Duration,
    search_timer: Option<JoinHandle<()>>,
    search_generation: u64,

    listing_task: Option<JoinHandle<()>>,
    listing_generation: u64,

    events_tx: mpsc::UnboundedSender<ControllerEvent>,
    events_rx: mpsc::UnboundedReceiver<ControllerEvent>,
}

impl Controller {
    pub fn route(&self) -> Route {
        self.route
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.route == Route::Dashboard && self.session.is_authenticated()
    }

    /// Monotonic counter the listing reloads on
    pub fn refresh_counter(&self) -> u64 {
        self.model.refresh_counter
    }

    pub fn error(&self) -> Option<&str> {
        self.model.ui.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.model.ui.error = None;
    }

    /// Record `err` as the visible error and hand it back
    fn fail(&mut self, err: ControllerError) -> ControllerError {
        self.model.ui.error = Some(err.to_string());
        err
    }

    /// Signal that folder contents changed on the server
    fn bump_refresh(&mut self) {
        self.model.refresh_counter += 1;
    }

    /// Wait for the next background completion
    pub async fn next_event(&mut self) -> Option<ControllerEvent> {
        self.events_rx.recv().await
    }

    /// Non-blocking variant of [`Controller::next_event`]
    pub fn try_next_event(&mut self) -> Option<ControllerEvent> {
        self.events_rx.try_recv().ok()
    }

    /// Apply every completion already queued; returns how many were handled
    pub fn process_pending_events(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.try_next_event() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    pub fn handle_event(&mut self, event: ControllerEvent) {
        match event {
            ControllerEvent::SearchSettled { generation } => self.on_search_settled(generation),
            ControllerEvent::ListingLoaded {
                generation,
                key,
                result,
                refreshed_token,
            } => self.on_listing_loaded(generation, key, result, refreshed_token),
        }
    }
}

fn log_call_failure(action: &str, error: &AuthCallError) {
    match error.api_error() {
        Some(e) => warn!(kind = ?classify_error(e), "{} failed: {}", action, format_error_message(e)),
        None => warn!("{} failed: {}", action, error),
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.cancel_search_timer();
        self.cancel_listing_task();
    }
}
