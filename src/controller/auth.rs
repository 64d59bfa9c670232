//! Construction, login and logout

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::{Controller, ControllerError, DEFAULT_SEARCH_DEBOUNCE};
use crate::api::StorageApi;
use crate::logic::errors::{classify_error, format_error_message, LOGIN_FAILED};
use crate::model::{Model, Route};
use crate::session::Session;
use crate::token_store::TokenStore;

impl Controller {
    /// Load the stored session and decide the initial route: Dashboard at
    /// root when an access token is present, Login otherwise.
    pub fn new(api: Arc<dyn StorageApi>, store: Box<dyn TokenStore>) -> Self {
        let session = match store.load() {
            Ok(session) => session,
            Err(e) => {
                warn!("Ignoring unreadable token store: {}", e);
                Session::default()
            }
        };

        let route = if session.is_authenticated() {
            Route::Dashboard
        } else {
            info!("No access token found, redirecting to login");
            Route::Login
        };

        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Self {
            model: Model::new(false),
            api,
            store,
            session,
            route,
            debounce_delay: DEFAULT_SEARCH_DEBOUNCE,
            search_timer: None,
            search_generation: 0,
            listing_task: None,
            listing_generation: 0,
            events_tx,
            events_rx,
        }
    }

    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debounce_delay = delay;
        self
    }

    pub fn with_vim_mode(mut self, vim_mode: bool) -> Self {
        self.model.ui.vim_mode = vim_mode;
        self
    }

    pub fn debounce_delay(&self) -> Duration {
        self.debounce_delay
    }

    /// Submit the login form held in the UI model
    pub async fn submit_login(&mut self) -> Result<(), ControllerError> {
        let form = self.model.ui.login.clone();
        self.login(&form.email, &form.password).await
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ControllerError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(self.fail(ControllerError::Validation(
                "Email and password are required".to_string(),
            )));
        }

        match self.api.login(email, password).await {
            Ok(tokens) => {
                info!(email, "Logged in");
                self.session = Session::from_tokens(tokens);
                self.persist_session();
                self.reset_dashboard();
                self.model.ui.login.password.clear();
                self.route = Route::Dashboard;
                Ok(())
            }
            Err(e) => {
                debug!(kind = ?classify_error(&e), "Login failed: {}", format_error_message(&e));
                let message = e.server_message().unwrap_or(LOGIN_FAILED).to_string();
                Err(self.fail(ControllerError::Api(message)))
            }
        }
    }

    /// Best-effort server logout, then always drop to the logged-out state
    pub async fn logout(&mut self) {
        let refresh_token = self.session.refresh_token.clone();
        if let Err(e) = self.api.logout(refresh_token.as_deref()).await {
            warn!("Logout request failed, logging out locally: {}", e);
        }
        self.end_session();
    }

    fn end_session(&mut self) {
        self.session = Session::default();
        if let Err(e) = self.store.clear() {
            warn!("Failed to clear token store: {}", e);
        }
        self.reset_dashboard();
        self.model.ui.login = Default::default();
        self.route = Route::Login;
        info!("Session ended, redirecting to login");
    }

    /// Back to Folder view at root with no search, dialogs or listing
    fn reset_dashboard(&mut self) {
        self.cancel_search_timer();
        self.search_generation += 1;
        self.cancel_listing_task();
        self.listing_generation += 1;

        self.model.navigation = Default::default();
        self.model.search.clear();
        self.model.listing.clear();
        self.model.ui.close_all_modals();
        self.model.ui.search_mode = false;
        self.model.ui.error = None;
    }

    pub(super) fn persist_session(&mut self) {
        if let Err(e) = self.store.save(&self.session) {
            warn!("Failed to persist session tokens: {}", e);
        }
    }

    /// Save the session if a refresh replaced the access token
    pub(super) fn persist_if_refreshed(&mut self, previous_token: Option<&str>) {
        if self.session.access_token.as_deref() != previous_token {
            debug!("Access token refreshed, persisting session");
            self.persist_session();
        }
    }
}
