//! Recording storage API double shared by the integration tests

#![allow(dead_code)]

use std::collections::HashSet;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use cloudtui::api::{ApiError, EntryKind, FileRecord, FolderRecord, StorageApi, TokenPair};
use cloudtui::controller::Controller;
use cloudtui::session::Session;
use cloudtui::token_store::MemoryTokenStore;

pub fn expired() -> ApiError {
    ApiError::AuthExpired {
        message: None,
    }
}

pub fn record(id: &str, name: &str, kind: EntryKind) -> FileRecord {
    FileRecord {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        size: 0,
        mimetype: None,
        parent_id: None,
        created_at: None,
    }
}

#[derive(Default)]
pub struct Calls {
    pub login: AtomicUsize,
    pub refresh: AtomicUsize,
    pub logout: AtomicUsize,
    pub create_folder: AtomicUsize,
    pub list_folder: AtomicUsize,
    pub recent: AtomicUsize,
    pub upload: AtomicUsize,
}

impl Calls {
    pub fn get(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

/// Accepts only access tokens in `valid_tokens`; everything else is a 401.
#[derive(Default)]
pub struct MockApi {
    pub calls: Calls,

    pub valid_tokens: Mutex<HashSet<String>>,
    /// Refresh token -> access token it is exchanged for
    pub refreshable: Mutex<Vec<(String, String)>>,
    /// Tokens handed out by refresh are still rejected
    pub reject_refreshed: Mutex<bool>,

    pub login_result: Mutex<Option<Result<TokenPair, ApiError>>>,
    pub logout_error: Mutex<Option<ApiError>>,
    /// Non-401 failure for create_folder / upload
    pub write_error: Mutex<Option<ApiError>>,

    pub listing: Mutex<Vec<FileRecord>>,
    pub recent_listing: Mutex<Vec<FileRecord>>,
    pub list_delay: Mutex<Duration>,

    /// (name, parent_id, token) per create_folder call
    pub created: Mutex<Vec<(String, Option<String>, String)>>,
    /// (parent_id, search) per list_folder call
    pub listed: Mutex<Vec<(Option<String>, String)>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(self, token: &str) -> Self {
        self.valid_tokens.lock().unwrap().insert(token.to_string());
        self
    }

    pub fn refresh_to(self, refresh_token: &str, access_token: &str) -> Self {
        self.refreshable
            .lock()
            .unwrap()
            .push((refresh_token.to_string(), access_token.to_string()));
        self
    }

    pub fn with_listing(self, items: Vec<FileRecord>) -> Self {
        *self.listing.lock().unwrap() = items;
        self
    }

    fn check(&self, token: &str) -> Result<(), ApiError> {
        if self.valid_tokens.lock().unwrap().contains(token) {
            Ok(())
        } else {
            Err(expired())
        }
    }

    fn write_error(&self) -> Result<(), ApiError> {
        match self.write_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StorageApi for MockApi {
    async fn login(&self, _email: &str, _password: &str) -> Result<TokenPair, ApiError> {
        self.calls.login.fetch_add(1, Ordering::SeqCst);
        let result = self.login_result.lock().unwrap().clone();
        let tokens = result.unwrap_or_else(|| Err(ApiError::Transport("no login scripted".into())))?;
        self.valid_tokens
            .lock()
            .unwrap()
            .insert(tokens.access_token.clone());
        Ok(tokens)
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, ApiError> {
        self.calls.refresh.fetch_add(1, Ordering::SeqCst);
        let found = self
            .refreshable
            .lock()
            .unwrap()
            .iter()
            .find(|(r, _)| r == refresh_token)
            .map(|(_, a)| a.clone());
        match found {
            Some(access) => {
                if !*self.reject_refreshed.lock().unwrap() {
                    self.valid_tokens.lock().unwrap().insert(access.clone());
                }
                Ok(access)
            }
            None => Err(ApiError::AuthExpired {
                message: Some("Invalid refresh token".to_string()),
            }),
        }
    }

    async fn logout(&self, _refresh_token: Option<&str>) -> Result<(), ApiError> {
        self.calls.logout.fetch_add(1, Ordering::SeqCst);
        match self.logout_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn create_folder(
        &self,
        name: &str,
        parent_id: Option<&str>,
        access_token: &str,
    ) -> Result<FolderRecord, ApiError> {
        self.calls.create_folder.fetch_add(1, Ordering::SeqCst);
        self.created.lock().unwrap().push((
            name.to_string(),
            parent_id.map(str::to_string),
            access_token.to_string(),
        ));
        self.check(access_token)?;
        self.write_error()?;
        Ok(FolderRecord {
            id: format!("new-{}", name),
            name: name.to_string(),
            parent_id: parent_id.map(str::to_string),
            created_at: None,
        })
    }

    async fn list_folder(
        &self,
        parent_id: Option<&str>,
        search: &str,
        access_token: &str,
    ) -> Result<Vec<FileRecord>, ApiError> {
        self.calls.list_folder.fetch_add(1, Ordering::SeqCst);
        self.listed
            .lock()
            .unwrap()
            .push((parent_id.map(str::to_string), search.to_string()));
        let delay = *self.list_delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.check(access_token)?;
        Ok(self.listing.lock().unwrap().clone())
    }

    async fn recent_files(&self, access_token: &str) -> Result<Vec<FileRecord>, ApiError> {
        self.calls.recent.fetch_add(1, Ordering::SeqCst);
        self.check(access_token)?;
        Ok(self.recent_listing.lock().unwrap().clone())
    }

    async fn upload_file(
        &self,
        path: &Path,
        parent_id: Option<&str>,
        access_token: &str,
    ) -> Result<FileRecord, ApiError> {
        self.calls.upload.fetch_add(1, Ordering::SeqCst);
        self.check(access_token)?;
        self.write_error()?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut file = record(&format!("file-{}", name), &name, EntryKind::File);
        file.parent_id = parent_id.map(str::to_string);
        Ok(file)
    }
}

pub fn session(access: Option<&str>, refresh: Option<&str>) -> Session {
    Session::new(access.map(str::to_string), refresh.map(str::to_string))
}

/// Controller over `api` with a shared in-memory store seeded with `session`
pub fn controller(api: Arc<MockApi>, session: Session) -> (Controller, MemoryTokenStore) {
    let store = MemoryTokenStore::new(session);
    let controller = Controller::new(api, Box::new(store.clone()));
    (controller, store)
}
