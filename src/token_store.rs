//! Token persistence
//!
//! The controller never touches storage directly; it is handed a
//! [`TokenStore`] at construction and loads/saves/clears through it.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::session::Session;

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("token store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("token store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub trait TokenStore: Send {
    /// Read the persisted session (empty session if nothing is stored)
    fn load(&self) -> Result<Session, TokenStoreError>;

    fn save(&mut self, session: &Session) -> Result<(), TokenStoreError>;

    fn clear(&mut self) -> Result<(), TokenStoreError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTokens {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
}

/// JSON file holding the access and refresh tokens
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `<data_dir>/cloudtui/session.json`, falling back to the temp dir
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("cloudtui")
            .join("session.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Session, TokenStoreError> {
        if !self.path.exists() {
            return Ok(Session::default());
        }
        let text = fs::read_to_string(&self.path)?;
        let stored: StoredTokens = serde_json::from_str(&text)?;
        debug!(path = %self.path.display(), "loaded session tokens");
        Ok(Session::new(stored.access_token, stored.refresh_token))
    }

    fn save(&mut self, session: &Session) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let stored = StoredTokens {
            access_token: session.access_token.clone(),
            refresh_token: session.refresh_token.clone(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&stored)?)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), TokenStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store; clones share the same slot so tests can inspect it
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    inner: Arc<Mutex<Session>>,
}

impl MemoryTokenStore {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.inner.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Session, TokenStoreError> {
        Ok(self.snapshot())
    }

    fn save(&mut self, session: &Session) -> Result<(), TokenStoreError> {
        if let Ok(mut slot) = self.inner.lock() {
            *slot = session.clone();
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), TokenStoreError> {
        if let Ok(mut slot) = self.inner.lock() {
            *slot = Session::default();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_missing_file_is_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("session.json"));
        let session = store.load().unwrap();
        assert!(session.access_token.is_none());
        assert!(session.refresh_token.is_none());
    }

    #[test]
    fn test_file_store_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileTokenStore::new(dir.path().join("nested").join("session.json"));

        let session = Session::new(Some("access".into()), Some("refresh".into()));
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), session);

        store.clear().unwrap();
        assert!(!store.path().exists());
        assert_eq!(store.load().unwrap(), Session::default());

        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        let store = FileTokenStore::new(path);
        assert!(matches!(store.load(), Err(TokenStoreError::Corrupt(_))));
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryTokenStore::default();
        let mut writer = store.clone();
        writer
            .save(&Session::new(Some("a".into()), None))
            .unwrap();
        assert_eq!(store.snapshot().access_token.as_deref(), Some("a"));

        writer.clear().unwrap();
        assert!(store.snapshot().access_token.is_none());
    }
}
