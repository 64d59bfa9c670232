use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Failure reported by the storage API
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP 401: the access (or refresh) token was rejected
    #[error("unauthorized")]
    AuthExpired { message: Option<String> },

    /// Any other non-success HTTP status
    #[error("server returned HTTP {status}")]
    Status { status: u16, message: Option<String> },

    /// Connection, DNS, TLS or body decoding failure
    #[error("request failed: {0}")]
    Transport(String),

    /// Failure before anything was sent (e.g. unreadable upload file)
    #[error("{0}")]
    Local(String),
}

impl ApiError {
    /// Message supplied by the server in the JSON error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::AuthExpired { message } | ApiError::Status { message, .. } => {
                message.as_deref().filter(|m| !m.trim().is_empty())
            }
            _ => None,
        }
    }

    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiError::AuthExpired { .. })
    }
}

/// Tokens returned by a successful login
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshResponse {
    access_token: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FolderRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    #[default]
    File,
}

/// A file or folder as returned by the listing endpoints
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub mimetype: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl FileRecord {
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

impl From<FolderRecord> for FileRecord {
    fn from(folder: FolderRecord) -> Self {
        Self {
            id: folder.id,
            name: folder.name,
            kind: EntryKind::Folder,
            size: 0,
            mimetype: None,
            parent_id: folder.parent_id,
            created_at: folder.created_at,
        }
    }
}

/// Operations the dashboard needs from the storage service.
///
/// Every call taking an `access_token` fails with [`ApiError::AuthExpired`]
/// when the server answers 401.
#[async_trait]
pub trait StorageApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ApiError>;

    /// Exchange a refresh token for a new access token
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, ApiError>;

    /// Best-effort server-side session revocation
    async fn logout(&self, refresh_token: Option<&str>) -> Result<(), ApiError>;

    async fn create_folder(
        &self,
        name: &str,
        parent_id: Option<&str>,
        access_token: &str,
    ) -> Result<FolderRecord, ApiError>;

    async fn list_folder(
        &self,
        parent_id: Option<&str>,
        search: &str,
        access_token: &str,
    ) -> Result<Vec<FileRecord>, ApiError>;

    async fn recent_files(&self, access_token: &str) -> Result<Vec<FileRecord>, ApiError>;

    async fn upload_file(
        &self,
        path: &Path,
        parent_id: Option<&str>,
        access_token: &str,
    ) -> Result<FileRecord, ApiError>;
}

/// HTTP implementation of [`StorageApi`]
#[derive(Clone)]
pub struct CloudClient {
    base_url: String,
    client: Client,
}

impl CloudClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    /// Turn a response into `T`, mapping 401 and other failures to [`ApiError`]
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Transport(format!("invalid response body: {}", e)))
    }

    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .unwrap_or_default()
            .message;

        debug!(status = status.as_u16(), ?message, "API request failed");

        if status == StatusCode::UNAUTHORIZED {
            Err(ApiError::AuthExpired { message })
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl StorageApi for CloudClient {
    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ApiError> {
        let url = self.url("/auth/login");
        debug!(%url, "login");
        let body = serde_json::json!({ "email": email, "password": password });
        let response = self.send(self.client.post(&url).json(&body)).await?;
        Self::decode(response).await
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, ApiError> {
        let url = self.url("/auth/refresh");
        debug!(%url, "refreshing access token");
        let body = serde_json::json!({ "refreshToken": refresh_token });
        let response = self.send(self.client.post(&url).json(&body)).await?;
        let refreshed: RefreshResponse = Self::decode(response).await?;
        Ok(refreshed.access_token)
    }

    async fn logout(&self, refresh_token: Option<&str>) -> Result<(), ApiError> {
        let url = self.url("/auth/logout");
        let body = serde_json::json!({ "refreshToken": refresh_token });
        let response = self.send(self.client.post(&url).json(&body)).await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn create_folder(
        &self,
        name: &str,
        parent_id: Option<&str>,
        access_token: &str,
    ) -> Result<FolderRecord, ApiError> {
        let url = self.url("/files/folder");
        debug!(%url, name, ?parent_id, "create folder");
        let body = serde_json::json!({ "name": name, "parentId": parent_id });
        let response = self
            .send(
                self.client
                    .post(&url)
                    .bearer_auth(access_token)
                    .json(&body),
            )
            .await?;
        Self::decode(response).await
    }

    async fn list_folder(
        &self,
        parent_id: Option<&str>,
        search: &str,
        access_token: &str,
    ) -> Result<Vec<FileRecord>, ApiError> {
        let mut url = self.url("/files");
        let mut params = Vec::new();
        if let Some(parent_id) = parent_id {
            params.push(format!("parentId={}", urlencoding::encode(parent_id)));
        }
        if !search.is_empty() {
            params.push(format!("search={}", urlencoding::encode(search)));
        }
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.join("&"));
        }

        debug!(%url, "list folder");
        let response = self
            .send(self.client.get(&url).bearer_auth(access_token))
            .await?;
        Self::decode(response).await
    }

    async fn recent_files(&self, access_token: &str) -> Result<Vec<FileRecord>, ApiError> {
        let url = self.url("/files/recent");
        debug!(%url, "recent files");
        let response = self
            .send(self.client.get(&url).bearer_auth(access_token))
            .await?;
        Self::decode(response).await
    }

    async fn upload_file(
        &self,
        path: &Path,
        parent_id: Option<&str>,
        access_token: &str,
    ) -> Result<FileRecord, ApiError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::Local(format!("Cannot read {}: {}", path.display(), e)))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let mut form = reqwest::multipart::Form::new()
            .part("file", reqwest::multipart::Part::bytes(bytes).file_name(file_name));
        if let Some(parent_id) = parent_id {
            form = form.text("parentId", parent_id.to_string());
        }

        let url = self.url("/files/upload");
        debug!(%url, path = %path.display(), ?parent_id, "upload file");
        let response = self
            .send(
                self.client
                    .post(&url)
                    .bearer_auth(access_token)
                    .multipart(form),
            )
            .await?;
        Self::decode(response).await
    }
}
