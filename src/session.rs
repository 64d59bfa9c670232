//! Authenticated session and the refresh-and-retry call wrapper

use std::future::Future;

use thiserror::Error;
use tracing::{debug, warn};

use crate::api::{ApiError, StorageApi, TokenPair};

/// Tokens for the signed-in user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl Session {
    pub fn new(access_token: Option<String>, refresh_token: Option<String>) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }

    pub fn from_tokens(tokens: TokenPair) -> Self {
        Self::new(Some(tokens.access_token), Some(tokens.refresh_token))
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Why an authenticated call did not produce a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthCallError {
    #[error("no access token")]
    NoAccessToken,

    /// First attempt failed with something other than 401
    #[error(transparent)]
    Api(ApiError),

    #[error("token refresh failed: {0}")]
    RefreshFailed(ApiError),

    /// The single retry after a successful refresh failed, for any reason
    #[error("retry after refresh failed: {0}")]
    RetryFailed(ApiError),
}

impl AuthCallError {
    /// True when the session can no longer be used without logging in again
    pub fn is_session_expired(&self) -> bool {
        match self {
            AuthCallError::RefreshFailed(_) | AuthCallError::RetryFailed(_) => true,
            _ => false,
        }
    }

    /// Underlying API failure, if a request was made at all
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            AuthCallError::NoAccessToken => None,
            AuthCallError::Api(e) | AuthCallError::RefreshFailed(e) | AuthCallError::RetryFailed(e) => {
                Some(e)
            }
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        self.api_error().and_then(ApiError::server_message)
    }
}

/// Run `op` with the session's access token, refreshing at most once.
///
/// On a 401 the refresh token is exchanged for a new access token, which is
/// written into `session`, and `op` is retried exactly once. The caller is
/// responsible for persisting `session` if the access token changed.
pub async fn call_with_refresh<T, F, Fut>(
    api: &dyn StorageApi,
    session: &mut Session,
    op: F,
) -> Result<T, AuthCallError>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let token = match session.access_token.clone() {
        Some(token) if !token.is_empty() => token,
        _ => return Err(AuthCallError::NoAccessToken),
    };

    let err = match op(token).await {
        Ok(value) => return Ok(value),
        Err(err) if err.is_auth_expired() => err,
        Err(err) => return Err(AuthCallError::Api(err)),
    };

    let Some(refresh_token) = session.refresh_token.clone().filter(|t| !t.is_empty()) else {
        warn!("access token rejected and no refresh token is stored");
        return Err(AuthCallError::RefreshFailed(err));
    };

    debug!("access token rejected, refreshing once");
    let new_token = api
        .refresh_access_token(&refresh_token)
        .await
        .map_err(AuthCallError::RefreshFailed)?;
    session.access_token = Some(new_token.clone());

    op(new_token).await.map_err(AuthCallError::RetryFailed)
}
