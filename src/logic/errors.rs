use crate::api::ApiError;
use crate::session::AuthCallError;

pub const SESSION_EXPIRED: &str = "Session expired. Please log in again.";
pub const FOLDER_NAME_REQUIRED: &str = "Folder name is required";
pub const LOGIN_REQUIRED: &str = "Please log in to create folders";
pub const CREATE_FOLDER_FAILED: &str = "Failed to create folder";
pub const UPLOAD_FAILED: &str = "Failed to upload file";
pub const LOAD_FAILED: &str = "Failed to load files";
pub const LOGIN_FAILED: &str = "Login failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    Unauthorized, // HTTP 401
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Other,
}

/// Classify an API error by status code or transport message
pub fn classify_error(error: &ApiError) -> ErrorType {
    match error {
        ApiError::AuthExpired { .. } => ErrorType::Unauthorized,
        ApiError::Status { status, .. } => match status {
            401 => ErrorType::Unauthorized,
            404 => ErrorType::NotFound,
            500..=599 => ErrorType::ServerError,
            _ => ErrorType::Other,
        },
        ApiError::Transport(msg) => {
            let msg = msg.to_lowercase();
            if msg.contains("connection refused") {
                ErrorType::ConnectionRefused
            } else if msg.contains("timeout") || msg.contains("timed out") {
                ErrorType::Timeout
            } else if msg.contains("dns") || msg.contains("network") {
                ErrorType::NetworkError
            } else {
                ErrorType::Other
            }
        }
        ApiError::Local(_) => ErrorType::Other,
    }
}

/// Format error message for logs - server message if present, raw error otherwise
pub fn format_error_message(error: &ApiError) -> String {
    match error.server_message() {
        Some(message) => format!("{} ({})", message, error),
        None => error.to_string(),
    }
}

/// Text shown to the user for a failed authenticated call.
///
/// Preference order: server-supplied message, then the session-expired
/// text when the refresh path failed, then `fallback`.
pub fn user_message(error: &AuthCallError, fallback: &str) -> String {
    if let Some(message) = error.server_message() {
        return message.to_string();
    }
    if matches!(error, AuthCallError::NoAccessToken) || error.is_session_expired() {
        return SESSION_EXPIRED.to_string();
    }
    match error {
        AuthCallError::Api(ApiError::Local(message)) => message.clone(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> ApiError {
        ApiError::Status {
            status: code,
            message: None,
        }
    }

    #[test]
    fn test_classify_connection_refused() {
        let err = ApiError::Transport("tcp connect error: Connection refused (os error 111)".into());
        assert_eq!(classify_error(&err), ErrorType::ConnectionRefused);
    }

    #[test]
    fn test_classify_timeout() {
        let err = ApiError::Transport("operation timed out".into());
        assert_eq!(classify_error(&err), ErrorType::Timeout);
    }

    #[test]
    fn test_classify_dns_error() {
        let err = ApiError::Transport("dns error: failed to lookup address".into());
        assert_eq!(classify_error(&err), ErrorType::NetworkError);
    }

    #[test]
    fn test_classify_status_codes() {
        assert_eq!(classify_error(&ApiError::AuthExpired { message: None }), ErrorType::Unauthorized);
        assert_eq!(classify_error(&status(404)), ErrorType::NotFound);
        assert_eq!(classify_error(&status(503)), ErrorType::ServerError);
        assert_eq!(classify_error(&status(409)), ErrorType::Other);
    }

    #[test]
    fn test_format_prefers_server_message() {
        let err = ApiError::Status {
            status: 409,
            message: Some("Folder already exists".into()),
        };
        assert_eq!(
            format_error_message(&err),
            "Folder already exists (server returned HTTP 409)"
        );
        assert_eq!(format_error_message(&status(500)), "server returned HTTP 500");
    }

    #[test]
    fn test_user_message_first_failure_uses_fallback() {
        let err = AuthCallError::Api(status(500));
        assert_eq!(user_message(&err, CREATE_FOLDER_FAILED), CREATE_FOLDER_FAILED);
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = AuthCallError::Api(ApiError::Status {
            status: 400,
            message: Some("Name contains invalid characters".into()),
        });
        assert_eq!(user_message(&err, CREATE_FOLDER_FAILED), "Name contains invalid characters");

        let err = AuthCallError::RefreshFailed(ApiError::AuthExpired {
            message: Some("Refresh token revoked".into()),
        });
        assert_eq!(user_message(&err, CREATE_FOLDER_FAILED), "Refresh token revoked");
    }

    #[test]
    fn test_user_message_session_expired() {
        let expired = ApiError::AuthExpired { message: None };
        assert_eq!(
            user_message(&AuthCallError::RefreshFailed(expired.clone()), CREATE_FOLDER_FAILED),
            SESSION_EXPIRED
        );
        assert_eq!(
            user_message(&AuthCallError::RetryFailed(expired), CREATE_FOLDER_FAILED),
            SESSION_EXPIRED
        );
    }

    #[test]
    fn test_retry_failing_for_other_reasons_expires_session() {
        let err = AuthCallError::RetryFailed(status(503));
        assert_eq!(user_message(&err, CREATE_FOLDER_FAILED), SESSION_EXPIRED);

        let err = AuthCallError::RetryFailed(ApiError::Status {
            status: 503,
            message: Some("Storage unavailable".into()),
        });
        assert_eq!(user_message(&err, CREATE_FOLDER_FAILED), "Storage unavailable");
    }

    #[test]
    fn test_user_message_no_token() {
        assert_eq!(user_message(&AuthCallError::NoAccessToken, LOAD_FAILED), SESSION_EXPIRED);
    }
}
