//! API Errors
//!
//! Every failure the data layer can report, and the message a user sees.

use serde_json::Value;

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Data-layer errors
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-success status
    Status { status: u16, body: String },
    /// The request never produced a response
    Network(String),
    /// The response body did not match the expected shape
    Decode(String),
    /// Local storage was unavailable or rejected the write
    Storage(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Status { status, .. } => write!(f, "HTTP {}: {}", status, self.message()),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            ApiError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Text to surface: the body's `message`, else its `error`, else the raw body
    pub fn message(&self) -> String {
        match self {
            ApiError::Status { body, .. } => message_from_body(body),
            ApiError::Network(msg) | ApiError::Decode(msg) | ApiError::Storage(msg) => msg.clone(),
        }
    }

    /// Suggested reaction for the UI
    pub fn action(&self) -> ErrorAction {
        let message = self.message();
        match message.as_str() {
            "invalid csrf token" => ErrorAction::RefreshCsrf,
            "invalid or expired jwt" | "missing or malformed jwt" => ErrorAction::ReturnToLogin,
            _ => ErrorAction::Show(message),
        }
    }
}

/// How the UI reacts to an error
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorAction {
    /// Fetch a fresh CSRF token
    RefreshCsrf,
    /// Session is gone: drop cached data and show the auth screen
    ReturnToLogin,
    /// Show the text in the error banner
    Show(String),
}

fn message_from_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
        Ok(Value::String(text)) => text,
        _ => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(body: &str) -> ApiError {
        ApiError::Status { status: 400, body: body.to_string() }
    }

    #[test]
    fn test_message_field_wins() {
        let err = status(r#"{"message":"title is required","error":"bad request"}"#);
        assert_eq!(err.message(), "title is required");
    }

    #[test]
    fn test_error_field_is_second_choice() {
        assert_eq!(status(r#"{"error":"quota exceeded"}"#).message(), "quota exceeded");
    }

    #[test]
    fn test_raw_body_without_message() {
        assert_eq!(status(r#"{"code":7}"#).message(), r#"{"code":7}"#);
        assert_eq!(status("record not found\n").message(), "record not found");
        assert_eq!(status(r#""plain json string""#).message(), "plain json string");
    }

    #[test]
    fn test_non_string_message_falls_back_to_body() {
        let body = r#"{"message":42}"#;
        assert_eq!(status(body).message(), body);
    }

    #[test]
    fn test_actions() {
        assert_eq!(status(r#"{"message":"invalid csrf token"}"#).action(), ErrorAction::RefreshCsrf);
        assert_eq!(status(r#"{"message":"missing or malformed jwt"}"#).action(), ErrorAction::ReturnToLogin);
        assert_eq!(
            ApiError::Network("offline".to_string()).action(),
            ErrorAction::Show("offline".to_string())
        );
    }

    #[test]
    fn test_display_includes_status() {
        assert_eq!(status(r#"{"message":"nope"}"#).to_string(), "HTTP 400: nope");
    }
}
