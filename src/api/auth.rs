//! Auth Endpoints

use super::{execute, get_json, send_json, ApiRequest, Method, Transport};
use crate::error::{ApiError, ApiResult, ErrorAction};
use crate::models::{Credential, CsrfToken};

/// Fetch a CSRF token and attach it to every later request
pub async fn refresh_csrf_token(transport: &dyn Transport, csrf_path: &str) -> ApiResult<()> {
    let token: CsrfToken = get_json(transport, csrf_path).await?;
    transport.set_csrf_token(token.csrf_token);
    Ok(())
}

/// Sets the session cookie on success
pub async fn login(transport: &dyn Transport, credential: &Credential) -> ApiResult<()> {
    send_json(transport, Method::Post, "/login", credential).await
}

pub async fn signup(transport: &dyn Transport, credential: &Credential) -> ApiResult<()> {
    send_json(transport, Method::Post, "/signup", credential).await
}

/// Signup immediately followed by a login with the same credentials
pub async fn signup_and_login(transport: &dyn Transport, credential: &Credential) -> ApiResult<()> {
    signup(transport, credential).await?;
    login(transport, credential).await
}

/// Authenticated endpoint used to test a session cookie left from an earlier visit
pub const SESSION_CHECK_PATH: &str = "/tasks";

/// Whether the backend still accepts the session cookie
pub async fn session_active(transport: &dyn Transport) -> ApiResult<bool> {
    match execute(transport, ApiRequest::new(Method::Get, SESSION_CHECK_PATH)).await {
        Ok(()) => Ok(true),
        Err(ApiError::Status { status: 401, .. }) => Ok(false),
        Err(err) if err.action() == ErrorAction::ReturnToLogin => Ok(false),
        Err(err) => Err(err),
    }
}

pub async fn logout(transport: &dyn Transport) -> ApiResult<()> {
    execute(transport, ApiRequest::new(Method::Post, "/logout")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use serde_json::json;

    fn credential() -> Credential {
        Credential {
            email: "me@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_csrf_token_is_stored() {
        let transport = MockTransport::new().respond(200, json!({"csrf_token": "abc123"}));
        refresh_csrf_token(&transport, "/csrf-token").await.unwrap();
        assert_eq!(transport.csrf_token.borrow().as_deref(), Some("abc123"));
        assert_eq!(transport.requests()[0].path, "/csrf-token");
    }

    #[tokio::test]
    async fn test_signup_then_login() {
        let transport = MockTransport::new()
            .respond(201, json!({"id": 1, "email": "me@example.com"}))
            .respond_raw(200, "");
        signup_and_login(&transport, &credential()).await.unwrap();

        let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/signup", "/login"]);
    }

    #[tokio::test]
    async fn test_session_cookie_still_valid() {
        let transport = MockTransport::new().respond(200, json!([]));
        assert!(session_active(&transport).await.unwrap());
        assert_eq!(transport.requests()[0].path, SESSION_CHECK_PATH);
    }

    #[tokio::test]
    async fn test_expired_session_is_signed_out() {
        let transport = MockTransport::new()
            .respond(401, json!({"message": "invalid or expired jwt"}))
            .respond(400, json!({"message": "missing or malformed jwt"}));
        assert!(!session_active(&transport).await.unwrap());
        assert!(!session_active(&transport).await.unwrap());
    }

    #[tokio::test]
    async fn test_session_check_surfaces_server_errors() {
        let transport = MockTransport::new().respond(500, json!({"message": "db down"}));
        let err = session_active(&transport).await.unwrap_err();
        assert_eq!(err.message(), "db down");
    }

    #[tokio::test]
    async fn test_failed_signup_skips_login() {
        let transport = MockTransport::new().respond(400, json!({"message": "email already exists"}));
        let err = signup_and_login(&transport, &credential()).await.unwrap_err();
        assert_eq!(err.message(), "email already exists");
        assert_eq!(transport.requests().len(), 1);
    }
}
