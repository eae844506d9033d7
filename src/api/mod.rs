//! REST API Bindings
//!
//! Frontend bindings to backend endpoints, organized by domain.
//! Every call goes through a [`Transport`] so the data layer can run
//! against an in-memory backend in tests.

mod aggregators;
mod articles;
mod auth;
mod books;
mod external_apis;
mod feeds;
mod google_books;
mod http;
mod layout_components;
mod layouts;
mod tasks;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

// Re-export all public items
pub use aggregators::*;
pub use articles::*;
pub use auth::*;
pub use books::*;
pub use external_apis::*;
pub use feeds::*;
pub use google_books::*;
pub use http::HttpTransport;
pub use layout_components::*;
pub use layouts::*;
pub use tasks::*;

/// Header carrying the CSRF token on every request
pub const CSRF_HEADER: &str = "X-CSRF-Token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One outgoing call, path relative to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: None }
    }

    pub fn with_body<B: Serialize>(mut self, body: &B) -> ApiResult<Self> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Raw response: status plus undecoded body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Success body, or the status error carrying the server's message
    fn into_success(self) -> ApiResult<String> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(ApiError::Status { status: self.status, body: self.body })
        }
    }
}

/// Sends requests to the backend with cookies and the CSRF header attached
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;

    /// Remember the token sent as `X-CSRF-Token` from now on
    fn set_csrf_token(&self, token: String);
}

// ========================
// Request Helpers
// ========================

fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn fetch<T: DeserializeOwned>(transport: &dyn Transport, request: ApiRequest) -> ApiResult<T> {
    let body = transport.send(request).await?.into_success()?;
    decode(&body)
}

async fn execute(transport: &dyn Transport, request: ApiRequest) -> ApiResult<()> {
    transport.send(request).await?.into_success()?;
    Ok(())
}

pub(crate) async fn get_json<T: DeserializeOwned>(transport: &dyn Transport, path: &str) -> ApiResult<T> {
    fetch(transport, ApiRequest::new(Method::Get, path)).await
}

/// List endpoint; a `null` body is an empty list
pub(crate) async fn get_list<T: DeserializeOwned>(transport: &dyn Transport, path: &str) -> ApiResult<Vec<T>> {
    let list: Option<Vec<T>> = get_json(transport, path).await?;
    Ok(list.unwrap_or_default())
}

/// POST without a request body
pub(crate) async fn post_empty<T: DeserializeOwned>(transport: &dyn Transport, path: &str) -> ApiResult<T> {
    fetch(transport, ApiRequest::new(Method::Post, path)).await
}

pub(crate) async fn post_json<B, T>(transport: &dyn Transport, path: &str, body: &B) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    fetch(transport, ApiRequest::new(Method::Post, path).with_body(&body)?).await
}

pub(crate) async fn put_json<B, T>(transport: &dyn Transport, path: &str, body: &B) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    fetch(transport, ApiRequest::new(Method::Put, path).with_body(&body)?).await
}

/// POST/PUT whose response body is ignored
pub(crate) async fn send_json<B>(transport: &dyn Transport, method: Method, path: &str, body: &B) -> ApiResult<()>
where
    B: Serialize + ?Sized,
{
    execute(transport, ApiRequest::new(method, path).with_body(&body)?).await
}

pub(crate) async fn delete(transport: &dyn Transport, path: &str) -> ApiResult<()> {
    execute(transport, ApiRequest::new(Method::Delete, path)).await
}

// ========================
// Test Transport
// ========================

#[cfg(test)]
pub(crate) mod mock {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Replays queued responses and records every request
    #[derive(Default)]
    pub struct MockTransport {
        responses: RefCell<VecDeque<ApiResult<ApiResponse>>>,
        requests: RefCell<Vec<ApiRequest>>,
        pub csrf_token: RefCell<Option<String>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, status: u16, body: Value) -> Self {
            self.responses.borrow_mut().push_back(Ok(ApiResponse { status, body: body.to_string() }));
            self
        }

        pub fn respond_raw(self, status: u16, body: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(ApiResponse { status, body: body.to_string() }));
            self
        }

        pub fn fail(self, err: ApiError) -> Self {
            self.responses.borrow_mut().push_back(Err(err));
            self
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl Transport for MockTransport {
        async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(ApiResponse { status: 204, body: String::new() }))
        }

        fn set_csrf_token(&self, token: String) {
            *self.csrf_token.borrow_mut() = Some(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;
    use crate::models::Task;
    use serde_json::json;

    #[tokio::test]
    async fn test_error_status_keeps_body() {
        let transport = MockTransport::new().respond(400, json!({"message": "title is required"}));
        let err = get_json::<Vec<Task>>(&transport, "/tasks").await.unwrap_err();
        assert_eq!(err.message(), "title is required");
    }

    #[tokio::test]
    async fn test_bad_shape_is_decode_error() {
        let transport = MockTransport::new().respond_raw(200, "<html>");
        let err = get_json::<Vec<Task>>(&transport, "/tasks").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_delete_ignores_empty_body() {
        let transport = MockTransport::new().respond_raw(204, "");
        delete(&transport, "/tasks/3").await.unwrap();
        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Delete);
        assert_eq!(sent[0].path, "/tasks/3");
        assert!(sent[0].body.is_none());
    }
}
