//! HTTP Transport
//!
//! reqwest-backed transport. On wasm32 reqwest drives the browser fetch API,
//! so cookies are included per request.

use std::cell::RefCell;

use async_trait::async_trait;

use super::{ApiRequest, ApiResponse, Method, Transport, CSRF_HEADER};
use crate::error::{ApiError, ApiResult};

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    csrf_token: RefCell<Option<String>>,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            csrf_token: RefCell::new(None),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = self.url(&request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }

        let token = self.csrf_token.borrow().clone();
        if let Some(token) = token {
            builder = builder.header(CSRF_HEADER, token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        log::debug!("[HTTP] {:?} {}", request.method, request.path);
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            log::warn!("[HTTP] {:?} {} -> {}", request.method, request.path, status);
        }
        Ok(ApiResponse { status, body })
    }

    fn set_csrf_token(&self, token: String) {
        *self.csrf_token.borrow_mut() = Some(token);
    }
}
