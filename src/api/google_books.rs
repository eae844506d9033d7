//! Google Books Endpoints

use serde::Serialize;

use super::{post_empty, post_json, Transport};
use crate::error::ApiResult;
use crate::models::{Book, GoogleBookSearchResponse};

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

/// Search through the backend proxy. A blank query sends nothing.
pub async fn search_google_books(
    transport: &dyn Transport,
    query: &str,
) -> ApiResult<Option<GoogleBookSearchResponse>> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(None);
    }
    post_json(transport, "/google-books/search", &SearchRequest { query })
        .await
        .map(Some)
}

/// Copy a Google volume into the book library
pub async fn import_google_book(transport: &dyn Transport, volume_id: &str) -> ApiResult<Book> {
    let path = format!("/google-books/{}/import", volume_id);
    post_empty(transport, &path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_blank_query_sends_nothing() {
        let transport = MockTransport::new();
        assert_eq!(search_google_books(&transport, "").await.unwrap(), None);
        assert_eq!(search_google_books(&transport, "   ").await.unwrap(), None);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_search_posts_trimmed_query() {
        let response = json!({
            "items": [{"id": "zyTCAlFPjgYC", "title": "The Rust Programming Language", "authors": ["Steve Klabnik"]}],
            "total_items": 1
        });
        let transport = MockTransport::new().respond(200, response);
        let result = search_google_books(&transport, " rust ").await.unwrap().unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].authors, vec!["Steve Klabnik"]);

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].body, Some(json!({"query": "rust"})));
    }
}
