//! Aggregated Article Endpoints (read-only)

use super::{get_list, Transport};
use crate::error::ApiResult;
use crate::models::{FeedArticle, HatenaArticle, QiitaArticle};

pub async fn list_qiita_articles(transport: &dyn Transport) -> ApiResult<Vec<QiitaArticle>> {
    get_list(transport, "/qiita/articles").await
}

pub async fn list_hatena_articles(transport: &dyn Transport) -> ApiResult<Vec<HatenaArticle>> {
    get_list(transport, "/hatena").await
}

/// Articles of every feed, or of one feed when `feed_id` is set
pub async fn list_feed_articles(transport: &dyn Transport, feed_id: Option<u32>) -> ApiResult<Vec<FeedArticle>> {
    match feed_id {
        Some(id) => get_list(transport, &format!("/feed-articles/{}", id)).await,
        None => get_list(transport, "/feed-articles").await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_feed_articles_path() {
        let transport = MockTransport::new().respond(200, json!([])).respond(200, json!(null));
        assert!(list_feed_articles(&transport, None).await.unwrap().is_empty());
        // Go encodes an empty slice as null
        assert!(list_feed_articles(&transport, Some(4)).await.unwrap().is_empty());

        let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/feed-articles", "/feed-articles/4"]);
    }
}
