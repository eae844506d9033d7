//! Queries and Mutations
//!
//! Run an API call and mirror its result into a cached list. A failed call
//! leaves the cache untouched and hands the error back to the caller.

use std::future::Future;

use crate::api::{self, Position, Transport};
use crate::cache::{cache_insert, cache_remove, cache_replace, CacheSlot};
use crate::error::{ApiError, ApiResult};
use crate::models::Resource;

/// Fetch a list and store it
pub async fn load<T, S>(slot: &S, request: impl Future<Output = ApiResult<Vec<T>>>) -> ApiResult<()>
where
    S: CacheSlot<T>,
{
    let items = request.await?;
    slot.fill(items);
    Ok(())
}

/// POST, then append the created item
pub async fn create<T, S>(slot: &S, request: impl Future<Output = ApiResult<T>>) -> ApiResult<T>
where
    T: Resource,
    S: CacheSlot<T>,
{
    let created = request.await?;
    let item = created.clone();
    slot.modify(|list| cache_insert(list, item));
    Ok(created)
}

/// PUT, then swap in the server's copy
pub async fn update<T, S>(slot: &S, request: impl Future<Output = ApiResult<T>>) -> ApiResult<T>
where
    T: Resource,
    S: CacheSlot<T>,
{
    let updated = request.await?;
    let item = updated.clone();
    slot.modify(|list| cache_replace(list, item));
    Ok(updated)
}

/// DELETE, then drop the id
pub async fn remove<T, S>(slot: &S, id: T::Id, request: impl Future<Output = ApiResult<()>>) -> ApiResult<()>
where
    T: Resource,
    S: CacheSlot<T>,
{
    request.await?;
    slot.modify(|list| cache_remove(list, id));
    Ok(())
}

/// One position PUT per moved component. Failures are logged and collected;
/// the remaining updates still go out.
pub async fn update_positions(transport: &dyn Transport, changes: &[(u32, Position)]) -> Vec<(u32, ApiError)> {
    let mut failures = Vec::new();
    for (component_id, position) in changes {
        if let Err(err) = api::update_position(transport, *component_id, *position).await {
            log::error!("[CANVAS] Position update for component {} failed: {}", component_id, err);
            failures.push((*component_id, err));
        }
    }
    failures
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::api::mock::MockTransport;
    use crate::api::Method;
    use crate::drafts::EditedFeed;
    use crate::models::{Article, Feed, Task};
    use serde_json::json;

    fn feed(id: u32, title: &str) -> Feed {
        Feed {
            id,
            title: title.to_string(),
            url: format!("https://example.com/{}.xml", id),
            site_url: String::new(),
            description: String::new(),
            last_fetched_at: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn article(id: u32) -> Article {
        Article {
            id,
            title: format!("Article {}", id),
            content: String::new(),
            published: false,
            tags: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_feed_create_posts_once_and_appends_once() {
        let created = json!({
            "id": 3,
            "title": "Rust Blog",
            "url": "https://blog.rust-lang.org/feed.xml",
            "site_url": "https://blog.rust-lang.org",
            "description": "",
            "last_fetched_at": "2024-05-01T00:00:00Z"
        });
        let transport = MockTransport::new().respond(201, created);
        let slot = RefCell::new(Some(vec![feed(1, "a"), feed(2, "b")]));
        let draft = EditedFeed {
            title: "Rust Blog".to_string(),
            url: "https://blog.rust-lang.org/feed.xml".to_string(),
            ..Default::default()
        };

        create(&slot, api::create_feed(&transport, &draft)).await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].path, "/feeds");
        let feeds = slot.borrow().clone().unwrap();
        assert_eq!(feeds.len(), 3);
        assert_eq!(feeds[2].id, 3);
    }

    #[tokio::test]
    async fn test_article_delete_removes_matching_id() {
        let transport = MockTransport::new().respond_raw(204, "");
        let slot = RefCell::new(Some(vec![article(1), article(2), article(3)]));

        remove::<Article, _>(&slot, 2, api::delete_article(&transport, 2)).await.unwrap();

        let ids: Vec<u32> = slot.borrow().clone().unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(transport.requests()[0].path, "/articles/2");
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_cache() {
        let transport = MockTransport::new().respond(500, json!({"error": "db down"}));
        let slot = RefCell::new(Some(vec![article(1)]));

        let err = remove::<Article, _>(&slot, 1, api::delete_article(&transport, 1)).await.unwrap_err();

        assert_eq!(err.message(), "db down");
        assert_eq!(slot.borrow().as_ref().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_network_failure_leaves_unloaded_cache() {
        let transport = MockTransport::new().fail(ApiError::Network("offline".to_string()));
        let slot: RefCell<Option<Vec<Task>>> = RefCell::new(None);

        let err = load(&slot, api::list_tasks(&transport)).await.unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
        assert!(slot.borrow().is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_by_id() {
        let updated = json!({"id": 2, "title": "Renamed", "url": "https://example.com/2.xml", "last_fetched_at": null});
        let transport = MockTransport::new().respond(200, updated);
        let slot = RefCell::new(Some(vec![feed(1, "a"), feed(2, "b")]));
        let draft = EditedFeed::from(&feed(2, "Renamed"));

        update(&slot, api::update_feed(&transport, &draft)).await.unwrap();

        let feeds = slot.borrow().clone().unwrap();
        assert_eq!(feeds[1].title, "Renamed");
        assert_eq!(transport.requests()[0].path, "/feeds/2");
    }

    #[tokio::test]
    async fn test_load_fills_slot() {
        let transport = MockTransport::new().respond(200, json!([{"id": 1, "title": "Write post"}]));
        let slot: RefCell<Option<Vec<Task>>> = RefCell::new(None);
        load(&slot, api::list_tasks(&transport)).await.unwrap();
        assert_eq!(slot.borrow().as_ref().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_position_updates_continue_after_failure() {
        let transport = MockTransport::new()
            .respond(500, json!({"message": "component not found"}))
            .respond_raw(200, "");
        let changes = [
            (4, Position { x: 0, y: 0, width: 2, height: 2 }),
            (5, Position { x: 2, y: 0, width: 4, height: 2 }),
        ];

        let failures = update_positions(&transport, &changes).await;

        assert_eq!(transport.requests().len(), 2);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, 4);
    }
}
