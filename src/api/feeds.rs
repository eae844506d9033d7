//! Feed Endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{delete, get_list, post_json, put_json, Transport};
use crate::drafts::EditedFeed;
use crate::error::ApiResult;
use crate::models::Feed;

#[derive(Debug, Serialize)]
struct CreateFeedRequest<'a> {
    title: &'a str,
    url: &'a str,
    site_url: &'a str,
    description: &'a str,
    last_fetched_at: DateTime<Utc>,
}

/// Updates leave `last_fetched_at` to the backend poller
#[derive(Debug, Serialize)]
struct UpdateFeedRequest<'a> {
    title: &'a str,
    url: &'a str,
    site_url: &'a str,
    description: &'a str,
}

pub async fn list_feeds(transport: &dyn Transport) -> ApiResult<Vec<Feed>> {
    get_list(transport, "/feeds").await
}

pub async fn create_feed(transport: &dyn Transport, draft: &EditedFeed) -> ApiResult<Feed> {
    let body = CreateFeedRequest {
        title: &draft.title,
        url: &draft.url,
        site_url: &draft.site_url,
        description: &draft.description,
        last_fetched_at: draft.last_fetched_at,
    };
    post_json(transport, "/feeds", &body).await
}

pub async fn update_feed(transport: &dyn Transport, draft: &EditedFeed) -> ApiResult<Feed> {
    let body = UpdateFeedRequest {
        title: &draft.title,
        url: &draft.url,
        site_url: &draft.site_url,
        description: &draft.description,
    };
    put_json(transport, &format!("/feeds/{}", draft.id), &body).await
}

pub async fn delete_feed(transport: &dyn Transport, id: u32) -> ApiResult<()> {
    delete(transport, &format!("/feeds/{}", id)).await
}
