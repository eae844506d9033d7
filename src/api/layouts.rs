//! Layout Endpoints

use serde::Serialize;

use super::{delete, get_json, get_list, post_json, put_json, Transport};
use crate::drafts::EditedLayout;
use crate::error::ApiResult;
use crate::models::Layout;

#[derive(Debug, Serialize)]
struct LayoutRequest<'a> {
    title: &'a str,
}

pub async fn list_layouts(transport: &dyn Transport) -> ApiResult<Vec<Layout>> {
    get_list(transport, "/layouts").await
}

/// Single layout with its assigned components
pub async fn get_layout(transport: &dyn Transport, id: u32) -> ApiResult<Layout> {
    get_json(transport, &format!("/layouts/{}", id)).await
}

pub async fn create_layout(transport: &dyn Transport, draft: &EditedLayout) -> ApiResult<Layout> {
    post_json(transport, "/layouts", &LayoutRequest { title: &draft.title }).await
}

pub async fn update_layout(transport: &dyn Transport, draft: &EditedLayout) -> ApiResult<Layout> {
    put_json(transport, &format!("/layouts/{}", draft.id), &LayoutRequest { title: &draft.title }).await
}

pub async fn delete_layout(transport: &dyn Transport, id: u32) -> ApiResult<()> {
    delete(transport, &format!("/layouts/{}", id)).await
}
