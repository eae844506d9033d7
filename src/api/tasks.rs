//! Task Endpoints

use serde::Serialize;

use super::{delete, get_list, post_json, put_json, Transport};
use crate::drafts::EditedTask;
use crate::error::ApiResult;
use crate::models::Task;

#[derive(Debug, Serialize)]
struct TaskRequest<'a> {
    title: &'a str,
}

impl<'a> From<&'a EditedTask> for TaskRequest<'a> {
    fn from(draft: &'a EditedTask) -> Self {
        Self { title: &draft.title }
    }
}

pub async fn list_tasks(transport: &dyn Transport) -> ApiResult<Vec<Task>> {
    get_list(transport, "/tasks").await
}

pub async fn create_task(transport: &dyn Transport, draft: &EditedTask) -> ApiResult<Task> {
    post_json(transport, "/tasks", &TaskRequest::from(draft)).await
}

pub async fn update_task(transport: &dyn Transport, draft: &EditedTask) -> ApiResult<Task> {
    put_json(transport, &format!("/tasks/{}", draft.id), &TaskRequest::from(draft)).await
}

pub async fn delete_task(transport: &dyn Transport, id: u32) -> ApiResult<()> {
    delete(transport, &format!("/tasks/{}", id)).await
}
