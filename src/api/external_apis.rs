//! External API Endpoints

use serde::Serialize;

use super::{delete, get_list, post_json, put_json, Transport};
use crate::drafts::EditedExternalApi;
use crate::error::ApiResult;
use crate::models::ExternalApi;

#[derive(Debug, Serialize)]
struct ExternalApiRequest<'a> {
    name: &'a str,
    base_url: &'a str,
    description: &'a str,
}

impl<'a> From<&'a EditedExternalApi> for ExternalApiRequest<'a> {
    fn from(draft: &'a EditedExternalApi) -> Self {
        Self {
            name: &draft.name,
            base_url: &draft.base_url,
            description: &draft.description,
        }
    }
}

pub async fn list_external_apis(transport: &dyn Transport) -> ApiResult<Vec<ExternalApi>> {
    get_list(transport, "/external-apis").await
}

pub async fn create_external_api(transport: &dyn Transport, draft: &EditedExternalApi) -> ApiResult<ExternalApi> {
    post_json(transport, "/external-apis", &ExternalApiRequest::from(draft)).await
}

pub async fn update_external_api(transport: &dyn Transport, draft: &EditedExternalApi) -> ApiResult<ExternalApi> {
    put_json(transport, &format!("/external-apis/{}", draft.id), &ExternalApiRequest::from(draft)).await
}

pub async fn delete_external_api(transport: &dyn Transport, id: u32) -> ApiResult<()> {
    delete(transport, &format!("/external-apis/{}", id)).await
}
