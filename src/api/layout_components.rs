//! Layout Component Endpoints
//!
//! CRUD on the component library plus placement on a layout.

use serde::{Deserialize, Serialize};

use super::{delete, get_list, post_json, put_json, send_json, Method, Transport};
use crate::drafts::EditedLayoutComponent;
use crate::error::ApiResult;
use crate::models::LayoutComponent;

/// Grid geometry of a placed component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Position {
    pub fn of(component: &LayoutComponent) -> Self {
        Self {
            x: component.x,
            y: component.y,
            width: component.width,
            height: component.height,
        }
    }
}

#[derive(Debug, Serialize)]
struct CreateComponentRequest<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    component_type: &'a str,
    content: &'a str,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

#[derive(Debug, Serialize)]
struct UpdateComponentRequest<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    component_type: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct AssignRequest {
    layout_id: u32,
    position: Position,
}

pub async fn list_layout_components(transport: &dyn Transport) -> ApiResult<Vec<LayoutComponent>> {
    get_list(transport, "/layout-components").await
}

pub async fn create_layout_component(
    transport: &dyn Transport,
    draft: &EditedLayoutComponent,
) -> ApiResult<LayoutComponent> {
    let body = CreateComponentRequest {
        name: &draft.name,
        component_type: &draft.component_type,
        content: &draft.content,
        x: draft.x,
        y: draft.y,
        width: draft.width,
        height: draft.height,
    };
    post_json(transport, "/layout-components", &body).await
}

pub async fn update_layout_component(
    transport: &dyn Transport,
    draft: &EditedLayoutComponent,
) -> ApiResult<LayoutComponent> {
    let body = UpdateComponentRequest {
        name: &draft.name,
        component_type: &draft.component_type,
        content: &draft.content,
    };
    put_json(transport, &format!("/layout-components/{}", draft.id), &body).await
}

pub async fn delete_layout_component(transport: &dyn Transport, id: u32) -> ApiResult<()> {
    delete(transport, &format!("/layout-components/{}", id)).await
}

/// Place a component on a layout
pub async fn assign_to_layout(
    transport: &dyn Transport,
    component_id: u32,
    layout_id: u32,
    position: Position,
) -> ApiResult<()> {
    let path = format!("/layout-components/{}/assign/{}", component_id, layout_id);
    send_json(transport, Method::Post, &path, &AssignRequest { layout_id, position }).await
}

/// Take a component off its layout
pub async fn remove_from_layout(transport: &dyn Transport, component_id: u32) -> ApiResult<()> {
    delete(transport, &format!("/layout-components/{}/assign", component_id)).await
}

/// The body is the bare position object
pub async fn update_position(transport: &dyn Transport, component_id: u32, position: Position) -> ApiResult<()> {
    let path = format!("/layout-components/{}/position", component_id);
    send_json(transport, Method::Put, &path, &position).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_assign_body() {
        let transport = MockTransport::new().respond(200, json!({"message": "ok"}));
        let position = Position { x: 0, y: 4, width: 2, height: 2 };
        assign_to_layout(&transport, 5, 3, position).await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].path, "/layout-components/5/assign/3");
        assert_eq!(
            sent[0].body,
            Some(json!({"layout_id": 3, "position": {"x": 0, "y": 4, "width": 2, "height": 2}}))
        );
    }

    #[tokio::test]
    async fn test_position_body_is_flat() {
        let transport = MockTransport::new();
        let position = Position { x: 6, y: 0, width: 6, height: 3 };
        update_position(&transport, 5, position).await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].path, "/layout-components/5/position");
        assert_eq!(sent[0].body, Some(json!({"x": 6, "y": 0, "width": 6, "height": 3})));
    }

    #[tokio::test]
    async fn test_create_sends_type_field() {
        let created = json!({"id": 9, "name": "Top", "type": "header", "content": ""});
        let transport = MockTransport::new().respond(201, created);
        let draft = EditedLayoutComponent {
            name: "Top".to_string(),
            component_type: "header".to_string(),
            ..Default::default()
        };
        let component = create_layout_component(&transport, &draft).await.unwrap();
        assert_eq!(component.id, 9);

        let body = transport.requests()[0].body.clone().unwrap();
        assert_eq!(body["type"], "header");
        assert_eq!(body["width"], 2);
    }
}
