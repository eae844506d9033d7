//! Form Drafts
//!
//! Always-defined scratch copies of the resource being created or edited.
//! `id == 0` means the draft is a new resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Article, Credential, ExternalApi, Feed, Layout, LayoutComponent, Task};

/// Layout component types offered by the manager form
pub const COMPONENT_TYPES: &[(&str, &str)] = &[
    ("header", "Header"),
    ("footer", "Footer"),
    ("sidebar", "Sidebar"),
    ("main", "Main content"),
    ("custom", "Custom"),
];

/// Shared draft behaviour
pub trait Draft: Clone + Default {
    /// Backing resource id, 0 for a new resource
    fn draft_id(&self) -> u32;

    /// Whether the form may be submitted
    fn is_valid(&self) -> bool;

    fn is_new(&self) -> bool {
        self.draft_id() == 0
    }
}

// ========================
// Drafts
// ========================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditedTask {
    pub id: u32,
    pub title: String,
}

impl Draft for EditedTask {
    fn draft_id(&self) -> u32 {
        self.id
    }

    fn is_valid(&self) -> bool {
        !self.title.is_empty()
    }
}

impl From<&Task> for EditedTask {
    fn from(task: &Task) -> Self {
        Self { id: task.id, title: task.title.clone() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditedFeed {
    pub id: u32,
    pub title: String,
    pub url: String,
    pub site_url: String,
    pub description: String,
    pub last_fetched_at: DateTime<Utc>,
}

impl Default for EditedFeed {
    fn default() -> Self {
        Self {
            id: 0,
            title: String::new(),
            url: String::new(),
            site_url: String::new(),
            description: String::new(),
            last_fetched_at: Utc::now(),
        }
    }
}

impl Draft for EditedFeed {
    fn draft_id(&self) -> u32 {
        self.id
    }

    fn is_valid(&self) -> bool {
        !self.title.is_empty()
    }
}

impl From<&Feed> for EditedFeed {
    fn from(feed: &Feed) -> Self {
        Self {
            id: feed.id,
            title: feed.title.clone(),
            url: feed.url.clone(),
            site_url: feed.site_url.clone(),
            description: feed.description.clone(),
            last_fetched_at: feed.last_fetched_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditedArticle {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub tags: String,
}

impl Draft for EditedArticle {
    fn draft_id(&self) -> u32 {
        self.id
    }

    fn is_valid(&self) -> bool {
        !self.title.is_empty()
    }
}

impl From<&Article> for EditedArticle {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            content: article.content.clone(),
            published: article.published,
            tags: article.tags.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditedExternalApi {
    pub id: u32,
    pub name: String,
    pub base_url: String,
    pub description: String,
}

impl Draft for EditedExternalApi {
    fn draft_id(&self) -> u32 {
        self.id
    }

    /// Only a completely blank form is rejected
    fn is_valid(&self) -> bool {
        !(self.name.is_empty() && self.base_url.is_empty() && self.description.is_empty())
    }
}

impl From<&ExternalApi> for EditedExternalApi {
    fn from(api: &ExternalApi) -> Self {
        Self {
            id: api.id,
            name: api.name.clone(),
            base_url: api.base_url.clone(),
            description: api.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditedLayout {
    pub id: u32,
    pub title: String,
}

impl Draft for EditedLayout {
    fn draft_id(&self) -> u32 {
        self.id
    }

    fn is_valid(&self) -> bool {
        !self.title.is_empty()
    }
}

impl From<&Layout> for EditedLayout {
    fn from(layout: &Layout) -> Self {
        Self { id: layout.id, title: layout.title.clone() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditedLayoutComponent {
    pub id: u32,
    pub name: String,
    pub component_type: String,
    pub content: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub layout_id: Option<u32>,
}

impl Default for EditedLayoutComponent {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            component_type: String::new(),
            content: String::new(),
            x: 0,
            y: 0,
            width: 2,
            height: 2,
            layout_id: None,
        }
    }
}

impl Draft for EditedLayoutComponent {
    fn draft_id(&self) -> u32 {
        self.id
    }

    fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.component_type.is_empty()
    }
}

impl From<&LayoutComponent> for EditedLayoutComponent {
    fn from(component: &LayoutComponent) -> Self {
        Self {
            id: component.id,
            name: component.name.clone(),
            component_type: component.component_type.clone(),
            content: component.content.clone(),
            x: component.x,
            y: component.y,
            width: component.width,
            height: component.height,
            layout_id: component.layout_id,
        }
    }
}

/// Login/signup form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditedCredential {
    pub email: String,
    pub password: String,
}

impl EditedCredential {
    pub fn is_valid(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    pub fn to_credential(&self) -> Credential {
        Credential {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_task_title_is_rejected() {
        let draft = EditedTask::default();
        assert!(draft.is_new());
        assert!(!draft.is_valid());
        assert!(EditedTask { id: 0, title: "Write post".to_string() }.is_valid());
    }

    #[test]
    fn test_external_api_needs_any_field() {
        assert!(!EditedExternalApi::default().is_valid());
        let draft = EditedExternalApi {
            description: "weather".to_string(),
            ..Default::default()
        };
        assert!(draft.is_valid());
    }

    #[test]
    fn test_layout_component_needs_name_and_type() {
        let mut draft = EditedLayoutComponent {
            name: "Top bar".to_string(),
            ..Default::default()
        };
        assert!(!draft.is_valid());
        draft.component_type = "header".to_string();
        assert!(draft.is_valid());
        assert_eq!((draft.width, draft.height), (2, 2));
    }

    #[test]
    fn test_credential_needs_both_fields() {
        let mut cred = EditedCredential {
            email: "me@example.com".to_string(),
            ..Default::default()
        };
        assert!(!cred.is_valid());
        cred.password = "secret".to_string();
        assert!(cred.is_valid());
    }

    #[test]
    fn test_edit_copies_row_into_draft() {
        let article = Article {
            id: 7,
            title: "Hello".to_string(),
            content: "body".to_string(),
            published: true,
            tags: "rust".to_string(),
            created_at: None,
            updated_at: None,
        };
        let draft = EditedArticle::from(&article);
        assert!(!draft.is_new());
        assert_eq!(draft.id, 7);
        assert!(draft.published);
    }
}
