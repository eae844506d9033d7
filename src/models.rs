//! Frontend Models
//!
//! Data structures matching backend resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Go encodes empty slices as `null`
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Anything cached in a list keyed by id
pub trait Resource: Clone + PartialEq {
    type Id: Copy + Eq + std::fmt::Debug;

    fn id(&self) -> Self::Id;
}

macro_rules! numeric_resource {
    ($($ty:ty),* $(,)?) => {
        $(impl Resource for $ty {
            type Id = u32;

            fn id(&self) -> u32 {
                self.id
            }
        })*
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub site_url: String,
    #[serde(default)]
    pub description: String,
    /// Null until the backend has polled the feed once
    #[serde(default)]
    pub last_fetched_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub published: bool,
    /// Comma separated
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalApi {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A named collection of positioned components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub id: u32,
    pub title: String,
    /// Only filled by `GET /layouts/{id}`
    #[serde(default, deserialize_with = "null_as_default")]
    pub components: Vec<LayoutComponent>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Reusable content block placeable on a layout grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutComponent {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub x: u32,
    #[serde(default)]
    pub y: u32,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub layout_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub page_count: u32,
}

numeric_resource!(Task, Feed, Article, ExternalApi, Layout, LayoutComponent, Book, FeedArticle);

// ========================
// Aggregated (read-only)
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QiitaTag {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QiitaUser {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QiitaArticle {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub likes_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<QiitaTag>,
    #[serde(default)]
    pub created_at: String,
    pub user: QiitaUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HatenaArticle {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedArticle {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub feed_id: u32,
    #[serde(default)]
    pub feed_title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub likes_count: Option<u32>,
}

impl FeedArticle {
    /// Summary if present, otherwise the first 150 characters of the content
    pub fn excerpt(&self) -> String {
        match self.summary.as_deref().filter(|s| !s.is_empty()) {
            Some(summary) => summary.to_string(),
            None => self.content.chars().take(150).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleBookVolume {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GoogleBookSearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<GoogleBookVolume>,
    #[serde(default, alias = "totalItems")]
    pub total_items: u32,
}

// ========================
// Auth
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsrfToken {
    pub csrf_token: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_component_type_field() {
        let json = r#"{"id":5,"name":"Header","type":"header","content":"<h1>Blog</h1>","x":0,"y":0,"width":12,"height":2,"layout_id":3}"#;
        let component: LayoutComponent = serde_json::from_str(json).unwrap();
        assert_eq!(component.component_type, "header");
        assert_eq!(component.layout_id, Some(3));
        assert_eq!(component.id(), 5);
    }

    #[test]
    fn test_null_lists_become_empty() {
        let json = r#"{"id":"q1","title":"t","url":"u","tags":null,"user":{"id":"me"}}"#;
        let article: QiitaArticle = serde_json::from_str(json).unwrap();
        assert!(article.tags.is_empty());

        let layout: Layout = serde_json::from_str(r#"{"id":1,"title":"Main","components":null}"#).unwrap();
        assert!(layout.components.is_empty());
    }

    #[test]
    fn test_layout_without_components() {
        let layout: Layout = serde_json::from_str(r#"{"id":1,"title":"Main"}"#).unwrap();
        assert!(layout.components.is_empty());
        assert!(layout.created_at.is_none());
    }

    #[test]
    fn test_feed_parses_go_timestamps() {
        let json = r#"{"id":2,"title":"Rust Blog","url":"https://blog.rust-lang.org/feed.xml","site_url":"","description":"","last_fetched_at":"2024-05-01T09:30:00.123456+09:00"}"#;
        let feed: Feed = serde_json::from_str(json).unwrap();
        let fetched = feed.last_fetched_at.unwrap();
        assert_eq!(fetched.to_rfc3339(), "2024-05-01T00:30:00.123456+00:00");

        let json = r#"{"id":3,"title":"New","url":"https://example.com/rss","last_fetched_at":null}"#;
        let feed: Feed = serde_json::from_str(json).unwrap();
        assert!(feed.last_fetched_at.is_none());
    }

    #[test]
    fn test_article_tag_list() {
        let article = Article {
            id: 1,
            title: "t".to_string(),
            content: String::new(),
            published: false,
            tags: "rust, wasm,,leptos ".to_string(),
            created_at: None,
            updated_at: None,
        };
        assert_eq!(article.tag_list(), vec!["rust", "wasm", "leptos"]);
    }

    #[test]
    fn test_feed_article_excerpt() {
        let mut article = FeedArticle {
            id: 1,
            title: "t".to_string(),
            content: "x".repeat(200),
            summary: None,
            url: String::new(),
            published_at: None,
            feed_id: 1,
            feed_title: None,
            author: None,
            thumbnail_url: None,
            tags: Vec::new(),
            likes_count: None,
        };
        assert_eq!(article.excerpt().len(), 150);
        article.summary = Some("short".to_string());
        assert_eq!(article.excerpt(), "short");
    }
}
