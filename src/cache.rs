//! Query Cache
//!
//! Server lists cached per resource key. `None` means the list was never
//! fetched; mutations patch a loaded list in place and leave an unloaded
//! one alone so the next fetch populates it.

use std::cell::RefCell;

use leptos::prelude::*;

use crate::models::{
    Article, Book, ExternalApi, Feed, FeedArticle, HatenaArticle, Layout, LayoutComponent,
    QiitaArticle, Resource, Task,
};

/// Cache keys, one per list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Tasks,
    Feeds,
    Articles,
    ExternalApis,
    Layouts,
    LayoutComponents,
    Books,
    QiitaArticles,
    HatenaArticles,
    FeedArticles,
}

impl QueryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKey::Tasks => "tasks",
            QueryKey::Feeds => "feeds",
            QueryKey::Articles => "articles",
            QueryKey::ExternalApis => "externalAPIs",
            QueryKey::Layouts => "layouts",
            QueryKey::LayoutComponents => "layoutComponents",
            QueryKey::Books => "books",
            QueryKey::QiitaArticles => "qiitaArticles",
            QueryKey::HatenaArticles => "hatenaArticles",
            QueryKey::FeedArticles => "feedArticles",
        }
    }
}

// ========================
// List Patches
// ========================

/// Append a created item
pub fn cache_insert<T: Resource>(list: &mut Option<Vec<T>>, item: T) {
    if let Some(items) = list.as_mut() {
        items.push(item);
    }
}

/// Swap in the server's copy of an updated item
pub fn cache_replace<T: Resource>(list: &mut Option<Vec<T>>, item: T) {
    let id = item.id();
    if let Some(existing) = list.iter_mut().flatten().find(|existing| existing.id() == id) {
        *existing = item;
    }
}

/// Drop a deleted item
pub fn cache_remove<T: Resource>(list: &mut Option<Vec<T>>, id: T::Id) {
    if let Some(items) = list.as_mut() {
        items.retain(|item| item.id() != id);
    }
}

/// Storage cell holding one cached list
pub trait CacheSlot<T> {
    fn modify(&self, f: impl FnOnce(&mut Option<Vec<T>>));

    fn fill(&self, items: Vec<T>) {
        self.modify(|list| *list = Some(items));
    }
}

impl<T: Send + Sync + 'static> CacheSlot<T> for RwSignal<Option<Vec<T>>> {
    fn modify(&self, f: impl FnOnce(&mut Option<Vec<T>>)) {
        self.update(f);
    }
}

impl<T> CacheSlot<T> for RefCell<Option<Vec<T>>> {
    fn modify(&self, f: impl FnOnce(&mut Option<Vec<T>>)) {
        f(&mut self.borrow_mut());
    }
}

// ========================
// Query Client
// ========================

/// Every cached list, provided via context
#[derive(Clone, Copy)]
pub struct QueryClient {
    pub tasks: RwSignal<Option<Vec<Task>>>,
    pub feeds: RwSignal<Option<Vec<Feed>>>,
    pub articles: RwSignal<Option<Vec<Article>>>,
    pub external_apis: RwSignal<Option<Vec<ExternalApi>>>,
    pub layouts: RwSignal<Option<Vec<Layout>>>,
    pub layout_components: RwSignal<Option<Vec<LayoutComponent>>>,
    pub books: RwSignal<Option<Vec<Book>>>,
    pub qiita_articles: RwSignal<Option<Vec<QiitaArticle>>>,
    pub hatena_articles: RwSignal<Option<Vec<HatenaArticle>>>,
    pub feed_articles: RwSignal<Option<Vec<FeedArticle>>>,
    /// `GET /layouts/{id}` for the canvas, with its components
    pub current_layout: RwSignal<Option<Layout>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            tasks: RwSignal::new(None),
            feeds: RwSignal::new(None),
            articles: RwSignal::new(None),
            external_apis: RwSignal::new(None),
            layouts: RwSignal::new(None),
            layout_components: RwSignal::new(None),
            books: RwSignal::new(None),
            qiita_articles: RwSignal::new(None),
            hatena_articles: RwSignal::new(None),
            feed_articles: RwSignal::new(None),
            current_layout: RwSignal::new(None),
        }
    }

    /// Mark a list stale so the next view refetches it
    pub fn invalidate(&self, key: QueryKey) {
        log::debug!("[CACHE] Invalidated {}", key.as_str());
        match key {
            QueryKey::Tasks => self.tasks.set(None),
            QueryKey::Feeds => self.feeds.set(None),
            QueryKey::Articles => self.articles.set(None),
            QueryKey::ExternalApis => self.external_apis.set(None),
            QueryKey::Layouts => self.layouts.set(None),
            QueryKey::LayoutComponents => self.layout_components.set(None),
            QueryKey::Books => self.books.set(None),
            QueryKey::QiitaArticles => self.qiita_articles.set(None),
            QueryKey::HatenaArticles => self.hatena_articles.set(None),
            QueryKey::FeedArticles => self.feed_articles.set(None),
        }
    }

    /// Forget everything (logout, expired session)
    pub fn clear(&self) {
        for key in ALL_KEYS {
            self.invalidate(*key);
        }
        self.current_layout.set(None);
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

const ALL_KEYS: &[QueryKey] = &[
    QueryKey::Tasks,
    QueryKey::Feeds,
    QueryKey::Articles,
    QueryKey::ExternalApis,
    QueryKey::Layouts,
    QueryKey::LayoutComponents,
    QueryKey::Books,
    QueryKey::QiitaArticles,
    QueryKey::HatenaArticles,
    QueryKey::FeedArticles,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u32, title: &str) -> Task {
        Task { id, title: title.to_string(), created_at: None, updated_at: None }
    }

    #[test]
    fn test_remove_only_matching_id() {
        let mut list = Some(vec![task(1, "a"), task(2, "b"), task(3, "c")]);
        cache_remove(&mut list, 2);
        let ids: Vec<u32> = list.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_unloaded_cache_stays_unloaded() {
        let mut list: Option<Vec<Task>> = None;
        cache_insert(&mut list, task(1, "a"));
        cache_replace(&mut list, task(1, "b"));
        cache_remove(&mut list, 1);
        assert!(list.is_none());
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut list = Some(vec![task(1, "a"), task(2, "b")]);
        cache_replace(&mut list, task(1, "renamed"));
        cache_replace(&mut list, task(9, "missing"));
        let list = list.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].title, "renamed");
    }

    #[test]
    fn test_refcell_slot() {
        let slot: RefCell<Option<Vec<Task>>> = RefCell::new(None);
        slot.fill(vec![task(1, "a")]);
        slot.modify(|list| cache_insert(list, task(2, "b")));
        assert_eq!(slot.borrow().as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_key_names() {
        assert_eq!(QueryKey::ExternalApis.as_str(), "externalAPIs");
        assert_eq!(QueryKey::LayoutComponents.as_str(), "layoutComponents");
        assert_eq!(ALL_KEYS.len(), 10);
    }
}
