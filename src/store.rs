//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! drafts being edited and UI selection state; server data lives in the
//! query cache.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::drafts::{
    EditedArticle, EditedExternalApi, EditedFeed, EditedLayout, EditedLayoutComponent, EditedTask,
};
use crate::models::GoogleBookVolume;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub edited_task: EditedTask,
    pub edited_feed: EditedFeed,
    pub edited_article: EditedArticle,
    pub edited_external_api: EditedExternalApi,
    pub edited_layout: EditedLayout,
    pub edited_layout_component: EditedLayoutComponent,
    /// Feed whose articles are listed (None = all feeds)
    pub selected_feed_id: Option<u32>,
    pub search_query: String,
    pub search_results: Vec<GoogleBookVolume>,
    pub selected_book: Option<GoogleBookVolume>,
    /// Per-screen "editor open" toggles
    pub article_editing: bool,
    pub external_api_editing: bool,
    pub layout_editing: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Forget every draft and selection (logout, expired session)
pub fn store_reset(store: &AppStore) {
    store.set(AppState::default());
}

/// Replace the search results and drop a selection that is no longer listed
pub fn store_set_search_results(store: &AppStore, results: Vec<GoogleBookVolume>) {
    let selected = store.selected_book().get_untracked();
    if selected.is_some() {
        store.selected_book().set(kept_selection(selected, &results));
    }
    store.search_results().set(results);
}

fn kept_selection(selected: Option<GoogleBookVolume>, results: &[GoogleBookVolume]) -> Option<GoogleBookVolume> {
    selected.filter(|book| results.iter().any(|r| r.id == book.id))
}

/// Clear query, results and selection of the book search
pub fn store_reset_search(store: &AppStore) {
    store.search_query().set(String::new());
    store.search_results().set(Vec::new());
    store.selected_book().set(None);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(id: &str) -> GoogleBookVolume {
        GoogleBookVolume {
            id: id.to_string(),
            title: format!("Book {}", id),
            authors: vec![],
            description: None,
            isbn: None,
            image_url: None,
            published_date: None,
        }
    }

    #[test]
    fn test_selection_dropped_when_missing_from_results() {
        assert_eq!(kept_selection(Some(volume("a")), &[volume("b"), volume("c")]), None);
        assert_eq!(kept_selection(Some(volume("b")), &[volume("b")]), Some(volume("b")));
        assert_eq!(kept_selection(None, &[volume("b")]), None);
    }

    #[test]
    fn test_store_search_results_replace_selection() {
        let owner = Owner::new();
        owner.set();
        let store: AppStore = Store::new(AppState::default());

        store.selected_book().set(Some(volume("a")));
        store_set_search_results(&store, vec![volume("a"), volume("b")]);
        assert_eq!(store.selected_book().get_untracked(), Some(volume("a")));
        assert_eq!(store.search_results().get_untracked().len(), 2);

        store_set_search_results(&store, vec![volume("c")]);
        assert_eq!(store.selected_book().get_untracked(), None);
        assert_eq!(store.search_results().get_untracked(), vec![volume("c")]);

        store.search_query().set("rust".to_string());
        store_reset_search(&store);
        assert!(store.search_query().get_untracked().is_empty());
        assert!(store.search_results().get_untracked().is_empty());
    }
}
