//! Saved Layouts
//!
//! Template-editor layouts kept as a JSON array in browser local storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Placement;
use crate::error::{ApiError, ApiResult};

/// Local storage key of the saved layout array
pub const SAVED_LAYOUTS_KEY: &str = "savedLayouts";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLayout {
    pub name: String,
    pub items: Vec<Placement>,
    pub created_at: DateTime<Utc>,
}

/// Key/value string storage
pub trait LayoutStorage {
    fn read(&self, key: &str) -> ApiResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> ApiResult<()>;
}

/// `window.localStorage`
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> ApiResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| ApiError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| ApiError::Storage("local storage disabled".to_string()))
    }
}

impl LayoutStorage for BrowserStorage {
    fn read(&self, key: &str) -> ApiResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> ApiResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }
}

/// Every saved layout, oldest first
pub fn load_saved_layouts(storage: &dyn LayoutStorage) -> ApiResult<Vec<SavedLayout>> {
    match storage.read(SAVED_LAYOUTS_KEY)? {
        Some(json) if !json.trim().is_empty() => {
            serde_json::from_str(&json).map_err(|e| ApiError::Storage(format!("corrupt {}: {}", SAVED_LAYOUTS_KEY, e)))
        }
        _ => Ok(Vec::new()),
    }
}

/// Append to the saved array. Returns the new count.
pub fn save_layout(storage: &dyn LayoutStorage, layout: SavedLayout) -> ApiResult<usize> {
    let mut saved = load_saved_layouts(storage)?;
    saved.push(layout);
    let json = serde_json::to_string(&saved).map_err(|e| ApiError::Storage(e.to_string()))?;
    storage.write(SAVED_LAYOUTS_KEY, &json)?;
    log::info!("[EDITOR] Saved layout #{} to local storage", saved.len());
    Ok(saved.len())
}

#[cfg(test)]
pub(crate) mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    pub struct MemoryStorage {
        pub entries: RefCell<HashMap<String, String>>,
    }

    impl LayoutStorage for MemoryStorage {
        fn read(&self, key: &str) -> ApiResult<Option<String>> {
            Ok(self.entries.borrow().get(key).cloned())
        }

        fn write(&self, key: &str, value: &str) -> ApiResult<()> {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStorage;
    use super::*;
    use crate::layout_editor::templates::template_by_id;
    use crate::layout_editor::EditorState;

    fn saved(name: &str) -> SavedLayout {
        let mut state = EditorState::default();
        state.add(template_by_id("default-header").unwrap());
        state.snapshot(name, Utc::now())
    }

    #[test]
    fn test_save_appends() {
        let storage = MemoryStorage::default();
        assert_eq!(save_layout(&storage, saved("first")).unwrap(), 1);
        assert_eq!(save_layout(&storage, saved("second")).unwrap(), 2);

        let layouts = load_saved_layouts(&storage).unwrap();
        let names: Vec<&str> = layouts.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(layouts[1].items.len(), 1);
    }

    #[test]
    fn test_missing_key_is_empty() {
        let storage = MemoryStorage::default();
        assert!(load_saved_layouts(&storage).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_blob_is_an_error() {
        let storage = MemoryStorage::default();
        storage.write(SAVED_LAYOUTS_KEY, "{not json").unwrap();
        assert!(matches!(load_saved_layouts(&storage), Err(ApiError::Storage(_))));
        assert!(save_layout(&storage, saved("x")).is_err());
    }

    #[test]
    fn test_blob_is_a_json_array() {
        let storage = MemoryStorage::default();
        save_layout(&storage, saved("first")).unwrap();
        let raw = storage.read(SAVED_LAYOUTS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["name"], "first");
        assert!(value[0]["created_at"].is_string());
    }
}
