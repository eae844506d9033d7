//! Component Properties
//!
//! Typed property sets for placed templates. Every edit returns a new set.

use serde::{Deserialize, Serialize};

/// One property value; the variant decides which input the editor renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PropValue {
    Text(String),
    /// `#rrggbb`
    Color(String),
    Number(f64),
    Flag(bool),
    TextList(Vec<String>),
    /// Rows of string cells under fixed column names
    RecordList {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

impl PropValue {
    pub fn text(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }

    pub fn color(value: &str) -> Self {
        PropValue::Color(value.to_string())
    }

    pub fn text_list(values: &[&str]) -> Self {
        PropValue::TextList(values.iter().map(|v| v.to_string()).collect())
    }

    pub fn records(columns: &[&str], rows: &[&[&str]]) -> Self {
        PropValue::RecordList {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        }
    }

    fn same_kind(&self, other: &PropValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Entry count of list values
    pub fn len(&self) -> Option<usize> {
        match self {
            PropValue::TextList(items) => Some(items.len()),
            PropValue::RecordList { rows, .. } => Some(rows.len()),
            _ => None,
        }
    }
}

/// Ordered property set of one placement
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Props(pub Vec<(String, PropValue)>);

impl Props {
    pub fn new(entries: Vec<(&str, PropValue)>) -> Self {
        Props(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn text(&self, key: &str) -> String {
        match self.get(key) {
            Some(PropValue::Text(s)) | Some(PropValue::Color(s)) => s.clone(),
            Some(PropValue::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }

    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some(PropValue::Flag(true)))
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key) {
            Some(PropValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(PropValue::TextList(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    /// Rows as (column, cell) pairs
    pub fn records(&self, key: &str) -> Vec<Vec<(String, String)>> {
        match self.get(key) {
            Some(PropValue::RecordList { columns, rows }) => rows
                .iter()
                .map(|row| columns.iter().cloned().zip(row.iter().cloned()).collect())
                .collect(),
            _ => Vec::new(),
        }
    }

    fn edit(&self, key: &str, f: impl FnOnce(&mut PropValue)) -> Props {
        let mut next = self.clone();
        if let Some((_, value)) = next.0.iter_mut().find(|(k, _)| k == key) {
            f(value);
        }
        next
    }

    /// Replace a value; a value of a different kind is ignored
    pub fn with_value(&self, key: &str, value: PropValue) -> Props {
        self.edit(key, |current| {
            if current.same_kind(&value) {
                *current = value;
            }
        })
    }

    pub fn with_list_entry(&self, key: &str, index: usize, text: &str) -> Props {
        self.edit(key, |current| {
            if let PropValue::TextList(items) = current {
                if let Some(item) = items.get_mut(index) {
                    *item = text.to_string();
                }
            }
        })
    }

    pub fn with_record_field(&self, key: &str, row: usize, column: &str, text: &str) -> Props {
        self.edit(key, |current| {
            if let PropValue::RecordList { columns, rows } = current {
                let col = columns.iter().position(|c| c == column);
                if let (Some(col), Some(cells)) = (col, rows.get_mut(row)) {
                    if let Some(cell) = cells.get_mut(col) {
                        *cell = text.to_string();
                    }
                }
            }
        })
    }

    /// Append a copy of the first entry, or a blank one when the list is empty
    pub fn with_entry_added(&self, key: &str) -> Props {
        self.edit(key, |current| match current {
            PropValue::TextList(items) => {
                let entry = items.first().cloned().unwrap_or_default();
                items.push(entry);
            }
            PropValue::RecordList { columns, rows } => {
                let entry = rows
                    .first()
                    .cloned()
                    .unwrap_or_else(|| vec![String::new(); columns.len()]);
                rows.push(entry);
            }
            _ => {}
        })
    }

    pub fn with_entry_removed(&self, key: &str, index: usize) -> Props {
        self.edit(key, |current| match current {
            PropValue::TextList(items) if index < items.len() => {
                items.remove(index);
            }
            PropValue::RecordList { rows, .. } if index < rows.len() => {
                rows.remove(index);
            }
            _ => {}
        })
    }
}

/// `background_color` -> `Background color`
pub fn label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Props {
        Props::new(vec![
            ("title", PropValue::text("Blog")),
            ("background_color", PropValue::color("#2196f3")),
            ("tags", PropValue::text_list(&["rust", "wasm"])),
            ("links", PropValue::records(&["label", "url"], &[&["Home", "/"]])),
            ("show_image", PropValue::Flag(true)),
            ("excerpt_length", PropValue::Number(120.0)),
        ])
    }

    #[test]
    fn test_edits_leave_original_untouched() {
        let props = sample();
        let edited = props.with_value("title", PropValue::text("New"));
        assert_eq!(props.text("title"), "Blog");
        assert_eq!(edited.text("title"), "New");
    }

    #[test]
    fn test_wrong_kind_is_ignored() {
        let props = sample();
        assert_eq!(props.with_value("title", PropValue::Flag(false)), props);
        assert_eq!(props.with_value("missing", PropValue::text("x")), props);
    }

    #[test]
    fn test_list_entries() {
        let props = sample().with_list_entry("tags", 1, "leptos");
        assert_eq!(props.list("tags"), vec!["rust", "leptos"]);

        let props = props.with_entry_added("tags");
        assert_eq!(props.list("tags"), vec!["rust", "leptos", "rust"]);

        let props = props.with_entry_removed("tags", 0).with_entry_removed("tags", 9);
        assert_eq!(props.list("tags"), vec!["leptos", "rust"]);
    }

    #[test]
    fn test_record_fields() {
        let props = sample()
            .with_entry_added("links")
            .with_record_field("links", 1, "url", "/articles");
        let rows = props.records("links");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][1], ("url".to_string(), "/".to_string()));
        assert_eq!(rows[1][1], ("url".to_string(), "/articles".to_string()));
    }

    #[test]
    fn test_add_to_empty_lists() {
        let props = Props::new(vec![
            ("tags", PropValue::TextList(Vec::new())),
            ("links", PropValue::records(&["label", "url"], &[])),
        ]);
        let props = props.with_entry_added("tags").with_entry_added("links");
        assert_eq!(props.list("tags"), vec![String::new()]);
        assert_eq!(props.get("links").and_then(PropValue::len), Some(1));
        assert_eq!(props.records("links")[0].len(), 2);
    }

    #[test]
    fn test_scalar_readers() {
        let props = sample();
        assert!(props.flag("show_image"));
        assert_eq!(props.number("excerpt_length"), Some(120.0));
        assert_eq!(props.text("background_color"), "#2196f3");
    }

    #[test]
    fn test_label() {
        assert_eq!(label("background_color"), "Background color");
        assert_eq!(label("title"), "Title");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(PropValue::Flag(true)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "flag", "value": true}));
    }
}
