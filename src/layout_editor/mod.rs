//! Layout Editor State
//!
//! Placements of templates on the grid, the current selection and the
//! operations the editor view performs on them.

pub mod canvas;
pub mod persist;
pub mod props;
pub mod templates;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::grid::{self, GridItem, GRID_COLS};
use persist::SavedLayout;
use props::Props;
use templates::{template_by_id, Template};

/// One template instance on the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: String,
    pub template_id: String,
    pub props: Props,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Placement {
    pub fn grid_item(&self) -> GridItem {
        GridItem::new(self.id.clone(), self.x, self.y, self.w, self.h)
    }

    pub fn template(&self) -> Option<&'static Template> {
        template_by_id(&self.template_id)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorState {
    pub placements: Vec<Placement>,
    pub selected: Option<String>,
    /// Render without editing chrome
    pub preview: bool,
    next_id: u32,
}

impl EditorState {
    /// Place a template at the bottom with its default size and select it
    pub fn add(&mut self, template: &Template) -> String {
        self.next_id += 1;
        let id = format!("item-{}", self.next_id);
        let (w, h) = template.size;
        self.placements.push(Placement {
            id: id.clone(),
            template_id: template.id.to_string(),
            props: template.default_props(),
            x: 0,
            y: grid::bottom(&self.arrangement()),
            w,
            h,
        });
        self.selected = Some(id.clone());
        id
    }

    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id
            .filter(|id| self.placements.iter().any(|p| p.id == *id))
            .map(str::to_string);
    }

    pub fn selected_placement(&self) -> Option<&Placement> {
        let id = self.selected.as_deref()?;
        self.placements.iter().find(|p| p.id == id)
    }

    pub fn remove(&mut self, id: &str) {
        self.placements.retain(|p| p.id != id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
    }

    /// Identity of each rendered placement. A loaded layout may reuse an id
    /// for a different template, so both take part.
    pub fn render_keys(&self) -> Vec<(String, String)> {
        self.placements
            .iter()
            .map(|p| (p.id.clone(), p.template_id.clone()))
            .collect()
    }

    pub fn arrangement(&self) -> Vec<GridItem> {
        self.placements.iter().map(Placement::grid_item).collect()
    }

    /// Take a reported arrangement as-is
    pub fn apply_arrangement(&mut self, arrangement: &[GridItem]) {
        for placement in self.placements.iter_mut() {
            if let Some(item) = arrangement.iter().find(|item| item.id == placement.id) {
                placement.x = item.x;
                placement.y = item.y;
                placement.w = item.w;
                placement.h = item.h;
            }
        }
    }

    pub fn move_by(&mut self, id: &str, dx: i32, dy: i32) {
        let arrangement = grid::move_item(&self.arrangement(), id, dx, dy, GRID_COLS);
        self.apply_arrangement(&arrangement);
    }

    pub fn resize_by(&mut self, id: &str, dw: i32, dh: i32) {
        let arrangement = grid::resize_item(&self.arrangement(), id, dw, dh, GRID_COLS);
        self.apply_arrangement(&arrangement);
    }

    pub fn set_props(&mut self, id: &str, props: Props) {
        if let Some(placement) = self.placements.iter_mut().find(|p| p.id == id) {
            placement.props = props;
        }
    }

    pub fn reset_props(&mut self, id: &str) {
        if let Some(placement) = self.placements.iter_mut().find(|p| p.id == id) {
            if let Some(template) = template_by_id(&placement.template_id) {
                placement.props = template.default_props();
            }
        }
    }

    pub fn snapshot(&self, name: &str, created_at: DateTime<Utc>) -> SavedLayout {
        SavedLayout {
            name: name.to_string(),
            items: self.placements.clone(),
            created_at,
        }
    }

    /// Replace the placements with a saved layout
    pub fn load(&mut self, saved: &SavedLayout) {
        self.placements = saved.items.clone();
        self.selected = None;
        self.next_id = self
            .placements
            .iter()
            .filter_map(|p| p.id.strip_prefix("item-")?.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            .max(self.next_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use props::PropValue;

    fn template(id: &str) -> &'static Template {
        template_by_id(id).unwrap()
    }

    fn placement(id: &str, x: u32, y: u32, w: u32, h: u32) -> Placement {
        Placement {
            id: id.to_string(),
            template_id: "default-calendar".to_string(),
            props: Props::default(),
            x,
            y,
            w,
            h,
        }
    }

    #[test]
    fn test_add_appends_with_default_size() {
        let mut state = EditorState::default();
        let header = state.add(template("default-header"));
        let card = state.add(template("default-article-card"));

        assert_eq!(state.placements.len(), 2);
        assert_eq!(header, "item-1");
        assert_eq!(card, "item-2");
        let added = &state.placements[1];
        assert_eq!((added.w, added.h), template("default-article-card").size);
        assert_eq!((added.x, added.y), (0, 2));
        assert_eq!(state.selected.as_deref(), Some("item-2"));
    }

    #[test]
    fn test_arrangement_updates_only_reported_item() {
        let mut state = EditorState {
            placements: vec![placement("4", 0, 0, 4, 2), placement("5", 4, 0, 4, 2), placement("6", 8, 0, 4, 2)],
            ..Default::default()
        };
        let before = state.placements.clone();

        state.apply_arrangement(&[GridItem::new("5", 4, 0, 3, 5)]);

        assert_eq!(state.placements[0], before[0]);
        assert_eq!(state.placements[2], before[2]);
        let five = &state.placements[1];
        assert_eq!((five.x, five.y, five.w, five.h), (4, 0, 3, 5));
    }

    #[test]
    fn test_remove_clears_selection() {
        let mut state = EditorState::default();
        let id = state.add(template("default-sidebar"));
        state.remove(&id);
        assert!(state.placements.is_empty());
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_select_unknown_is_none() {
        let mut state = EditorState::default();
        state.add(template("default-footer"));
        state.select(Some("item-99"));
        assert!(state.selected_placement().is_none());
        state.select(Some("item-1"));
        assert_eq!(state.selected_placement().map(|p| p.template_id.as_str()), Some("default-footer"));
    }

    #[test]
    fn test_move_resolves_collisions() {
        let mut state = EditorState::default();
        let header = state.add(template("default-header"));
        let card = state.add(template("default-article-card"));
        state.move_by(&card, 3, -2);

        let card = state.placements.iter().find(|p| p.id == card).unwrap();
        let header = state.placements.iter().find(|p| p.id == header).unwrap();
        assert_eq!((card.x, card.y), (3, 0));
        assert_eq!(header.y, 5);
    }

    #[test]
    fn test_props_edit_and_reset() {
        let mut state = EditorState::default();
        let id = state.add(template("default-header"));
        let edited = state.selected_placement().unwrap().props.with_value("title", PropValue::text("Mine"));
        state.set_props(&id, edited);
        assert_eq!(state.selected_placement().unwrap().props.text("title"), "Mine");

        state.reset_props(&id);
        assert_eq!(state.selected_placement().unwrap().props.text("title"), "Blog title");
    }

    #[test]
    fn test_load_with_reused_id_changes_render_key() {
        let mut source = EditorState::default();
        source.add(template("default-header"));
        let saved = source.snapshot("header only", Utc::now());

        let mut state = EditorState::default();
        state.add(template("default-sidebar"));
        let before = state.render_keys();
        state.load(&saved);
        let after = state.render_keys();

        assert_eq!(before[0].0, after[0].0);
        assert_ne!(before, after);
        assert_eq!(after, vec![("item-1".to_string(), "default-header".to_string())]);
        assert_eq!(
            state.placements[0].template().map(|t| t.kind),
            template_by_id("default-header").map(|t| t.kind)
        );
    }

    #[test]
    fn test_load_replaces_and_continues_ids() {
        let mut source = EditorState::default();
        source.add(template("default-header"));
        source.add(template("default-footer"));
        let saved = source.snapshot("two", Utc::now());

        let mut state = EditorState::default();
        state.add(template("default-sidebar"));
        state.load(&saved);

        assert_eq!(state.placements.len(), 2);
        assert!(state.selected.is_none());
        assert_eq!(state.add(template("default-calendar")), "item-3");
    }
}
