//! Grid Layout Engine
//!
//! Items on a fixed-column grid. Moves and resizes are clamped to the
//! columns, colliding items are pushed down, then everything floats up.

use serde::{Deserialize, Serialize};

/// Column count of every layout grid
pub const GRID_COLS: u32 = 12;

/// Geometry of one placed item, in grid cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridItem {
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl GridItem {
    pub fn new(id: impl Into<String>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { id: id.into(), x, y, w, h }
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    pub fn collides(&self, other: &GridItem) -> bool {
        self.id != other.id
            && self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    /// This item alone shifted by whole cells, clamped but not settled
    pub fn nudged(&self, dx: i32, dy: i32, dw: i32, dh: i32, cols: u32) -> GridItem {
        let mut ghost = self.clone();
        ghost.x = offset(ghost.x, dx);
        ghost.y = offset(ghost.y, dy);
        if dw != 0 {
            ghost.w = offset(ghost.w, dw).min(cols.saturating_sub(ghost.x)).max(1);
        }
        ghost.h = offset(ghost.h, dh);
        ghost.clamp(cols);
        ghost
    }

    /// Keep the item inside the columns with a non-zero size
    fn clamp(&mut self, cols: u32) {
        self.w = self.w.clamp(1, cols.max(1));
        self.h = self.h.max(1);
        self.x = self.x.min(cols.saturating_sub(self.w));
    }
}

/// First free row below everything
pub fn bottom(items: &[GridItem]) -> u32 {
    items.iter().map(GridItem::bottom).max().unwrap_or(0)
}

/// Move item `id` by whole cells
pub fn move_item(items: &[GridItem], id: &str, dx: i32, dy: i32, cols: u32) -> Vec<GridItem> {
    let mut next = items.to_vec();
    if let Some(item) = next.iter_mut().find(|item| item.id == id) {
        item.x = offset(item.x, dx);
        item.y = offset(item.y, dy);
        item.clamp(cols);
    } else {
        return next;
    }
    settle(next, id, cols)
}

/// Resize item `id` by whole cells, anchored at its top-left corner
pub fn resize_item(items: &[GridItem], id: &str, dw: i32, dh: i32, cols: u32) -> Vec<GridItem> {
    let mut next = items.to_vec();
    if let Some(item) = next.iter_mut().find(|item| item.id == id) {
        item.w = offset(item.w, dw).min(cols.saturating_sub(item.x)).max(1);
        item.h = offset(item.h, dh).max(1);
        item.clamp(cols);
    } else {
        return next;
    }
    settle(next, id, cols)
}

fn offset(value: u32, delta: i32) -> u32 {
    (value as i64 + delta as i64).max(0) as u32
}

/// Push everything the changed item overlaps down, then compact
fn settle(mut items: Vec<GridItem>, changed_id: &str, cols: u32) -> Vec<GridItem> {
    for item in items.iter_mut() {
        item.clamp(cols);
    }
    push_down(&mut items, changed_id);
    compact(items)
}

/// Cascade collisions downward starting from `origin_id`
fn push_down(items: &mut [GridItem], origin_id: &str) {
    let mut queue = vec![origin_id.to_string()];
    // each push lowers an item below its pusher, so this bound is never hit on sane input
    let mut budget = items.len() * items.len() + 1;

    while let Some(pusher_id) = queue.pop() {
        let Some(pusher) = items.iter().find(|item| item.id == pusher_id).cloned() else {
            continue;
        };
        for item in items.iter_mut() {
            if budget == 0 {
                return;
            }
            if pusher.collides(item) {
                item.y = pusher.bottom();
                queue.push(item.id.clone());
                budget -= 1;
            }
        }
    }
}

/// Float every item up as far as it goes, top to bottom, left to right.
/// Relative order is preserved.
pub fn compact(items: Vec<GridItem>) -> Vec<GridItem> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by_key(|&i| (items[i].y, items[i].x));

    let mut placed: Vec<GridItem> = Vec::with_capacity(items.len());
    let mut result = items.clone();
    for i in order {
        let mut item = items[i].clone();
        while item.y > 0 {
            item.y -= 1;
            if placed.iter().any(|other| item.collides(other)) {
                item.y += 1;
                break;
            }
        }
        while placed.iter().any(|other| item.collides(other)) {
            item.y += 1;
        }
        result[i] = item.clone();
        placed.push(item);
    }
    result
}

/// Overwrite geometry with a reported arrangement. Ids missing from the
/// report keep their geometry; unknown ids are ignored.
pub fn apply_arrangement(items: &mut [GridItem], arrangement: &[GridItem]) {
    for reported in arrangement {
        if let Some(item) = items.iter_mut().find(|item| item.id == reported.id) {
            *item = reported.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(items: &'a [GridItem], id: &str) -> &'a GridItem {
        items.iter().find(|item| item.id == id).unwrap()
    }

    #[test]
    fn test_nudged_ghost_stays_on_grid() {
        let item = GridItem::new("a", 8, 1, 3, 2);
        assert_eq!(item.nudged(5, -4, 0, 0, GRID_COLS), GridItem::new("a", 9, 0, 3, 2));
        assert_eq!(item.nudged(0, 0, 6, -5, GRID_COLS), GridItem::new("a", 8, 1, 4, 1));
    }

    #[test]
    fn test_move_clamps_to_columns() {
        let items = vec![GridItem::new("a", 0, 0, 4, 2)];
        let moved = move_item(&items, "a", 20, 0, GRID_COLS);
        assert_eq!(find(&moved, "a").x, 8);

        let moved = move_item(&items, "a", -3, -3, GRID_COLS);
        assert_eq!((find(&moved, "a").x, find(&moved, "a").y), (0, 0));
    }

    #[test]
    fn test_move_pushes_collision_down() {
        let items = vec![GridItem::new("a", 0, 0, 6, 2), GridItem::new("b", 6, 0, 6, 3)];
        let moved = move_item(&items, "a", 6, 0, GRID_COLS);
        let a = find(&moved, "a");
        let b = find(&moved, "b");
        assert_eq!((a.x, a.y), (6, 0));
        assert_eq!((b.x, b.y), (6, 2));
        assert!(!a.collides(b));
    }

    #[test]
    fn test_push_cascades() {
        let items = vec![
            GridItem::new("a", 0, 0, 12, 2),
            GridItem::new("b", 0, 2, 12, 2),
            GridItem::new("c", 0, 4, 12, 2),
        ];
        let resized = resize_item(&items, "a", 0, 2, GRID_COLS);
        assert_eq!(find(&resized, "a").h, 4);
        assert_eq!(find(&resized, "b").y, 4);
        assert_eq!(find(&resized, "c").y, 6);
    }

    #[test]
    fn test_compact_removes_gaps() {
        let items = vec![GridItem::new("a", 0, 5, 4, 2), GridItem::new("b", 0, 10, 4, 2)];
        let compacted = compact(items);
        assert_eq!(find(&compacted, "a").y, 0);
        assert_eq!(find(&compacted, "b").y, 2);
    }

    #[test]
    fn test_resize_is_bounded_by_columns() {
        let items = vec![GridItem::new("a", 8, 0, 2, 2)];
        let resized = resize_item(&items, "a", 10, -5, GRID_COLS);
        let a = find(&resized, "a");
        assert_eq!((a.w, a.h), (4, 1));
    }

    #[test]
    fn test_resize_only_touches_that_item() {
        let items = vec![
            GridItem::new("4", 0, 0, 6, 2),
            GridItem::new("5", 6, 0, 6, 2),
            GridItem::new("6", 0, 2, 6, 2),
        ];
        let resized = resize_item(&items, "5", -2, 1, GRID_COLS);
        assert_eq!(find(&resized, "5"), &GridItem::new("5", 6, 0, 4, 3));
        assert_eq!(find(&resized, "4"), &items[0]);
        assert_eq!(find(&resized, "6"), &items[2]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let items = vec![GridItem::new("a", 0, 3, 4, 2)];
        assert_eq!(move_item(&items, "zzz", 1, 1, GRID_COLS), items);
    }

    #[test]
    fn test_apply_arrangement_last_write_wins() {
        let mut items = vec![GridItem::new("4", 0, 0, 2, 2), GridItem::new("5", 2, 0, 2, 2)];
        apply_arrangement(&mut items, &[GridItem::new("5", 4, 1, 3, 3), GridItem::new("9", 0, 0, 1, 1)]);
        assert_eq!(items[0], GridItem::new("4", 0, 0, 2, 2));
        assert_eq!(items[1], GridItem::new("5", 4, 1, 3, 3));
        assert_eq!(bottom(&items), 4);
    }
}
