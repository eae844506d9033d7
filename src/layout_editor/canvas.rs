//! API Canvas Geometry
//!
//! Maps server-side layout components onto the grid and back.

use crate::api::Position;
use crate::grid::{self, GridItem};
use crate::models::LayoutComponent;

/// Size of a dropped component that has none yet
pub const DEFAULT_DROP_SIZE: (u32, u32) = (2, 2);

pub fn grid_items(components: &[LayoutComponent]) -> Vec<GridItem> {
    components
        .iter()
        .map(|c| GridItem::new(c.id.to_string(), c.x, c.y, c.width.max(1), c.height.max(1)))
        .collect()
}

/// Where a component dropped from the palette lands: bottom of the canvas
pub fn drop_position(component: &LayoutComponent, placed: &[LayoutComponent]) -> Position {
    let (w, h) = if component.width > 0 && component.height > 0 {
        (component.width.min(grid::GRID_COLS), component.height)
    } else {
        DEFAULT_DROP_SIZE
    };
    Position {
        x: 0,
        y: grid::bottom(&grid_items(placed)),
        width: w,
        height: h,
    }
}

/// Components whose geometry differs in `arrangement`
pub fn position_updates(components: &[LayoutComponent], arrangement: &[GridItem]) -> Vec<(u32, Position)> {
    components
        .iter()
        .filter_map(|component| {
            let item = arrangement.iter().find(|item| item.id == component.id.to_string())?;
            let next = Position {
                x: item.x,
                y: item.y,
                width: item.w,
                height: item.h,
            };
            (next != Position::of(component)).then_some((component.id, next))
        })
        .collect()
}

/// Write accepted positions back into the local copy
pub fn apply_positions(components: &mut [LayoutComponent], updates: &[(u32, Position)]) {
    for (id, position) in updates {
        if let Some(component) = components.iter_mut().find(|c| c.id == *id) {
            component.x = position.x;
            component.y = position.y;
            component.width = position.width;
            component.height = position.height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{move_item, GRID_COLS};

    fn component(id: u32, x: u32, y: u32, width: u32, height: u32) -> LayoutComponent {
        LayoutComponent {
            id,
            name: format!("c{}", id),
            component_type: "custom".to_string(),
            content: String::new(),
            x,
            y,
            width,
            height,
            layout_id: Some(1),
        }
    }

    #[test]
    fn test_only_changed_components_are_reported() {
        let placed = vec![component(4, 0, 0, 6, 2), component(5, 6, 0, 6, 2), component(6, 0, 2, 12, 2)];
        let moved = move_item(&grid_items(&placed), "5", 0, 4, GRID_COLS);

        let updates = position_updates(&placed, &moved);

        assert_eq!(updates, vec![(5, Position { x: 6, y: 4, width: 6, height: 2 })]);
    }

    #[test]
    fn test_drop_lands_at_bottom() {
        let placed = vec![component(4, 0, 0, 12, 3)];
        let fresh = component(9, 0, 0, 0, 0);
        assert_eq!(drop_position(&fresh, &placed), Position { x: 0, y: 3, width: 2, height: 2 });

        let sized = component(10, 5, 5, 4, 3);
        assert_eq!(drop_position(&sized, &[]), Position { x: 0, y: 0, width: 4, height: 3 });
    }

    #[test]
    fn test_apply_positions_touches_listed_ids() {
        let mut placed = vec![component(4, 0, 0, 6, 2), component(5, 6, 0, 6, 2)];
        apply_positions(&mut placed, &[(5, Position { x: 0, y: 2, width: 3, height: 3 })]);
        assert_eq!(Position::of(&placed[0]), Position { x: 0, y: 0, width: 6, height: 2 });
        assert_eq!(Position::of(&placed[1]), Position { x: 0, y: 2, width: 3, height: 3 });
    }
}
