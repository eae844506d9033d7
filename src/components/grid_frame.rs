//! Grid Frame Component
//!
//! One placed item on a layout grid, with a move handle and a resize corner.
//! While a gesture on this item is active the frame follows the pointer.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_gesture_start, GestureKind, GridSignals};

use crate::grid::{GridItem, GRID_COLS};

/// Row height of every layout grid, in pixels
pub const ROW_HEIGHT_PX: f64 = 40.0;

fn area_style(item: &GridItem) -> String {
    format!(
        "grid-column: {} / span {}; grid-row: {} / span {};",
        item.x + 1,
        item.w,
        item.y + 1,
        item.h
    )
}

fn live_geometry(item: &GridItem, kind: GestureKind, delta: (i32, i32)) -> GridItem {
    let (dx, dy) = delta;
    match kind {
        GestureKind::Move => item.nudged(dx, dy, 0, 0, GRID_COLS),
        GestureKind::Resize => item.nudged(0, 0, dx, dy, GRID_COLS),
    }
}

#[component]
pub fn GridFrame(
    #[prop(into)] item: Signal<GridItem>,
    grid: GridSignals,
    #[prop(into)] editable: Signal<bool>,
    #[prop(into)] selected: Signal<bool>,
    #[prop(into, optional)] on_select: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let item_id = item.get_untracked().id;
    let dragging = {
        let item_id = item_id.clone();
        move || grid.gesture_read.with(|g| g.as_ref().is_some_and(|g| g.item_id == item_id))
    };

    let style = {
        let item_id = item_id.clone();
        move || {
            let base = item.get();
            let shown = match grid.gesture_read.get() {
                Some(gesture) if gesture.item_id == item_id => live_geometry(&base, gesture.kind, grid.delta_read.get()),
                _ => base,
            };
            area_style(&shown)
        }
    };

    let on_move_start = make_on_gesture_start(grid, item_id.clone(), GestureKind::Move);
    let on_resize_start = make_on_gesture_start(grid, item_id, GestureKind::Resize);

    view! {
        <div
            class="grid-item"
            class:selected=move || selected.get()
            class:dragging=dragging
            style=style
            on:click=move |_| {
                if let Some(on_select) = on_select {
                    on_select.run(());
                }
            }
        >
            <Show when=move || editable.get()>
                <div class="drag-handle" title="Drag to move" on:mousedown=on_move_start.clone()>"⠿"</div>
            </Show>
            <div class="grid-item-body">{children()}</div>
            <Show when=move || editable.get()>
                <div class="resize-handle" title="Drag to resize" on:mousedown=on_resize_start.clone()></div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_style_is_one_based() {
        let item = GridItem::new("a", 0, 2, 4, 3);
        assert_eq!(area_style(&item), "grid-column: 1 / span 4; grid-row: 3 / span 3;");
    }

    #[test]
    fn test_live_geometry_by_gesture() {
        let item = GridItem::new("a", 2, 2, 4, 3);
        assert_eq!(live_geometry(&item, GestureKind::Move, (1, -1)), GridItem::new("a", 3, 1, 4, 3));
        assert_eq!(live_geometry(&item, GestureKind::Resize, (2, 1)), GridItem::new("a", 2, 2, 6, 4));
    }
}
