//! Leptos DragDrop Utilities
//!
//! Mouse-event based drag-and-drop for Leptos, plus move/resize gestures
//! for items placed on a column grid.
//! Uses a movement threshold to distinguish click from drag.

use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropTarget {
    /// The grid canvas of a layout
    Canvas(u32),
    /// The palette (dropping a placed component back removes it)
    Palette,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// True once the pointer has travelled past the drag threshold on either axis
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    (current.0 - start.0).abs() > DRAG_THRESHOLD_PX || (current.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

/// Ignore presses that start on form controls
fn starts_on_control(ev: &web_sys::MouseEvent) -> bool {
    match ev.target() {
        Some(target) => {
            target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
        }
        None => false,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    set_timeout(move || clear.set(false), Duration::from_millis(100));
}

/// Create mousedown handler for draggable entries
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 && !starts_on_control(&ev) {
            dnd.pending_id_write.set(Some(id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mouseenter handler for a drop target
pub fn make_on_target_mouseenter(dnd: DndSignals, target: DropTarget) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(target));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind window mousemove/mouseup handlers for drop detection.
/// The listeners are removed when the calling component is cleaned up.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(u32, DropTarget) + 'static,
{
    let on_mousemove = window_event_listener(leptos::ev::mousemove, move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();
        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_id_write.set(pending);
            }
        }
    });

    let on_mouseup = window_event_listener(leptos::ev::mouseup, move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_id_write.set(None);

        end_drag(&dnd);
        if let (Some(dragged), Some(target)) = (dragging_id, drop_target) {
            on_drop(dragged, target);
        }
    });

    on_cleanup(move || {
        on_mousemove.remove();
        on_mouseup.remove();
    });
}

// ========================
// Grid Gestures
// ========================

/// What a grid gesture changes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    /// Drag handle: changes x/y
    Move,
    /// Corner handle: changes w/h
    Resize,
}

/// An in-progress move or resize of a grid item
#[derive(Clone, Debug, PartialEq)]
pub struct GridGesture {
    pub item_id: String,
    pub kind: GestureKind,
    pub start_x: i32,
    pub start_y: i32,
}

/// Pixel size of one grid cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMetrics {
    pub col_width_px: f64,
    pub row_height_px: f64,
}

impl GridMetrics {
    /// Metrics for a canvas `width_px` wide split into `cols` columns
    pub fn for_width(width_px: f64, cols: u32, row_height_px: f64) -> Self {
        let col_width_px = if cols == 0 { 0.0 } else { width_px / cols as f64 };
        Self { col_width_px, row_height_px }
    }

    /// Convert a pointer delta into whole-cell deltas
    pub fn cells(&self, dx_px: i32, dy_px: i32) -> (i32, i32) {
        (px_to_cells(dx_px, self.col_width_px), px_to_cells(dy_px, self.row_height_px))
    }
}

/// Round a pixel delta to the nearest number of cells
pub fn px_to_cells(delta_px: i32, cell_px: f64) -> i32 {
    if cell_px <= 0.0 {
        return 0;
    }
    (delta_px as f64 / cell_px).round() as i32
}

/// Grid gesture state signals
#[derive(Clone, Copy)]
pub struct GridSignals {
    pub gesture_read: ReadSignal<Option<GridGesture>>,
    pub gesture_write: WriteSignal<Option<GridGesture>>,
    /// Live delta in cells while a gesture is active
    pub delta_read: ReadSignal<(i32, i32)>,
    pub delta_write: WriteSignal<(i32, i32)>,
}

pub fn create_grid_signals() -> GridSignals {
    let (gesture_read, gesture_write) = signal(None::<GridGesture>);
    let (delta_read, delta_write) = signal((0i32, 0i32));
    GridSignals {
        gesture_read,
        gesture_write,
        delta_read,
        delta_write,
    }
}

/// Create mousedown handler for a move or resize handle
pub fn make_on_gesture_start(
    grid: GridSignals,
    item_id: String,
    kind: GestureKind,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || starts_on_control(&ev) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        grid.delta_write.set((0, 0));
        grid.gesture_write.set(Some(GridGesture {
            item_id: item_id.clone(),
            kind,
            start_x: ev.client_x(),
            start_y: ev.client_y(),
        }));
    }
}

/// Bind window handlers that track an active gesture and commit it on mouseup.
/// `metrics` is read on every move so the canvas may be resized mid-session.
pub fn bind_grid_gestures<M, F>(grid: GridSignals, metrics: M, on_commit: F)
where
    M: Fn() -> GridMetrics + 'static,
    F: Fn(String, GestureKind, i32, i32) + 'static,
{
    let on_mousemove = window_event_listener(leptos::ev::mousemove, move |ev: web_sys::MouseEvent| {
        if let Some(gesture) = grid.gesture_read.get_untracked() {
            let delta = metrics().cells(ev.client_x() - gesture.start_x, ev.client_y() - gesture.start_y);
            if grid.delta_read.get_untracked() != delta {
                grid.delta_write.set(delta);
            }
        }
    });

    let on_mouseup = window_event_listener(leptos::ev::mouseup, move |_ev: web_sys::MouseEvent| {
        if let Some(gesture) = grid.gesture_read.get_untracked() {
            let (dx, dy) = grid.delta_read.get_untracked();
            grid.gesture_write.set(None);
            grid.delta_write.set((0, 0));
            if dx != 0 || dy != 0 {
                on_commit(gesture.item_id, gesture.kind, dx, dy);
            }
        }
    });

    on_cleanup(move || {
        on_mousemove.remove();
        on_mouseup.remove();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_needs_more_than_five_pixels() {
        assert!(!exceeds_threshold((10, 10), (15, 15)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }

    #[test]
    fn test_px_to_cells_rounds_to_nearest() {
        assert_eq!(px_to_cells(0, 80.0), 0);
        assert_eq!(px_to_cells(39, 80.0), 0);
        assert_eq!(px_to_cells(41, 80.0), 1);
        assert_eq!(px_to_cells(-130, 80.0), -2);
        assert_eq!(px_to_cells(100, 0.0), 0);
    }

    #[test]
    fn test_metrics_for_width() {
        let m = GridMetrics::for_width(960.0, 12, 30.0);
        assert_eq!(m.col_width_px, 80.0);
        assert_eq!(m.cells(170, -61), (2, -2));
    }
}
