//! Layout Canvas Component
//!
//! A saved layout's components on the grid. Components are dragged in from
//! the palette, moved and resized in place, and dragged back out to
//! unassign them. Every change goes straight to the backend.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{
    bind_global_mouseup, bind_grid_gestures, create_dnd_signals, create_grid_signals, make_on_mousedown,
    make_on_mouseleave, make_on_target_mouseenter, DropTarget, GestureKind, GridMetrics, GridSignals,
};

use crate::api;
use crate::components::{GridFrame, ROW_HEIGHT_PX};
use crate::context::{use_app_context, AppContext, Page};
use crate::grid::{self, GridItem, GRID_COLS};
use crate::layout_editor::canvas::{apply_positions, drop_position, grid_items, position_updates};
use crate::models::{Layout, LayoutComponent};
use crate::mutations;

/// Refetch the layout and the component list after an assignment change
fn refetch(ctx: AppContext, layout_id: u32) {
    let current = ctx.query.current_layout;
    let components = ctx.query.layout_components;
    spawn_local(async move {
        let transport = ctx.transport();
        match api::get_layout(transport.as_ref(), layout_id).await {
            Ok(layout) => current.set(Some(layout)),
            Err(err) => ctx.report("CANVAS", &err),
        }
        if let Err(err) = mutations::load(&components, api::list_layout_components(transport.as_ref())).await {
            ctx.report("CANVAS", &err);
        }
    });
}

/// Components of `layout_id`, empty while another layout is cached
fn placed_components(layout: &Option<Layout>, layout_id: u32) -> Vec<LayoutComponent> {
    layout
        .as_ref()
        .filter(|layout| layout.id == layout_id)
        .map(|layout| layout.components.clone())
        .unwrap_or_default()
}

#[component]
pub fn LayoutCanvas(layout_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let current = ctx.query.current_layout;
    let components = ctx.query.layout_components;
    let dnd = create_dnd_signals();
    let grid = create_grid_signals();
    let canvas_ref = NodeRef::<Div>::new();

    // A different layout may still be cached from the last visit
    if current.with_untracked(|l| l.as_ref().map(|l| l.id)) != Some(layout_id) {
        current.set(None);
    }
    refetch(ctx, layout_id);

    let on_drop = move |component_id: u32, target: DropTarget| {
        let placed = current.with_untracked(|l| placed_components(l, layout_id));
        let is_placed = placed.iter().any(|c| c.id == component_id);
        match target {
            DropTarget::Canvas(target_layout) if !is_placed => {
                let Some(component) = components.with_untracked(|list| {
                    list.iter().flatten().find(|c| c.id == component_id).cloned()
                }) else {
                    return;
                };
                let position = drop_position(&component, &placed);
                spawn_local(async move {
                    let transport = ctx.transport();
                    match api::assign_to_layout(transport.as_ref(), component_id, target_layout, position).await {
                        Ok(()) => log::info!("[CANVAS] Assigned component {} to layout {}", component_id, target_layout),
                        Err(err) => ctx.report("CANVAS", &err),
                    }
                    refetch(ctx, layout_id);
                });
            }
            DropTarget::Palette if is_placed => {
                spawn_local(async move {
                    let transport = ctx.transport();
                    match api::remove_from_layout(transport.as_ref(), component_id).await {
                        Ok(()) => log::info!("[CANVAS] Removed component {} from layout {}", component_id, layout_id),
                        Err(err) => ctx.report("CANVAS", &err),
                    }
                    refetch(ctx, layout_id);
                });
            }
            _ => {}
        }
    };
    bind_global_mouseup(dnd, on_drop);

    let metrics = move || {
        let width = canvas_ref
            .get_untracked()
            .map(|el| el.client_width() as f64)
            .unwrap_or(0.0);
        GridMetrics::for_width(width, GRID_COLS, ROW_HEIGHT_PX)
    };
    bind_grid_gestures(grid, metrics, move |id, kind, dx, dy| {
        let placed = current.with_untracked(|l| placed_components(l, layout_id));
        let items = grid_items(&placed);
        let arrangement = match kind {
            GestureKind::Move => grid::move_item(&items, &id, dx, dy, GRID_COLS),
            GestureKind::Resize => grid::resize_item(&items, &id, dx, dy, GRID_COLS),
        };
        let updates = position_updates(&placed, &arrangement);
        if updates.is_empty() {
            return;
        }
        current.update(|layout| {
            if let Some(layout) = layout.as_mut() {
                apply_positions(&mut layout.components, &updates);
            }
        });
        spawn_local(async move {
            let transport = ctx.transport();
            let failures = mutations::update_positions(transport.as_ref(), &updates).await;
            if !failures.is_empty() {
                log::warn!("[CANVAS] {} of {} position updates failed", failures.len(), updates.len());
            }
            match api::get_layout(transport.as_ref(), layout_id).await {
                Ok(layout) => current.set(Some(layout)),
                Err(err) => ctx.report("CANVAS", &err),
            }
        });
    });

    let title = move || {
        current.with(|l| l.as_ref().map(|l| l.title.clone()).unwrap_or_else(|| format!("Layout {}", layout_id)))
    };
    let palette = move || {
        let placed: Vec<u32> = current.with(|l| placed_components(l, layout_id)).iter().map(|c| c.id).collect();
        components
            .get()
            .unwrap_or_default()
            .into_iter()
            .filter(|c| !placed.contains(&c.id))
            .collect::<Vec<_>>()
    };
    let placed_ids = move || current.with(|l| placed_components(l, layout_id)).iter().map(|c| c.id).collect::<Vec<_>>();
    let drop_hint = move |target: DropTarget| move || dnd.drop_target_read.get() == Some(target);

    view! {
        <section class="layout-canvas">
            <div class="manager-header">
                <button type="button" class="back-btn" on:click=move |_| ctx.navigate(Page::Layouts)>"← Layouts"</button>
                <h2>{title}</h2>
                <button type="button" class="refresh-btn" on:click=move |_| refetch(ctx, layout_id)>"Refresh"</button>
            </div>
            <div class="canvas-columns" class:dragging=move || dnd.dragging_id_read.get().is_some()>
                <aside
                    class="component-palette"
                    class:hovered=drop_hint(DropTarget::Palette)
                    on:mouseenter=make_on_target_mouseenter(dnd, DropTarget::Palette)
                    on:mouseleave=make_on_mouseleave(dnd)
                >
                    <h3>"Components"</h3>
                    <For
                        each=palette
                        key=|c| (c.id, c.name.clone(), c.component_type.clone())
                        children=move |component| {
                            view! {
                                <div class="palette-entry" on:mousedown=make_on_mousedown(dnd, component.id)>
                                    <span class="palette-name">{component.name}</span>
                                    <span class="component-type">{component.component_type}</span>
                                </div>
                            }
                        }
                    />
                </aside>
                <Show
                    when=move || current.with(|l| l.as_ref().is_some_and(|l| l.id == layout_id))
                    fallback=|| view! { <p class="loading">"Loading..."</p> }
                >
                    <div
                        class="layout-grid"
                        class:hovered=drop_hint(DropTarget::Canvas(layout_id))
                        node_ref=canvas_ref
                        style=format!("grid-template-columns: repeat({}, 1fr); grid-auto-rows: {}px;", GRID_COLS, ROW_HEIGHT_PX)
                        on:mouseenter=make_on_target_mouseenter(dnd, DropTarget::Canvas(layout_id))
                        on:mouseleave=make_on_mouseleave(dnd)
                    >
                        <For
                            each=placed_ids
                            key=|id| *id
                            children=move |id| view! { <PlacedComponent id=id layout_id=layout_id grid=grid dnd=dnd /> }
                        />
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn PlacedComponent(id: u32, layout_id: u32, grid: GridSignals, dnd: leptos_dragdrop::DndSignals) -> impl IntoView {
    let current = use_app_context().query.current_layout;
    let component = Signal::derive(move || {
        current.with(|l| placed_components(l, layout_id)).into_iter().find(|c| c.id == id)
    });
    let item = Signal::derive(move || {
        component
            .get()
            .map(|c| grid_items(std::slice::from_ref(&c)).remove(0))
            .unwrap_or_else(|| GridItem::new(id.to_string(), 0, 0, 1, 1))
    });
    let name = move || component.get().map(|c| c.name).unwrap_or_default();
    let kind = move || component.get().map(|c| c.component_type).unwrap_or_default();
    let content = move || component.get().map(|c| c.content).unwrap_or_default();

    view! {
        <GridFrame item=item grid=grid editable=true selected=false>
            <div class="placed-component">
                <div class="placed-header">
                    <span class="placed-name">{name}</span>
                    <span class="component-type">{kind}</span>
                    <span class="unassign-handle" title="Drag to the palette to remove" on:mousedown=make_on_mousedown(dnd, id)>
                        "⇱"
                    </span>
                </div>
                <p class="placed-content">{content}</p>
            </div>
        </GridFrame>
    }
}
