//! Layout Editor View
//!
//! Template palette, 12-column grid and property editor for composing a
//! page layout locally. Layouts are saved to browser storage.

use chrono::Utc;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_dragdrop::{bind_grid_gestures, create_grid_signals, GestureKind, GridMetrics};

use crate::components::{GridFrame, PropertyEditor, TemplatePreview, ROW_HEIGHT_PX};
use crate::context::use_app_context;
use crate::grid::{GridItem, GRID_COLS};
use crate::layout_editor::persist::{load_saved_layouts, save_layout, BrowserStorage, SavedLayout};
use crate::layout_editor::props::Props;
use crate::layout_editor::templates::{template_by_id, TemplateKind, TEMPLATES};
use crate::layout_editor::{EditorState, Placement};

#[component]
pub fn LayoutEditorView() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(EditorState::default());
    let saved = RwSignal::new(Vec::<SavedLayout>::new());
    let (layout_name, set_layout_name) = signal(String::new());
    let grid = create_grid_signals();
    let canvas_ref = NodeRef::<Div>::new();

    match load_saved_layouts(&BrowserStorage) {
        Ok(layouts) => saved.set(layouts),
        Err(err) => ctx.report("EDITOR", &err),
    }

    let metrics = move || {
        let width = canvas_ref
            .get_untracked()
            .map(|el| el.client_width() as f64)
            .unwrap_or(0.0);
        GridMetrics::for_width(width, GRID_COLS, ROW_HEIGHT_PX)
    };
    bind_grid_gestures(grid, metrics, move |id, kind, dx, dy| {
        log::debug!("[EDITOR] {:?} {} by ({}, {})", kind, id, dx, dy);
        state.update(|s| match kind {
            GestureKind::Move => s.move_by(&id, dx, dy),
            GestureKind::Resize => s.resize_by(&id, dx, dy),
        });
    });

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = layout_name.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        let snapshot = state.with_untracked(|s| s.snapshot(&name, Utc::now()));
        match save_layout(&BrowserStorage, snapshot.clone()) {
            Ok(_) => {
                saved.update(|list| list.push(snapshot));
                set_layout_name.set(String::new());
            }
            Err(err) => ctx.report("EDITOR", &err),
        }
    };

    let preview = move || state.with(|s| s.preview);
    let placement_keys = move || state.with(EditorState::render_keys);
    let selected_title = Signal::derive(move || {
        state.with(|s| {
            s.selected_placement()
                .and_then(Placement::template)
                .map(|t| t.name.to_string())
                .unwrap_or_default()
        })
    });
    let selected_props = Signal::derive(move || {
        state.with(|s| s.selected_placement().map(|p| p.props.clone()).unwrap_or_default())
    });

    view! {
        <section class="layout-editor">
            <div class="manager-header">
                <h2>"Layout editor"</h2>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=preview
                        on:change=move |ev| {
                            let on = event_target_checked(&ev);
                            state.update(|s| {
                                s.preview = on;
                                if on {
                                    s.select(None);
                                }
                            });
                        }
                    />
                    "Preview"
                </label>
            </div>
            <div class="editor-columns" class:preview=preview>
                <Show when=move || !preview()>
                    <aside class="template-palette">
                        <h3>"Templates"</h3>
                        {TEMPLATES
                            .iter()
                            .map(|template| {
                                view! {
                                    <button
                                        type="button"
                                        class="template-btn"
                                        title=template.description
                                        on:click=move |_| {
                                            let id = state.try_update(|s| s.add(template));
                                            log::info!("[EDITOR] Added {} as {:?}", template.id, id);
                                        }
                                    >
                                        <span class="template-name">{template.name}</span>
                                        <span class="template-size">{format!("{}x{}", template.size.0, template.size.1)}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </aside>
                </Show>
                <div
                    class="layout-grid"
                    node_ref=canvas_ref
                    style=format!("grid-template-columns: repeat({}, 1fr); grid-auto-rows: {}px;", GRID_COLS, ROW_HEIGHT_PX)
                    on:click=move |ev| {
                        if ev.target() == ev.current_target() {
                            state.update(|s| s.select(None));
                        }
                    }
                >
                    <For
                        each=placement_keys
                        key=|key| key.clone()
                        children=move |(id, template_id)| {
                            view! { <PlacedTemplate id=id template_id=template_id state=state grid=grid /> }
                        }
                    />
                </div>
                <Show when=move || !preview() && state.with(|s| s.selected.is_some())>
                    <aside class="property-panel">
                        <PropertyEditor
                            title=selected_title
                            props=selected_props
                            on_change=move |props: Props| {
                                state.update(|s| {
                                    if let Some(id) = s.selected.clone() {
                                        s.set_props(&id, props);
                                    }
                                })
                            }
                            on_reset=move || {
                                state.update(|s| {
                                    if let Some(id) = s.selected.clone() {
                                        s.reset_props(&id);
                                    }
                                })
                            }
                        />
                        <button
                            type="button"
                            class="remove-btn"
                            on:click=move |_| {
                                state.update(|s| {
                                    if let Some(id) = s.selected.clone() {
                                        s.remove(&id);
                                    }
                                })
                            }
                        >
                            "Remove component"
                        </button>
                    </aside>
                </Show>
            </div>
            <form class="save-layout-form" on:submit=on_save>
                <input
                    type="text"
                    placeholder="Layout name"
                    prop:value=move || layout_name.get()
                    on:input=move |ev| set_layout_name.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || layout_name.get().trim().is_empty()>"Save layout"</button>
            </form>
            <div class="saved-layouts">
                <h3>"Saved layouts"</h3>
                <Show
                    when=move || saved.with(|list| !list.is_empty())
                    fallback=|| view! { <p class="empty">"Nothing saved yet"</p> }
                >
                    <ul>
                        {move || {
                            saved
                                .get()
                                .into_iter()
                                .map(|layout| {
                                    let created = layout.created_at.format("%Y-%m-%d %H:%M").to_string();
                                    let count = layout.items.len();
                                    let name = layout.name.clone();
                                    view! {
                                        <li class="saved-layout">
                                            <span class="saved-name">{name}</span>
                                            <span class="saved-meta">{format!("{} components, {}", count, created)}</span>
                                            <button
                                                type="button"
                                                on:click=move |_| {
                                                    log::info!("[EDITOR] Loaded layout {:?}", layout.name);
                                                    state.update(|s| s.load(&layout));
                                                }
                                            >
                                                "Load"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn PlacedTemplate(
    id: String,
    template_id: String,
    state: RwSignal<EditorState>,
    grid: leptos_dragdrop::GridSignals,
) -> impl IntoView {
    let kind = template_by_id(&template_id).map(|t| t.kind).unwrap_or(TemplateKind::Main);

    let item = Signal::derive({
        let id = id.clone();
        move || {
            state.with(|s| {
                s.placements
                    .iter()
                    .find(|p| p.id == id)
                    .map(Placement::grid_item)
                    .unwrap_or_else(|| GridItem::new(id.clone(), 0, 0, 1, 1))
            })
        }
    });
    let props = Signal::derive({
        let id = id.clone();
        move || {
            state.with(|s| {
                s.placements
                    .iter()
                    .find(|p| p.id == id)
                    .map(|p| p.props.clone())
                    .unwrap_or_default()
            })
        }
    });
    let selected = Signal::derive({
        let id = id.clone();
        move || state.with(|s| s.selected.as_deref() == Some(id.as_str()))
    });
    let editable = Signal::derive(move || state.with(|s| !s.preview));
    let on_select = Callback::new(move |_: ()| {
        if !state.with_untracked(|s| s.preview) {
            state.update(|s| s.select(Some(&id)));
        }
    });

    view! {
        <GridFrame item=item grid=grid editable=editable selected=selected on_select=on_select>
            <TemplatePreview kind=kind props=props />
        </GridFrame>
    }
}
