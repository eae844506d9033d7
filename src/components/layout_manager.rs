//! Layout Manager Component
//!
//! Layout records plus the entry point into each layout's canvas.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::{use_app_context, Page};
use crate::drafts::{Draft, EditedLayout};
use crate::models::Layout;
use crate::mutations;
use crate::shortcuts::{use_shortcuts, Shortcut};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LayoutManager() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let layouts = ctx.query.layouts;

    Effect::new(move |_| {
        if layouts.get_untracked().is_none() {
            spawn_local(async move {
                let transport = ctx.transport();
                if let Err(err) = mutations::load(&layouts, api::list_layouts(transport.as_ref())).await {
                    ctx.report("LAYOUTS", &err);
                }
            });
        }
    });

    let save = move || {
        let draft = store.edited_layout().get_untracked();
        if !draft.is_valid() {
            return;
        }
        spawn_local(async move {
            let transport = ctx.transport();
            let result = if draft.is_new() {
                mutations::create(&layouts, api::create_layout(transport.as_ref(), &draft)).await
            } else {
                mutations::update(&layouts, api::update_layout(transport.as_ref(), &draft)).await
            };
            match result {
                Ok(layout) => {
                    log::info!("[LAYOUTS] Saved layout {}", layout.id);
                    store.edited_layout().set(EditedLayout::default());
                    store.layout_editing().set(false);
                }
                Err(err) => ctx.report("LAYOUTS", &err),
            }
        });
    };

    use_shortcuts(move |shortcut| match shortcut {
        Shortcut::OpenEditor => store.layout_editing().set(true),
        Shortcut::Save => {
            if store.layout_editing().get_untracked() {
                save();
            }
        }
        Shortcut::NewDraft => {
            store.edited_layout().set(EditedLayout::default());
            store.layout_editing().set(true);
        }
        Shortcut::CloseEditor => store.layout_editing().set(false),
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        save();
    };

    view! {
        <section class="manager layout-manager">
            <div class="manager-header">
                <h2>"Layouts"</h2>
                <button
                    type="button"
                    class="new-btn"
                    on:click=move |_| {
                        store.edited_layout().set(EditedLayout::default());
                        store.layout_editing().set(true);
                    }
                >
                    "New layout"
                </button>
            </div>
            <Show when=move || store.layout_editing().get()>
                <form class="manager-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=move || store.edited_layout().get().title
                        on:input=move |ev| store.edited_layout().update(|d| d.title = event_target_value(&ev))
                    />
                    <div class="form-actions">
                        <button type="submit" disabled=move || !store.edited_layout().get().is_valid()>
                            {move || if store.edited_layout().get().is_new() { "Create" } else { "Update" }}
                        </button>
                        <button type="button" class="cancel-btn" on:click=move |_| store.layout_editing().set(false)>
                            "Close"
                        </button>
                    </div>
                </form>
            </Show>
            <Show
                when=move || layouts.with(Option::is_some)
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <ul class="resource-list">
                    <For
                        each=move || layouts.get().unwrap_or_default()
                        key=|layout| (layout.id, layout.title.clone(), layout.components.len())
                        children=move |layout| view! { <LayoutRow layout=layout /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn LayoutRow(layout: Layout) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let layouts = ctx.query.layouts;
    let id = layout.id;
    let draft = EditedLayout::from(&layout);
    let component_count = layout.components.len();

    let on_delete = move || {
        spawn_local(async move {
            let transport = ctx.transport();
            match mutations::remove::<Layout, _>(&layouts, id, api::delete_layout(transport.as_ref(), id)).await {
                Ok(()) => {
                    log::info!("[LAYOUTS] Deleted layout {}", id);
                    if store.edited_layout().get_untracked().id == id {
                        store.edited_layout().set(EditedLayout::default());
                        store.layout_editing().set(false);
                    }
                }
                Err(err) => ctx.report("LAYOUTS", &err),
            }
        });
    };

    let on_edit = move |_| {
        store.edited_layout().set(draft.clone());
        store.layout_editing().set(true);
    };

    view! {
        <li class="resource-row">
            <div class="resource-body">
                <span class="resource-title">{layout.title}</span>
                <span class="resource-meta">{format!("{} components", component_count)}</span>
            </div>
            <button type="button" class="open-btn" on:click=move |_| ctx.navigate(Page::LayoutCanvas(id))>
                "Open canvas"
            </button>
            <button type="button" class="edit-btn" on:click=on_edit>"Edit"</button>
            <DeleteConfirmButton on_confirm=on_delete />
        </li>
    }
}
