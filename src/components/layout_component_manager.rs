//! Layout Component Manager Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::drafts::{Draft, EditedLayoutComponent, COMPONENT_TYPES};
use crate::models::LayoutComponent;
use crate::mutations;
use crate::store::{use_app_store, AppStateStoreFields};

fn parse_size(value: &str, fallback: u32) -> u32 {
    value.trim().parse::<u32>().ok().filter(|n| *n > 0).unwrap_or(fallback)
}

#[component]
pub fn LayoutComponentManager() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let components = ctx.query.layout_components;

    let refresh = move || {
        spawn_local(async move {
            let transport = ctx.transport();
            let request = api::list_layout_components(transport.as_ref());
            if let Err(err) = mutations::load(&components, request).await {
                ctx.report("COMPONENTS", &err);
            }
        });
    };

    Effect::new(move |_| {
        if components.get_untracked().is_none() {
            refresh();
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = store.edited_layout_component().get_untracked();
        if !draft.is_valid() {
            return;
        }
        spawn_local(async move {
            let transport = ctx.transport();
            let result = if draft.is_new() {
                mutations::create(&components, api::create_layout_component(transport.as_ref(), &draft)).await
            } else {
                mutations::update(&components, api::update_layout_component(transport.as_ref(), &draft)).await
            };
            match result {
                Ok(component) => {
                    log::info!("[COMPONENTS] Saved component {}", component.id);
                    store.edited_layout_component().set(EditedLayoutComponent::default());
                }
                Err(err) => ctx.report("COMPONENTS", &err),
            }
        });
    };

    view! {
        <section class="manager layout-component-manager">
            <div class="manager-header">
                <h2>"Layout components"</h2>
                <button type="button" class="refresh-btn" on:click=move |_| refresh()>"Refresh"</button>
            </div>
            <form class="manager-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || store.edited_layout_component().get().name
                    on:input=move |ev| store.edited_layout_component().update(|d| d.name = event_target_value(&ev))
                />
                <select
                    prop:value=move || store.edited_layout_component().get().component_type
                    on:change=move |ev| store.edited_layout_component().update(|d| d.component_type = event_target_value(&ev))
                >
                    <option value="">"Select a type"</option>
                    {COMPONENT_TYPES
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
                <textarea
                    placeholder="Content"
                    prop:value=move || store.edited_layout_component().get().content
                    on:input=move |ev| store.edited_layout_component().update(|d| d.content = event_target_value(&ev))
                ></textarea>
                <label>
                    "Width"
                    <input
                        type="number"
                        min="1"
                        max="12"
                        prop:value=move || store.edited_layout_component().get().width.to_string()
                        on:input=move |ev| {
                            store.edited_layout_component().update(|d| d.width = parse_size(&event_target_value(&ev), d.width))
                        }
                    />
                </label>
                <label>
                    "Height"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || store.edited_layout_component().get().height.to_string()
                        on:input=move |ev| {
                            store.edited_layout_component().update(|d| d.height = parse_size(&event_target_value(&ev), d.height))
                        }
                    />
                </label>
                <div class="form-actions">
                    <button type="submit" disabled=move || !store.edited_layout_component().get().is_valid()>
                        {move || if store.edited_layout_component().get().is_new() { "Create" } else { "Update" }}
                    </button>
                    <Show when=move || !store.edited_layout_component().get().is_new()>
                        <button
                            type="button"
                            class="cancel-btn"
                            on:click=move |_| store.edited_layout_component().set(EditedLayoutComponent::default())
                        >
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>
            <Show
                when=move || components.with(Option::is_some)
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <ul class="resource-list">
                    <For
                        each=move || components.get().unwrap_or_default()
                        key=|c| (c.id, c.name.clone(), c.component_type.clone(), c.content.clone(), c.layout_id)
                        children=move |component| view! { <LayoutComponentRow component=component /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn LayoutComponentRow(component: LayoutComponent) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let components = ctx.query.layout_components;
    let id = component.id;
    let draft = EditedLayoutComponent::from(&component);
    let placement = match component.layout_id {
        Some(layout_id) => format!("layout {} at ({}, {}) {}x{}", layout_id, component.x, component.y, component.width, component.height),
        None => "unassigned".to_string(),
    };

    let on_delete = move || {
        spawn_local(async move {
            let transport = ctx.transport();
            let request = api::delete_layout_component(transport.as_ref(), id);
            match mutations::remove::<LayoutComponent, _>(&components, id, request).await {
                Ok(()) => {
                    log::info!("[COMPONENTS] Deleted component {}", id);
                    if store.edited_layout_component().get_untracked().id == id {
                        store.edited_layout_component().set(EditedLayoutComponent::default());
                    }
                }
                Err(err) => ctx.report("COMPONENTS", &err),
            }
        });
    };

    view! {
        <li class="resource-row">
            <div class="resource-body">
                <span class="resource-title">{component.name}</span>
                <span class="component-type">{component.component_type}</span>
                <span class="resource-meta">{placement}</span>
            </div>
            <button type="button" class="edit-btn" on:click=move |_| store.edited_layout_component().set(draft.clone())>
                "Edit"
            </button>
            <DeleteConfirmButton on_confirm=on_delete />
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_keeps_previous_on_bad_input() {
        assert_eq!(parse_size("4", 2), 4);
        assert_eq!(parse_size(" 0 ", 2), 2);
        assert_eq!(parse_size("abc", 3), 3);
    }
}
