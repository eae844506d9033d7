//! External API Manager Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::drafts::{Draft, EditedExternalApi};
use crate::models::ExternalApi;
use crate::mutations;
use crate::shortcuts::{use_shortcuts, Shortcut};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ExternalApiManager() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let external_apis = ctx.query.external_apis;

    Effect::new(move |_| {
        if external_apis.get_untracked().is_none() {
            spawn_local(async move {
                let transport = ctx.transport();
                if let Err(err) = mutations::load(&external_apis, api::list_external_apis(transport.as_ref())).await {
                    ctx.report("EXTERNAL_API", &err);
                }
            });
        }
    });

    let save = move || {
        let draft = store.edited_external_api().get_untracked();
        if !draft.is_valid() {
            return;
        }
        spawn_local(async move {
            let transport = ctx.transport();
            let result = if draft.is_new() {
                mutations::create(&external_apis, api::create_external_api(transport.as_ref(), &draft)).await
            } else {
                mutations::update(&external_apis, api::update_external_api(transport.as_ref(), &draft)).await
            };
            match result {
                Ok(saved) => {
                    log::info!("[EXTERNAL_API] Saved {} ({})", saved.name, saved.id);
                    store.edited_external_api().set(EditedExternalApi::default());
                    store.external_api_editing().set(false);
                }
                Err(err) => ctx.report("EXTERNAL_API", &err),
            }
        });
    };

    use_shortcuts(move |shortcut| match shortcut {
        Shortcut::OpenEditor => store.external_api_editing().set(true),
        Shortcut::Save => {
            if store.external_api_editing().get_untracked() {
                save();
            }
        }
        Shortcut::NewDraft => {
            store.edited_external_api().set(EditedExternalApi::default());
            store.external_api_editing().set(true);
        }
        Shortcut::CloseEditor => store.external_api_editing().set(false),
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        save();
    };

    view! {
        <section class="manager external-api-manager">
            <div class="manager-header">
                <h2>"External APIs"</h2>
                <button
                    type="button"
                    class="new-btn"
                    on:click=move |_| {
                        store.edited_external_api().set(EditedExternalApi::default());
                        store.external_api_editing().set(true);
                    }
                >
                    "New API"
                </button>
            </div>
            <Show when=move || store.external_api_editing().get()>
                <form class="manager-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || store.edited_external_api().get().name
                        on:input=move |ev| store.edited_external_api().update(|d| d.name = event_target_value(&ev))
                    />
                    <input
                        type="url"
                        placeholder="Base URL"
                        prop:value=move || store.edited_external_api().get().base_url
                        on:input=move |ev| store.edited_external_api().update(|d| d.base_url = event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Description"
                        prop:value=move || store.edited_external_api().get().description
                        on:input=move |ev| store.edited_external_api().update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                    <div class="form-actions">
                        <button type="submit" disabled=move || !store.edited_external_api().get().is_valid()>
                            {move || if store.edited_external_api().get().is_new() { "Create" } else { "Update" }}
                        </button>
                        <button type="button" class="cancel-btn" on:click=move |_| store.external_api_editing().set(false)>
                            "Close"
                        </button>
                    </div>
                </form>
            </Show>
            <Show
                when=move || external_apis.with(Option::is_some)
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <ul class="resource-list">
                    <For
                        each=move || external_apis.get().unwrap_or_default()
                        key=|api| (api.id, api.name.clone(), api.base_url.clone(), api.description.clone())
                        children=move |api| view! { <ExternalApiRow external_api=api /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn ExternalApiRow(external_api: ExternalApi) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let external_apis = ctx.query.external_apis;
    let id = external_api.id;
    let draft = EditedExternalApi::from(&external_api);

    let on_delete = move || {
        spawn_local(async move {
            let transport = ctx.transport();
            let request = api::delete_external_api(transport.as_ref(), id);
            match mutations::remove::<ExternalApi, _>(&external_apis, id, request).await {
                Ok(()) => {
                    log::info!("[EXTERNAL_API] Deleted {}", id);
                    if store.edited_external_api().get_untracked().id == id {
                        store.edited_external_api().set(EditedExternalApi::default());
                        store.external_api_editing().set(false);
                    }
                }
                Err(err) => ctx.report("EXTERNAL_API", &err),
            }
        });
    };

    let on_edit = move |_| {
        store.edited_external_api().set(draft.clone());
        store.external_api_editing().set(true);
    };

    view! {
        <li class="resource-row">
            <div class="resource-body">
                <span class="resource-title">{external_api.name}</span>
                <span class="resource-link">{external_api.base_url}</span>
                <p class="resource-meta">{external_api.description}</p>
            </div>
            <button type="button" class="edit-btn" on:click=on_edit>"Edit"</button>
            <DeleteConfirmButton on_confirm=on_delete />
        </li>
    }
}
