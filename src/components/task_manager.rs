//! Task Manager Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::drafts::{Draft, EditedTask};
use crate::models::Task;
use crate::mutations;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskManager() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let tasks = ctx.query.tasks;

    // Load once; mutations keep the list current afterwards
    Effect::new(move |_| {
        if tasks.get_untracked().is_none() {
            spawn_local(async move {
                let transport = ctx.transport();
                if let Err(err) = mutations::load(&tasks, api::list_tasks(transport.as_ref())).await {
                    ctx.report("TASKS", &err);
                }
            });
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = store.edited_task().get_untracked();
        if !draft.is_valid() {
            return;
        }
        spawn_local(async move {
            let transport = ctx.transport();
            let result = if draft.is_new() {
                mutations::create(&tasks, api::create_task(transport.as_ref(), &draft)).await
            } else {
                mutations::update(&tasks, api::update_task(transport.as_ref(), &draft)).await
            };
            match result {
                Ok(task) => {
                    log::info!("[TASKS] Saved task {}", task.id);
                    store.edited_task().set(EditedTask::default());
                }
                Err(err) => ctx.report("TASKS", &err),
            }
        });
    };

    view! {
        <section class="manager task-manager">
            <h2>"Tasks"</h2>
            <form class="manager-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Title?"
                    prop:value=move || store.edited_task().get().title
                    on:input=move |ev| store.edited_task().update(|d| d.title = event_target_value(&ev))
                />
                <button type="submit" disabled=move || !store.edited_task().get().is_valid()>
                    {move || if store.edited_task().get().is_new() { "Create" } else { "Update" }}
                </button>
            </form>
            <Show
                when=move || tasks.with(Option::is_some)
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <ul class="resource-list">
                    <For
                        each=move || tasks.get().unwrap_or_default()
                        key=|task| (task.id, task.title.clone())
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let tasks = ctx.query.tasks;
    let id = task.id;
    let draft = EditedTask::from(&task);

    let on_delete = move || {
        spawn_local(async move {
            let transport = ctx.transport();
            match mutations::remove::<Task, _>(&tasks, id, api::delete_task(transport.as_ref(), id)).await {
                Ok(()) => {
                    log::info!("[TASKS] Deleted task {}", id);
                    if store.edited_task().get_untracked().id == id {
                        store.edited_task().set(EditedTask::default());
                    }
                }
                Err(err) => ctx.report("TASKS", &err),
            }
        });
    };

    view! {
        <li class="resource-row">
            <span class="resource-title">{task.title}</span>
            <button type="button" class="edit-btn" on:click=move |_| store.edited_task().set(draft.clone())>
                "Edit"
            </button>
            <DeleteConfirmButton on_confirm=on_delete />
        </li>
    }
}
