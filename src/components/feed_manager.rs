//! Feed Manager Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::{use_app_context, Page};
use crate::drafts::{Draft, EditedFeed};
use crate::models::Feed;
use crate::mutations;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FeedManager() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let feeds = ctx.query.feeds;

    Effect::new(move |_| {
        if feeds.get_untracked().is_none() {
            spawn_local(async move {
                let transport = ctx.transport();
                if let Err(err) = mutations::load(&feeds, api::list_feeds(transport.as_ref())).await {
                    ctx.report("FEEDS", &err);
                }
            });
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = store.edited_feed().get_untracked();
        if !draft.is_valid() {
            return;
        }
        spawn_local(async move {
            let transport = ctx.transport();
            let result = if draft.is_new() {
                mutations::create(&feeds, api::create_feed(transport.as_ref(), &draft)).await
            } else {
                mutations::update(&feeds, api::update_feed(transport.as_ref(), &draft)).await
            };
            match result {
                Ok(feed) => {
                    log::info!("[FEEDS] Saved feed {}", feed.id);
                    store.edited_feed().set(EditedFeed::default());
                }
                Err(err) => ctx.report("FEEDS", &err),
            }
        });
    };

    view! {
        <section class="manager feed-manager">
            <h2>"Feeds"</h2>
            <form class="manager-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || store.edited_feed().get().title
                    on:input=move |ev| store.edited_feed().update(|d| d.title = event_target_value(&ev))
                />
                <input
                    type="url"
                    placeholder="Feed URL (RSS/Atom)"
                    prop:value=move || store.edited_feed().get().url
                    on:input=move |ev| store.edited_feed().update(|d| d.url = event_target_value(&ev))
                />
                <input
                    type="url"
                    placeholder="Site URL"
                    prop:value=move || store.edited_feed().get().site_url
                    on:input=move |ev| store.edited_feed().update(|d| d.site_url = event_target_value(&ev))
                />
                <textarea
                    placeholder="Description"
                    prop:value=move || store.edited_feed().get().description
                    on:input=move |ev| store.edited_feed().update(|d| d.description = event_target_value(&ev))
                ></textarea>
                <button type="submit" disabled=move || !store.edited_feed().get().is_valid()>
                    {move || if store.edited_feed().get().is_new() { "Create" } else { "Update" }}
                </button>
                <Show when=move || !store.edited_feed().get().is_new()>
                    <button type="button" class="cancel-btn" on:click=move |_| store.edited_feed().set(EditedFeed::default())>
                        "Cancel"
                    </button>
                </Show>
            </form>
            <Show
                when=move || feeds.with(Option::is_some)
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <ul class="resource-list">
                    <For
                        each=move || feeds.get().unwrap_or_default()
                        key=|feed| (feed.id, feed.title.clone(), feed.url.clone())
                        children=move |feed| view! { <FeedRow feed=feed /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn FeedRow(feed: Feed) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let feeds = ctx.query.feeds;
    let id = feed.id;
    let draft = EditedFeed::from(&feed);
    let fetched = feed
        .last_fetched_at
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string());

    let on_delete = move || {
        spawn_local(async move {
            let transport = ctx.transport();
            match mutations::remove::<Feed, _>(&feeds, id, api::delete_feed(transport.as_ref(), id)).await {
                Ok(()) => {
                    log::info!("[FEEDS] Deleted feed {}", id);
                    if store.edited_feed().get_untracked().id == id {
                        store.edited_feed().set(EditedFeed::default());
                    }
                    if store.selected_feed_id().get_untracked() == Some(id) {
                        store.selected_feed_id().set(None);
                    }
                }
                Err(err) => ctx.report("FEEDS", &err),
            }
        });
    };

    let show_articles = move |_| {
        store.selected_feed_id().set(Some(id));
        ctx.navigate(Page::FeedArticles);
    };

    view! {
        <li class="resource-row">
            <div class="resource-body">
                <span class="resource-title">{feed.title}</span>
                <a class="resource-link" href=feed.url.clone() target="_blank" rel="noopener noreferrer">{feed.url.clone()}</a>
                <span class="resource-meta">"Last fetched: " {fetched}</span>
            </div>
            <button type="button" class="articles-btn" on:click=show_articles>"Articles"</button>
            <button type="button" class="edit-btn" on:click=move |_| store.edited_feed().set(draft.clone())>
                "Edit"
            </button>
            <DeleteConfirmButton on_confirm=on_delete />
        </li>
    }
}
