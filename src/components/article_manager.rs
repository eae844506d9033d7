//! Article Manager Component
//!
//! List of articles with a collapsible editor. Meta+E opens the editor,
//! Meta+S saves, Meta+N starts a new draft and Escape closes it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::drafts::{Draft, EditedArticle};
use crate::models::Article;
use crate::mutations;
use crate::shortcuts::{use_shortcuts, Shortcut};
use crate::store::{use_app_store, AppStateStoreFields};

fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[component]
pub fn ArticleManager() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let articles = ctx.query.articles;

    Effect::new(move |_| {
        if articles.get_untracked().is_none() {
            spawn_local(async move {
                let transport = ctx.transport();
                if let Err(err) = mutations::load(&articles, api::list_articles(transport.as_ref())).await {
                    ctx.report("ARTICLES", &err);
                }
            });
        }
    });

    let save = move || {
        let draft = store.edited_article().get_untracked();
        if !draft.is_valid() {
            return;
        }
        spawn_local(async move {
            let transport = ctx.transport();
            let result = if draft.is_new() {
                mutations::create(&articles, api::create_article(transport.as_ref(), &draft)).await
            } else {
                mutations::update(&articles, api::update_article(transport.as_ref(), &draft)).await
            };
            match result {
                Ok(article) => {
                    log::info!("[ARTICLES] Saved article {}", article.id);
                    store.edited_article().set(EditedArticle::default());
                    store.article_editing().set(false);
                }
                Err(err) => ctx.report("ARTICLES", &err),
            }
        });
    };

    use_shortcuts(move |shortcut| match shortcut {
        Shortcut::OpenEditor => store.article_editing().set(true),
        Shortcut::Save => {
            if store.article_editing().get_untracked() {
                save();
            }
        }
        Shortcut::NewDraft => {
            store.edited_article().set(EditedArticle::default());
            store.article_editing().set(true);
        }
        Shortcut::CloseEditor => store.article_editing().set(false),
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        save();
    };

    let draft_tags = move || split_tags(&store.edited_article().get().tags);

    view! {
        <section class="manager article-manager">
            <div class="manager-header">
                <h2>"Articles"</h2>
                <button
                    type="button"
                    class="new-btn"
                    on:click=move |_| {
                        store.edited_article().set(EditedArticle::default());
                        store.article_editing().set(true);
                    }
                >
                    "New article"
                </button>
            </div>
            <Show when=move || store.article_editing().get()>
                <form class="manager-form article-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=move || store.edited_article().get().title
                        on:input=move |ev| store.edited_article().update(|d| d.title = event_target_value(&ev))
                    />
                    <textarea
                        class="article-content"
                        placeholder="Content (markdown)"
                        prop:value=move || store.edited_article().get().content
                        on:input=move |ev| store.edited_article().update(|d| d.content = event_target_value(&ev))
                    ></textarea>
                    <input
                        type="text"
                        placeholder="Tags, comma separated"
                        prop:value=move || store.edited_article().get().tags
                        on:input=move |ev| store.edited_article().update(|d| d.tags = event_target_value(&ev))
                    />
                    <div class="tag-chips">
                        <For
                            each=draft_tags
                            key=|tag| tag.clone()
                            children=|tag| view! { <span class="tag-chip">{tag}</span> }
                        />
                    </div>
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || store.edited_article().get().published
                            on:change=move |ev| store.edited_article().update(|d| d.published = event_target_checked(&ev))
                        />
                        "Published"
                    </label>
                    <div class="form-actions">
                        <button type="submit" disabled=move || !store.edited_article().get().is_valid()>
                            {move || if store.edited_article().get().is_new() { "Create" } else { "Update" }}
                        </button>
                        <button type="button" class="cancel-btn" on:click=move |_| store.article_editing().set(false)>
                            "Close"
                        </button>
                    </div>
                </form>
            </Show>
            <Show
                when=move || articles.with(Option::is_some)
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <ul class="resource-list">
                    <For
                        each=move || articles.get().unwrap_or_default()
                        key=|article| (article.id, article.title.clone(), article.published, article.tags.clone())
                        children=move |article| view! { <ArticleRow article=article /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn ArticleRow(article: Article) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let articles = ctx.query.articles;
    let id = article.id;
    let draft = EditedArticle::from(&article);
    let tags: Vec<String> = article.tag_list().into_iter().map(str::to_string).collect();
    let status = if article.published { "Published" } else { "Draft" };

    let on_delete = move || {
        spawn_local(async move {
            let transport = ctx.transport();
            match mutations::remove::<Article, _>(&articles, id, api::delete_article(transport.as_ref(), id)).await {
                Ok(()) => {
                    log::info!("[ARTICLES] Deleted article {}", id);
                    if store.edited_article().get_untracked().id == id {
                        store.edited_article().set(EditedArticle::default());
                        store.article_editing().set(false);
                    }
                }
                Err(err) => ctx.report("ARTICLES", &err),
            }
        });
    };

    let on_edit = move |_| {
        store.edited_article().set(draft.clone());
        store.article_editing().set(true);
    };

    view! {
        <li class="resource-row">
            <div class="resource-body">
                <span class="resource-title">{article.title}</span>
                <span class=if article.published { "status published" } else { "status draft" }>{status}</span>
                <div class="tag-chips">
                    {tags.into_iter().map(|tag| view! { <span class="tag-chip">{tag}</span> }).collect_view()}
                </div>
            </div>
            <button type="button" class="edit-btn" on:click=on_edit>"Edit"</button>
            <DeleteConfirmButton on_confirm=on_delete />
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags_drops_blanks() {
        assert_eq!(split_tags(" rust, wasm ,,leptos "), vec!["rust", "wasm", "leptos"]);
        assert!(split_tags(" , ").is_empty());
    }
}
