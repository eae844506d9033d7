//! Feed Articles Page
//!
//! Articles collected from every feed, or from the feed selected in the store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::FeedArticle;
use crate::mutations;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FeedArticlesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let feeds = ctx.query.feeds;
    let articles = ctx.query.feed_articles;

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

    // Refetch whenever the selected feed changes
    Effect::new(move |_| {
        let feed_id = store.selected_feed_id().get();
        articles.set(None);
        spawn_local(async move {
            let transport = ctx.transport();
            let request = api::list_feed_articles(transport.as_ref(), feed_id);
            if let Err(err) = mutations::load(&articles, request).await {
                ctx.report("FEED_ARTICLES", &err);
            }
        });
    });

    let on_select = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        store.selected_feed_id().set(value.parse::<u32>().ok());
    };

    view! {
        <section class="aggregator feed-articles-page">
            <div class="manager-header">
                <h2>"Feed articles"</h2>
                <select
                    prop:value=move || store.selected_feed_id().get().map(|id| id.to_string()).unwrap_or_default()
                    on:change=on_select
                >
                    <option value="">"All feeds"</option>
                    <For
                        each=move || feeds.get().unwrap_or_default()
                        key=|feed| (feed.id, feed.title.clone())
                        children=|feed| view! { <option value=feed.id.to_string()>{feed.title}</option> }
                    />
                </select>
            </div>
            <Show
                when=move || articles.with(Option::is_some)
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <Show
                    when=move || articles.with(|list| list.as_ref().is_some_and(|l| !l.is_empty()))
                    fallback=|| view! { <p class="empty">"No articles yet"</p> }
                >
                    <ul class="article-cards">
                        <For
                            each=move || articles.get().unwrap_or_default()
                            key=|article| article.id
                            children=|article| view! { <FeedArticleCard article=article /> }
                        />
                    </ul>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn FeedArticleCard(article: FeedArticle) -> impl IntoView {
    let excerpt = article.excerpt();
    let published = article
        .published_at
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let thumbnail = article.thumbnail_url.clone().filter(|url| !url.is_empty());

    view! {
        <li class="article-card">
            {thumbnail.map(|src| view! { <img class="thumbnail" src=src alt="" /> })}
            <a href=article.url target="_blank" rel="noopener noreferrer">
                <h3>{article.title}</h3>
            </a>
            <p class="summary">{excerpt}</p>
            <div class="article-meta">
                {article.feed_title.map(|title| view! { <span class="feed-title">{title}</span> })}
                {article.author.map(|author| view! { <span class="author">{author}</span> })}
                <span class="date">{published}</span>
                {article.likes_count.map(|likes| view! { <span class="likes">{format!("♥ {}", likes)}</span> })}
            </div>
            <div class="tag-chips">
                {article.tags.into_iter().map(|tag| view! { <span class="tag-chip">{tag}</span> }).collect_view()}
            </div>
        </li>
    }
}
