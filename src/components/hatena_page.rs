//! Hatena Articles Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::HatenaArticle;
use crate::mutations;

#[component]
pub fn HatenaPage() -> impl IntoView {
    let ctx = use_app_context();
    let articles = ctx.query.hatena_articles;

    Effect::new(move |_| {
        spawn_local(async move {
            let transport = ctx.transport();
            if let Err(err) = mutations::load(&articles, api::list_hatena_articles(transport.as_ref())).await {
                ctx.report("HATENA", &err);
            }
        });
    });

    view! {
        <section class="aggregator hatena-page">
            <h2>"Hatena"</h2>
            <Show
                when=move || articles.with(Option::is_some)
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <ul class="article-cards">
                    <For
                        each=move || articles.get().unwrap_or_default()
                        key=|article| article.id.clone()
                        children=|article| view! { <HatenaCard article=article /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn HatenaCard(article: HatenaArticle) -> impl IntoView {
    view! {
        <li class="article-card">
            <a href=article.url target="_blank" rel="noopener noreferrer">
                <h3>{article.title}</h3>
            </a>
            <p class="summary">{article.summary}</p>
            <div class="article-meta">
                <span class="author">{article.author}</span>
                <span class="date">{article.published_at}</span>
            </div>
            <div class="tag-chips">
                {article
                    .categories
                    .into_iter()
                    .map(|category| view! { <span class="tag-chip">{category}</span> })
                    .collect_view()}
            </div>
        </li>
    }
}
