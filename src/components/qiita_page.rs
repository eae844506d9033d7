//! Qiita Articles Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::QiitaArticle;
use crate::mutations;

#[component]
pub fn QiitaPage() -> impl IntoView {
    let ctx = use_app_context();
    let articles = ctx.query.qiita_articles;

    // Stale on arrival: refetch every time the page mounts
    Effect::new(move |_| {
        spawn_local(async move {
            let transport = ctx.transport();
            if let Err(err) = mutations::load(&articles, api::list_qiita_articles(transport.as_ref())).await {
                ctx.report("QIITA", &err);
            }
        });
    });

    view! {
        <section class="aggregator qiita-page">
            <h2>"Qiita"</h2>
            <Show
                when=move || articles.with(Option::is_some)
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <ul class="article-cards">
                    <For
                        each=move || articles.get().unwrap_or_default()
                        key=|article| (article.id.clone(), article.likes_count)
                        children=|article| view! { <QiitaCard article=article /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn QiitaCard(article: QiitaArticle) -> impl IntoView {
    let author = if article.user.name.is_empty() { article.user.id.clone() } else { article.user.name.clone() };
    let avatar = Some(article.user.profile_image_url.clone()).filter(|url| !url.is_empty());
    view! {
        <li class="article-card">
            <a href=article.url target="_blank" rel="noopener noreferrer">
                <h3>{article.title}</h3>
            </a>
            <div class="article-meta">
                {avatar.map(|src| view! { <img class="avatar" src=src alt="" /> })}
                <span class="author">{author}</span>
                <span class="date">{article.created_at}</span>
                <span class="likes">{format!("♥ {}", article.likes_count)}</span>
            </div>
            <div class="tag-chips">
                {article
                    .tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag-chip">{tag.name}</span> })
                    .collect_view()}
            </div>
        </li>
    }
}
