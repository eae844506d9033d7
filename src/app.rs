//! Techblog Frontend App
//!
//! Root component: provides context and switches between the auth screen
//! and the page selected in the navigation bar.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{HttpTransport, Transport};
use crate::components::{
    ArticleManager, AuthForm, ErrorBanner, ExternalApiManager, FeedArticlesPage, FeedManager, GoogleBooksPage,
    HatenaPage, LayoutCanvas, LayoutComponentManager, LayoutEditorView, LayoutManager, LogPanel, NavBar, QiitaPage,
    TaskManager,
};
use crate::config::AppConfig;
use crate::context::{AppContext, Page};
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let transport: Rc<dyn Transport> = Rc::new(HttpTransport::new(config.api_url.clone()));
    let ctx = AppContext::new(config, transport);

    // Provide context to all children
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    // One CSRF token per session; refreshed again only when the backend rejects it
    ctx.refresh_csrf();
    ctx.restore_session();

    let page_view = move || match ctx.page.get() {
        Page::Tasks => view! { <TaskManager /> }.into_any(),
        Page::Feeds => view! { <FeedManager /> }.into_any(),
        Page::FeedArticles => view! { <FeedArticlesPage /> }.into_any(),
        Page::Articles => view! { <ArticleManager /> }.into_any(),
        Page::ExternalApis => view! { <ExternalApiManager /> }.into_any(),
        Page::Layouts => view! { <LayoutManager /> }.into_any(),
        Page::LayoutComponents => view! { <LayoutComponentManager /> }.into_any(),
        Page::LayoutCanvas(layout_id) => view! { <LayoutCanvas layout_id=layout_id /> }.into_any(),
        Page::LayoutEditor => view! { <LayoutEditorView /> }.into_any(),
        Page::Qiita => view! { <QiitaPage /> }.into_any(),
        Page::Hatena => view! { <HatenaPage /> }.into_any(),
        Page::GoogleBooks => view! { <GoogleBooksPage /> }.into_any(),
    };

    view! {
        <div class="app-layout">
            <ErrorBanner />
            <Show when=move || ctx.authenticated.get() fallback=|| view! { <AuthForm /> }>
                <NavBar />
                <main class="main-content">{page_view}</main>
            </Show>
            <LogPanel />
        </div>
    }
}
