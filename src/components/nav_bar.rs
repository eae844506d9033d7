//! Navigation Bar Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_app_context, Page, NAV_PAGES};
use crate::store::{store_reset, use_app_store};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let logout = move |_| {
        spawn_local(async move {
            let transport = ctx.transport();
            match api::logout(transport.as_ref()).await {
                Ok(()) => {
                    log::info!("[AUTH] Logged out");
                    store_reset(&store);
                    ctx.signed_out();
                }
                Err(err) => ctx.report("AUTH", &err),
            }
        });
    };

    let is_active = move |page: Page| match (ctx.page.get(), page) {
        (Page::LayoutCanvas(_), Page::Layouts) => true,
        (current, page) => current == page,
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-title">"my tech blog"</span>
            {NAV_PAGES.iter().map(|(page, label)| {
                let page = *page;
                view! {
                    <button
                        type="button"
                        class=move || if is_active(page) { "nav-btn active" } else { "nav-btn" }
                        on:click=move |_| ctx.navigate(page)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
            <button type="button" class="nav-btn logout-btn" on:click=logout>"Logout"</button>
        </nav>
    }
}
