//! Error Banner Component
//!
//! Dismissable message for failed calls. Hides itself after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

const AUTO_DISMISS_MS: u32 = 6_000;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();

    Effect::new(move |_| {
        if let Some(message) = ctx.error_message.get() {
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                // a newer message restarts the timer
                if ctx.error_message.get_untracked().as_deref() == Some(message.as_str()) {
                    ctx.dismiss_error();
                }
            });
        }
    });

    view! {
        {move || ctx.error_message.get().map(|message| view! {
            <div class="error-banner" role="alert">
                <span class="error-text">{message}</span>
                <button type="button" class="error-dismiss" on:click=move |_| ctx.dismiss_error()>"×"</button>
            </div>
        })}
    }
}
