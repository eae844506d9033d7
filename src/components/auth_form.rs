//! Auth Form Component
//!
//! Login and signup. A successful signup logs in with the same credentials.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::drafts::EditedCredential;

#[component]
pub fn AuthForm() -> impl IntoView {
    let ctx = use_app_context();
    let (credential, set_credential) = signal(EditedCredential::default());
    let (is_login, set_is_login) = signal(true);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = credential.get_untracked();
        if !draft.is_valid() || pending.get_untracked() {
            return;
        }
        let login_only = is_login.get_untracked();
        set_pending.set(true);

        spawn_local(async move {
            let transport = ctx.transport();
            let credential = draft.to_credential();
            let result = if login_only {
                api::login(transport.as_ref(), &credential).await
            } else {
                api::signup_and_login(transport.as_ref(), &credential).await
            };
            set_pending.set(false);
            match result {
                Ok(()) => {
                    log::info!("[AUTH] Signed in");
                    set_credential.set(EditedCredential::default());
                    ctx.signed_in();
                }
                Err(err) => ctx.report("AUTH", &err),
            }
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-header">
                <span class="auth-title">"my tech blog"</span>
            </div>
            <h2>{move || if is_login.get() { "Login" } else { "Create a new account" }}</h2>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    name="email"
                    type="email"
                    autofocus=true
                    placeholder="Email address"
                    prop:value=move || credential.get().email
                    on:input=move |ev| set_credential.update(|c| c.email = event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    name="password"
                    type="password"
                    placeholder="Password"
                    prop:value=move || credential.get().password
                    on:input=move |ev| set_credential.update(|c| c.password = event_target_value(&ev))
                />
                <button
                    class="auth-button"
                    type="submit"
                    disabled=move || !credential.get().is_valid() || pending.get()
                >
                    {move || if is_login.get() { "Login" } else { "Sign Up" }}
                </button>
            </form>
            <button type="button" class="auth-switch" on:click=move |_| set_is_login.update(|v| *v = !*v)>
                {move || if is_login.get() { "Need an account? Sign up" } else { "Have an account? Log in" }}
            </button>
        </div>
    }
}
