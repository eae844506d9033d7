//! Recent Activity Panel
//!
//! Shows the tail of the in-memory log.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move || set_lines.set(rolling_logger::recent_lines());

    view! {
        <aside class="log-panel">
            <button
                type="button"
                class="log-toggle"
                on:click=move |_| {
                    if !open.get_untracked() {
                        refresh();
                    }
                    set_open.update(|o| *o = !*o);
                }
            >
                {move || if open.get() { "Hide recent activity" } else { "Recent activity" }}
            </button>
            <Show when=move || open.get()>
                <button type="button" class="log-refresh" on:click=move |_| refresh()>"Refresh"</button>
                <pre class="log-lines">
                    {move || lines.get().into_iter().rev().map(|line| view! { <div>{line}</div> }).collect_view()}
                </pre>
            </Show>
        </aside>
    }
}
