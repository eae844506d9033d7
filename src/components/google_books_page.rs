//! Google Books Page
//!
//! Search volumes through the backend, inspect one, and import it into the
//! book library.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::{Book, GoogleBookVolume};
use crate::mutations;
use crate::store::{store_reset_search, store_set_search_results, use_app_store, AppStateStoreFields};

#[component]
pub fn GoogleBooksPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let books = ctx.query.books;
    let (searching, set_searching) = signal(false);

    Effect::new(move |_| {
        if books.get_untracked().is_none() {
            spawn_local(async move {
                let transport = ctx.transport();
                if let Err(err) = mutations::load(&books, api::list_books(transport.as_ref())).await {
                    ctx.report("BOOKS", &err);
                }
            });
        }
    });

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let query = store.search_query().get_untracked();
        set_searching.set(true);
        spawn_local(async move {
            let transport = ctx.transport();
            match api::search_google_books(transport.as_ref(), &query).await {
                Ok(Some(response)) => {
                    log::info!("[BOOKS] {} of {} volumes for {:?}", response.items.len(), response.total_items, query);
                    store_set_search_results(&store, response.items);
                }
                Ok(None) => log::debug!("[BOOKS] Blank query, search skipped"),
                Err(err) => ctx.report("BOOKS", &err),
            }
            set_searching.set(false);
        });
    };

    view! {
        <section class="aggregator google-books-page">
            <h2>"Google Books"</h2>
            <form class="search-form" on:submit=on_search>
                <input
                    type="search"
                    placeholder="Title, author or ISBN"
                    prop:value=move || store.search_query().get()
                    on:input=move |ev| store.search_query().set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || searching.get() || store.search_query().get().trim().is_empty()>
                    {move || if searching.get() { "Searching..." } else { "Search" }}
                </button>
                <button type="button" class="cancel-btn" on:click=move |_| store_reset_search(&store)>"Clear"</button>
            </form>
            <div class="books-layout">
                <ul class="search-results">
                    <For
                        each=move || store.search_results().get()
                        key=|volume| volume.id.clone()
                        children=|volume| view! { <VolumeRow volume=volume /> }
                    />
                </ul>
                {move || store.selected_book().get().map(|volume| view! { <VolumeDetail volume=volume /> })}
            </div>
            <h3>"Library"</h3>
            <Show
                when=move || books.with(Option::is_some)
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <ul class="book-list">
                    <For
                        each=move || books.get().unwrap_or_default()
                        key=|book| book.id
                        children=|book| view! { <BookRow book=book /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn VolumeRow(volume: GoogleBookVolume) -> impl IntoView {
    let store = use_app_store();
    let id = volume.id.clone();
    let is_selected = move || store.selected_book().with(|selected| selected.as_ref().is_some_and(|b| b.id == id));
    let authors = volume.authors.join(", ");
    let title = volume.title.clone();

    view! {
        <li
            class="search-result"
            class:selected=is_selected
            on:click=move |_| store.selected_book().set(Some(volume.clone()))
        >
            <span class="book-title">{title}</span>
            <span class="book-authors">{authors}</span>
        </li>
    }
}

#[component]
fn VolumeDetail(volume: GoogleBookVolume) -> impl IntoView {
    let ctx = use_app_context();
    let books = ctx.query.books;
    let (importing, set_importing) = signal(false);
    let volume_id = volume.id.clone();

    let on_import = move |_| {
        let volume_id = volume_id.clone();
        set_importing.set(true);
        spawn_local(async move {
            let transport = ctx.transport();
            match mutations::create(&books, api::import_google_book(transport.as_ref(), &volume_id)).await {
                Ok(book) => log::info!("[BOOKS] Imported {} as book {}", volume_id, book.id),
                Err(err) => ctx.report("BOOKS", &err),
            }
            set_importing.set(false);
        });
    };

    view! {
        <aside class="book-detail">
            {volume.image_url.map(|src| view! { <img class="book-cover" src=src alt="" /> })}
            <h3>{volume.title}</h3>
            <p class="book-authors">{volume.authors.join(", ")}</p>
            {volume.published_date.map(|date| view! { <p class="book-date">{date}</p> })}
            {volume.isbn.map(|isbn| view! { <p class="book-isbn">"ISBN " {isbn}</p> })}
            {volume.description.map(|text| view! { <p class="book-description">{text}</p> })}
            <button type="button" class="import-btn" disabled=move || importing.get() on:click=on_import>
                {move || if importing.get() { "Importing..." } else { "Import" }}
            </button>
        </aside>
    }
}

#[component]
fn BookRow(book: Book) -> impl IntoView {
    let thumbnail = Some(book.thumbnail_url).filter(|url| !url.is_empty());
    view! {
        <li class="book-row">
            {thumbnail.map(|src| view! { <img class="book-thumb" src=src alt="" /> })}
            <span class="book-title">{book.title}</span>
            <span class="book-authors">{book.author}</span>
            <span class="book-meta">{format!("{} pages", book.page_count)}</span>
        </li>
    }
}
