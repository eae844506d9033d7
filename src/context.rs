//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, Transport};
use crate::cache::QueryClient;
use crate::config::AppConfig;
use crate::error::{ApiError, ErrorAction};

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Tasks,
    Feeds,
    FeedArticles,
    Articles,
    ExternalApis,
    Layouts,
    LayoutComponents,
    /// API-backed canvas of one layout
    LayoutCanvas(u32),
    /// Local template editor
    LayoutEditor,
    Qiita,
    Hatena,
    GoogleBooks,
}

/// Navigation entries, in menu order
pub const NAV_PAGES: &[(Page, &str)] = &[
    (Page::Tasks, "Tasks"),
    (Page::Articles, "Articles"),
    (Page::Feeds, "Feeds"),
    (Page::FeedArticles, "Feed articles"),
    (Page::ExternalApis, "External APIs"),
    (Page::Layouts, "Layouts"),
    (Page::LayoutComponents, "Components"),
    (Page::LayoutEditor, "Layout editor"),
    (Page::Qiita, "Qiita"),
    (Page::Hatena, "Hatena"),
    (Page::GoogleBooks, "Google Books"),
];

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<AppConfig>,
    transport: StoredValue<Rc<dyn Transport>, LocalStorage>,
    /// Cached server lists
    pub query: QueryClient,
    /// Current screen - read
    pub page: ReadSignal<Page>,
    /// Current screen - write
    set_page: WriteSignal<Page>,
    /// Session established - read
    pub authenticated: ReadSignal<bool>,
    /// Session established - write
    set_authenticated: WriteSignal<bool>,
    /// Message shown in the error banner - read
    pub error_message: ReadSignal<Option<String>>,
    /// Message shown in the error banner - write
    set_error_message: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(config: AppConfig, transport: Rc<dyn Transport>) -> Self {
        let (page, set_page) = signal(Page::Tasks);
        let (authenticated, set_authenticated) = signal(false);
        let (error_message, set_error_message) = signal(None::<String>);
        Self {
            config: StoredValue::new(config),
            transport: StoredValue::new_local(transport),
            query: QueryClient::new(),
            page,
            set_page,
            authenticated,
            set_authenticated,
            error_message,
            set_error_message,
        }
    }

    pub fn transport(&self) -> Rc<dyn Transport> {
        self.transport.get_value()
    }

    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }

    pub fn show_error(&self, message: impl Into<String>) {
        self.set_error_message.set(Some(message.into()));
    }

    pub fn dismiss_error(&self) {
        self.set_error_message.set(None);
    }

    /// Session cookie is set
    pub fn signed_in(&self) {
        self.set_authenticated.set(true);
        self.navigate(Page::Tasks);
    }

    /// Drop cached data and go back to the auth screen
    pub fn signed_out(&self) {
        self.query.clear();
        self.set_authenticated.set(false);
    }

    /// Fetch a fresh CSRF token in the background
    pub fn refresh_csrf(&self) {
        let ctx = *self;
        spawn_local(async move {
            let transport = ctx.transport();
            let csrf_path = ctx.config.with_value(|c| c.csrf_path.clone());
            match api::refresh_csrf_token(transport.as_ref(), &csrf_path).await {
                Ok(()) => log::info!("[AUTH] CSRF token refreshed"),
                Err(err) => {
                    log::error!("[AUTH] CSRF token fetch failed: {}", err);
                    ctx.show_error(err.message());
                }
            }
        });
    }

    /// Skip the auth screen when an earlier session cookie is still accepted
    pub fn restore_session(&self) {
        let ctx = *self;
        spawn_local(async move {
            let transport = ctx.transport();
            match api::session_active(transport.as_ref()).await {
                Ok(true) => {
                    log::info!("[AUTH] Existing session restored");
                    ctx.signed_in();
                }
                Ok(false) => log::debug!("[AUTH] No active session"),
                Err(err) => log::warn!("[AUTH] Session check failed: {}", err),
            }
        });
    }

    /// Log a failed call and react to it
    pub fn report(&self, area: &str, err: &ApiError) {
        log::error!("[{}] {}", area, err);
        match err.action() {
            ErrorAction::RefreshCsrf => self.refresh_csrf(),
            ErrorAction::ReturnToLogin => self.signed_out(),
            ErrorAction::Show(message) => self.show_error(message),
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
