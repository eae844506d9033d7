//! UI Components
//!
//! Reusable Leptos components.

mod article_manager;
mod auth_form;
mod delete_confirm_button;
mod error_banner;
mod external_api_manager;
mod feed_articles_page;
mod feed_manager;
mod google_books_page;
mod grid_frame;
mod hatena_page;
mod layout_canvas;
mod layout_component_manager;
mod layout_editor_view;
mod layout_manager;
mod log_panel;
mod nav_bar;
mod property_editor;
mod qiita_page;
mod task_manager;
mod template_preview;

pub use article_manager::ArticleManager;
pub use auth_form::AuthForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use external_api_manager::ExternalApiManager;
pub use feed_articles_page::FeedArticlesPage;
pub use feed_manager::FeedManager;
pub use google_books_page::GoogleBooksPage;
pub use grid_frame::{GridFrame, ROW_HEIGHT_PX};
pub use hatena_page::HatenaPage;
pub use layout_canvas::LayoutCanvas;
pub use layout_component_manager::LayoutComponentManager;
pub use layout_editor_view::LayoutEditorView;
pub use layout_manager::LayoutManager;
pub use log_panel::LogPanel;
pub use nav_bar::NavBar;
pub use property_editor::PropertyEditor;
pub use qiita_page::QiitaPage;
pub use task_manager::TaskManager;
pub use template_preview::TemplatePreview;
