//! Keyboard Shortcuts
//!
//! Editor shortcuts shared by the article, external API and layout managers.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Meta+E
    OpenEditor,
    /// Meta+S
    Save,
    /// Meta+N
    NewDraft,
    /// Escape
    CloseEditor,
}

/// Map a key press to a shortcut. `meta` is Cmd on macOS, Ctrl elsewhere.
pub fn shortcut_for(key: &str, meta: bool) -> Option<Shortcut> {
    if key == "Escape" {
        return Some(Shortcut::CloseEditor);
    }
    if !meta {
        return None;
    }
    match key.to_ascii_lowercase().as_str() {
        "e" => Some(Shortcut::OpenEditor),
        "s" => Some(Shortcut::Save),
        "n" => Some(Shortcut::NewDraft),
        _ => None,
    }
}

/// Listen for shortcuts while the calling component is mounted
pub fn use_shortcuts<F>(on_shortcut: F)
where
    F: Fn(Shortcut) + 'static,
{
    let handle = window_event_listener(leptos::ev::keydown, move |ev: web_sys::KeyboardEvent| {
        let meta = ev.meta_key() || ev.ctrl_key();
        if let Some(shortcut) = shortcut_for(&ev.key(), meta) {
            if shortcut != Shortcut::CloseEditor {
                ev.prevent_default();
            }
            on_shortcut(shortcut);
        }
    });
    on_cleanup(move || handle.remove());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_letters() {
        assert_eq!(shortcut_for("e", true), Some(Shortcut::OpenEditor));
        assert_eq!(shortcut_for("S", true), Some(Shortcut::Save));
        assert_eq!(shortcut_for("n", true), Some(Shortcut::NewDraft));
        assert_eq!(shortcut_for("x", true), None);
    }

    #[test]
    fn test_plain_letters_are_ignored() {
        assert_eq!(shortcut_for("s", false), None);
        assert_eq!(shortcut_for("Escape", false), Some(Shortcut::CloseEditor));
    }
}
