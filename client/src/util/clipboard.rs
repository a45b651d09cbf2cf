//! Copy-to-clipboard with a confirmation notice.
//!
//! TRADE-OFFS
//! ==========
//! Clipboard access is best-effort browser-only behavior: a denied or missing
//! clipboard is logged and otherwise ignored, and SSR paths no-op. The notice
//! is shown regardless.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState, notify};

/// Confirmation shown when no custom message is given.
pub const DEFAULT_COPY_MESSAGE: &str = "скопировано";

/// Somewhere text can be copied to.
pub trait Clipboard {
    fn write_text(&self, text: &str);
}

/// `navigator.clipboard` in the browser; no-op elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    fn write_text(&self, text: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise: js_sys::Promise = window.navigator().clipboard().write_text(text);
            leptos::task::spawn_local(async move {
                if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    log::warn!("clipboard write failed: {e:?}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    }
}

/// Copy `text` via `clipboard` and show `message` (or [`DEFAULT_COPY_MESSAGE`]).
pub fn copy_with(clipboard: &dyn Clipboard, text: &str, message: Option<&str>, notices: RwSignal<NoticeState>) {
    clipboard.write_text(text);
    notify(notices, NoticeKind::Success, message.unwrap_or(DEFAULT_COPY_MESSAGE));
}

/// Copy `text` to the system clipboard and show a success notice.
pub fn copy_to_clipboard(text: &str, message: Option<&str>, notices: RwSignal<NoticeState>) {
    copy_with(&BrowserClipboard, text, message, notices);
}
