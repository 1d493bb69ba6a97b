//! The few browser effects the screens need.

use dioxus::prelude::*;

/// Send the browser to an absolute URL outside the app (the payment page).
pub fn open_external(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to open {}: {:?}", url, e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("Cannot open {} outside the browser", url);
    }
}

pub fn copy_to_clipboard(text: &str) {
    // Debug formatting yields a valid JS string literal.
    let _ = document::eval(&format!("navigator.clipboard.writeText({:?})", text));
}
