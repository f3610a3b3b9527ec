//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, ScrollBehavior, ScrollToOptions, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Current vertical scroll offset in pixels (0 when unavailable).
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Smoothly scroll the page back to the top.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Show a blocking alert dialog.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// Trigger the browser's save-as for `url`, suggesting `filename`.
///
/// Uses a detached anchor with the `download` attribute. Failures are silent.
pub fn download(url: &str, filename: &str) {
    if let Some(document) = window().and_then(|w| w.document())
        && let Ok(element) = document.create_element("a")
        && let Ok(anchor) = element.dyn_into::<HtmlAnchorElement>()
    {
        anchor.set_href(url);
        anchor.set_download(filename);
        anchor.click();
    }
}
