//! Floating scroll-to-top button.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::SCROLL_TOP_THRESHOLD;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/scroll_top/scroll_top.module.css");

/// Appears once the page is scrolled past `SCROLL_TOP_THRESHOLD`.
#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let (visible, set_visible) = signal(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        set_visible.set(dom::scroll_y() > SCROLL_TOP_THRESHOLD);
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || visible.get()>
            <button
                class=css::button
                on:click=move |_| dom::scroll_to_top()
                title="Back to top"
                aria-label="Back to top"
            >
                <Icon icon=ic::ARROW_UP />
            </button>
        </Show>
    }
}
