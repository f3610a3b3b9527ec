//! Search field with clear button.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::app::GalleryContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/header/header.module.css");

/// Free-text search. Filters on every keystroke.
#[component]
pub fn SearchField() -> impl IntoView {
    let ctx = use_context::<GalleryContext>().expect("GalleryContext must be provided");

    let search = Signal::derive(move || ctx.filter.with(|f| f.search.clone()));
    let has_text = Signal::derive(move || ctx.filter.with(|f| !f.search.is_empty()));

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        ctx.set_search(input.value());
    };

    view! {
        <div class=css::search>
            <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
            <input
                type="text"
                class=css::searchInput
                placeholder="Search icons..."
                autocomplete="off"
                spellcheck="false"
                prop:value=search
                on:input=handle_input
            />
            <Show when=move || has_text.get()>
                <button
                    class=css::clearButton
                    on:click=move |_| ctx.clear_search()
                    title="Clear search"
                    aria-label="Clear search"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </Show>
        </div>
    }
}
