//! Gallery header.
//!
//! Logo, title, links and theme toggle on the first row; search field and
//! category selectors on the second.

mod category_select;
mod search;

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::GalleryContext;
use crate::components::icons as ic;
use crate::config::{APP_TITLE, COMPACT_LAYOUT_QUERY, HOME_URL, ICON_SOURCE_URL, LOGO_URL, REPO_URL};

pub use category_select::CategorySelect;
pub use search::SearchField;

stylance::import_crate_style!(css, "src/components/header/header.module.css");

/// Sticky page header.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<GalleryContext>().expect("GalleryContext must be provided");

    let is_compact = use_media_query(COMPACT_LAYOUT_QUERY);
    let axes = ctx.index.with_value(|index| index.scheme().axes());

    let controls_class = move || {
        if is_compact.get() {
            format!("{} {}", css::controls, css::controlsCompact)
        } else {
            css::controls.to_string()
        }
    };

    view! {
        <header class=css::header>
            <div class=css::titleRow>
                <a href=HOME_URL>
                    <img class=css::logo src=LOGO_URL alt="AWS Icons Logo" />
                </a>
                <h1 class=css::title>{APP_TITLE}</h1>
                <span class=css::links>
                    <a href=ICON_SOURCE_URL target="_blank" rel="noopener">"Icon Source"</a>
                    " | "
                    <a href=REPO_URL target="_blank" rel="noopener">"GitHub Repo"</a>
                </span>
                <ThemeToggle />
            </div>
            <div class=controls_class>
                <SearchField />
                {axes
                    .iter()
                    .map(|&axis| view! { <CategorySelect axis=axis /> })
                    .collect_view()}
            </div>
        </header>
    }
}

/// Light/dark toggle button.
#[component]
fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<GalleryContext>().expect("GalleryContext must be provided");
    let theme = ctx.theme;

    view! {
        <button
            class=css::iconButton
            on:click=move |_| ctx.toggle_theme()
            title=move || theme.get().toggle_title()
            aria-label="Toggle theme"
        >
            {move || if theme.get().is_dark() {
                view! { <Icon icon=ic::SUN /> }.into_any()
            } else {
                view! { <Icon icon=ic::MOON /> }.into_any()
            }}
        </button>
    }
}
