//! Icon card with copy and download actions.

use icons_core::{FontTier, IconAsset, copy_image};
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::GalleryContext;
use crate::components::icons as ic;
use crate::config::{COPY_FAILED_MESSAGE, COPY_FEEDBACK_MS};
use crate::utils::{BrowserClipboard, HttpImageFetcher, dom};

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

/// Copy an image and show the "Copied!" indicator at `position`.
///
/// Fetch and clipboard failures both end in the same alert. The indicator is
/// cleared after `COPY_FEEDBACK_MS` unless a newer copy has replaced it.
fn start_copy(ctx: GalleryContext, url: String, position: usize) {
    spawn_local(async move {
        match copy_image(&HttpImageFetcher, &BrowserClipboard, &url).await {
            Ok(()) => {
                let Some(token) = ctx.copied.try_update(|f| f.mark_copied(position)) else {
                    return;
                };
                gloo_timers::future::TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                ctx.copied.try_update(|f| f.expire(token));
            }
            Err(err) => {
                web_sys::console::warn_1(&format!("Copy of {} failed: {}", url, err).into());
                dom::alert(COPY_FAILED_MESSAGE);
            }
        }
    });
}

/// One icon in the grid.
#[component]
pub fn IconCard(
    /// Position in the filtered sequence; updates as filtering moves the card
    position: ReadSignal<usize>,
    icon: IconAsset,
) -> impl IntoView {
    let ctx = use_context::<GalleryContext>().expect("GalleryContext must be provided");

    let is_copied = Signal::derive(move || ctx.copied.with(|f| f.is_copied(position.get())));
    let font_size = FontTier::for_name(&icon.display_name).css_size();

    let copy_url = icon.url.clone();
    let on_copy = move |_: leptos::ev::MouseEvent| {
        start_copy(ctx, copy_url.clone(), position.get_untracked());
    };

    let download_url = icon.url.clone();
    let download_name = icon.filename.clone();
    let on_download = move |_: leptos::ev::MouseEvent| {
        dom::download(&download_url, &download_name);
    };

    view! {
        <div class=css::card role="listitem">
            <div class=css::cardTitle>
                <span class=css::cardName style=format!("font-size: {}", font_size)>
                    {icon.display_name.clone()}
                </span>
            </div>
            <img class=css::cardImage src=icon.url.clone() alt=icon.filename.clone() loading="lazy" />
            <div class=css::cardActions>
                <button class=css::copyButton on:click=on_copy>
                    {move || if is_copied.get() {
                        view! { <Icon icon=ic::CHECK /> " Copied!" }.into_any()
                    } else {
                        view! { <Icon icon=ic::COPY /> " Copy" }.into_any()
                    }}
                </button>
                <button class=css::downloadButton on:click=on_download>
                    <Icon icon=ic::DOWNLOAD />
                    " Download"
                </button>
            </div>
        </div>
    }
}
