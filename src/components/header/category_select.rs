//! Category dropdown for one axis.

use icons_core::{Category, CategoryAxis};
use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use crate::app::GalleryContext;

stylance::import_crate_style!(css, "src/components/header/header.module.css");

/// Single-select dropdown listing `All` plus every category on `axis`.
///
/// Options show the formatted label; the selected value is the folder key.
#[component]
pub fn CategorySelect(axis: CategoryAxis) -> impl IntoView {
    let ctx = use_context::<GalleryContext>().expect("GalleryContext must be provided");

    let options = ctx.categories(axis);
    let selected = Signal::derive(move || ctx.selected(axis).key().to_string());

    let handle_change = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let select = target.unchecked_into::<web_sys::HtmlSelectElement>();
        ctx.select(axis, Category::parse(&select.value()));
    };

    view! {
        <label class=css::select>
            <span class=css::selectLabel>{axis.title()}</span>
            <select class=css::selectInput prop:value=selected on:change=handle_change>
                {options
                    .into_iter()
                    .map(|category| {
                        let key = category.key().to_string();
                        let is_selected = {
                            let key = key.clone();
                            move || selected.get() == key
                        };
                        view! {
                            <option value=key selected=is_selected>
                                {category.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
