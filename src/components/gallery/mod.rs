//! Icon gallery page.
//!
//! Components:
//! - [`Gallery`] - Page layout: header, result count, grid, scroll-to-top
//! - [`IconCard`] - One icon with copy and download actions

mod card;

use icons_core::IconAsset;
use leptos::prelude::*;

use crate::app::GalleryContext;
use crate::components::header::Header;
use crate::components::scroll_top::ScrollTopButton;

pub use card::IconCard;

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

/// Result counter text, e.g. "3 AWS icon(s) found".
fn count_label(count: usize) -> String {
    format!("{} AWS icon(s) found", count)
}

/// Cards are keyed by url: a card survives filtering and only its position changes.
fn card_key(icon: &IconAsset) -> String {
    icon.url.clone()
}

/// Full gallery page.
#[component]
pub fn Gallery() -> impl IntoView {
    let ctx = use_context::<GalleryContext>().expect("GalleryContext must be provided");
    let visible = ctx.visible;

    view! {
        <div class=css::page>
            <Header />
            <main class=css::main>
                <h2 class=css::count>{move || visible.with(|icons| count_label(icons.len()))}</h2>
                <div class=css::grid role="list" aria-label="Icons">
                    <ForEnumerate
                        each=move || visible.get()
                        key=card_key
                        children=move |position, icon| {
                            view! { <IconCard position=position icon=icon /> }
                        }
                    />
                </div>
            </main>
            <ScrollTopButton />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_key_stable_across_filtering() {
        use icons_core::{CategoryScheme, FilterState, IconIndex};

        let index = IconIndex::build(
            [
                ("a_Compute/Arch_Amazon-EC2_48.png", "icons/a_Compute/Arch_Amazon-EC2_48.png"),
                ("a_Compute/Arch_AWS-Lambda_48.png", "icons/a_Compute/Arch_AWS-Lambda_48.png"),
            ],
            CategoryScheme::split(),
        );
        let all = index.filter(&FilterState::for_scheme(index.scheme()));
        let narrowed = index.filter(&FilterState::for_scheme(index.scheme()).with_search("lambda"));

        // Lambda moves from position 1 to 0 but keeps its key
        assert_eq!(card_key(all[1]), card_key(narrowed[0]));
        assert_ne!(card_key(all[0]), card_key(all[1]));
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0 AWS icon(s) found");
        assert_eq!(count_label(1), "1 AWS icon(s) found");
        assert_eq!(count_label(742), "742 AWS icon(s) found");
    }
}
