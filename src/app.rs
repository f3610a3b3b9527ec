//! Root application module.
//!
//! Contains the main App component, the GalleryContext definition, and
//! application-level setup logic following Leptos conventions.

use icons_core::{Category, CategoryAxis, CopyFeedback, FilterState, IconAsset, IconIndex};
use leptos::prelude::*;

use crate::catalog;
use crate::components::Gallery;
use crate::config::{CATALOG_PREFIX, CATEGORY_COMBINE, CATEGORY_SCHEME, FONT_FAMILY};
use crate::models::Theme;

// ============================================================================
// GalleryContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read from any child with
/// `use_context::<GalleryContext>()`.
///
/// # Architecture
///
/// - **Index**: built once at startup, never mutated
/// - **Filter**: search text and category selections
/// - **Copy feedback**: which card currently shows "Copied!"
/// - **Theme**: light/dark palette
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap to copy.
#[derive(Clone, Copy)]
pub struct GalleryContext {
    /// Immutable icon index.
    pub index: StoredValue<IconIndex>,
    /// Current filter inputs.
    pub filter: RwSignal<FilterState>,
    /// Filtered icons, recomputed whenever `filter` changes.
    pub visible: Memo<Vec<IconAsset>>,
    /// Copy indicator state.
    pub copied: RwSignal<CopyFeedback>,
    /// Page theme.
    pub theme: RwSignal<Theme>,
}

impl GalleryContext {
    /// Creates the context around an already-built index.
    pub fn new(index: IconIndex) -> Self {
        let filter = RwSignal::new(
            FilterState::for_scheme(index.scheme()).with_combine(CATEGORY_COMBINE),
        );
        let index = StoredValue::new(index);
        let visible = Memo::new(move |_| {
            filter.with(|state| {
                index.with_value(|index| index.filter(state).into_iter().cloned().collect())
            })
        });

        Self {
            index,
            filter,
            visible,
            copied: RwSignal::new(CopyFeedback::new()),
            theme: RwSignal::new(Theme::default()),
        }
    }

    pub fn set_search(&self, search: String) {
        self.filter.update(|f| f.search = search);
    }

    pub fn clear_search(&self) {
        self.filter.update(FilterState::clear_search);
    }

    /// Select a category on one axis.
    pub fn select(&self, axis: CategoryAxis, category: Category) {
        self.filter.update(|f| match axis {
            CategoryAxis::Service => f.service = category,
            CategoryAxis::Resource => f.resource = Some(category),
        });
    }

    /// Current selection on an axis.
    pub fn selected(&self, axis: CategoryAxis) -> Category {
        self.filter.with(|f| match axis {
            CategoryAxis::Service => f.service.clone(),
            CategoryAxis::Resource => f.resource.clone().unwrap_or_default(),
        })
    }

    /// Selectable categories on an axis (`All` first).
    pub fn categories(&self, axis: CategoryAxis) -> Vec<Category> {
        self.index.with_value(|index| index.categories(axis).to_vec())
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Builds the icon index from the embedded catalog
/// - Creates and provides the global GalleryContext
/// - Applies the theme palette as CSS variables
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = GalleryContext::new(catalog::load_index(CATALOG_PREFIX, CATEGORY_SCHEME));
    provide_context(ctx);

    let root_style = move || {
        format!(
            "{} font-family: {}; background: var(--bg); color: var(--text); min-height: 100vh;",
            ctx.theme.get().palette().css_vars(),
            FONT_FAMILY
        )
    };

    view! {
        <div style=root_style>
            <ErrorBoundary
                fallback=|errors| view! {
                    <div style="
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        height: 100vh;
                        padding: 2rem;
                    ">
                        <div style="max-width: 600px; text-align: center;">
                            <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                                "Something went wrong"
                            </h1>
                            <p style="color: var(--text-muted); margin-bottom: 2rem;">
                                "An unexpected error occurred. Please try reloading the page."
                            </p>
                            <ul style="text-align: left; color: #ff6b6b; font-size: 0.9rem;">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                            <button
                                on:click=move |_| {
                                    if let Some(window) = web_sys::window() {
                                        let _ = window.location().reload();
                                    }
                                }
                                style="
                                    background: var(--primary);
                                    color: white;
                                    border: none;
                                    padding: 0.75rem 2rem;
                                    border-radius: 4px;
                                    cursor: pointer;
                                    font-size: 1rem;
                                "
                            >
                                "Reload Page"
                            </button>
                        </div>
                    </div>
                }
            >
                <Gallery />
            </ErrorBoundary>
        </div>
    }
}
