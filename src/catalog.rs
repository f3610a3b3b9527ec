//! Embedded icon catalog.
//!
//! `build.rs` walks `assets/icons` and writes the `(path, url)` pairs into
//! `OUT_DIR`; this module turns them into the immutable [`IconIndex`].

use icons_core::{CategoryScheme, IconIndex};

include!(concat!(env!("OUT_DIR"), "/icon_catalog_generated.rs"));

/// Build the index from the embedded catalog.
///
/// Only paths under `prefix` are included.
pub fn load_index(prefix: &str, scheme: CategoryScheme) -> IconIndex {
    let pairs = ICON_CATALOG
        .iter()
        .filter(|(path, _)| path.starts_with(prefix))
        .copied();
    let index = IconIndex::build(pairs, scheme);

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(
        &format!(
            "Indexed {} icons in {} folders",
            index.len(),
            index.folders().count()
        )
        .into(),
    );

    index
}
