//! Immutable icon index built once from the discovered asset catalog.

use std::collections::{BTreeMap, BTreeSet};

use crate::asset::IconAsset;
use crate::category::{Category, CategoryAxis, CategoryScheme};
use crate::collate::collate;
use crate::filter::{filter_icons, FilterState};

/// Sorted, categorized view of every icon asset.
///
/// Built with [`IconIndex::build`] and never mutated afterwards. The master
/// sequence is ordered by folder, then by filename within a folder, both in
/// case-insensitive reading order (see [`collate`]); ties on identical
/// filenames fall back to the url so the order does not depend on how the
/// catalog was enumerated. Category lists keep plain byte order.
#[derive(Clone, Debug)]
pub struct IconIndex {
    scheme: CategoryScheme,
    by_folder: BTreeMap<String, Vec<IconAsset>>,
    folder_order: Vec<String>,
    icons: Vec<IconAsset>,
    services: Vec<Category>,
    resources: Vec<Category>,
}

impl IconIndex {
    /// Build the index from `(path, url)` pairs.
    ///
    /// Paths without a parent segment are skipped; every other path contributes
    /// exactly one icon.
    pub fn build<I, P, U>(pairs: I, scheme: CategoryScheme) -> Self
    where
        I: IntoIterator<Item = (P, U)>,
        P: AsRef<str>,
        U: Into<String>,
    {
        let assets = pairs
            .into_iter()
            .filter_map(|(path, url)| IconAsset::from_path(path.as_ref(), url));
        Self::from_assets(assets, scheme)
    }

    /// Build the index from already-constructed assets.
    pub fn from_assets(assets: impl IntoIterator<Item = IconAsset>, scheme: CategoryScheme) -> Self {
        let mut by_folder: BTreeMap<String, Vec<IconAsset>> = BTreeMap::new();
        let mut services = BTreeSet::new();
        let mut resources = BTreeSet::new();

        for asset in assets {
            match scheme.classify(&asset.folder) {
                Some(CategoryAxis::Service) => {
                    services.insert(asset.folder.clone());
                }
                Some(CategoryAxis::Resource) => {
                    resources.insert(asset.folder.clone());
                }
                None => {}
            }
            by_folder.entry(asset.folder.clone()).or_default().push(asset);
        }

        for icons in by_folder.values_mut() {
            icons.sort_by(|a, b| collate(&a.filename, &b.filename).then_with(|| a.url.cmp(&b.url)));
        }

        let mut folder_order: Vec<String> = by_folder.keys().cloned().collect();
        folder_order.sort_by(|a, b| collate(a, b));

        let icons = folder_order
            .iter()
            .flat_map(|folder| &by_folder[folder])
            .cloned()
            .collect();

        Self {
            scheme,
            by_folder,
            folder_order,
            icons,
            services: with_all(services),
            resources: with_all(resources),
        }
    }

    /// An index with no icons.
    pub fn empty(scheme: CategoryScheme) -> Self {
        Self::from_assets(std::iter::empty(), scheme)
    }

    /// Scheme used to derive the categories.
    pub fn scheme(&self) -> CategoryScheme {
        self.scheme
    }

    /// The master sequence.
    pub fn icons(&self) -> &[IconAsset] {
        &self.icons
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Icons grouped by folder, in master-sequence order.
    pub fn folders(&self) -> impl Iterator<Item = (&str, &[IconAsset])> {
        self.folder_order
            .iter()
            .map(|folder| (folder.as_str(), self.folder(folder)))
    }

    /// Icons in a single folder, in master-sequence order.
    pub fn folder(&self, folder: &str) -> &[IconAsset] {
        self.by_folder.get(folder).map(Vec::as_slice).unwrap_or_default()
    }

    /// Selectable categories for an axis, `All` first.
    ///
    /// The resource axis is always just `[All]` under the single-axis scheme.
    pub fn categories(&self, axis: CategoryAxis) -> &[Category] {
        match axis {
            CategoryAxis::Service => &self.services,
            CategoryAxis::Resource => &self.resources,
        }
    }

    /// Apply a filter to the master sequence.
    pub fn filter(&self, state: &FilterState) -> Vec<&IconAsset> {
        filter_icons(&self.icons, state)
    }
}

impl Default for IconIndex {
    fn default() -> Self {
        Self::empty(CategoryScheme::default())
    }
}

fn with_all(folders: BTreeSet<String>) -> Vec<Category> {
    std::iter::once(Category::All)
        .chain(folders.into_iter().map(Category::Folder))
        .collect()
}
