//! Search and category filtering over the master sequence.
//!
//! Filtering never reorders: the output is always a subsequence of the input.

use crate::asset::IconAsset;
use crate::category::{Category, CategoryScheme};

/// How two constrained category axes are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryCombine {
    /// The icon's folder must equal both selections. Two different concrete
    /// selections therefore match nothing.
    #[default]
    Intersect,
    /// The icon's folder may equal either selection.
    Union,
}

/// Transient filter inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text search, matched case-insensitively
    pub search: String,
    /// Axis 1 selection
    pub service: Category,
    /// Axis 2 selection; `None` under the single-axis scheme
    pub resource: Option<Category>,
    /// Combination rule when both axes are constrained
    pub combine: CategoryCombine,
}

impl FilterState {
    /// Default state for a scheme: empty search, every axis on `All`.
    pub fn for_scheme(scheme: CategoryScheme) -> Self {
        Self {
            resource: scheme.is_split().then_some(Category::All),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_service(mut self, category: Category) -> Self {
        self.service = category;
        self
    }

    pub fn with_resource(mut self, category: Category) -> Self {
        self.resource = Some(category);
        self
    }

    pub fn with_combine(mut self, combine: CategoryCombine) -> Self {
        self.combine = combine;
        self
    }

    /// Clear the search text, keeping category selections.
    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// True when nothing would be filtered out.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty()
            && self.service.is_all()
            && self.resource.as_ref().is_none_or(Category::is_all)
    }

    fn matches_category(&self, folder: &str) -> bool {
        let service = self.service.folder();
        let resource = self.resource.as_ref().and_then(Category::folder);

        match (service, resource) {
            (None, None) => true,
            (Some(only), None) | (None, Some(only)) => folder == only,
            (Some(service), Some(resource)) => match self.combine {
                CategoryCombine::Intersect => folder == service && folder == resource,
                CategoryCombine::Union => folder == service || folder == resource,
            },
        }
    }
}

/// Filter a master sequence, preserving its order.
pub fn filter_icons<'a>(icons: &'a [IconAsset], state: &FilterState) -> Vec<&'a IconAsset> {
    if state.is_unfiltered() {
        return icons.iter().collect();
    }

    let needle = state.search.to_lowercase();
    icons
        .iter()
        .filter(|icon| icon.matches_text(&needle) && state.matches_category(&icon.folder))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icons() -> Vec<IconAsset> {
        vec![
            IconAsset::new("a_compute", "ec2-instance.png", "1"),
            IconAsset::new("a_compute", "lambda.png", "2"),
            IconAsset::new("b_storage", "s3-bucket.png", "3"),
            IconAsset::new("general", "Arch-Cloud.png", "4"),
        ]
    }

    fn names<'a>(result: &[&'a IconAsset]) -> Vec<&'a str> {
        result.iter().map(|i| i.filename.as_str()).collect()
    }

    fn folder(name: &str) -> Category {
        Category::Folder(name.to_string())
    }

    #[test]
    fn test_default_state_passes_everything() {
        let icons = icons();
        let state = FilterState::for_scheme(CategoryScheme::split());
        assert!(state.is_unfiltered());
        assert_eq!(filter_icons(&icons, &state).len(), icons.len());
    }

    #[test]
    fn test_search_case_insensitive() {
        let icons = icons();
        let state = FilterState::default().with_search("LAMBDA");
        assert_eq!(names(&filter_icons(&icons, &state)), vec!["lambda.png"]);
    }

    #[test]
    fn test_search_matches_display_name() {
        let icons = icons();
        // "ec2 instance" only exists in the display name
        let state = FilterState::default().with_search("ec2 inst");
        assert_eq!(names(&filter_icons(&icons, &state)), vec!["ec2-instance.png"]);
    }

    #[test]
    fn test_search_matches_raw_filename() {
        let icons = icons();
        let state = FilterState::default().with_search("s3-b");
        assert_eq!(names(&filter_icons(&icons, &state)), vec!["s3-bucket.png"]);
    }

    #[test]
    fn test_single_axis_constrained() {
        let icons = icons();
        let state = FilterState::for_scheme(CategoryScheme::split()).with_service(folder("a_compute"));
        assert_eq!(
            names(&filter_icons(&icons, &state)),
            vec!["ec2-instance.png", "lambda.png"]
        );

        let state = FilterState::for_scheme(CategoryScheme::split()).with_resource(folder("b_storage"));
        assert_eq!(names(&filter_icons(&icons, &state)), vec!["s3-bucket.png"]);
    }

    #[test]
    fn test_both_axes_different_values_intersect_to_empty() {
        let icons = icons();
        let state = FilterState::for_scheme(CategoryScheme::split())
            .with_service(folder("a_compute"))
            .with_resource(folder("b_storage"));
        assert!(filter_icons(&icons, &state).is_empty());
    }

    #[test]
    fn test_both_axes_same_value_intersect() {
        let icons = icons();
        let state = FilterState::default()
            .with_service(folder("a_compute"))
            .with_resource(folder("a_compute"));
        assert_eq!(filter_icons(&icons, &state).len(), 2);
    }

    #[test]
    fn test_both_axes_union() {
        let icons = icons();
        let state = FilterState::default()
            .with_service(folder("a_compute"))
            .with_resource(folder("b_storage"))
            .with_combine(CategoryCombine::Union);
        assert_eq!(
            names(&filter_icons(&icons, &state)),
            vec!["ec2-instance.png", "lambda.png", "s3-bucket.png"]
        );
    }

    #[test]
    fn test_single_scheme_ignores_resource_axis() {
        let icons = icons();
        let state = FilterState::for_scheme(CategoryScheme::Single).with_service(folder("general"));
        assert_eq!(state.resource, None);
        assert_eq!(names(&filter_icons(&icons, &state)), vec!["Arch-Cloud.png"]);
    }

    #[test]
    fn test_text_and_category_both_required() {
        let icons = icons();
        let state = FilterState::default()
            .with_search("lambda")
            .with_service(folder("b_storage"));
        assert!(filter_icons(&icons, &state).is_empty());
    }

    #[test]
    fn test_unfiltered_only_without_any_constraint() {
        let base = FilterState::for_scheme(CategoryScheme::split());
        assert!(base.is_unfiltered());
        assert!(!base.clone().with_search(" ").is_unfiltered());
        assert!(!base.clone().with_service(folder("a_compute")).is_unfiltered());
        assert!(!base.with_resource(folder("b_storage")).is_unfiltered());
    }

    #[test]
    fn test_unfiltered_keeps_every_icon_in_order() {
        let icons = icons();
        let state = FilterState::for_scheme(CategoryScheme::Single);
        let result = filter_icons(&icons, &state);
        let expected: Vec<&IconAsset> = icons.iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_clear_search_keeps_categories() {
        let mut state = FilterState::for_scheme(CategoryScheme::split())
            .with_search("s3")
            .with_service(folder("a_compute"))
            .with_resource(folder("b_storage"));

        state.clear_search();
        assert!(state.search.is_empty());
        assert_eq!(state.service, folder("a_compute"));
        assert_eq!(state.resource, Some(folder("b_storage")));
        assert!(!state.is_unfiltered());
    }
}
