//! View state for the single-page layout.
//!
//! Everything here is transient and session-local: which project (if any)
//! is open in detail mode, which category filter is applied to the project
//! grid, and whether the dark theme is on. All transitions are total.

use std::fmt;

use crate::catalog::{Catalog, Category, Project};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    /// Anything outside the filter buttons. Matches no project.
    Unlisted(String),
}

impl CategoryFilter {
    /// The filter buttons, in display order.
    pub const OPTIONS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Research),
        CategoryFilter::Only(Category::WebApps),
        CategoryFilter::Only(Category::MlModels),
    ];

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
            CategoryFilter::Unlisted(s) => s,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => project.category == *c,
            CategoryFilter::Unlisted(_) => false,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == "All" {
            return Self::All;
        }
        Category::ALL
            .into_iter()
            .find(|c| c.label() == value)
            .map(Self::Only)
            .unwrap_or_else(|| Self::Unlisted(value.to_string()))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class applied to the root element.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    active_project: Option<String>,
    filter: CategoryFilter,
    theme: Theme,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn active_project_id(&self) -> Option<&str> {
        self.active_project.as_deref()
    }

    /// True whenever a selection is held, even one the catalog can't resolve.
    pub fn is_detail_mode(&self) -> bool {
        self.active_project.is_some()
    }

    pub fn set_category_filter(&mut self, filter: impl Into<CategoryFilter>) {
        self.filter = filter.into();
        log::debug!("project filter set to {}", self.filter);
    }

    pub fn select_project(&mut self, id: impl Into<String>) {
        let id = id.into();
        log::debug!("selected project {id}");
        self.active_project = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.active_project = None;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        log::debug!("theme toggled to {:?}", self.theme);
    }

    /// Catalog entries passing the current filter, in catalog order.
    pub fn visible_projects<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Project> {
        catalog
            .projects()
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    pub fn active_project_detail<'a>(&self, catalog: &'a Catalog) -> Option<&'a Project> {
        self.active_project.as_deref().and_then(|id| catalog.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{content, tests::project};
    use pretty_assertions::assert_eq;

    fn test_catalog() -> Catalog {
        Catalog::new(vec![
            project("r1", Category::Research),
            project("w1", Category::WebApps),
            project("m1", Category::MlModels),
            project("r2", Category::Research),
            project("w2", Category::WebApps),
        ])
        .unwrap()
    }

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_defaults() {
        let state = ViewState::new();
        assert_eq!(state.filter(), &CategoryFilter::All);
        assert_eq!(state.theme(), Theme::Light);
        assert!(!state.is_detail_mode());
        assert!(state.active_project_detail(&test_catalog()).is_none());
    }

    #[test]
    fn test_all_returns_full_catalog_in_order() {
        let catalog = test_catalog();
        let state = ViewState::new();
        assert_eq!(
            ids(&state.visible_projects(&catalog)),
            vec!["r1", "w1", "m1", "r2", "w2"]
        );

        let embedded = &content().projects;
        assert_eq!(state.visible_projects(embedded).len(), embedded.len());
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let catalog = test_catalog();
        let mut state = ViewState::new();

        state.set_category_filter(Category::Research.label());
        assert_eq!(ids(&state.visible_projects(&catalog)), vec!["r1", "r2"]);

        state.set_category_filter("Web Apps");
        assert_eq!(ids(&state.visible_projects(&catalog)), vec!["w1", "w2"]);

        state.set_category_filter("ML Models");
        assert_eq!(ids(&state.visible_projects(&catalog)), vec!["m1"]);

        state.set_category_filter("All");
        assert_eq!(state.visible_projects(&catalog).len(), 5);
    }

    #[test]
    fn test_categories_partition_catalog() {
        let catalog = test_catalog();
        let mut state = ViewState::new();
        let mut seen = Vec::new();
        for c in Category::ALL {
            state.set_category_filter(CategoryFilter::Only(c));
            let visible = state.visible_projects(&catalog);
            assert!(visible.iter().all(|p| p.category == c));
            seen.extend(ids(&visible));
        }
        seen.sort();
        let mut all = ids(&catalog.projects().iter().collect::<Vec<_>>());
        all.sort();
        assert_eq!(seen, all);
    }

    #[test]
    fn test_unlisted_filter_is_empty() {
        let catalog = test_catalog();
        let mut state = ViewState::new();
        state.set_category_filter("Games");
        assert_eq!(state.filter(), &CategoryFilter::Unlisted("Games".to_string()));
        assert!(state.visible_projects(&catalog).is_empty());

        // case sensitive, like the filter buttons
        state.set_category_filter("research");
        assert!(state.visible_projects(&catalog).is_empty());
    }

    #[test]
    fn test_select_and_clear() {
        let catalog = test_catalog();
        let mut state = ViewState::new();

        state.select_project("m1");
        assert!(state.is_detail_mode());
        let detail = state.active_project_detail(&catalog).expect("m1 should resolve");
        assert_eq!(detail.id, "m1");

        state.select_project("nope");
        assert!(state.is_detail_mode());
        assert_eq!(state.active_project_id(), Some("nope"));
        assert!(state.active_project_detail(&catalog).is_none());

        state.clear_selection();
        assert!(!state.is_detail_mode());
        assert!(state.active_project_detail(&catalog).is_none());
    }

    #[test]
    fn test_selection_ignores_filter() {
        let catalog = test_catalog();
        let mut state = ViewState::new();
        state.set_category_filter("ML Models");
        state.select_project("w2");
        assert_eq!(state.active_project_detail(&catalog).map(|p| p.id.as_str()), Some("w2"));
    }

    #[test]
    fn test_toggle_theme_twice_restores() {
        let mut state = ViewState::new();
        state.toggle_theme();
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(state.theme().class(), "dark");
        state.toggle_theme();
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_filter_labels() {
        let labels = CategoryFilter::OPTIONS
            .iter()
            .map(|f| f.label().to_string())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["All", "Research", "Web Apps", "ML Models"]);
        for f in CategoryFilter::OPTIONS {
            assert_eq!(CategoryFilter::from(f.label()), f);
        }
    }
}
