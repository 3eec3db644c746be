use std::fmt;

use crate::models::Project;

/// Category selector. `featured` and `all` are sentinels, not catalog tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    Featured,
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::Featured => "featured",
            CategoryFilter::All => "all",
            CategoryFilter::Named(name) => name,
        }
    }

    /// The catalog tag to filter on, if any
    pub fn named(&self) -> Option<&str> {
        match self {
            CategoryFilter::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(label: &str) -> Self {
        match label {
            "featured" => CategoryFilter::Featured,
            "all" => CategoryFilter::All,
            other => CategoryFilter::Named(other.to_string()),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(label: String) -> Self {
        CategoryFilter::from(label.as_str())
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two UI toggles driving the listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    /// When false, only featured projects are listed
    pub show_all: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::Featured,
            show_all: false,
        }
    }
}

impl FilterState {
    pub fn new(category: impl Into<CategoryFilter>, show_all: bool) -> Self {
        Self {
            category: category.into(),
            show_all,
        }
    }

    /// Query parameters for the listing endpoint, in wire order.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(2);
        if let Some(category) = self.category.named() {
            params.push(("category", category.to_string()));
        }
        if !self.show_all {
            params.push(("featured", "true".to_string()));
        }
        params
    }

    /// Client-side equivalent of `query_params`, used on locally held data.
    pub fn matches(&self, project: &Project) -> bool {
        let featured_ok = self.show_all || project.featured;
        let category_ok = self
            .category
            .named()
            .map_or(true, |category| project.in_category(category));
        featured_ok && category_ok
    }

    pub fn apply(&self, projects: Vec<Project>) -> Vec<Project> {
        projects.into_iter().filter(|p| self.matches(p)).collect()
    }
}
