//! Client-side logic behind the portfolio's "Projects" section.
//!
//! The controller owns the two filter toggles, derives the listing request
//! from them and keeps the displayed list. When the gateway cannot be reached
//! at all it shows the local mock catalog, filtered the same way the server
//! would have filtered it.

pub mod api;
pub mod filter;
pub mod view;

pub use api::{FetchError, HttpProjectsApi, ProjectsApi};
pub use filter::{CategoryFilter, FilterState};
pub use view::{category_label, status_label, view_all_label, ProjectCard};

use crate::models::Project;
use crate::services::{mock_catalog, FALLBACK_CATEGORIES};

/// Lifecycle of the listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Success,
    /// Visible error with a retry action
    Error(String),
}

/// Handle for one issued listing request
#[derive(Debug, Clone)]
pub struct FetchTicket {
    seq: u64,
    filter: FilterState,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }
}

pub struct ProjectListController<A> {
    api: A,
    filter: FilterState,
    categories: Vec<String>,
    projects: Vec<Project>,
    state: LoadState,
    latest_seq: u64,
}

impl<A: ProjectsApi> ProjectListController<A> {
    pub fn new(api: A) -> Self {
        Self::with_filter(api, FilterState::default())
    }

    pub fn with_filter(api: A, filter: FilterState) -> Self {
        Self {
            api,
            filter,
            categories: vec!["featured".to_string(), "all".to_string()],
            projects: Vec::new(),
            state: LoadState::Idle,
            latest_seq: 0,
        }
    }

    /// Initial load: categories and the first listing, concurrently.
    pub async fn mount(&mut self) {
        let ticket = self.begin_fetch();
        let (categories, listing) = futures::join!(
            self.api.categories(),
            self.api.list_projects(&ticket.filter)
        );
        self.apply_categories(categories);
        self.complete_fetch(ticket, listing);
    }

    pub async fn load_categories(&mut self) {
        let categories = self.api.categories().await;
        self.apply_categories(categories);
    }

    pub async fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        let category = category.into();
        if self.filter.category == category {
            return;
        }
        self.filter.category = category;
        self.refresh().await;
    }

    pub async fn set_show_all(&mut self, show_all: bool) {
        if self.filter.show_all == show_all {
            return;
        }
        self.filter.show_all = show_all;
        self.refresh().await;
    }

    /// Re-issue the listing request for the current filters
    pub async fn retry(&mut self) {
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        let ticket = self.begin_fetch();
        let result = self.api.list_projects(&ticket.filter).await;
        self.complete_fetch(ticket, result);
    }

    /// Mark a new request as in flight. Any ticket issued earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.state = LoadState::Loading;
        FetchTicket {
            seq: self.latest_seq,
            filter: self.filter.clone(),
        }
    }

    /// Apply a finished request. Returns false if the ticket was stale and the
    /// result was dropped.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Project>, FetchError>,
    ) -> bool {
        if ticket.seq != self.latest_seq {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                "Discarding stale listing response"
            );
            return false;
        }

        match result {
            Ok(projects) => {
                self.projects = projects;
                self.state = LoadState::Success;
            }
            Err(e) if e.is_transport() => {
                tracing::warn!(
                    error = %e,
                    category = %ticket.filter.category,
                    show_all = ticket.filter.show_all,
                    "Gateway unreachable, showing mock projects"
                );
                self.projects = ticket.filter.apply(mock_catalog());
                self.state = LoadState::Success;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load projects");
                self.state = LoadState::Error(e.to_string());
            }
        }
        true
    }

    fn apply_categories(&mut self, result: Result<Vec<String>, FetchError>) {
        self.categories = match result {
            Ok(upstream) => ["featured", "all"]
                .into_iter()
                .map(String::from)
                .chain(upstream)
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Category list unavailable, using defaults");
                FALLBACK_CATEGORIES.iter().map(|c| c.to_string()).collect()
            }
        };
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Filter buttons are inert while a request is outstanding
    pub fn filters_disabled(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn cards(&self) -> Vec<ProjectCard<'_>> {
        self.projects.iter().map(ProjectCard::new).collect()
    }
}
