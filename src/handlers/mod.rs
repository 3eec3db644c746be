pub mod health;
pub mod projects;

pub use health::{health, not_found, HealthResponse};
pub use projects::list_projects;
