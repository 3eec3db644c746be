use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of the upstream `/api/projects/categories` endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}
