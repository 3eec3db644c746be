use axum::{
    body::Body,
    extract::{RawQuery, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::AppResult;
use crate::models::Project;
use crate::services::gateway_fallback;
use crate::state::AppState;

/// List projects through the upstream catalog
///
/// The query string is forwarded untouched. Whatever goes wrong upstream, the
/// caller gets a 200: either the catalog's own body or a one-item mock listing.
#[utoipa::path(
    get,
    path = "/api/projects",
    params(
        ("category" = Option<String>, Query, description = "Restrict to one category"),
        ("featured" = Option<bool>, Query, description = "Only featured projects"),
        ("status" = Option<String>, Query, description = "Restrict to one status")
    ),
    responses(
        (status = 200, description = "Project listing (mock listing if the catalog is down)", body = [Project])
    ),
    tag = "Projects"
)]
pub async fn list_projects(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> AppResult<Response> {
    match state.upstream.fetch_projects(query.as_deref()).await {
        Ok(body) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))?),
        Err(e) => {
            state.record_fallback(&e);
            Ok(Json(gateway_fallback()).into_response())
        }
    }
}
