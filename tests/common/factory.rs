use serde_json::{json, Value};

/// Upstream-shaped project JSON
#[allow(dead_code)]
pub fn project_json(id: i64, title: &str, category: &str, featured: bool) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("Description de {title}"),
        "long_description": null,
        "status": "completed",
        "featured": featured,
        "category": category,
        "demo_url": null,
        "github_url": format!("https://github.com/fidel/project-{id}"),
        "image_url": null,
        "technologies": [
            { "id": 1, "name": "Rust", "color": "#dea584", "category": "language" },
            { "id": 2, "name": "Axum", "color": null, "category": "framework" }
        ],
        "created_at": "2024-05-10T09:30:00.000000+00:00",
        "updated_at": "2024-05-11T18:00:00+00:00"
    })
}
