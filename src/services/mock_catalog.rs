//! Placeholder content served when the catalog cannot be reached.
//!
//! The gateway and the project list controller both degrade to this data,
//! so it lives in one place.

use time::OffsetDateTime;

use crate::models::{Project, ProjectStatus, Technology};

/// Category labels shown when the catalog's category list is unavailable
pub const FALLBACK_CATEGORIES: [&str; 6] = ["featured", "all", "web", "ia", "data", "fullstack"];

/// Single-item listing returned by the gateway when the upstream fails
pub fn gateway_fallback() -> Vec<Project> {
    let now = OffsetDateTime::now_utc();
    vec![Project {
        id: 1,
        title: "Portfolio Personnel (Mock)".to_string(),
        description: "Portfolio moderne avec animations et backend API".to_string(),
        long_description: None,
        status: ProjectStatus::Completed,
        featured: true,
        category: Some("fullstack".to_string()),
        demo_url: None,
        github_url: Some("https://github.com/fidel/portfolio".to_string()),
        image_url: None,
        technologies: vec![
            tech(1, "React", "#61dafb"),
            tech(2, "Next.js", "#000000"),
            tech(3, "FastAPI", "#009688"),
        ],
        created_at: now,
        updated_at: now,
    }]
}

/// Two-item catalog the controller filters locally on transport failure
pub fn mock_catalog() -> Vec<Project> {
    let now = OffsetDateTime::now_utc();
    vec![
        Project {
            id: 1,
            title: "Portfolio Personnel".to_string(),
            description: "Portfolio moderne avec animations et backend API".to_string(),
            long_description: None,
            status: ProjectStatus::Completed,
            featured: true,
            category: Some("fullstack".to_string()),
            demo_url: None,
            github_url: Some("https://github.com/fidel/portfolio".to_string()),
            image_url: None,
            technologies: vec![
                tech(1, "React", "#61dafb"),
                tech(2, "Next.js", "#000000"),
                tech(3, "FastAPI", "#009688"),
                tech(4, "Supabase", "#3ecf8e"),
            ],
            created_at: now,
            updated_at: now,
        },
        Project {
            id: 2,
            title: "Analyse de Données".to_string(),
            description: "Projet d'analyse de données avec visualisations".to_string(),
            long_description: None,
            status: ProjectStatus::Completed,
            featured: true,
            category: Some("data".to_string()),
            demo_url: None,
            github_url: Some("https://github.com/fidel/data-analysis".to_string()),
            image_url: None,
            technologies: vec![
                tech(5, "Python", "#3776ab"),
                tech(6, "Pandas", "#150458"),
                tech(7, "Machine Learning", "#ff6b35"),
            ],
            created_at: now,
            updated_at: now,
        },
    ]
}

fn tech(id: i64, name: &str, color: &str) -> Technology {
    Technology {
        id,
        name: name.to_string(),
        color: Some(color.to_string()),
    }
}
