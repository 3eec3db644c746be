use std::fmt;

use time::macros::format_description;

use crate::models::{Project, ProjectStatus, Technology};

/// Technology badges shown on a card before collapsing into a count
pub const MAX_BADGES: usize = 4;

/// Catalog size the "view all" button advertises against
pub const VIEW_ALL_TARGET: usize = 10;

pub const EMPTY_MESSAGE: &str = "Aucun projet trouvé pour cette catégorie.";

pub const SHOW_LESS_LABEL: &str = "Voir moins (projets mis en avant uniquement)";

pub fn status_label(status: &ProjectStatus) -> &str {
    match status {
        ProjectStatus::Completed => "Terminé",
        ProjectStatus::InProgress => "En cours",
        ProjectStatus::Planned => "Planifié",
        ProjectStatus::Other(label) => label,
    }
}

/// Button label for a category filter
pub fn category_label(category: &str) -> String {
    match category {
        "all" => "Tous".to_string(),
        "featured" => "Mis en avant".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// Projects the "view all" button claims are still hidden
pub fn remaining_count(listed: usize) -> usize {
    VIEW_ALL_TARGET.saturating_sub(listed)
}

pub fn view_all_label(listed: usize) -> String {
    if listed > 0 {
        format!(
            "Voir tous les projets (+{} autres)",
            remaining_count(listed)
        )
    } else {
        "Voir tous les projets (Charger tout)".to_string()
    }
}

/// Display model for one listed project
#[derive(Debug)]
pub struct ProjectCard<'a> {
    pub project: &'a Project,
    pub badges: &'a [Technology],
    pub hidden_badges: usize,
}

impl<'a> ProjectCard<'a> {
    pub fn new(project: &'a Project) -> Self {
        let shown = project.technologies.len().min(MAX_BADGES);
        Self {
            project,
            badges: &project.technologies[..shown],
            hidden_badges: project.technologies.len() - shown,
        }
    }

    pub fn status_label(&self) -> &str {
        status_label(&self.project.status)
    }
}

impl fmt::Display for ProjectCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let project = self.project;

        write!(f, "{} [{}]", project.title, self.status_label())?;
        if project.featured {
            write!(f, " ⭐ Mis en avant")?;
        }
        if let Some(category) = &project.category {
            write!(f, " ({category})")?;
        }
        writeln!(f)?;
        writeln!(f, "  {}", project.description)?;

        let names: Vec<&str> = self.badges.iter().map(|t| t.name.as_str()).collect();
        write!(f, "  {}", names.join(", "))?;
        if self.hidden_badges > 0 {
            write!(f, " +{} autres", self.hidden_badges)?;
        }
        writeln!(f)?;

        let created = project
            .created_at
            .format(format_description!("[day]/[month]/[year]"))
            .map_err(|_| fmt::Error)?;
        write!(f, "  {created}")?;

        if let Some(demo) = &project.demo_url {
            write!(f, "\n  Voir: {demo}")?;
        }
        if let Some(github) = &project.github_url {
            write!(f, "\n  Code: {github}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock_catalog;

    #[test]
    fn test_badges_capped_at_four() {
        let mut project = mock_catalog().remove(0);
        project.technologies.extend(mock_catalog().remove(1).technologies);
        assert_eq!(project.technologies.len(), 7);

        let card = ProjectCard::new(&project);
        assert_eq!(card.badges.len(), MAX_BADGES);
        assert_eq!(card.hidden_badges, 3);
        assert!(card.to_string().contains("+3 autres"));
    }

    #[test]
    fn test_few_badges_not_collapsed() {
        let project = mock_catalog().remove(1);
        let card = ProjectCard::new(&project);
        assert_eq!(card.badges.len(), 3);
        assert_eq!(card.hidden_badges, 0);
        assert!(!card.to_string().contains("autres"));
    }

    #[test]
    fn test_view_all_label() {
        assert_eq!(remaining_count(2), 8);
        assert_eq!(remaining_count(14), 0);
        assert_eq!(view_all_label(3), "Voir tous les projets (+7 autres)");
        assert_eq!(view_all_label(0), "Voir tous les projets (Charger tout)");
    }

    #[test]
    fn test_labels() {
        assert_eq!(category_label("all"), "Tous");
        assert_eq!(category_label("featured"), "Mis en avant");
        assert_eq!(category_label("ia"), "Ia");
        assert_eq!(category_label("fullstack"), "Fullstack");
        assert_eq!(status_label(&ProjectStatus::InProgress), "En cours");
        assert_eq!(
            status_label(&ProjectStatus::Other("archived".to_string())),
            "archived"
        );
    }
}
