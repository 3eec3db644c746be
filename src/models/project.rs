use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// A portfolio project as served by the upstream catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[schema(value_type = String)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<Technology>,
    #[serde(with = "iso8601")]
    #[schema(value_type = String)]
    pub created_at: OffsetDateTime,
    #[serde(with = "iso8601")]
    #[schema(value_type = String)]
    pub updated_at: OffsetDateTime,
}

impl Project {
    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Technology {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Project lifecycle. Labels the catalog does not know are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
    Other(String),
}

impl ProjectStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Planned => "planned",
            ProjectStatus::Other(label) => label,
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "completed" => ProjectStatus::Completed,
            "in-progress" => ProjectStatus::InProgress,
            "planned" => ProjectStatus::Planned,
            _ => ProjectStatus::Other(s),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Timestamps as the catalog emits them: RFC 3339, or an ISO 8601 date-time
/// without offset, which is taken as UTC. Always written back as RFC 3339.
mod iso8601 {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use time::{
        format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime,
        PrimitiveDateTime,
    };

    pub fn serialize<S: Serializer>(
        value: &OffsetDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        time::serde::rfc3339::serialize(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<OffsetDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(parsed) = OffsetDateTime::parse(&raw, &Rfc3339) {
            return Ok(parsed);
        }

        PrimitiveDateTime::parse(
            &raw,
            format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
            ),
        )
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|e| D::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_upstream_project() {
        let project: Project = serde_json::from_value(json!({
            "id": 7,
            "title": "Chatbot",
            "description": "Assistant conversationnel",
            "long_description": null,
            "status": "in-progress",
            "featured": false,
            "category": "ia",
            "demo_url": null,
            "github_url": "https://github.com/fidel/chatbot",
            "image_url": null,
            "technologies": [
                { "id": 5, "name": "Python", "color": "#3776ab", "category": "language" },
                { "id": 9, "name": "LangChain" }
            ],
            "created_at": "2024-03-01T10:15:30.123456+00:00",
            "updated_at": "2024-03-02T08:00:00Z"
        }))
        .unwrap();

        assert_eq!(project.id, 7);
        assert_eq!(project.status, ProjectStatus::InProgress);
        assert!(project.in_category("ia"));
        assert_eq!(project.technologies.len(), 2);
        assert_eq!(project.technologies[1].color, None);
    }

    #[test]
    fn test_naive_timestamp_taken_as_utc() {
        let mut value = serde_json::to_value(crate::services::mock_catalog().remove(0)).unwrap();
        value["created_at"] = json!("2024-03-01T10:15:30.123456");
        value["updated_at"] = json!("2024-03-01T10:15:30");

        let project: Project = serde_json::from_value(value).unwrap();

        assert_eq!(
            project.created_at,
            time::macros::datetime!(2024-03-01 10:15:30.123456 UTC)
        );
        assert_eq!(
            project.updated_at,
            time::macros::datetime!(2024-03-01 10:15:30 UTC)
        );
        assert_eq!(
            serde_json::to_value(&project).unwrap()["updated_at"],
            json!("2024-03-01T10:15:30Z")
        );
    }

    #[test]
    fn test_garbage_timestamp_rejected() {
        let mut value = serde_json::to_value(crate::services::mock_catalog().remove(0)).unwrap();
        value["created_at"] = json!("hier");

        assert!(serde_json::from_value::<Project>(value).is_err());
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status: ProjectStatus = serde_json::from_value(json!("archived")).unwrap();
        assert_eq!(status, ProjectStatus::Other("archived".to_string()));
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("archived"));
    }

    #[test]
    fn test_known_status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_value(ProjectStatus::InProgress).unwrap(),
            json!("in-progress")
        );
    }
}
