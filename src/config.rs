use std::env;
use std::time::Duration;

/// Default location of the upstream project catalog
pub const DEFAULT_CATALOG_API_URL: &str = "http://localhost:8000";

/// Default location of the gateway, as seen by the project list controller
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Config {
    // Upstream catalog
    pub catalog_api_url: String,
    pub upstream_timeout: Option<Duration>,

    // Gateway (client side)
    pub gateway_url: String,

    // Server
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_api_url = lookup("CATALOG_API_URL")
            .or_else(|| lookup("NEXT_PUBLIC_API_URL"))
            .unwrap_or_else(|| DEFAULT_CATALOG_API_URL.to_string());

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(
                raw.parse()
                    .map_err(|_| ConfigError::Invalid("UPSTREAM_TIMEOUT_SECS"))?,
            )),
            None => None,
        };

        Ok(Self {
            catalog_api_url: normalize_base_url(&catalog_api_url)
                .ok_or(ConfigError::Invalid("CATALOG_API_URL"))?,
            upstream_timeout,

            gateway_url: normalize_base_url(
                &lookup("GATEWAY_URL").unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string()),
            )
            .ok_or(ConfigError::Invalid("GATEWAY_URL"))?,

            // Server
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
        })
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Full URL of the upstream listing endpoint
    pub fn upstream_projects_url(&self) -> String {
        format!("{}/api/projects", self.catalog_api_url)
    }

    /// Full URL of the upstream categories endpoint (not proxied)
    pub fn categories_url(&self) -> String {
        format!("{}/api/projects/categories", self.catalog_api_url)
    }

    /// Full URL of the gateway listing endpoint
    pub fn gateway_projects_url(&self) -> String {
        format!("{}/api/projects", self.gateway_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_api_url: DEFAULT_CATALOG_API_URL.to_string(),
            upstream_timeout: None,
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Trim trailing slashes; reject values that are not http(s) URLs.
fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        None
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.catalog_api_url, DEFAULT_CATALOG_API_URL);
        assert_eq!(config.gateway_url, DEFAULT_GATEWAY_URL);
        assert_eq!(config.upstream_timeout, None);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_next_public_api_url_alias() {
        let config = load(&[("NEXT_PUBLIC_API_URL", "https://api.fidel.dev/")]).unwrap();
        assert_eq!(config.catalog_api_url, "https://api.fidel.dev");

        let config = load(&[
            ("CATALOG_API_URL", "http://catalog:8000"),
            ("NEXT_PUBLIC_API_URL", "https://api.fidel.dev"),
        ])
        .unwrap();
        assert_eq!(config.catalog_api_url, "http://catalog:8000");
    }

    #[test]
    fn test_upstream_timeout_parsed() {
        let config = load(&[("UPSTREAM_TIMEOUT_SECS", "5")]).unwrap();
        assert_eq!(config.upstream_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_invalid_numbers_rejected() {
        assert!(matches!(
            load(&[("PORT", "http")]),
            Err(ConfigError::Invalid("PORT"))
        ));
        assert!(matches!(
            load(&[("UPSTREAM_TIMEOUT_SECS", "soon")]),
            Err(ConfigError::Invalid("UPSTREAM_TIMEOUT_SECS"))
        ));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(matches!(
            load(&[("GATEWAY_URL", "localhost:3000")]),
            Err(ConfigError::Invalid("GATEWAY_URL"))
        ));
    }

    #[test]
    fn test_normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:8000/"),
            Some("http://localhost:8000".to_string())
        );
        assert_eq!(
            normalize_base_url(" https://api.example.com// "),
            Some("https://api.example.com".to_string())
        );
    }

    #[test]
    fn test_normalize_base_url_rejects_non_http() {
        assert_eq!(normalize_base_url("localhost:8000"), None);
        assert_eq!(normalize_base_url(""), None);
    }

    #[test]
    fn test_endpoint_urls() {
        let config = Config::default();
        assert_eq!(
            config.upstream_projects_url(),
            "http://localhost:8000/api/projects"
        );
        assert_eq!(
            config.categories_url(),
            "http://localhost:8000/api/projects/categories"
        );
        assert_eq!(
            config.gateway_projects_url(),
            "http://localhost:3000/api/projects"
        );
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }
}
