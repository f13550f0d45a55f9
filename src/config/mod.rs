//! Configuration loading and management
//!
//! Endpoint paths are deployment detail, so the form layer never hard-codes
//! them: it receives an [`EndpointsConfig`] mapping operation names to URL
//! templates, resolved once at startup.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// URL templates for the client operations consumed by the form layer
///
/// `update_client` is a template; `{client_id}` is substituted at call time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// List all clients (GET)
    pub get_all_clients: String,

    /// Create a client (POST)
    pub create_client: String,

    /// Update a client (PUT); contains a `{client_id}` placeholder
    pub update_client: String,
}

impl EndpointsConfig {
    /// Default endpoint templates resolved against a base URL
    ///
    /// Useful for tests and single-host deployments where the REST surface
    /// lives under `{base}/clients`.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            get_all_clients: format!("{}/clients", base),
            create_client: format!("{}/clients", base),
            update_client: format!("{}/clients/{{client_id}}", base),
        }
    }

    /// Resolve the update template for a concrete client id
    pub fn update_url(&self, client_id: &str) -> String {
        self.update_client.replace("{client_id}", client_id)
    }
}

/// Server-side settings for the application shell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind, e.g. `127.0.0.1:3000`
    pub bind_addr: String,

    /// Directory of static assets served for unmatched paths
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            static_dir: None,
        }
    }
}

/// Complete configuration for the clientele service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,

    pub endpoints: EndpointsConfig,

    /// External country/currency catalog queried once per form mount
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,
}

fn default_catalog_url() -> String {
    "https://restcountries.com/v3.1/all".to_string()
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Create a default configuration for local development
    pub fn default_config() -> Self {
        Self {
            server: ServerConfig::default(),
            endpoints: EndpointsConfig::with_base("http://127.0.0.1:3000"),
            catalog_url: default_catalog_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default_config();

        assert_eq!(config.server.bind_addr, "127.0.0.1:3000");
        assert_eq!(
            config.endpoints.get_all_clients,
            "http://127.0.0.1:3000/clients"
        );
        assert!(config.catalog_url.contains("restcountries.com"));
    }

    #[test]
    fn test_update_url_substitution() {
        let endpoints = EndpointsConfig::with_base("http://localhost:9000/");
        assert_eq!(
            endpoints.update_url("CL042"),
            "http://localhost:9000/clients/CL042"
        );
    }

    #[test]
    fn test_yaml_serialization() {
        let config = ServiceConfig::default_config();
        let yaml = serde_yaml::to_string(&config).unwrap();

        // Should be able to parse it back
        let parsed = ServiceConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.server.bind_addr, config.server.bind_addr);
        assert_eq!(parsed.endpoints.update_client, config.endpoints.update_client);
    }

    #[test]
    fn test_yaml_defaults() {
        let yaml = r#"
endpoints:
  get_all_clients: "http://api.local/clients"
  create_client: "http://api.local/clients"
  update_client: "http://api.local/clients/{client_id}"
"#;
        let config = ServiceConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.server.bind_addr, "127.0.0.1:3000");
        assert!(config.server.static_dir.is_none());
        assert!(config.catalog_url.contains("restcountries.com"));
    }
}
