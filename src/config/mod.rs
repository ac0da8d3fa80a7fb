use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the deployment environment marker.
pub const ENV_MARKER_VAR: &str = "PORTAL_ENV";

/// The marker value that selects the production endpoints.
const PRODUCTION_MARKER: &str = "prod";

/// Deployment environment the CLI talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Test,
}

impl Environment {
    /// Resolve the environment from a marker value.
    ///
    /// Only the exact production marker selects production; any other
    /// value, including an unset variable, resolves to the test
    /// environment.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some(PRODUCTION_MARKER) => Environment::Production,
            _ => Environment::Test,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Test => "test",
        }
    }
}

/// External service URLs for one deployment environment.
///
/// Built once at startup and passed by reference afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceEndpoints {
    /// Galaxy instance workflows are launched against
    pub galaxy_instance_url: String,
    /// Base URL of the portal backend API
    pub api_base_url: String,
}

impl ServiceEndpoints {
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Production => Self {
                galaxy_instance_url: "https://usegalaxy.org/".to_string(),
                api_base_url: "https://api.genomeportal.org".to_string(),
            },
            Environment::Test => Self {
                galaxy_instance_url: "https://test.galaxyproject.org/".to_string(),
                api_base_url: "https://api.test.genomeportal.org".to_string(),
            },
        }
    }
}

/// User preferences from the config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Environment marker, overrides the PORTAL_ENV variable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    /// Column threshold for the links layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_threshold: Option<usize>,

    /// Backend API base URL, overrides the environment default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("portalctl");

        if let Err(e) = std::fs::create_dir_all(&config_dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or fall back to defaults
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(_) => return Ok(AppConfig::default()),
        };

        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return Ok(config),
                    Err(e) => tracing::warn!("Failed to parse config: {}", e),
                },
                Err(e) => tracing::warn!("Failed to read config: {}", e),
            }
        }

        Ok(AppConfig::default())
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub environment: Environment,
    pub endpoints: ServiceEndpoints,
    /// Column threshold override from the config file, if any
    pub column_threshold: Option<usize>,
}

impl RuntimeConfig {
    /// Resolve configuration from the file preferences and an environment
    /// marker. Precedence for the marker: CLI flag, config file, PORTAL_ENV.
    pub fn resolve(app_config: &AppConfig, cli_marker: Option<&str>) -> Self {
        let env_var = std::env::var(ENV_MARKER_VAR).ok();
        let marker = cli_marker
            .or(app_config.environment.as_deref())
            .or(env_var.as_deref());

        let environment = Environment::from_marker(marker);
        let mut endpoints = ServiceEndpoints::for_environment(environment);

        if let Some(url) = &app_config.api_base_url {
            endpoints.api_base_url = url.clone();
        }

        Self {
            environment,
            endpoints,
            column_threshold: app_config.column_threshold,
        }
    }
}
