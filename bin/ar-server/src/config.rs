//! Server configuration with TOML file and environment variable support.
//!
//! The config file declares the HTTP listener, the application's authorized
//! callback URIs, and the account-store registry. `validate()` runs once at
//! startup so wiring problems fail the process before it serves traffic.

use std::env;
use std::path::{Path, PathBuf};

use ar_core::{AccountStore, Application, ProviderType};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Standard config file search paths
const CONFIG_PATHS: &[&str] = &[
    "config.toml",
    "authrelay.toml",
    "./config/authrelay.toml",
    "/etc/authrelay/config.toml",
];

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Root server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub http: HttpConfig,

    /// The application served by this relay instance.
    pub application: Application,

    /// Account stores resolvable through this instance.
    pub account_stores: Vec<AccountStore>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            application: Application::default(),
            account_stores: Vec::new(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Construct-time configuration check: the relay refuses to start with a
    /// registry it could never redirect from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.application.authorized_callback_uris.is_empty() {
            return Err(ConfigError::Validation(
                "application must be configured with at least one authorized callback uri"
                    .to_string(),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for store in &self.account_stores {
            if store.href.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "account store '{}' has an empty href",
                    store.name
                )));
            }
            if !seen.insert(store.href.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate account store href: {}",
                    store.href
                )));
            }
            if let Some(provider) = &store.provider {
                if provider.provider_type == ProviderType::Oidc
                    && provider.authorization_endpoint.is_none()
                {
                    return Err(ConfigError::Validation(format!(
                        "account store '{}' uses an oidc provider without an \
                         authorization endpoint",
                        store.name
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Configuration loader: explicit `AUTHRELAY_CONFIG` path first, then the
/// standard search paths.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from file (if found) with environment variable
    /// overrides
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        let mut config = AppConfig::default();

        if let Some(path) = self.find_config_file() {
            info!(?path, "Loading configuration from file");
            config = AppConfig::from_file(&path)?;
        }

        self.apply_env_overrides(&mut config);

        Ok(config)
    }

    fn find_config_file(&self) -> Option<PathBuf> {
        if let Ok(path) = env::var("AUTHRELAY_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        for path in CONFIG_PATHS {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    fn apply_env_overrides(&self, config: &mut AppConfig) {
        if let Ok(val) = env::var("AUTHRELAY_HTTP_HOST") {
            config.http.host = val;
        }
        if let Ok(val) = env::var("AUTHRELAY_HTTP_PORT") {
            if let Ok(port) = val.parse() {
                config.http.port = port;
            }
        }
        if let Ok(val) = env::var("AUTHRELAY_CORS_ORIGINS") {
            config.http.cors_origins = val.split(',').map(|s| s.trim().to_string()).collect();
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
