//! Server configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables, then command line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Parse an environment name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Listener and asset locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served under `/static`.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// Deployment environment. Production marks cookies `Secure`.
    #[serde(default)]
    pub environment: Environment,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_dir: default_public_dir(),
            environment: Environment::default(),
        }
    }
}

/// Storefront content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Display name, used as the home page title.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Path of the product catalog JSON file.
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
}

fn default_store_name() -> String {
    "Tech Store".to_string()
}

fn default_catalog() -> PathBuf {
    PathBuf::from("data/products.json")
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            catalog: default_catalog(),
        }
    }
}

/// Visitor session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session lifetime in seconds, counted from creation.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

fn default_ttl_secs() -> u64 {
    24 * 60 * 60
}

fn default_cookie_name() -> String {
    "storefront.sid".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            cookie_name: default_cookie_name(),
        }
    }
}

impl SessionConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

/// Command line and environment overrides.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub catalog: Option<PathBuf>,
    pub environment: Option<Environment>,
    pub log_format: Option<LogFormat>,
}

impl StoreConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if one was given, otherwise start from defaults.
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        let config = config.with_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides on top of this config.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(catalog) = overrides.catalog {
            self.store.catalog = catalog;
        }
        if let Some(environment) = overrides.environment {
            self.server.environment = environment;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
        self
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.session.cookie_name.is_empty()
            || !self
                .session
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            anyhow::bail!("Invalid session cookie name: {:?}", self.session.cookie_name);
        }
        if self.server.host.trim().is_empty() {
            anyhow::bail!("Server host must not be empty");
        }
        Ok(())
    }

    /// Address string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn is_production(&self) -> bool {
        self.server.environment.is_production()
    }
}
