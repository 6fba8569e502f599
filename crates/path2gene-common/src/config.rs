//! Configuration loading for path2gene.
//! Reads path2gene.toml from the current directory or the path in the
//! PATH2GENE_CONFIG env var, then applies PATH2GENE_* overrides.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{ConfigError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "path2gene.toml";
pub const CONFIG_PATH_ENV: &str = "PATH2GENE_CONFIG";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub path2gene: ServerConfig,
    pub graph: GraphSet,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// SPARQL endpoint every query is sent to.
    pub sparql_server: String,
    pub secret_key: SecretString,
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:5000".to_string() }

/// Named graph URIs by logical name. `uniprot` and `itag` are required;
/// anything else in the `[graph]` section is kept in `extra`.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphSet {
    pub uniprot: String,
    pub itag: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl GraphSet {
    pub fn new(uniprot: impl Into<String>, itag: impl Into<String>) -> Self {
        Self { uniprot: uniprot.into(), itag: itag.into(), extra: BTreeMap::new() }
    }

    /// Look a graph up by its logical name.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "uniprot" => Some(&self.uniprot),
            "itag" => Some(&self.itag),
            other => self.extra.get(other).map(String::as_str),
        }
    }
}

impl Config {
    /// Load from `$PATH2GENE_CONFIG` or `./path2gene.toml`, with process
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        info!(path = %path, endpoint = %config.path2gene.sparql_server, "Configuration loaded");
        Ok(config)
    }

    /// Parse a specific file without touching the environment.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Apply PATH2GENE_SPARQL_SERVER / PATH2GENE_SECRET_KEY / PATH2GENE_BIND.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(server) = lookup("PATH2GENE_SPARQL_SERVER") {
            debug!("sparql_server overridden from environment");
            self.path2gene.sparql_server = server;
        }
        if let Some(secret) = lookup("PATH2GENE_SECRET_KEY") {
            debug!("secret_key overridden from environment");
            self.path2gene.secret_key = SecretString::from(secret);
        }
        if let Some(bind) = lookup("PATH2GENE_BIND") {
            self.path2gene.bind = bind;
        }
    }

    pub fn validate(&self) -> Result<()> {
        let endpoint = url::Url::parse(&self.path2gene.sparql_server).map_err(|e| {
            ConfigError::Invalid(format!(
                "sparql_server {:?} is not a valid URL: {}",
                self.path2gene.sparql_server, e
            ))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "sparql_server must use http or https, got {}",
                endpoint.scheme()
            )));
        }
        if self.path2gene.secret_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::Invalid("secret_key must not be empty".to_string()));
        }
        for (name, uri) in [("uniprot", &self.graph.uniprot), ("itag", &self.graph.itag)] {
            if uri.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("graph.{} must not be empty", name)));
            }
        }
        Ok(())
    }
}
