//! Run configuration
//!
//! Sources, lowest to highest precedence: built-in defaults, TOML file,
//! environment variables, command-line overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{Result, SeedError};
use crate::store::DEFAULT_DATABASE;

pub const DEFAULT_CONFIG_FILE: &str = "ironseed.toml";
pub const DEFAULT_CREDENTIALS_FILE: &str = "serviceAccountKey.json";
pub const DEFAULT_COLLECTION: &str = "products";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_CONFIG: &str = "IRONSEED_CONFIG";
pub const ENV_CREDENTIALS: &str = "GOOGLE_APPLICATION_CREDENTIALS";
pub const ENV_PROJECT: &str = "IRONSEED_PROJECT";
pub const ENV_EMULATOR_HOST: &str = "FIRESTORE_EMULATOR_HOST";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    /// Service-account key file
    pub credentials: PathBuf,
    /// Overrides the key file's `project_id`
    pub project: Option<String>,
    pub database: String,
    pub collection: String,
    /// `host:port` of a local emulator
    pub emulator_host: Option<String>,
    /// Custom API root, e.g. a proxy in front of Firestore
    pub endpoint: Option<String>,
    /// JSON file replacing the built-in products
    pub fixtures: Option<PathBuf>,
    /// Insert into an in-memory store instead
    pub dry_run: bool,
    pub timeout_secs: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig {
            credentials: PathBuf::from(DEFAULT_CREDENTIALS_FILE),
            project: None,
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            emulator_host: None,
            endpoint: None,
            fixtures: None,
            dry_run: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Command-line values; `None` leaves the lower layers alone
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub credentials: Option<PathBuf>,
    pub project: Option<String>,
    pub database: Option<String>,
    pub collection: Option<String>,
    pub emulator_host: Option<String>,
    pub fixtures: Option<PathBuf>,
    pub dry_run: bool,
    pub timeout_secs: Option<u64>,
}

impl SeedConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SeedError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SeedError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load the config file.
    ///
    /// An explicitly named file (argument or `IRONSEED_CONFIG`) must exist;
    /// the default `ironseed.toml` is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var(ENV_CONFIG).ok().map(PathBuf::from);
        match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Self::from_file(&path)
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    debug!(path = %path.display(), "loading config");
                    Self::from_file(path)
                } else {
                    debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Overlay environment variables read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = non_empty(ENV_CREDENTIALS) {
            self.credentials = PathBuf::from(path);
        }
        if let Some(project) = non_empty(ENV_PROJECT) {
            self.project = Some(project);
        }
        if let Some(host) = non_empty(ENV_EMULATOR_HOST) {
            self.emulator_host = Some(host);
        }
    }

    /// Overlay the process environment
    pub fn apply_process_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(credentials) = overrides.credentials {
            self.credentials = credentials;
        }
        if let Some(project) = overrides.project {
            self.project = Some(project);
        }
        if let Some(database) = overrides.database {
            self.database = database;
        }
        if let Some(collection) = overrides.collection {
            self.collection = collection;
        }
        if let Some(host) = overrides.emulator_host {
            self.emulator_host = Some(host);
        }
        if let Some(fixtures) = overrides.fixtures {
            self.fixtures = Some(fixtures);
        }
        if overrides.dry_run {
            self.dry_run = true;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.timeout_secs = timeout;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.collection.trim().is_empty() {
            return Err(SeedError::Config("collection must not be empty".to_string()));
        }
        if self.database.trim().is_empty() {
            return Err(SeedError::Config("database must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(SeedError::Config("timeout_secs must be positive".to_string()));
        }
        if self.emulator_host.is_some() && self.endpoint.is_some() {
            warn!("both emulator_host and endpoint set; emulator_host wins");
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_plain_run() {
        let config = SeedConfig::default();
        assert_eq!(config.collection, "products");
        assert_eq!(config.database, "(default)");
        assert_eq!(config.credentials, PathBuf::from("serviceAccountKey.json"));
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SeedConfig::from_toml_str(
            r#"
            credentials = "keys/seeder.json"
            collection = "demo_products"
            "#,
        )
        .unwrap();

        assert_eq!(config.credentials, PathBuf::from("keys/seeder.json"));
        assert_eq!(config.collection, "demo_products");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = SeedConfig::from_toml_str("colection = \"typo\"").unwrap_err();
        assert!(matches!(err, SeedError::Config(_)));
    }

    #[test]
    fn test_precedence_file_env_cli() {
        let mut config = SeedConfig::from_toml_str(
            r#"
            project = "from-file"
            collection = "file_products"
            "#,
        )
        .unwrap();

        let env: HashMap<&str, &str> = [
            (ENV_PROJECT, "from-env"),
            (ENV_EMULATOR_HOST, "localhost:8080"),
            (ENV_CREDENTIALS, "  "),
        ]
        .into_iter()
        .collect();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.project.as_deref(), Some("from-env"));
        assert_eq!(config.emulator_host.as_deref(), Some("localhost:8080"));
        assert_eq!(config.credentials, PathBuf::from(DEFAULT_CREDENTIALS_FILE));

        config.apply_overrides(ConfigOverrides {
            project: Some("from-cli".to_string()),
            dry_run: true,
            ..Default::default()
        });

        assert_eq!(config.project.as_deref(), Some("from-cli"));
        assert_eq!(config.collection, "file_products");
        assert!(config.dry_run);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = SeedConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = SeedConfig::default();
        config.collection = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = SeedConfig::load(Some(Path::new("/nonexistent/ironseed.toml"))).unwrap_err();
        assert!(matches!(err, SeedError::Config(msg) if msg.contains("/nonexistent/ironseed.toml")));
    }
}
