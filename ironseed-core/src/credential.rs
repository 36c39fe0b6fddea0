//! Service-account key files

use serde::Deserialize;
use std::path::Path;

use crate::error::{Result, SeedError};

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// The subset of a Google service-account JSON key the tool needs
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type", default)]
    pub key_type: Option<String>,
    pub project_id: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    pub private_key: String,
    pub client_email: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("client_email", &self.client_email)
            .field("private_key_id", &self.private_key_id)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

impl ServiceAccountKey {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SeedError::Credential {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&content).map_err(|message| SeedError::Credential {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_json(content: &str) -> std::result::Result<Self, String> {
        let key: ServiceAccountKey =
            serde_json::from_str(content).map_err(|e| format!("Invalid key file: {}", e))?;

        if let Some(kind) = key.key_type.as_deref() {
            if kind != "service_account" {
                return Err(format!("Expected a service_account key, got {:?}", kind));
            }
        }
        for (field, value) in [
            ("project_id", &key.project_id),
            ("client_email", &key.client_email),
            ("private_key", &key.private_key),
        ] {
            if value.trim().is_empty() {
                return Err(format!("Field {} is empty", field));
            }
        }
        Ok(key)
    }
}
