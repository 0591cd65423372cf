//! Configuration loading and management

use crate::core::proof::ACCEPTED_EXTENSIONS;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Store collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the bills API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5678".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Proof-file upload configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Accepted proof-file extensions (lowercase)
    #[serde(default = "default_extensions")]
    pub accepted_extensions: Vec<String>,

    /// URL recorded for a pending submission before the real upload resolves
    #[serde(default = "default_placeholder_url")]
    pub placeholder_url: String,
}

fn default_extensions() -> Vec<String> {
    ACCEPTED_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_placeholder_url() -> String {
    "https://localhost/storage/pending".to_string()
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: default_extensions(),
            placeholder_url: default_placeholder_url(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub uploads: UploadConfig,
}

impl AppConfig {
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
}
