use crate::error::{InvError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_DIRNAME: &str = ".invtrack";
const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "data/inventory.json";
const DEFAULT_AUDIT_LOG: &str = "logs/deletion.log";

/// Configuration for invtrack, stored in .invtrack/config.json
///
/// Relative paths are resolved against the working directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvConfig {
    /// JSON file holding the inventory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Append-only log of deletions
    #[serde(default = "default_audit_log")]
    pub audit_log: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_audit_log() -> String {
    DEFAULT_AUDIT_LOG.to_string()
}

impl Default for InvConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            audit_log: default_audit_log(),
        }
    }
}

impl InvConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(InvError::Io)?;
        let config: InvConfig =
            serde_json::from_str(&content).map_err(InvError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(InvError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(InvError::Serialization)?;
        fs::write(config_path, content).map_err(InvError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "audit-log" => Some(self.audit_log.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        if value.trim().is_empty() {
            return Err(format!("Value for {} cannot be empty", key));
        }
        match key {
            "data-file" => self.data_file = value.to_string(),
            "audit-log" => self.audit_log = value.to_string(),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![
            ("data-file", self.data_file.clone()),
            ("audit-log", self.audit_log.clone()),
        ]
    }
}
