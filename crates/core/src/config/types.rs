use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    /// Default corpus root, used when the CLI is invoked without one.
    pub root: Option<String>,
    /// Folders to exclude from corpus discovery (relative to the root).
    #[serde(default)]
    pub excluded_folders: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    /// Default corpus root (absent when the profile does not set one).
    pub root: Option<PathBuf>,
    /// Folders to exclude from corpus discovery, relative to the root.
    pub excluded_folders: Vec<PathBuf>,
    pub logging: LoggingConfig,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            active_profile: "default".to_string(),
            root: None,
            excluded_folders: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}
