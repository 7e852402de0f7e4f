use crate::config::types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }
        if cf.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        let active = profile_override
            .map(ToOwned::to_owned)
            .or(cf.profile.clone())
            .unwrap_or_else(|| "default".to_string());

        let prof = cf
            .profiles
            .get(&active)
            .ok_or_else(|| ConfigError::ProfileNotFound(active.clone()))?;

        Self::resolve_profile(&active, prof, &cf.logging)
    }

    /// Like [`ConfigLoader::load`], but a missing config file at the default
    /// location resolves to [`ResolvedConfig::default`]. An explicitly
    /// passed `--config` path must still exist.
    pub fn load_or_default(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        match Self::load(config_path, profile_override) {
            Err(ConfigError::NotFound(_)) if config_path.is_none() => {
                Ok(ResolvedConfig::default())
            }
            other => other,
        }
    }

    fn resolve_profile(
        active: &str,
        prof: &Profile,
        log_cfg: &LoggingConfig,
    ) -> Result<ResolvedConfig, ConfigError> {
        let root = match &prof.root {
            Some(r) => Some(expand_path(r)?),
            None => None,
        };

        let excluded_folders =
            prof.excluded_folders.iter().map(PathBuf::from).collect();

        // Resolve log file path if present
        let logging = if let Some(ref file) = log_cfg.file {
            let expanded_file = expand_path(&file.to_string_lossy())?;
            LoggingConfig {
                level: log_cfg.level.clone(),
                file_level: log_cfg.file_level.clone(),
                file: Some(expanded_file),
            }
        } else {
            log_cfg.clone()
        };

        Ok(ResolvedConfig {
            active_profile: active.to_string(),
            root,
            excluded_folders,
            logging,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("mdtidy").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("mdtidy").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
