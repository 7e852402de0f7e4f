//! Configuration loading and resolution.
//!
//! The config file is optional: `mdt check` and `mdt fix` fall back to
//! defaults when `~/.config/mdtidy/config.toml` is absent.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig};
