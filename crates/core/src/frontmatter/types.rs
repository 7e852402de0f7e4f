//! Frontmatter types.

use serde::Deserialize;
use serde_yaml::Value;
use std::collections::HashMap;

/// Represents parsed YAML frontmatter from a markdown document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Frontmatter {
    /// Fields as key-value pairs.
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}
