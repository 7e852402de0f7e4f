//! Frontmatter extraction, parsing, and schema validation.
//!
//! This module provides functionality to:
//! - Extract and parse the YAML frontmatter block from a markdown document
//! - Validate parsed frontmatter against the required-field schema

pub mod parser;
pub mod schema;
pub mod types;

pub use parser::{FrontmatterError, extract_raw, parse};
pub use schema::{FieldType, REQUIRED_FIELDS, validate};
pub use types::Frontmatter;
