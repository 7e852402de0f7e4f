//! Required-field schema validation for frontmatter.
//!
//! Every document in the corpus must carry the same metadata block. The
//! schema is a fixed table of required field names and semantic types;
//! fields outside the table are ignored so documents can carry extra
//! metadata without breaking validation.

use std::fmt;

use serde_yaml::Value;

use super::parser::{self, FrontmatterError};
use crate::rules::issues::Issue;

/// Semantic type of a required frontmatter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    List,
    Boolean,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::List => "list",
            FieldType::Boolean => "boolean",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::List => value.is_sequence(),
            FieldType::Boolean => value.is_bool(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields every document's frontmatter must carry.
pub const REQUIRED_FIELDS: &[(&str, FieldType)] = &[
    ("title", FieldType::String),
    ("categories", FieldType::List),
    ("tags", FieldType::List),
    ("tools", FieldType::List),
    ("summary", FieldType::String),
    ("catchphrase", FieldType::String),
    ("layout", FieldType::String),
    ("draft", FieldType::Boolean),
    ("math", FieldType::Boolean),
    ("date", FieldType::String),
];

/// Get a human-readable type name for a YAML value.
fn yaml_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

/// Validate a document's frontmatter against the required-field schema.
///
/// Every failure becomes an issue record; validation never fails the
/// caller.
pub fn validate(content: &str) -> Vec<Issue> {
    let fm = match parser::parse(content) {
        Ok(fm) => fm,
        Err(FrontmatterError::Missing) => return vec![Issue::FrontmatterMissing],
        Err(FrontmatterError::InvalidYaml(e)) => {
            return vec![Issue::FrontmatterParseError { message: e.to_string() }];
        }
    };

    let mut issues = Vec::new();
    for (field, expected) in REQUIRED_FIELDS {
        match fm.fields.get(*field) {
            None => issues.push(Issue::MissingField { field: (*field).to_string() }),
            Some(value) if !expected.matches(value) => {
                issues.push(Issue::InvalidType {
                    field: (*field).to_string(),
                    expected: *expected,
                    actual: yaml_type_name(value),
                });
            }
            Some(_) => {}
        }
    }
    issues
}
