//! Issue records produced by the checker pipeline.

use thiserror::Error;

use crate::frontmatter::schema::FieldType;

/// A single style violation found in a document.
///
/// The `Display` form is the exact report line shown to the user; issues
/// are reporting output, not recoverable errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Issue {
    /// Level-1 headings are disallowed in body content.
    #[error("[H1 HEADER] {line}")]
    H1Header { line: String },

    /// Heading still carrying a manual ordinal prefix.
    #[error("[NUMBERED HEADING] {line}")]
    NumberedHeading { line: String },

    /// Fenced code block declaring a language outside the allow-list.
    #[error("[INVALID LANG] ```{lang}")]
    InvalidLanguage { lang: String },

    /// One of the disallowed caption markers.
    #[error("[BAD MARKER] {line}")]
    BadMarker { line: String },

    /// A `---` line outside the frontmatter region.
    #[error("[BAD HR] --- outside frontmatter")]
    StrayHorizontalRule,

    /// Table/Figure caption still demoted to a level-6 heading.
    #[error("[BAD FIGURE/TABLE] {line}")]
    BadCaption { line: String },

    /// The document does not open with a delimited frontmatter block.
    #[error("FRONTMATTER_MISSING")]
    FrontmatterMissing,

    /// The frontmatter block is not valid YAML key-value content.
    #[error("FRONTMATTER_PARSE_ERROR:{message}")]
    FrontmatterParseError { message: String },

    /// A required frontmatter field is absent.
    #[error("FRONTMATTER_MISSING_FIELD:{field}")]
    MissingField { field: String },

    /// A required frontmatter field has the wrong semantic type.
    #[error("FRONTMATTER_INVALID_TYPE:{field}:expected={expected}:got={actual}")]
    InvalidType {
        field: String,
        expected: FieldType,
        actual: &'static str,
    },
}
