//! Frontmatter extraction and parsing.
//!
//! Extraction is strict: the block must open with a `---` line at the very
//! start of the document and close at the next line whose trimmed content
//! is exactly `---`. YAML parsing is a black box; anything the parser
//! rejects, including non-mapping content, surfaces as
//! [`FrontmatterError::InvalidYaml`].

use super::types::Frontmatter;
use thiserror::Error;

/// Errors produced when reading a document's frontmatter block.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// The document does not open with a delimited frontmatter block.
    #[error("missing or malformed frontmatter")]
    Missing,

    /// The block is present but is not valid YAML key-value content.
    #[error("invalid YAML frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Extract the raw text strictly between the opening `---` pair.
///
/// Returns `None` when the document does not open with a frontmatter block.
pub fn extract_raw(content: &str) -> Option<&str> {
    let first_line_end = content.find('\n')?;
    if content[..first_line_end].trim() != "---" {
        return None;
    }

    let rest = &content[first_line_end + 1..];
    let end = find_closing_delimiter(rest)?;
    Some(&rest[..end])
}

/// Find the byte position of the closing `---` line.
fn find_closing_delimiter(content: &str) -> Option<usize> {
    let mut pos = 0;
    for line in content.lines() {
        if line.trim() == "---" {
            return Some(pos);
        }
        pos += line.len() + 1;
    }
    None
}

/// Parse a document's frontmatter block.
///
/// An empty block (`---` immediately followed by `---`) parses as an empty
/// mapping, so schema validation reports every required field as missing.
pub fn parse(content: &str) -> Result<Frontmatter, FrontmatterError> {
    let raw = extract_raw(content).ok_or(FrontmatterError::Missing)?;
    if raw.trim().is_empty() {
        return Ok(Frontmatter::default());
    }
    Ok(serde_yaml::from_str(raw)?)
}
