//! Line-rewrite rules applied by the fixer pipeline.
//!
//! Each rule is a pure function from a line (plus its frontmatter
//! membership) to a possibly rewritten line; an empty result marks the line
//! for removal. Rules are addressed by stable string keys so callers can
//! select an ordered subset.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

// Heading lines carrying a manual ordinal prefix, e.g. `## 2.1 Title`.
static NUMBERED_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+\d+(\.\d+)*\.?\s+").unwrap());

// Emphasized Table/Figure captions demoted to a level-6 heading.
static CAPTION_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^###### (_(?:Table|Figure).*)").unwrap());

/// Caption markers that must not appear in any document.
pub const BAD_MARKERS: &[&str] = &["##### **Code**", "##### **Output**"];

/// A fix rule key was given that no rule answers to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fix rule: {0}")]
pub struct UnknownRule(pub String);

/// The fixer rule registry: each variant is a pure line rewrite,
/// addressable by a stable string key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixKind {
    /// Strip a leading ordinal from headings: `## 2.1 Title` -> `## Title`.
    Numbering,
    /// Delete lines that are exactly one of [`BAD_MARKERS`].
    Markers,
    /// Promote demoted captions: `###### _Table 1: X_` -> `_Table 1: X_`.
    Figures,
    /// Delete standalone `---` lines outside the frontmatter region.
    Hr,
}

impl FixKind {
    /// Registry order; also the recommended application order.
    pub const ALL: [FixKind; 4] =
        [FixKind::Numbering, FixKind::Markers, FixKind::Figures, FixKind::Hr];

    pub fn key(self) -> &'static str {
        match self {
            FixKind::Numbering => "numbering",
            FixKind::Markers => "markers",
            FixKind::Figures => "figures",
            FixKind::Hr => "hr",
        }
    }

    /// Apply this rule to a single line.
    ///
    /// An empty result marks the line for removal by the pipeline.
    pub fn apply<'a>(self, line: &'a str, in_frontmatter: bool) -> Cow<'a, str> {
        match self {
            FixKind::Numbering => NUMBERED_HEADING_RE.replace(line, "${1} "),
            FixKind::Markers => {
                if BAD_MARKERS.contains(&line.trim()) {
                    Cow::Borrowed("")
                } else {
                    Cow::Borrowed(line)
                }
            }
            FixKind::Figures => CAPTION_HEADING_RE.replace(line, "${1}"),
            FixKind::Hr => {
                if !in_frontmatter && line.trim() == "---" {
                    Cow::Borrowed("")
                } else {
                    Cow::Borrowed(line)
                }
            }
        }
    }
}

impl fmt::Display for FixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for FixKind {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "numbering" => Ok(FixKind::Numbering),
            "markers" => Ok(FixKind::Markers),
            "figures" => Ok(FixKind::Figures),
            "hr" => Ok(FixKind::Hr),
            other => Err(UnknownRule(other.to_string())),
        }
    }
}

/// Parse caller-supplied rule keys, preserving order.
///
/// Fails on the first unknown key so nothing runs with a bad selection.
pub fn parse_rule_keys<I, S>(keys: I) -> Result<Vec<FixKind>, UnknownRule>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keys.into_iter().map(|k| k.as_ref().parse()).collect()
}
