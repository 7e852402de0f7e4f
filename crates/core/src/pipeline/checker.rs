//! The inspection pipeline.
//!
//! Every checker runs on every document, unconditionally and in a fixed
//! order; nothing is mutated. Issues come back in input line order per
//! detector.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::frontmatter::schema;
use crate::rules::fixers::BAD_MARKERS;
use crate::rules::issues::Issue;
use crate::rules::tracker::{FrontmatterTracker, Region};

static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s+").unwrap());

static NUMBERED_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+\s+\d+(\.\d+)*\s+").unwrap());

static CAPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^###### _(Table|Figure)").unwrap());

/// Language identifiers accepted on fenced code blocks, all lowercase.
/// Comparison is case-insensitive.
pub const VALID_LANGUAGES: &[&str] = &[
    "bash", "c", "cpp", "css", "go", "haskell", "html", "java", "javascript",
    "json", "julia", "kotlin", "lua", "markdown", "nix", "plaintext", "python",
    "r", "rust", "scss", "sh", "sql", "swift", "text", "toml", "typescript",
    "yaml",
];

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Flag level-1 headings anywhere in the document.
fn check_h1_headings(lines: &[&str]) -> Vec<Issue> {
    lines
        .iter()
        .filter(|line| H1_RE.is_match(line))
        .map(|line| Issue::H1Header { line: line.trim().to_string() })
        .collect()
}

/// Flag headings still carrying a manual ordinal prefix.
fn check_numbered_headings(lines: &[&str]) -> Vec<Issue> {
    lines
        .iter()
        .filter(|line| NUMBERED_HEADING_RE.is_match(line))
        .map(|line| Issue::NumberedHeading { line: line.trim().to_string() })
        .collect()
}

/// Flag fenced code blocks declaring a language outside the allow-list.
fn check_fence_languages(lines: &[&str]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for line in lines {
        if let Some(info) = line.strip_prefix("```") {
            let lang = info.trim().to_lowercase();
            if !lang.is_empty() && !VALID_LANGUAGES.contains(&lang.as_str()) {
                issues.push(Issue::InvalidLanguage { lang });
            }
        }
    }
    issues
}

/// Flag the disallowed caption markers.
fn check_markers(lines: &[&str]) -> Vec<Issue> {
    lines
        .iter()
        .filter(|line| BAD_MARKERS.contains(&line.trim()))
        .map(|line| Issue::BadMarker { line: line.trim().to_string() })
        .collect()
}

/// Flag `---` lines outside the frontmatter region.
fn check_horizontal_rules(lines: &[&str]) -> Vec<Issue> {
    let mut tracker = FrontmatterTracker::new();
    let mut issues = Vec::new();
    for line in lines {
        let region = tracker.classify(line);
        if region == Region::Body && line.trim() == "---" {
            issues.push(Issue::StrayHorizontalRule);
        }
    }
    issues
}

/// Flag Table/Figure captions still demoted to a level-6 heading.
fn check_captions(lines: &[&str]) -> Vec<Issue> {
    lines
        .iter()
        .filter(|line| CAPTION_RE.is_match(line))
        .map(|line| Issue::BadCaption { line: line.trim().to_string() })
        .collect()
}

/// Run every checker over the document, in a fixed order.
pub fn run_all_checks(content: &str) -> Vec<Issue> {
    let lines: Vec<&str> = content.lines().collect();
    let mut issues = Vec::new();
    issues.extend(check_h1_headings(&lines));
    issues.extend(check_numbered_headings(&lines));
    issues.extend(check_fence_languages(&lines));
    issues.extend(check_markers(&lines));
    issues.extend(check_horizontal_rules(&lines));
    issues.extend(check_captions(&lines));
    issues.extend(schema::validate(content));
    issues
}

/// Check a single file without modifying it.
///
/// An empty issue list means the file is clean; rendering that is the
/// caller's concern.
pub fn check_file(path: &Path) -> Result<Vec<Issue>, CheckError> {
    let content = fs::read_to_string(path)
        .map_err(|e| CheckError::Read { path: path.to_path_buf(), source: e })?;
    let issues = run_all_checks(&content);
    tracing::debug!("checked {}: {} issue(s)", path.display(), issues.len());
    Ok(issues)
}
