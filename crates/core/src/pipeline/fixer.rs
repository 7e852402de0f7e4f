//! The rewrite pipeline.
//!
//! Applies a caller-selected, ordered subset of fix rules to every line and
//! rewrites the file in place. Frontmatter delimiters pass through
//! untouched; any line left empty or whitespace-only after the enabled
//! rules is dropped from the output, including lines that were already
//! blank. The whole file content is replaced and no backup is kept.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::rules::fixers::FixKind;
use crate::rules::tracker::{FrontmatterTracker, Region};

#[derive(Debug, Error)]
pub enum FixError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of fixing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixOutcome {
    /// Whether the rewrite changed the file content.
    pub changed: bool,
    /// Lines dropped by rule deletion or blank-line compaction.
    pub lines_removed: usize,
}

/// Run the enabled rules, in the given order, over every line.
pub fn transform_lines<'a, I>(lines: I, enabled: &[FixKind]) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tracker = FrontmatterTracker::new();
    let mut out = Vec::new();

    for line in lines {
        let region = tracker.classify(line);

        // Frontmatter delimiters are never rewritten or dropped.
        if region == Region::Delimiter {
            out.push(line.to_string());
            continue;
        }

        let mut current = line.to_string();
        for rule in enabled {
            current = rule.apply(&current, region.in_frontmatter()).into_owned();
        }

        if !current.trim().is_empty() {
            out.push(current);
        }
    }

    out
}

/// Rewrite a file in place.
///
/// The transformed lines are joined with `\n` and a single trailing newline
/// is appended. Callers that need recovery must snapshot externally.
pub fn fix_file(path: &Path, enabled: &[FixKind]) -> Result<FixOutcome, FixError> {
    let content = fs::read_to_string(path)
        .map_err(|e| FixError::Read { path: path.to_path_buf(), source: e })?;

    let original_count = content.lines().count();
    let transformed = transform_lines(content.lines(), enabled);
    let lines_removed = original_count - transformed.len();

    let output = transformed.join("\n") + "\n";
    let changed = output != content;

    fs::write(path, &output)
        .map_err(|e| FixError::Write { path: path.to_path_buf(), source: e })?;

    tracing::debug!(
        "fixed {}: changed={} lines_removed={}",
        path.display(),
        changed,
        lines_removed
    );

    Ok(FixOutcome { changed, lines_removed })
}
