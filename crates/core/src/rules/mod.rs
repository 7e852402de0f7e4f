//! The rule model: frontmatter boundary tracking, the fixer rule registry,
//! and the issue records produced by checking.

pub mod fixers;
pub mod issues;
pub mod tracker;

pub use fixers::{BAD_MARKERS, FixKind, UnknownRule, parse_rule_keys};
pub use issues::Issue;
pub use tracker::{FrontmatterTracker, Region};
