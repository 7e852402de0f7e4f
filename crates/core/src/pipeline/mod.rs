//! The check and fix passes over whole documents.
//!
//! Checking inspects and reports; fixing rewrites in place. Both passes
//! classify frontmatter with the same tracker so they agree on every input.

pub mod checker;
pub mod fixer;

pub use checker::{CheckError, VALID_LANGUAGES, check_file, run_all_checks};
pub use fixer::{FixError, FixOutcome, fix_file, transform_lines};
