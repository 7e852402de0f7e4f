//! Check command: report style issues without touching any file.

use std::path::{Path, PathBuf};

use mdtidy_core::config::ConfigLoader;
use mdtidy_core::corpus::{CorpusWalker, WalkedFile};
use mdtidy_core::pipeline::check_file;

use crate::cmd::output::{self, FileReport, OutputFormat};
use crate::{CheckArgs, logging};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: CheckArgs) {
    let rc = match ConfigLoader::load_or_default(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };
    logging::init(&rc);

    let root = resolve_root(args.root, rc.root.clone());
    let files = discover(&root, rc.excluded_folders.clone());

    if files.is_empty() {
        println!("No markdown files found under {}", root.display());
        return;
    }

    let mut reports = Vec::with_capacity(files.len());
    for file in &files {
        let path = file.relative_path.display().to_string();
        match check_file(&file.absolute_path) {
            Ok(issues) => reports.push(FileReport {
                path,
                issues: issues.iter().map(ToString::to_string).collect(),
                error: None,
            }),
            // Unreadable files are recorded and the loop continues.
            Err(e) => {
                tracing::warn!("{e}");
                reports.push(FileReport {
                    path,
                    issues: Vec::new(),
                    error: Some(e.to_string()),
                });
            }
        }
    }

    match output::resolve_format(args.json, args.quiet) {
        OutputFormat::Table => output::print_check_table(&reports),
        OutputFormat::Json => output::print_check_json(&reports),
        OutputFormat::Quiet => output::print_check_quiet(&reports),
    }

    // Issues are advisory: check mode never fails the process.
}

/// Resolve the corpus root from the CLI argument or the active profile.
pub(crate) fn resolve_root(arg: Option<PathBuf>, profile_root: Option<PathBuf>) -> PathBuf {
    match arg.or(profile_root) {
        Some(root) => root,
        None => {
            eprintln!(
                "Error: no corpus root given; pass ROOT or set one in the active profile"
            );
            std::process::exit(1);
        }
    }
}

/// Discover markdown files under the root, or exit on walker errors.
pub(crate) fn discover(root: &Path, excluded: Vec<PathBuf>) -> Vec<WalkedFile> {
    let walker = match CorpusWalker::with_exclusions(root, excluded) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match walker.walk() {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
