//! Shared output formatting for the check and fix reports.

use serde::Serialize;

/// How a report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Quiet,
}

pub fn resolve_format(json: bool, quiet: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else if quiet {
        OutputFormat::Quiet
    } else {
        OutputFormat::Table
    }
}

/// Per-file check outcome, ready for rendering.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub issues: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.error.is_none()
    }
}

/// Print the check report as per-file blocks.
pub fn print_check_table(reports: &[FileReport]) {
    let total = reports.len();
    let with_issues = reports.iter().filter(|r| !r.is_clean()).count();

    println!(
        "Check Results: {} clean, {} with issues (of {} total)",
        total - with_issues,
        with_issues,
        total
    );
    println!();

    for report in reports {
        println!("{}", report.path);
        if let Some(ref e) = report.error {
            println!("  ! {e}");
            continue;
        }
        if report.issues.is_empty() {
            println!("  clean");
            continue;
        }
        for issue in &report.issues {
            println!("  - {issue}");
        }
    }
}

/// Print the check report as JSON.
pub fn print_check_json(reports: &[FileReport]) {
    #[derive(Serialize)]
    struct Output<'a> {
        total: usize,
        clean: usize,
        with_issues: usize,
        results: &'a [FileReport],
    }

    let with_issues = reports.iter().filter(|r| !r.is_clean()).count();
    let output = Output {
        total: reports.len(),
        clean: reports.len() - with_issues,
        with_issues,
        results: reports,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

/// Print only the paths of files with issues (quiet mode).
pub fn print_check_quiet(reports: &[FileReport]) {
    for report in reports {
        if !report.is_clean() {
            println!("{}", report.path);
        }
    }
}
