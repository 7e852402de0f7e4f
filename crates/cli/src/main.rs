mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mdt", version, about = "Markdown corpus linter and fixer")]
struct Cli {
    /// Path to the config file (defaults to ~/.config/mdtidy/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Config profile to use
    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Report style issues without modifying any file
    Check(CheckArgs),

    /// Rewrite markdown files in place with the selected rules
    Fix(FixArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Corpus root to scan (defaults to the active profile's root)
    pub root: Option<PathBuf>,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print only the paths of files with issues
    #[arg(long, conflicts_with = "json")]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct FixArgs {
    /// Corpus root to rewrite (defaults to the active profile's root)
    pub root: Option<PathBuf>,

    /// Rule keys applied in the given order: numbering, markers, figures, hr
    #[arg(long, value_delimiter = ',', value_name = "RULE")]
    pub rules: Vec<String>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            let _ = e.print();
            // --help and --version are not usage errors.
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                return;
            }
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref()),
        Commands::Check(args) => {
            cmd::check::run(cli.config.as_deref(), cli.profile.as_deref(), args)
        }
        Commands::Fix(args) => {
            cmd::fix::run(cli.config.as_deref(), cli.profile.as_deref(), args)
        }
    }
}
