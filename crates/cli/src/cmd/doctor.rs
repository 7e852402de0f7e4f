//! Doctor command: validate configuration and print resolved settings.

use std::path::Path;

use mdtidy_core::config::{ConfigLoader, default_config_path};

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            println!("OK   mdt doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            match rc.root {
                Some(ref root) => println!("root: {}", root.display()),
                None => println!("root: (none, pass ROOT on the command line)"),
            }
            if rc.excluded_folders.is_empty() {
                println!("excluded_folders: (none)");
            } else {
                let folders: Vec<String> = rc
                    .excluded_folders
                    .iter()
                    .map(|f| f.display().to_string())
                    .collect();
                println!("excluded_folders: {}", folders.join(", "));
            }
            println!("logging.level: {}", rc.logging.level);
            if let Some(ref file) = rc.logging.file {
                println!("logging.file: {}", file.display());
            }
        }
        Err(e) => {
            println!("FAIL mdt doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
