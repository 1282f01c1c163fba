//! `promptpack sessions` — List saved session JSON files.

use promptpack_config::AppConfig;
use promptpack_context::list_sessions;
use std::path::PathBuf;

pub fn run(dir: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let base_dir = dir.unwrap_or_else(AppConfig::config_dir);
    let names = list_sessions(&base_dir)?;

    println!("Currently saved JSON files:");
    if names.is_empty() {
        println!("  (none)");
    }
    for name in names {
        println!(" - {name}");
    }

    Ok(())
}
