//! `promptpack profiles` — List named profiles.

use promptpack_config::load_profiles;
use std::path::PathBuf;

pub fn run(profiles_file: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let path = super::profiles_path(profiles_file);
    let profiles = load_profiles(&path)
        .map_err(|e| format!("Failed to load profiles from {}: {e}", path.display()))?;

    println!("Profiles in {}:", path.display());
    let mut names: Vec<&String> = profiles.keys().collect();
    names.sort();
    for name in names {
        let profile = &profiles[name];
        match &profile.model {
            Some(model) => println!("  {name:<20} {model}"),
            None => println!("  {name:<20} (default model)"),
        }
    }

    Ok(())
}
