pub mod chat;
pub mod profiles;
pub mod sessions;
pub mod status;
pub mod tokens;

use promptpack_config::{AppConfig, Profile};
use std::path::PathBuf;

/// Resolve the profiles file path: explicit flag, or `<config dir>/profiles.yaml`.
pub fn profiles_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| AppConfig::config_dir().join("profiles.yaml"))
}

/// Look up a named profile, erroring if the name is unknown.
pub fn resolve_profile(
    name: &str,
    profiles_file: Option<PathBuf>,
) -> Result<Profile, Box<dyn std::error::Error>> {
    let path = profiles_path(profiles_file);
    let mut profiles = promptpack_config::load_profiles(&path)?;
    profiles
        .remove(name)
        .ok_or_else(|| format!("No profile named '{name}' in {}", path.display()).into())
}
