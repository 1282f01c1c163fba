//! Saved-session listing.
//!
//! Sessions live as `*.json` files in a fixed `sessions` subdirectory under a
//! caller-supplied base directory. This module only enumerates names — it
//! never reads or parses session contents.

use promptpack_core::error::ContextError;
use std::path::Path;
use tracing::debug;

/// List the names of saved session files under `base_dir/sessions`.
///
/// A missing sessions directory is treated as "no sessions yet" and yields an
/// empty list. Names come back in file-system enumeration order.
pub fn list_sessions(base_dir: &Path) -> Result<Vec<String>, ContextError> {
    let sessions_dir = base_dir.join("sessions");
    if !sessions_dir.is_dir() {
        debug!(path = %sessions_dir.display(), "No sessions directory");
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(&sessions_dir).map_err(|source| ContextError::DirAccess {
        path: sessions_dir.clone(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ContextError::DirAccess {
            path: sessions_dir.clone(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
    }

    Ok(names)
}
