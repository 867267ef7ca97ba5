//! Combat log path resolution.
//!
//! An explicit path must exist. Without one, the configured search paths are
//! tried in order relative to the working directory, which covers running
//! from the WoW folder, its `Interface/AddOns` folders, or next to the log.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tracing::debug;

use crate::config::InputConfig;

/// Resolve the combat log to read.
pub fn resolve_input(explicit: Option<&Path>, input: &InputConfig) -> Result<PathBuf> {
    resolve_input_in(Path::new(""), explicit, input)
}

/// Like [`resolve_input`] with relative paths taken from `base`.
pub fn resolve_input_in(
    base: &Path,
    explicit: Option<&Path>,
    input: &InputConfig,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        let path = base.join(path);
        if !path.is_file() {
            bail!("File not found: {}", path.display());
        }
        return Ok(path);
    }

    match find_combat_log(base, &input.search_paths) {
        Some(path) => Ok(path),
        None => bail!(
            "Could not find WoWCombatLog.txt (searched: {}). \
             Pass the path explicitly; the file lives in WoW/Logs/WoWCombatLog.txt",
            input
                .search_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// First candidate under `base` that is an existing file.
pub fn find_combat_log(base: &Path, candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().map(|c| base.join(c)).find(|path| {
        let found = path.is_file();
        debug!(path = %path.display(), found, "checking combat log candidate");
        found
    })
}
