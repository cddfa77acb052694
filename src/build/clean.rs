//! Build artifact cleanup (`sbor clean`).

use crate::config::{BUILD_DESCRIPTOR, BUILD_DIR, MANIFEST_FILE};
use crate::error::ProjectError;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    Removed,
    AlreadyClean,
}

pub fn clean(root: &Path) -> Result<CleanOutcome, ProjectError> {
    let missing: Vec<String> = [BUILD_DESCRIPTOR, MANIFEST_FILE]
        .iter()
        .filter(|marker| !root.join(marker).is_file())
        .map(|marker| marker.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ProjectError::ProjectInvalid(missing));
    }

    let build_dir = root.join(BUILD_DIR);
    if !build_dir.exists() {
        return Ok(CleanOutcome::AlreadyClean);
    }
    fs::remove_dir_all(&build_dir)?;
    Ok(CleanOutcome::Removed)
}
