//! Finding the program produced by a build.

use crate::error::ProjectError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Strategy for picking the executable out of a build directory.
pub trait ExecutableLocator {
    fn locate(&self, build_dir: &Path) -> Result<Option<PathBuf>, ProjectError>;
}

/// First executable regular file at the top of the build directory, in
/// file-name order, skipping CMake and Makefile artifacts.
///
/// Ambiguous when a project produces more than one binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstExecutable;

impl ExecutableLocator for FirstExecutable {
    fn locate(&self, build_dir: &Path) -> Result<Option<PathBuf>, ProjectError> {
        if !build_dir.is_dir() {
            return Ok(None);
        }

        let entries = WalkDir::new(build_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in entries {
            let entry = entry.map_err(std::io::Error::from)?;
            let name = entry.file_name().to_string_lossy();
            if is_build_artifact(&name) || !entry.file_type().is_file() {
                continue;
            }
            if is_executable(entry.path())? {
                return Ok(Some(entry.into_path()));
            }
        }
        Ok(None)
    }
}

fn is_build_artifact(name: &str) -> bool {
    name.contains("CMake") || name.contains("Makefile") || name == "cmake_install.cmake"
}

#[cfg(unix)]
fn is_executable(path: &Path) -> Result<bool, ProjectError> {
    use std::os::unix::fs::PermissionsExt;
    let mode = std::fs::metadata(path)?.permissions().mode();
    Ok(mode & 0o100 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> Result<bool, ProjectError> {
    Ok(path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("exe")))
}
