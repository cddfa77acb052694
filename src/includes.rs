//! Generation of `src/include.h` from the manifest.
//!
//! The file is rebuilt from scratch on every call; hand edits are lost.

use crate::config::{INCLUDE_FILE, SOURCE_DIR};
use crate::error::ProjectError;
use crate::manifest::ManifestStore;
use std::fs;
use std::path::{Path, PathBuf};

pub fn include_file_path(root: &Path) -> PathBuf {
    root.join(SOURCE_DIR).join(INCLUDE_FILE)
}

pub fn render(system: &[String], custom: &[String]) -> String {
    let mut out = String::new();
    out.push_str("// include.h - generated by sbor from sbor.conf\n");
    out.push_str("// Do not edit by hand: changes are overwritten on every `sbor add`/`sbor remove`.\n");
    out.push_str("#ifndef SBOR_INCLUDE_H\n#define SBOR_INCLUDE_H\n\n");

    out.push_str("// System headers\n");
    for header in system {
        out.push_str(&format!("#include <{}>\n", header));
    }

    out.push_str("\n// Custom headers\n");
    if custom.is_empty() {
        out.push_str("// (no custom headers)\n");
    }
    for header in custom {
        out.push_str(&format!("#include \"{}\"\n", header));
    }

    out.push_str("\n#endif // SBOR_INCLUDE_H\n");
    out
}

/// Rewrites the include file for the project rooted at `root`.
pub fn regenerate(root: &Path) -> Result<PathBuf, ProjectError> {
    let store = ManifestStore::open(root);
    let (system, custom) = store.read_headers()?;
    let path = include_file_path(root);
    fs::write(&path, render(&system, &custom))?;
    Ok(path)
}
