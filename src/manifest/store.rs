use super::list;
use super::locate::{KeyPath, locate};
use crate::config::{MANIFEST_FILE, Manifest, normalize_header};
use crate::error::ProjectError;
use std::fs;
use std::path::{Path, PathBuf};

/// Which header list an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    System,
    Custom,
}

impl HeaderKind {
    pub fn key_path(self) -> KeyPath<'static> {
        match self {
            HeaderKind::System => KeyPath::Nested("includes", "system"),
            HeaderKind::Custom => KeyPath::Nested("includes", "custom"),
        }
    }
}

impl std::fmt::Display for HeaderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderKind::System => write!(f, "system"),
            HeaderKind::Custom => write!(f, "custom"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Added,
    /// The header was already declared; the manifest was not rewritten.
    Unchanged,
}

#[derive(Debug, Clone, Copy)]
enum ListEdit {
    Add,
    Remove,
}

/// Read-modify-write access to `sbor.conf`.
///
/// Every operation re-reads the document, so a store never holds stale
/// state between calls.
#[derive(Debug, Clone)]
pub struct ManifestStore {
    path: PathBuf,
}

impl ManifestStore {
    pub fn open(root: &Path) -> Self {
        Self {
            path: root.join(MANIFEST_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> Result<String, ProjectError> {
        fs::read_to_string(&self.path).map_err(|e| ProjectError::ManifestRead(self.path.clone(), e))
    }

    fn save(&self, document: &str) -> Result<(), ProjectError> {
        fs::write(&self.path, document)
            .map_err(|e| ProjectError::ManifestWrite(self.path.clone(), e))
    }

    /// Returns the `(system, custom)` header lists in declaration order.
    pub fn read_headers(&self) -> Result<(Vec<String>, Vec<String>), ProjectError> {
        let document = self.load()?;
        let system = read_list(&document, HeaderKind::System)?;
        let custom = read_list(&document, HeaderKind::Custom)?;
        Ok((system, custom))
    }

    pub fn add_system_header(&self, name: &str) -> Result<EditOutcome, ProjectError> {
        validate_name(name)?;
        self.add(HeaderKind::System, &normalize_header(name))
    }

    pub fn add_custom_header(&self, name: &str) -> Result<EditOutcome, ProjectError> {
        validate_name(name)?;
        self.add(HeaderKind::Custom, name)
    }

    /// Removes `name` from the system list (suffix-normalized) or, failing
    /// that, from the custom list (verbatim). Reports which list changed.
    pub fn remove_header(&self, name: &str) -> Result<HeaderKind, ProjectError> {
        validate_name(name)?;
        if self.apply(HeaderKind::System, &normalize_header(name), ListEdit::Remove)? {
            return Ok(HeaderKind::System);
        }
        if self.apply(HeaderKind::Custom, name, ListEdit::Remove)? {
            return Ok(HeaderKind::Custom);
        }
        Err(ProjectError::HeaderNotFound(name.to_string()))
    }

    fn add(&self, kind: HeaderKind, header: &str) -> Result<EditOutcome, ProjectError> {
        if self.apply(kind, header, ListEdit::Add)? {
            Ok(EditOutcome::Added)
        } else {
            Ok(EditOutcome::Unchanged)
        }
    }

    /// One read-edit-write cycle on a single list. Returns whether the
    /// document changed; unchanged documents are not written.
    fn apply(&self, kind: HeaderKind, header: &str, edit: ListEdit) -> Result<bool, ProjectError> {
        let document = self.load()?;

        if let Some(found) = locate(&document, kind.key_path()) {
            let updated = match edit {
                ListEdit::Add => list::add_item(&found.text, header),
                ListEdit::Remove => list::remove_item(&found.text, header),
            };
            if updated == found.text {
                return Ok(false);
            }
            self.save(&found.splice(&document, &updated))?;
            return Ok(true);
        }

        // Anchored lookup failed: fall back to a structured rewrite
        let mut manifest = parse_manifest(&document, kind)?;
        let entries = match kind {
            HeaderKind::System => &mut manifest.includes.system,
            HeaderKind::Custom => &mut manifest.includes.custom,
        };
        let changed = match edit {
            ListEdit::Add => {
                if entries.iter().any(|e| e == header) {
                    false
                } else {
                    entries.push(header.to_string());
                    true
                }
            }
            ListEdit::Remove => match entries.iter().position(|e| e == header) {
                Some(pos) => {
                    entries.remove(pos);
                    true
                }
                None => false,
            },
        };
        if changed {
            let rendered = serde_json::to_string_pretty(&manifest)
                .map_err(|e| ProjectError::Io(std::io::Error::other(e)))?;
            self.save(&format!("{}\n", rendered))?;
        }
        Ok(changed)
    }
}

fn read_list(document: &str, kind: HeaderKind) -> Result<Vec<String>, ProjectError> {
    if let Some(found) = locate(document, kind.key_path()) {
        return Ok(list::items(&found.text));
    }
    let manifest = parse_manifest(document, kind)?;
    Ok(match kind {
        HeaderKind::System => manifest.includes.system,
        HeaderKind::Custom => manifest.includes.custom,
    })
}

fn parse_manifest(document: &str, kind: HeaderKind) -> Result<Manifest, ProjectError> {
    serde_json::from_str(document)
        .map_err(|_| ProjectError::ArrayNotFound(kind.key_path().to_string()))
}

fn validate_name(name: &str) -> Result<(), ProjectError> {
    let bad = name.trim().is_empty() || name.contains(['"', '\\', '[', ']', '{', '}', ',']);
    if bad {
        return Err(ProjectError::InvalidHeaderName(name.to_string()));
    }
    Ok(())
}
