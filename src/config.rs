use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const MANIFEST_FILE: &str = "sbor.conf";
pub const BUILD_DESCRIPTOR: &str = "CMakeLists.txt";
pub const SOURCE_DIR: &str = "src";
pub const INCLUDE_FILE: &str = "include.h";
pub const BUILD_DIR: &str = "build";
pub const HEADER_SUFFIX: &str = ".h";

/// Typed view of `sbor.conf`.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    pub includes: Includes,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Includes {
    #[serde(default)]
    pub system: Vec<String>,
    #[serde(default)]
    pub custom: Vec<String>,
}

impl Manifest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            version: "0.1.0".to_string(),
            includes: Includes {
                system: vec!["stdio.h".to_string(), "stdlib.h".to_string()],
                custom: Vec::new(),
            },
            extra: serde_json::Map::new(),
        }
    }

    /// Serializes in the layout the manifest locator expects:
    /// `"key": [` with the colon directly after the key.
    pub fn to_document(&self) -> String {
        let quote = |items: &[String]| {
            items
                .iter()
                .map(|s| serde_json::Value::from(s.as_str()).to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "{{\n  \"name\": {},\n  \"version\": {},\n  \"includes\": {{\n    \"system\": [{}],\n    \"custom\": [{}]\n  }}\n}}\n",
            serde_json::Value::from(self.name.as_str()),
            serde_json::Value::from(self.version.as_str()),
            quote(&self.includes.system),
            quote(&self.includes.custom)
        )
    }
}

/// Appends the header suffix unless the name already carries it.
pub fn normalize_header(name: &str) -> String {
    if name.ends_with(HEADER_SUFFIX) {
        name.to_string()
    } else {
        format!("{}{}", name, HEADER_SUFFIX)
    }
}

/// Reads the project name declared by `project(<name> ...)` in `CMakeLists.txt`.
pub fn project_name(root: &Path) -> Option<String> {
    let content = fs::read_to_string(root.join(BUILD_DESCRIPTOR)).ok()?;
    let re = regex::Regex::new(r"(?m)^project\(([^\s)]+)").ok()?;
    re.captures(&content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
