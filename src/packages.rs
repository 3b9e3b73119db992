// Package model built from parsed manifests and the lock file.
// Fills in display fallbacks and resolves versions through the lock.

#![allow(dead_code)]

use std::collections::BTreeMap;

use crate::parse::{Table, Value};

/// A package as shown in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub description: String,
    pub version: String,
    pub kind: String,
    pub homepage: Option<String>,
}

impl Package {
    /// Build a package from a parsed manifest, with display fallbacks for
    /// every missing field.
    pub fn from_manifest(manifest: &Table) -> Self {
        let field = |key: &str| {
            manifest
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            name: field("name").unwrap_or_else(|| "Unknown".to_string()),
            description: field("description").unwrap_or_else(|| "No description".to_string()),
            version: field("version").unwrap_or_else(|| "latest".to_string()),
            kind: field("type").unwrap_or_else(|| "unknown".to_string()),
            homepage: field("homepage"),
        }
    }

    /// Resolve the displayed version through the lock file.
    /// A locked version always wins; otherwise the manifest version stands,
    /// including a literal "latest".
    pub fn apply_lock(&mut self, versions: &BTreeMap<String, String>) {
        if let Some(locked) = versions.get(&self.name) {
            self.version = locked.clone();
        }
    }
}

/// Sort packages by name for stable display order.
pub fn sort_packages(packages: &mut [Package]) {
    packages.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Build the apt install command covering the resident packages.
pub fn install_command(packages: &[Package]) -> Option<String> {
    let names: Vec<&str> = packages
        .iter()
        .map(|pkg| pkg.name.as_str())
        .filter(|name| !name.is_empty() && *name != "Unknown")
        .collect();

    if names.is_empty() {
        return None;
    }

    Some(format!(
        "sudo apt update\nsudo apt install {}",
        names.join(" ")
    ))
}
