// Parser for the flat lock file pinning package versions.
// Each `name = version` line produces one entry; later lines win.

use std::collections::BTreeMap;

/// Parse lock file text into a name -> version map.
///
/// Blank lines, `#`-comments, and lines without `=` (or with an empty name)
/// are skipped. Version strings are not validated.
pub fn parse_lockfile(input: &str) -> BTreeMap<String, String> {
    let mut versions = BTreeMap::new();

    for line in input.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some(eq) = trimmed.find('=') else {
            continue;
        };
        if eq == 0 {
            continue;
        }

        let name = trimmed[..eq].trim().to_string();
        let version = trimmed[eq + 1..].trim().to_string();
        versions.insert(name, version);
    }

    versions
}
