// Text format parsers for repository metadata.
// Covers the restricted manifest format and the flat lock file.

#![allow(dead_code, unused_imports)]

pub mod lockfile;
pub mod manifest;

pub use lockfile::parse_lockfile;
pub use manifest::{Table, Value, parse_manifest};
