// Cache path utilities.
// Locates the persisted cache slot and application state file.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/pantry on macOS/Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pantry").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the single cache slot holding all API responses.
pub fn api_cache_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("api_cache.json"))
}

/// Path to the application state file (theme and the like).
pub fn state_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("state.json"))
}
