// Repository configuration.
// Identifies which GitHub repository backs the package archive and where
// its published files, manifests, and CI workflow live.

use std::env;

/// Which repository to browse and where its pieces live.
///
/// All values can be overridden via `PANTRY_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository slug, `owner/name`.
    pub repo: String,
    /// Branch the published archive files are served from.
    pub pages_branch: String,
    /// Branch holding package manifests and the lock file.
    pub source_branch: String,
    /// Workflow file whose latest run is shown as the build status.
    pub workflow_file: String,
    /// Repository publishing uptime monitoring data for the archive.
    pub status_repo: String,
    /// Monitor name within the status repository.
    pub status_monitor: String,
}

impl Config {
    /// Load configuration from environment variables with defaults.
    ///
    /// - `PANTRY_REPO` - repository slug (default: `pantry-archive/packages`)
    /// - `PANTRY_PAGES_BRANCH` - published branch (default: `gh-pages`)
    /// - `PANTRY_SOURCE_BRANCH` - manifest branch (default: `main`)
    /// - `PANTRY_WORKFLOW` - workflow file name (default: `packages.yml`)
    /// - `PANTRY_STATUS_REPO` - uptime monitor repository (default: `pantry-archive/status`)
    /// - `PANTRY_STATUS_MONITOR` - monitor name (default: `package-archive`)
    pub fn from_env() -> Self {
        Self {
            repo: env::var("PANTRY_REPO").unwrap_or_else(|_| "pantry-archive/packages".to_string()),
            pages_branch: env::var("PANTRY_PAGES_BRANCH").unwrap_or_else(|_| "gh-pages".to_string()),
            source_branch: env::var("PANTRY_SOURCE_BRANCH").unwrap_or_else(|_| "main".to_string()),
            workflow_file: env::var("PANTRY_WORKFLOW").unwrap_or_else(|_| "packages.yml".to_string()),
            status_repo: env::var("PANTRY_STATUS_REPO")
                .unwrap_or_else(|_| "pantry-archive/status".to_string()),
            status_monitor: env::var("PANTRY_STATUS_MONITOR")
                .unwrap_or_else(|_| "package-archive".to_string()),
        }
    }

    /// URL for a raw file on the source branch.
    pub fn raw_url(&self, path: &str) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}",
            self.repo, self.source_branch, path
        )
    }

    /// URL for a monitor data file in the status repository.
    pub fn status_url(&self, file: &str) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/master/api/{}/{}",
            self.status_repo, self.status_monitor, file
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo: "pantry-archive/packages".to_string(),
            pages_branch: "gh-pages".to_string(),
            source_branch: "main".to_string(),
            workflow_file: "packages.yml".to_string(),
            status_repo: "pantry-archive/status".to_string(),
            status_monitor: "package-archive".to_string(),
        }
    }
}
