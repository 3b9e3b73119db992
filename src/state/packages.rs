// Packages tab state.
// Holds the package grid, the derived install command, and the build badge.

use crate::packages::{Package, install_command};

use super::list::{LoadingState, SelectableList};
use super::status::BuildStatus;

/// Complete state for the packages tab.
#[derive(Debug, Default)]
pub struct PackagesState {
    /// Package grid contents.
    pub packages: SelectableList<Package>,
    /// Install command covering the loaded packages.
    pub install_command: Option<String>,
    /// Build status badge for the header.
    pub build: LoadingState<BuildStatus>,
    /// Archive uptime message from the status repository.
    pub uptime: LoadingState<String>,
    /// Archive response-time message from the status repository.
    pub response_time: LoadingState<String>,
}

impl PackagesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store loaded packages and refresh the install command.
    pub fn set_loaded(&mut self, packages: Vec<Package>) {
        self.install_command = install_command(&packages);
        self.packages.set_loaded(packages);
    }

    /// Record a failed package load.
    pub fn set_error(&mut self, error: String) {
        self.install_command = None;
        self.packages.set_error(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_manifest;

    #[test]
    fn test_set_loaded_builds_install_command() {
        let mut state = PackagesState::new();
        state.set_loaded(vec![
            Package::from_manifest(&parse_manifest("name = bat\n")),
            Package::from_manifest(&parse_manifest("name = fd\n")),
        ]);

        assert_eq!(
            state.install_command.as_deref(),
            Some("sudo apt update\nsudo apt install bat fd")
        );
        assert_eq!(state.packages.selected(), Some(0));
    }

    #[test]
    fn test_set_error_clears_install_command() {
        let mut state = PackagesState::new();
        state.set_loaded(vec![Package::from_manifest(&parse_manifest("name = bat\n"))]);
        state.set_error("Failed to load packages".to_string());

        assert!(state.install_command.is_none());
        assert!(!state.packages.data.is_loaded());
    }
}
