// State management module.
// Handles loading state, list selection, navigation, and status display.

#![allow(dead_code)]

pub mod browse;
pub mod list;
pub mod packages;
pub mod status;

pub use browse::{BrowseState, clean_path, parent_path, prepare_listing};
pub use list::{LoadingState, SelectableList};
pub use packages::PackagesState;
pub use status::{BuildStatus, StatusTone, format_build_time, parse_monitor_message};
