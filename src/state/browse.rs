// Browse tab state.
// Tracks the current directory path, listing data, and visit history.

use crate::github::ContentEntry;

use super::list::SelectableList;

/// Files the published branch needs but the listing should hide.
const IGNORED_FILES: &[&str] = &[".nojekyll", "index.html", "404.html", "CNAME"];

/// Normalize a browse path: collapse repeated slashes, strip leading and
/// trailing ones. The result is "" for the repository root.
pub fn clean_path(path: &str) -> String {
    let mut cleaned = String::with_capacity(path.len());
    let mut prev_slash = false;

    for c in path.chars() {
        if c == '/' {
            if !prev_slash && !cleaned.is_empty() {
                cleaned.push('/');
            }
            prev_slash = true;
        } else {
            cleaned.push(c);
            prev_slash = false;
        }
    }

    if cleaned.ends_with('/') {
        cleaned.pop();
    }
    cleaned
}

/// Path one level up from a clean path. Root's parent is root.
pub fn parent_path(path: &str) -> String {
    match path.rfind('/') {
        Some(i) => path[..i].to_string(),
        None => String::new(),
    }
}

/// Sort and filter a raw listing for display: directories first, then files,
/// each group alphabetical; dotfiles and site plumbing hidden.
pub fn prepare_listing(mut entries: Vec<ContentEntry>) -> Vec<ContentEntry> {
    entries.retain(|entry| !IGNORED_FILES.contains(&entry.name.as_str()));
    entries.retain(|entry| !entry.name.starts_with('.'));

    entries.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => a.name.cmp(&b.name),
    });

    entries
}

/// Complete state for the browse tab.
#[derive(Debug)]
pub struct BrowseState {
    /// Current directory, normalized ("" = repository root).
    pub path: String,
    /// Paths visited before the current one, for going back.
    pub history: Vec<String>,
    /// Listing for the current directory.
    pub listing: SelectableList<ContentEntry>,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            path: String::new(),
            history: Vec::new(),
            listing: SelectableList::new(),
        }
    }
}

impl BrowseState {
    pub fn new(initial_path: &str) -> Self {
        Self {
            path: clean_path(initial_path),
            ..Self::default()
        }
    }

    /// Move into a subdirectory, remembering where we came from.
    pub fn enter(&mut self, path: &str) {
        let next = clean_path(path);
        if next == self.path {
            return;
        }
        self.history.push(std::mem::replace(&mut self.path, next));
        self.listing = SelectableList::new();
    }

    /// Go back to the previously visited path. Returns false at the start
    /// of history.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                self.path = prev;
                self.listing = SelectableList::new();
                true
            }
            None => false,
        }
    }

    /// Whether the current directory is the repository root.
    pub fn at_root(&self) -> bool {
        self.path.is_empty()
    }

    /// The breadcrumb-style label for the current location.
    pub fn location_label(&self) -> String {
        if self.at_root() {
            "Browse repository".to_string()
        } else {
            format!("Browse repository/{}", self.path)
        }
    }

    /// Download URL of the selected entry, when it is a file.
    pub fn selected_download_url(&self) -> Option<&str> {
        let entry = self.listing.selected_item()?;
        if entry.is_dir() {
            return None;
        }
        entry.download_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::ContentKind;

    fn entry(name: &str, kind: ContentKind) -> ContentEntry {
        ContentEntry {
            name: name.to_string(),
            path: name.to_string(),
            kind,
            size: 0,
            download_url: None,
            html_url: None,
        }
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path("/"), "");
        assert_eq!(clean_path(""), "");
        assert_eq!(clean_path("/pool/"), "pool");
        assert_eq!(clean_path("pool//main///p"), "pool/main/p");
        assert_eq!(clean_path("//pool"), "pool");
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path("pool/main/p"), "pool/main");
        assert_eq!(parent_path("pool"), "");
        assert_eq!(parent_path(""), "");
    }

    #[test]
    fn test_prepare_listing_sorts_dirs_first() {
        let entries = vec![
            entry("zeta.deb", ContentKind::File),
            entry("pool", ContentKind::Dir),
            entry("alpha.deb", ContentKind::File),
            entry("dists", ContentKind::Dir),
        ];

        let names: Vec<String> = prepare_listing(entries)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["dists", "pool", "alpha.deb", "zeta.deb"]);
    }

    #[test]
    fn test_prepare_listing_hides_plumbing() {
        let entries = vec![
            entry(".nojekyll", ContentKind::File),
            entry("index.html", ContentKind::File),
            entry("404.html", ContentKind::File),
            entry("CNAME", ContentKind::File),
            entry(".hidden", ContentKind::Dir),
            entry("Release", ContentKind::File),
        ];

        let names: Vec<String> = prepare_listing(entries)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["Release"]);
    }

    #[test]
    fn test_enter_and_back() {
        let mut browse = BrowseState::new("/");
        assert!(browse.at_root());

        browse.enter("pool/");
        assert_eq!(browse.path, "pool");

        browse.enter("pool/main");
        assert_eq!(browse.path, "pool/main");

        assert!(browse.back());
        assert_eq!(browse.path, "pool");

        assert!(browse.back());
        assert!(browse.at_root());
        assert!(!browse.back());
    }

    #[test]
    fn test_enter_same_path_is_noop() {
        let mut browse = BrowseState::new("pool");
        browse.enter("/pool/");
        assert!(browse.history.is_empty());
    }

    #[test]
    fn test_selected_download_url() {
        let mut browse = BrowseState::new("");
        let mut file = entry("Release", ContentKind::File);
        file.download_url = Some("https://example.invalid/Release".to_string());
        browse
            .listing
            .set_loaded(vec![entry("pool", ContentKind::Dir), file]);

        // Directory selected: no URL
        assert_eq!(browse.selected_download_url(), None);

        browse.listing.select_next();
        assert_eq!(
            browse.selected_download_url(),
            Some("https://example.invalid/Release")
        );
    }

    #[test]
    fn test_location_label() {
        assert_eq!(BrowseState::new("").location_label(), "Browse repository");
        assert_eq!(
            BrowseState::new("pool/main").location_label(),
            "Browse repository/pool/main"
        );
    }
}
