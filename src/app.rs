// App state and main event loop.
// Manages tabs, keyboard input, and the data loads driven by navigation.
// Fetches are awaited one at a time from the loop; nothing runs in the
// background and nothing is retried.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;

use crate::cache::{self, CacheStore, LISTING_TTL, STATUS_TTL};
use crate::config::Config;
use crate::error::Result;
use crate::github::{ContentEntry, GitHubClient, WorkflowRun};
use crate::packages::{Package, sort_packages};
use crate::parse::{parse_lockfile, parse_manifest};
use crate::state::{
    BrowseState, BuildStatus, LoadingState, PackagesState, parse_monitor_message, prepare_listing,
};
use crate::theme::{AppState, Theme};
use crate::ui;

/// Cache key for the build status fetch.
const BUILD_STATUS_KEY: &str = "build_status";

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Packages,
    Browse,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Packages => "Packages",
            Tab::Browse => "Browse",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Packages => Tab::Browse,
            Tab::Browse => Tab::Packages,
        }
    }

    pub fn prev(&self) -> Self {
        // Two tabs, so prev and next coincide.
        self.next()
    }
}

/// Main application state.
pub struct App {
    /// Repository configuration.
    pub config: Config,
    /// GitHub API client.
    pub client: GitHubClient,
    /// Persisted response cache.
    pub cache: CacheStore,
    /// Active color theme.
    pub theme: Theme,
    /// Currently active tab.
    pub active_tab: Tab,
    /// Packages tab state.
    pub packages: PackagesState,
    /// Browse tab state.
    pub browse: BrowseState,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, initial_path: &str) -> Result<Self> {
        let client = GitHubClient::from_env()?;
        let cache = CacheStore::open(cache::api_cache_path());
        let theme = AppState::load(cache::state_path().as_deref()).theme;

        Ok(Self {
            config,
            client,
            cache,
            theme,
            active_tab: Tab::default(),
            packages: PackagesState::new(),
            browse: BrowseState::new(initial_path),
            should_quit: false,
        })
    }

    /// Main event loop.
    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        // Initial loads.
        self.load_service_status().await;
        self.load_build_status().await;
        self.load_packages().await;
        self.load_listing().await;

        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events().await?;
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    async fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') => self.should_quit = true,
                        KeyCode::Tab => self.active_tab = self.active_tab.next(),
                        KeyCode::BackTab => self.active_tab = self.active_tab.prev(),
                        KeyCode::Char('t') => self.toggle_theme(),
                        KeyCode::Char('r') => self.refresh().await,
                        KeyCode::Up => self.select_prev(),
                        KeyCode::Down => self.select_next(),
                        KeyCode::Enter => self.activate_selection().await,
                        KeyCode::Esc => self.go_back().await,
                        KeyCode::Backspace | KeyCode::Left => self.go_up().await,
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }

    /// Toggle the theme and persist the choice.
    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        AppState { theme: self.theme }.save(cache::state_path().as_deref());
    }

    /// Reload the data behind the active tab. Cached entries within their
    /// TTL still win; refresh is not a cache bypass.
    async fn refresh(&mut self) {
        match self.active_tab {
            Tab::Packages => {
                self.load_service_status().await;
                self.load_build_status().await;
                self.load_packages().await;
            }
            Tab::Browse => self.load_listing().await,
        }
    }

    fn select_prev(&mut self) {
        match self.active_tab {
            Tab::Packages => self.packages.packages.select_prev(),
            Tab::Browse => self.browse.listing.select_prev(),
        }
    }

    fn select_next(&mut self) {
        match self.active_tab {
            Tab::Packages => self.packages.packages.select_next(),
            Tab::Browse => self.browse.listing.select_next(),
        }
    }

    /// Enter the selected directory on the browse tab.
    async fn activate_selection(&mut self) {
        if self.active_tab != Tab::Browse {
            return;
        }
        let Some(entry) = self.browse.listing.selected_item() else {
            return;
        };
        if entry.is_dir() {
            let path = entry.path.clone();
            self.browse.enter(&path);
            self.load_listing().await;
        }
    }

    /// Go back to the previously visited directory.
    async fn go_back(&mut self) {
        if self.active_tab == Tab::Browse && self.browse.back() {
            self.load_listing().await;
        }
    }

    /// Go up one directory level.
    async fn go_up(&mut self) {
        if self.active_tab != Tab::Browse || self.browse.at_root() {
            return;
        }
        let parent = crate::state::parent_path(&self.browse.path);
        self.browse.enter(&parent);
        self.load_listing().await;
    }

    /// Load the directory listing for the current browse path,
    /// consulting the cache first.
    pub async fn load_listing(&mut self) {
        let path = self.browse.path.clone();
        let key = format!("contents/{}", path);

        if let Some(entries) = self.cache.get::<Vec<ContentEntry>>(&key, LISTING_TTL) {
            self.browse.listing.set_loaded(prepare_listing(entries));
            return;
        }

        self.browse.listing.set_loading();
        match self
            .client
            .get_contents(&self.config.repo, &path, &self.config.pages_branch)
            .await
        {
            Ok(entries) => {
                self.cache.set(&key, &entries);
                self.browse.listing.set_loaded(prepare_listing(entries));
            }
            Err(err) => {
                self.browse
                    .listing
                    .set_error(format!("Failed to load repository contents: {}", err));
            }
        }
    }

    /// Load the latest workflow run and derive the build badge.
    /// Failure degrades to an "Unavailable" badge.
    pub async fn load_build_status(&mut self) {
        if let Some(runs) = self
            .cache
            .get::<Vec<WorkflowRun>>(BUILD_STATUS_KEY, STATUS_TTL)
        {
            self.packages.build =
                LoadingState::Loaded(BuildStatus::from_runs(&runs, chrono::Utc::now()));
            return;
        }

        self.packages.build = LoadingState::Loading;
        match self
            .client
            .get_workflow_runs(&self.config.repo, &self.config.workflow_file, 1)
            .await
        {
            Ok(runs) => {
                self.cache.set(BUILD_STATUS_KEY, &runs);
                self.packages.build =
                    LoadingState::Loaded(BuildStatus::from_runs(&runs, chrono::Utc::now()));
            }
            Err(_) => {
                self.packages.build = LoadingState::Loaded(BuildStatus::unavailable());
            }
        }
    }

    /// Fetch the uptime and response-time monitor messages.
    /// Any failure degrades to "N/A".
    pub async fn load_service_status(&mut self) {
        self.packages.uptime = LoadingState::Loading;
        self.packages.response_time = LoadingState::Loading;

        let uptime = match self
            .client
            .get_raw(&self.config.status_url("uptime.json"))
            .await
        {
            Ok(body) => parse_monitor_message(&body),
            Err(_) => "N/A".to_string(),
        };
        self.packages.uptime = LoadingState::Loaded(uptime);

        let response_time = match self
            .client
            .get_raw(&self.config.status_url("response-time.json"))
            .await
        {
            Ok(body) => parse_monitor_message(&body),
            Err(_) => "N/A".to_string(),
        };
        self.packages.response_time = LoadingState::Loaded(response_time);
    }

    /// Load the package grid: list manifest files, fetch and parse each,
    /// then resolve versions through the lock file.
    pub async fn load_packages(&mut self) {
        self.packages.packages.set_loading();

        let manifests = match self
            .client
            .get_contents(&self.config.repo, "packages", &self.config.source_branch)
            .await
        {
            Ok(entries) => entries,
            Err(err) => {
                self.packages
                    .set_error(format!("Failed to load packages: {}", err));
                return;
            }
        };

        // Lock fetch is optional; without it manifest versions stand.
        let lock_versions = match self.client.get_raw(&self.config.raw_url("packages.lock")).await {
            Ok(contents) => parse_lockfile(&contents),
            Err(_) => Default::default(),
        };

        let mut packages = Vec::new();
        for file in manifests {
            if !file.name.ends_with(".toml") {
                continue;
            }
            let Some(url) = file.download_url.as_deref() else {
                continue;
            };
            // A manifest that fails to fetch is dropped from the grid.
            let Ok(contents) = self.client.get_raw(url).await else {
                continue;
            };
            let mut package = Package::from_manifest(&parse_manifest(&contents));
            package.apply_lock(&lock_versions);
            packages.push(package);
        }

        sort_packages(&mut packages);
        self.packages.set_loaded(packages);
    }
}
