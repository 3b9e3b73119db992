// pantry: terminal browser for a GitHub-hosted package repository.
// Sets up the terminal, builds the app, and runs the event loop.

mod app;
mod cache;
mod config;
mod error;
mod github;
mod packages;
mod parse;
mod state;
mod theme;
mod ui;

use app::App;
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Optional initial browse location, e.g. `pantry pool/main`.
    let initial_path = std::env::args().nth(1).unwrap_or_default();

    let mut app = App::new(config, &initial_path)?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal).await;
    ratatui::restore();

    result?;
    Ok(())
}
