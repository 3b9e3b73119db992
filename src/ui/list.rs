// List rendering for the browse listing and package grid.
// Provides styled list views with loading, error, and empty states.

use ratatui::{prelude::*, widgets::*};

use crate::github::ContentEntry;
use crate::packages::Package;
use crate::state::{LoadingState, SelectableList};
use crate::theme::Palette;

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, palette: &Palette, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.warn));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, palette: &Palette, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.bad));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, palette: &Palette, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.dim));
    frame.render_widget(text, area);
}

/// Format a file size for the listing.
fn format_size(size: u64) -> String {
    if size >= 1024 * 1024 {
        format!("{:.1} MB", size as f64 / (1024.0 * 1024.0))
    } else if size >= 1024 {
        format!("{:.1} KB", size as f64 / 1024.0)
    } else {
        format!("{} B", size)
    }
}

/// Render the directory listing.
pub fn render_listing(
    frame: &mut Frame,
    list: &mut SelectableList<ContentEntry>,
    palette: &Palette,
    area: Rect,
) {
    match &list.data {
        LoadingState::Idle => render_empty(frame, area, palette, "Press r to load"),
        LoadingState::Loading => {
            render_loading(frame, area, palette, "Loading repository contents")
        }
        LoadingState::Error(e) => render_error(frame, area, palette, e),
        LoadingState::Loaded(entries) => {
            if entries.is_empty() {
                render_empty(frame, area, palette, "Empty directory");
            } else {
                let items: Vec<ListItem> = entries
                    .iter()
                    .map(|entry| {
                        let icon = if entry.is_dir() { "📁" } else { "📄" };
                        let mut spans = vec![
                            Span::raw(format!("{} ", icon)),
                            Span::styled(
                                entry.name.clone(),
                                Style::default().fg(if entry.is_dir() {
                                    palette.accent
                                } else {
                                    palette.text
                                }),
                            ),
                        ];
                        if !entry.is_dir() {
                            spans.push(Span::styled(
                                format!("  {}", format_size(entry.size)),
                                Style::default().fg(palette.dim),
                            ));
                        }
                        ListItem::new(Line::from(spans))
                    })
                    .collect();

                let list_widget = List::new(items)
                    .block(Block::default().borders(Borders::ALL).title(" Files "))
                    .highlight_style(
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD),
                    )
                    .highlight_symbol("> ");

                frame.render_stateful_widget(list_widget, area, &mut list.list_state);
            }
        }
    }
}

/// Render the package grid.
pub fn render_packages(
    frame: &mut Frame,
    list: &mut SelectableList<Package>,
    palette: &Palette,
    area: Rect,
) {
    match &list.data {
        LoadingState::Idle => render_empty(frame, area, palette, "Press r to load"),
        LoadingState::Loading => render_loading(frame, area, palette, "Loading packages"),
        LoadingState::Error(e) => render_error(frame, area, palette, e),
        LoadingState::Loaded(packages) => {
            if packages.is_empty() {
                render_empty(frame, area, palette, "No packages found");
            } else {
                let items: Vec<ListItem> = packages
                    .iter()
                    .map(|pkg| {
                        let mut spans = vec![
                            Span::styled(
                                pkg.name.clone(),
                                Style::default()
                                    .fg(palette.accent)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            Span::styled(
                                format!("  {}", pkg.version),
                                Style::default().fg(palette.good),
                            ),
                            Span::styled(
                                format!(" [{}]", pkg.kind),
                                Style::default().fg(palette.dim),
                            ),
                            Span::styled(
                                format!("  {}", pkg.description),
                                Style::default().fg(palette.dim),
                            ),
                        ];
                        if let Some(homepage) = &pkg.homepage {
                            spans.push(Span::styled(
                                format!("  {}", homepage),
                                Style::default().fg(palette.accent),
                            ));
                        }
                        ListItem::new(Line::from(spans))
                    })
                    .collect();

                let list_widget = List::new(items)
                    .block(Block::default().borders(Borders::ALL).title(" Packages "))
                    .highlight_style(
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD),
                    )
                    .highlight_symbol("> ");

                frame.render_stateful_widget(list_widget, area, &mut list.list_state);
            }
        }
    }
}
