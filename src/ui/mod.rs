// UI module for rendering the TUI.
// Contains widgets for tabs, headers, the package grid, and the file listing.

mod list;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};
use crate::state::{LoadingState, StatusTone};
use crate::theme::Palette;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Length(2), // Header line
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    draw_header(frame, app, chunks[1]);
    draw_content(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);
}

/// Header line under the tab bar: build status on the packages tab,
/// current location on the browse tab.
fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();

    let line = match app.active_tab {
        Tab::Packages => {
            let mut spans = vec![
                Span::styled(app.config.repo.clone(), Style::default().fg(palette.text)),
                Span::styled("  Build: ", Style::default().fg(palette.dim)),
            ];
            match &app.packages.build {
                LoadingState::Idle | LoadingState::Loading => {
                    spans.push(Span::styled("…", Style::default().fg(palette.dim)));
                }
                LoadingState::Error(_) => {
                    spans.push(Span::styled("N/A", Style::default().fg(palette.dim)));
                }
                LoadingState::Loaded(status) => {
                    spans.push(Span::styled(
                        status.label.clone(),
                        Style::default().fg(tone_color(status.tone, &palette)),
                    ));
                }
            }
            spans.push(Span::styled("  Uptime: ", Style::default().fg(palette.dim)));
            spans.push(monitor_span(&app.packages.uptime, palette.good, &palette));
            spans.push(Span::styled(
                "  Response: ",
                Style::default().fg(palette.dim),
            ));
            spans.push(monitor_span(
                &app.packages.response_time,
                palette.good,
                &palette,
            ));
            Line::from(spans)
        }
        Tab::Browse => {
            let mut spans = vec![Span::styled(
                app.browse.location_label(),
                Style::default().fg(palette.text),
            )];
            if let Some(url) = app.browse.selected_download_url() {
                spans.push(Span::styled(
                    format!("  {}", url),
                    Style::default().fg(palette.dim),
                ));
            }
            Line::from(spans)
        }
    };

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.dim));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Span for a monitor message: "N/A" renders muted, anything else in the
/// given color.
fn monitor_span<'a>(state: &LoadingState<String>, color: Color, palette: &Palette) -> Span<'a> {
    match state {
        LoadingState::Loaded(message) if message != "N/A" => {
            Span::styled(message.clone(), Style::default().fg(color))
        }
        LoadingState::Loaded(message) => {
            Span::styled(message.clone(), Style::default().fg(palette.dim))
        }
        _ => Span::styled("…", Style::default().fg(palette.dim)),
    }
}

/// Resolve a status tone to a theme color.
fn tone_color(tone: StatusTone, palette: &Palette) -> Color {
    match tone {
        StatusTone::Ok => palette.good,
        StatusTone::Warn => palette.warn,
        StatusTone::Fail => palette.bad,
        StatusTone::Muted => palette.dim,
    }
}

/// Draw the main content area based on active tab.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.theme.palette();

    match app.active_tab {
        Tab::Packages => {
            // Reserve room for the install command when there is one.
            if let Some(command) = app.packages.install_command.clone() {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(1), Constraint::Length(4)])
                    .split(area);

                list::render_packages(frame, &mut app.packages.packages, &palette, chunks[0]);

                let install = Paragraph::new(command).style(Style::default().fg(palette.text)).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Install ")
                        .border_style(Style::default().fg(palette.dim)),
                );
                frame.render_widget(install, chunks[1]);
            } else {
                list::render_packages(frame, &mut app.packages.packages, &palette, area);
            }
        }
        Tab::Browse => {
            list::render_listing(frame, &mut app.browse.listing, &palette, area);
        }
    }
}

/// Status bar with key hints and the API rate budget when it runs low.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();

    let mut spans = vec![Span::styled(
        " q quit │ tab switch │ ↑↓ move │ enter open │ esc back │ t theme │ r refresh",
        Style::default().fg(palette.dim),
    )];

    let rate = app.client.rate_limit();
    if rate.is_low() {
        spans.push(Span::styled(
            format!("  API limit low: {}/{}", rate.remaining, rate.limit),
            Style::default().fg(palette.warn),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
