use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use skycast_core::AppState;

use super::components::{Component, CurrentBanner, ForecastList, SearchPanel, base_fg, rgb};

pub(crate) fn draw(f: &mut Frame, state: &AppState) {
    let background = state.background();
    f.render_widget(
        Block::default().style(Style::default().bg(rgb(background.top)).fg(base_fg(state))),
        f.area(),
    );

    let search_height = if state.search_open { 3 } else { 0 };
    let banner_height = if state.weather.is_some() { 6 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(1),             // header
        Constraint::Length(search_height), // search panel
        Constraint::Length(banner_height), // current conditions
        Constraint::Min(0),                // forecast cards or messages
        Constraint::Length(1),             // key hints
    ])
    .split(f.area());

    render_header(f, chunks[0], state);

    if state.search_open {
        SearchPanel.render(f, chunks[1], state);
    }

    if state.weather.is_some() {
        CurrentBanner.render(f, chunks[2], state);
    }

    render_body(f, chunks[3], state);
    render_footer(f, chunks[4], state);
}

fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    let halves = Layout::horizontal([Constraint::Min(0), Constraint::Length(24)]).split(area);

    let mut title = vec![Span::styled(
        " skycast",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if state.searching {
        title.push(Span::styled(
            "  fetching...",
            Style::default().fg(Color::DarkGray),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(title)), halves[0]);

    // The label names the mode the toggle switches to.
    let mode_label = if state.dark_mode {
        "☀️ Light Mode [d] "
    } else {
        "🌙 Dark Mode [d] "
    };
    f.render_widget(
        Paragraph::new(mode_label).alignment(Alignment::Right),
        halves[1],
    );
}

fn render_body(f: &mut Frame, area: Rect, state: &AppState) {
    if let Some(bundle) = &state.weather {
        if !bundle.forecast.is_empty() {
            ForecastList.render(f, area, state);
            return;
        }
    }

    let message = if state.searching {
        Some((
            "Fetching latest weather data...".to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else if let Some(error) = &state.error {
        Some((error.clone(), Style::default().fg(error_fg(state))))
    } else if !state.search_open {
        Some((
            "Search for a city to get weather information".to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        None
    };

    if let Some((text, style)) = message {
        f.render_widget(
            Paragraph::new(text).style(style).alignment(Alignment::Center),
            centered_line(area),
        );
    }
}

fn render_footer(f: &mut Frame, area: Rect, state: &AppState) {
    let hints = if state.search_open {
        "Enter search  Esc close"
    } else {
        "/ search  d dark/light  u units  r refresh  q quit"
    };

    f.render_widget(
        Paragraph::new(hints)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        area,
    );
}

fn error_fg(state: &AppState) -> Color {
    if state.dark_mode {
        Color::Rgb(254, 202, 202)
    } else {
        Color::Rgb(185, 28, 28)
    }
}

/// One-row rect at the vertical middle of `area`.
fn centered_line(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1.min(area.height),
    }
}
