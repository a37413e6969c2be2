use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
};
use skycast_core::{AppState, ForecastEntry, display};

use super::{Component, rgb};

/// Vertical list of per-day forecast cards, each tinted by its condition.
pub(crate) struct ForecastList;

const CARD_HEIGHT: u16 = 6;

impl Component for ForecastList {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let Some(bundle) = &state.weather else {
            return;
        };
        if bundle.forecast.is_empty() {
            return;
        }

        let offset = bundle.snapshot.timezone_offset_secs;
        let visible = (area.height / CARD_HEIGHT) as usize;
        let count = bundle.forecast.len().min(visible);
        if count == 0 {
            return;
        }

        let constraints: Vec<Constraint> = std::iter::repeat(Constraint::Length(CARD_HEIGHT))
            .take(count)
            .chain([Constraint::Min(0)])
            .collect();
        let chunks = Layout::vertical(constraints).split(area);

        for (index, entry) in bundle.forecast.iter().take(count).enumerate() {
            render_card(f, chunks[index], state, entry, index, offset);
        }
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    state: &AppState,
    entry: &ForecastEntry,
    index: usize,
    timezone_offset_secs: i32,
) {
    let title = if index == 0 {
        "Today"
    } else {
        display::day_of_week(entry.forecast_at, timezone_offset_secs)
    };

    let background = display::background(entry.condition, state.dark_mode);
    let temp = display::format_temperature(Some(entry.temperature_c), state.use_fahrenheit);
    let feels = display::format_temperature(Some(entry.feels_like_c), state.use_fahrenheit);

    // Midday samples get the daytime glyph.
    let lines = vec![
        Line::from(format!(
            "{} {}",
            display::icon(entry.condition, false),
            entry.description
        )),
        Line::from(display::message(entry.condition)),
        Line::from(format!("{temp}  feels like {feels}")),
        Line::from(format!(
            "Humidity {}%  Wind {} m/s  Pressure {} hPa",
            entry.humidity_pct, entry.wind_speed_mps, entry.pressure_hpa
        )),
    ];

    let block = Block::bordered()
        .title(format!(" {title} "))
        .style(Style::default().bg(rgb(background.top)))
        .border_style(Style::default().fg(rgb(background.bottom)));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
