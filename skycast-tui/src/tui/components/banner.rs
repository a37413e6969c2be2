use chrono::Local;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use skycast_core::{AppState, display};

use super::{Component, rgb};

/// Live current-conditions banner shown above the forecast cards.
pub(crate) struct CurrentBanner;

impl Component for CurrentBanner {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let Some(bundle) = &state.weather else {
            return;
        };
        let snapshot = &bundle.snapshot;

        let night = display::is_night(
            snapshot.observed_at,
            snapshot.sunrise,
            snapshot.sunset,
            snapshot.timezone_offset_secs,
        );
        let icon = display::icon(snapshot.condition, night);
        let temp = display::format_temperature(Some(snapshot.temperature_c), state.use_fahrenheit);
        let feels = display::format_temperature(Some(snapshot.feels_like_c), state.use_fahrenheit);
        let now = Local::now().format("%I:%M %p");

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    snapshot.location_name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {icon}")),
            ]),
            Line::from(format!("{now} \u{2022} {}", snapshot.description)),
            Line::from(format!(
                "{temp}  feels like {feels}  {}",
                display::advice(snapshot.condition)
            )),
            Line::from(format!(
                "Sunrise {}  Sunset {}  Humidity {}%  Wind {} m/s  Pressure {} hPa",
                display::format_time(Some(snapshot.sunrise), snapshot.timezone_offset_secs),
                display::format_time(Some(snapshot.sunset), snapshot.timezone_offset_secs),
                snapshot.humidity_pct,
                snapshot.wind_speed_mps,
                snapshot.pressure_hpa,
            )),
        ];

        let block = Block::bordered()
            .border_style(Style::default().fg(rgb(state.background().bottom)));

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
