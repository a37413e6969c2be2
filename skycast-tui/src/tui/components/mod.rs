use ratatui::{Frame, layout::Rect, style::Color};
use skycast_core::{AppState, display::Rgb};

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState);
}

pub(crate) mod banner;
pub(crate) mod forecast;
pub(crate) mod search;

pub(crate) use banner::CurrentBanner;
pub(crate) use forecast::ForecastList;
pub(crate) use search::SearchPanel;

pub(crate) fn rgb(stop: Rgb) -> Color {
    let (r, g, b) = stop;
    Color::Rgb(r, g, b)
}

/// Base text color for the active mode.
pub(crate) fn base_fg(state: &AppState) -> Color {
    if state.dark_mode {
        Color::White
    } else {
        Color::Black
    }
}
