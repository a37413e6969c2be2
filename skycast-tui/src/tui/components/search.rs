use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Paragraph},
};
use skycast_core::AppState;

use super::{Component, base_fg};

/// Collapsible city search input.
pub(crate) struct SearchPanel;

impl Component for SearchPanel {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        if area.height < 3 {
            return;
        }

        let title = if state.searching {
            " Searching... "
        } else {
            " Search "
        };

        let (text, text_style) = if state.query.is_empty() {
            (
                "Search for a city".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (state.query.clone(), Style::default().fg(base_fg(state)))
        };

        let input_bg = if state.dark_mode {
            Color::Rgb(55, 65, 81)
        } else {
            Color::Rgb(209, 213, 219)
        };

        let block = Block::bordered()
            .title(title)
            .style(Style::default().bg(input_bg));

        f.render_widget(
            Paragraph::new(Line::styled(text, text_style)).block(block),
            area,
        );
    }
}
