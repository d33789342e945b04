use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the score line under the field.
///
/// The snake length is added on the right when the row is wide enough for
/// both values.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) {
    let score_text = score_label(state.score);
    let length_text = format!("Length: {}", state.snake.len());
    let style = Style::default().fg(theme.score_fg);

    if !fits_side_by_side(&score_text, &length_text, area.width) {
        frame.render_widget(Paragraph::new(Line::from(score_text)).style(style), area);
        return;
    }

    let length_width = u16::try_from(length_text.width()).unwrap_or(u16::MAX);
    let [score_area, length_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(length_width)]).areas(area);

    frame.render_widget(Paragraph::new(Line::from(score_text)).style(style), score_area);
    frame.render_widget(
        Paragraph::new(Line::from(length_text))
            .alignment(Alignment::Right)
            .style(style),
        length_area,
    );
}

/// Text used for the score, both in the HUD and the game-over popup.
#[must_use]
pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

fn fits_side_by_side(left: &str, right: &str, available_width: u16) -> bool {
    // One column of spacing between the two values.
    left.width() + 1 + right.width() <= usize::from(available_width)
}
