use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::config::Theme;
use crate::game::DeathReason;
use crate::ui::hud::score_label;

const RESTART_PROMPT: &str = "- Press WASD or an arrow key to restart -";
const POPUP_PADDING_X: u16 = 2;

/// Dims the field and draws the final score with the restart prompt.
///
/// The popup is centered on the whole frame rather than the field, so small
/// fields still show the full text. Lines wrap when the terminal itself is
/// narrower than the popup.
pub fn render_game_over(
    frame: &mut Frame<'_>,
    field: Rect,
    score: u32,
    death_reason: Option<DeathReason>,
    theme: &Theme,
) {
    dim_area(frame, field, theme);

    let lines = vec![
        Line::from("GAME OVER").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(score_label(score)),
        Line::from(death_caption(death_reason)),
        Line::from(""),
        Line::from(RESTART_PROMPT),
    ];

    let screen = frame.area();
    let text_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = u16::try_from(text_width)
        .unwrap_or(u16::MAX)
        .saturating_add(POPUP_PADDING_X * 2)
        .min(screen.width);
    let text_rows = wrapped_row_count(&lines, width.saturating_sub(2));
    let popup = centered_popup(screen, width, text_rows.saturating_add(2));
    frame.render_widget(Clear, popup);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(theme.overlay_fg).bg(theme.overlay_bg))
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

/// Rows needed to show `lines` at `width` columns, one row minimum per line.
fn wrapped_row_count(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn death_caption(death_reason: Option<DeathReason>) -> &'static str {
    match death_reason {
        Some(DeathReason::Wall) => "Hit the wall",
        Some(DeathReason::SelfCollision) => "Bit yourself",
        None => "",
    }
}

/// Darkens every cell of `area` so the popup stands out.
fn dim_area(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell_mut((x, y)) {
                let bg = dim_color(cell.bg, theme.overlay_bg);
                cell.set_bg(bg);
            }
        }
    }
}

/// Blends an RGB color 70% toward black; other colors fall back to `fallback`.
fn dim_color(color: Color, fallback: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(scale(r), scale(g), scale(b)),
        _ => fallback,
    }
}

fn scale(channel: u8) -> u8 {
    (u16::from(channel) * 3 / 10) as u8
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    popup
}
