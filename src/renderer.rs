use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    GridSize, Theme, GLYPH_CELL, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP,
};
use crate::game::GameState;
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::overlay::render_game_over;

/// How the board is drawn onto the terminal.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Terminal columns per grid cell.
    pub pixel_size: u16,
    pub theme: &'a Theme,
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, options: RenderOptions<'_>) {
    let theme = options.theme;
    let (field_area, hud_area) = board_layout(frame.area(), state.bounds(), options.pixel_size);

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.field_bg));

    let inner = block.inner(field_area);
    frame.render_widget(block, field_area);

    render_food(frame, inner, state, options);
    render_snake(frame, inner, state, options);
    render_hud(frame, hud_area, state, theme);

    if state.is_over() {
        render_game_over(frame, inner, state.score, state.death_reason, theme);
    }
}

/// Splits `area` into the bordered field and the one-line HUD beneath it,
/// both centered.
fn board_layout(area: Rect, bounds: GridSize, pixel_size: u16) -> (Rect, Rect) {
    let width = bounds.width.saturating_mul(pixel_size).saturating_add(2);
    let height = bounds.height.saturating_add(2);

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [field, hud] = Layout::vertical([Constraint::Length(height), Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(column);

    (field, hud)
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, options: RenderOptions<'_>) {
    paint_cell(
        frame,
        inner,
        state.bounds(),
        options.pixel_size,
        state.food.position,
        Style::new().bg(options.theme.food),
    );
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, options: RenderOptions<'_>) {
    let body_style = Style::new().bg(options.theme.snake_body);
    let head_style = Style::new().bg(options.theme.snake_head);

    for segment in state.snake.segments().skip(1) {
        paint_cell(
            frame,
            inner,
            state.bounds(),
            options.pixel_size,
            *segment,
            body_style,
        );
    }

    // Head last so it stays visible on top of the body.
    let head = state.snake.head();
    paint_cell(frame, inner, state.bounds(), options.pixel_size, head, head_style);

    if let Some((x, y)) = logical_to_terminal(inner, state.bounds(), options.pixel_size, head) {
        frame.buffer_mut().set_string(
            x,
            y,
            head_glyph(state.snake.heading()),
            head_style.fg(options.theme.field_bg),
        );
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn paint_cell(
    frame: &mut Frame<'_>,
    inner: Rect,
    bounds: GridSize,
    pixel_size: u16,
    position: Position,
    style: Style,
) {
    let Some((x, y)) = logical_to_terminal(inner, bounds, pixel_size, position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    for column in 0..pixel_size {
        buffer.set_string(x + column, y, GLYPH_CELL, style);
    }
}

/// Maps a grid cell to the terminal coordinate of its leftmost column.
///
/// Returns `None` when the cell is off the board or does not fully fit in
/// `inner`.
fn logical_to_terminal(
    inner: Rect,
    bounds: GridSize,
    pixel_size: u16,
    position: Position,
) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(pixel_size)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.checked_add(x_offset)?;
    let y = inner.y.checked_add(y_offset)?;
    if x.checked_add(pixel_size)? > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
