use rand::Rng;

use crate::config::{GridSize, FOOD_REWARD};
use crate::snake::Position;

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Returns the score value granted when eaten.
    #[must_use]
    pub fn points(self) -> u32 {
        FOOD_REWARD
    }

    /// Places food on a uniformly random cell of the board.
    ///
    /// The snake is not consulted, so the food may land under its body.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        Self::new(spawn_position(rng, bounds))
    }
}

/// Picks a uniformly random cell in `bounds`.
///
/// # Panics
///
/// Panics when the grid has no cells.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    assert!(
        bounds.total_cells() > 0,
        "spawn_position: empty board ({}×{})",
        bounds.width,
        bounds.height,
    );

    let position = Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    };
    debug_assert!(position.is_within_bounds(bounds));
    position
}
