use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Coordinates are signed so that a step past the edge of the board is
/// representable and can be rejected by the bounds check.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one unit away in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Ordered snake body, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` facing `direction`.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        Self::laid_out(start, direction, 1)
    }

    /// Creates a straight snake of `length` cells whose tail sits on `start`
    /// and whose head points along `direction`.
    ///
    /// # Panics
    ///
    /// Panics when `length` is zero.
    #[must_use]
    pub fn laid_out(start: Position, direction: Direction, length: usize) -> Self {
        assert!(length > 0, "snake length must be at least one cell");

        let mut body = VecDeque::with_capacity(length);
        let mut cell = start;
        body.push_front(cell);
        for _ in 1..length {
            cell = cell.step(direction);
            body.push_front(cell);
        }

        Self {
            body,
            heading: direction,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, heading: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            heading,
        }
    }

    /// Moves the head one cell along `direction`.
    ///
    /// The tail is kept when `keep_tail` is set, which grows the snake by one.
    pub fn advance(&mut self, direction: Direction, keep_tail: bool) {
        let next_head = self.head().step(direction);
        self.heading = direction;
        self.body.push_front(next_head);
        if !keep_tail {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Direction of the most recent move.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
