use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GridSize, INITIAL_SNAKE_LENGTH, TOTAL_LENGTH};
use crate::food::Food;
use crate::input::{direction_change_is_valid, Direction, GameInput};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Over,
}

/// What ended the round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    Wall,
    SelfCollision,
}

/// Effect of a direction input on the state machine.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputOutcome {
    /// The pending direction was updated.
    Steered,
    /// The input reversed the pending direction and was dropped.
    Rejected,
    /// The round was over and a new one started.
    Restarted,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    /// Pending direction, consumed by the next tick.
    pub direction: Direction,
    pub food: Food,
    pub score: u32,
    /// Length the snake grows to without eating.
    pub total_length: usize,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh round with an entropy-seeded food generator.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, rng: StdRng) -> Self {
        let center = bounds.center();
        let mut state = Self {
            snake: Snake::new(center, Direction::Right),
            direction: Direction::Right,
            food: Food::new(center),
            score: 0,
            total_length: TOTAL_LENGTH,
            status: GameStatus::Playing,
            death_reason: None,
            tick_count: 0,
            bounds,
            rng,
        };
        state.reset();
        state
    }

    /// Starts a new round.
    ///
    /// The pending direction carries over from the previous round and decides
    /// how the starting body is laid out from the center cell.
    pub fn reset(&mut self) {
        self.score = 0;
        self.status = GameStatus::Playing;
        self.death_reason = None;
        self.tick_count = 0;
        self.total_length = TOTAL_LENGTH;
        self.snake = Snake::laid_out(self.bounds.center(), self.direction, INITIAL_SNAKE_LENGTH);
        self.food = Food::spawn(&mut self.rng, self.bounds);

        log::info!(
            "new round on {}x{} grid, food at ({}, {})",
            self.bounds.width,
            self.bounds.height,
            self.food.position.x,
            self.food.position.y
        );
    }

    /// Steers the snake, or restarts the round once it is over.
    pub fn set_direction(&mut self, direction: Direction) -> InputOutcome {
        if self.status == GameStatus::Over {
            self.reset();
            return InputOutcome::Restarted;
        }

        if !direction_change_is_valid(self.direction, direction) {
            return InputOutcome::Rejected;
        }

        self.direction = direction;
        InputOutcome::Steered
    }

    /// Applies one external input event.
    ///
    /// Returns `None` for inputs the state machine does not handle.
    pub fn apply_input(&mut self, input: GameInput) -> Option<InputOutcome> {
        match input {
            GameInput::Direction(direction) => Some(self.set_direction(direction)),
            GameInput::Quit => None,
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        let next_head = self.snake.head().step(self.direction);
        if let Some(reason) = self.collision_at(next_head) {
            self.status = GameStatus::Over;
            self.death_reason = Some(reason);
            log::debug!(
                "game over after {} ticks: {reason:?} at ({}, {}), score {}",
                self.tick_count,
                next_head.x,
                next_head.y,
                self.score
            );
            return;
        }

        self.tick_count += 1;

        let ate = next_head == self.food.position;
        let growing = self.snake.len() < self.total_length;
        self.snake.advance(self.direction, ate || growing);

        if ate {
            self.score += self.food.points();
            self.food = Food::spawn(&mut self.rng, self.bounds);
            log::debug!(
                "food eaten, score {}, length {}, next food at ({}, {})",
                self.score,
                self.snake.len(),
                self.food.position.x,
                self.food.position.y
            );
        }
    }

    /// Returns the logical board size.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns true once the round has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    fn collision_at(&self, position: Position) -> Option<DeathReason> {
        if !position.is_within_bounds(self.bounds) {
            return Some(DeathReason::Wall);
        }

        if self.snake.occupies(position) {
            return Some(DeathReason::SelfCollision);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::food::Food;
    use crate::input::{Direction, GameInput};

    use super::{DeathReason, GameState, GameStatus, InputOutcome};
    use crate::snake::{Position, Snake};

    /// Puts food somewhere the snake will not reach during the test.
    fn park_food(state: &mut GameState, position: Position) {
        state.food = Food::new(position);
    }

    #[test]
    fn reset_starts_single_cell_snake_at_center() {
        let state = GameState::new_with_seed(GridSize::square(25), 1);

        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position::new(12, 12));
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.score, 0);
        assert_eq!(state.total_length, 5);
        assert_eq!(state.status, GameStatus::Playing);
        assert!(state.food.position.is_within_bounds(state.bounds()));
    }

    #[test]
    fn first_tick_moves_right_and_grows() {
        let mut state = GameState::new_with_seed(GridSize::square(25), 2);
        park_food(&mut state, Position::new(0, 0));

        state.tick();

        assert_eq!(state.snake.head(), Position::new(13, 12));
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.snake.tail(), Position::new(12, 12));
    }

    #[test]
    fn snake_grows_until_total_length_then_holds() {
        let mut state = GameState::new_with_seed(GridSize::square(25), 3);
        park_food(&mut state, Position::new(0, 0));

        for expected in 2..=5 {
            state.tick();
            assert_eq!(state.snake.len(), expected);
        }

        for _ in 0..5 {
            state.tick();
            assert_eq!(state.snake.len(), 5);
        }
        assert_eq!(state.snake.head(), Position::new(21, 12));
    }

    #[test]
    fn eating_food_adds_ten_points_and_one_segment() {
        let mut state = GameState::new_with_seed(GridSize::square(10), 4);
        state.snake = Snake::laid_out(Position::new(1, 5), Direction::Right, 5);
        park_food(&mut state, Position::new(6, 5));

        state.tick();

        assert_eq!(state.score, 10);
        assert_eq!(state.snake.len(), 6);
        assert_eq!(state.snake.head(), Position::new(6, 5));
        assert!(state.food.position.is_within_bounds(state.bounds()));
    }

    #[test]
    fn eating_during_growth_phase_adds_one_segment() {
        let mut state = GameState::new_with_seed(GridSize::square(10), 5);
        state.snake = Snake::new(Position::new(5, 5), Direction::Right);
        park_food(&mut state, Position::new(6, 5));

        state.tick();

        assert_eq!(state.score, 10);
        assert_eq!(state.snake.len(), 2);
    }

    #[test]
    fn length_above_total_is_kept_after_eating() {
        let mut state = GameState::new_with_seed(GridSize::square(20), 6);
        state.snake = Snake::laid_out(Position::new(1, 5), Direction::Right, 5);
        park_food(&mut state, Position::new(6, 5));
        state.tick();
        park_food(&mut state, Position::new(0, 19));

        for _ in 0..5 {
            state.tick();
            assert_eq!(state.snake.len(), 6);
        }
    }

    #[test]
    fn leaving_the_grid_on_any_side_ends_the_round() {
        let cases = [
            (Position::new(2, 0), Direction::Up),
            (Position::new(4, 2), Direction::Right),
            (Position::new(2, 4), Direction::Down),
            (Position::new(0, 2), Direction::Left),
        ];

        for (start, direction) in cases {
            let mut state = GameState::new_with_seed(GridSize::square(5), 7);
            state.snake = Snake::new(start, direction);
            state.direction = direction;
            park_food(&mut state, Position::new(2, 2));
            let snake_before = state.snake.clone();

            state.tick();

            assert_eq!(state.status, GameStatus::Over);
            assert_eq!(state.death_reason, Some(DeathReason::Wall));
            assert_eq!(state.snake, snake_before);
            assert_eq!(state.score, 0);
        }
    }

    #[test]
    fn turning_into_own_body_ends_the_round() {
        let mut state = GameState::new_with_seed(GridSize::square(6), 8);
        state.snake = Snake::from_segments(
            vec![
                Position::new(2, 2),
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(3, 2),
                Position::new(3, 1),
            ],
            Direction::Up,
        );
        state.direction = Direction::Up;
        park_food(&mut state, Position::new(0, 0));

        assert_eq!(state.set_direction(Direction::Right), InputOutcome::Steered);
        state.tick();

        assert_eq!(state.status, GameStatus::Over);
        assert_eq!(state.death_reason, Some(DeathReason::SelfCollision));
        assert_eq!(state.snake.len(), 5);
    }

    #[test]
    fn moving_into_the_current_tail_cell_is_a_collision() {
        let mut state = GameState::new_with_seed(GridSize::square(6), 9);
        state.snake = Snake::from_segments(
            vec![
                Position::new(2, 2),
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(3, 2),
            ],
            Direction::Up,
        );
        state.direction = Direction::Right;
        park_food(&mut state, Position::new(0, 0));

        state.tick();

        assert_eq!(state.status, GameStatus::Over);
    }

    #[test]
    fn reversal_is_rejected() {
        let mut state = GameState::new_with_seed(GridSize::square(25), 10);

        assert_eq!(state.set_direction(Direction::Up), InputOutcome::Steered);
        assert_eq!(state.set_direction(Direction::Down), InputOutcome::Rejected);
        assert_eq!(state.direction, Direction::Up);
    }

    #[test]
    fn ticks_are_ignored_once_over() {
        let mut state = GameState::new_with_seed(GridSize::square(3), 11);
        park_food(&mut state, Position::new(0, 0));
        state.tick();
        state.tick();
        assert!(state.is_over());

        let snake_before = state.snake.clone();
        let ticks_before = state.tick_count;
        for _ in 0..10 {
            state.tick();
        }

        assert_eq!(state.snake, snake_before);
        assert_eq!(state.tick_count, ticks_before);
        assert_eq!(state.status, GameStatus::Over);
    }

    #[test]
    fn any_direction_restarts_after_game_over() {
        let mut state = GameState::new_with_seed(GridSize::square(3), 12);
        park_food(&mut state, Position::new(0, 0));
        state.tick();
        state.tick();
        assert!(state.is_over());

        // Left would be a reversal while playing; here it only restarts.
        let outcome = state.apply_input(GameInput::Direction(Direction::Left));

        assert_eq!(outcome, Some(InputOutcome::Restarted));
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.death_reason, None);
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position::new(1, 1));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn direction_survives_restart() {
        let mut state = GameState::new_with_seed(GridSize::square(7), 13);
        park_food(&mut state, Position::new(6, 6));
        state.set_direction(Direction::Up);
        for _ in 0..4 {
            state.tick();
        }
        assert!(state.is_over());

        state.set_direction(Direction::Left);

        assert_eq!(state.direction, Direction::Up);
        assert_eq!(state.snake.heading(), Direction::Up);
    }

    #[test]
    fn quit_is_not_handled_by_the_state() {
        let mut state = GameState::new_with_seed(GridSize::square(5), 14);

        assert_eq!(state.apply_input(GameInput::Quit), None);
        assert_eq!(state.status, GameStatus::Playing);
    }
}
