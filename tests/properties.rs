use std::collections::HashSet;

use grid_snake::config::{GridSize, FOOD_REWARD};
use grid_snake::game::{GameState, GameStatus, InputOutcome};
use grid_snake::input::Direction;
use grid_snake::snake::Position;
use proptest::prelude::*;

fn direction_strategy() -> impl Strategy<Value = Option<Direction>> {
    prop_oneof![
        3 => Just(None),
        1 => prop::sample::select(Direction::ALL.to_vec()).prop_map(Some),
    ]
}

fn cells(state: &GameState) -> Vec<Position> {
    state.snake.segments().copied().collect()
}

proptest! {
    #[test]
    fn every_tick_follows_the_growth_and_collision_rules(
        seed in any::<u64>(),
        field_size in 3u16..16,
        inputs in prop::collection::vec(direction_strategy(), 1..300),
    ) {
        let mut state = GameState::new_with_seed(GridSize::square(field_size), seed);

        for input in inputs {
            if let Some(direction) = input {
                if state.status == GameStatus::Playing {
                    let before = state.direction;
                    let outcome = state.set_direction(direction);
                    if direction == before.opposite() {
                        prop_assert_eq!(outcome, InputOutcome::Rejected);
                        prop_assert_eq!(state.direction, before);
                    } else {
                        prop_assert_eq!(state.direction, direction);
                    }
                }
            }

            let before = state.clone();
            state.tick();

            if before.status == GameStatus::Over {
                prop_assert_eq!(&state.snake, &before.snake);
                prop_assert_eq!(state.score, before.score);
                prop_assert_eq!(state.status, GameStatus::Over);
                continue;
            }

            if state.status == GameStatus::Over {
                let next_head = before.snake.head().step(before.direction);
                prop_assert!(
                    !next_head.is_within_bounds(state.bounds()) || before.snake.occupies(next_head)
                );
                prop_assert_eq!(&state.snake, &before.snake);
                prop_assert_eq!(state.score, before.score);
                prop_assert_eq!(state.food, before.food);
                continue;
            }

            let ate = state.snake.head() == before.food.position;
            if ate {
                prop_assert_eq!(state.score, before.score + FOOD_REWARD);
                prop_assert_eq!(state.snake.len(), before.snake.len() + 1);
            } else if before.snake.len() < before.total_length {
                prop_assert_eq!(state.score, before.score);
                prop_assert_eq!(state.snake.len(), before.snake.len() + 1);
            } else {
                prop_assert_eq!(state.score, before.score);
                prop_assert_eq!(state.snake.len(), before.snake.len());
            }

            let body = cells(&state);
            let distinct: HashSet<Position> = body.iter().copied().collect();
            prop_assert_eq!(distinct.len(), body.len());
            for cell in &body {
                prop_assert!(cell.is_within_bounds(state.bounds()));
            }
            prop_assert!(state.food.position.is_within_bounds(state.bounds()));
        }
    }

    #[test]
    fn reset_always_starts_at_the_center(seed in any::<u64>(), field_size in 1u16..40) {
        let bounds = GridSize::square(field_size);
        let state = GameState::new_with_seed(bounds, seed);

        prop_assert_eq!(state.snake.len(), 1);
        prop_assert_eq!(state.snake.head(), bounds.center());
        prop_assert_eq!(state.score, 0);
        prop_assert!(state.food.position.is_within_bounds(bounds));
    }
}
