use std::time::Instant;

use crate::game::{GameState, InputOutcome};
use crate::input::GameInput;
use crate::timer::TickTimer;

/// What the run loop should do after handling an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Applies one input event at `now`.
///
/// A restart from game over starts a fresh timer period, so the new round
/// gets a full interval before its first move.
pub fn handle_input(
    state: &mut GameState,
    timer: &mut TickTimer,
    input: GameInput,
    now: Instant,
) -> LoopControl {
    if input == GameInput::Quit {
        return LoopControl::Quit;
    }

    if state.apply_input(input) == Some(InputOutcome::Restarted) {
        timer.restart(now);
    }

    LoopControl::Continue
}

/// Runs one tick when the timer is due at `now`. Returns whether it ticked.
pub fn tick_if_due(state: &mut GameState, timer: &mut TickTimer, now: Instant) -> bool {
    if !timer.is_due(now) {
        return false;
    }

    state.tick();
    timer.mark_ticked(now);
    true
}
