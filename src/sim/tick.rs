//! Fixed timestep simulation tick
//!
//! Applies queued input, then spawns and advances entities. The host calls
//! this with its own clock; nothing here schedules itself.

use glam::Vec2;

use super::input::{end_swipe, swipe_to, tap};
use super::state::{GameMode, GameState};

/// A pointer sample in play-area coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Press: a tap, and the first sample of a new swipe
    Down(Vec2),
    /// Move while held
    Move(Vec2),
    /// Release: the swipe ends
    Up,
}

/// Input gathered since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer samples in the order the host received them
    pub pointer: Vec<PointerEvent>,
    /// Where the pointer is held right now (scratching in bonus mode)
    pub pointer_down: Option<Vec2>,
    /// Next dialogue page
    pub advance_dialogue: bool,
    /// Close control: back to the start from any mode
    pub reset: bool,
    /// Replay control on the game-over screen
    pub replay: bool,
}

impl TickInput {
    /// Clear one-shot inputs, keeping the held pointer
    pub fn take_one_shots(&mut self) -> TickInput {
        TickInput {
            pointer: std::mem::take(&mut self.pointer),
            pointer_down: self.pointer_down,
            advance_dialogue: std::mem::take(&mut self.advance_dialogue),
            reset: std::mem::take(&mut self.reset),
            replay: std::mem::take(&mut self.replay),
        }
    }
}

/// Apply one pointer sample. A press always starts a fresh trail, so a
/// release and the next press landing in the same step never join up.
fn apply_pointer(state: &mut GameState, event: PointerEvent) {
    match event {
        PointerEvent::Down(p) => {
            end_swipe(state);
            tap(state, p);
            swipe_to(state, p);
            state.scratch_at(p);
        }
        PointerEvent::Move(p) => {
            swipe_to(state, p);
            state.scratch_at(p);
        }
        PointerEvent::Up => end_swipe(state),
    }
}

/// Advance the game state by one step at sim time `now_ms`
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    state.now_ms = now_ms;

    // Control requests first, they can replace the whole session
    if input.reset {
        state.request_reset(now_ms);
    } else if input.replay {
        state.request_replay(now_ms);
    }

    if input.advance_dialogue {
        state.advance_dialogue(now_ms);
    }

    for event in &input.pointer {
        apply_pointer(state, *event);
    }

    if !state.mode.simulates() {
        return;
    }

    super::spawner::maybe_spawn(state, now_ms);
    state.update_objects();
    state.update_particles();

    if let (GameMode::Bonus, Some(p)) = (state.mode, input.pointer_down) {
        state.scratch_at(p);
    }
}
