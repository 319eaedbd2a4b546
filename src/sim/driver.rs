//! Frame driver
//!
//! Turns host refresh callbacks into fixed simulation steps. The host owns
//! scheduling; `frame` only reports whether it wants another callback.

use super::state::GameState;
use super::tick::{TickInput, tick};
use crate::consts::*;

/// What one host frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Simulation steps run this frame
    pub steps: u32,
    /// Whether the host should schedule another frame
    pub keep_running: bool,
}

/// Accumulator-based fixed timestep driver
#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    accumulator: f64,
    last_time: Option<f64>,
    /// Sim clock handed to `tick`, advances by `SIM_DT_MS` per step
    sim_time: f64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Run the steps owed for a host frame at `time_ms`.
    ///
    /// One-shot input is consumed by the first step. The driver keeps running
    /// after game over: updates are no-ops there, but the screen still renders
    /// and replay has to stay reachable.
    pub fn frame(
        &mut self,
        state: &mut GameState,
        input: &mut TickInput,
        time_ms: f64,
    ) -> FrameReport {
        let elapsed = match self.last_time {
            Some(last) => (time_ms - last).clamp(0.0, 100.0),
            None => SIM_DT_MS,
        };
        self.last_time = Some(time_ms);
        self.accumulator += elapsed;

        let mut steps = 0;
        while self.accumulator >= SIM_DT_MS && steps < MAX_SUBSTEPS {
            self.sim_time += SIM_DT_MS;
            let step_input = input.take_one_shots();
            tick(state, &step_input, self.sim_time);
            self.accumulator -= SIM_DT_MS;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            // Drop the backlog instead of spiralling
            self.accumulator = self.accumulator.min(SIM_DT_MS);
        }

        FrameReport {
            steps,
            keep_running: true,
        }
    }
}
