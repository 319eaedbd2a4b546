//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied clock only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod dialogue;
pub mod driver;
pub mod geometry;
pub mod input;
mod mode;
pub mod scratch;
pub mod spawner;
pub mod state;
pub mod tick;

pub use dialogue::{BRIEFING, DialoguePage};
pub use driver::{FrameDriver, FrameReport};
pub use geometry::{is_valid_sample, point_in_circle, segment_intersects_circle};
pub use input::{end_swipe, swipe_to, tap};
pub use scratch::ScratchCard;
pub use spawner::{maybe_spawn, sample_category};
pub use state::{
    Category, FallingObject, GameEvent, GameMode, GameState, MAX_PARTICLES, Particle,
    TRAIL_LENGTH,
};
pub use tick::{PointerEvent, TickInput, tick};
