//! Game state and core simulation types
//!
//! One `GameState` is one play session. Handlers, the spawner and the tick all
//! take it by `&mut`, so independent sessions never share anything.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::scratch::ScratchCard;
use crate::consts::*;
use crate::normalize_angle;
use crate::tuning::Tuning;

/// Current mode of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Briefing dialogue before the heist
    Intro,
    /// Slicing phase
    Playing,
    /// Scratch-card vault bonus
    Bonus,
    /// Out of lives, waiting for replay
    GameOver,
}

impl GameMode {
    /// Physics run in these modes (spawning only while playing)
    pub fn simulates(&self) -> bool {
        matches!(self, GameMode::Playing | GameMode::Bonus)
    }
}

/// What a falling object is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Alarm bomb, costs a life
    Hazard,
    /// Jewel
    Collectible1,
    /// Golden idol
    Collectible2,
    /// Painting
    Collectible3,
}

impl Category {
    pub const ALL: [Self; 4] = [
        Self::Hazard,
        Self::Collectible1,
        Self::Collectible2,
        Self::Collectible3,
    ];

    pub fn is_hazard(&self) -> bool {
        matches!(self, Category::Hazard)
    }

    /// Points awarded when sliced
    pub fn score_value(&self) -> u32 {
        match self {
            Category::Hazard => 0,
            Category::Collectible1 | Category::Collectible2 | Category::Collectible3 => {
                COLLECTIBLE_SCORE
            }
        }
    }

    /// Asset key the presentation layer draws this category with
    pub fn sprite_key(&self) -> &'static str {
        match self {
            Category::Hazard => "bomb",
            Category::Collectible1 => "jewel",
            Category::Collectible2 => "idol",
            Category::Collectible3 => "painting",
        }
    }
}

/// An object launched from the bottom edge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingObject {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radians
    pub rotation: f32,
    /// Radians per step
    pub rotation_speed: f32,
    /// Sim time (ms) the object was created
    pub spawned_at_ms: f64,
    category: Category,
    radius: f32,
}

impl FallingObject {
    /// A motionless object; use the `with_*` builders for launch state
    pub fn new(id: u32, category: Category, pos: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            rotation: 0.0,
            rotation_speed: 0.0,
            spawned_at_ms: 0.0,
            category,
            radius,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_spin(mut self, rotation: f32, rotation_speed: f32) -> Self {
        self.rotation = rotation;
        self.rotation_speed = rotation_speed;
        self
    }

    pub fn spawned_at(mut self, now_ms: f64) -> Self {
        self.spawned_at_ms = now_ms;
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Advance one step: gravity, then position, then spin
    pub fn step(&mut self) {
        self.vel.y += GRAVITY;
        self.pos += self.vel;
        self.rotation = normalize_angle(self.rotation + self.rotation_speed);
    }

    /// Below the bottom or past either side. The top is never a cull edge,
    /// objects arc back down.
    pub fn is_off_screen(&self, width: f32, height: f32) -> bool {
        self.pos.y > height + self.radius
            || self.pos.x < -self.radius
            || self.pos.x > width + self.radius
    }
}

/// A flame particle left behind by a swipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// 0-1, decreases over time
    pub life: f32,
    /// Life lost per step
    pub decay: f32,
}

/// Size multiplier applied every step
pub const PARTICLE_SHRINK: f32 = 0.95;

/// Maximum particles
pub const MAX_PARTICLES: usize = 256;

/// Maximum swipe samples kept for the trail
pub const TRAIL_LENGTH: usize = 20;

impl Particle {
    /// Random flame particle at `pos`
    pub fn flame(pos: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            vel: Vec2::new(rng.random_range(-1.5..1.5), rng.random_range(-2.0..0.5)),
            size: rng.random_range(4.0..10.0),
            life: 1.0,
            decay: rng.random_range(0.02..0.05),
        }
    }

    pub fn step(&mut self) {
        self.pos += self.vel;
        self.size *= PARTICLE_SHRINK;
        self.life -= self.decay;
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }
}

/// Notifications for collaborators (audio, visuals, host page)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    /// Mode changed; audio maps this to a track
    ModeEntered(GameMode),
    /// A collectible was sliced
    Sliced { category: Category, pos: Vec2 },
    /// A hazard was hit
    HazardHit { pos: Vec2 },
    /// Scratch card replaced by a fresh one, or dropped on reset
    ScratchReset,
    /// Reveal threshold passed; the host leaves the game
    BonusComplete,
}

/// Complete session state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub seed: u64,
    pub tuning: Tuning,
    pub mode: GameMode,
    pub score: u32,
    pub lives: u8,
    /// Live objects in spawn order
    pub objects: Vec<FallingObject>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Recent swipe samples, oldest first
    pub trail: Vec<Vec2>,
    pub last_spawn_ms: f64,
    /// Latest sim time seen by `tick`
    pub now_ms: f64,
    /// Index into the intro dialogue
    pub dialogue_page: usize,
    /// Lazily built in bonus mode
    #[serde(skip)]
    pub scratch: Option<ScratchCard>,
    pub bonus_complete: bool,
    /// Anything sliced since entering `Playing` (hides the hand hint)
    pub has_sliced: bool,
    /// Pending notifications, drained by the host
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mode = tuning.variant.initial_mode();
        let lives = tuning.starting_lives();
        Self {
            seed,
            tuning,
            mode,
            score: 0,
            lives,
            objects: Vec::new(),
            particles: Vec::new(),
            trail: Vec::new(),
            last_spawn_ms: 0.0,
            now_ms: 0.0,
            dialogue_page: 0,
            scratch: None,
            bonus_complete: false,
            has_sliced: false,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an object to the live set (newest last)
    pub fn push_object(&mut self, object: FallingObject) {
        self.objects.push(object);
    }

    pub fn is_game_over(&self) -> bool {
        self.mode == GameMode::GameOver
    }

    /// Play area as (width, height)
    pub fn play_size(&self) -> Vec2 {
        Vec2::new(self.tuning.play_width, self.tuning.play_height)
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn show_hand_hint(&self) -> bool {
        self.mode == GameMode::Playing && !self.has_sliced
    }

    /// Drop objects, particles and the swipe trail
    pub(crate) fn clear_collections(&mut self) {
        self.objects.clear();
        self.particles.clear();
        self.trail.clear();
    }

    /// Emit a burst of flame particles at `pos`
    pub(crate) fn emit_particles(&mut self, pos: Vec2) {
        for _ in 0..self.tuning.particle_burst {
            if self.particles.len() >= MAX_PARTICLES {
                break;
            }
            let particle = Particle::flame(pos, &mut self.rng);
            self.particles.push(particle);
        }
    }

    /// Step particles, then drop the dead ones
    pub(crate) fn update_particles(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.step();
        }
        self.particles.retain(|p| !p.is_dead());
    }

    /// Step objects, then drop the ones that left the play area
    pub(crate) fn update_objects(&mut self) {
        let (w, h) = (self.tuning.play_width, self.tuning.play_height);
        for object in self.objects.iter_mut() {
            object.step();
        }
        self.objects.retain(|o| !o.is_off_screen(w, h));
    }
}
