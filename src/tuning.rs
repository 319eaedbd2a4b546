//! Data-driven game balance
//!
//! Everything a designer might want to tweak without touching the sim.
//! Parsed from JSON; missing fields fall back to the defaults in `consts`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::GameMode;

/// Rule set the session plays by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Single life, no intro or bonus, taps never stop scanning
    Classic,
    /// Intro dialogue, three lives, scratch-card bonus
    #[default]
    Heist,
}

impl Variant {
    /// Mode a fresh or reset session starts in
    pub fn initial_mode(&self) -> GameMode {
        match self {
            Variant::Classic => GameMode::Playing,
            Variant::Heist => GameMode::Intro,
        }
    }

    pub fn has_bonus(&self) -> bool {
        matches!(self, Variant::Heist)
    }

    /// Whether a tap scan stops once a hit ends the game
    pub fn stops_scan_on_game_over(&self) -> bool {
        matches!(self, Variant::Heist)
    }
}

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("play area {width}x{height} is too small for the spawn margin")]
    PlayAreaTooSmall { width: f32, height: f32 },
    #[error("spawn interval must be positive, got {0}ms")]
    SpawnInterval(f64),
    #[error("initial lives must be at least 1")]
    NoLives,
    #[error("score to win must be positive")]
    ZeroScoreToWin,
    #[error("reveal threshold must be in (0, 1), got {0}")]
    RevealThreshold(f32),
}

/// Game balance parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub variant: Variant,
    pub play_width: f32,
    pub play_height: f32,
    pub object_radius: f32,
    pub spawn_interval_ms: f64,
    /// Overrides the variant's starting lives when set
    pub initial_lives: Option<u8>,
    pub score_to_win: u32,
    pub reveal_threshold: f32,
    /// Scratch brush radius (play-area pixels)
    pub scratch_brush_radius: f32,
    /// Particles emitted per swipe sample
    pub particle_burst: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            variant: Variant::Heist,
            play_width: PLAY_WIDTH,
            play_height: PLAY_HEIGHT,
            object_radius: OBJECT_RADIUS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            initial_lives: None,
            score_to_win: SCORE_TO_WIN,
            reveal_threshold: REVEAL_THRESHOLD,
            scratch_brush_radius: 30.0,
            particle_burst: 3,
        }
    }
}

impl Tuning {
    /// Classic single-life rules with default balance
    pub fn classic() -> Self {
        Self {
            variant: Variant::Classic,
            ..Self::default()
        }
    }

    /// Lives a run starts with
    pub fn starting_lives(&self) -> u8 {
        self.initial_lives.unwrap_or(match self.variant {
            Variant::Classic => CLASSIC_LIVES,
            Variant::Heist => HEIST_LIVES,
        })
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Parse a JSON document, falling back to defaults on any problem
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Ignoring tuning: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if self.play_width <= 2.0 * SPAWN_MARGIN || self.play_height <= 0.0 {
            return Err(TuningError::PlayAreaTooSmall {
                width: self.play_width,
                height: self.play_height,
            });
        }
        if !(self.spawn_interval_ms > 0.0) {
            return Err(TuningError::SpawnInterval(self.spawn_interval_ms));
        }
        if self.starting_lives() == 0 {
            return Err(TuningError::NoLives);
        }
        if self.score_to_win == 0 {
            return Err(TuningError::ZeroScoreToWin);
        }
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold < 1.0) {
            return Err(TuningError::RevealThreshold(self.reveal_threshold));
        }
        Ok(())
    }
}
