//! Mode transitions
//!
//! Intro → Playing → Bonus, Playing → GameOver, and reset/replay back to the
//! variant's starting mode. Every transition records a `ModeEntered` event so
//! audio can follow along.

use super::dialogue;
use super::scratch::ScratchCard;
use super::state::{GameEvent, GameMode, GameState};

impl GameState {
    fn enter(&mut self, mode: GameMode) {
        log::info!("Mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.events.push(GameEvent::ModeEntered(mode));
    }

    /// Reinitialize everything for a fresh run in the variant's starting mode
    fn reinitialize(&mut self, now_ms: f64) {
        self.score = 0;
        self.lives = self.tuning.starting_lives();
        self.clear_collections();
        self.dialogue_page = 0;
        self.bonus_complete = false;
        self.has_sliced = false;
        self.last_spawn_ms = now_ms;
        if self.scratch.take().is_some() {
            self.events.push(GameEvent::ScratchReset);
        }
        self.enter(self.tuning.variant.initial_mode());
    }

    /// Move to the next briefing page; past the last page the heist starts.
    ///
    /// Ignored outside `Intro`.
    pub fn advance_dialogue(&mut self, now_ms: f64) {
        if self.mode != GameMode::Intro {
            return;
        }
        if dialogue::is_last_page(self.dialogue_page) {
            self.start_playing(now_ms);
        } else {
            self.dialogue_page += 1;
        }
    }

    /// Intro → Playing with a clean slate
    pub fn start_playing(&mut self, now_ms: f64) {
        self.score = 0;
        self.lives = self.tuning.starting_lives();
        self.clear_collections();
        self.has_sliced = false;
        self.last_spawn_ms = now_ms;
        self.enter(GameMode::Playing);
    }

    /// Playing → Bonus with a freshly covered scratch card
    pub fn enter_bonus(&mut self) {
        self.clear_collections();
        self.scratch = Some(ScratchCard::centered(
            self.play_size(),
            self.tuning.scratch_brush_radius,
        ));
        self.bonus_complete = false;
        self.events.push(GameEvent::ScratchReset);
        self.enter(GameMode::Bonus);
    }

    /// Playing → GameOver, once the last life is gone
    pub(crate) fn end_game(&mut self) {
        debug_assert!(self.lives == 0, "game over with {} lives left", self.lives);
        self.trail.clear();
        self.enter(GameMode::GameOver);
    }

    /// Explicit reset from any mode (the close control)
    pub fn request_reset(&mut self, now_ms: f64) {
        log::info!("Reset requested in {:?}", self.mode);
        self.reinitialize(now_ms);
    }

    /// Replay after game over; ignored in any other mode
    pub fn request_replay(&mut self, now_ms: f64) {
        if self.mode != GameMode::GameOver {
            log::debug!("Replay ignored in {:?}", self.mode);
            return;
        }
        self.reinitialize(now_ms);
    }

    /// Collectible scored: check for the bonus threshold
    pub(crate) fn check_bonus_threshold(&mut self) {
        if self.mode == GameMode::Playing
            && self.tuning.variant.has_bonus()
            && self.score >= self.tuning.score_to_win
        {
            self.enter_bonus();
        }
    }

    /// Hazard hit: check for game over
    pub(crate) fn check_game_over(&mut self) {
        if self.mode == GameMode::Playing && self.lives == 0 {
            self.end_game();
        }
    }

    /// Scratch at `p` during the bonus and report completion once
    pub(crate) fn scratch_at(&mut self, p: glam::Vec2) {
        if self.mode != GameMode::Bonus || self.bonus_complete {
            return;
        }
        let Some(card) = self.scratch.as_mut() else {
            return;
        };
        card.scratch(p);
        let revealed = card.revealed_fraction();
        if revealed > self.tuning.reveal_threshold {
            log::info!("Vault revealed ({:.0}%)", revealed * 100.0);
            self.bonus_complete = true;
            self.events.push(GameEvent::BonusComplete);
        }
    }
}
