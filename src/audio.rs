//! Mode-driven music
//!
//! The sim only announces mode changes; this module decides which track
//! plays. Playback itself is wasm-only and never fatal: a track that fails to
//! load just stays silent.

use crate::sim::{GameEvent, GameMode};

/// Background tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    /// Quiet museum ambience under the briefing
    Briefing,
    /// Main heist theme
    Heist,
    /// Vault bonus
    Vault,
}

impl MusicTrack {
    pub const ALL: [Self; 3] = [Self::Briefing, Self::Heist, Self::Vault];

    /// Asset path relative to the page
    pub fn asset_path(&self) -> &'static str {
        match self {
            MusicTrack::Briefing => "assets/music/briefing.mp3",
            MusicTrack::Heist => "assets/music/heist.mp3",
            MusicTrack::Vault => "assets/music/vault.mp3",
        }
    }
}

/// Track for a mode; `None` means silence
pub fn track_for_mode(mode: GameMode) -> Option<MusicTrack> {
    match mode {
        GameMode::Intro => Some(MusicTrack::Briefing),
        GameMode::Playing => Some(MusicTrack::Heist),
        GameMode::Bonus => Some(MusicTrack::Vault),
        GameMode::GameOver => None,
    }
}

/// Latest music change requested by a batch of events, if any
pub fn music_change(events: &[GameEvent]) -> Option<Option<MusicTrack>> {
    events.iter().rev().find_map(|e| match e {
        GameEvent::ModeEntered(mode) => Some(track_for_mode(*mode)),
        _ => None,
    })
}

#[cfg(target_arch = "wasm32")]
pub use player::MusicPlayer;

#[cfg(target_arch = "wasm32")]
mod player {
    use web_sys::HtmlAudioElement;

    use super::MusicTrack;
    use crate::settings::Settings;

    /// Looping background music over `<audio>` elements
    pub struct MusicPlayer {
        tracks: Vec<(MusicTrack, HtmlAudioElement)>,
        current: Option<MusicTrack>,
        volume: f32,
    }

    impl Default for MusicPlayer {
        fn default() -> Self {
            Self::new(Settings::default().effective_music_volume())
        }
    }

    impl MusicPlayer {
        /// Load every track at `volume` (0.0 - 1.0), usually
        /// `Settings::effective_music_volume`
        pub fn new(volume: f32) -> Self {
            let volume = volume.clamp(0.0, 1.0);
            let mut tracks = Vec::new();
            for track in MusicTrack::ALL {
                match HtmlAudioElement::new_with_src(track.asset_path()) {
                    Ok(el) => {
                        el.set_loop(true);
                        el.set_volume(volume as f64);
                        tracks.push((track, el));
                    }
                    Err(_) => log::warn!("Failed to create audio for {:?} - track disabled", track),
                }
            }
            Self {
                tracks,
                current: None,
                volume,
            }
        }

        fn element(&self, track: MusicTrack) -> Option<&HtmlAudioElement> {
            self.tracks.iter().find(|(t, _)| *t == track).map(|(_, el)| el)
        }

        /// Set volume (0.0 - 1.0)
        pub fn set_volume(&mut self, vol: f32) {
            self.volume = vol.clamp(0.0, 1.0);
            for (_, el) in &self.tracks {
                el.set_volume(self.volume as f64);
            }
        }

        /// Switch to `track`, or stop everything with `None`
        pub fn switch_to(&mut self, track: Option<MusicTrack>) {
            if self.current == track {
                return;
            }
            if let Some(el) = self.current.and_then(|t| self.element(t)) {
                let _ = el.pause();
                el.set_current_time(0.0);
            }
            self.current = track;
            if let Some(el) = track.and_then(|t| self.element(t)) {
                el.set_volume(self.volume as f64);
                // Browsers reject autoplay before a user gesture; the next
                // mode change tries again
                if el.play().is_err() {
                    log::warn!("Music playback blocked for {:?}", track);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_game_over_is_silent() {
        assert_eq!(track_for_mode(GameMode::GameOver), None);
        assert_eq!(track_for_mode(GameMode::Bonus), Some(MusicTrack::Vault));
    }

    #[test]
    fn test_latest_mode_wins() {
        let events = vec![
            GameEvent::ModeEntered(GameMode::Playing),
            GameEvent::HazardHit { pos: Vec2::ZERO },
            GameEvent::ModeEntered(GameMode::GameOver),
        ];
        assert_eq!(music_change(&events), Some(None));
    }

    #[test]
    fn test_no_mode_change() {
        let events = vec![GameEvent::BonusComplete];
        assert_eq!(music_change(&events), None);
    }
}
