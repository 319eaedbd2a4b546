//! Player preferences
//!
//! Cosmetic and audio toggles. None of these affect the simulation.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visual Effects ===
    /// Swipe trail
    pub trails: bool,
    /// Flame particles behind the swipe
    pub particles: bool,
    /// Animated hand showing how to swipe
    pub hand_hint: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trails: true,
            particles: true,
            hand_hint: true,

            master_volume: 0.8,
            music_volume: 0.7,
            muted: false,
        }
    }
}

impl Settings {
    /// Effective music volume (respects mute)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        }
    }

    /// Parse settings JSON, falling back to defaults
    pub fn from_json_or_default(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mute_silences_music() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        assert_eq!(settings.effective_music_volume(), 0.0);
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json_or_default(r#"{ "particles": false }"#);
        assert!(!settings.particles);
        assert!(settings.trails);
        assert!((settings.effective_music_volume() - 0.56).abs() < 1e-6);
    }

    #[test]
    fn test_music_volume_follows_sliders() {
        let settings = Settings::from_json_or_default(
            r#"{ "master_volume": 0.5, "music_volume": 0.4 }"#,
        );
        assert!((settings.effective_music_volume() - 0.2).abs() < 1e-6);

        let loud = Settings {
            master_volume: 2.0,
            music_volume: 1.0,
            ..Default::default()
        };
        assert_eq!(loud.effective_music_volume(), 1.0);
    }

    #[test]
    fn test_garbage_json_defaults() {
        let settings = Settings::from_json_or_default("not json");
        assert!(settings.hand_hint);
    }
}
