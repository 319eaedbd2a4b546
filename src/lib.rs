//! Heist Slice - A museum-heist slicing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game modes)
//! - `renderer`: Canvas2D presentation
//! - `audio`: Mode-driven music
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::{Tuning, TuningError, Variant};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (60 Hz, one display frame)
    pub const SIM_DT_MS: f64 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default play area (logical pixels)
    pub const PLAY_WIDTH: f32 = 800.0;
    pub const PLAY_HEIGHT: f32 = 600.0;

    /// Falling object defaults
    pub const OBJECT_RADIUS: f32 = 20.0;
    /// Horizontal inset from each side when picking a spawn column
    pub const SPAWN_MARGIN: f32 = 20.0;
    /// Spawn height below the bottom edge
    pub const SPAWN_DEPTH: f32 = 20.0;
    /// Upward launch speed (pixels/frame, negative is up)
    pub const LAUNCH_SPEED_Y: f32 = -12.0;
    /// Horizontal jitter span (speed_x in [-span/2, span/2))
    pub const LAUNCH_JITTER_X: f32 = 4.0;
    /// Downward acceleration (pixels/frame²)
    pub const GRAVITY: f32 = 0.5;
    /// Spin span (rotation speed in [-span/2, span/2) radians/frame)
    pub const SPIN_SPAN: f32 = 0.2;

    /// Spawn period in milliseconds
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;

    /// Points per collectible
    pub const COLLECTIBLE_SCORE: u32 = 10;
    /// Score at which the bonus phase starts
    pub const SCORE_TO_WIN: u32 = 200;
    /// Lives at the start of a heist run
    pub const HEIST_LIVES: u8 = 3;
    /// Lives in the classic rules
    pub const CLASSIC_LIVES: u8 = 1;

    /// Scratch-card reveal fraction that completes the bonus
    pub const REVEAL_THRESHOLD: f32 = 0.6;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Map a client-space pointer position into play-area space.
///
/// `rect_origin`/`rect_size` describe where the canvas sits on the page,
/// `play_size` is the logical size of the play area. Returns `None` when the
/// canvas has no area (hidden or not laid out yet).
pub fn client_to_play_area(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    play_size: Vec2,
) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    Some((client - rect_origin) / rect_size * play_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_angle_wraps() {
        use std::f32::consts::PI;
        assert!((normalize_angle(3.0 * PI) - (-PI)).abs() < 1e-4);
        assert!((normalize_angle(0.5) - 0.5).abs() < 1e-6);
        assert!(normalize_angle(-7.0) >= -PI);
    }

    #[test]
    fn test_client_to_play_area_scales() {
        let p = client_to_play_area(
            Vec2::new(110.0, 170.0),
            Vec2::new(10.0, 20.0),
            Vec2::new(400.0, 300.0),
            Vec2::new(800.0, 600.0),
        )
        .unwrap();
        assert_eq!(p, Vec2::new(200.0, 300.0));
    }

    #[test]
    fn test_client_to_play_area_degenerate_rect() {
        let p = client_to_play_area(Vec2::ZERO, Vec2::ZERO, Vec2::new(0.0, 300.0), Vec2::ONE);
        assert!(p.is_none());
    }
}
