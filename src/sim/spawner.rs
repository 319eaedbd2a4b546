//! Time-gated object spawning
//!
//! One object per elapsed interval, launched upward from just below the
//! bottom edge.

use glam::Vec2;
use rand::Rng;

use super::state::{Category, FallingObject, GameMode, GameState};
use crate::consts::*;

/// Pick a category with cascading rolls.
///
/// Each threshold is checked against a fresh roll, so the collectibles are
/// not evenly weighted: hazard 20%, then 0.8 × 33% for the first collectible,
/// and the remainder split evenly between the other two.
pub fn sample_category(rng: &mut impl Rng) -> Category {
    if rng.random::<f32>() < 0.2 {
        Category::Hazard
    } else if rng.random::<f32>() < 0.33 {
        Category::Collectible1
    } else if rng.random::<f32>() < 0.5 {
        Category::Collectible2
    } else {
        Category::Collectible3
    }
}

/// Build a freshly launched object of a random category
pub fn launch_object(state: &mut GameState, now_ms: f64) -> FallingObject {
    let width = state.tuning.play_width;
    let height = state.tuning.play_height;
    let radius = state.tuning.object_radius;

    let rng = &mut state.rng;
    let x = rng.random::<f32>() * (width - 2.0 * SPAWN_MARGIN) + SPAWN_MARGIN;
    let speed_x = (rng.random::<f32>() - 0.5) * LAUNCH_JITTER_X;
    let rotation = rng.random::<f32>() * std::f32::consts::TAU;
    let rotation_speed = (rng.random::<f32>() - 0.5) * SPIN_SPAN;
    let category = sample_category(rng);

    let id = state.next_entity_id();
    FallingObject::new(id, category, Vec2::new(x, height + SPAWN_DEPTH), radius)
        .with_velocity(Vec2::new(speed_x, LAUNCH_SPEED_Y))
        .with_spin(rotation, rotation_speed)
        .spawned_at(now_ms)
}

/// Spawn one object if the interval has elapsed while playing.
///
/// Returns true when an object was created.
pub fn maybe_spawn(state: &mut GameState, now_ms: f64) -> bool {
    if state.mode != GameMode::Playing {
        return false;
    }
    if now_ms - state.last_spawn_ms <= state.tuning.spawn_interval_ms {
        return false;
    }

    let object = launch_object(state, now_ms);
    log::debug!(
        "Spawned {:?} #{} at x={:.0}",
        object.category(),
        object.id,
        object.pos.x
    );
    state.push_object(object);
    state.last_spawn_ms = now_ms;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn playing_state() -> GameState {
        let mut state = GameState::new(42, Tuning::default());
        state.mode = GameMode::Playing;
        state
    }

    #[test]
    fn test_gate_holds_until_interval_elapses() {
        let mut state = playing_state();
        state.last_spawn_ms = 5000.0;
        assert!(!maybe_spawn(&mut state, 5500.0));
        // Exactly one interval is not enough, the gate is strict
        assert!(!maybe_spawn(&mut state, 6000.0));
        assert!(state.objects.is_empty());

        assert!(maybe_spawn(&mut state, 6001.0));
        assert_eq!(state.objects.len(), 1);
        assert_eq!(state.last_spawn_ms, 6001.0);

        // Gate reset: an immediate second call does nothing
        assert!(!maybe_spawn(&mut state, 6002.0));
        assert_eq!(state.objects.len(), 1);
    }

    #[test]
    fn test_no_spawn_outside_playing() {
        for mode in [GameMode::Intro, GameMode::Bonus, GameMode::GameOver] {
            let mut state = playing_state();
            state.mode = mode;
            assert!(!maybe_spawn(&mut state, 10_000.0));
            assert!(state.objects.is_empty());
        }
    }

    #[test]
    fn test_launch_within_bounds() {
        let mut state = playing_state();
        for i in 0..500 {
            let obj = launch_object(&mut state, i as f64);
            assert!(obj.pos.x >= SPAWN_MARGIN && obj.pos.x <= 800.0 - SPAWN_MARGIN);
            assert_eq!(obj.pos.y, 600.0 + SPAWN_DEPTH);
            assert_eq!(obj.vel.y, LAUNCH_SPEED_Y);
            assert!(obj.vel.x.abs() <= LAUNCH_JITTER_X / 2.0);
            assert!(obj.rotation_speed.abs() <= SPIN_SPAN / 2.0);
            assert_eq!(obj.radius(), OBJECT_RADIUS);
        }
    }

    #[test]
    fn test_category_distribution() {
        let mut rng = Pcg32::seed_from_u64(2024);
        let n = 100_000;
        let mut counts = [0usize; 4];
        for _ in 0..n {
            let idx = match sample_category(&mut rng) {
                Category::Hazard => 0,
                Category::Collectible1 => 1,
                Category::Collectible2 => 2,
                Category::Collectible3 => 3,
            };
            counts[idx] += 1;
        }
        let frac = |i: usize| counts[i] as f64 / n as f64;
        let expected = [0.2, 0.8 * 0.33, 0.8 * 0.67 * 0.5, 0.8 * 0.67 * 0.5];
        for (i, want) in expected.iter().enumerate() {
            assert!(
                (frac(i) - want).abs() < 0.01,
                "category {} at {:.4}, expected {:.4}",
                i,
                frac(i),
                want
            );
        }
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let mut a = playing_state();
        let mut b = playing_state();
        for t in 1..20 {
            maybe_spawn(&mut a, t as f64 * 1001.0);
            maybe_spawn(&mut b, t as f64 * 1001.0);
        }
        assert_eq!(a.objects.len(), b.objects.len());
        for (x, y) in a.objects.iter().zip(&b.objects) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.category(), y.category());
        }
    }
}
