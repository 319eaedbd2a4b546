//! Pointer gestures to hits
//!
//! Taps test a single point, swipes test the segment between consecutive
//! samples. Both scan newest to oldest, mark hits, then remove the marked
//! objects in one pass.

use glam::Vec2;

use super::geometry::{is_valid_sample, point_in_circle, segment_intersects_circle};
use super::state::{Category, GameEvent, GameMode, GameState, TRAIL_LENGTH};

/// Apply the effect of slicing one object
fn apply_hit(state: &mut GameState, category: Category, pos: Vec2) {
    state.has_sliced = true;
    match category {
        Category::Hazard => {
            state.lives = state.lives.saturating_sub(1);
            log::debug!("Hazard hit, {} lives left", state.lives);
            state.events.push(GameEvent::HazardHit { pos });
            state.check_game_over();
        }
        Category::Collectible1 | Category::Collectible2 | Category::Collectible3 => {
            state.score += category.score_value();
            state.events.push(GameEvent::Sliced { category, pos });
            state.check_bonus_threshold();
        }
    }
}

/// Scan objects newest first, hitting every one `hits` accepts.
///
/// Returns the number of objects hit.
fn slice_where(state: &mut GameState, hits: impl Fn(Vec2, f32) -> bool) -> usize {
    let stop_on_game_over = state.tuning.variant.stops_scan_on_game_over();
    let mut struck = Vec::new();

    for i in (0..state.objects.len()).rev() {
        let (pos, radius, category) = {
            let o = &state.objects[i];
            (o.pos, o.radius(), o.category())
        };
        if !hits(pos, radius) {
            continue;
        }
        struck.push(state.objects[i].id);
        apply_hit(state, category, pos);

        // A transition may have already cleared the collection
        match state.mode {
            GameMode::Bonus => break,
            GameMode::GameOver if stop_on_game_over => break,
            _ => {}
        }
    }

    if !struck.is_empty() {
        state.objects.retain(|o| !struck.contains(&o.id));
    }
    struck.len()
}

/// Tap or click at `p`. Returns the number of objects hit.
pub fn tap(state: &mut GameState, p: Vec2) -> usize {
    if state.mode != GameMode::Playing {
        return 0;
    }
    if !is_valid_sample(p) {
        log::warn!("Dropping malformed tap sample {:?}", p);
        return 0;
    }
    slice_where(state, |center, radius| point_in_circle(p, center, radius))
}

/// Pointer moved to `p` while held. Extends the trail, sheds flame
/// particles, and slices along the segment from the previous sample.
///
/// Returns the number of objects hit.
pub fn swipe_to(state: &mut GameState, p: Vec2) -> usize {
    if state.mode != GameMode::Playing {
        return 0;
    }
    if !is_valid_sample(p) {
        log::warn!("Dropping malformed swipe sample {:?}", p);
        return 0;
    }

    let prev = state.trail.last().copied();
    state.trail.push(p);
    if state.trail.len() > TRAIL_LENGTH {
        state.trail.remove(0);
    }
    state.emit_particles(p);

    match prev {
        Some(a) => slice_where(state, |center, radius| {
            segment_intersects_circle(a, p, center, radius)
        }),
        None => 0,
    }
}

/// Pointer released: the next swipe starts a fresh trail
pub fn end_swipe(state: &mut GameState) {
    state.trail.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::FallingObject;
    use crate::tuning::Tuning;

    fn playing(tuning: Tuning) -> GameState {
        let mut state = GameState::new(9, tuning);
        state.start_playing(0.0);
        state.drain_events();
        state
    }

    fn place(state: &mut GameState, category: Category, x: f32, y: f32, r: f32) -> u32 {
        let id = state.next_entity_id();
        state.push_object(FallingObject::new(id, category, Vec2::new(x, y), r));
        id
    }

    #[test]
    fn test_tap_hazard_costs_a_life() {
        let mut state = playing(Tuning::default());
        place(&mut state, Category::Hazard, 100.0, 100.0, 50.0);

        assert_eq!(tap(&mut state, Vec2::new(110.0, 105.0)), 1);
        assert_eq!(state.lives, 2);
        assert!(state.objects.is_empty());
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_tap_miss() {
        let mut state = playing(Tuning::default());
        place(&mut state, Category::Collectible1, 100.0, 100.0, 20.0);
        assert_eq!(tap(&mut state, Vec2::new(120.0, 100.0)), 0);
        assert_eq!(state.objects.len(), 1);
        assert!(!state.has_sliced);
    }

    #[test]
    fn test_tap_hits_every_overlapping_object() {
        let mut state = playing(Tuning::default());
        place(&mut state, Category::Collectible1, 100.0, 100.0, 30.0);
        place(&mut state, Category::Collectible2, 105.0, 100.0, 30.0);
        let far = place(&mut state, Category::Collectible3, 400.0, 100.0, 30.0);

        assert_eq!(tap(&mut state, Vec2::new(102.0, 100.0)), 2);
        assert_eq!(state.score, 20);
        assert_eq!(state.objects.len(), 1);
        assert_eq!(state.objects[0].id, far);
    }

    #[test]
    fn test_heist_tap_stops_at_game_over() {
        let mut state = playing(Tuning::default());
        state.lives = 1;
        // Older collectible under a newer hazard; the scan reaches the hazard first
        let collectible = place(&mut state, Category::Collectible1, 100.0, 100.0, 30.0);
        place(&mut state, Category::Hazard, 100.0, 100.0, 30.0);

        tap(&mut state, Vec2::new(100.0, 100.0));
        assert_eq!(state.mode, GameMode::GameOver);
        assert_eq!(state.score, 0);
        assert_eq!(state.objects.len(), 1);
        assert_eq!(state.objects[0].id, collectible);
    }

    #[test]
    fn test_classic_tap_keeps_scanning_after_bomb() {
        let mut state = GameState::new(9, Tuning::classic());
        place(&mut state, Category::Collectible1, 100.0, 100.0, 30.0);
        place(&mut state, Category::Hazard, 100.0, 100.0, 30.0);

        assert_eq!(tap(&mut state, Vec2::new(100.0, 100.0)), 2);
        assert_eq!(state.mode, GameMode::GameOver);
        assert_eq!(state.lives, 0);
        assert_eq!(state.score, 10);
        assert!(state.objects.is_empty());
    }

    #[test]
    fn test_tap_reaching_score_enters_bonus() {
        let mut state = playing(Tuning::default());
        state.score = 190;
        place(&mut state, Category::Collectible2, 100.0, 100.0, 30.0);
        place(&mut state, Category::Collectible3, 500.0, 300.0, 30.0);
        state.trail.push(Vec2::ZERO);

        tap(&mut state, Vec2::new(100.0, 100.0));
        assert_eq!(state.score, 200);
        assert_eq!(state.mode, GameMode::Bonus);
        assert!(state.objects.is_empty());
        assert!(state.particles.is_empty());
        assert!(state.trail.is_empty());
    }

    #[test]
    fn test_tap_ignored_outside_playing() {
        let mut state = GameState::new(9, Tuning::default());
        place(&mut state, Category::Collectible1, 100.0, 100.0, 30.0);
        assert_eq!(tap(&mut state, Vec2::new(100.0, 100.0)), 0);
        assert_eq!(state.objects.len(), 1);
    }

    #[test]
    fn test_nan_tap_skipped() {
        let mut state = playing(Tuning::default());
        place(&mut state, Category::Collectible1, 100.0, 100.0, 30.0);
        assert_eq!(tap(&mut state, Vec2::new(f32::NAN, 100.0)), 0);
        assert_eq!(state.objects.len(), 1);
    }

    #[test]
    fn test_swipe_slices_between_samples() {
        let mut state = playing(Tuning::default());
        place(&mut state, Category::Collectible1, 100.0, 100.0, 20.0);

        // First sample only starts the trail
        assert_eq!(swipe_to(&mut state, Vec2::new(50.0, 100.0)), 0);
        assert_eq!(swipe_to(&mut state, Vec2::new(150.0, 100.0)), 1);
        assert_eq!(state.score, 10);
        assert_eq!(state.trail.len(), 2);
        assert_eq!(state.particles.len(), 6);
    }

    #[test]
    fn test_swipe_duplicate_sample_is_harmless() {
        let mut state = playing(Tuning::default());
        place(&mut state, Category::Collectible1, 100.0, 100.0, 20.0);
        swipe_to(&mut state, Vec2::new(100.0, 100.0));
        assert_eq!(swipe_to(&mut state, Vec2::new(100.0, 100.0)), 0);
        assert_eq!(state.objects.len(), 1);
    }

    #[test]
    fn test_swipe_nan_not_recorded() {
        let mut state = playing(Tuning::default());
        swipe_to(&mut state, Vec2::new(10.0, 10.0));
        swipe_to(&mut state, Vec2::new(f32::NAN, f32::NAN));
        assert_eq!(state.trail, vec![Vec2::new(10.0, 10.0)]);
    }

    #[test]
    fn test_trail_capped_and_cleared() {
        let mut state = playing(Tuning::default());
        for i in 0..50 {
            swipe_to(&mut state, Vec2::new(i as f32, 0.0));
        }
        assert_eq!(state.trail.len(), TRAIL_LENGTH);
        assert_eq!(state.trail[0], Vec2::new(30.0, 0.0));
        end_swipe(&mut state);
        assert!(state.trail.is_empty());
    }

    #[test]
    fn test_hand_hint_hidden_after_first_slice() {
        let mut state = playing(Tuning::default());
        assert!(state.show_hand_hint());
        place(&mut state, Category::Collectible1, 100.0, 100.0, 30.0);
        tap(&mut state, Vec2::new(100.0, 100.0));
        assert!(!state.show_hand_hint());
    }
}
