//! Hit tests between pointer gestures and round objects
//!
//! Taps use a strict point-in-circle test. Swipes test the segment between
//! consecutive samples, which is deliberately more forgiving: a segment that
//! just grazes the rim counts as a hit.

use glam::Vec2;

/// True iff `p` lies strictly inside the circle. The rim is a miss.
#[inline]
pub fn point_in_circle(p: Vec2, center: Vec2, radius: f32) -> bool {
    p.distance(center) < radius
}

/// True iff the finite segment `a`-`b` touches the circle (rim included).
///
/// A zero-length segment never hits.
pub fn segment_intersects_circle(a: Vec2, b: Vec2, center: Vec2, radius: f32) -> bool {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return false;
    }

    // Projection of the center onto the segment, clamped to its ends
    let t = ((center - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;
    closest.distance_squared(center) <= radius * radius
}

/// A usable gesture sample has finite coordinates
#[inline]
pub fn is_valid_sample(p: Vec2) -> bool {
    p.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_rim_is_a_miss() {
        let c = Vec2::new(100.0, 100.0);
        assert!(!point_in_circle(Vec2::new(150.0, 100.0), c, 50.0));
        assert!(point_in_circle(Vec2::new(149.9, 100.0), c, 50.0));
    }

    #[test]
    fn test_segment_through_diameter() {
        let c = Vec2::new(0.0, 0.0);
        assert!(segment_intersects_circle(
            Vec2::new(-100.0, 0.0),
            Vec2::new(100.0, 0.0),
            c,
            10.0
        ));
    }

    #[test]
    fn test_segment_grazing_rim_hits() {
        // Tangent line at y = 10
        assert!(segment_intersects_circle(
            Vec2::new(-5.0, 10.0),
            Vec2::new(5.0, 10.0),
            Vec2::ZERO,
            10.0
        ));
    }

    #[test]
    fn test_segment_clamped_to_endpoints() {
        // The infinite line passes through the center, the segment stops short
        assert!(!segment_intersects_circle(
            Vec2::new(20.0, 0.0),
            Vec2::new(40.0, 0.0),
            Vec2::ZERO,
            10.0
        ));
    }

    #[test]
    fn test_zero_length_segment_misses() {
        let p = Vec2::new(3.0, 3.0);
        assert!(!segment_intersects_circle(p, p, p, 50.0));
    }

    #[test]
    fn test_nan_sample_rejected() {
        assert!(!is_valid_sample(Vec2::new(f32::NAN, 1.0)));
        assert!(!is_valid_sample(Vec2::new(1.0, f32::INFINITY)));
        assert!(is_valid_sample(Vec2::new(1.0, 2.0)));
    }

    proptest! {
        #[test]
        fn prop_point_strictly_inside_hits(
            cx in -500.0f32..500.0,
            cy in -500.0f32..500.0,
            r in 1.0f32..200.0,
            angle in 0.0f32..std::f32::consts::TAU,
            frac in 0.0f32..0.99,
        ) {
            let c = Vec2::new(cx, cy);
            let p = c + Vec2::from_angle(angle) * r * frac;
            prop_assert!(point_in_circle(p, c, r));
        }

        #[test]
        fn prop_segment_outside_bounding_box_misses(
            cx in -500.0f32..500.0,
            cy in -500.0f32..500.0,
            r in 1.0f32..100.0,
            x1 in -500.0f32..500.0,
            x2 in -500.0f32..500.0,
            gap in 1.0f32..100.0,
        ) {
            // Horizontal segment entirely above the circle's bounding box
            let y = cy - r - gap;
            let c = Vec2::new(cx, cy);
            prop_assert!(!segment_intersects_circle(Vec2::new(x1, y), Vec2::new(x2, y), c, r));
        }

        #[test]
        fn prop_horizontal_segment_across_center_hits(
            cx in -500.0f32..500.0,
            cy in -500.0f32..500.0,
            r in 1.0f32..100.0,
            left in 0.0f32..300.0,
            right in 0.0f32..300.0,
        ) {
            let c = Vec2::new(cx, cy);
            let a = Vec2::new(cx - left - 0.5, cy);
            let b = Vec2::new(cx + right + 0.5, cy);
            prop_assert!(segment_intersects_circle(a, b, c, r));
        }

        #[test]
        fn prop_degenerate_segment_never_hits(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            r in 0.0f32..1000.0,
        ) {
            let p = Vec2::new(x, y);
            prop_assert!(!segment_intersects_circle(p, p, Vec2::ZERO, r));
        }
    }
}
