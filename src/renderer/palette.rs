//! Colors and fades for the 2D presentation

use crate::sim::Category;

/// Fill color for an object when its sprite is unavailable
pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::Hazard => "#d62828",
        Category::Collectible1 => "#3a86ff",
        Category::Collectible2 => "#ffbe0b",
        Category::Collectible3 => "#2a9d8f",
    }
}

/// Alpha and line width for trail segment `i` of `len` (oldest first).
/// Newer segments are brighter and thicker.
pub fn trail_segment_style(i: usize, len: usize, base_width: f32) -> (f32, f32) {
    if len == 0 {
        return (0.0, 0.0);
    }
    let t = (i + 1) as f32 / len as f32;
    let alpha = t * 0.9;
    let width = base_width * (0.3 + 0.7 * t);
    (alpha, width)
}

/// Flame color: white-yellow when fresh, fading through orange to red
pub fn flame_color(life: f32) -> (u8, u8, u8) {
    let life = life.clamp(0.0, 1.0);
    let g = (60.0 + 180.0 * life) as u8;
    let b = (40.0 * life * life) as u8;
    (255, g, b)
}

/// CSS rgba() string
pub fn rgba((r, g, b): (u8, u8, u8), alpha: f32) -> String {
    format!("rgba({}, {}, {}, {:.3})", r, g, b, alpha.clamp(0.0, 1.0))
}
