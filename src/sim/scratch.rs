//! Scratch-off card for the vault bonus
//!
//! A coarse coverage mask over a card rectangle. Scratching clears every cell
//! whose center is under the brush; the reveal fraction is cleared / total.

use glam::Vec2;

/// Cell edge length in play-area pixels
pub const CELL_SIZE: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct ScratchCard {
    origin: Vec2,
    cols: usize,
    rows: usize,
    brush_radius: f32,
    /// Row-major, true once scratched away
    cleared: Vec<bool>,
    cleared_count: usize,
}

impl ScratchCard {
    /// Card covering `size` pixels starting at `origin`
    pub fn new(origin: Vec2, size: Vec2, brush_radius: f32) -> Self {
        let cols = ((size.x / CELL_SIZE).ceil() as usize).max(1);
        let rows = ((size.y / CELL_SIZE).ceil() as usize).max(1);
        Self {
            origin,
            cols,
            rows,
            brush_radius,
            cleared: vec![false; cols * rows],
            cleared_count: 0,
        }
    }

    /// Card centered in a play area: 80% wide, half as tall
    pub fn centered(play_size: Vec2, brush_radius: f32) -> Self {
        let size = Vec2::new(play_size.x * 0.8, play_size.y * 0.5);
        Self::new((play_size - size) / 2.0, size, brush_radius)
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.cols as f32, self.rows as f32) * CELL_SIZE
    }

    /// Clear every cell under a brush centered at `p`
    pub fn scratch(&mut self, p: Vec2) {
        if !p.is_finite() {
            return;
        }
        let local = p - self.origin;
        let r = self.brush_radius;
        // Candidate cell range around the brush, clipped to the card
        let col_lo = ((local.x - r) / CELL_SIZE).floor().max(0.0) as usize;
        let row_lo = ((local.y - r) / CELL_SIZE).floor().max(0.0) as usize;
        let col_hi = ((local.x + r) / CELL_SIZE).ceil().min(self.cols as f32);
        let row_hi = ((local.y + r) / CELL_SIZE).ceil().min(self.rows as f32);
        if col_hi <= 0.0 || row_hi <= 0.0 {
            return;
        }
        let (col_hi, row_hi) = (col_hi as usize, row_hi as usize);

        for row in row_lo..row_hi {
            for col in col_lo..col_hi {
                let center = Vec2::new(col as f32 + 0.5, row as f32 + 0.5) * CELL_SIZE;
                if center.distance_squared(local) <= r * r {
                    let idx = row * self.cols + col;
                    if !self.cleared[idx] {
                        self.cleared[idx] = true;
                        self.cleared_count += 1;
                    }
                }
            }
        }
    }

    /// Fraction of the card scratched away, in [0, 1]
    pub fn revealed_fraction(&self) -> f32 {
        self.cleared_count as f32 / self.cleared.len() as f32
    }

    /// Whether the cell at (col, row) is scratched away
    pub fn is_cleared(&self, col: usize, row: usize) -> bool {
        col < self.cols && row < self.rows && self.cleared[row * self.cols + col]
    }

    pub fn grid_size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }
}
