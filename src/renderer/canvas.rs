//! Draws the session onto a `CanvasRenderingContext2d`

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::palette::{category_color, flame_color, rgba, trail_segment_style};
use crate::Settings;
use crate::sim::{GameMode, GameState, dialogue};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    /// Canvas pixels per play-area unit
    scale: f64,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx, scale: 1.0 }
    }

    /// Track the canvas backing size so the play area fills it
    pub fn resize(&mut self, canvas_width: f64, play_width: f32) {
        self.scale = canvas_width / play_width.max(1.0) as f64;
    }

    pub fn render(&self, state: &GameState, settings: &Settings, time_ms: f64) {
        let ctx = &self.ctx;
        let w = state.tuning.play_width as f64;
        let h = state.tuning.play_height as f64;

        ctx.save();
        let _ = ctx.set_transform(self.scale, 0.0, 0.0, self.scale, 0.0, 0.0);
        ctx.set_fill_style_str("#101820");
        ctx.fill_rect(0.0, 0.0, w, h);

        match state.mode {
            GameMode::Intro => self.draw_dialogue(state, w, h),
            GameMode::Playing => {
                self.draw_objects(state);
                if settings.particles {
                    self.draw_particles(state);
                }
                if settings.trails {
                    self.draw_trail(state);
                }
                if settings.hand_hint && state.show_hand_hint() {
                    self.draw_hand_hint(w, h, time_ms);
                }
                self.draw_hud(state);
            }
            GameMode::Bonus => self.draw_scratch_card(state),
            GameMode::GameOver => {
                self.draw_objects(state);
                self.draw_hud(state);
                self.draw_banner("Caught!", "Tap to try again", w, h);
            }
        }

        ctx.restore();
    }

    fn draw_objects(&self, state: &GameState) {
        let ctx = &self.ctx;
        for obj in &state.objects {
            ctx.save();
            let _ = ctx.translate(obj.pos.x as f64, obj.pos.y as f64);
            let _ = ctx.rotate(obj.rotation as f64);
            ctx.begin_path();
            let r = obj.radius() as f64;
            if obj.category().is_hazard() {
                let _ = ctx.arc(0.0, 0.0, r, 0.0, TAU);
            } else {
                ctx.move_to(0.0, -r);
                ctx.line_to(r, r);
                ctx.line_to(-r, r);
                ctx.close_path();
            }
            ctx.set_fill_style_str(category_color(obj.category()));
            ctx.fill();
            ctx.restore();
        }
    }

    fn draw_particles(&self, state: &GameState) {
        let ctx = &self.ctx;
        for p in &state.particles {
            ctx.begin_path();
            let _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.size.max(0.0) as f64, 0.0, TAU);
            ctx.set_fill_style_str(&rgba(flame_color(p.life), p.life));
            ctx.fill();
        }
    }

    fn draw_trail(&self, state: &GameState) {
        let ctx = &self.ctx;
        let segments = state.trail.len().saturating_sub(1);
        for (i, pair) in state.trail.windows(2).enumerate() {
            let (alpha, width) = trail_segment_style(i, segments, 8.0);
            ctx.begin_path();
            ctx.move_to(pair[0].x as f64, pair[0].y as f64);
            ctx.line_to(pair[1].x as f64, pair[1].y as f64);
            ctx.set_line_width(width as f64);
            ctx.set_stroke_style_str(&rgba((255, 255, 255), alpha));
            ctx.stroke();
        }
    }

    fn draw_hand_hint(&self, w: f64, h: f64, time_ms: f64) {
        let ctx = &self.ctx;
        // Sweep left to right every two seconds
        let phase = (time_ms % 2000.0) / 2000.0;
        let x = w * (0.3 + 0.4 * phase);
        let y = h * 0.6;
        ctx.begin_path();
        let _ = ctx.arc(x, y, 14.0, 0.0, TAU);
        ctx.set_fill_style_str(&rgba((255, 255, 255), (1.0 - phase as f32) * 0.8));
        ctx.fill();
    }

    fn draw_hud(&self, state: &GameState) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str("#ffffff");
        ctx.set_font("24px sans-serif");
        ctx.set_text_align("left");
        let _ = ctx.fill_text(&format!("Loot: {}", state.score), 16.0, 34.0);
        let _ = ctx.fill_text(&"♥".repeat(state.lives as usize), 16.0, 64.0);
    }

    fn draw_dialogue(&self, state: &GameState, w: f64, h: f64) {
        let Some(page) = dialogue::page(state.dialogue_page) else {
            return;
        };
        let ctx = &self.ctx;
        ctx.set_fill_style_str("rgba(0, 0, 0, 0.7)");
        ctx.fill_rect(w * 0.05, h * 0.62, w * 0.9, h * 0.3);
        ctx.set_fill_style_str("#ffbe0b");
        ctx.set_font("bold 22px sans-serif");
        ctx.set_text_align("left");
        let _ = ctx.fill_text(page.speaker, w * 0.08, h * 0.69);
        ctx.set_fill_style_str("#ffffff");
        ctx.set_font("18px sans-serif");
        let _ = ctx.fill_text_with_max_width(page.text, w * 0.08, h * 0.76, w * 0.84);
    }

    fn draw_scratch_card(&self, state: &GameState) {
        let ctx = &self.ctx;
        let w = state.tuning.play_width as f64;
        let h = state.tuning.play_height as f64;
        self.draw_banner("The Vault", "Scratch to reveal your prize", w, h * 0.3);

        let Some(card) = &state.scratch else {
            return;
        };
        self.draw_card_cells(card);
        ctx.set_fill_style_str("#ffffff");
        ctx.set_font("18px sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text(
            &format!("{:.0}%", card.revealed_fraction() * 100.0),
            w / 2.0,
            h * 0.9,
        );
    }

    fn draw_card_cells(&self, card: &crate::sim::ScratchCard) {
        use crate::sim::scratch::CELL_SIZE;

        let ctx = &self.ctx;
        let origin = card.origin();
        let size = card.size();
        ctx.set_fill_style_str("#ffd166");
        ctx.fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);

        ctx.set_fill_style_str("#8d99ae");
        let (cols, rows) = card.grid_size();
        let cell = CELL_SIZE as f64;
        for row in 0..rows {
            for col in 0..cols {
                if !card.is_cleared(col, row) {
                    ctx.fill_rect(
                        origin.x as f64 + col as f64 * cell,
                        origin.y as f64 + row as f64 * cell,
                        cell,
                        cell,
                    );
                }
            }
        }
    }

    fn draw_banner(&self, title: &str, subtitle: &str, w: f64, h: f64) {
        let ctx = &self.ctx;
        ctx.set_text_align("center");
        ctx.set_fill_style_str("#ffffff");
        ctx.set_font("bold 48px sans-serif");
        let _ = ctx.fill_text(title, w / 2.0, h / 2.0);
        ctx.set_font("20px sans-serif");
        let _ = ctx.fill_text(subtitle, w / 2.0, h / 2.0 + 36.0);
    }
}
