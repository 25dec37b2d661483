//! Hit-box scoring
//!
//! The player scores by steering the ball strictly inside the target box.
//! Each hit erases the box, bumps the score, redraws the score text and
//! moves the box to a random spot.

use embedded_graphics::pixelcolor::Rgb565;
use glam::{IVec2, Vec2};
use rand::Rng;

use super::ball::Ball;
use crate::Surface;
use crate::consts::*;
use crate::palette;
use crate::renderer::Renderer;

/// Target box and score
#[derive(Debug, Clone)]
pub struct HitBoxGame {
    pub box_pos: IVec2,
    pub box_size: IVec2,
    pub score: u32,
    surface: Surface,
}

impl HitBoxGame {
    /// Box of `HIT_BOX_GOAL_SIZE` at the surface centre, score 0
    pub fn new(surface: Surface) -> Self {
        Self::with_box(surface, surface.center(), IVec2::splat(HIT_BOX_GOAL_SIZE))
    }

    /// Custom starting box. The size is clamped so the box fits on the
    /// surface and the position so the whole box starts on it.
    pub fn with_box(surface: Surface, box_pos: IVec2, box_size: IVec2) -> Self {
        let box_size = box_size.clamp(IVec2::ONE, IVec2::splat(surface.size() - 1));
        let far = IVec2::splat(surface.size() - 1) - box_size;
        Self {
            box_pos: box_pos.clamp(IVec2::ZERO, far),
            box_size,
            score: 0,
            surface,
        }
    }

    /// Strict containment: a point on the box border does not count
    pub fn contains(&self, p: Vec2) -> bool {
        let min = self.box_pos.as_vec2();
        let max = (self.box_pos + self.box_size).as_vec2();
        p.x > min.x && p.y > min.y && p.x < max.x && p.y < max.y
    }

    /// Inclusive range for the box's top-left corner on one axis.
    ///
    /// Keeps `BOX_MARGIN` clear on both sides when the box is small enough,
    /// otherwise anywhere the far edge still lands on the surface.
    fn placement_range(&self, extent: i32) -> (i32, i32) {
        let size = self.surface.size();
        let high = size - BOX_MARGIN - extent;
        if high >= BOX_MARGIN {
            (BOX_MARGIN, high)
        } else {
            (0, size - 1 - extent)
        }
    }

    /// Pick a new top-left corner, uniform and independent per axis
    pub fn sample_position<G: Rng>(&self, rng: &mut G) -> IVec2 {
        let (x_lo, x_hi) = self.placement_range(self.box_size.x);
        let (y_lo, y_hi) = self.placement_range(self.box_size.y);
        IVec2::new(rng.random_range(x_lo..=x_hi), rng.random_range(y_lo..=y_hi))
    }

    /// Outline the box in its colour
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        self.draw_box(renderer, palette::HIT_BOX);
    }

    fn draw_box<R: Renderer + ?Sized>(&self, renderer: &mut R, color: Rgb565) {
        let (pos, size) = (self.box_pos, self.box_size);
        renderer.draw_rect(pos.x, pos.y, size.x, size.y, color);
    }

    /// Label plus value; the value field is cleared first so a wider number
    /// never leaves stale glyphs behind
    pub fn draw_score<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let (lx, ly) = SCORE_LABEL_POS;
        let (fx, fy) = SCORE_FIELD_POS;
        let (fw, fh) = SCORE_FIELD_SIZE;

        renderer.set_text_color(palette::SCORE);
        renderer.set_cursor(lx, ly);
        renderer.draw_text("Score: ");

        renderer.fill_round_rect(fx, fy, fw, fh, 0, palette::BACKGROUND);
        renderer.set_cursor(fx, fy);
        renderer.draw_text(&self.score.to_string());
    }

    /// Score and relocate if the ball is inside the box.
    ///
    /// Tests against the box as it stands at the start of the call and never
    /// re-tests after relocating, so one call scores at most once. Returns
    /// whether a point was scored.
    pub fn update<R, G>(&mut self, ball: &Ball, renderer: &mut R, rng: &mut G) -> bool
    where
        R: Renderer + ?Sized,
        G: Rng,
    {
        if !self.contains(ball.pos) {
            return false;
        }

        self.draw_box(renderer, palette::BACKGROUND);
        // The ball's pixel can sit on the outline just erased
        ball.draw(renderer);

        self.score += 1;
        log::info!("Hit! Score: {}", self.score);
        self.draw_score(renderer);

        let old = self.box_pos;
        self.box_pos = self.sample_position(rng);
        log::debug!("box moved {:?} -> {:?}", old, self.box_pos);

        self.draw(renderer);
        true
    }
}
