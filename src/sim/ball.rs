//! The tilt-driven ball
//!
//! Position is continuous so small tilts accumulate across ticks; the drawn
//! pixel is the rounded position and is only repainted when it changes.

use embedded_graphics::pixelcolor::Rgb565;
use glam::{IVec2, Vec2};

use crate::Surface;
use crate::consts::BALL_SPEED;
use crate::input::Tilt;
use crate::palette;
use crate::renderer::Renderer;

/// A single-pixel ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixel lit on screen right now
    last_drawn: IVec2,
    pub color: Rgb565,
    pub background: Rgb565,
    surface: Surface,
}

impl Ball {
    /// Ball at the surface centre in the default palette
    pub fn new(surface: Surface) -> Self {
        Self::at(surface, surface.center().as_vec2())
    }

    /// Ball at an arbitrary position (clamped into the playable bounds)
    pub fn at(surface: Surface, pos: Vec2) -> Self {
        let pos = pos.clamp(surface.playable_min(), surface.playable_max());
        Self {
            pos,
            last_drawn: round(pos),
            color: palette::BALL,
            background: palette::BACKGROUND,
            surface,
        }
    }

    pub fn with_colors(mut self, color: Rgb565, background: Rgb565) -> Self {
        self.color = color;
        self.background = background;
        self
    }

    /// Pixel the ball currently occupies on screen
    pub fn last_drawn(&self) -> IVec2 {
        self.last_drawn
    }

    /// Paint the ball where it currently is
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.draw_pixel(self.last_drawn.x, self.last_drawn.y, self.color);
    }

    /// Integrate one tick of tilt and repaint if the pixel moved
    pub fn update<R: Renderer + ?Sized>(&mut self, tilt: Tilt, renderer: &mut R) {
        let delta = Vec2::new(tilt.x as f32, tilt.y as f32) * BALL_SPEED;
        self.pos = (self.pos + delta)
            .clamp(self.surface.playable_min(), self.surface.playable_max());

        let pixel = round(self.pos);
        if pixel == self.last_drawn {
            return;
        }

        // Erase before draw: no back buffer
        renderer.draw_pixel(self.last_drawn.x, self.last_drawn.y, self.background);
        renderer.draw_pixel(pixel.x, pixel.y, self.color);
        log::trace!("ball {:?} -> {:?}", self.last_drawn, pixel);
        self.last_drawn = pixel;
    }
}

/// Round half away from zero
#[inline]
fn round(pos: Vec2) -> IVec2 {
    pos.round().as_ivec2()
}
