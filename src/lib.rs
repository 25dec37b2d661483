//! Tilt Hit-Box - steer a pixel ball into a target box by tilting the board
//!
//! Core modules:
//! - `sim`: Ball physics, containment scoring and the fixed-delay game loop
//! - `input`: Tilt sources (sensor adapters, scripted and demo input)
//! - `renderer`: Drawing primitives over `embedded-graphics` targets
//! - `settings`: JSON configuration for hosted runs

pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use input::{Tilt, TiltSource};
pub use renderer::Renderer;
pub use settings::{Settings, SettingsError};
pub use sim::{Ball, GameLoop, GameSummary, HitBoxGame, StopSignal};

use glam::{IVec2, Vec2};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Side length of the square display (SSD1351 OLED)
    pub const SURFACE_SIZE: i32 = 128;
    /// Smallest surface the relocation range still fits on
    pub const MIN_SURFACE_SIZE: i32 = 32;

    /// Tilt-to-pixels factor applied every tick
    pub const BALL_SPEED: f32 = 0.05;

    /// Target box edge length
    pub const HIT_BOX_GOAL_SIZE: i32 = 4;
    /// Inset kept on every side between a relocated box and the surface
    /// edge. The OLED firmware sampled `8 + rand() % 96` (21 px on the far
    /// side); the inset here is symmetric.
    pub const BOX_MARGIN: i32 = 8;

    /// Fixed delay between ticks
    pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

    /// Score HUD layout (label, value field)
    pub const SCORE_LABEL_POS: (i32, i32) = (4, 4);
    pub const SCORE_FIELD_POS: (i32, i32) = (40, 4);
    pub const SCORE_FIELD_SIZE: (i32, i32) = (40, 10);
}

/// Palette used by the game
pub mod palette {
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::RgbColor;

    pub const BACKGROUND: Rgb565 = Rgb565::BLACK;
    pub const BALL: Rgb565 = Rgb565::WHITE;
    pub const HIT_BOX: Rgb565 = Rgb565::GREEN;
    pub const SCORE: Rgb565 = Rgb565::BLUE;
}

/// The square drawing surface every clamp and sampling range derives from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    size: i32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            size: consts::SURFACE_SIZE,
        }
    }
}

impl Surface {
    /// Sizes below `MIN_SURFACE_SIZE` are raised to it so the playable
    /// range and the box placement range are never empty
    pub const fn new(size: i32) -> Self {
        let size = if size < consts::MIN_SURFACE_SIZE {
            consts::MIN_SURFACE_SIZE
        } else {
            size
        };
        Self { size }
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Centre pixel
    pub fn center(&self) -> IVec2 {
        IVec2::splat(self.size / 2)
    }

    /// Lower bound of the ball's playable range (one pixel inset)
    #[inline]
    pub fn playable_min(&self) -> Vec2 {
        Vec2::ONE
    }

    /// Upper bound of the ball's playable range
    #[inline]
    pub fn playable_max(&self) -> Vec2 {
        Vec2::splat((self.size - 1) as f32)
    }

    /// Whether a pixel coordinate is addressable
    pub fn contains(&self, p: IVec2) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.size && p.y < self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_bounds() {
        let s = Surface::default();
        assert_eq!(s.center(), IVec2::splat(64));
        assert_eq!(s.playable_min(), Vec2::ONE);
        assert_eq!(s.playable_max(), Vec2::splat(127.0));
        assert!(s.contains(IVec2::new(0, 127)));
        assert!(!s.contains(IVec2::new(128, 0)));
        assert!(!s.contains(IVec2::new(0, -1)));
    }

    #[test]
    fn test_tiny_surface_is_raised_to_minimum() {
        for size in [i32::MIN, -5, 0, 1, 2, consts::MIN_SURFACE_SIZE - 1] {
            let s = Surface::new(size);
            assert_eq!(s.size(), consts::MIN_SURFACE_SIZE);
            assert!(s.playable_min().cmple(s.playable_max()).all());
        }
        assert_eq!(Surface::new(200).size(), 200);
    }
}
