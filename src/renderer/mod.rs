//! Drawing primitives the game renders through
//!
//! There is no double buffering: every erase and draw is a discrete call and
//! is visible immediately, so callers must issue them in state order.

pub mod framebuffer;
pub mod graphics;
pub mod recorder;

pub use framebuffer::Framebuffer;
pub use graphics::GraphicsRenderer;
pub use recorder::{DrawCall, Recorder};

use embedded_graphics::pixelcolor::Rgb565;

/// A square pixel surface the game can draw on
///
/// All operations are infallible from the game's point of view; an
/// implementation backed by real hardware absorbs its own I/O errors.
pub trait Renderer {
    /// Set one pixel
    fn draw_pixel(&mut self, x: i32, y: i32, color: Rgb565);

    /// Draw an unfilled one pixel wide rectangle outline
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb565);

    /// Fill a rectangle with rounded corners (`radius` may be 0)
    fn fill_round_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        radius: i32,
        color: Rgb565,
    );

    /// Move the text cursor (top-left of the next glyph)
    fn set_cursor(&mut self, x: i32, y: i32);

    fn set_text_color(&mut self, color: Rgb565);

    /// Emit monospace text at the cursor and advance it
    fn draw_text(&mut self, text: &str);

    fn fill_screen(&mut self, color: Rgb565);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn draw_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        (**self).draw_pixel(x, y, color);
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb565) {
        (**self).draw_rect(x, y, width, height, color);
    }

    fn fill_round_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        radius: i32,
        color: Rgb565,
    ) {
        (**self).fill_round_rect(x, y, width, height, radius, color);
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        (**self).set_cursor(x, y);
    }

    fn set_text_color(&mut self, color: Rgb565) {
        (**self).set_text_color(color);
    }

    fn draw_text(&mut self, text: &str) {
        (**self).draw_text(text);
    }

    fn fill_screen(&mut self, color: Rgb565) {
        (**self).fill_screen(color);
    }
}
