//! In-memory RGB565 surface for hosted runs

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Square RGB565 pixel buffer, row-major
#[derive(Debug, Clone)]
pub struct Framebuffer {
    size: u32,
    pixels: Vec<Rgb565>,
}

impl Framebuffer {
    /// Create a `size` x `size` buffer cleared to black
    pub fn new(size: u32) -> Self {
        Self {
            size,
            pixels: vec![Rgb565::BLACK; (size * size) as usize],
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let s = self.size as i32;
        if x < 0 || y < 0 || x >= s || y >= s {
            return None;
        }
        Some((y * s + x) as usize)
    }

    /// Colour at `(x, y)`, `None` outside the surface
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Number of pixels currently set to `color`
    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Render as text, one char per pixel: `.` background, `#` anything else
    pub fn to_ascii(&self, background: Rgb565) -> String {
        let mut out = String::with_capacity(self.pixels.len() + self.size as usize);
        for row in self.pixels.chunks(self.size as usize) {
            for &p in row {
                out.push(if p == background { '.' } else { '#' });
            }
            out.push('\n');
        }
        out
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.size, self.size)
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Clip silently, like the panel does
            if let Some(i) = self.index(point.x, point.y) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}
