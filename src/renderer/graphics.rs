//! `Renderer` over any `embedded-graphics` draw target
//!
//! This is how the game reaches a real panel (ST7789, SSD1351, ...) or the
//! in-memory `Framebuffer`. Target errors are logged and dropped so a flaky
//! bus never stalls the game loop.

use core::fmt::Debug;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Baseline, Text};

use super::Renderer;

/// Adapts a `DrawTarget<Color = Rgb565>` to the game's `Renderer`
pub struct GraphicsRenderer<D> {
    target: D,
    cursor: Point,
    text_color: Rgb565,
}

impl<D> GraphicsRenderer<D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: Debug,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            cursor: Point::zero(),
            text_color: Rgb565::WHITE,
        }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn into_target(self) -> D {
        self.target
    }

    /// Current text cursor
    pub fn cursor(&self) -> Point {
        self.cursor
    }
}

fn rect(x: i32, y: i32, width: i32, height: i32) -> Rectangle {
    Rectangle::new(
        Point::new(x, y),
        Size::new(width.max(0) as u32, height.max(0) as u32),
    )
}

fn report<T, E: Debug>(result: Result<T, E>, op: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{} failed: {:?}", op, e);
            None
        }
    }
}

impl<D> Renderer for GraphicsRenderer<D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: Debug,
{
    fn draw_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        report(
            Pixel(Point::new(x, y), color).draw(&mut self.target),
            "draw_pixel",
        );
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb565) {
        let result = rect(x, y, width, height)
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.target);
        report(result, "draw_rect");
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
        let r = radius.max(0) as u32;
        let corners = Size::new(r, r);
        let result = RoundedRectangle::with_equal_corners(rect(x, y, width, height), corners)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target);
        report(result, "fill_round_rect");
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
    }

    fn set_text_color(&mut self, color: Rgb565) {
        self.text_color = color;
    }

    fn draw_text(&mut self, text: &str) {
        let style = MonoTextStyle::new(&FONT_6X10, self.text_color);
        let result =
            Text::with_baseline(text, self.cursor, style, Baseline::Top).draw(&mut self.target);
        if let Some(next) = report(result, "draw_text") {
            self.cursor = next;
        }
    }

    fn fill_screen(&mut self, color: Rgb565) {
        report(self.target.clear(color), "fill_screen");
    }
}
