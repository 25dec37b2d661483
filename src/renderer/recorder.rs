//! Renderer that logs every call instead of drawing

use embedded_graphics::pixelcolor::Rgb565;

use super::Renderer;

/// One recorded renderer call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Pixel {
        x: i32,
        y: i32,
        color: Rgb565,
    },
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Rgb565,
    },
    FillRoundRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        radius: i32,
        color: Rgb565,
    },
    Cursor {
        x: i32,
        y: i32,
    },
    TextColor(Rgb565),
    Text(String),
    FillScreen(Rgb565),
}

/// Collects `DrawCall`s in issue order
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Only the pixel calls
    pub fn pixels(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Pixel { .. }))
    }
}

impl Renderer for Recorder {
    fn draw_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        self.calls.push(DrawCall::Pixel { x, y, color });
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb565) {
        self.calls.push(DrawCall::Rect {
            x,
            y,
            width,
            height,
            color,
        });
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
        self.calls.push(DrawCall::FillRoundRect {
            x,
            y,
            width,
            height,
            radius,
            color,
        });
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.calls.push(DrawCall::Cursor { x, y });
    }

    fn set_text_color(&mut self, color: Rgb565) {
        self.calls.push(DrawCall::TextColor(color));
    }

    fn draw_text(&mut self, text: &str) {
        self.calls.push(DrawCall::Text(text.to_string()));
    }

    fn fill_screen(&mut self, color: Rgb565) {
        self.calls.push(DrawCall::FillScreen(color));
    }
}
