use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::paint::{Bounds, Painter, Rgba};

/// [`Painter`] backed by a 2D canvas context.
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, bounds: Bounds) {
        self.ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        // Only fails for a negative radius, which no particle produces.
        self.ctx.arc(x, y, radius, 0.0, PI * 2.0).ok();
        self.ctx.fill();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(x, y, width, height);
    }

    fn fill_glyph(&mut self, glyph: char, x: f64, y: f64, font: &str, color: Rgba) {
        let mut buf = [0u8; 4];
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.set_font(font);
        self.ctx.fill_text(glyph.encode_utf8(&mut buf), x, y).ok();
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width);
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.stroke();
    }
}
