//! The drawing surface the simulation paints onto.
//!
//! In the browser this is a `CanvasRenderingContext2d`; on the host it is
//! whatever a test wants to record.

use std::fmt;

/// Canvas size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS colour string accepted by canvas `fillStyle`/`strokeStyle`.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Immediate-mode 2D primitives; one call per shape.
pub trait Painter {
    fn clear(&mut self, bounds: Bounds);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba);
    fn fill_glyph(&mut self, glyph: char, x: f64, y: f64, font: &str, color: Rgba);
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Rgba);
}
