//! Compile-time knobs: DOM hooks the page markup must provide, and the
//! particle tuning shared by every kind.

/// Names the wasm glue looks up in the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Id of the full-screen background canvas.
    pub canvas_id: &'static str,
    /// Class carried by every page section; each section's id is a `PageId`.
    pub section_class: &'static str,
    /// Class toggled on the visible section and the highlighted control.
    pub active_class: &'static str,
    /// Attribute naming the page a control navigates to.
    pub control_attr: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            canvas_id: "background-canvas",
            section_class: "page",
            active_class: "active",
            control_attr: "data-page",
        }
    }
}

impl SiteConfig {
    pub fn section_selector(&self) -> String {
        format!(".{}", self.section_class)
    }

    pub fn control_selector(&self) -> String {
        format!("[{}]", self.control_attr)
    }
}

pub mod tuning {
    //! Particle constants, in CSS pixels and frames.

    pub const NETWORK_COUNT: usize = 80;
    pub const SQUARES_COUNT: usize = 50;
    pub const RAIN_COUNT: usize = 100;
    pub const STARFIELD_COUNT: usize = 100;

    /// Network pairs closer than this (strictly) get a connecting line.
    pub const LINK_DISTANCE: f64 = 100.0;
    pub const LINK_WIDTH: f64 = 0.5;

    /// Squares spawn up to this far below the bottom edge.
    pub const SQUARES_SPAWN_DEPTH: f64 = 100.0;

    /// Rain glyphs snap to columns this wide.
    pub const RAIN_COLUMN: f64 = 20.0;
    /// Recycled rain glyphs restart up to this far above the top edge.
    pub const RAIN_RESPAWN_HEIGHT: f64 = 100.0;
    pub const RAIN_FONT: &str = "14px monospace";

    pub const STAR_TRAIL: f64 = 20.0;
}
