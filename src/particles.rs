//! Per-tab particle motifs.
//!
//! Each [`ParticleKind`] owns a spawn rule, a kinematic update and a draw call.
//! Particles keep no state between seeds: a tab switch or resize throws the
//! whole collection away and spawns a fresh one.

use rand::Rng;

use crate::config::tuning;
use crate::paint::{Bounds, Painter, Rgba};
use crate::page::PageId;

const NETWORK_BLUE: Rgba = Rgba::rgb(59, 130, 246);
const SQUARE_VIOLET: Rgba = Rgba::rgb(139, 92, 246);
const RAIN_CYAN: Rgba = Rgba::rgb(6, 182, 212);
const STAR_WHITE: Rgba = Rgba::rgb(255, 255, 255);
const TRAIL_WHITE: Rgba = STAR_WHITE.with_alpha(0.1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    /// Drifting nodes joined by distance-faded lines.
    Network,
    /// Translucent squares floating upwards.
    RisingSquares,
    /// Falling binary glyphs.
    Rain,
    /// Stars streaking left to right.
    Starfield,
}

impl ParticleKind {
    pub fn for_page(page: PageId) -> Self {
        match page {
            PageId::Home => ParticleKind::Network,
            PageId::Education => ParticleKind::RisingSquares,
            PageId::Skills => ParticleKind::Rain,
            PageId::Experience => ParticleKind::Starfield,
        }
    }

    /// How many particles a fresh seed of this kind holds.
    pub fn count(self) -> usize {
        match self {
            ParticleKind::Network => tuning::NETWORK_COUNT,
            ParticleKind::RisingSquares => tuning::SQUARES_COUNT,
            ParticleKind::Rain => tuning::RAIN_COUNT,
            ParticleKind::Starfield => tuning::STARFIELD_COUNT,
        }
    }

    pub fn spawn<R: Rng + ?Sized>(self, bounds: Bounds, rng: &mut R) -> Particle {
        let Bounds { width, height } = bounds;
        match self {
            ParticleKind::Network => Particle::Node {
                x: unit(rng) * width,
                y: unit(rng) * height,
                size: unit(rng) * 2.0 + 1.0,
                vx: unit(rng) - 0.5,
                vy: unit(rng) - 0.5,
            },
            ParticleKind::RisingSquares => Particle::Square {
                x: unit(rng) * width,
                y: height + unit(rng) * tuning::SQUARES_SPAWN_DEPTH,
                size: unit(rng) * 15.0 + 5.0,
                vy: unit(rng) + 0.5,
                opacity: unit(rng) * 0.5 + 0.1,
            },
            ParticleKind::Rain => Particle::Glyph {
                x: (unit(rng) * (width / tuning::RAIN_COLUMN)).floor() * tuning::RAIN_COLUMN,
                y: unit(rng) * -height,
                vy: unit(rng) * 5.0 + 2.0,
                value: coin_glyph(rng),
                change_interval: (unit(rng) * 20.0 + 5.0).floor() as u32,
                frame_counter: 0,
            },
            ParticleKind::Starfield => Particle::Star {
                x: unit(rng) * width,
                y: unit(rng) * height,
                size: unit(rng) * 2.0,
                vx: unit(rng) * 3.0 + 1.0,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Particle {
    Node {
        x: f64,
        y: f64,
        size: f64,
        vx: f64,
        vy: f64,
    },
    Square {
        x: f64,
        y: f64,
        size: f64,
        vy: f64,
        opacity: f64,
    },
    Glyph {
        x: f64,
        y: f64,
        vy: f64,
        value: char,
        change_interval: u32,
        frame_counter: u32,
    },
    Star {
        x: f64,
        y: f64,
        size: f64,
        vx: f64,
    },
}

impl Particle {
    pub fn kind(&self) -> ParticleKind {
        match self {
            Particle::Node { .. } => ParticleKind::Network,
            Particle::Square { .. } => ParticleKind::RisingSquares,
            Particle::Glyph { .. } => ParticleKind::Rain,
            Particle::Star { .. } => ParticleKind::Starfield,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        match *self {
            Particle::Node { x, y, .. }
            | Particle::Square { x, y, .. }
            | Particle::Glyph { x, y, .. }
            | Particle::Star { x, y, .. } => (x, y),
        }
    }

    /// Advance one frame. Randomness is only drawn when a particle recycles.
    pub fn update<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
        let Bounds { width, height } = bounds;
        match self {
            Particle::Node { x, y, vx, vy, .. } => {
                *x += *vx;
                *y += *vy;
                if *x > width || *x < 0.0 {
                    *vx = -*vx;
                }
                if *y > height || *y < 0.0 {
                    *vy = -*vy;
                }
            }
            Particle::Square { x, y, size, vy, .. } => {
                *y -= *vy;
                if *y < -*size {
                    *y = height + *size;
                    *x = unit(rng) * width;
                }
            }
            Particle::Glyph {
                y,
                vy,
                value,
                change_interval,
                frame_counter,
                ..
            } => {
                *y += *vy;
                *frame_counter += 1;
                if *frame_counter >= *change_interval {
                    *value = coin_glyph(rng);
                    *frame_counter = 0;
                }
                if *y > height {
                    *y = unit(rng) * -tuning::RAIN_RESPAWN_HEIGHT;
                }
            }
            Particle::Star { x, y, vx, .. } => {
                *x += *vx;
                if *x > width {
                    *x = 0.0;
                    *y = unit(rng) * height;
                }
            }
        }
    }

    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P) {
        match *self {
            Particle::Node { x, y, size, .. } => painter.fill_circle(x, y, size, NETWORK_BLUE),
            Particle::Square {
                x, y, size, opacity, ..
            } => painter.fill_rect(x, y, size, size, SQUARE_VIOLET.with_alpha(opacity)),
            Particle::Glyph { x, y, value, .. } => {
                painter.fill_glyph(value, x, y, tuning::RAIN_FONT, RAIN_CYAN)
            }
            Particle::Star { x, y, size, .. } => {
                painter.fill_circle(x, y, size, STAR_WHITE);
                painter.fill_rect(
                    x - tuning::STAR_TRAIL,
                    y - size,
                    tuning::STAR_TRAIL,
                    size * 2.0,
                    TRAIL_WHITE,
                );
            }
        }
    }
}

/// Fresh particles of `kind`, scattered within `bounds`.
pub fn init_particles<R: Rng + ?Sized>(
    kind: ParticleKind,
    count: usize,
    bounds: Bounds,
    rng: &mut R,
) -> Vec<Particle> {
    (0..count).map(|_| kind.spawn(bounds, rng)).collect()
}

/// Advance and render one frame of `particles`.
///
/// Every particle is updated before anything is drawn, so the network link
/// pass compares positions from the same frame.
pub fn step_and_draw<R, P>(
    particles: &mut [Particle],
    kind: ParticleKind,
    bounds: Bounds,
    rng: &mut R,
    painter: &mut P,
) where
    R: Rng + ?Sized,
    P: Painter + ?Sized,
{
    for particle in particles.iter_mut() {
        particle.update(bounds, rng);
    }
    for particle in particles.iter() {
        particle.draw(painter);
    }
    if kind == ParticleKind::Network {
        draw_links(particles, painter);
    }
}

/// Opacity of the line joining two nodes `distance` apart, if they are linked.
pub fn link_alpha(distance: f64) -> Option<f64> {
    (distance < tuning::LINK_DISTANCE).then(|| 1.0 - distance / tuning::LINK_DISTANCE)
}

fn draw_links<P: Painter + ?Sized>(particles: &[Particle], painter: &mut P) {
    // O(n^2) over unordered pairs; a node is never compared with itself.
    for (i, a) in particles.iter().enumerate() {
        let (ax, ay) = a.position();
        for b in &particles[i + 1..] {
            let (bx, by) = b.position();
            let distance = (ax - bx).hypot(ay - by);
            if let Some(alpha) = link_alpha(distance) {
                painter.stroke_line(
                    (ax, ay),
                    (bx, by),
                    tuning::LINK_WIDTH,
                    NETWORK_BLUE.with_alpha(alpha),
                );
            }
        }
    }
}

#[inline]
fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

fn coin_glyph<R: Rng + ?Sized>(rng: &mut R) -> char {
    if rng.random_bool(0.5) {
        '1'
    } else {
        '0'
    }
}
