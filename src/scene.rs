use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::paint::{Bounds, Painter};
use crate::particles::{init_particles, step_and_draw, Particle, ParticleKind};

/// Everything the redraw loop needs between frames.
///
/// Navigation and resize only flag the scene; the next [`Scene::frame`] does
/// the actual reseed, so both can fire any number of times per frame.
pub struct Scene {
    kind: ParticleKind,
    bounds: Bounds,
    particles: Vec<Particle>,
    rng: SmallRng,
    needs_seed: bool,
}

impl Scene {
    pub fn new(kind: ParticleKind, bounds: Bounds, seed: u64) -> Self {
        Self {
            kind,
            bounds,
            particles: Vec::new(),
            rng: SmallRng::seed_from_u64(seed),
            needs_seed: true,
        }
    }

    pub fn kind(&self) -> ParticleKind {
        self.kind
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Switch motif. Always reseeds, even when `kind` is already active.
    pub fn set_kind(&mut self, kind: ParticleKind) {
        self.kind = kind;
        self.needs_seed = true;
    }

    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.needs_seed = true;
    }

    /// Discard every particle and spawn a fresh set for the current kind/bounds.
    pub fn reseed(&mut self) {
        self.particles = init_particles(self.kind, self.kind.count(), self.bounds, &mut self.rng);
        self.needs_seed = false;
    }

    /// Clear the surface and render one tick.
    pub fn frame<P: Painter + ?Sized>(&mut self, painter: &mut P) {
        if self.needs_seed {
            self.reseed();
        }
        painter.clear(self.bounds);
        step_and_draw(
            &mut self.particles,
            self.kind,
            self.bounds,
            &mut self.rng,
            painter,
        );
    }
}
