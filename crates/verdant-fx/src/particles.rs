#![forbid(unsafe_code)]

//! The drifting particle field behind the hero section.
//!
//! A fixed pool of point masses with simple kinematics: each tick every
//! particle moves by its velocity and reflects elastically off the bounds.
//! Rendering draws each particle as a filled circle and connects every pair
//! closer than `link_threshold` with a line whose opacity falls off
//! linearly with distance.
//!
//! The connection pass is O(n²) in particle count. That is deliberate: the
//! pool is tens of particles, and a spatial index would cost more than it
//! saves at this size. Revisit only if counts grow by an order of
//! magnitude.
//!
//! `tick` and `render` are meant to run once per display-refresh callback;
//! `tick` advances state and must not be called twice for one frame.

use tracing::debug;
use verdant_core::geometry::{Bounds, Vec2};
use verdant_core::rng::XorShift32;

use crate::surface::{Rgba, Surface};

/// A single point mass. Owned exclusively by the field; never individually
/// destroyed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in surface pixel space.
    pub position: Vec2,
    /// Displacement per tick.
    pub velocity: Vec2,
    /// Draw radius in pixels.
    pub radius: f32,
    /// Draw opacity in `0.0..=1.0`.
    pub opacity: f32,
}

/// Tunables for the field.
///
/// Defaults are the values the site shipped with; none of them carry a
/// documented rationale beyond "looked right", so they are kept
/// configurable rather than folded into the code.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticleFieldParams {
    /// Pool size.
    pub count: usize,
    /// Velocity per axis is drawn from `[-speed_half_range, speed_half_range)`.
    pub speed_half_range: f32,
    /// Draw radius range (pixels).
    pub radius_min: f32,
    pub radius_max: f32,
    /// Particle opacity range.
    pub opacity_min: f32,
    pub opacity_max: f32,
    /// Pairs closer than this (pixels) get a connecting line.
    pub link_threshold: f32,
    /// Line opacity at distance zero; falls off linearly to zero at the
    /// threshold.
    pub link_opacity: f32,
    /// Connecting line stroke width.
    pub line_width: f32,
    /// Accent color for particles and links.
    pub color: Rgba,
    /// PRNG seed for pool initialization.
    pub seed: u32,
}

impl Default for ParticleFieldParams {
    fn default() -> Self {
        Self {
            count: 50,
            speed_half_range: 0.25,
            radius_min: 1.0,
            radius_max: 3.0,
            opacity_min: 0.1,
            opacity_max: 0.4,
            link_threshold: 100.0,
            link_opacity: 0.1,
            line_width: 0.5,
            color: Rgba::ACCENT,
            seed: 0x5645_5244,
        }
    }
}

/// Lifecycle of a field: populated once, torn down once, no pause/resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    /// Constructed, pool not yet populated.
    #[default]
    Uninitialized,
    /// Pool populated; `tick`/`render` are live.
    Running,
    /// Torn down; every operation is a no-op.
    Disposed,
}

/// The particle field simulator.
#[derive(Debug, Clone)]
pub struct ParticleField {
    params: ParticleFieldParams,
    particles: Vec<Particle>,
    bounds: Bounds,
    state: FieldState,
}

impl ParticleField {
    /// Create an uninitialized field; call [`ParticleField::initialize`]
    /// with the surface bounds to populate it.
    #[must_use]
    pub fn new(params: ParticleFieldParams) -> Self {
        Self {
            params,
            particles: Vec::new(),
            bounds: Bounds::default(),
            state: FieldState::Uninitialized,
        }
    }

    /// Convenience: create and immediately initialize with an explicit seed.
    #[must_use]
    pub fn with_seed(mut params: ParticleFieldParams, bounds: Bounds, seed: u32) -> Self {
        params.seed = seed;
        let mut field = Self::new(params);
        field.initialize(bounds);
        field
    }

    /// Populate the pool: positions uniform over `bounds`, velocities from
    /// the symmetric speed range, radius and opacity from their ranges.
    ///
    /// Degenerate bounds are not an error; the field simply collapses
    /// visually. Re-initializing an already-running or disposed field
    /// restarts it from scratch.
    pub fn initialize(&mut self, bounds: Bounds) {
        let mut rng = XorShift32::new(self.params.seed);
        self.bounds = bounds;
        self.particles.clear();
        self.particles.reserve(self.params.count);
        for _ in 0..self.params.count {
            self.particles.push(Particle {
                position: Vec2::new(
                    rng.range_f32(0.0, bounds.width),
                    rng.range_f32(0.0, bounds.height),
                ),
                velocity: Vec2::new(
                    rng.symmetric_f32(self.params.speed_half_range),
                    rng.symmetric_f32(self.params.speed_half_range),
                ),
                radius: rng.range_f32(self.params.radius_min, self.params.radius_max),
                opacity: rng.range_f32(self.params.opacity_min, self.params.opacity_max),
            });
        }
        self.state = FieldState::Running;
        debug!(count = self.particles.len(), "particle field initialized");
    }

    /// Advance every particle by one frame.
    ///
    /// Positions leaving `[0, bound]` on an axis reflect: the velocity
    /// component is negated and the position clamped back onto the edge, so
    /// one tick never leaves a particle outside the bounds.
    pub fn tick(&mut self) {
        if self.state != FieldState::Running {
            return;
        }
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.position += p.velocity;
            if p.position.x < 0.0 || p.position.x > bounds.width {
                p.velocity.x = -p.velocity.x;
                p.position.x = p.position.x.clamp(0.0, bounds.width);
            }
            if p.position.y < 0.0 || p.position.y > bounds.height {
                p.velocity.y = -p.velocity.y;
                p.position.y = p.position.y.clamp(0.0, bounds.height);
            }
        }
    }

    /// Draw the current frame: clear, one circle per particle, then the
    /// pairwise link pass.
    pub fn render<S: Surface>(&self, surface: &mut S) {
        if self.state != FieldState::Running {
            return;
        }
        surface.clear();

        for p in &self.particles {
            surface.fill_circle(p.position, p.radius, self.params.color, p.opacity);
        }

        let threshold = self.params.link_threshold;
        if threshold <= 0.0 {
            return;
        }
        let threshold_sq = threshold * threshold;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dist_sq = a.position.distance_sq(b.position);
                if dist_sq < threshold_sq {
                    let dist = dist_sq.sqrt();
                    let opacity = self.params.link_opacity * (1.0 - dist / threshold);
                    surface.stroke_line(
                        a.position,
                        b.position,
                        self.params.line_width,
                        self.params.color,
                        opacity,
                    );
                }
            }
        }
    }

    /// Update the bounds used by `tick`'s reflection test.
    ///
    /// Existing particles are not repositioned; ones now outside smaller
    /// bounds drift back in on their own. Cosmetic quirk, accepted.
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Tear the field down and release the pool. Idempotent; safe to call
    /// in any state.
    pub fn dispose(&mut self) {
        if self.state == FieldState::Disposed {
            return;
        }
        self.particles = Vec::new();
        self.state = FieldState::Disposed;
        debug!("particle field disposed");
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> FieldState {
        self.state
    }

    /// The live pool.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Bounds currently used for reflection.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Parameters the field was built with.
    #[must_use]
    pub fn params(&self) -> &ParticleFieldParams {
        &self.params
    }
}
