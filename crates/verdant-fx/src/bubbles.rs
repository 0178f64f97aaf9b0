#![forbid(unsafe_code)]

//! Rising-bubble backdrop.
//!
//! Each bubble loops forever on its own cycle: it enters below the bottom
//! edge, rises past the top, and restarts after its per-bubble delay.
//! Scale and opacity follow a grow/hold/fade envelope over the cycle so
//! bubbles pop in and dissolve instead of teleporting.
//!
//! Time is caller-owned: [`BubbleColumn::advance`] takes elapsed seconds,
//! so hosts can drive it from a frame callback or a fixed-step test clock.

use verdant_core::geometry::{Bounds, Vec2};
use verdant_core::rng::XorShift32;

use crate::surface::{Rgba, Surface};

/// Tunables for the bubble column. Defaults match the shipped site.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BubbleParams {
    /// Number of bubbles.
    pub count: usize,
    /// Diameter range in pixels.
    pub size_min: f32,
    pub size_max: f32,
    /// Cycle duration range in seconds.
    pub duration_min: f32,
    pub duration_max: f32,
    /// Start delays are drawn from `[0, delay_max)` seconds.
    pub delay_max: f32,
    /// Maximum horizontal drift over one cycle, in pixels (either
    /// direction).
    pub drift_half_range: f32,
    /// Peak opacity at the hold phase of the envelope.
    pub peak_opacity: f32,
    /// Bubble color.
    pub color: Rgba,
    /// PRNG seed.
    pub seed: u32,
}

impl Default for BubbleParams {
    fn default() -> Self {
        Self {
            count: 15,
            size_min: 10.0,
            size_max: 50.0,
            duration_min: 6.0,
            duration_max: 10.0,
            delay_max: 8.0,
            drift_half_range: 50.0,
            peak_opacity: 0.6,
            color: Rgba::ACCENT,
            seed: 0x4255_4242,
        }
    }
}

/// One looping bubble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    /// Diameter in pixels.
    pub size: f32,
    /// Horizontal anchor as a fraction of the surface width.
    pub x_frac: f32,
    /// Seconds before the first cycle starts.
    pub delay: f32,
    /// Cycle duration in seconds.
    pub duration: f32,
    /// Horizontal drift applied over a full cycle, in pixels.
    pub drift: f32,
}

/// The bubble column effect.
#[derive(Debug, Clone)]
pub struct BubbleColumn {
    params: BubbleParams,
    bubbles: Vec<Bubble>,
    bounds: Bounds,
    time: f32,
}

impl BubbleColumn {
    /// Create a column over the given bounds.
    #[must_use]
    pub fn new(params: BubbleParams, bounds: Bounds) -> Self {
        let mut rng = XorShift32::new(params.seed);
        let bubbles = (0..params.count)
            .map(|_| Bubble {
                size: rng.range_f32(params.size_min, params.size_max),
                x_frac: rng.next_f32(),
                delay: rng.range_f32(0.0, params.delay_max),
                duration: rng.range_f32(params.duration_min, params.duration_max),
                drift: rng.symmetric_f32(params.drift_half_range),
            })
            .collect();
        Self {
            params,
            bubbles,
            bounds,
            time: 0.0,
        }
    }

    /// Advance the clock by `dt` seconds. Negative values are ignored.
    pub fn advance(&mut self, dt: f32) {
        if dt > 0.0 {
            self.time += dt;
        }
    }

    /// Update the bounds bubbles rise through.
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Cycle phase in `[0, 1)` for a bubble, or `None` before its first
    /// cycle has started.
    fn phase(&self, bubble: &Bubble) -> Option<f32> {
        let local = self.time - bubble.delay;
        if local < 0.0 || bubble.duration <= 0.0 {
            return None;
        }
        Some((local / bubble.duration).fract())
    }

    /// Grow/hold/fade envelope: 0 -> 1 over the first third, hold through
    /// the second, 1 -> 0 over the last.
    fn envelope(phase: f32) -> f32 {
        const THIRD: f32 = 1.0 / 3.0;
        if phase < THIRD {
            phase / THIRD
        } else if phase < 2.0 * THIRD {
            1.0
        } else {
            (1.0 - phase) / THIRD
        }
    }

    /// Draw the current frame.
    pub fn render<S: Surface>(&self, surface: &mut S) {
        surface.clear();
        for bubble in &self.bubbles {
            let Some(phase) = self.phase(bubble) else {
                continue;
            };
            let envelope = Self::envelope(phase);
            if envelope <= 0.0 {
                continue;
            }
            // Bottom edge (fully below) to top edge (fully above).
            let y = (self.bounds.height + bubble.size)
                - phase * (self.bounds.height + 2.0 * bubble.size);
            let x = bubble.x_frac * self.bounds.width + bubble.drift * phase;
            surface.fill_circle(
                Vec2::new(x, y),
                bubble.size / 2.0 * envelope,
                self.params.color,
                self.params.peak_opacity * envelope,
            );
        }
    }

    /// The generated bubbles.
    #[must_use]
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    /// Current clock in seconds.
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }
}
