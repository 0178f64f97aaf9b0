#![forbid(unsafe_code)]

//! Ambient visual effects for the Verdant landing experience.
//!
//! Two decorative effects, both purely visual with no business-logic
//! coupling:
//!
//! - [`ParticleField`]: drifting point masses with proximity-linked lines
//!   ([`particles`]).
//! - [`BubbleColumn`]: bubbles rising through the viewport on looping
//!   envelopes ([`bubbles`]).
//!
//! Effects draw through the [`Surface`] trait ([`surface`]) — anything that
//! can fill circles and stroke lines can host them. [`BrailleSurface`]
//! ([`braille`]) rasterizes to Unicode Braille text for terminal output and
//! golden-frame tests; [`RecordingSurface`] captures draw calls for
//! assertions.
//!
//! Design goals (shared with the rest of the workspace):
//! - **Deterministic**: fixed seed in, identical frames out.
//! - **Tiny-area safe**: zero-size bounds must not panic.
//! - **No wall clock**: callers own time; effects advance only in `tick`.

pub mod braille;
pub mod bubbles;
pub mod particles;
pub mod surface;

pub use braille::BrailleSurface;
pub use bubbles::{Bubble, BubbleColumn, BubbleParams};
pub use particles::{FieldState, Particle, ParticleField, ParticleFieldParams};
pub use surface::{DrawOp, RecordingSurface, Rgba, Surface};
