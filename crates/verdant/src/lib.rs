#![forbid(unsafe_code)]

//! Verdant public facade crate.
//!
//! Re-exports the common types from the workspace crates and offers a
//! lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use verdant_core::geometry::{Bounds, Vec2};
pub use verdant_core::observable::{Observable, SubscriptionId};
pub use verdant_core::rng::XorShift32;

// --- Forms re-exports ------------------------------------------------------

pub use verdant_forms::{
    FailureReason, FieldFormat, FieldSpec, FormController, FormSchema, PasswordStrength,
    SubmissionBackend, SubmissionError, SubmissionRecord, SubmissionToken, SubmitAction,
    SubmitStatus, password_strength,
};

// --- FX re-exports ---------------------------------------------------------

pub use verdant_fx::{
    BrailleSurface, Bubble, BubbleColumn, BubbleParams, DrawOp, FieldState, Particle,
    ParticleField, ParticleFieldParams, RecordingSurface, Rgba, Surface,
};

/// Convenience prelude: `use verdant::prelude::*;`.
pub mod prelude {
    pub use crate::{
        Bounds, BubbleColumn, BubbleParams, FormController, FormSchema, Observable, ParticleField,
        ParticleFieldParams, RecordingSurface, Rgba, SubmissionBackend, SubmitAction, SubmitStatus,
        Surface, Vec2, password_strength,
    };
}
