#![forbid(unsafe_code)]

//! Core: pixel-space geometry, deterministic randomness, and observable state.

pub mod geometry;
pub mod observable;
pub mod rng;

pub use geometry::{Bounds, Vec2};
pub use observable::{Observable, SubscriptionId};
pub use rng::XorShift32;
