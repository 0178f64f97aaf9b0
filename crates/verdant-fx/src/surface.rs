#![forbid(unsafe_code)]

//! The drawing boundary effects render through.
//!
//! A [`Surface`] is the minimum contract a host must provide: report its
//! size, clear, fill circles, stroke lines. The concrete 2-D context
//! (browser canvas, terminal cells, test recorder) stays on the other side
//! of the trait.

use verdant_core::geometry::{Bounds, Vec2};

/// Packed RGBA color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba(pub u32);

impl Rgba {
    /// The brand accent used by the decorative effects (#3b82f6).
    pub const ACCENT: Self = Self::rgb(0x3b, 0x82, 0xf6);

    /// Create an opaque RGB color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an RGBA color with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }
}

/// A host that can draw the primitive shapes the effects need.
///
/// Opacity is passed separately from color (`0.0..=1.0`) because hosts like
/// a canvas context apply it as global alpha rather than baking it into the
/// fill color.
pub trait Surface {
    /// Current drawable size in pixels.
    fn size(&self) -> Bounds;

    /// Erase the whole surface.
    fn clear(&mut self);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, opacity: f32);

    /// Draw a stroked line segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba, opacity: f32);
}

// ---------------------------------------------------------------------------
// RecordingSurface
// ---------------------------------------------------------------------------

/// One captured draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// The surface was cleared.
    Clear,
    /// A filled circle.
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        opacity: f32,
    },
    /// A stroked line.
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
        opacity: f32,
    },
}

/// Test double that records every draw call instead of rasterizing.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    bounds: Bounds,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Create a recorder reporting the given bounds.
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            ops: Vec::new(),
        }
    }

    /// All captured operations, in call order.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Captured circle draws only.
    pub fn circles(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Circle { .. }))
    }

    /// Captured line draws only.
    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. }))
    }

    /// Drop the recorded operations.
    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Bounds {
        self.bounds
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, opacity: f32) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
            opacity,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba, opacity: f32) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
            opacity,
        });
    }
}
