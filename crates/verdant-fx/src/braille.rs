#![forbid(unsafe_code)]

//! Monochrome Braille rasterizer.
//!
//! Implements [`Surface`] over a sub-pixel grid where every text cell holds
//! a 2×4 block of Braille dots (U+2800..U+28FF). Good enough to watch the
//! effects in a terminal and to snapshot frames in tests; it makes no
//! attempt at color or alpha blending — draws below a small opacity cutoff
//! are simply dropped.

use verdant_core::geometry::{Bounds, Vec2};

use crate::surface::{Rgba, Surface};

/// Draws dimmer than this are invisible at one-bit depth; skip them.
pub const MIN_VISIBLE_OPACITY: f32 = 0.05;

/// Braille dot bit for a (column, row) inside one cell.
///
/// Dot layout per the Unicode block:
/// dots 1,2,3,7 run down column 0; dots 4,5,6,8 down column 1.
const DOT_BITS: [[u8; 4]; 2] = [[0, 1, 2, 6], [3, 4, 5, 7]];

/// A fixed-size one-bit pixel grid rendered as Braille text.
#[derive(Debug, Clone)]
pub struct BrailleSurface {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl BrailleSurface {
    /// Create a surface `width` x `height` pixels (2 per cell column,
    /// 4 per cell row).
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    /// Create a surface sized for a text grid of `cols` x `rows` cells.
    #[must_use]
    pub fn for_cells(cols: usize, rows: usize) -> Self {
        Self::new(cols * 2, rows * 4)
    }

    /// Pixel dimensions.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Whether a pixel is set. Out-of-range coordinates read as unset.
    #[must_use]
    pub fn get(&self, x: i64, y: i64) -> bool {
        self.index(x, y).map(|i| self.pixels[i]).unwrap_or(false)
    }

    /// Count of set pixels.
    #[must_use]
    pub fn lit_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| **p).count()
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    fn plot(&mut self, x: i64, y: i64) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = true;
        }
    }

    /// Render the grid as Braille text, one line per cell row.
    #[must_use]
    pub fn to_text(&self) -> String {
        let cols = self.width.div_ceil(2);
        let rows = self.height.div_ceil(4);
        let mut out = String::with_capacity(rows * (cols + 1) * 3);
        for cell_y in 0..rows {
            for cell_x in 0..cols {
                let mut bits: u8 = 0;
                for (col, col_bits) in DOT_BITS.iter().enumerate() {
                    for (row, bit) in col_bits.iter().enumerate() {
                        let x = (cell_x * 2 + col) as i64;
                        let y = (cell_y * 4 + row) as i64;
                        if self.get(x, y) {
                            bits |= 1 << bit;
                        }
                    }
                }
                // The Braille block starts at U+2800; bits select the dots.
                out.push(char::from_u32(0x2800 + bits as u32).unwrap_or(' '));
            }
            out.push('\n');
        }
        out
    }
}

impl Surface for BrailleSurface {
    fn size(&self) -> Bounds {
        Bounds::new(self.width as f32, self.height as f32)
    }

    fn clear(&mut self) {
        self.pixels.fill(false);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, _color: Rgba, opacity: f32) {
        if opacity < MIN_VISIBLE_OPACITY {
            return;
        }
        let cx = center.x.round() as i64;
        let cy = center.y.round() as i64;
        let r = radius.max(0.0);
        if r < 0.5 {
            self.plot(cx, cy);
            return;
        }
        // Scanline fill: for each row of the disc, light the horizontal run.
        let ri = r.ceil() as i64;
        for dy in -ri..=ri {
            let dy_f = dy as f32;
            let span_sq = r * r - dy_f * dy_f;
            if span_sq < 0.0 {
                continue;
            }
            let span = span_sq.sqrt().floor() as i64;
            for dx in -span..=span {
                self.plot(cx + dx, cy + dy);
            }
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, _width: f32, _color: Rgba, opacity: f32) {
        if opacity < MIN_VISIBLE_OPACITY {
            return;
        }
        // Bresenham; stroke width collapses to one dot at this resolution.
        let (mut x, mut y) = (from.x.round() as i64, from.y.round() as i64);
        let (x1, y1) = (to.x.round() as i64, to.y.round() as i64);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                if x == x1 {
                    break;
                }
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                if y == y1 {
                    break;
                }
                err += dx;
                y += sy;
            }
        }
    }
}
