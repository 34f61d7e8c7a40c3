//! Basic shape primitives renderer.
//!
//! Draws rectangles, Bresenham lines and polylines directly into a
//! `RendererBase` without anti-aliasing.

use crate::basics::{PointI, COVER_FULL};
use crate::line_bresenham::LineBresenham;
use crate::pixfmt_rgba::PixelFormat;
use crate::renderer_base::RendererBase;

// ============================================================================
// RendererPrimitives
// ============================================================================

/// Basic shape primitives renderer.
///
/// Keeps separate fill and line colors. Every pixel is written with full
/// cover.
pub struct RendererPrimitives<'r, PF: PixelFormat> {
    ren: &'r mut RendererBase<PF>,
    fill_color: PF::ColorType,
    line_color: PF::ColorType,
}

impl<'r, PF: PixelFormat> RendererPrimitives<'r, PF>
where
    PF::ColorType: Default + Clone,
{
    pub fn new(ren: &'r mut RendererBase<PF>) -> Self {
        Self {
            ren,
            fill_color: PF::ColorType::default(),
            line_color: PF::ColorType::default(),
        }
    }

    pub fn set_fill_color(&mut self, c: PF::ColorType) {
        self.fill_color = c;
    }

    pub fn set_line_color(&mut self, c: PF::ColorType) {
        self.line_color = c;
    }

    /// Draw an outlined rectangle (line color only). Corners are inclusive.
    pub fn rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let lc = self.line_color.clone();
        self.ren.blend_hline(x1, y1, x2 - 1, &lc, COVER_FULL);
        self.ren.blend_vline(x2, y1, y2 - 1, &lc, COVER_FULL);
        self.ren.blend_hline(x1 + 1, y2, x2, &lc, COVER_FULL);
        self.ren.blend_vline(x1, y1 + 1, y2, &lc, COVER_FULL);
    }

    /// Draw a solid filled rectangle (fill color only).
    pub fn solid_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let fc = self.fill_color.clone();
        self.ren.blend_bar(x1, y1, x2, y2, &fc, COVER_FULL);
    }

    /// Draw an outlined and filled rectangle.
    pub fn outlined_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.rectangle(x1, y1, x2, y2);
        let fc = self.fill_color.clone();
        self.ren
            .blend_bar(x1 + 1, y1 + 1, x2 - 1, y2 - 1, &fc, COVER_FULL);
    }

    /// Draw a Bresenham line from `p1` to `p2`, both endpoints included.
    ///
    /// Segments that lie wholly past one canvas edge are skipped without
    /// stepping.
    pub fn line(&mut self, p1: PointI, p2: PointI) {
        if self.ren.segment_outside(p1, p2) {
            return;
        }
        let lc = self.line_color.clone();
        for p in LineBresenham::new(p1, p2) {
            self.ren.blend_pixel(p.x, p.y, &lc, COVER_FULL);
        }
    }

    /// Draw a line between every consecutive pair of `points`.
    ///
    /// Fewer than two points draw nothing.
    pub fn polyline(&mut self, points: &[PointI]) {
        for seg in points.windows(2) {
            self.line(seg[0], seg[1]);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
