//! Canvas-clipping renderer.
//!
//! Wraps a pixel format and bounds every drawing call to the canvas.
//! Transformed shapes routinely leave the canvas (a reflection about the
//! origin sends the whole polyline off-screen), so everything drawn per
//! frame goes through here.

use crate::basics::{CoverType, PointI, RectI};
use crate::pixfmt_rgba::PixelFormat;

// ============================================================================
// RendererBase
// ============================================================================

/// Clips to the full canvas, then delegates to the pixel format.
pub struct RendererBase<PF: PixelFormat> {
    pf: PF,
    bounds: RectI,
}

impl<PF: PixelFormat> RendererBase<PF> {
    pub fn new(pf: PF) -> Self {
        let bounds = RectI::new(0, 0, pf.width() as i32 - 1, pf.height() as i32 - 1);
        Self { pf, bounds }
    }

    pub fn width(&self) -> u32 {
        self.pf.width()
    }

    pub fn height(&self) -> u32 {
        self.pf.height()
    }

    /// Inclusive canvas rectangle.
    pub fn bounds(&self) -> &RectI {
        &self.bounds
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.bounds.hit_test(x, y)
    }

    /// True when the segment `p1`..`p2` cannot touch the canvas because both
    /// endpoints lie past the same edge.
    pub fn segment_outside(&self, p1: PointI, p2: PointI) -> bool {
        let b = &self.bounds;
        (p1.x < b.x1 && p2.x < b.x1)
            || (p1.x > b.x2 && p2.x > b.x2)
            || (p1.y < b.y1 && p2.y < b.y1)
            || (p1.y > b.y2 && p2.y > b.y2)
    }

    /// Overwrite every pixel with `c`.
    pub fn clear(&mut self, c: &PF::ColorType) {
        let w = self.pf.width();
        for y in 0..self.pf.height() as i32 {
            self.pf.copy_hline(0, y, w, c);
        }
    }

    pub fn blend_pixel(&mut self, x: i32, y: i32, c: &PF::ColorType, cover: CoverType) {
        if self.contains(x, y) {
            self.pf.blend_pixel(x, y, c, cover);
        }
    }

    /// Pixel at (x, y); the default color off-canvas.
    pub fn pixel(&self, x: i32, y: i32) -> PF::ColorType
    where
        PF::ColorType: Default,
    {
        if self.contains(x, y) {
            self.pf.pixel(x, y)
        } else {
            PF::ColorType::default()
        }
    }

    /// Horizontal run from `x1` to `x2` inclusive, in either order.
    pub fn blend_hline(&mut self, x1: i32, y: i32, x2: i32, c: &PF::ColorType, cover: CoverType) {
        self.blend_bar(x1, y, x2, y, c, cover);
    }

    /// Vertical run from `y1` to `y2` inclusive, in either order.
    pub fn blend_vline(&mut self, x: i32, y1: i32, y2: i32, c: &PF::ColorType, cover: CoverType) {
        self.blend_bar(x, y1, x, y2, c, cover);
    }

    /// Filled rectangle with inclusive corners.
    pub fn blend_bar(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        c: &PF::ColorType,
        cover: CoverType,
    ) {
        let mut rc = RectI::new(x1, y1, x2, y2);
        rc.normalize();
        if !rc.clip(&self.bounds) {
            return;
        }
        let len = (rc.x2 - rc.x1 + 1) as u32;
        for y in rc.y1..=rc.y2 {
            self.pf.blend_hline(rc.x1, y, len, c, cover);
        }
    }

    /// Span of `len` pixels starting at (x, y) with one cover per pixel.
    pub fn blend_solid_hspan(
        &mut self,
        x: i32,
        y: i32,
        len: i32,
        c: &PF::ColorType,
        covers: &[CoverType],
    ) {
        let mut rc = RectI::new(x, y, x + len - 1, y);
        if len <= 0 || !rc.clip(&self.bounds) {
            return;
        }
        let skip = (rc.x1 - x) as usize;
        let n = (rc.x2 - rc.x1 + 1) as u32;
        self.pf.blend_solid_hspan(rc.x1, y, n, c, &covers[skip..]);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::COVER_FULL;
    use crate::color::Rgba8;
    use crate::pixfmt_rgba::PixfmtRgba32;
    use crate::rendering_buffer::RowAccessor;

    fn make_renderer(buf: &mut [u8], w: u32, h: u32) -> RendererBase<PixfmtRgba32<'_>> {
        let ra = RowAccessor::new(buf, w, h, (w * 4) as usize).unwrap();
        RendererBase::new(PixfmtRgba32::new(ra))
    }

    #[test]
    fn test_new() {
        let mut buf = vec![0u8; 100 * 80 * 4];
        let rb = make_renderer(&mut buf, 100, 80);
        assert_eq!((rb.width(), rb.height()), (100, 80));
        assert_eq!(*rb.bounds(), RectI::new(0, 0, 99, 79));
    }

    #[test]
    fn test_clear() {
        let mut buf = vec![0u8; 10 * 10 * 4];
        let mut rb = make_renderer(&mut buf, 10, 10);
        rb.clear(&Rgba8::WHITE);
        assert_eq!(rb.pixel(0, 0), Rgba8::WHITE);
        assert_eq!(rb.pixel(9, 9), Rgba8::WHITE);
    }

    #[test]
    fn test_blend_pixel_off_canvas_is_dropped() {
        let mut buf = vec![0u8; 10 * 10 * 4];
        let mut rb = make_renderer(&mut buf, 10, 10);
        rb.blend_pixel(-1, 0, &Rgba8::BLACK, COVER_FULL);
        rb.blend_pixel(0, -1, &Rgba8::BLACK, COVER_FULL);
        rb.blend_pixel(10, 5, &Rgba8::BLACK, COVER_FULL);
        rb.blend_pixel(5, 10, &Rgba8::BLACK, COVER_FULL);
        rb.blend_pixel(5, 5, &Rgba8::BLACK, COVER_FULL);
        assert_eq!(rb.pixel(5, 5), Rgba8::BLACK);
        assert_eq!(rb.pixel(-1, 0), Rgba8::default());
    }

    #[test]
    fn test_blend_hline_clipped() {
        let mut buf = vec![0u8; 10 * 10 * 4];
        let mut rb = make_renderer(&mut buf, 10, 10);
        rb.blend_hline(20, 2, -5, &Rgba8::BLACK, COVER_FULL);
        for x in 0..10 {
            assert_eq!(rb.pixel(x, 2), Rgba8::BLACK);
        }
        assert_eq!(rb.pixel(0, 3), Rgba8::TRANSPARENT);
    }

    #[test]
    fn test_blend_vline_clipped() {
        let mut buf = vec![0u8; 10 * 10 * 4];
        let mut rb = make_renderer(&mut buf, 10, 10);
        rb.blend_vline(4, 12, -3, &Rgba8::BLACK, COVER_FULL);
        for y in 0..10 {
            assert_eq!(rb.pixel(4, y), Rgba8::BLACK);
        }
        rb.blend_vline(11, 0, 9, &Rgba8::BLACK, COVER_FULL);
        assert_eq!(rb.pixel(9, 0), Rgba8::TRANSPARENT);
    }

    #[test]
    fn test_blend_bar() {
        let mut buf = vec![0u8; 10 * 10 * 4];
        let mut rb = make_renderer(&mut buf, 10, 10);
        rb.blend_bar(7, 7, 12, 12, &Rgba8::BLACK, COVER_FULL);
        assert_eq!(rb.pixel(7, 7), Rgba8::BLACK);
        assert_eq!(rb.pixel(9, 9), Rgba8::BLACK);
        assert_eq!(rb.pixel(6, 7), Rgba8::TRANSPARENT);
    }

    #[test]
    fn test_segment_outside() {
        let mut buf = vec![0u8; 20 * 20 * 4];
        let rb = make_renderer(&mut buf, 20, 20);
        let p = PointI::new;
        assert!(rb.segment_outside(p(-5, 0), p(-1, 19)));
        assert!(rb.segment_outside(p(0, 25), p(19, 20)));
        assert!(rb.segment_outside(p(i32::MIN, 3), p(-400, 3)));
        assert!(!rb.segment_outside(p(-5, 5), p(25, 5)));
        // diagonal through the canvas
        assert!(!rb.segment_outside(p(-5, 10), p(10, -5)));
    }

    #[test]
    fn test_blend_solid_hspan_clipped_left() {
        let mut buf = vec![0u8; 10 * 2 * 4];
        let mut rb = make_renderer(&mut buf, 10, 2);
        rb.blend_solid_hspan(-2, 0, 4, &Rgba8::BLACK, &[255, 255, 0, 255]);
        assert_eq!(rb.pixel(0, 0), Rgba8::TRANSPARENT);
        assert_eq!(rb.pixel(1, 0), Rgba8::BLACK);
    }

    #[test]
    fn test_blend_solid_hspan_clipped_right() {
        let mut buf = vec![0u8; 10 * 2 * 4];
        let mut rb = make_renderer(&mut buf, 10, 2);
        rb.blend_solid_hspan(8, 1, 4, &Rgba8::BLACK, &[255; 4]);
        assert_eq!(rb.pixel(8, 1), Rgba8::BLACK);
        assert_eq!(rb.pixel(9, 1), Rgba8::BLACK);
    }

    #[test]
    fn test_blend_solid_hspan_fully_clipped() {
        let mut buf = vec![0u8; 10 * 2 * 4];
        let mut rb = make_renderer(&mut buf, 10, 2);
        rb.blend_solid_hspan(-10, 0, 4, &Rgba8::BLACK, &[255; 4]);
        rb.blend_solid_hspan(0, 5, 4, &Rgba8::BLACK, &[255; 4]);
        rb.blend_solid_hspan(3, 0, 0, &Rgba8::BLACK, &[]);
        for x in 0..10 {
            assert_eq!(rb.pixel(x, 0), Rgba8::TRANSPARENT);
        }
    }
}
