//! RGBA pixel format with alpha blending.
//!
//! Pixel format that reads and writes RGBA32 pixels (4 bytes per pixel,
//! non-premultiplied alpha) with alpha blending.
//!
//! Provides the `PixelFormat` trait and `PixfmtRgba32` concrete implementation.

use crate::basics::CoverType;
use crate::color::Rgba8;
use crate::rendering_buffer::RowAccessor;

// ============================================================================
// PixelFormat trait
// ============================================================================

/// Trait for pixel formats that can blend colors into a rendering buffer.
///
/// Callers are expected to clip first (see `RendererBase`); implementations
/// index rows directly and panic on out-of-range coordinates.
pub trait PixelFormat {
    type ColorType;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Blend a single pixel at (x, y) with color `c` and coverage `cover`.
    fn blend_pixel(&mut self, x: i32, y: i32, c: &Self::ColorType, cover: CoverType);

    /// Blend a horizontal line of `len` pixels at (x, y) with uniform color and coverage.
    fn blend_hline(&mut self, x: i32, y: i32, len: u32, c: &Self::ColorType, cover: CoverType);

    /// Blend a horizontal span of `len` pixels with per-pixel coverage values.
    fn blend_solid_hspan(
        &mut self,
        x: i32,
        y: i32,
        len: u32,
        c: &Self::ColorType,
        covers: &[CoverType],
    );

    /// Copy (overwrite) a horizontal line of `len` pixels with color `c`.
    fn copy_hline(&mut self, x: i32, y: i32, len: u32, c: &Self::ColorType);

    /// Get the pixel color at (x, y).
    fn pixel(&self, x: i32, y: i32) -> Self::ColorType;
}

// ============================================================================
// PixfmtRgba32: non-premultiplied RGBA, 8 bits per channel
// ============================================================================

/// Pixel format for non-premultiplied RGBA32 (4 bytes per pixel).
///
/// Component order: R=0, G=1, B=2, A=3.
pub struct PixfmtRgba32<'a> {
    rbuf: RowAccessor<'a>,
}

pub const BPP: usize = 4;

impl<'a> PixfmtRgba32<'a> {
    pub fn new(rbuf: RowAccessor<'a>) -> Self {
        Self { rbuf }
    }

    #[inline]
    fn blend_pix(p: &mut [u8], cr: u8, cg: u8, cb: u8, alpha: u8) {
        p[0] = Rgba8::lerp(p[0], cr, alpha);
        p[1] = Rgba8::lerp(p[1], cg, alpha);
        p[2] = Rgba8::lerp(p[2], cb, alpha);
        p[3] = Rgba8::lerp(p[3], 255, alpha);
    }

    #[inline]
    fn put_pix(p: &mut [u8], c: &Rgba8, alpha: u8) {
        if alpha == 255 {
            p[0] = c.r;
            p[1] = c.g;
            p[2] = c.b;
            p[3] = 255;
        } else if alpha > 0 {
            Self::blend_pix(p, c.r, c.g, c.b, alpha);
        }
    }

    fn row_mut(&mut self, y: i32) -> &mut [u8] {
        self.rbuf.row_slice_mut(y as u32)
    }
}

impl<'a> PixelFormat for PixfmtRgba32<'a> {
    type ColorType = Rgba8;

    fn width(&self) -> u32 {
        self.rbuf.width()
    }

    fn height(&self) -> u32 {
        self.rbuf.height()
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba8 {
        let row = self.rbuf.row_slice(y as u32);
        let off = x as usize * BPP;
        Rgba8::from_rgba_u8(row[off], row[off + 1], row[off + 2], row[off + 3])
    }

    fn copy_hline(&mut self, x: i32, y: i32, len: u32, c: &Rgba8) {
        let start = x as usize * BPP;
        let end = start + len as usize * BPP;
        let bytes = c.to_array();
        for px in self.row_mut(y)[start..end].chunks_exact_mut(BPP) {
            px.copy_from_slice(&bytes);
        }
    }

    fn blend_pixel(&mut self, x: i32, y: i32, c: &Rgba8, cover: CoverType) {
        let off = x as usize * BPP;
        let alpha = Rgba8::mult_cover(c.a, cover);
        Self::put_pix(&mut self.row_mut(y)[off..off + BPP], c, alpha);
    }

    fn blend_hline(&mut self, x: i32, y: i32, len: u32, c: &Rgba8, cover: CoverType) {
        let start = x as usize * BPP;
        let end = start + len as usize * BPP;
        let alpha = Rgba8::mult_cover(c.a, cover);
        for px in self.row_mut(y)[start..end].chunks_exact_mut(BPP) {
            Self::put_pix(px, c, alpha);
        }
    }

    fn blend_solid_hspan(&mut self, x: i32, y: i32, len: u32, c: &Rgba8, covers: &[CoverType]) {
        let start = x as usize * BPP;
        let row = self.row_mut(y);
        for (i, &cov) in covers.iter().enumerate().take(len as usize) {
            let off = start + i * BPP;
            let alpha = Rgba8::mult_cover(c.a, cov);
            Self::put_pix(&mut row[off..off + BPP], c, alpha);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_buffer(w: u32, h: u32) -> Vec<u8> {
        vec![0u8; (w * h) as usize * BPP]
    }

    fn make_pixfmt(buf: &mut [u8], w: u32, h: u32) -> PixfmtRgba32<'_> {
        PixfmtRgba32::new(RowAccessor::new(buf, w, h, w as usize * BPP).unwrap())
    }

    #[test]
    fn test_new() {
        let mut buf = make_buffer(100, 100);
        let pf = make_pixfmt(&mut buf, 100, 100);
        assert_eq!(pf.width(), 100);
        assert_eq!(pf.height(), 100);
    }

    #[test]
    fn test_copy_single_pixel() {
        let mut buf = make_buffer(10, 10);
        let mut pf = make_pixfmt(&mut buf, 10, 10);
        let red = Rgba8::new(255, 0, 0, 255);
        pf.copy_hline(5, 5, 1, &red);
        assert_eq!(pf.pixel(5, 5), red);
        assert_eq!(pf.pixel(4, 5), Rgba8::TRANSPARENT);
    }

    #[test]
    fn test_copy_hline() {
        let mut buf = make_buffer(20, 10);
        let mut pf = make_pixfmt(&mut buf, 20, 10);
        let green = Rgba8::new(0, 255, 0, 255);
        pf.copy_hline(5, 3, 10, &green);
        for x in 5..15 {
            assert_eq!(pf.pixel(x, 3), green);
        }
        assert_eq!(pf.pixel(4, 3).g, 0);
        assert_eq!(pf.pixel(15, 3).g, 0);
    }

    #[test]
    fn test_blend_pixel_opaque() {
        let mut buf = make_buffer(10, 10);
        let mut pf = make_pixfmt(&mut buf, 10, 10);
        let blue = Rgba8::new(0, 0, 255, 255);
        pf.blend_pixel(3, 3, &blue, 255);
        assert_eq!(pf.pixel(3, 3), blue);
    }

    #[test]
    fn test_blend_pixel_semi_transparent() {
        let mut buf = make_buffer(10, 10);
        let mut pf = make_pixfmt(&mut buf, 10, 10);
        pf.copy_hline(0, 0, 1, &Rgba8::WHITE);
        pf.blend_pixel(0, 0, &Rgba8::new(0, 0, 0, 128), 255);
        let p = pf.pixel(0, 0);
        assert!(p.r > 100 && p.r < 140, "r={}", p.r);
        assert_eq!(p.a, 255);
    }

    #[test]
    fn test_blend_zero_cover_is_noop() {
        let mut buf = make_buffer(4, 4);
        let mut pf = make_pixfmt(&mut buf, 4, 4);
        pf.copy_hline(1, 1, 1, &Rgba8::WHITE);
        pf.blend_pixel(1, 1, &Rgba8::BLACK, 0);
        assert_eq!(pf.pixel(1, 1), Rgba8::WHITE);
    }

    #[test]
    fn test_blend_solid_hspan() {
        let mut buf = make_buffer(10, 2);
        let mut pf = make_pixfmt(&mut buf, 10, 2);
        pf.blend_solid_hspan(2, 1, 4, &Rgba8::BLACK, &[255, 0, 255, 0]);
        assert_eq!(pf.pixel(2, 1), Rgba8::BLACK);
        assert_eq!(pf.pixel(3, 1), Rgba8::TRANSPARENT);
        assert_eq!(pf.pixel(4, 1), Rgba8::BLACK);
        assert_eq!(pf.pixel(5, 1), Rgba8::TRANSPARENT);
    }
}
