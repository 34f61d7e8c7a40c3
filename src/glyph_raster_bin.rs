//! Binary raster glyph generator.
//!
//! Turns glyphs of a [`RasterFont`] into per-row coverage spans (0 or 255),
//! optionally magnified by an integer factor so labels stay legible on a
//! large canvas.

use crate::basics::{CoverType, COVER_FULL, COVER_NONE};
use crate::raster_font::RasterFont;

// ============================================================================
// GlyphRect: bounding box of a glyph
// ============================================================================

/// Bounding box and advance of a prepared glyph. Corners are inclusive;
/// `x2 < x1` means there is nothing to draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub dx: i32,
}

// ============================================================================
// GlyphRasterBin
// ============================================================================

/// Binary raster glyph generator over an embedded bitmap font.
pub struct GlyphRasterBin<'a> {
    font: &'a RasterFont,
    scale: u32,
    span: Vec<CoverType>,
    glyph: Option<char>,
}

impl<'a> GlyphRasterBin<'a> {
    pub fn new(font: &'a RasterFont) -> Self {
        Self {
            font,
            scale: 1,
            span: vec![0; font.width() as usize],
            glyph: None,
        }
    }

    /// Magnify every font pixel to a `scale` x `scale` block (minimum 1).
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self.span.resize((self.font.width() * self.scale) as usize, 0);
        self
    }

    pub fn font(&self) -> &'a RasterFont {
        self.font
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Line height in pixels.
    pub fn height(&self) -> i32 {
        (self.font.height() * self.scale) as i32
    }

    /// Advance per character in pixels.
    pub fn advance(&self) -> i32 {
        (self.font.advance() * self.scale) as i32
    }

    /// Total width of a string in pixels.
    pub fn width(&self, s: &str) -> i32 {
        s.chars().count() as i32 * self.advance()
    }

    /// Prepare `ch` for rendering with its top-left corner at (x, y).
    ///
    /// Characters without a glyph still advance, so unknown symbols leave a
    /// gap rather than collapsing the label.
    pub fn prepare(&mut self, r: &mut GlyphRect, x: i32, y: i32, ch: char) {
        r.dx = self.advance();
        if self.font.glyph(ch).is_none() {
            self.glyph = None;
            *r = GlyphRect {
                x1: 1,
                y1: 0,
                x2: 0,
                y2: 0,
                dx: r.dx,
            };
            return;
        }
        self.glyph = Some(ch);
        r.x1 = x;
        r.y1 = y;
        r.x2 = x + (self.font.width() * self.scale) as i32 - 1;
        r.y2 = y + self.height() - 1;
    }

    /// Coverage for scanline `i` of the prepared glyph (0 = top).
    pub fn span(&mut self, i: u32) -> &[CoverType] {
        let Some(ch) = self.glyph else {
            return &self.span[..0];
        };
        let row = i / self.scale;
        for (j, cover) in self.span.iter_mut().enumerate() {
            let col = j as u32 / self.scale;
            *cover = if self.font.is_set(ch, col, row) {
                COVER_FULL
            } else {
                COVER_NONE
            };
        }
        &self.span
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster_font::FONT_5X7;

    #[test]
    fn test_font_properties() {
        let glyph = GlyphRasterBin::new(&FONT_5X7);
        assert_eq!(glyph.height(), 7);
        assert_eq!(glyph.advance(), 6);
        assert_eq!(glyph.width("ABC"), 18);
        assert_eq!(glyph.width(""), 0);
    }

    #[test]
    fn test_scaled_metrics() {
        let glyph = GlyphRasterBin::new(&FONT_5X7).with_scale(2);
        assert_eq!(glyph.height(), 14);
        assert_eq!(glyph.advance(), 12);
        let zero = GlyphRasterBin::new(&FONT_5X7).with_scale(0);
        assert_eq!(zero.scale(), 1);
    }

    #[test]
    fn test_prepare_glyph() {
        let mut glyph = GlyphRasterBin::new(&FONT_5X7);
        let mut r = GlyphRect::default();
        glyph.prepare(&mut r, 10, 5, 'A');
        assert_eq!((r.x1, r.y1, r.x2, r.y2, r.dx), (10, 5, 14, 11, 6));
    }

    #[test]
    fn test_prepare_missing_glyph_advances() {
        let mut glyph = GlyphRasterBin::new(&FONT_5X7);
        let mut r = GlyphRect::default();
        glyph.prepare(&mut r, 10, 5, '~');
        assert!(r.x2 < r.x1);
        assert_eq!(r.dx, 6);
        assert!(glyph.span(0).is_empty());
    }

    #[test]
    fn test_span() {
        let mut glyph = GlyphRasterBin::new(&FONT_5X7);
        let mut r = GlyphRect::default();
        glyph.prepare(&mut r, 0, 0, 'T');
        assert_eq!(glyph.span(0), &[255, 255, 255, 255, 255]);
        assert_eq!(glyph.span(6), &[0, 0, 255, 0, 0]);
    }

    #[test]
    fn test_scaled_span() {
        let mut glyph = GlyphRasterBin::new(&FONT_5X7).with_scale(2);
        let mut r = GlyphRect::default();
        glyph.prepare(&mut r, 0, 0, 'T');
        assert_eq!(r.x2, 9);
        assert_eq!(r.y2, 13);
        assert_eq!(glyph.span(13), &[0, 0, 0, 0, 255, 255, 0, 0, 0, 0]);
    }
}
