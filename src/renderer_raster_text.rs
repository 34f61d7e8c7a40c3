//! Raster text renderer for the embedded bitmap font.

use crate::glyph_raster_bin::{GlyphRasterBin, GlyphRect};
use crate::pixfmt_rgba::PixelFormat;
use crate::renderer_base::RendererBase;

/// Render a horizontal text string with a solid color.
///
/// (x, y) is the top-left corner of the first glyph. Each glyph row is one
/// `blend_solid_hspan` call, so the text is clipped like everything else.
pub fn render_raster_htext_solid<PF: PixelFormat>(
    ren: &mut RendererBase<PF>,
    glyph: &mut GlyphRasterBin,
    x: i32,
    y: i32,
    text: &str,
    color: &PF::ColorType,
) {
    let mut x = x;
    let mut r = GlyphRect::default();

    for ch in text.chars() {
        glyph.prepare(&mut r, x, y, ch);
        if r.x2 >= r.x1 {
            for i in r.y1..=r.y2 {
                let span = glyph.span((i - r.y1) as u32);
                ren.blend_solid_hspan(r.x1, i, r.x2 - r.x1 + 1, color, span);
            }
        }
        x += r.dx;
    }
}

/// Width in pixels of `text` as drawn by [`render_raster_htext_solid`].
pub fn text_width(glyph: &GlyphRasterBin, text: &str) -> i32 {
    glyph.width(text)
}
