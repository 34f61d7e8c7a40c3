//! RGBA color with 8 bits per channel.
//!
//! Non-premultiplied, linear. The fixed-point helpers (`multiply`, `lerp`)
//! are what the pixel format uses to blend partial covers.

use crate::basics::CoverType;

/// RGBA color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_SHIFT: u32 = 8;
    pub const BASE_MSB: u32 = 1 << (Self::BASE_SHIFT - 1);

    pub const BLACK: Rgba8 = Rgba8::from_rgba_u8(0, 0, 0, 255);
    pub const WHITE: Rgba8 = Rgba8::from_rgba_u8(255, 255, 255, 255);
    pub const TRANSPARENT: Rgba8 = Rgba8::from_rgba_u8(0, 0, 0, 0);

    pub fn new(r: u32, g: u32, b: u32, a: u32) -> Self {
        Self {
            r: r as u8,
            g: g as u8,
            b: b as u8,
            a: a as u8,
        }
    }

    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Bytes in R, G, B, A order, as stored by `PixfmtRgba32`.
    pub fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Fixed-point multiply, exact over u8.
    /// `(a * b + 128) >> 8`, with rounding correction.
    #[inline]
    pub fn multiply(a: u8, b: u8) -> u8 {
        let t: u32 = a as u32 * b as u32 + Self::BASE_MSB;
        (((t >> Self::BASE_SHIFT) + t) >> Self::BASE_SHIFT) as u8
    }

    /// Multiply a color component by a cover.
    #[inline]
    pub fn mult_cover(a: u8, b: CoverType) -> u8 {
        Self::multiply(a, b)
    }

    /// Interpolate p to q by a.
    #[inline]
    pub fn lerp(p: u8, q: u8, a: u8) -> u8 {
        let t = (q as i32 - p as i32) * a as i32 + Self::BASE_MSB as i32 - (p > q) as i32;
        (p as i32 + (((t >> Self::BASE_SHIFT) + t) >> Self::BASE_SHIFT)) as u8
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_constants() {
        let c = Rgba8::new(10, 20, 30, 255);
        assert_eq!(c.to_array(), [10, 20, 30, 255]);
        assert_eq!(Rgba8::TRANSPARENT.a, 0);
        assert_eq!(Rgba8::BLACK, Rgba8::new(0, 0, 0, 255));
    }

    #[test]
    fn test_multiply_bounds() {
        assert_eq!(Rgba8::multiply(255, 255), 255);
        assert_eq!(Rgba8::multiply(0, 255), 0);
        assert_eq!(Rgba8::multiply(255, 0), 0);
        assert_eq!(Rgba8::multiply(128, 255), 128);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(Rgba8::lerp(0, 200, 0), 0);
        assert_eq!(Rgba8::lerp(0, 200, 255), 200);
        assert_eq!(Rgba8::lerp(200, 0, 255), 0);
        let mid = Rgba8::lerp(0, 255, 128);
        assert!((127..=129).contains(&mid));
    }
}
