//! Foundation types and constants.
//!
//! Integer points and rectangles, cover constants, and degree-to-radian
//! conversion. Everything else in the crate depends on these.

use core::ops::{Add, Neg, Sub};

// ============================================================================
// Cover constants
// ============================================================================

/// The type used for per-pixel coverage values.
pub type CoverType = u8;

pub const COVER_SHIFT: u32 = 8;
pub const COVER_SIZE: u32 = 1 << COVER_SHIFT;
pub const COVER_MASK: u32 = COVER_SIZE - 1;
pub const COVER_NONE: CoverType = 0;
pub const COVER_FULL: CoverType = COVER_MASK as CoverType;

// ============================================================================
// Mathematical constants
// ============================================================================

pub const PI: f64 = std::f64::consts::PI;

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

// ============================================================================
// PointI
// ============================================================================

/// A point on the integer pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointI {
    pub x: i32,
    pub y: i32,
}

impl PointI {
    pub const ORIGIN: PointI = PointI { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for PointI {
    type Output = PointI;

    fn add(self, rhs: PointI) -> PointI {
        PointI::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PointI {
    type Output = PointI;

    fn sub(self, rhs: PointI) -> PointI {
        PointI::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for PointI {
    type Output = PointI;

    fn neg(self) -> PointI {
        PointI::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for PointI {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two inclusive corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Normalize so that x1 <= x2 and y1 <= y2, swapping if needed.
    pub fn normalize(&mut self) -> &Self {
        if self.x1 > self.x2 {
            core::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            core::mem::swap(&mut self.y1, &mut self.y2);
        }
        self
    }

    /// Clip this rectangle to the intersection with `r`.
    /// Returns `true` if the result is a valid (non-empty) rectangle.
    pub fn clip(&mut self, r: &Self) -> bool {
        if self.x2 > r.x2 {
            self.x2 = r.x2;
        }
        if self.y2 > r.y2 {
            self.y2 = r.y2;
        }
        if self.x1 < r.x1 {
            self.x1 = r.x1;
        }
        if self.y1 < r.y1 {
            self.y1 = r.y1;
        }
        self.is_valid()
    }

    /// Returns `true` if the rectangle is valid (non-empty).
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Returns `true` if the point (x, y) is inside the rectangle.
    pub fn hit_test(&self, x: T, y: T) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

/// Rectangle with `i32` coordinates.
pub type RectI = Rect<i32>;
/// Rectangle with `f64` coordinates.
pub type RectD = Rect<f64>;

// ============================================================================
// Tests
// ============================================================================
