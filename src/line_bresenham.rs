//! Bresenham line rasterization.
//!
//! Integer-only line stepping over the pixel grid. Unlike a subpixel DDA,
//! the endpoints here are whole pixels and both endpoints are plotted.

use crate::basics::PointI;

// ============================================================================
// LineBresenham
// ============================================================================

/// Bresenham line state machine for one segment.
///
/// Yields every pixel from `p1` to `p2` inclusive. Each step compares the
/// doubled error term against both deltas; when both tests pass the line
/// moves diagonally. Deltas and the error term are `i64`, so any two `i32`
/// endpoints are valid.
#[derive(Debug, Clone)]
pub struct LineBresenham {
    cur: PointI,
    end: PointI,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl LineBresenham {
    pub fn new(p1: PointI, p2: PointI) -> Self {
        let dx = (p2.x as i64 - p1.x as i64).abs();
        let dy = (p2.y as i64 - p1.y as i64).abs();
        Self {
            cur: p1,
            end: p2,
            dx,
            dy,
            sx: if p1.x < p2.x { 1 } else { -1 },
            sy: if p1.y < p2.y { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }

    /// Number of pixels the segment covers, including both endpoints.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        self.dx.max(self.dy) as u64 + 1
    }

    /// Current position (the next pixel to be yielded).
    #[inline]
    pub fn current(&self) -> PointI {
        self.cur
    }

    /// Target endpoint.
    #[inline]
    pub fn end(&self) -> PointI {
        self.end
    }

    #[inline]
    fn step(&mut self) {
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.cur.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.cur.y += self.sy;
        }
    }
}

impl Iterator for LineBresenham {
    type Item = PointI;

    fn next(&mut self) -> Option<PointI> {
        if self.done {
            return None;
        }
        let p = self.cur;
        if p == self.end {
            self.done = true;
        } else {
            self.step();
        }
        Some(p)
    }
}

/// Collect every pixel of the segment `p1`..=`p2`.
pub fn line_points(p1: PointI, p2: PointI) -> Vec<PointI> {
    LineBresenham::new(p1, p2).collect()
}

// ============================================================================
// Tests
// ============================================================================
