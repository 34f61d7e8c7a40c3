//! Rendering buffer: row-oriented access to pixel data.
//!
//! [`RowAccessor`] borrows a caller-owned byte buffer and hands out row
//! slices computed as `y * stride`. The buffer is top-down (row 0 is the top
//! of the frame), which is what both the browser canvas and BMP top-down
//! output expect.

use crate::error::Error;
use crate::pixfmt_rgba::BPP;

/// Row accessor over a borrowed byte buffer.
pub struct RowAccessor<'a> {
    buf: &'a mut [u8],
    width: u32,
    height: u32,
    stride: usize,
}

impl<'a> RowAccessor<'a> {
    /// Attach to `buf`, which must hold at least `height * stride` bytes.
    ///
    /// `stride` must fit a full row of `width` RGBA pixels.
    pub fn new(buf: &'a mut [u8], width: u32, height: u32, stride: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidCanvasSize { width, height });
        }
        let row_bytes = width as usize * BPP;
        if stride < row_bytes {
            return Err(Error::StrideTooSmall {
                stride,
                needed: row_bytes,
            });
        }
        let needed = height as usize * stride;
        if buf.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                got: buf.len(),
            });
        }
        Ok(Self {
            buf,
            width,
            height,
            stride,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Get an immutable slice for row `y` (`stride` bytes).
    pub fn row_slice(&self, y: u32) -> &[u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let start = y as usize * self.stride;
        &self.buf[start..start + self.stride]
    }

    /// Get a mutable slice for row `y` (`stride` bytes).
    pub fn row_slice_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let start = y as usize * self.stride;
        &mut self.buf[start..start + self.stride]
    }
}

// ============================================================================
// Tests
// ============================================================================
