/// Errors raised while setting up a frame or talking to the platform.
///
/// Per-frame drawing never fails; everything here happens at startup or at
/// the presentation seam.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvasSize { width: u32, height: u32 },

    #[error("frame buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall { needed: usize, got: usize },

    #[error("row stride {stride} too short: need at least {needed} bytes")]
    StrideTooSmall { stride: usize, needed: usize },

    #[error("invalid {name} range [{min}, {max}]")]
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("platform error: {0}")]
    Platform(String),
}
