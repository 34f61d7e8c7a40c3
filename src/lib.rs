//! # cg-algorithms
//!
//! An interactive teaching demo for 2D transformations, rendered entirely in
//! software.
//!
//! The user clicks points on a canvas and moves sliders for translation,
//! rotation and scale, plus two reflection checkboxes. Every frame the
//! clicked points are run through the transform pipeline and joined with
//! Bresenham lines.
//!
//! ## Architecture
//!
//! Rendering goes through a small pipeline of layers, each borrowing the one
//! below:
//!
//! 1. **Rendering buffer**: row access over a caller-owned RGBA byte slice
//! 2. **Pixel format**: reads and blends `Rgba8` pixels
//! 3. **Base renderer**: clips every operation to the canvas
//! 4. **Primitives**: Bresenham lines, polylines and rectangles
//!
//! On top of that sit the transform pipeline, the control panel and the
//! [`app::TransformDemo`] frame loop. Front-ends (the wasm demo, the
//! snapshot tool) implement [`app::Platform`] or call
//! [`app::TransformDemo::frame_into`] directly.

// Foundation
pub mod basics;
pub mod color;
pub mod error;
pub mod rendering_buffer;

// Pixel formats & renderers
pub mod pixfmt_rgba;
pub mod renderer_base;
pub mod renderer_primitives;

// Line rasterization
pub mod line_bresenham;

// Geometry
pub mod point_store;
pub mod transform;

// Text
pub mod glyph_raster_bin;
pub mod raster_font;
pub mod renderer_raster_text;

// Controls & application
pub mod app;
pub mod config;
pub mod ctrl;

pub use app::{run, Event, MouseButton, Platform, RunState, TransformDemo};
pub use basics::PointI;
pub use color::Rgba8;
pub use config::DemoConfig;
pub use error::Error;
pub use transform::{ReflectPivot, TransformParams};
