//! Browser front-end for the transform demo.
//!
//! The page forwards canvas mouse events to a [`DemoHandle`] and, once per
//! `requestAnimationFrame`, calls [`DemoHandle::render_frame`]. The pixels
//! stay in wasm memory; the page wraps them without copying:
//!
//! ```js
//! handle.render_frame();
//! const px = new Uint8ClampedArray(memory.buffer, handle.frame_ptr(), handle.frame_len());
//! ctx.putImageData(new ImageData(px, handle.width(), handle.height()), 0, 0);
//! ```
//!
//! The view is valid until the next call into the module.

use cg_algorithms::{DemoConfig, Event, MouseButton, TransformDemo};
use wasm_bindgen::prelude::*;

/// Map a DOM `MouseEvent.button` value to a demo button.
fn button_from_dom(button: u8) -> Option<MouseButton> {
    match button {
        0 => Some(MouseButton::Left),
        1 => Some(MouseButton::Middle),
        2 => Some(MouseButton::Right),
        _ => None,
    }
}

#[wasm_bindgen]
pub struct DemoHandle {
    demo: TransformDemo,
    pending: Vec<Event>,
    frame: Vec<u8>,
}

#[wasm_bindgen]
impl DemoHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<DemoHandle, JsError> {
        let demo = TransformDemo::new(DemoConfig::new().size(width, height))?;
        let frame = vec![0u8; demo.frame_len()];
        Ok(DemoHandle {
            demo,
            pending: Vec::new(),
            frame,
        })
    }

    pub fn mouse_down(&mut self, x: i32, y: i32, button: u8) {
        if let Some(button) = button_from_dom(button) {
            self.pending.push(Event::MouseDown { x, y, button });
        }
    }

    pub fn mouse_up(&mut self, x: i32, y: i32, button: u8) {
        if let Some(button) = button_from_dom(button) {
            self.pending.push(Event::MouseUp { x, y, button });
        }
    }

    /// `buttons` is the DOM `MouseEvent.buttons` bitmask.
    pub fn mouse_move(&mut self, x: i32, y: i32, buttons: u16) {
        self.pending.push(Event::MouseMove {
            x,
            y,
            buttons_down: buttons & 1 != 0,
        });
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.pending.push(Event::Resized { width, height });
    }

    /// The page is going away.
    pub fn close(&mut self) {
        self.pending.push(Event::WindowClose {
            window_id: self.demo.config().window_id,
        });
    }

    pub fn clear(&mut self) {
        self.demo.clear();
    }

    /// Run one frame over the queued events into the frame buffer.
    pub fn render_frame(&mut self) -> Result<(), JsError> {
        self.demo.frame_into(self.pending.drain(..), &mut self.frame)?;
        Ok(())
    }

    /// Address of the RGBA frame buffer in wasm memory.
    pub fn frame_ptr(&self) -> *const u8 {
        self.frame.as_ptr()
    }

    /// Length of the frame buffer in bytes.
    pub fn frame_len(&self) -> usize {
        self.frame.len()
    }

    pub fn is_running(&self) -> bool {
        self.demo.is_running()
    }

    pub fn title(&self) -> String {
        self.demo.config().title.clone()
    }

    pub fn width(&self) -> u32 {
        self.demo.config().width
    }

    pub fn height(&self) -> u32 {
        self.demo.config().height
    }

    pub fn point_count(&self) -> usize {
        self.demo.points().len()
    }

    /// Transformed points of the last frame as flat `[x0, y0, x1, y1, ...]`.
    pub fn transformed_points(&self) -> js_sys::Float64Array {
        let flat: Vec<f64> = self
            .demo
            .transformed()
            .iter()
            .flat_map(|p| [p.x as f64, p.y as f64])
            .collect();
        js_sys::Float64Array::from(flat.as_slice())
    }
}

/// Get the library version string.
#[wasm_bindgen]
pub fn version() -> String {
    format!("cg-algorithms {}", env!("CARGO_PKG_VERSION"))
}
