//! The interactive transform demo and its frame loop.
//!
//! [`TransformDemo`] is the whole application state: the clicked points,
//! the control panel and the run flag. A front-end feeds it [`Event`]s and a
//! renderer once per frame; [`run`] does that against any [`Platform`].

use log::{debug, info, trace};

use crate::basics::PointI;
use crate::config::DemoConfig;
use crate::ctrl::CtrlPanel;
use crate::error::Error;
use crate::glyph_raster_bin::GlyphRasterBin;
use crate::pixfmt_rgba::{PixfmtRgba32, BPP};
use crate::point_store::PointStore;
use crate::raster_font::FONT_5X7;
use crate::renderer_base::RendererBase;
use crate::renderer_primitives::RendererPrimitives;
use crate::rendering_buffer::RowAccessor;
use crate::transform::TransformParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Input delivered to the demo. Coordinates are canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Quit,
    WindowClose {
        window_id: u32,
    },
    Resized {
        width: u32,
        height: u32,
    },
    MouseDown {
        x: i32,
        y: i32,
        button: MouseButton,
    },
    MouseUp {
        x: i32,
        y: i32,
        button: MouseButton,
    },
    /// `buttons_down` is true while the left button is held.
    MouseMove {
        x: i32,
        y: i32,
        buttons_down: bool,
    },
}

// ============================================================================
// TransformDemo
// ============================================================================

pub struct TransformDemo {
    config: DemoConfig,
    state: RunState,
    points: PointStore,
    params: TransformParams,
    panel: CtrlPanel,
    glyph: GlyphRasterBin<'static>,
}

impl TransformDemo {
    pub fn new(config: DemoConfig) -> Result<Self, Error> {
        config.validate()?;
        let glyph = GlyphRasterBin::new(&FONT_5X7).with_scale(config.font_scale);
        let panel = CtrlPanel::new(&config, &glyph);
        info!(
            "{}: {}x{} canvas, reflect pivot {:?}",
            config.title, config.width, config.height, config.reflect_pivot
        );
        Ok(Self {
            config,
            state: RunState::Running,
            points: PointStore::new(),
            params: TransformParams::IDENTITY,
            panel,
            glyph,
        })
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Parameters as of the last [`update`](Self::update).
    pub fn params(&self) -> &TransformParams {
        &self.params
    }

    /// Move the controls to `params`, as if the user had set them.
    pub fn set_params(&mut self, params: &TransformParams) {
        self.panel.set_params(params);
        self.params = self.panel.params();
    }

    /// The clicked points, in click order.
    pub fn points(&self) -> &[PointI] {
        self.points.original()
    }

    /// The transformed points of the last rendered frame.
    pub fn transformed(&self) -> &[PointI] {
        self.points.transformed()
    }

    pub fn panel(&self) -> &CtrlPanel {
        &self.panel
    }

    /// Drop all points, original and transformed.
    pub fn clear(&mut self) {
        debug!("clearing {} points", self.points.len());
        self.points.clear();
    }

    fn stop(&mut self) {
        if self.state == RunState::Running {
            info!("{}: stopping", self.config.title);
        }
        self.state = RunState::Stopped;
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Quit => self.stop(),
            Event::WindowClose { window_id } => {
                if window_id == self.config.window_id {
                    self.stop();
                }
            }
            Event::Resized { width, height } => {
                debug!(
                    "window resized to {}x{}, canvas stays {}x{}",
                    width, height, self.config.width, self.config.height
                );
            }
            Event::MouseDown { x, y, button } => {
                if button != MouseButton::Left {
                    return;
                }
                if self.panel.on_mouse_button_down(x as f64, y as f64) {
                    return;
                }
                let p = PointI::new(x, y);
                self.points.push(p);
                debug!("point {} added at ({}, {})", self.points.len(), p.x, p.y);
            }
            Event::MouseUp { x, y, button } => {
                if button == MouseButton::Left {
                    self.panel.on_mouse_button_up(x as f64, y as f64);
                }
            }
            Event::MouseMove { x, y, buttons_down } => {
                self.panel.on_mouse_move(x as f64, y as f64, buttons_down);
            }
        }
    }

    /// Read the controls into the frame parameters.
    pub fn update(&mut self) {
        if self.panel.take_clear_clicked() {
            self.clear();
        }
        self.params = self.panel.params();
    }

    /// Draw the frame: background, transformed polyline, control panel.
    pub fn render(&mut self, ren: &mut RendererBase<PixfmtRgba32<'_>>) {
        ren.clear(&self.config.background);

        let transformed = self
            .points
            .recompute(&self.params, self.config.reflect_pivot);
        if transformed.len() >= 2 {
            let mut prim = RendererPrimitives::new(ren);
            prim.set_line_color(self.config.line_color);
            prim.polyline(transformed);
        }
        trace!("frame: {} transformed points", transformed.len());

        self.panel.render(ren, &mut self.glyph);
    }

    /// One loop iteration: drain `events`, update, render.
    pub fn frame<I>(&mut self, events: I, ren: &mut RendererBase<PixfmtRgba32<'_>>)
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            self.handle_event(event);
        }
        self.update();
        self.render(ren);
    }

    /// Size in bytes of one RGBA frame.
    pub fn frame_len(&self) -> usize {
        self.config.width as usize * self.config.height as usize * BPP
    }

    /// Run [`frame`](Self::frame) into a tightly packed RGBA buffer.
    pub fn frame_into<I>(&mut self, events: I, buf: &mut [u8]) -> Result<(), Error>
    where
        I: IntoIterator<Item = Event>,
    {
        let (w, h) = (self.config.width, self.config.height);
        let rbuf = RowAccessor::new(buf, w, h, w as usize * BPP)?;
        let mut ren = RendererBase::new(PixfmtRgba32::new(rbuf));
        self.frame(events, &mut ren);
        Ok(())
    }
}

// ============================================================================
// Platform seam
// ============================================================================

/// A windowing backend: delivers input and shows finished frames.
pub trait Platform {
    /// All events queued since the last call.
    fn poll_events(&mut self) -> Vec<Event>;

    /// Show a tightly packed RGBA frame.
    fn present(&mut self, rgba: &[u8], width: u32, height: u32) -> Result<(), Error>;
}

/// Drive `demo` until it stops.
///
/// The frame buffer is allocated once. A failed `present` ends the loop with
/// that error.
pub fn run<P: Platform + ?Sized>(demo: &mut TransformDemo, platform: &mut P) -> Result<(), Error> {
    let (w, h) = (demo.config.width, demo.config.height);
    let mut buf = vec![0u8; demo.frame_len()];
    let mut frames = 0u64;

    while demo.is_running() {
        let events = platform.poll_events();
        demo.frame_into(events, &mut buf)?;
        platform.present(&buf, w, h)?;
        frames += 1;
    }
    info!("{}: {} frames rendered", demo.config.title, frames);
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
