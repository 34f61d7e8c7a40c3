//! Interactive UI controls drawn straight into the frame buffer.
//!
//! Sliders, checkboxes and a push button, plus [`CtrlPanel`], which lays out
//! the transform controls and decides when the panel captures the mouse.
//!
//! Controls take mouse events in canvas coordinates and report whether they
//! consumed them. They render with flat rectangles and the embedded raster
//! font; there is no anti-aliasing anywhere.

use crate::basics::{RectD, COVER_FULL};
use crate::color::Rgba8;
use crate::config::DemoConfig;
use crate::glyph_raster_bin::GlyphRasterBin;
use crate::pixfmt_rgba::PixfmtRgba32;
use crate::renderer_base::RendererBase;
use crate::renderer_primitives::RendererPrimitives;
use crate::renderer_raster_text::{render_raster_htext_solid, text_width};
use crate::transform::TransformParams;

/// The renderer controls draw into.
pub type CtrlRenderer<'a> = RendererBase<PixfmtRgba32<'a>>;

/// Common interface of all controls.
pub trait Ctrl {
    /// Whether (x, y) hits the interactive area.
    fn in_rect(&self, x: f64, y: f64) -> bool;

    fn on_mouse_button_down(&mut self, x: f64, y: f64) -> bool;

    fn on_mouse_button_up(&mut self, x: f64, y: f64) -> bool;

    /// `button_flag` is true while the left button is held.
    fn on_mouse_move(&mut self, x: f64, y: f64, button_flag: bool) -> bool;

    fn render(&self, ren: &mut CtrlRenderer<'_>, glyph: &mut GlyphRasterBin);
}

/// Substitute a value placeholder in `fmt`.
///
/// Understands `%d`, `%.0f`, `%.1f`, `%.2f` and `%.3f`. Text without a
/// placeholder is returned unchanged.
pub fn format_value(fmt: &str, v: f64) -> String {
    fmt.replace("%d", &format!("{}", v.round() as i64))
        .replace("%.0f", &format!("{:.0}", v))
        .replace("%.1f", &format!("{:.1}", v))
        .replace("%.2f", &format!("{:.2}", v))
        .replace("%.3f", &format!("{:.3}", v))
}

fn text_y_centered(y1: f64, y2: f64, glyph: &GlyphRasterBin) -> i32 {
    ((y1 + y2) / 2.0) as i32 - glyph.height() / 2
}

// ============================================================================
// SliderCtrl: horizontal value slider
// ============================================================================

/// Horizontal slider over `[min, max]`.
///
/// The value is stored in user units, so a value set programmatically reads
/// back exactly. With `num_steps > 0` it snaps to `num_steps` equal
/// intervals, which is how integer sliders are built.
/// Clicking anywhere on the track jumps there; dragging follows the pointer
/// until the button is released, even outside the track.
pub struct SliderCtrl {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    value: f64,
    min: f64,
    max: f64,
    num_steps: u32,
    label: String,
    value_format: String,
    border_extra: f64,
    dragging: bool,
    // 0: background, 1: track, 2: pointer, 3: active pointer, 4: text
    colors: [Rgba8; 5],
}

impl SliderCtrl {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            value: 0.5,
            min: 0.0,
            max: 1.0,
            num_steps: 0,
            label: String::new(),
            value_format: "%.2f".to_string(),
            border_extra: 2.0,
            dragging: false,
            colors: [
                Rgba8::new(255, 230, 204, 255),
                Rgba8::new(179, 153, 153, 255),
                Rgba8::new(204, 0, 0, 255),
                Rgba8::new(255, 64, 64, 255),
                Rgba8::BLACK,
            ],
        }
    }

    /// Text drawn to the right of the track. Placeholders per [`format_value`].
    pub fn label(&mut self, fmt: &str) {
        self.label = fmt.to_string();
    }

    /// Text drawn inside the track, e.g. `%d` or `%.2f`.
    pub fn value_format(&mut self, fmt: &str) {
        self.value_format = fmt.to_string();
    }

    /// Set the value range and move the value to its middle.
    pub fn range(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
        self.value = (min + max) / 2.0;
        self.normalize_value();
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the current value, clamped to the range.
    pub fn set_value(&mut self, v: f64) {
        self.value = if v.is_nan() {
            self.min
        } else {
            v.max(self.min).min(self.max)
        };
        self.normalize_value();
    }

    /// Number of discrete steps (0 = continuous).
    pub fn num_steps(&mut self, n: u32) {
        self.num_steps = n;
        self.normalize_value();
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn rect(&self) -> RectD {
        RectD::new(self.x1, self.y1, self.x2, self.y2)
    }

    fn normalize_value(&mut self) {
        let span = self.max - self.min;
        if self.num_steps > 0 && span > 0.0 {
            let step = span / self.num_steps as f64;
            let n = ((self.value - self.min) / step + 0.5).floor();
            self.value = (self.min + n * step).max(self.min).min(self.max);
        }
    }

    fn set_from_x(&mut self, x: f64) {
        let w = self.x2 - self.x1;
        let t = if w > 0.0 {
            ((x - self.x1) / w).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.value = self.min + t * (self.max - self.min);
        self.normalize_value();
    }

    fn pointer_x(&self) -> f64 {
        let span = self.max - self.min;
        let t = if span > 0.0 {
            (self.value - self.min) / span
        } else {
            0.0
        };
        self.x1 + (self.x2 - self.x1) * t
    }
}

impl Ctrl for SliderCtrl {
    fn in_rect(&self, x: f64, y: f64) -> bool {
        let be = self.border_extra;
        x >= self.x1 - be && x <= self.x2 + be && y >= self.y1 - be && y <= self.y2 + be
    }

    fn on_mouse_button_down(&mut self, x: f64, y: f64) -> bool {
        if !self.in_rect(x, y) {
            return false;
        }
        self.dragging = true;
        self.set_from_x(x);
        true
    }

    fn on_mouse_button_up(&mut self, _x: f64, _y: f64) -> bool {
        let was = self.dragging;
        self.dragging = false;
        was
    }

    fn on_mouse_move(&mut self, x: f64, y: f64, button_flag: bool) -> bool {
        if !button_flag {
            return self.on_mouse_button_up(x, y);
        }
        if self.dragging {
            self.set_from_x(x);
            return true;
        }
        false
    }

    fn render(&self, ren: &mut CtrlRenderer<'_>, glyph: &mut GlyphRasterBin) {
        let be = self.border_extra;
        let (x1, y1, x2, y2) = (self.x1 as i32, self.y1 as i32, self.x2 as i32, self.y2 as i32);
        {
            let mut prim = RendererPrimitives::new(ren);
            prim.set_fill_color(self.colors[0]);
            prim.solid_rectangle(x1 - be as i32, y1 - be as i32, x2 + be as i32, y2 + be as i32);
            prim.set_line_color(self.colors[1]);
            prim.rectangle(x1, y1, x2, y2);

            let px = self.pointer_x() as i32;
            let half = ((y2 - y1) / 4).max(2);
            prim.set_fill_color(if self.dragging {
                self.colors[3]
            } else {
                self.colors[2]
            });
            prim.solid_rectangle(px - half, y1, px + half, y2);
        }

        let text_y = text_y_centered(self.y1, self.y2, glyph);
        let value_text = format_value(&self.value_format, self.value());
        let tx = ((self.x1 + self.x2) / 2.0) as i32 - text_width(glyph, &value_text) / 2;
        render_raster_htext_solid(ren, glyph, tx, text_y, &value_text, &self.colors[4]);

        if !self.label.is_empty() {
            let text = format_value(&self.label, self.value());
            let lx = (self.x2 + be) as i32 + glyph.advance();
            render_raster_htext_solid(ren, glyph, lx, text_y, &text, &self.colors[4]);
        }
    }
}

// ============================================================================
// CboxCtrl: checkbox
// ============================================================================

/// Checkbox with a label to its right.
///
/// The box and its label form one hit area. A press followed by a release
/// inside that area toggles the status, the same rule [`ButtonCtrl`] uses
/// for clicks.
pub struct CboxCtrl {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    // right edge of the label, measured when the control is built
    hit_x2: f64,
    label: String,
    status: bool,
    pressed: bool,
    // 0: border, 1: box fill, 2: check, 3: text
    colors: [Rgba8; 4],
}

impl CboxCtrl {
    /// Box of `size` at (x, y); `glyph` measures the label's hit area.
    pub fn new(x: f64, y: f64, size: f64, label: &str, glyph: &GlyphRasterBin) -> Self {
        let label_extent = (glyph.advance() + text_width(glyph, label)) as f64;
        Self {
            x1: x,
            y1: y,
            x2: x + size,
            y2: y + size,
            hit_x2: x + size + label_extent,
            label: label.to_string(),
            status: false,
            pressed: false,
            colors: [
                Rgba8::BLACK,
                Rgba8::new(255, 230, 204, 255),
                Rgba8::new(102, 0, 0, 255),
                Rgba8::BLACK,
            ],
        }
    }

    pub fn set_status(&mut self, s: bool) {
        self.status = s;
    }

    pub fn status(&self) -> bool {
        self.status
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn label_text(&self) -> &str {
        &self.label
    }

    pub fn rect(&self) -> RectD {
        RectD::new(self.x1, self.y1, self.x2, self.y2)
    }
}

impl Ctrl for CboxCtrl {
    fn in_rect(&self, x: f64, y: f64) -> bool {
        x >= self.x1 && x <= self.hit_x2 && y >= self.y1 && y <= self.y2
    }

    fn on_mouse_button_down(&mut self, x: f64, y: f64) -> bool {
        self.pressed = self.in_rect(x, y);
        self.pressed
    }

    fn on_mouse_button_up(&mut self, x: f64, y: f64) -> bool {
        if !std::mem::take(&mut self.pressed) {
            return false;
        }
        if self.in_rect(x, y) {
            self.status = !self.status;
        }
        true
    }

    fn on_mouse_move(&mut self, _x: f64, _y: f64, button_flag: bool) -> bool {
        if !button_flag && self.pressed {
            self.pressed = false;
            return true;
        }
        false
    }

    fn render(&self, ren: &mut CtrlRenderer<'_>, glyph: &mut GlyphRasterBin) {
        let (x1, y1, x2, y2) = (self.x1 as i32, self.y1 as i32, self.x2 as i32, self.y2 as i32);
        {
            let mut prim = RendererPrimitives::new(ren);
            prim.set_line_color(self.colors[0]);
            prim.set_fill_color(self.colors[1]);
            prim.outlined_rectangle(x1, y1, x2, y2);
            if self.status {
                let inset = ((x2 - x1) / 4).max(2);
                prim.set_fill_color(self.colors[2]);
                prim.solid_rectangle(x1 + inset, y1 + inset, x2 - inset, y2 - inset);
            }
        }
        let tx = x2 + glyph.advance();
        let ty = text_y_centered(self.y1, self.y2, glyph);
        render_raster_htext_solid(ren, glyph, tx, ty, &self.label, &self.colors[3]);
    }
}

// ============================================================================
// ButtonCtrl: push button
// ============================================================================

/// Push button. A press followed by a release inside the button is one
/// click, picked up with [`take_clicked`](ButtonCtrl::take_clicked).
pub struct ButtonCtrl {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    label: String,
    pressed: bool,
    clicked: bool,
    // 0: border, 1: face, 2: pressed face, 3: text
    colors: [Rgba8; 4],
}

impl ButtonCtrl {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, label: &str) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            label: label.to_string(),
            pressed: false,
            clicked: false,
            colors: [
                Rgba8::new(179, 153, 153, 255),
                Rgba8::new(255, 230, 204, 255),
                Rgba8::new(230, 179, 153, 255),
                Rgba8::BLACK,
            ],
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn rect(&self) -> RectD {
        RectD::new(self.x1, self.y1, self.x2, self.y2)
    }

    /// Returns true once per completed click.
    pub fn take_clicked(&mut self) -> bool {
        std::mem::take(&mut self.clicked)
    }
}

impl Ctrl for ButtonCtrl {
    fn in_rect(&self, x: f64, y: f64) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    fn on_mouse_button_down(&mut self, x: f64, y: f64) -> bool {
        if self.in_rect(x, y) {
            self.pressed = true;
            return true;
        }
        false
    }

    fn on_mouse_button_up(&mut self, x: f64, y: f64) -> bool {
        if !self.pressed {
            return false;
        }
        self.pressed = false;
        if self.in_rect(x, y) {
            self.clicked = true;
        }
        true
    }

    fn on_mouse_move(&mut self, x: f64, y: f64, button_flag: bool) -> bool {
        if !button_flag && self.pressed {
            // Released outside our view of events; treat as cancelled.
            self.pressed = false;
            return true;
        }
        self.pressed && self.in_rect(x, y)
    }

    fn render(&self, ren: &mut CtrlRenderer<'_>, glyph: &mut GlyphRasterBin) {
        let (x1, y1, x2, y2) = (self.x1 as i32, self.y1 as i32, self.x2 as i32, self.y2 as i32);
        {
            let mut prim = RendererPrimitives::new(ren);
            prim.set_line_color(self.colors[0]);
            prim.set_fill_color(if self.pressed {
                self.colors[2]
            } else {
                self.colors[1]
            });
            prim.outlined_rectangle(x1, y1, x2, y2);
        }
        let tx = ((self.x1 + self.x2) / 2.0) as i32 - text_width(glyph, &self.label) / 2;
        let ty = text_y_centered(self.y1, self.y2, glyph);
        render_raster_htext_solid(ren, glyph, tx, ty, &self.label, &self.colors[3]);
    }
}

// ============================================================================
// CtrlPanel: the "Graphic Functions" window
// ============================================================================

const PANEL_PADDING: f64 = 10.0;
const TITLE_HEIGHT: f64 = 24.0;
const ROW_HEIGHT: f64 = 28.0;
const TRACK_WIDTH: f64 = 200.0;
const TRACK_HEIGHT: f64 = 18.0;

/// Panel holding the transform controls.
///
/// While the pointer is over the panel, or a slider is being dragged, the
/// panel captures the mouse and clicks never reach the canvas.
pub struct CtrlPanel {
    title: String,
    rect: RectD,
    pub translate_x: SliderCtrl,
    pub translate_y: SliderCtrl,
    pub rotation: SliderCtrl,
    pub scale_x: SliderCtrl,
    pub scale_y: SliderCtrl,
    pub reflect_x: CboxCtrl,
    pub reflect_y: CboxCtrl,
    pub clear: ButtonCtrl,
    // 0: background, 1: border, 2: title bar, 3: title text
    colors: [Rgba8; 4],
}

impl CtrlPanel {
    /// Lay out the panel from `config`. `glyph` supplies text metrics.
    pub fn new(config: &DemoConfig, glyph: &GlyphRasterBin) -> Self {
        let (px, py) = config.panel_origin;
        let left = px + PANEL_PADDING;
        let mut row_y = py + TITLE_HEIGHT + PANEL_PADDING;
        let mut next_row = || {
            let y = row_y;
            row_y += ROW_HEIGHT;
            y
        };

        let mut slider = |label: &str, fmt: &str, (min, max): (f64, f64), steps: u32, init: f64| {
            let y = next_row();
            let mut s = SliderCtrl::new(left, y, left + TRACK_WIDTH, y + TRACK_HEIGHT);
            s.range(min, max);
            s.num_steps(steps);
            s.label(label);
            s.value_format(fmt);
            s.set_value(init);
            s
        };

        let (tmin, tmax) = config.translation_range;
        let int_steps = u32::try_from((tmax as i64 - tmin as i64).max(0)).unwrap_or(u32::MAX);
        let trange = (tmin as f64, tmax as f64);
        let translate_x = slider("X Translation", "%d", trange, int_steps, 0.0);
        let translate_y = slider("Y Translation", "%d", trange, int_steps, 0.0);
        let rotation = slider("Rotation", "%.2f", config.rotation_range, 0, 0.0);
        let scale_x = slider("X Scale", "%.2f", config.scale_range, 0, 1.0);
        let scale_y = slider("Y Scale", "%.2f", config.scale_range, 0, 1.0);

        let mut next_row = || {
            let y = row_y;
            row_y += ROW_HEIGHT;
            y
        };
        let reflect_x = CboxCtrl::new(left, next_row(), TRACK_HEIGHT, "X Reflection", glyph);
        let reflect_y = CboxCtrl::new(left, next_row(), TRACK_HEIGHT, "Y Reflection", glyph);

        let button_label = "Clear Drawing";
        let bw = (glyph.width(button_label) + 2 * glyph.advance()) as f64;
        let by = next_row();
        let clear = ButtonCtrl::new(left, by, left + bw, by + TRACK_HEIGHT + 4.0, button_label);

        let widest_label = ["X Translation", "Y Translation", "X Reflection"]
            .iter()
            .map(|l| glyph.width(l))
            .max()
            .unwrap_or(0) as f64;
        let width = PANEL_PADDING * 2.0 + TRACK_WIDTH + glyph.advance() as f64 * 2.0 + widest_label;
        let rect = RectD::new(px, py, px + width, row_y + PANEL_PADDING);

        Self {
            title: config.panel_title.clone(),
            rect,
            translate_x,
            translate_y,
            rotation,
            scale_x,
            scale_y,
            reflect_x,
            reflect_y,
            clear,
            colors: [
                Rgba8::new(240, 240, 240, 255),
                Rgba8::new(110, 110, 128, 255),
                Rgba8::new(41, 74, 122, 255),
                Rgba8::WHITE,
            ],
        }
    }

    pub fn rect(&self) -> RectD {
        self.rect
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn ctrls_mut(&mut self) -> [&mut dyn Ctrl; 8] {
        [
            &mut self.translate_x,
            &mut self.translate_y,
            &mut self.rotation,
            &mut self.scale_x,
            &mut self.scale_y,
            &mut self.reflect_x,
            &mut self.reflect_y,
            &mut self.clear,
        ]
    }

    fn ctrls(&self) -> [&dyn Ctrl; 8] {
        [
            &self.translate_x,
            &self.translate_y,
            &self.rotation,
            &self.scale_x,
            &self.scale_y,
            &self.reflect_x,
            &self.reflect_y,
            &self.clear,
        ]
    }

    /// True if a control is mid-interaction (slider drag, checkbox or
    /// button press).
    pub fn is_active(&self) -> bool {
        self.translate_x.is_dragging()
            || self.translate_y.is_dragging()
            || self.rotation.is_dragging()
            || self.scale_x.is_dragging()
            || self.scale_y.is_dragging()
            || self.reflect_x.is_pressed()
            || self.reflect_y.is_pressed()
            || self.clear.is_pressed()
    }

    /// Whether mouse input at (x, y) belongs to the UI rather than the canvas.
    pub fn wants_capture_mouse(&self, x: f64, y: f64) -> bool {
        self.is_active() || self.rect.hit_test(x, y)
    }

    /// Returns true if the panel captured the press.
    pub fn on_mouse_button_down(&mut self, x: f64, y: f64) -> bool {
        if !self.wants_capture_mouse(x, y) {
            return false;
        }
        for ctrl in self.ctrls_mut() {
            if ctrl.on_mouse_button_down(x, y) {
                break;
            }
        }
        true
    }

    pub fn on_mouse_button_up(&mut self, x: f64, y: f64) -> bool {
        let mut consumed = false;
        for ctrl in self.ctrls_mut() {
            consumed |= ctrl.on_mouse_button_up(x, y);
        }
        consumed
    }

    pub fn on_mouse_move(&mut self, x: f64, y: f64, button_flag: bool) -> bool {
        let mut consumed = false;
        for ctrl in self.ctrls_mut() {
            consumed |= ctrl.on_mouse_move(x, y, button_flag);
        }
        consumed
    }

    /// Current control values as transform parameters.
    pub fn params(&self) -> TransformParams {
        TransformParams {
            tx: self.translate_x.value().round() as i32,
            ty: self.translate_y.value().round() as i32,
            angle: self.rotation.value(),
            sx: self.scale_x.value(),
            sy: self.scale_y.value(),
            reflect_x: self.reflect_x.status(),
            reflect_y: self.reflect_y.status(),
        }
    }

    /// Move the controls to `params`, clamped to each control's range.
    pub fn set_params(&mut self, params: &TransformParams) {
        self.translate_x.set_value(params.tx as f64);
        self.translate_y.set_value(params.ty as f64);
        self.rotation.set_value(params.angle);
        self.scale_x.set_value(params.sx);
        self.scale_y.set_value(params.sy);
        self.reflect_x.set_status(params.reflect_x);
        self.reflect_y.set_status(params.reflect_y);
    }

    /// True once per click of the "Clear Drawing" button.
    pub fn take_clear_clicked(&mut self) -> bool {
        self.clear.take_clicked()
    }

    pub fn render(&self, ren: &mut CtrlRenderer<'_>, glyph: &mut GlyphRasterBin) {
        let r = self.rect;
        let (x1, y1, x2, y2) = (r.x1 as i32, r.y1 as i32, r.x2 as i32, r.y2 as i32);
        let title_y2 = y1 + TITLE_HEIGHT as i32;
        {
            let mut prim = RendererPrimitives::new(ren);
            prim.set_line_color(self.colors[1]);
            prim.set_fill_color(self.colors[0]);
            prim.outlined_rectangle(x1, y1, x2, y2);
            prim.set_fill_color(self.colors[2]);
            prim.solid_rectangle(x1 + 1, y1 + 1, x2 - 1, title_y2);
        }
        ren.blend_hline(x1, title_y2, x2, &self.colors[1], COVER_FULL);
        let ty = text_y_centered(r.y1, r.y1 + TITLE_HEIGHT, glyph);
        render_raster_htext_solid(
            ren,
            glyph,
            x1 + PANEL_PADDING as i32,
            ty,
            &self.title,
            &self.colors[3],
        );

        for ctrl in self.ctrls() {
            ctrl.render(ren, glyph);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
