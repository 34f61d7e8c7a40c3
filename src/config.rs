//! Demo configuration.

use crate::color::Rgba8;
use crate::error::Error;
use crate::transform::ReflectPivot;

/// Largest translation magnitude `validate` accepts, in pixels.
pub const MAX_TRANSLATION: i32 = 100_000;
/// Largest scale factor magnitude `validate` accepts.
pub const MAX_SCALE: f64 = 100.0;

/// Everything the demo needs to know before the first frame.
///
/// Fields are public; the chained setters are a convenience for front-ends.
/// Call [`validate`](DemoConfig::validate) (done by `TransformDemo::new`)
/// before use.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Id of the window this demo renders into. `WindowClose` events for
    /// other windows are ignored.
    pub window_id: u32,
    pub background: Rgba8,
    pub line_color: Rgba8,
    pub translation_range: (i32, i32),
    /// Degrees.
    pub rotation_range: (f64, f64),
    pub scale_range: (f64, f64),
    pub reflect_pivot: ReflectPivot,
    pub panel_title: String,
    /// Top-left corner of the control panel.
    pub panel_origin: (f64, f64),
    /// Integer magnification of the 5x7 label font.
    pub font_scale: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Computer Graphics Algorithms".to_string(),
            width: 1280,
            height: 720,
            window_id: 1,
            background: Rgba8::WHITE,
            line_color: Rgba8::BLACK,
            translation_range: (-100, 100),
            rotation_range: (0.0, 360.0),
            scale_range: (0.1, 2.0),
            reflect_pivot: ReflectPivot::Origin,
            panel_title: "Graphic Functions".to_string(),
            panel_origin: (10.0, 10.0),
            font_scale: 2,
        }
    }
}

impl DemoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn window_id(mut self, id: u32) -> Self {
        self.window_id = id;
        self
    }

    pub fn background(mut self, c: Rgba8) -> Self {
        self.background = c;
        self
    }

    pub fn line_color(mut self, c: Rgba8) -> Self {
        self.line_color = c;
        self
    }

    pub fn translation_range(mut self, min: i32, max: i32) -> Self {
        self.translation_range = (min, max);
        self
    }

    pub fn rotation_range(mut self, min: f64, max: f64) -> Self {
        self.rotation_range = (min, max);
        self
    }

    pub fn scale_range(mut self, min: f64, max: f64) -> Self {
        self.scale_range = (min, max);
        self
    }

    pub fn reflect_pivot(mut self, pivot: ReflectPivot) -> Self {
        self.reflect_pivot = pivot;
        self
    }

    pub fn panel_origin(mut self, x: f64, y: f64) -> Self {
        self.panel_origin = (x, y);
        self
    }

    pub fn font_scale(mut self, scale: u32) -> Self {
        self.font_scale = scale;
        self
    }

    /// Reject a zero-sized canvas and empty or inverted ranges.
    ///
    /// Translation must stay within `±MAX_TRANSLATION` and scale within
    /// `±MAX_SCALE`, which keeps every transformed point a bounded distance
    /// from the canvas.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidCanvasSize {
                width: self.width,
                height: self.height,
            });
        }
        let (tmin, tmax) = self.translation_range;
        check_range("translation", tmin as f64, tmax as f64, MAX_TRANSLATION as f64)?;
        check_range(
            "rotation",
            self.rotation_range.0,
            self.rotation_range.1,
            f64::MAX,
        )?;
        check_range("scale", self.scale_range.0, self.scale_range.1, MAX_SCALE)?;
        Ok(())
    }
}

fn check_range(name: &'static str, min: f64, max: f64, limit: f64) -> Result<(), Error> {
    let in_bounds = |v: f64| v.is_finite() && v.abs() <= limit;
    if !in_bounds(min) || !in_bounds(max) || min >= max {
        return Err(Error::InvalidRange { name, min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = DemoConfig::default();
        assert_eq!((c.width, c.height), (1280, 720));
        assert_eq!(c.title, "Computer Graphics Algorithms");
        assert_eq!(c.background, Rgba8::WHITE);
        assert_eq!(c.line_color, Rgba8::BLACK);
        assert_eq!(c.reflect_pivot, ReflectPivot::Origin);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_chained_setters() {
        let c = DemoConfig::new()
            .size(320, 200)
            .title("t")
            .window_id(7)
            .reflect_pivot(ReflectPivot::Centroid)
            .translation_range(-10, 10);
        assert_eq!((c.width, c.height, c.window_id), (320, 200, 7));
        assert_eq!(c.title, "t");
        assert_eq!(c.translation_range, (-10, 10));
        assert_eq!(c.reflect_pivot, ReflectPivot::Centroid);
    }

    #[test]
    fn test_validate_rejects_zero_size() {
        let err = DemoConfig::new().size(0, 10).validate().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCanvasSize {
                width: 0,
                height: 10
            }
        ));
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let err = DemoConfig::new().scale_range(2.0, 0.1).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidRange { name: "scale", .. }));
        let err = DemoConfig::new().translation_range(5, 5).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidRange { name: "translation", .. }));
        let err = DemoConfig::new()
            .rotation_range(0.0, f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRange { name: "rotation", .. }));
    }

    #[test]
    fn test_validate_rejects_unbounded_ranges() {
        let err = DemoConfig::new()
            .translation_range(i32::MIN, i32::MAX)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRange { name: "translation", .. }));
        let err = DemoConfig::new().scale_range(0.1, 1e10).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidRange { name: "scale", .. }));

        let edge = DemoConfig::new()
            .translation_range(-MAX_TRANSLATION, MAX_TRANSLATION)
            .scale_range(-MAX_SCALE, MAX_SCALE)
            .rotation_range(-720.0, 720.0);
        assert!(edge.validate().is_ok());
    }
}
