//! Point transforms: translate, rotate, scale, reflect.
//!
//! Every function works on integer pixel points. Rotation and scaling are
//! computed in `f64` and truncated toward zero, so composing them is lossy by
//! up to one pixel per step. Results that leave the `i32` range saturate.
//!
//! A frame applies the four operations to each point in a fixed order:
//! translate, rotate about the centroid, scale about the centroid, reflect.
//! These do not commute; reordering them changes the output.

use crate::basics::{deg2rad, PointI};

// ============================================================================
// Parameters
// ============================================================================

/// Where a reflection mirrors about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReflectPivot {
    /// Negate coordinates about (0, 0). A shape on a normal canvas ends up
    /// entirely off-screen when either flag is set.
    #[default]
    Origin,
    /// Mirror about the shape centroid, like rotation and scaling.
    Centroid,
}

/// Per-frame transform parameters, read from the controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    pub tx: i32,
    pub ty: i32,
    /// Rotation in degrees.
    pub angle: f64,
    pub sx: f64,
    pub sy: f64,
    pub reflect_x: bool,
    pub reflect_y: bool,
}

impl TransformParams {
    /// The identity: no translation, no rotation, unit scale, no reflection.
    pub const IDENTITY: TransformParams = TransformParams {
        tx: 0,
        ty: 0,
        angle: 0.0,
        sx: 1.0,
        sy: 1.0,
        reflect_x: false,
        reflect_y: false,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for TransformParams {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ============================================================================
// Primitive operations
// ============================================================================

/// Arithmetic mean of all points, truncated toward zero.
///
/// Returns `None` for an empty slice.
pub fn centroid(points: &[PointI]) -> Option<PointI> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as i64;
    let (sx, sy) = points.iter().fold((0i64, 0i64), |(sx, sy), p| {
        (sx + p.x as i64, sy + p.y as i64)
    });
    Some(PointI::new((sx / n) as i32, (sy / n) as i32))
}

#[inline]
pub fn translate(p: PointI, tx: i32, ty: i32) -> PointI {
    PointI::new(p.x.saturating_add(tx), p.y.saturating_add(ty))
}

/// Rotate `p` by `angle` degrees about `origin`.
pub fn rotate(p: PointI, angle: f64, origin: PointI) -> PointI {
    let (sin, cos) = deg2rad(angle).sin_cos();
    let dx = p.x as f64 - origin.x as f64;
    let dy = p.y as f64 - origin.y as f64;
    PointI::new(
        (origin.x as f64 + dx * cos - dy * sin) as i32,
        (origin.y as f64 + dx * sin + dy * cos) as i32,
    )
}

/// Scale `p` about `origin` with independent factors.
pub fn scale(p: PointI, sx: f64, sy: f64, origin: PointI) -> PointI {
    PointI::new(
        (origin.x as f64 + (p.x as f64 - origin.x as f64) * sx) as i32,
        (origin.y as f64 + (p.y as f64 - origin.y as f64) * sy) as i32,
    )
}

/// Negate x and/or y about the absolute origin.
#[inline]
pub fn reflect(p: PointI, flip_x: bool, flip_y: bool) -> PointI {
    reflect_about(p, flip_x, flip_y, PointI::ORIGIN)
}

/// Mirror x and/or y about `origin`.
#[inline]
pub fn reflect_about(p: PointI, flip_x: bool, flip_y: bool, origin: PointI) -> PointI {
    let mirror = |v: i32, o: i32| {
        (2 * o as i64 - v as i64).clamp(i32::MIN as i64, i32::MAX as i64) as i32
    };
    PointI::new(
        if flip_x { mirror(p.x, origin.x) } else { p.x },
        if flip_y { mirror(p.y, origin.y) } else { p.y },
    )
}

// ============================================================================
// Pipeline
// ============================================================================

/// Apply the full pipeline to one point, with `center` as the pivot.
pub fn transform_point(
    p: PointI,
    center: PointI,
    params: &TransformParams,
    pivot: ReflectPivot,
) -> PointI {
    let p = translate(p, params.tx, params.ty);
    let p = rotate(p, params.angle, center);
    let p = scale(p, params.sx, params.sy, center);
    match pivot {
        ReflectPivot::Origin => reflect(p, params.reflect_x, params.reflect_y),
        ReflectPivot::Centroid => reflect_about(p, params.reflect_x, params.reflect_y, center),
    }
}

/// Recompute `out` from `points`.
///
/// `out` is cleared first. The centroid is taken over the untransformed
/// points. Fewer than two points leave `out` empty, since there is no
/// segment to draw.
pub fn transform_points(
    points: &[PointI],
    params: &TransformParams,
    pivot: ReflectPivot,
    out: &mut Vec<PointI>,
) {
    out.clear();
    if points.len() < 2 {
        return;
    }
    let Some(center) = centroid(points) else {
        return;
    };
    out.extend(
        points
            .iter()
            .map(|&p| transform_point(p, center, params, pivot)),
    );
}

// ============================================================================
// Tests
// ============================================================================
