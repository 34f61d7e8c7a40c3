//! The clicked points and their per-frame transformed copy.

use crate::basics::PointI;
use crate::transform::{transform_points, ReflectPivot, TransformParams};

/// Ordered list of clicked points plus the transformed list derived from it.
///
/// Points are only ever appended or cleared all at once. The transformed
/// list is rebuilt in full by [`recompute`](PointStore::recompute); it is
/// never edited in place.
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    original: Vec<PointI>,
    transformed: Vec<PointI>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, p: PointI) {
        self.original.push(p);
    }

    /// Empty both lists.
    pub fn clear(&mut self) {
        self.original.clear();
        self.transformed.clear();
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// True once there is at least one segment to draw.
    pub fn has_segments(&self) -> bool {
        self.original.len() >= 2
    }

    pub fn original(&self) -> &[PointI] {
        &self.original
    }

    pub fn transformed(&self) -> &[PointI] {
        &self.transformed
    }

    /// Rebuild the transformed list from the originals and `params`.
    pub fn recompute(&mut self, params: &TransformParams, pivot: ReflectPivot) -> &[PointI] {
        transform_points(&self.original, params, pivot, &mut self.transformed);
        &self.transformed
    }
}

impl Extend<PointI> for PointStore {
    fn extend<I: IntoIterator<Item = PointI>>(&mut self, iter: I) {
        self.original.extend(iter);
    }
}

// ============================================================================
// Tests
// ============================================================================
