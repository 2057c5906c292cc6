//! Snap functionality for aligning points to the dot grid.

use kurbo::Point;

/// Snap a point to the nearest grid intersection.
///
/// Each axis is quantized independently: `(v / spacing).round() * spacing`.
/// `f64::round` rounds halfway cases away from zero, so a point exactly
/// between two grid lines snaps outward from the origin on that axis.
/// Idempotent: snapping an already-snapped point is a no-op.
pub fn snap_to_grid(point: Point, spacing: f64) -> Point {
    debug_assert!(spacing > 0.0, "grid spacing must be positive");
    Point::new(
        (point.x / spacing).round() * spacing,
        (point.y / spacing).round() * spacing,
    )
}

/// Canonical form of a snapped point, used for closure-detection
/// membership tests.
///
/// Compares and hashes by exact bit pattern, with negative zero normalized
/// to positive zero so that points snapped from either side of an axis
/// compare equal. Only ever constructed from snapped points, so bit
/// equality is exact equality: two clicks that snap to the same grid
/// intersection always produce identical f64 multiples of the spacing.
#[derive(Debug, Clone, Copy)]
pub struct VertexKey {
    x: f64,
    y: f64,
}

impl VertexKey {
    /// Canonicalize a snapped point.
    pub fn new(point: Point) -> Self {
        // +0.0 turns -0.0 into 0.0 and leaves every other value alone.
        Self {
            x: point.x + 0.0,
            y: point.y + 0.0,
        }
    }

    /// The grid point this key stands for.
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl PartialEq for VertexKey {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for VertexKey {}

impl std::hash::Hash for VertexKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}
