//! Line segment value type.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One straight (possibly arced) tube unit between two world points.
///
/// Segments are authored externally and read wholesale by the mesh
/// builder; the builder never creates or mutates them.
///
/// # Example
///
/// ```
/// use segment_types::LineSegment;
/// use nalgebra::Point3;
///
/// let segment = LineSegment::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.0, 0.0, 5.0),
/// )
/// .with_thickness(0.1)
/// .with_subdivisions(4)
/// .with_amplitude(1.5);
///
/// assert!((segment.length() - 5.0).abs() < 1e-12);
/// assert!(!segment.is_degenerate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineSegment {
    /// World-space start point.
    pub start: Point3<f64>,

    /// World-space end point.
    pub end: Point3<f64>,

    /// Half-width of the square cross-section, applied symmetrically on
    /// both local cross axes. Must be non-negative and finite.
    pub thickness: f64,

    /// Number of interior cross-sections per side face, excluding the two
    /// end edges.
    pub subdivisions: u32,

    /// Vertical bulge at the segment midpoint. Positive bulges up,
    /// negative dips down.
    pub amplitude: f64,

    /// Reserved for a partial-fill rendering feature. Ignored by mesh
    /// generation.
    pub fill_percentage: f64,
}

impl Default for LineSegment {
    fn default() -> Self {
        Self {
            start: Point3::origin(),
            end: Point3::origin(),
            thickness: 0.1,
            subdivisions: 0,
            amplitude: 0.0,
            fill_percentage: 0.0,
        }
    }
}

impl LineSegment {
    /// Create a segment between two points with default appearance.
    #[inline]
    #[must_use]
    pub fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }

    /// Set the cross-section half-width.
    #[must_use]
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the interior cross-section count.
    #[must_use]
    pub fn with_subdivisions(mut self, subdivisions: u32) -> Self {
        self.subdivisions = subdivisions;
        self
    }

    /// Set the midpoint bulge amplitude.
    #[must_use]
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Distance between the start and end points.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }

    /// Check whether the segment has zero length.
    ///
    /// Degenerate segments have no defined direction and are rejected by
    /// the mesh builder.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}
