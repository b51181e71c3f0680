//! Segment orientation math.
//!
//! Computes the yaw/pitch pair that aligns a tube built along local +Z
//! with a segment's world start-to-end direction.

use nalgebra::{Rotation3, Vector3};
use segment_types::LineSegment;

// Below this product of the two vector magnitudes, directions are
// treated as zero and angles collapse to 0 instead of NaN.
const NORM_PRODUCT_EPSILON: f64 = 1e-15;

/// Orientation of one segment as a pitch/yaw pair, in degrees.
///
/// The sign and offset convention is fixed: `pitch` is
/// `angle(direction, +Y) - 90` and `yaw` is the signed horizontal angle
/// from +Z to the flattened direction about +Y. Together with
/// [`to_rotation`](Self::to_rotation) this maps the canonical local tube
/// (built along +Z) onto the segment direction; changing either side of
/// the convention breaks the alignment.
///
/// # Example
///
/// ```
/// use mesh_from_segments::SegmentAngles;
/// use segment_types::LineSegment;
/// use nalgebra::Point3;
///
/// // A segment along +Z needs no reorientation.
/// let straight = LineSegment::new(Point3::origin(), Point3::new(0.0, 0.0, 5.0));
/// let angles = SegmentAngles::from_segment(&straight);
/// assert!(angles.pitch.abs() < 1e-9);
/// assert!(angles.yaw.abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentAngles {
    /// Rotation about the local X axis, degrees.
    pub pitch: f64,

    /// Rotation about the world Y (up) axis, degrees.
    pub yaw: f64,
}

impl SegmentAngles {
    /// Compute the orientation of a segment.
    ///
    /// Vertical segments (no horizontal extent) get a yaw of 0. The
    /// result is undefined for degenerate segments; the mesh builder
    /// rejects those before calling this.
    #[must_use]
    pub fn from_segment(segment: &LineSegment) -> Self {
        let mut flat_start = segment.start;
        flat_start.y = 0.0;
        let mut flat_end = segment.end;
        flat_end.y = 0.0;

        let flat_dir = flat_end - flat_start;
        let yaw_raw = signed_angle_degrees(&flat_dir, &Vector3::z(), &Vector3::y());

        let dir = segment.end - segment.start;
        let pitch_raw = -angle_degrees(&dir, &Vector3::y());

        Self {
            pitch: -pitch_raw - 90.0,
            yaw: -yaw_raw,
        }
    }

    /// Build the world rotation for these angles.
    ///
    /// Composes `Ry(yaw) * Rx(pitch)` (pitch applied first), the Euler
    /// X/Y/zero-roll order the angle convention assumes. For any
    /// non-degenerate segment, applying the result to `(0, 0, length)`
    /// reproduces `end - start`.
    #[must_use]
    pub fn to_rotation(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&Vector3::y_axis(), self.yaw.to_radians())
            * Rotation3::from_axis_angle(&Vector3::x_axis(), self.pitch.to_radians())
    }
}

/// Unsigned angle between two directions, in degrees.
///
/// Returns 0 when either direction is (near-)zero.
#[must_use]
pub fn angle_degrees(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let denominator = (a.norm_squared() * b.norm_squared()).sqrt();
    if denominator < NORM_PRODUCT_EPSILON {
        return 0.0;
    }

    (a.dot(b) / denominator).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Signed angle from `from` to `to` about `axis`, in degrees.
///
/// The sign follows `axis . (from x to)`. Returns 0 when either
/// direction is (near-)zero.
#[must_use]
pub fn signed_angle_degrees(from: &Vector3<f64>, to: &Vector3<f64>, axis: &Vector3<f64>) -> f64 {
    let unsigned = angle_degrees(from, to);
    if axis.dot(&from.cross(to)) < 0.0 {
        -unsigned
    } else {
        unsigned
    }
}
