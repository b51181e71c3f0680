//! Endpoint debug markers.
//!
//! A lightweight hook for editor-style visualization of authored
//! segments, kept apart from the geometry pipeline: the host decides how
//! (and whether) to draw markers; this module only reports where they go.

use nalgebra::Point3;
use segment_types::LineSegment;

/// Suggested marker sphere radius, in the same units as the segments.
pub const MARKER_RADIUS: f64 = 0.025;

/// Which endpoint a marker annotates.
///
/// Hosts conventionally tint starts green and ends red.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Segment start point.
    Start,
    /// Segment end point.
    End,
}

/// A single debug marker at a segment endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointMarker {
    /// World position of the marker.
    pub position: Point3<f64>,

    /// Which endpoint this marker annotates.
    pub kind: MarkerKind,

    /// Index of the segment the marker belongs to.
    pub segment: usize,
}

/// Produce start/end markers for every segment, in segment order.
///
/// # Example
///
/// ```
/// use mesh_from_segments::{endpoint_markers, MarkerKind};
/// use segment_types::LineSegment;
/// use nalgebra::Point3;
///
/// let segments = [LineSegment::new(Point3::origin(), Point3::new(0.0, 0.0, 2.0))];
/// let markers = endpoint_markers(&segments);
///
/// assert_eq!(markers.len(), 2);
/// assert_eq!(markers[0].kind, MarkerKind::Start);
/// assert_eq!(markers[1].kind, MarkerKind::End);
/// ```
#[must_use]
pub fn endpoint_markers(segments: &[LineSegment]) -> Vec<EndpointMarker> {
    let mut markers = Vec::with_capacity(segments.len() * 2);
    for (segment, line) in segments.iter().enumerate() {
        markers.push(EndpointMarker {
            position: line.start,
            kind: MarkerKind::Start,
            segment,
        });
        markers.push(EndpointMarker {
            position: line.end,
            kind: MarkerKind::End,
            segment,
        });
    }
    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_markers_per_segment() {
        let segments = [
            LineSegment::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0)),
            LineSegment::new(Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)),
        ];
        let markers = endpoint_markers(&segments);

        assert_eq!(markers.len(), 4);
        assert_eq!(markers[2].segment, 1);
        assert_eq!(markers[2].kind, MarkerKind::Start);
        assert_eq!(markers[3].position, Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn empty_input_yields_no_markers() {
        assert!(endpoint_markers(&[]).is_empty());
    }
}
