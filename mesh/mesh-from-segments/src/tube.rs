//! Local-frame tube geometry for one segment.
//!
//! Builds a box-section tube of a given length along local +Z: a South
//! cap at the origin, four independently subdivided side strips, and a
//! North cap at `(0, 0, length)`. Side strips can bulge vertically along
//! a parabola to approximate an arced line.

use nalgebra::{Point3, Vector2, Vector3};
use segment_types::LineSegment;

/// Per-quad triangle split: `{0,1,2}` and `{3,2,1}` over a 4-vertex block
/// laid out bottom-left, top-left, bottom-right, top-right.
const QUAD_TRIANGLES: [[u32; 3]; 2] = [[0, 1, 2], [3, 2, 1]];

/// Geometry of one segment in its local frame.
///
/// Positions, normals and UVs are parallel; triangle indices are local
/// (0-based within this segment). Normals are the constant per-face
/// axis directions of the original layout and serve only as placeholders
/// until the assembled mesh recalculates smooth normals.
#[derive(Debug, Clone, Default)]
pub struct TubeGeometry {
    /// Local vertex positions.
    pub positions: Vec<Point3<f64>>,

    /// Advisory per-face normals, parallel to `positions`.
    pub normals: Vec<Vector3<f64>>,

    /// Texture coordinates, parallel to `positions`.
    pub uvs: Vec<Vector2<f64>>,

    /// Triangles as local vertex indices.
    pub triangles: Vec<[u32; 3]>,
}

impl TubeGeometry {
    /// Number of local vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn push_quad_at_cursor(&mut self) {
        #[allow(clippy::cast_possible_truncation)]
        // Vertex counts stay far below u32::MAX (8s + 24 per segment).
        let offset = self.positions.len() as u32;
        for triangle in QUAD_TRIANGLES {
            self.triangles.push([
                offset + triangle[0],
                offset + triangle[1],
                offset + triangle[2],
            ]);
        }
    }

    fn push_vertex(&mut self, position: Point3<f64>, uv: Vector2<f64>, normal: Vector3<f64>) {
        self.positions.push(position);
        self.uvs.push(uv);
        self.normals.push(normal);
    }
}

/// The vertical displacement curve used to arc a segment.
///
/// `f(t, a) = -4a * (t - 0.5)^2 + a`: a symmetric parabola that is zero
/// at both ends and peaks at `a` over the segment midpoint.
///
/// # Example
///
/// ```
/// use mesh_from_segments::parabola;
///
/// assert_eq!(parabola(0.0, 2.5), 0.0);
/// assert_eq!(parabola(0.5, 2.5), 2.5);
/// assert_eq!(parabola(1.0, 2.5), 0.0);
/// ```
#[inline]
#[must_use]
pub fn parabola(t: f64, amplitude: f64) -> f64 {
    -4.0 * amplitude * (t - 0.5) * (t - 0.5) + amplitude
}

/// Build the local-frame tube for a segment.
///
/// Only `length()`, `thickness`, `subdivisions` and `amplitude` are read;
/// the tube starts at the origin and extends along +Z for the segment's
/// world length, ready for the rigid transform into world space.
///
/// Vertex count is `8 * subdivisions + 24`; triangle count is
/// `8 * (subdivisions + 1) + 4`.
#[must_use]
pub fn local_tube(segment: &LineSegment) -> TubeGeometry {
    let length = segment.length();
    let th = segment.thickness;

    let subdivisions = segment.subdivisions as usize;
    let vertex_count = 8 * subdivisions + 24;
    let triangle_count = 8 * (subdivisions + 1) + 4;

    let mut geometry = TubeGeometry {
        positions: Vec::with_capacity(vertex_count),
        normals: Vec::with_capacity(vertex_count),
        uvs: Vec::with_capacity(vertex_count),
        triangles: Vec::with_capacity(triangle_count),
    };

    let cap_uvs = [
        Vector2::new(0.0, 0.0),
        Vector2::new(0.0, 1.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
    ];

    // South cap, facing backward.
    geometry.push_quad_at_cursor();
    let south_corners = [
        Point3::new(-th, -th, 0.0),
        Point3::new(-th, th, 0.0),
        Point3::new(th, -th, 0.0),
        Point3::new(th, th, 0.0),
    ];
    for (corner, uv) in south_corners.into_iter().zip(cap_uvs) {
        geometry.push_vertex(corner, uv, -Vector3::z());
    }

    // East strip.
    side_strip(
        &mut geometry,
        segment,
        [Point3::new(th, -th, 0.0), Point3::new(th, th, 0.0)],
        [Point3::new(th, -th, length), Point3::new(th, th, length)],
        -Vector3::x(),
    );

    // West strip.
    side_strip(
        &mut geometry,
        segment,
        [Point3::new(-th, th, 0.0), Point3::new(-th, -th, 0.0)],
        [Point3::new(-th, th, length), Point3::new(-th, -th, length)],
        Vector3::x(),
    );

    // Upper strip.
    side_strip(
        &mut geometry,
        segment,
        [Point3::new(th, th, 0.0), Point3::new(-th, th, 0.0)],
        [Point3::new(th, th, length), Point3::new(-th, th, length)],
        Vector3::y(),
    );

    // Lower strip.
    side_strip(
        &mut geometry,
        segment,
        [Point3::new(-th, -th, 0.0), Point3::new(th, -th, 0.0)],
        [Point3::new(-th, -th, length), Point3::new(th, -th, length)],
        -Vector3::y(),
    );

    // North cap, facing forward. Corner order differs from the South cap
    // so the shared quad split winds outward on both.
    geometry.push_quad_at_cursor();
    let north_corners = [
        Point3::new(-th, -th, length),
        Point3::new(th, -th, length),
        Point3::new(-th, th, length),
        Point3::new(th, th, length),
    ];
    for (corner, uv) in north_corners.into_iter().zip(cap_uvs) {
        geometry.push_vertex(corner, uv, Vector3::z());
    }

    geometry
}

/// Add one side strip: a start edge, `subdivisions` interior
/// cross-sections, and an end edge, quad-stitched in order.
///
/// Interior cross-section `i` sits at `t = (i + 1) / (subdivisions + 1)`
/// and is displaced along +Y by [`parabola`]; the end edge sits at
/// `t = 1` where the parabola returns to zero, so it is not displaced.
fn side_strip(
    geometry: &mut TubeGeometry,
    segment: &LineSegment,
    start_edge: [Point3<f64>; 2],
    end_edge: [Point3<f64>; 2],
    normal: Vector3<f64>,
) {
    geometry.push_quad_at_cursor();
    geometry.push_vertex(start_edge[0], Vector2::new(0.0, 0.0), normal);
    geometry.push_vertex(start_edge[1], Vector2::new(0.0, 1.0), normal);

    for i in 0..segment.subdivisions {
        let t = f64::from(i + 1) / f64::from(segment.subdivisions + 1);
        let bulge = parabola(t, segment.amplitude);

        let mut lower = Point3::from(start_edge[0].coords.lerp(&end_edge[0].coords, t));
        lower.y += bulge;
        let mut upper = Point3::from(start_edge[1].coords.lerp(&end_edge[1].coords, t));
        upper.y += bulge;

        geometry.push_quad_at_cursor();
        geometry.push_vertex(lower, Vector2::new(t, 0.0), normal);
        geometry.push_vertex(upper, Vector2::new(t, 1.0), normal);
    }

    geometry.push_vertex(end_edge[0], Vector2::new(1.0, 0.0), normal);
    geometry.push_vertex(end_edge[1], Vector2::new(1.0, 1.0), normal);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn forward_segment(subdivisions: u32, amplitude: f64) -> LineSegment {
        LineSegment::new(Point3::origin(), Point3::new(0.0, 0.0, 5.0))
            .with_thickness(0.1)
            .with_subdivisions(subdivisions)
            .with_amplitude(amplitude)
    }

    #[test]
    fn parabola_boundary_values() {
        for amplitude in [-3.0, -0.5, 0.0, 0.25, 1.0, 10.0] {
            assert_relative_eq!(parabola(0.0, amplitude), 0.0);
            assert_relative_eq!(parabola(1.0, amplitude), 0.0);
            assert_relative_eq!(parabola(0.5, amplitude), amplitude);
        }
    }

    #[test]
    fn vertex_and_triangle_counts() {
        for subdivisions in [0u32, 1, 2, 7] {
            let geometry = local_tube(&forward_segment(subdivisions, 0.0));
            let s = subdivisions as usize;
            assert_eq!(geometry.vertex_count(), 8 * s + 24);
            assert_eq!(geometry.triangles.len(), 8 * (s + 1) + 4);
        }
    }

    #[test]
    fn triangles_reference_local_vertices_only() {
        let geometry = local_tube(&forward_segment(3, 1.0));
        let limit = geometry.vertex_count() as u32;
        for triangle in &geometry.triangles {
            for &index in triangle {
                assert!(index < limit);
            }
        }
    }

    #[test]
    fn straight_tube_spans_length_and_thickness() {
        let geometry = local_tube(&forward_segment(0, 0.0));
        assert_eq!(geometry.vertex_count(), 24);

        for position in &geometry.positions {
            assert_relative_eq!(position.x.abs(), 0.1, epsilon = 1e-12);
            assert_relative_eq!(position.y.abs(), 0.1, epsilon = 1e-12);
            assert!(position.z.abs() < 1e-12 || (position.z - 5.0).abs() < 1e-12);
        }
    }

    #[test]
    fn caps_sit_exactly_at_the_endpoints() {
        let geometry = local_tube(&forward_segment(4, 2.0));

        // South cap is the first 4 vertices, North cap the last 4.
        for position in &geometry.positions[..4] {
            assert_relative_eq!(position.z, 0.0, epsilon = 1e-12);
        }
        let count = geometry.vertex_count();
        for position in &geometry.positions[count - 4..] {
            assert_relative_eq!(position.z, 5.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn single_subdivision_bulges_at_midpoint() {
        let geometry = local_tube(&forward_segment(1, 1.0));

        // Each strip holds 2 + 2 + 2 vertices; the interior pair of the
        // first strip (East) starts right after the 4 South cap vertices
        // plus its own start edge.
        let lower = geometry.positions[4 + 2];
        let upper = geometry.positions[4 + 3];

        assert_relative_eq!(lower.z, 2.5, epsilon = 1e-12);
        assert_relative_eq!(lower.y, -0.1 + 1.0, epsilon = 1e-12);
        assert_relative_eq!(upper.y, 0.1 + 1.0, epsilon = 1e-12);
    }

    #[test]
    fn interior_uv_matches_interpolation_parameter() {
        let geometry = local_tube(&forward_segment(3, 0.0));

        // East strip vertices: indices 4..14; cross-section k at 4 + 2k.
        for (k, expected_u) in [(0usize, 0.0), (1, 0.25), (2, 0.5), (3, 0.75), (4, 1.0)] {
            let uv = geometry.uvs[4 + 2 * k];
            assert_relative_eq!(uv.x, expected_u, epsilon = 1e-12);
            assert_relative_eq!(uv.y, 0.0, epsilon = 1e-12);
            let uv = geometry.uvs[4 + 2 * k + 1];
            assert_relative_eq!(uv.y, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn negative_amplitude_dips_down() {
        let geometry = local_tube(&forward_segment(1, -2.0));
        let lower = geometry.positions[4 + 2];
        assert_relative_eq!(lower.y, -0.1 - 2.0, epsilon = 1e-12);
    }

    #[test]
    fn start_edge_is_never_perturbed() {
        let geometry = local_tube(&forward_segment(5, 3.0));
        // East strip start edge right after the South cap.
        assert_relative_eq!(geometry.positions[4].y, -0.1, epsilon = 1e-12);
        assert_relative_eq!(geometry.positions[5].y, 0.1, epsilon = 1e-12);
    }
}
