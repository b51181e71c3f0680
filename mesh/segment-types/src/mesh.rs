//! Combined mesh buffers with per-segment submeshes.

use nalgebra::{Point3, Vector2, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle mesh built from a segment list.
///
/// Stores combined parallel buffers (positions, normals, UVs) plus one
/// triangle list per segment. Each triangle list is a *submesh*: its
/// indices reference the combined buffers, and a host renderer typically
/// maps submesh `i` to material `i`.
///
/// # Layout
///
/// - `positions`, `normals`, `uvs` — parallel, one entry per vertex.
/// - `submeshes` — `Vec<[u32; 3]>` per segment, counter-clockwise winding
///   viewed from outside.
///
/// Segments never share vertices, even at coincident endpoints: submesh
/// `i` references only the contiguous vertex range appended for segment
/// `i`, so seams are always present.
///
/// # Example
///
/// ```
/// use segment_types::SegmentMesh;
/// use nalgebra::{Point3, Vector2, Vector3};
///
/// let mut mesh = SegmentMesh::new();
/// mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
/// mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
/// mesh.positions.push(Point3::new(0.0, 1.0, 0.0));
/// mesh.normals.resize(3, Vector3::z());
/// mesh.uvs.resize(3, Vector2::zeros());
/// mesh.push_submesh(vec![[0, 1, 2]]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.submesh_count(), 1);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentMesh {
    /// Vertex positions.
    pub positions: Vec<Point3<f64>>,

    /// Vertex normals, parallel to `positions`.
    pub normals: Vec<Vector3<f64>>,

    /// Vertex texture coordinates in `[0, 1]`, parallel to `positions`.
    pub uvs: Vec<Vector2<f64>>,

    /// One triangle list per segment, indices into the combined buffers.
    pub submeshes: Vec<Vec<[u32; 3]>>,
}

impl SegmentMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            submeshes: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated buffer capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, submesh_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            submeshes: Vec::with_capacity(submesh_count),
        }
    }

    /// Number of vertices in the combined buffers.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of submeshes (equals the segment count it was built from).
    #[inline]
    #[must_use]
    pub fn submesh_count(&self) -> usize {
        self.submeshes.len()
    }

    /// Total triangle count across all submeshes.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.submeshes.iter().map(Vec::len).sum()
    }

    /// Check if the mesh has no geometry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Append a triangle list as the next submesh.
    #[inline]
    pub fn push_submesh(&mut self, triangles: Vec<[u32; 3]>) {
        self.submeshes.push(triangles);
    }

    /// Iterate over every triangle of every submesh.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.submeshes.iter().flatten().copied()
    }

    /// Replace the normal buffer with smooth per-vertex normals derived
    /// from the current topology.
    ///
    /// Accumulates the area-weighted face normal of every triangle into
    /// its three vertices, then normalizes. Vertices referenced by no
    /// triangle keep their previous normal. Authored normals are treated
    /// as advisory placeholders and fully overwritten.
    pub fn recalculate_normals(&mut self) {
        let mut accumulated = vec![Vector3::zeros(); self.positions.len()];

        for [a, b, c] in self.triangles() {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            let pa = self.positions[a];
            let edge_ab = self.positions[b] - pa;
            let edge_ac = self.positions[c] - pa;
            // Cross product magnitude is twice the triangle area, so
            // larger faces weigh more.
            let face_normal = edge_ab.cross(&edge_ac);

            accumulated[a] += face_normal;
            accumulated[b] += face_normal;
            accumulated[c] += face_normal;
        }

        self.normals.resize(self.positions.len(), Vector3::zeros());
        for (normal, sum) in self.normals.iter_mut().zip(accumulated) {
            if let Some(unit) = sum.try_normalize(f64::EPSILON) {
                *normal = unit;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn single_triangle() -> SegmentMesh {
        let mut mesh = SegmentMesh::new();
        mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
        mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
        mesh.positions.push(Point3::new(0.0, 1.0, 0.0));
        mesh.normals.resize(3, Vector3::zeros());
        mesh.uvs.resize(3, Vector2::zeros());
        mesh.push_submesh(vec![[0, 1, 2]]);
        mesh
    }

    #[test]
    fn empty_mesh() {
        let mesh = SegmentMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.submesh_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn counts_span_submeshes() {
        let mut mesh = single_triangle();
        mesh.push_submesh(vec![[0, 1, 2], [2, 1, 0]]);

        assert_eq!(mesh.submesh_count(), 2);
        assert_eq!(mesh.triangle_count(), 3);
        assert_eq!(mesh.triangles().count(), 3);
    }

    #[test]
    fn recalculated_normal_faces_out_of_winding() {
        let mut mesh = single_triangle();
        mesh.recalculate_normals();

        // CCW triangle in the XY plane faces +Z.
        for normal in &mesh.normals {
            assert_relative_eq!(normal.x, 0.0, epsilon = 1e-12);
            assert_relative_eq!(normal.y, 0.0, epsilon = 1e-12);
            assert_relative_eq!(normal.z, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn unreferenced_vertex_keeps_its_normal() {
        let mut mesh = single_triangle();
        mesh.positions.push(Point3::new(5.0, 5.0, 5.0));
        mesh.normals.push(Vector3::x());
        mesh.uvs.push(Vector2::zeros());

        mesh.recalculate_normals();

        assert_relative_eq!(mesh.normals[3].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(mesh.normals[3].y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn recalculation_is_idempotent() {
        let mut mesh = single_triangle();
        mesh.recalculate_normals();
        let first = mesh.normals.clone();
        mesh.recalculate_normals();
        assert_eq!(mesh.normals, first);
    }
}
