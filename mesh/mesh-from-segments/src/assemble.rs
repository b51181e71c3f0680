//! Assembly of per-segment tube geometry into one combined mesh.

use segment_types::{LineSegment, SegmentMesh};
use tracing::debug;

use crate::angles::SegmentAngles;
use crate::error::{BuildError, BuildResult};
use crate::tube::local_tube;

/// Build a combined tube mesh from a segment list.
///
/// Pure and stateless: each call validates the whole input, builds every
/// segment's tube in its local frame, orients and translates it into
/// world space, appends its buffers after the previous segments', records
/// its triangles as a distinct submesh, and finally recalculates smooth
/// normals over the assembled topology. Identical input yields
/// bit-identical output.
///
/// An empty segment list produces an empty mesh with zero submeshes.
///
/// # Errors
///
/// Returns an error if any segment:
/// - is degenerate (coincident or non-finite endpoints),
/// - has a negative or non-finite thickness,
/// - has a non-finite amplitude.
///
/// Validation runs before any geometry is emitted, so a failing call
/// produces nothing.
///
/// # Examples
///
/// ```
/// use mesh_from_segments::build_mesh;
/// use segment_types::LineSegment;
/// use nalgebra::Point3;
///
/// let segments = vec![
///     LineSegment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 5.0)),
///     LineSegment::new(Point3::new(0.0, 0.0, 5.0), Point3::new(3.0, 0.0, 5.0))
///         .with_subdivisions(4)
///         .with_amplitude(1.0),
/// ];
///
/// let mesh = build_mesh(&segments)?;
///
/// // One submesh per segment, no shared vertices between them.
/// assert_eq!(mesh.submesh_count(), 2);
/// assert_eq!(mesh.vertex_count(), 24 + (8 * 4 + 24));
/// # Ok::<(), mesh_from_segments::BuildError>(())
/// ```
pub fn build_mesh(segments: &[LineSegment]) -> BuildResult<SegmentMesh> {
    validate(segments)?;

    let total_vertices: usize = segments
        .iter()
        .map(|s| 8 * s.subdivisions as usize + 24)
        .sum();
    let mut mesh = SegmentMesh::with_capacity(total_vertices, segments.len());

    for segment in segments {
        let angles = SegmentAngles::from_segment(segment);
        let rotation = angles.to_rotation();
        let geometry = local_tube(segment);

        #[allow(clippy::cast_possible_truncation)]
        // Total vertex counts stay far below u32::MAX at authoring scale.
        let base = mesh.vertex_count() as u32;

        // Rigid transform: positions only. Authored normals stay in the
        // local frame on purpose; they are placeholders that the global
        // recalculation below replaces.
        mesh.positions.extend(
            geometry
                .positions
                .iter()
                .map(|local| segment.start + rotation * local.coords),
        );
        mesh.normals.extend_from_slice(&geometry.normals);
        mesh.uvs.extend_from_slice(&geometry.uvs);

        mesh.push_submesh(
            geometry
                .triangles
                .iter()
                .map(|[a, b, c]| [base + a, base + b, base + c])
                .collect(),
        );
    }

    mesh.recalculate_normals();

    debug!(
        segments = segments.len(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "assembled segment mesh"
    );

    Ok(mesh)
}

fn validate(segments: &[LineSegment]) -> BuildResult<()> {
    for (index, segment) in segments.iter().enumerate() {
        let finite_endpoints = segment.start.iter().all(|v| v.is_finite())
            && segment.end.iter().all(|v| v.is_finite());
        if !finite_endpoints || segment.is_degenerate() {
            return Err(BuildError::DegenerateSegment { index });
        }
        if segment.thickness < 0.0 || !segment.thickness.is_finite() {
            return Err(BuildError::InvalidThickness {
                index,
                value: segment.thickness,
            });
        }
        if !segment.amplitude.is_finite() {
            return Err(BuildError::InvalidAmplitude {
                index,
                value: segment.amplitude,
            });
        }
    }
    Ok(())
}
