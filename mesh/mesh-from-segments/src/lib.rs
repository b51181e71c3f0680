//! Procedural tube meshes along line segments.
//!
//! This crate turns a list of authored [`LineSegment`]s into a single
//! triangle mesh: every segment becomes a box-section tube with its own
//! submesh, optionally arced vertically along a parabola. The intended
//! use is stylized line rendering (laser beams, cables, trajectories)
//! where the host engine consumes the combined buffers and maps one
//! material per submesh.
//!
//! # Pipeline
//!
//! For each segment, strictly in order:
//!
//! 1. **Angles** - compute the yaw/pitch pair aligning local +Z with the
//!    segment direction ([`SegmentAngles`])
//! 2. **Local tube** - build caps and side strips in the local frame
//!    ([`local_tube`]), bulged by [`parabola`] when arced
//! 3. **Rigid transform** - rotate and translate positions into world
//!    space
//! 4. **Assembly** - append to the combined buffers and record the
//!    segment's triangles as a distinct submesh ([`build_mesh`])
//!
//! Smooth normals are recalculated over the assembled topology at the
//! end, so the builder's per-face normals are placeholders only.
//!
//! # Quick Start
//!
//! ```
//! use mesh_from_segments::build_mesh;
//! use segment_types::LineSegment;
//! use nalgebra::Point3;
//!
//! // A two-segment polyline with an arced second half
//! let segments = vec![
//!     LineSegment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 5.0)),
//!     LineSegment::new(Point3::new(0.0, 0.0, 5.0), Point3::new(5.0, 0.0, 5.0))
//!         .with_subdivisions(8)
//!         .with_amplitude(2.0),
//! ];
//!
//! let mesh = build_mesh(&segments).unwrap();
//!
//! assert_eq!(mesh.submesh_count(), 2);
//! assert!(!mesh.is_empty());
//! ```
//!
//! # Validation
//!
//! [`build_mesh`] validates the whole input before emitting anything:
//! degenerate segments, negative thickness, and non-finite values are
//! rejected with a [`BuildError`], never a partial mesh. An empty
//! segment list is valid and produces an empty mesh.

mod angles;
mod assemble;
mod error;
mod marker;
mod tube;

pub use angles::{SegmentAngles, angle_degrees, signed_angle_degrees};
pub use assemble::build_mesh;
pub use error::{BuildError, BuildResult};
pub use marker::{EndpointMarker, MARKER_RADIUS, MarkerKind, endpoint_markers};
pub use tube::{TubeGeometry, local_tube, parabola};

// Re-export the foundation types so callers need only one import.
pub use segment_types::{LineSegment, SegmentMesh};
