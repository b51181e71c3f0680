//! Core types for segment-swept tube meshes.
//!
//! This crate provides the foundational types shared by the tube mesh
//! pipeline:
//!
//! - [`LineSegment`] - One authored tube unit between two world points
//! - [`SegmentMesh`] - Combined vertex buffers with per-segment submeshes
//!
//! # Engine-Free
//!
//! This crate has **zero renderer dependencies**. The host engine is only
//! expected to accept the combined buffers and per-submesh triangle lists
//! that [`SegmentMesh`] exposes.
//!
//! # Units and Coordinates
//!
//! All coordinates are `f64` and unit-agnostic. The vertical axis is
//! **+Y** (parabolic arcs displace along it) and segments are canonically
//! built along **+Z** before being oriented into world space.
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**.
//!
//! # Example
//!
//! ```
//! use segment_types::{LineSegment, SegmentMesh};
//! use nalgebra::Point3;
//!
//! let segment = LineSegment::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(3.0, 0.0, 4.0),
//! );
//! assert!((segment.length() - 5.0).abs() < 1e-12);
//!
//! let mesh = SegmentMesh::new();
//! assert!(mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod mesh;
mod segment;

pub use mesh::SegmentMesh;
pub use segment::LineSegment;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector2, Vector3};
