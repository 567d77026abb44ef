//! # Islet
//!
//! A UV island layout library for texture-coordinate editing.
//!
//! Islet segments the triangles of a UV channel into islands (connected
//! components in UV space) and applies layout operations to them: affine
//! transforms about configurable pivots, alignment to shared edges or UDIM
//! tiles, and distribution along an axis including bounding-box overlap
//! removal.
//!
//! ## Features
//!
//! - **Island segmentation**: connected components over shared vertices,
//!   with per-island or enclosing-box grouping
//! - **Flexible indexing**: 16-bit, 32-bit, and 64-bit vertex indices
//! - **Selections**: operations can target a vertex or edge subset
//! - **UDIM aware**: tile classification and per-tile alignment
//! - **Cancellable**: long-running operations poll a cancel token
//!
//! ## Quick Start
//!
//! ```
//! use islet::prelude::*;
//! use nalgebra::{Point2, Vector2};
//!
//! // Two triangles with no shared vertices form two islands.
//! let uvs = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(3.0, 0.0),
//!     Point2::new(2.5, 1.0),
//! ];
//! let mut mesh: UvMesh = UvMesh::from_triangles(uvs, &[[0, 1, 2], [3, 4, 5]]).unwrap();
//!
//! let islands = IslandSet::segment(&mesh, 0, None, GroupingMode::default());
//! assert_eq!(islands.len(), 2);
//!
//! // Shift everything one tile to the right.
//! let options = TransformOptions::default().with_translation(Vector2::new(1.0, 0.0));
//! let report = transform_uvs(&mut mesh, 0, None, &options, &Cancel::none()).unwrap();
//! assert!(report.completed);
//! assert_eq!(mesh.uv(0, VertexId::new(0)), Point2::new(1.0, 0.0));
//! ```
//!
//! ## Operating on a Selection
//!
//! ```
//! use islet::prelude::*;
//! use nalgebra::{Point2, Vector2};
//!
//! # let uvs = vec![
//! #     Point2::new(0.0, 0.0),
//! #     Point2::new(1.0, 0.0),
//! #     Point2::new(0.5, 1.0),
//! #     Point2::new(2.0, 0.0),
//! #     Point2::new(3.0, 0.0),
//! #     Point2::new(2.5, 1.0),
//! # ];
//! # let mut mesh: UvMesh = UvMesh::from_triangles(uvs, &[[0, 1, 2], [3, 4, 5]]).unwrap();
//! // Only the first triangle's vertices participate.
//! let selection = Selection::from_vertices([0, 1, 2].map(VertexId::new));
//! let options = TransformOptions::default().with_translation(Vector2::new(0.0, 1.0));
//! transform_uvs(&mut mesh, 0, Some(&selection), &options, &Cancel::none()).unwrap();
//!
//! assert_eq!(mesh.uv(0, VertexId::new(0)), Point2::new(0.0, 1.0));
//! assert_eq!(mesh.uv(0, VertexId::new(3)), Point2::new(2.0, 0.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod geom;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use islet::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::{
        align_uvs, distribute_uvs, transform_uvs, AlignOptions, AnchorMode, Cancel, Diagnostic,
        DistributeMode, DistributeOptions, GroupingMode, Island, IslandSet, LayoutOp, OpReport,
        PivotMode, TransformOptions, TranslationMode,
    };
    pub use crate::error::{LayoutError, Result};
    pub use crate::geom::{Aabb, AlignDirection, Axis, UdimTile};
    pub use crate::mesh::{EdgeId, MeshIndex, Selection, TriangleId, UvMesh, VertexId};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
