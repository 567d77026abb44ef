//! UV mesh data structures.
//!
//! This module provides the flat, index-based mesh representation the layout
//! operations work on: per-vertex UV coordinates (in one or more channels),
//! triangle connectivity, and a derived unique edge set.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`EdgeId`] - Identifies a unique undirected edge
//! - [`TriangleId`] - Identifies a triangle
//!
//! These indices are generic over the underlying integer type ([`MeshIndex`]
//! trait), allowing you to choose `u16`, `u32`, or `u64` based on mesh size.
//!
//! # Construction
//!
//! ```
//! use islet::mesh::UvMesh;
//! use nalgebra::Point2;
//!
//! let uvs = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//! ];
//! let triangles = vec![[0, 1, 2]];
//!
//! let mesh: UvMesh = UvMesh::from_triangles(uvs, &triangles).unwrap();
//! assert_eq!(mesh.num_vertices(), 3);
//! assert_eq!(mesh.num_edges(), 3);
//! ```

mod index;
mod selection;
mod uvmesh;

pub use index::{EdgeId, MeshIndex, TriangleId, VertexId};
pub use selection::Selection;
pub use uvmesh::UvMesh;
