//! Vertex and edge selections.
//!
//! A [`Selection`] restricts which mesh elements participate in a layout
//! operation. With no selection, every vertex participates and connectivity
//! uses the full triangle-derived edge set. With a selection, only the
//! selected vertices move, and connected-component labeling only follows
//! edges the selection admits.

use std::collections::HashSet;

use super::index::{EdgeId, MeshIndex, VertexId};
use super::uvmesh::UvMesh;
use crate::error::{LayoutError, Result};

/// A set of selected vertices, optionally restricted further by edges.
///
/// Invariant: every selected edge's endpoints are in the vertex set. The
/// constructors maintain this automatically; [`Selection::validate`] checks
/// it for selections assembled field by field.
#[derive(Debug, Clone, Default)]
pub struct Selection<I: MeshIndex = u32> {
    /// The selected vertices.
    pub vertices: HashSet<VertexId<I>>,
    /// Selected edges; when non-empty, only these edges connect vertices
    /// during island segmentation.
    pub edges: HashSet<EdgeId<I>>,
}

impl<I: MeshIndex> Selection<I> {
    /// Create a selection from vertex ids alone.
    pub fn from_vertices<It>(vertices: It) -> Self
    where
        It: IntoIterator<Item = VertexId<I>>,
    {
        Self {
            vertices: vertices.into_iter().collect(),
            edges: HashSet::new(),
        }
    }

    /// Create a selection from edge ids, pulling in their endpoint vertices.
    pub fn from_edges<It>(mesh: &UvMesh<I>, edges: It) -> Self
    where
        It: IntoIterator<Item = EdgeId<I>>,
    {
        let edges: HashSet<EdgeId<I>> = edges.into_iter().collect();
        let mut vertices = HashSet::with_capacity(edges.len() * 2);
        for &e in &edges {
            let (a, b) = mesh.edge(e);
            vertices.insert(a);
            vertices.insert(b);
        }
        Self { vertices, edges }
    }

    /// Whether the selection contains no vertices.
    ///
    /// An empty selection makes every operation a well-defined no-op.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check the selection against a mesh.
    ///
    /// Verifies that every referenced id is in range and that every selected
    /// edge's endpoints appear in the vertex set.
    pub fn validate(&self, mesh: &UvMesh<I>) -> Result<()> {
        for &v in &self.vertices {
            if v.index() >= mesh.num_vertices() {
                return Err(LayoutError::OutOfRangeVertex {
                    vertex: v.index(),
                    num_vertices: mesh.num_vertices(),
                });
            }
        }
        for &e in &self.edges {
            if e.index() >= mesh.num_edges() {
                return Err(LayoutError::OutOfRangeEdge {
                    edge: e.index(),
                    num_edges: mesh.num_edges(),
                });
            }
            let (a, b) = mesh.edge(e);
            if !self.vertices.contains(&a) || !self.vertices.contains(&b) {
                return Err(LayoutError::InconsistentSelection { edge: e.index() });
            }
        }
        Ok(())
    }

    /// Whether an edge connects vertices for segmentation purposes.
    ///
    /// With an explicit edge selection, only selected edges connect; with a
    /// vertex-only selection, a mesh edge connects iff both endpoints are
    /// selected.
    pub(crate) fn admits_edge(&self, e: EdgeId<I>, a: VertexId<I>, b: VertexId<I>) -> bool {
        if !self.edges.is_empty() {
            self.edges.contains(&e)
        } else {
            self.vertices.contains(&a) && self.vertices.contains(&b)
        }
    }
}
