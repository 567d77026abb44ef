//! Flat UV mesh storage.
//!
//! [`UvMesh`] stores per-vertex UV coordinates in one or more channels,
//! triangle connectivity, and the derived set of unique undirected edges.
//! It is a plain index-based arena: the layout operations read and write UV
//! positions by [`VertexId`] and enumerate connectivity by [`TriangleId`] /
//! [`EdgeId`]. The mesh carries no state between operations.

use std::collections::HashMap;

use nalgebra::Point2;

use super::index::{EdgeId, MeshIndex, TriangleId, VertexId};
use crate::error::{LayoutError, Result};

/// A triangle mesh in UV space.
///
/// Vertices live in one or more UV channels (all with identical vertex
/// counts); connectivity is a flat triangle list plus a derived unique edge
/// set with O(1) lookup by vertex pair.
#[derive(Debug, Clone)]
pub struct UvMesh<I: MeshIndex = u32> {
    /// Per-channel UV coordinates, each indexed by vertex id.
    channels: Vec<Vec<Point2<f64>>>,

    /// Triangle-to-vertex adjacency.
    triangles: Vec<[VertexId<I>; 3]>,

    /// Unique undirected edges, endpoints stored (lo, hi).
    edges: Vec<(VertexId<I>, VertexId<I>)>,

    /// Lookup from (lo, hi) vertex indices to edge id.
    edge_lookup: HashMap<(usize, usize), EdgeId<I>>,
}

impl<I: MeshIndex> UvMesh<I> {
    /// Build a UV mesh from vertex coordinates and triangle faces.
    ///
    /// The coordinates become UV channel 0. Triangles are validated: every
    /// vertex index must be in range and no triangle may repeat a vertex.
    /// An empty triangle list is allowed (a bare point set is valid input
    /// for per-vertex operations).
    ///
    /// # Example
    /// ```
    /// use islet::mesh::UvMesh;
    /// use nalgebra::Point2;
    ///
    /// let uvs = vec![
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(1.0, 0.0),
    ///     Point2::new(0.5, 1.0),
    /// ];
    /// let mesh: UvMesh = UvMesh::from_triangles(uvs, &[[0, 1, 2]]).unwrap();
    /// assert_eq!(mesh.num_triangles(), 1);
    /// ```
    pub fn from_triangles(uvs: Vec<Point2<f64>>, triangles: &[[usize; 3]]) -> Result<Self> {
        for (ti, tri) in triangles.iter().enumerate() {
            for &vi in tri {
                if vi >= uvs.len() {
                    return Err(LayoutError::InvalidVertexIndex {
                        triangle: ti,
                        vertex: vi,
                    });
                }
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(LayoutError::DegenerateTriangle { triangle: ti });
            }
        }

        let mut edges = Vec::with_capacity(triangles.len() * 3 / 2);
        let mut edge_lookup: HashMap<(usize, usize), EdgeId<I>> =
            HashMap::with_capacity(triangles.len() * 3 / 2);

        let triangle_ids: Vec<[VertexId<I>; 3]> = triangles
            .iter()
            .map(|tri| {
                for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                    let key = (a.min(b), a.max(b));
                    edge_lookup.entry(key).or_insert_with(|| {
                        let id = EdgeId::new(edges.len());
                        edges.push((VertexId::new(key.0), VertexId::new(key.1)));
                        id
                    });
                }
                [
                    VertexId::new(tri[0]),
                    VertexId::new(tri[1]),
                    VertexId::new(tri[2]),
                ]
            })
            .collect();

        Ok(Self {
            channels: vec![uvs],
            triangles: triangle_ids,
            edges,
            edge_lookup,
        })
    }

    /// Add an additional UV channel and return its index.
    ///
    /// The channel must have one coordinate per vertex.
    pub fn add_channel(&mut self, uvs: Vec<Point2<f64>>) -> Result<usize> {
        if uvs.len() != self.num_vertices() {
            return Err(LayoutError::ChannelSizeMismatch {
                expected: self.num_vertices(),
                actual: uvs.len(),
            });
        }
        self.channels.push(uvs);
        Ok(self.channels.len() - 1)
    }

    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.channels[0].len()
    }

    /// Get the number of triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Get the number of unique undirected edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Get the number of UV channels.
    #[inline]
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Validate that a UV channel exists.
    pub fn check_channel(&self, channel: usize) -> Result<()> {
        if channel >= self.channels.len() {
            return Err(LayoutError::InvalidChannel {
                channel,
                available: self.channels.len(),
            });
        }
        Ok(())
    }

    /// Get the UV position of a vertex in a channel.
    #[inline]
    pub fn uv(&self, channel: usize, v: VertexId<I>) -> Point2<f64> {
        self.channels[channel][v.index()]
    }

    /// Set the UV position of a vertex in a channel.
    #[inline]
    pub fn set_uv(&mut self, channel: usize, v: VertexId<I>, uv: Point2<f64>) {
        self.channels[channel][v.index()] = uv;
    }

    /// Get the raw coordinate slice of a channel.
    pub fn channel(&self, channel: usize) -> &[Point2<f64>] {
        &self.channels[channel]
    }

    /// Get the three vertices of a triangle.
    #[inline]
    pub fn triangle(&self, t: TriangleId<I>) -> [VertexId<I>; 3] {
        self.triangles[t.index()]
    }

    /// Get the endpoints of an edge, ordered (lo, hi).
    #[inline]
    pub fn edge(&self, e: EdgeId<I>) -> (VertexId<I>, VertexId<I>) {
        self.edges[e.index()]
    }

    /// Look up the edge between two vertices, if one exists.
    pub fn edge_between(&self, v0: VertexId<I>, v1: VertexId<I>) -> Option<EdgeId<I>> {
        let key = (v0.index().min(v1.index()), v0.index().max(v1.index()));
        self.edge_lookup.get(&key).copied()
    }

    // ==================== Iteration ====================

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId<I>> + '_ {
        (0..self.num_vertices()).map(VertexId::new)
    }

    /// Iterate over all triangle IDs.
    pub fn triangle_ids(&self) -> impl Iterator<Item = TriangleId<I>> + '_ {
        (0..self.triangles.len()).map(TriangleId::new)
    }

    /// Iterate over all edge IDs.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId<I>> + '_ {
        (0..self.edges.len()).map(EdgeId::new)
    }

    /// Iterate over all edges with their endpoints.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId<I>, VertexId<I>, VertexId<I>)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, &(a, b))| (EdgeId::new(i), a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_mesh() -> UvMesh {
        // Two triangles sharing the diagonal (0, 2).
        let uvs = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        UvMesh::from_triangles(uvs, &[[0, 1, 2], [0, 2, 3]]).unwrap()
    }

    #[test]
    fn test_build_and_counts() {
        let mesh = quad_mesh();
        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_triangles(), 2);
        // Shared diagonal is a single unique edge.
        assert_eq!(mesh.num_edges(), 5);
        assert_eq!(mesh.num_channels(), 1);
    }

    #[test]
    fn test_edge_lookup() {
        let mesh = quad_mesh();
        let v0: VertexId = VertexId::new(0);
        let v2: VertexId = VertexId::new(2);
        let v1: VertexId = VertexId::new(1);
        let v3: VertexId = VertexId::new(3);

        let diag = mesh.edge_between(v0, v2).unwrap();
        // Lookup is order-independent.
        assert_eq!(mesh.edge_between(v2, v0), Some(diag));
        assert_eq!(mesh.edge(diag), (v0, v2));

        // (1, 3) is not an edge of either triangle.
        assert!(mesh.edge_between(v1, v3).is_none());
    }

    #[test]
    fn test_uv_read_write() {
        let mut mesh = quad_mesh();
        let v: VertexId = VertexId::new(1);
        assert_eq!(mesh.uv(0, v), Point2::new(1.0, 0.0));
        mesh.set_uv(0, v, Point2::new(2.0, 3.0));
        assert_eq!(mesh.uv(0, v), Point2::new(2.0, 3.0));
    }

    #[test]
    fn test_invalid_vertex_index() {
        let uvs = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let err = UvMesh::<u32>::from_triangles(uvs, &[[0, 1, 5]]).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidVertexIndex {
                triangle: 0,
                vertex: 5
            }
        ));
    }

    #[test]
    fn test_degenerate_triangle() {
        let uvs = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let err = UvMesh::<u32>::from_triangles(uvs, &[[0, 1, 0]]).unwrap_err();
        assert!(matches!(err, LayoutError::DegenerateTriangle { triangle: 0 }));
    }

    #[test]
    fn test_point_set_without_triangles() {
        let uvs = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        let mesh: UvMesh = UvMesh::from_triangles(uvs, &[]).unwrap();
        assert_eq!(mesh.num_vertices(), 2);
        assert_eq!(mesh.num_edges(), 0);
    }

    #[test]
    fn test_add_channel() {
        let mut mesh = quad_mesh();
        let alt = vec![Point2::origin(); 4];
        let channel = mesh.add_channel(alt).unwrap();
        assert_eq!(channel, 1);
        assert!(mesh.check_channel(1).is_ok());
        assert!(mesh.check_channel(2).is_err());

        let err = mesh.add_channel(vec![Point2::origin(); 3]).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::ChannelSizeMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }
}
