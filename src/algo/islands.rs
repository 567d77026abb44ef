//! Island segmentation.
//!
//! An *island* is a set of vertices treated as one rigid body by the layout
//! operations. Under the default grouping, islands are the connected
//! components of the (selection-filtered) edge graph; the other grouping
//! modes collapse the whole working set into a single island or split it
//! into one island per vertex.
//!
//! Islands are computed fresh per operation invocation and never persisted.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::geom::{Aabb, Axis};
use crate::mesh::{MeshIndex, Selection, UvMesh, VertexId};

/// Policy for partitioning the working set into islands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupingMode {
    /// One island per connected component of the edge graph.
    #[default]
    IndividualBoundingBoxes,
    /// A single synthetic island containing every participating vertex.
    EnclosingBoundingBox,
    /// One single-member island per participating vertex, ignoring
    /// adjacency entirely.
    IndividualVertices,
}

/// A connected component (or caller-defined partition) of UV vertices.
#[derive(Debug, Clone)]
pub struct Island<I: MeshIndex = u32> {
    /// Member vertices, in ascending id order.
    pub vertices: Vec<VertexId<I>>,
    /// Axis-aligned bounding box over the members' UV positions.
    pub bounds: Aabb,
}

/// The islands of one operation invocation, with O(1) vertex lookup.
#[derive(Debug, Clone)]
pub struct IslandSet<I: MeshIndex = u32> {
    islands: Vec<Island<I>>,
    island_of: HashMap<VertexId<I>, usize>,
}

impl<I: MeshIndex> IslandSet<I> {
    /// Partition the working set of a mesh into islands.
    ///
    /// The working set is the selection's vertices, or every mesh vertex
    /// when `selection` is `None`. Connectivity follows the mesh edge set,
    /// filtered by the selection if one is active: an explicit edge
    /// selection admits only its own edges, a vertex-only selection admits
    /// mesh edges with both endpoints selected.
    ///
    /// An empty working set yields zero islands; callers treat that as a
    /// no-op, not an error.
    pub fn segment(
        mesh: &UvMesh<I>,
        channel: usize,
        selection: Option<&Selection<I>>,
        mode: GroupingMode,
    ) -> IslandSet<I> {
        let participating: Vec<VertexId<I>> = match selection {
            Some(sel) => {
                let mut ids: Vec<VertexId<I>> = sel.vertices.iter().copied().collect();
                ids.sort_unstable();
                ids
            }
            None => mesh.vertex_ids().collect(),
        };

        if participating.is_empty() {
            return IslandSet {
                islands: Vec::new(),
                island_of: HashMap::new(),
            };
        }

        let groups: Vec<Vec<VertexId<I>>> = match mode {
            GroupingMode::EnclosingBoundingBox => vec![participating],
            GroupingMode::IndividualVertices => {
                participating.into_iter().map(|v| vec![v]).collect()
            }
            GroupingMode::IndividualBoundingBoxes => {
                connected_components(mesh, selection, &participating)
            }
        };

        let mut island_of = HashMap::new();
        let islands = groups
            .into_iter()
            .enumerate()
            .map(|(idx, vertices)| {
                for &v in &vertices {
                    island_of.insert(v, idx);
                }
                let bounds = Aabb::from_points(vertices.iter().map(|&v| mesh.uv(channel, v)))
                    .unwrap_or_else(|| {
                        Aabb::new(nalgebra::Point2::origin(), nalgebra::Point2::origin())
                    });
                Island { vertices, bounds }
            })
            .collect();

        IslandSet { islands, island_of }
    }

    /// Number of islands.
    #[inline]
    pub fn len(&self) -> usize {
        self.islands.len()
    }

    /// Whether there are no islands.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.islands.is_empty()
    }

    /// The islands, in segmentation order.
    #[inline]
    pub fn islands(&self) -> &[Island<I>] {
        &self.islands
    }

    /// Get one island by index.
    #[inline]
    pub fn island(&self, idx: usize) -> &Island<I> {
        &self.islands[idx]
    }

    /// O(1) lookup of the island containing a vertex.
    #[inline]
    pub fn island_of(&self, v: VertexId<I>) -> Option<usize> {
        self.island_of.get(&v).copied()
    }

    /// The union of all island bounding boxes.
    pub fn overall_bounds(&self) -> Option<Aabb> {
        let mut iter = self.islands.iter();
        let first = iter.next()?.bounds;
        Some(iter.fold(first, |acc, isl| acc.union(&isl.bounds)))
    }

    /// Recompute every island's bounding box from current UV positions.
    ///
    /// Island reductions are independent, so this is safe to run as a
    /// parallel-for over islands when `parallel` is set.
    pub fn recompute_bounds(&mut self, mesh: &UvMesh<I>, channel: usize, parallel: bool) {
        let rebuild = |island: &mut Island<I>| {
            if let Some(bounds) =
                Aabb::from_points(island.vertices.iter().map(|&v| mesh.uv(channel, v)))
            {
                island.bounds = bounds;
            }
        };

        if parallel {
            self.islands.par_iter_mut().for_each(rebuild);
        } else {
            self.islands.iter_mut().for_each(rebuild);
        }
    }

    /// Island indices ordered spatially by bounding-box center.
    ///
    /// Sorted primarily along `axis`, secondarily along the other axis,
    /// with the island index as a final deterministic tie-break.
    pub fn sorted_by_center(&self, axis: Axis) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.islands.len()).collect();
        order.sort_by(|&a, &b| {
            let ca = self.islands[a].bounds.center();
            let cb = self.islands[b].bounds.center();
            axis.of(ca)
                .total_cmp(&axis.of(cb))
                .then(axis.other().of(ca).total_cmp(&axis.other().of(cb)))
                .then(a.cmp(&b))
        });
        order
    }

    /// Iterate over every participating vertex across all islands.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId<I>> + '_ {
        self.islands.iter().flat_map(|isl| isl.vertices.iter().copied())
    }
}

/// Connected-component labeling over the selection-filtered edge graph.
///
/// Stack-based flood fill seeded in ascending vertex-id order; members are
/// sorted afterwards, so island order and member order are deterministic
/// for a given mesh and selection regardless of traversal order.
fn connected_components<I: MeshIndex>(
    mesh: &UvMesh<I>,
    selection: Option<&Selection<I>>,
    participating: &[VertexId<I>],
) -> Vec<Vec<VertexId<I>>> {
    let mut adjacency: HashMap<VertexId<I>, Vec<VertexId<I>>> =
        HashMap::with_capacity(participating.len());
    for v in participating {
        adjacency.insert(*v, Vec::new());
    }

    for (e, a, b) in mesh.edges() {
        let admitted = match selection {
            Some(sel) => sel.admits_edge(e, a, b),
            None => true,
        };
        if admitted && adjacency.contains_key(&a) && adjacency.contains_key(&b) {
            if let Some(neighbors) = adjacency.get_mut(&a) {
                neighbors.push(b);
            }
            if let Some(neighbors) = adjacency.get_mut(&b) {
                neighbors.push(a);
            }
        }
    }

    let mut label: HashMap<VertexId<I>, usize> = HashMap::with_capacity(participating.len());
    let mut components: Vec<Vec<VertexId<I>>> = Vec::new();
    let mut queue: Vec<VertexId<I>> = Vec::new();

    for &seed in participating {
        if label.contains_key(&seed) {
            continue;
        }
        let component_idx = components.len();
        let mut members = Vec::new();

        label.insert(seed, component_idx);
        queue.push(seed);
        while let Some(v) = queue.pop() {
            members.push(v);
            if let Some(neighbors) = adjacency.get(&v) {
                for &n in neighbors {
                    if !label.contains_key(&n) {
                        label.insert(n, component_idx);
                        queue.push(n);
                    }
                }
            }
        }

        members.sort_unstable();
        components.push(members);
    }

    components
}
