//! Operation dispatch and reporting.
//!
//! Every layout operation returns an [`OpReport`] describing how it ran:
//! the pivot points a caller may want to visualize, whether the operation
//! ran to completion or was cancelled, and any per-island diagnostics.
//! [`LayoutOp`] bundles an operation with its options so a caller can
//! queue, store, or replay operations uniformly.

use nalgebra::Point2;

use crate::error::Result;
use crate::geom::UdimTile;
use crate::mesh::{MeshIndex, Selection, UvMesh};

use super::align::{align_uvs, AlignOptions};
use super::cancel::Cancel;
use super::distribute::{distribute_uvs, DistributeOptions};
use super::transform::{transform_uvs, TransformOptions};

/// A non-fatal condition noticed while applying an operation.
///
/// Diagnostics never stop an operation; the mesh is still modified and the
/// caller decides whether to surface them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diagnostic {
    /// An island was aligned to a UDIM tile outside the valid range.
    UdimTileOutOfRange {
        /// Index of the island within its [`IslandSet`](super::IslandSet).
        island: usize,
        /// The tile the island's center fell into.
        tile: UdimTile,
    },
    /// The overlap solver hit its iteration cap with overlap remaining.
    OverlapUnresolved {
        /// Number of iterations that were run.
        iterations: usize,
    },
}

/// The outcome of a layout operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OpReport {
    /// Pivot points used by the operation, for visualization.
    ///
    /// Transform reports one pivot per island when pivoting per island,
    /// otherwise a single global pivot. Align reports the anchor point
    /// except in UDIM mode. Distribute reports none.
    pub pivots: Vec<Point2<f64>>,

    /// `false` when the operation observed cancellation and stopped
    /// before modifying the mesh.
    pub completed: bool,

    /// Non-fatal conditions noticed along the way.
    pub diagnostics: Vec<Diagnostic>,
}

impl OpReport {
    /// A completed operation with no pivots.
    pub fn done() -> Self {
        Self {
            pivots: Vec::new(),
            completed: true,
            diagnostics: Vec::new(),
        }
    }

    /// A cancelled operation. The mesh was left untouched.
    pub fn cancelled() -> Self {
        Self {
            pivots: Vec::new(),
            completed: false,
            diagnostics: Vec::new(),
        }
    }

    /// A completed operation with the given visualization pivots.
    pub fn with_pivots(pivots: Vec<Point2<f64>>) -> Self {
        Self {
            pivots,
            completed: true,
            diagnostics: Vec::new(),
        }
    }
}

/// A layout operation together with its options.
#[derive(Debug, Clone)]
pub enum LayoutOp {
    /// Scale, rotate, and translate islands.
    Transform(TransformOptions),
    /// Snap islands to a shared edge, center line, or UDIM tile.
    Align(AlignOptions),
    /// Space islands along an axis or resolve overlap.
    Distribute(DistributeOptions),
}

impl LayoutOp {
    /// Apply the operation to one UV channel of `mesh`.
    ///
    /// `selection` limits the operation to a subset of the mesh; `None`
    /// operates on everything.
    pub fn apply<I: MeshIndex>(
        &self,
        mesh: &mut UvMesh<I>,
        channel: usize,
        selection: Option<&Selection<I>>,
        cancel: &Cancel,
    ) -> Result<OpReport> {
        match self {
            LayoutOp::Transform(options) => transform_uvs(mesh, channel, selection, options, cancel),
            LayoutOp::Align(options) => align_uvs(mesh, channel, selection, options, cancel),
            LayoutOp::Distribute(options) => {
                distribute_uvs(mesh, channel, selection, options, cancel)
            }
        }
    }
}
