//! The Align operation: translate each island as a rigid body so a chosen
//! edge or center point coincides with an anchor.
//!
//! The direction picks both the island reference point and the axis that
//! moves: Top/Bottom only move V, Left/Right only move U, and the center
//! directions move the perpendicular axis (lining up vertical center lines
//! moves U).
//!
//! # Example
//!
//! ```
//! use islet::algo::{align_uvs, AlignOptions, AnchorMode, Cancel};
//! use islet::geom::AlignDirection;
//! use islet::mesh::UvMesh;
//! use nalgebra::Point2;
//!
//! let uvs = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//! ];
//! let mut mesh: UvMesh = UvMesh::from_triangles(uvs, &[[0, 1, 2]]).unwrap();
//!
//! let options = AlignOptions::default().with_direction(AlignDirection::Bottom);
//! align_uvs(&mut mesh, 0, None, &options, &Cancel::none()).unwrap();
//! ```

use nalgebra::Point2;

use crate::error::{LayoutError, Result};
use crate::geom::{AlignDirection, UdimTile};
use crate::mesh::{MeshIndex, Selection, UvMesh};

use super::cancel::Cancel;
use super::islands::{GroupingMode, IslandSet};
use super::op::{Diagnostic, OpReport};

/// The reference the islands' alignment points are moved onto.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AnchorMode {
    /// The alignment point of the overall selection bounding box.
    #[default]
    BoundingBox,
    /// The alignment point of the UDIM tile containing each island
    /// (per island).
    UdimTile,
    /// A caller-supplied point.
    Manual(Point2<f64>),
}

/// Options for the Align operation.
#[derive(Debug, Clone, Default)]
pub struct AlignOptions {
    /// Which island edge/center is aligned, and along which axis.
    pub direction: AlignDirection,

    /// What the islands are aligned to.
    pub anchor: AnchorMode,

    /// How vertices are grouped into islands.
    pub grouping: GroupingMode,
}

impl AlignOptions {
    /// Set the alignment direction.
    pub fn with_direction(mut self, direction: AlignDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the anchor mode.
    pub fn with_anchor(mut self, anchor: AnchorMode) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the grouping mode.
    pub fn with_grouping(mut self, grouping: GroupingMode) -> Self {
        self.grouping = grouping;
        self
    }

    /// Validate the options.
    pub fn validate(&self) -> Result<()> {
        if let AnchorMode::Manual(p) = self.anchor {
            if !(p.x.is_finite() && p.y.is_finite()) {
                return Err(LayoutError::invalid_param(
                    "anchor",
                    p,
                    "manual anchor must be finite",
                ));
            }
        }
        Ok(())
    }
}

/// Translate each island so its alignment point coincides with the anchor
/// along the direction's axis.
///
/// Only the axis implied by the direction moves; the perpendicular
/// component of every translation is zero. [`AlignDirection::None`] is a
/// no-op.
///
/// Islands whose UDIM tile falls outside the valid `[0, 10) x [0, inf)`
/// range still move, and the condition is surfaced as
/// [`Diagnostic::UdimTileOutOfRange`].
///
/// The report carries one global anchor point for the BoundingBox and
/// Manual modes; UDIM-tile alignment reports none, matching the observed
/// reference behavior.
pub fn align_uvs<I: MeshIndex>(
    mesh: &mut UvMesh<I>,
    channel: usize,
    selection: Option<&Selection<I>>,
    options: &AlignOptions,
    cancel: &Cancel,
) -> Result<OpReport> {
    mesh.check_channel(channel)?;
    if let Some(sel) = selection {
        sel.validate(mesh)?;
    }
    options.validate()?;

    let axis = match options.direction.moved_axis() {
        Some(axis) => axis,
        None => return Ok(OpReport::done()),
    };

    let islands = IslandSet::segment(mesh, channel, selection, options.grouping);
    if islands.is_empty() {
        return Ok(OpReport::done());
    }
    if cancel.is_cancelled() {
        return Ok(OpReport::cancelled());
    }

    let overall = match islands.overall_bounds() {
        Some(bounds) => bounds,
        None => return Ok(OpReport::done()),
    };

    let mut diagnostics = Vec::new();
    let mut translations = Vec::with_capacity(islands.len());

    for (idx, island) in islands.islands().iter().enumerate() {
        let island_point = options.direction.point_in_box(&island.bounds);
        let anchor_point = match options.anchor {
            AnchorMode::BoundingBox => options.direction.point_in_box(&overall),
            AnchorMode::Manual(p) => p,
            AnchorMode::UdimTile => {
                let tile = UdimTile::classify_box(&island.bounds);
                if !tile.is_valid() {
                    diagnostics.push(Diagnostic::UdimTileOutOfRange { island: idx, tile });
                }
                options.direction.point_in_tile(&tile)
            }
        };
        translations.push(axis.vector(axis.of(anchor_point) - axis.of(island_point)));
    }

    for (island, &offset) in islands.islands().iter().zip(translations.iter()) {
        for &v in &island.vertices {
            let uv = mesh.uv(channel, v);
            mesh.set_uv(channel, v, uv + offset);
        }
    }

    let mut report = match options.anchor {
        AnchorMode::BoundingBox => {
            OpReport::with_pivots(vec![options.direction.point_in_box(&overall)])
        }
        AnchorMode::Manual(p) => OpReport::with_pivots(vec![p]),
        // No visualization anchor for per-island UDIM alignment.
        AnchorMode::UdimTile => OpReport::done(),
    };
    report.diagnostics = diagnostics;
    Ok(report)
}
