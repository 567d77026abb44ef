//! The Distribute operation: per-island translations that evenly space
//! islands along an axis, equalize edge-to-edge gaps, or resolve
//! bounding-box overlap.
//!
//! All spacing modes walk the islands in spatial order (sorted by
//! bounding-box center along the moved axis) with a running cursor;
//! [`DistributeMode::MinimallyRemoveOverlap`] instead runs an iterative
//! pairwise-repulsion solver over the island boxes.
//!
//! # Example
//!
//! ```
//! use islet::algo::{distribute_uvs, Cancel, DistributeMode, DistributeOptions};
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
//! let options = DistributeOptions::default().with_mode(DistributeMode::VerticalSpace);
//! // A single island distributes to a no-op.
//! let report = distribute_uvs(&mut mesh, 0, None, &options, &Cancel::none()).unwrap();
//! assert!(report.completed);
//! ```

use nalgebra::Vector2;

use crate::error::{LayoutError, Result};
use crate::geom::{Aabb, AlignDirection, Axis};
use crate::mesh::{MeshIndex, Selection, UvMesh};

use super::cancel::Cancel;
use super::islands::{GroupingMode, IslandSet};
use super::op::{Diagnostic, OpReport};

/// The distribution policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistributeMode {
    /// Space islands so their top edges are evenly laid out (moves V).
    TopEdges,
    /// Space islands so their bottom edges are evenly laid out (moves V).
    BottomEdges,
    /// Space islands so their left edges are evenly laid out (moves U).
    LeftEdges,
    /// Space islands so their right edges are evenly laid out (moves U).
    RightEdges,
    /// Stack islands side by side by their vertical center lines (moves U).
    CentersVertically,
    /// Stack islands on top of each other by their horizontal center lines
    /// (moves V).
    CentersHorizontally,
    /// Equalize the vertical gap between consecutive islands (moves V).
    #[default]
    VerticalSpace,
    /// Equalize the horizontal gap between consecutive islands (moves U).
    HorizontalSpace,
    /// Push overlapping islands apart with minimal total displacement.
    MinimallyRemoveOverlap,
}

/// Options for the Distribute operation.
#[derive(Debug, Clone)]
pub struct DistributeOptions {
    /// The distribution policy.
    pub mode: DistributeMode,

    /// How vertices are grouped into islands.
    pub grouping: GroupingMode,

    /// Overrides the total extent the edge and space modes spread islands
    /// across (default: the overall bounding-box extent along the moved
    /// axis). Ignored when `manual_spacing` fixes the gap directly.
    pub manual_extent: Option<f64>,

    /// Fixed gap between consecutive islands (edge/center/space modes) or
    /// padding for overlap removal (applied as half per box side).
    pub manual_spacing: Option<f64>,

    /// Step length of the overlap solver, in UV units per iteration.
    pub step_amount: f64,

    /// Iteration cap for the overlap solver.
    pub max_iterations: usize,
}

impl Default for DistributeOptions {
    fn default() -> Self {
        Self {
            mode: DistributeMode::default(),
            grouping: GroupingMode::default(),
            manual_extent: None,
            manual_spacing: None,
            step_amount: 0.01,
            max_iterations: 10_000,
        }
    }
}

impl DistributeOptions {
    /// Set the distribution mode.
    pub fn with_mode(mut self, mode: DistributeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the grouping mode.
    pub fn with_grouping(mut self, grouping: GroupingMode) -> Self {
        self.grouping = grouping;
        self
    }

    /// Override the total extent used by the edge and space modes.
    pub fn with_manual_extent(mut self, extent: f64) -> Self {
        self.manual_extent = Some(extent);
        self
    }

    /// Fix the inter-island gap (or the overlap-removal padding).
    pub fn with_manual_spacing(mut self, spacing: f64) -> Self {
        self.manual_spacing = Some(spacing);
        self
    }

    /// Set the overlap-solver step length.
    pub fn with_step_amount(mut self, step_amount: f64) -> Self {
        self.step_amount = step_amount;
        self
    }

    /// Set the overlap-solver iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Validate all numeric fields.
    pub fn validate(&self) -> Result<()> {
        if let Some(extent) = self.manual_extent {
            if !extent.is_finite() {
                return Err(LayoutError::invalid_param(
                    "manual_extent",
                    extent,
                    "must be finite",
                ));
            }
        }
        if let Some(spacing) = self.manual_spacing {
            if !spacing.is_finite() || spacing < 0.0 {
                return Err(LayoutError::invalid_param(
                    "manual_spacing",
                    spacing,
                    "must be finite and non-negative",
                ));
            }
        }
        if !self.step_amount.is_finite() || self.step_amount <= 0.0 {
            return Err(LayoutError::invalid_param(
                "step_amount",
                self.step_amount,
                "must be finite and positive",
            ));
        }
        if self.max_iterations == 0 {
            return Err(LayoutError::invalid_param(
                "max_iterations",
                self.max_iterations,
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// How a spacing mode walks the sorted islands.
struct Walk {
    axis: Axis,
    /// The island point placed at the cursor.
    anchor: AlignDirection,
    /// Top/Right modes walk from the overall maximum downward.
    descending: bool,
    /// Center modes insert no automatic gaps.
    gaps: bool,
}

fn walk_for(mode: DistributeMode) -> Option<Walk> {
    use DistributeMode::*;
    let walk = match mode {
        TopEdges => Walk {
            axis: Axis::Y,
            anchor: AlignDirection::Top,
            descending: true,
            gaps: true,
        },
        BottomEdges => Walk {
            axis: Axis::Y,
            anchor: AlignDirection::Bottom,
            descending: false,
            gaps: true,
        },
        LeftEdges => Walk {
            axis: Axis::X,
            anchor: AlignDirection::Left,
            descending: false,
            gaps: true,
        },
        RightEdges => Walk {
            axis: Axis::X,
            anchor: AlignDirection::Right,
            descending: true,
            gaps: true,
        },
        CentersVertically => Walk {
            axis: Axis::X,
            anchor: AlignDirection::Left,
            descending: false,
            gaps: false,
        },
        CentersHorizontally => Walk {
            axis: Axis::Y,
            anchor: AlignDirection::Bottom,
            descending: false,
            gaps: false,
        },
        VerticalSpace => Walk {
            axis: Axis::Y,
            anchor: AlignDirection::Bottom,
            descending: false,
            gaps: true,
        },
        HorizontalSpace => Walk {
            axis: Axis::X,
            anchor: AlignDirection::Left,
            descending: false,
            gaps: true,
        },
        MinimallyRemoveOverlap => return None,
    };
    Some(walk)
}

/// Compute and apply per-island translations for the chosen mode.
///
/// Zero or one islands is always a no-op (the equal-gap divisor
/// `count - 1` is guarded by the single-island case). Distribute produces
/// no visualization pivots.
pub fn distribute_uvs<I: MeshIndex>(
    mesh: &mut UvMesh<I>,
    channel: usize,
    selection: Option<&Selection<I>>,
    options: &DistributeOptions,
    cancel: &Cancel,
) -> Result<OpReport> {
    mesh.check_channel(channel)?;
    if let Some(sel) = selection {
        sel.validate(mesh)?;
    }
    options.validate()?;

    let islands = IslandSet::segment(mesh, channel, selection, options.grouping);
    if islands.len() <= 1 {
        return Ok(OpReport::done());
    }
    if cancel.is_cancelled() {
        return Ok(OpReport::cancelled());
    }

    let mut report = OpReport::done();
    let translations = match walk_for(options.mode) {
        Some(walk) => cursor_walk(&islands, &walk, options),
        None => match overlap_solver(&islands, options, cancel) {
            SolverOutcome::Cancelled => return Ok(OpReport::cancelled()),
            SolverOutcome::Solved(translations) => translations,
            SolverOutcome::Unresolved(translations, iterations) => {
                report
                    .diagnostics
                    .push(Diagnostic::OverlapUnresolved { iterations });
                translations
            }
        },
    };

    for (island, &offset) in islands.islands().iter().zip(translations.iter()) {
        if offset == Vector2::zeros() {
            continue;
        }
        for &v in &island.vertices {
            let uv = mesh.uv(channel, v);
            mesh.set_uv(channel, v, uv + offset);
        }
    }

    Ok(report)
}

/// Lay islands out edge-to-edge along the walk axis with a running cursor.
fn cursor_walk<I: MeshIndex>(
    islands: &IslandSet<I>,
    walk: &Walk,
    options: &DistributeOptions,
) -> Vec<Vector2<f64>> {
    let count = islands.len();
    let overall = match islands.overall_bounds() {
        Some(bounds) => bounds,
        None => return vec![Vector2::zeros(); count],
    };

    let sum_extents: f64 = islands
        .islands()
        .iter()
        .map(|isl| isl.bounds.extent(walk.axis))
        .sum();
    let total = options
        .manual_extent
        .unwrap_or_else(|| overall.extent(walk.axis));

    // A fixed spacing wins outright; otherwise the gap modes spread the
    // leftover of `total` as equal gaps. Guarded formula: count >= 2 here,
    // and a negative leftover clamps to zero rather than pulling islands
    // together.
    let gap = match options.manual_spacing {
        Some(spacing) => spacing,
        None if walk.gaps => ((total - sum_extents) / (count as f64 - 1.0)).max(0.0),
        None => 0.0,
    };

    let order = islands.sorted_by_center(walk.axis);
    let mut translations = vec![Vector2::zeros(); count];
    let mut cursor = if walk.descending {
        walk.axis.of(overall.max)
    } else {
        walk.axis.of(overall.min)
    };

    let ordered: Box<dyn Iterator<Item = &usize>> = if walk.descending {
        Box::new(order.iter().rev())
    } else {
        Box::new(order.iter())
    };
    for &idx in ordered {
        let bounds = &islands.island(idx).bounds;
        let extent = bounds.extent(walk.axis);
        let anchor = walk.axis.of(walk.anchor.point_in_box(bounds));
        translations[idx] = walk.axis.vector(cursor - anchor);
        if walk.descending {
            cursor -= extent + gap;
        } else {
            cursor += extent + gap;
        }
    }

    translations
}

enum SolverOutcome {
    Solved(Vec<Vector2<f64>>),
    Unresolved(Vec<Vector2<f64>>, usize),
    Cancelled,
}

/// Iterative pairwise repulsion until no two (expanded) boxes intersect.
///
/// Every island accumulates a fixed-length step away from the center of
/// each island whose box it currently intersects; all accumulated steps are
/// applied simultaneously each iteration so the result carries no
/// island-order bias. Coincident centers are broken deterministically by
/// pushing island `i` along the angle `2*pi*i / count`.
fn overlap_solver<I: MeshIndex>(
    islands: &IslandSet<I>,
    options: &DistributeOptions,
    cancel: &Cancel,
) -> SolverOutcome {
    let count = islands.len();
    let padding = options.manual_spacing.map_or(0.0, |spacing| spacing * 0.5);

    let mut boxes: Vec<Aabb> = islands
        .islands()
        .iter()
        .map(|isl| isl.bounds.expanded(padding))
        .collect();
    let original_centers: Vec<_> = boxes.iter().map(Aabb::center).collect();

    let mut iterations = 0;
    let resolved = loop {
        if cancel.is_cancelled() {
            return SolverOutcome::Cancelled;
        }

        let mut steps = vec![Vector2::zeros(); count];
        let mut any_overlap = false;
        for i in 0..count {
            for j in 0..count {
                if i == j || !boxes[i].intersects(&boxes[j]) {
                    continue;
                }
                any_overlap = true;
                let away = boxes[i].center() - boxes[j].center();
                let direction = if away.norm() > 1e-12 {
                    away.normalize()
                } else {
                    // Exactly coincident centers: deterministic tie-break
                    // on a unit circle instead of a zero vector.
                    let angle = std::f64::consts::TAU * i as f64 / count as f64;
                    Vector2::new(angle.cos(), angle.sin())
                };
                steps[i] += options.step_amount * direction;
            }
        }

        if !any_overlap {
            break true;
        }

        // Apply all adjustments simultaneously.
        for (b, step) in boxes.iter_mut().zip(steps.iter()) {
            *b = b.translated(*step);
        }

        // `iterations` counts applied passes, so the cap breaks after the
        // final pass has moved the boxes.
        iterations += 1;
        if iterations >= options.max_iterations {
            break false;
        }
    };

    let translations: Vec<Vector2<f64>> = boxes
        .iter()
        .zip(original_centers.iter())
        .map(|(b, orig)| b.center() - orig)
        .collect();

    if resolved {
        SolverOutcome::Solved(translations)
    } else {
        SolverOutcome::Unresolved(translations, iterations)
    }
}
