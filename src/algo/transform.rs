//! The Transform operation: scale, rotate, and translate UV islands around a
//! configurable pivot.
//!
//! Rotation uses the screen convention of the reference tooling: positive
//! angles rotate clockwise, so the rotation matrix is built from the negated
//! angle relative to the mathematical counter-clockwise convention.
//!
//! # Example
//!
//! ```
//! use islet::algo::{transform_uvs, Cancel, PivotMode, TransformOptions};
//! use islet::mesh::UvMesh;
//! use nalgebra::{Point2, Vector2};
//!
//! let uvs = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//! ];
//! let mut mesh: UvMesh = UvMesh::from_triangles(uvs, &[[0, 1, 2]]).unwrap();
//!
//! let options = TransformOptions::default()
//!     .with_scale(Vector2::new(2.0, 2.0))
//!     .with_pivot(PivotMode::Origin);
//! let report = transform_uvs(&mut mesh, 0, None, &options, &Cancel::none()).unwrap();
//! assert!(report.completed);
//! ```

use nalgebra::{Point2, Vector2};

use crate::error::{LayoutError, Result};
use crate::mesh::{MeshIndex, Selection, UvMesh, VertexId};

use super::cancel::Cancel;
use super::islands::{GroupingMode, IslandSet};
use super::op::OpReport;

/// The point scale and rotation are applied about.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PivotMode {
    /// The UV origin (0, 0).
    Origin,
    /// The center of the bounding box of the entire transforming set.
    #[default]
    BoundingBoxCenter,
    /// The center of the bounding box of the island containing each vertex.
    IndividualBoundingBoxCenter,
    /// A caller-supplied point.
    Manual(Point2<f64>),
}

/// How the translation field is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TranslationMode {
    /// Offset every vertex by the translation vector.
    #[default]
    Relative,
    /// Move the set so its pivot lands exactly on the translation point.
    Absolute,
}

/// Options for the Transform operation.
///
/// Validated once per call; all numeric fields must be finite.
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Per-axis scale factors. `(1, 1)` is a no-op.
    pub scale: Vector2<f64>,

    /// Rotation in degrees, clockwise positive.
    pub rotation_degrees: f64,

    /// Translation vector (Relative) or target point (Absolute).
    pub translation: Vector2<f64>,

    /// Interpretation of `translation`.
    pub translation_mode: TranslationMode,

    /// Pivot for scale and rotation.
    pub pivot_mode: PivotMode,

    /// How vertices are grouped into islands.
    pub grouping: GroupingMode,

    /// Fixed-increment rotation applied first, always about each island's
    /// own bounding-box center.
    pub quick_rotation_degrees: f64,

    /// Fixed offset applied after the quick rotation.
    pub quick_translation: Vector2<f64>,

    /// Whether bounding-box rebuilds may run in parallel (default: true).
    pub parallel: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            scale: Vector2::new(1.0, 1.0),
            rotation_degrees: 0.0,
            translation: Vector2::zeros(),
            translation_mode: TranslationMode::Relative,
            pivot_mode: PivotMode::default(),
            grouping: GroupingMode::default(),
            quick_rotation_degrees: 0.0,
            quick_translation: Vector2::zeros(),
            parallel: true,
        }
    }
}

impl TransformOptions {
    /// Set the scale factors.
    pub fn with_scale(mut self, scale: Vector2<f64>) -> Self {
        self.scale = scale;
        self
    }

    /// Set the rotation in degrees (clockwise positive).
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    /// Set a relative translation.
    pub fn with_translation(mut self, translation: Vector2<f64>) -> Self {
        self.translation = translation;
        self.translation_mode = TranslationMode::Relative;
        self
    }

    /// Set an absolute translation target for the pivot.
    pub fn with_absolute_translation(mut self, target: Vector2<f64>) -> Self {
        self.translation = target;
        self.translation_mode = TranslationMode::Absolute;
        self
    }

    /// Set the pivot mode.
    pub fn with_pivot(mut self, pivot_mode: PivotMode) -> Self {
        self.pivot_mode = pivot_mode;
        self
    }

    /// Set the grouping mode.
    pub fn with_grouping(mut self, grouping: GroupingMode) -> Self {
        self.grouping = grouping;
        self
    }

    /// Set the quick rotation increment in degrees.
    pub fn with_quick_rotation(mut self, degrees: f64) -> Self {
        self.quick_rotation_degrees = degrees;
        self
    }

    /// Set the quick translation offset.
    pub fn with_quick_translation(mut self, offset: Vector2<f64>) -> Self {
        self.quick_translation = offset;
        self
    }

    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Validate all numeric fields.
    pub fn validate(&self) -> Result<()> {
        if !(self.scale.x.is_finite() && self.scale.y.is_finite()) {
            return Err(LayoutError::invalid_param(
                "scale",
                self.scale,
                "must be finite",
            ));
        }
        if !self.rotation_degrees.is_finite() {
            return Err(LayoutError::invalid_param(
                "rotation_degrees",
                self.rotation_degrees,
                "must be finite",
            ));
        }
        if !(self.translation.x.is_finite() && self.translation.y.is_finite()) {
            return Err(LayoutError::invalid_param(
                "translation",
                self.translation,
                "must be finite",
            ));
        }
        if !self.quick_rotation_degrees.is_finite() {
            return Err(LayoutError::invalid_param(
                "quick_rotation_degrees",
                self.quick_rotation_degrees,
                "must be finite",
            ));
        }
        if !(self.quick_translation.x.is_finite() && self.quick_translation.y.is_finite()) {
            return Err(LayoutError::invalid_param(
                "quick_translation",
                self.quick_translation,
                "must be finite",
            ));
        }
        if let PivotMode::Manual(p) = self.pivot_mode {
            if !(p.x.is_finite() && p.y.is_finite()) {
                return Err(LayoutError::invalid_param(
                    "pivot_mode",
                    p,
                    "manual pivot must be finite",
                ));
            }
        }
        Ok(())
    }
}

/// Rotate a point about a pivot by `degrees`, clockwise positive.
#[inline]
fn rotate_about(p: Point2<f64>, pivot: Point2<f64>, degrees: f64) -> Point2<f64> {
    let theta = -degrees.to_radians();
    let (sin, cos) = theta.sin_cos();
    let d = p - pivot;
    pivot + Vector2::new(cos * d.x - sin * d.y, sin * d.x + cos * d.y)
}

/// The resolved pivot for one apply step.
enum PivotSource {
    Global(Point2<f64>),
    PerIsland(Vec<Point2<f64>>),
}

impl PivotSource {
    #[inline]
    fn for_vertex<I: MeshIndex>(&self, islands: &IslandSet<I>, v: VertexId<I>) -> Point2<f64> {
        match self {
            PivotSource::Global(p) => *p,
            PivotSource::PerIsland(centers) => islands
                .island_of(v)
                .map(|idx| centers[idx])
                .unwrap_or_else(Point2::origin),
        }
    }
}

/// Apply scale, rotation, and translation to the selected UV islands.
///
/// Steps run in a fixed order, each skipped when its delta is trivial:
/// quick rotation, quick translation, scale, rotation, translation. Steps
/// that read a bounding-box-derived pivot recompute island bounds first,
/// since earlier steps may have moved vertices.
///
/// Returns one visualization pivot per island for
/// [`PivotMode::IndividualBoundingBoxCenter`], one global pivot otherwise.
/// A configuration with unit scale, zero rotation, and zero translation
/// leaves every UV position bit-identical.
pub fn transform_uvs<I: MeshIndex>(
    mesh: &mut UvMesh<I>,
    channel: usize,
    selection: Option<&Selection<I>>,
    options: &TransformOptions,
    cancel: &Cancel,
) -> Result<OpReport> {
    mesh.check_channel(channel)?;
    if let Some(sel) = selection {
        sel.validate(mesh)?;
    }
    options.validate()?;

    let mut islands = IslandSet::segment(mesh, channel, selection, options.grouping);
    if islands.is_empty() {
        return Ok(OpReport::done());
    }
    if cancel.is_cancelled() {
        return Ok(OpReport::cancelled());
    }

    // Tracks whether a previous step invalidated the segmentation-time boxes.
    let mut bounds_dirty = false;

    // Step 1: quick rotation, always about each island's own bbox center.
    if options.quick_rotation_degrees != 0.0 {
        for idx in 0..islands.len() {
            let pivot = islands.island(idx).bounds.center();
            for i in 0..islands.island(idx).vertices.len() {
                let v = islands.island(idx).vertices[i];
                let rotated = rotate_about(mesh.uv(channel, v), pivot, options.quick_rotation_degrees);
                mesh.set_uv(channel, v, rotated);
            }
        }
        bounds_dirty = true;
    }

    // Step 2: quick translation.
    if options.quick_translation != Vector2::zeros() {
        let offset = options.quick_translation;
        for v in collect_vertices(&islands) {
            let uv = mesh.uv(channel, v);
            mesh.set_uv(channel, v, uv + offset);
        }
        bounds_dirty = true;
    }

    // Step 3: scale.
    if options.scale != Vector2::new(1.0, 1.0) {
        let pivots = resolve_pivots(mesh, channel, &mut islands, options, &mut bounds_dirty);
        let scale = options.scale;
        for v in collect_vertices(&islands) {
            let pivot = pivots.for_vertex(&islands, v);
            let d = mesh.uv(channel, v) - pivot;
            mesh.set_uv(channel, v, pivot + d.component_mul(&scale));
        }
        bounds_dirty = true;
    }

    // Step 4: rotation.
    if options.rotation_degrees != 0.0 {
        let pivots = resolve_pivots(mesh, channel, &mut islands, options, &mut bounds_dirty);
        for v in collect_vertices(&islands) {
            let pivot = pivots.for_vertex(&islands, v);
            let rotated = rotate_about(mesh.uv(channel, v), pivot, options.rotation_degrees);
            mesh.set_uv(channel, v, rotated);
        }
        bounds_dirty = true;
    }

    // Step 5: translation.
    match options.translation_mode {
        TranslationMode::Relative => {
            if options.translation != Vector2::zeros() {
                let offset = options.translation;
                for v in collect_vertices(&islands) {
                    let uv = mesh.uv(channel, v);
                    mesh.set_uv(channel, v, uv + offset);
                }
                bounds_dirty = true;
            }
        }
        TranslationMode::Absolute => {
            // The pivot lands exactly on the translation point.
            let pivots = resolve_pivots(mesh, channel, &mut islands, options, &mut bounds_dirty);
            let target = options.translation;
            for v in collect_vertices(&islands) {
                let pivot = pivots.for_vertex(&islands, v);
                let uv = mesh.uv(channel, v);
                mesh.set_uv(channel, v, uv + target - pivot.coords);
            }
            bounds_dirty = true;
        }
    }

    // Visualization pivots reflect final vertex positions.
    if bounds_dirty {
        islands.recompute_bounds(mesh, channel, options.parallel);
    }
    let pivots = match options.pivot_mode {
        PivotMode::Origin => vec![Point2::origin()],
        PivotMode::Manual(p) => vec![p],
        PivotMode::BoundingBoxCenter => {
            vec![islands
                .overall_bounds()
                .map(|b| b.center())
                .unwrap_or_else(Point2::origin)]
        }
        PivotMode::IndividualBoundingBoxCenter => islands
            .islands()
            .iter()
            .map(|isl| isl.bounds.center())
            .collect(),
    };

    Ok(OpReport::with_pivots(pivots))
}

/// Snapshot the member vertices so the mesh can be mutated while iterating.
fn collect_vertices<I: MeshIndex>(islands: &IslandSet<I>) -> Vec<VertexId<I>> {
    islands.vertices().collect()
}

/// Resolve the pivot for one step, rebuilding island bounds if the pivot
/// depends on them and a previous step moved vertices.
fn resolve_pivots<I: MeshIndex>(
    mesh: &UvMesh<I>,
    channel: usize,
    islands: &mut IslandSet<I>,
    options: &TransformOptions,
    bounds_dirty: &mut bool,
) -> PivotSource {
    match options.pivot_mode {
        PivotMode::Origin => PivotSource::Global(Point2::origin()),
        PivotMode::Manual(p) => PivotSource::Global(p),
        PivotMode::BoundingBoxCenter => {
            if *bounds_dirty {
                islands.recompute_bounds(mesh, channel, options.parallel);
                *bounds_dirty = false;
            }
            PivotSource::Global(
                islands
                    .overall_bounds()
                    .map(|b| b.center())
                    .unwrap_or_else(Point2::origin),
            )
        }
        PivotMode::IndividualBoundingBoxCenter => {
            if *bounds_dirty {
                islands.recompute_bounds(mesh, channel, options.parallel);
                *bounds_dirty = false;
            }
            PivotSource::PerIsland(
                islands
                    .islands()
                    .iter()
                    .map(|isl| isl.bounds.center())
                    .collect(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> UvMesh {
        let uvs = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        UvMesh::from_triangles(uvs, &[[0, 1, 2], [0, 2, 3]]).unwrap()
    }

    fn positions(mesh: &UvMesh) -> Vec<Point2<f64>> {
        mesh.vertex_ids().map(|v| mesh.uv(0, v)).collect()
    }

    #[test]
    fn test_noop_config_is_bit_identical() {
        let mut mesh = unit_square();
        let before = positions(&mesh);

        let report = transform_uvs(
            &mut mesh,
            0,
            None,
            &TransformOptions::default(),
            &Cancel::none(),
        )
        .unwrap();

        assert!(report.completed);
        assert_eq!(positions(&mesh), before);
    }

    #[test]
    fn test_scale_about_bbox_center() {
        let mut mesh = unit_square();
        let options = TransformOptions::default()
            .with_scale(Vector2::new(2.0, 2.0))
            .with_pivot(PivotMode::BoundingBoxCenter)
            .sequential();
        transform_uvs(&mut mesh, 0, None, &options, &Cancel::none()).unwrap();

        assert_eq!(
            positions(&mesh),
            vec![
                Point2::new(-0.5, -0.5),
                Point2::new(1.5, -0.5),
                Point2::new(1.5, 1.5),
                Point2::new(-0.5, 1.5),
            ]
        );
    }

    #[test]
    fn test_rotation_round_trip() {
        let mut mesh = unit_square();
        let before = positions(&mesh);

        let forward = TransformOptions::default().with_rotation(33.0);
        let backward = TransformOptions::default().with_rotation(-33.0);
        transform_uvs(&mut mesh, 0, None, &forward, &Cancel::none()).unwrap();
        transform_uvs(&mut mesh, 0, None, &backward, &Cancel::none()).unwrap();

        for (after, orig) in positions(&mesh).iter().zip(before.iter()) {
            assert!(
                (after - orig).norm() < 1e-5,
                "round trip drifted: {:?} -> {:?}",
                orig,
                after
            );
        }
    }

    #[test]
    fn test_rotation_is_clockwise_positive() {
        let mut mesh = unit_square();
        let options = TransformOptions::default()
            .with_rotation(90.0)
            .with_pivot(PivotMode::Origin);
        transform_uvs(&mut mesh, 0, None, &options, &Cancel::none()).unwrap();

        // Clockwise 90 degrees about the origin maps (1, 0) to (0, -1).
        let p = mesh.uv(0, VertexId::new(1));
        assert!((p.x - 0.0).abs() < 1e-12 && (p.y - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_relative_translation() {
        let mut mesh = unit_square();
        let options = TransformOptions::default().with_translation(Vector2::new(0.25, -1.0));
        transform_uvs(&mut mesh, 0, None, &options, &Cancel::none()).unwrap();
        assert_eq!(mesh.uv(0, VertexId::new(0)), Point2::new(0.25, -1.0));
    }

    #[test]
    fn test_absolute_translation_places_pivot() {
        let mut mesh = unit_square();
        let options = TransformOptions::default()
            .with_pivot(PivotMode::BoundingBoxCenter)
            .with_absolute_translation(Vector2::new(3.0, 4.0));
        transform_uvs(&mut mesh, 0, None, &options, &Cancel::none()).unwrap();

        // The bbox center (0.5, 0.5) lands exactly on the target.
        assert_eq!(mesh.uv(0, VertexId::new(0)), Point2::new(2.5, 3.5));
        assert_eq!(mesh.uv(0, VertexId::new(2)), Point2::new(3.5, 4.5));
    }

    #[test]
    fn test_individual_pivot_scales_islands_in_place() {
        // Two separated squares; per-island scaling must not move centers.
        let uvs = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(4.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(5.0, 1.0),
            Point2::new(4.0, 1.0),
        ];
        let triangles = vec![[0, 1, 2], [0, 2, 3], [4, 5, 6], [4, 6, 7]];
        let mut mesh: UvMesh = UvMesh::from_triangles(uvs, &triangles).unwrap();

        let options = TransformOptions::default()
            .with_scale(Vector2::new(0.5, 0.5))
            .with_pivot(PivotMode::IndividualBoundingBoxCenter);
        let report = transform_uvs(&mut mesh, 0, None, &options, &Cancel::none()).unwrap();

        // Each island shrank about its own center.
        assert_eq!(mesh.uv(0, VertexId::new(0)), Point2::new(0.25, 0.25));
        assert_eq!(mesh.uv(0, VertexId::new(4)), Point2::new(4.25, 0.25));
        // One visualization pivot per island.
        assert_eq!(report.pivots.len(), 2);
        assert_eq!(report.pivots[0], Point2::new(0.5, 0.5));
        assert_eq!(report.pivots[1], Point2::new(4.5, 0.5));
    }

    #[test]
    fn test_quick_rotation_uses_island_center() {
        let mut mesh = unit_square();
        let options = TransformOptions::default().with_quick_rotation(180.0);
        transform_uvs(&mut mesh, 0, None, &options, &Cancel::none()).unwrap();

        // 180 degrees about (0.5, 0.5) swaps opposite corners.
        let p = mesh.uv(0, VertexId::new(0));
        assert!((p - Point2::new(1.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_cancellation_before_apply() {
        let mut mesh = unit_square();
        let before = positions(&mesh);
        let options = TransformOptions::default().with_translation(Vector2::new(1.0, 0.0));

        let report =
            transform_uvs(&mut mesh, 0, None, &options, &Cancel::new(|| true)).unwrap();
        assert!(!report.completed);
        assert_eq!(positions(&mesh), before);
    }

    #[test]
    fn test_non_finite_parameter_rejected() {
        let mut mesh = unit_square();
        let options = TransformOptions::default().with_rotation(f64::NAN);
        let err = transform_uvs(&mut mesh, 0, None, &options, &Cancel::none()).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidParameter { .. }));
    }

    #[test]
    fn test_empty_selection_is_noop() {
        let mut mesh = unit_square();
        let before = positions(&mesh);
        let sel: Selection = Selection::default();
        let options = TransformOptions::default().with_translation(Vector2::new(1.0, 1.0));

        let report =
            transform_uvs(&mut mesh, 0, Some(&sel), &options, &Cancel::none()).unwrap();
        assert!(report.completed);
        assert!(report.pivots.is_empty());
        assert_eq!(positions(&mesh), before);
    }
}
