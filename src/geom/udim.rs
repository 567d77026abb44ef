//! UDIM tile classification and alignment points.
//!
//! UDIM tiles partition UV space into 1x1 unit squares identified by integer
//! `(u, v)` coordinates. The UDIM10 convention restricts valid tiles to
//! `u` in `[0, 10)` and `v >= 0`; classification itself accepts any finite
//! point and out-of-range tiles are reported to the host, never clamped.

use nalgebra::Point2;

use super::aabb::{Aabb, Axis};

/// An integer `(u, v)` pair identifying a 1x1 UDIM tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UdimTile {
    /// Tile column. Valid tiles have `0 <= u < 10`.
    pub u: i32,
    /// Tile row. Valid tiles have `v >= 0`.
    pub v: i32,
}

impl UdimTile {
    /// Create a tile from explicit coordinates.
    pub fn new(u: i32, v: i32) -> Self {
        Self { u, v }
    }

    /// Classify a UV point into its containing tile by floor division.
    ///
    /// A point exactly on a tile boundary belongs to the upper/right tile
    /// (the tile interval is half-open). NaN or infinite coordinates are the
    /// caller's responsibility.
    #[inline]
    pub fn classify_point(p: Point2<f64>) -> UdimTile {
        UdimTile::new(p.x.floor() as i32, p.y.floor() as i32)
    }

    /// Classify a bounding box into a tile via its center point.
    ///
    /// A box straddling a tile boundary is classified as a whole by where
    /// its center falls; a center exactly on a boundary lands in the
    /// upper/right tile, same as [`classify_point`](Self::classify_point).
    #[inline]
    pub fn classify_box(bounds: &Aabb) -> UdimTile {
        UdimTile::classify_point(bounds.center())
    }

    /// Whether this tile lies in the valid UDIM10 range.
    #[inline]
    pub fn is_valid(&self) -> bool {
        (0..10).contains(&self.u) && self.v >= 0
    }

    /// The unit bounding box covered by this tile.
    pub fn bounds(&self) -> Aabb {
        let min = Point2::new(f64::from(self.u), f64::from(self.v));
        Aabb::new(min, Point2::new(min.x + 1.0, min.y + 1.0))
    }

    /// The conventional UDIM number of this tile (1001, 1002, ...).
    ///
    /// Only meaningful for valid tiles.
    pub fn udim_number(&self) -> i32 {
        1001 + self.u + 10 * self.v
    }
}

/// An edge or center of a bounding box used as an alignment reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlignDirection {
    /// The top edge midpoint.
    Top,
    /// The bottom edge midpoint.
    Bottom,
    /// The left edge midpoint.
    Left,
    /// The right edge midpoint.
    Right,
    /// The center, used to line up vertical center lines.
    CenterVertically,
    /// The center, used to line up horizontal center lines.
    CenterHorizontally,
    /// No alignment; operations treat this as a no-op.
    #[default]
    None,
}

impl AlignDirection {
    /// The alignment point of a bounding box for this direction.
    ///
    /// `None` maps to the origin, matching the reference behavior for an
    /// unset direction.
    pub fn point_in_box(&self, bounds: &Aabb) -> Point2<f64> {
        let center = bounds.center();
        match self {
            AlignDirection::Top => Point2::new(center.x, bounds.max.y),
            AlignDirection::Bottom => Point2::new(center.x, bounds.min.y),
            AlignDirection::Left => Point2::new(bounds.min.x, center.y),
            AlignDirection::Right => Point2::new(bounds.max.x, center.y),
            AlignDirection::CenterVertically | AlignDirection::CenterHorizontally => center,
            AlignDirection::None => Point2::origin(),
        }
    }

    /// The alignment point of a UDIM tile's unit square for this direction.
    pub fn point_in_tile(&self, tile: &UdimTile) -> Point2<f64> {
        self.point_in_box(&tile.bounds())
    }

    /// The axis an alignment along this direction moves, if any.
    ///
    /// Top/Bottom alignment moves islands vertically; Left/Right moves them
    /// horizontally. The center directions move the perpendicular axis:
    /// lining up vertical center lines means moving along X.
    pub fn moved_axis(&self) -> Option<Axis> {
        match self {
            AlignDirection::Top | AlignDirection::Bottom | AlignDirection::CenterHorizontally => {
                Some(Axis::Y)
            }
            AlignDirection::Left | AlignDirection::Right | AlignDirection::CenterVertically => {
                Some(Axis::X)
            }
            AlignDirection::None => None,
        }
    }
}
