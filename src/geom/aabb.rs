//! Axis-aligned bounding boxes in UV space.

use nalgebra::{Point2, Vector2};

/// A UV-space axis, used to select the coordinate a layout operation moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The U (horizontal) axis.
    X,
    /// The V (vertical) axis.
    Y,
}

impl Axis {
    /// The other axis.
    #[inline]
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Extract this axis' component of a point.
    #[inline]
    pub fn of(self, p: Point2<f64>) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }

    /// Build a vector with `value` on this axis and zero on the other.
    #[inline]
    pub fn vector(self, value: f64) -> Vector2<f64> {
        match self {
            Axis::X => Vector2::new(value, 0.0),
            Axis::Y => Vector2::new(0.0, value),
        }
    }
}

/// A 2D axis-aligned bounding box.
///
/// Boxes are closed on both ends; `min == max` is a valid degenerate box
/// (a single point), which arises naturally from single-vertex islands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point2<f64>,
    /// Maximum corner.
    pub max: Point2<f64>,
}

impl Aabb {
    /// Create a box from explicit corners.
    pub fn new(min: Point2<f64>, max: Point2<f64>) -> Self {
        Self { min, max }
    }

    /// Compute the bounding box of a set of points.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_points<It>(points: It) -> Option<Self>
    where
        It: IntoIterator<Item = Point2<f64>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Aabb::new(first, first);
        for p in iter {
            bounds.insert(p);
        }
        Some(bounds)
    }

    /// Grow the box to contain a point.
    #[inline]
    pub fn insert(&mut self, p: Point2<f64>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// The center point of the box.
    #[inline]
    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            0.5 * (self.min.x + self.max.x),
            0.5 * (self.min.y + self.max.y),
        )
    }

    /// Width (U extent) of the box.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height (V extent) of the box.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Extent of the box along an axis.
    #[inline]
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width(),
            Axis::Y => self.height(),
        }
    }

    /// The smallest box containing both boxes.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb::new(
            Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        )
    }

    /// A copy grown by `padding` on every side.
    pub fn expanded(&self, padding: f64) -> Aabb {
        Aabb::new(
            Point2::new(self.min.x - padding, self.min.y - padding),
            Point2::new(self.max.x + padding, self.max.y + padding),
        )
    }

    /// A copy translated by `offset`.
    pub fn translated(&self, offset: Vector2<f64>) -> Aabb {
        Aabb::new(self.min + offset, self.max + offset)
    }

    /// Whether the interiors of the two boxes overlap.
    ///
    /// Touching edges do not count as an intersection, so boxes laid exactly
    /// edge-to-edge are considered separated.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let bounds = Aabb::from_points(vec![
            Point2::new(-1.0, 0.5),
            Point2::new(2.0, -0.5),
            Point2::new(0.5, 3.0),
        ])
        .unwrap();
        assert_eq!(bounds.min, Point2::new(-1.0, -0.5));
        assert_eq!(bounds.max, Point2::new(2.0, 3.0));
        assert_eq!(bounds.center(), Point2::new(0.5, 1.25));
    }

    #[test]
    fn test_from_points_empty() {
        assert!(Aabb::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_extents() {
        let bounds = Aabb::new(Point2::new(0.0, 1.0), Point2::new(3.0, 2.0));
        assert_eq!(bounds.width(), 3.0);
        assert_eq!(bounds.height(), 1.0);
        assert_eq!(bounds.extent(Axis::X), 3.0);
        assert_eq!(bounds.extent(Axis::Y), 1.0);
    }

    #[test]
    fn test_union() {
        let a = Aabb::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        let b = Aabb::new(Point2::new(2.0, -1.0), Point2::new(3.0, 0.5));
        let u = a.union(&b);
        assert_eq!(u.min, Point2::new(0.0, -1.0));
        assert_eq!(u.max, Point2::new(3.0, 1.0));
    }

    #[test]
    fn test_intersects_strict() {
        let a = Aabb::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        let overlapping = Aabb::new(Point2::new(0.5, 0.5), Point2::new(1.5, 1.5));
        let touching = Aabb::new(Point2::new(1.0, 0.0), Point2::new(2.0, 1.0));
        let apart = Aabb::new(Point2::new(2.0, 2.0), Point2::new(3.0, 3.0));

        assert!(a.intersects(&overlapping));
        // Edge-to-edge boxes do not intersect.
        assert!(!a.intersects(&touching));
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn test_expanded() {
        let a = Aabb::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        let e = a.expanded(0.25);
        assert_eq!(e.min, Point2::new(-0.25, -0.25));
        assert_eq!(e.max, Point2::new(1.25, 1.25));
    }

    #[test]
    fn test_axis_helpers() {
        assert_eq!(Axis::X.other(), Axis::Y);
        assert_eq!(Axis::Y.of(Point2::new(1.0, 2.0)), 2.0);
        assert_eq!(Axis::X.vector(3.0), Vector2::new(3.0, 0.0));
    }
}
