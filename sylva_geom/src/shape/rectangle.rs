// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned rectangles.

use alloc::boxed::Box;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::error::GeomError;
use crate::path::iter::{Identity, PathIterator, PointMapper, ShapePathIter};
use crate::shape::Shape2D;
use crate::transform2d::Transform2D;
use crate::tuple2::{Point2, Vector2};

/// An axis-aligned rectangle `[min, max]`.
///
/// The corners are always ordered (`min <= max` on both axes). Point
/// containment is closed: the boundary belongs to the rectangle, so
/// `contains(p)` holds exactly when `distance(p) == 0`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rectangle {
    min: Point2,
    max: Point2,
}

impl Rectangle {
    /// The zero rectangle at the origin. Empty.
    pub const ZERO: Self = Self {
        min: Point2::ORIGIN,
        max: Point2::ORIGIN,
    };

    /// Rectangle spanning two corners given by coordinates, in any order.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            min: Point2::new(x1.min(x2), y1.min(y2)),
            max: Point2::new(x1.max(x2), y1.max(y2)),
        }
    }

    /// Rectangle spanning two corners, in any order.
    pub fn from_corners(p1: Point2, p2: Point2) -> Self {
        Self::new(p1.x, p1.y, p2.x, p2.y)
    }

    /// Rectangle from its minimum corner and size.
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Result<Self, GeomError> {
        let mut r = Self::ZERO;
        r.set(x, y, width, height)?;
        Ok(r)
    }

    /// Replace with the rectangle at `(x, y)` of the given size.
    pub fn set(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), GeomError> {
        if width < 0.0 || height < 0.0 {
            return Err(GeomError::InvalidArgument("negative rectangle extent"));
        }
        self.min = Point2::new(x, y);
        self.max = Point2::new(x + width, y + height);
        Ok(())
    }

    /// Replace with the rectangle spanning two corners, in any order.
    pub fn set_from_corners(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        *self = Self::new(x1, y1, x2, y2);
    }

    /// Minimum corner.
    pub const fn min(&self) -> Point2 {
        self.min
    }

    /// Maximum corner.
    pub const fn max(&self) -> Point2 {
        self.max
    }

    /// Smallest x.
    pub const fn min_x(&self) -> f64 {
        self.min.x
    }

    /// Smallest y.
    pub const fn min_y(&self) -> f64 {
        self.min.y
    }

    /// Largest x.
    pub const fn max_x(&self) -> f64 {
        self.max.x
    }

    /// Largest y.
    pub const fn max_y(&self) -> f64 {
        self.max.y
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center point.
    pub fn center(&self) -> Point2 {
        self.min.midpoint(self.max)
    }

    /// Grow to include `p`.
    pub fn add_point(&mut self, p: Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Whether `r` lies entirely inside this rectangle (boundaries may touch).
    pub fn contains_rect(&self, r: &Self) -> bool {
        r.min.x >= self.min.x && r.min.y >= self.min.y && r.max.x <= self.max.x && r.max.y <= self.max.y
    }

    /// Grow to the union with `r`.
    pub fn union(&mut self, r: &Self) {
        *self = self.create_union(r);
    }

    /// Smallest rectangle containing both `self` and `r`.
    pub fn create_union(&self, r: &Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(r.min.x), self.min.y.min(r.min.y)),
            max: Point2::new(self.max.x.max(r.max.x), self.max.y.max(r.max.y)),
        }
    }

    /// Shrink to the intersection with `r`.
    pub fn intersection(&mut self, r: &Self) {
        *self = self.create_intersection(r);
    }

    /// Overlap of `self` and `r`. Disjoint rectangles give [`Rectangle::ZERO`].
    pub fn create_intersection(&self, r: &Self) -> Self {
        let x1 = self.min.x.max(r.min.x);
        let y1 = self.min.y.max(r.min.y);
        let x2 = self.max.x.min(r.max.x);
        let y2 = self.max.y.min(r.max.y);
        if x1 <= x2 && y1 <= y2 {
            Self {
                min: Point2::new(x1, y1),
                max: Point2::new(x2, y2),
            }
        } else {
            Self::ZERO
        }
    }

    /// Move this rectangle out of `reference` along a single axis and return
    /// the displacement applied.
    ///
    /// Candidates are tried in a fixed order (push right, push left, push up,
    /// push down). The first one that points the right way and is no larger
    /// than any other candidate wins, so ties favour x over y.
    pub fn avoid_collision_with(&mut self, reference: &Self) -> Vector2 {
        let dx1 = reference.max.x - self.min.x;
        let dx2 = self.max.x - reference.min.x;
        let dy1 = reference.max.y - self.min.y;
        let dy2 = self.max.y - reference.min.y;

        let (adx1, adx2, ady1, ady2) = (dx1.abs(), dx2.abs(), dy1.abs(), dy2.abs());

        let d = if dx1 >= 0.0 && adx1 <= adx2 && adx1 <= ady1 && adx1 <= ady2 {
            Vector2::new(dx1, 0.0)
        } else if dx2 >= 0.0 && adx2 <= adx1 && adx2 <= ady1 && adx2 <= ady2 {
            Vector2::new(-dx2, 0.0)
        } else if dy1 >= 0.0 && ady1 <= adx1 && ady1 <= adx2 && ady1 <= ady2 {
            Vector2::new(0.0, dy1)
        } else {
            Vector2::new(0.0, -dy2)
        };
        self.translate(d);
        d
    }

    /// Move this rectangle out of `reference` following `direction` and return
    /// the displacement applied.
    ///
    /// Each axis moves by the smaller of the two separating distances, signed
    /// like the matching component of `direction`; a zero component counts as
    /// positive. A zero `direction` falls back to [`Self::avoid_collision_with`].
    pub fn avoid_collision_with_direction(&mut self, reference: &Self, direction: Vector2) -> Vector2 {
        if direction.length_squared() == 0.0 {
            return self.avoid_collision_with(reference);
        }
        let dx1 = reference.max.x - self.min.x;
        let dx2 = reference.min.x - self.max.x;
        let dy1 = reference.max.y - self.min.y;
        let dy2 = reference.min.y - self.max.y;

        let along = |component: f64, a: f64, b: f64| {
            let m = a.abs().min(b.abs());
            if component < 0.0 { -m } else { m }
        };
        let d = Vector2::new(along(direction.x, dx1, dx2), along(direction.y, dy1, dy2));
        self.translate(d);
        d
    }

    /// Outline iterator mapping points through `mapper`.
    ///
    /// The outline starts at the minimum corner and runs counter-clockwise in a
    /// y-up frame. A rectangle with no area yields nothing.
    pub fn path_iter_with<M: PointMapper>(&self, mapper: M) -> ShapePathIter<M> {
        if self.is_empty() {
            return ShapePathIter::empty(mapper, true);
        }
        ShapePathIter::polygon(
            [
                self.min,
                Point2::new(self.max.x, self.min.y),
                self.max,
                Point2::new(self.min.x, self.max.y),
            ],
            mapper,
        )
    }
}

impl Shape2D for Rectangle {
    fn is_empty(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }

    fn contains(&self, p: Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    fn closest_point_to(&self, p: Point2) -> Point2 {
        Point2::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }

    fn to_bounding_box(&self) -> Rectangle {
        *self
    }

    fn translate(&mut self, v: Vector2) {
        self.min += v;
        self.max += v;
    }

    fn path_iter(&self, transform: Option<&Transform2D>) -> Box<dyn PathIterator + '_> {
        match transform {
            Some(t) => Box::new(self.path_iter_with(*t)),
            None => Box::new(self.path_iter_with(Identity)),
        }
    }
}

impl From<kurbo::Rect> for Rectangle {
    fn from(r: kurbo::Rect) -> Self {
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

impl From<Rectangle> for kurbo::Rect {
    fn from(r: Rectangle) -> Self {
        Self::new(r.min.x, r.min.y, r.max.x, r.max.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::element::PathElementKind;
    use alloc::vec::Vec;

    #[test]
    fn corners_are_sorted() {
        let r = Rectangle::new(10.0, 2.0, 0.0, 8.0);
        assert_eq!(r.min(), Point2::new(0.0, 2.0));
        assert_eq!(r.max(), Point2::new(10.0, 8.0));
        assert_eq!(r.width(), 10.0);
        assert_eq!(r.height(), 6.0);
        assert_eq!(r.center(), Point2::new(5.0, 5.0));
    }

    #[test]
    fn negative_extent_is_rejected() {
        assert!(Rectangle::from_xywh(0.0, 0.0, -1.0, 2.0).is_err());
        assert_eq!(
            Rectangle::from_xywh(1.0, 2.0, 3.0, 4.0),
            Ok(Rectangle::new(1.0, 2.0, 4.0, 6.0))
        );
    }

    #[test]
    fn closed_containment_matches_distance() {
        let r = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        for p in [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 5.0),
            Point2::new(5.0, 5.0),
            Point2::new(10.0 + 1e-9, 5.0),
            Point2::new(-3.0, 14.0),
        ] {
            assert_eq!(r.contains(p), r.distance(p) == 0.0, "{p:?}");
        }
        assert_eq!(r.distance(Point2::new(13.0, 14.0)), 5.0);
        assert_eq!(r.distance_l1(Point2::new(13.0, 14.0)), 7.0);
        assert_eq!(r.distance_linf(Point2::new(13.0, 14.0)), 4.0);
    }

    #[test]
    fn union_and_intersection() {
        let a = Rectangle::new(0.0, 0.0, 4.0, 4.0);
        let b = Rectangle::new(2.0, 1.0, 6.0, 3.0);
        let u = a.create_union(&b);
        assert!(u.contains_rect(&a) && u.contains_rect(&b));
        let i = a.create_intersection(&b);
        assert_eq!(i, Rectangle::new(2.0, 1.0, 4.0, 3.0));
        assert!(a.contains_rect(&i) && b.contains_rect(&i));

        let far = Rectangle::new(10.0, 10.0, 11.0, 11.0);
        let mut c = a;
        c.intersection(&far);
        assert_eq!(c, Rectangle::ZERO);
        assert!(c.is_empty());
    }

    #[test]
    fn avoid_collision_prefers_smallest_push() {
        let mut a = Rectangle::new(0.0, 0.0, 1.0, 1.0);
        let b = Rectangle::new(0.5, 0.8, 1.5, 1.8);
        let d = a.avoid_collision_with(&b);
        assert_eq!(d.x, 0.0);
        assert!((d.y + 0.2).abs() < 1e-12);
        assert!((a.max_y() - 0.8).abs() < 1e-12);
        assert_eq!(a.width(), 1.0);
    }

    #[test]
    fn avoid_collision_ties_favour_x() {
        let mut a = Rectangle::new(0.0, 0.0, 1.0, 1.0);
        let b = Rectangle::new(0.5, 0.5, 1.5, 1.5);
        let d = a.avoid_collision_with(&b);
        assert_eq!(d, Vector2::new(-0.5, 0.0));
    }

    #[test]
    fn avoid_collision_follows_direction() {
        let mut a = Rectangle::new(0.0, 0.0, 1.0, 1.0);
        let b = Rectangle::new(0.5, 0.8, 1.5, 1.8);
        let d = a.avoid_collision_with_direction(&b, Vector2::new(-1.0, 0.0));
        assert_eq!(d.x, -0.5);
        // A zero component still separates, towards positive y.
        assert!((d.y - 0.2).abs() < 1e-12);
        assert_eq!(a.min_x(), -0.5);
        assert!((a.min_y() - 0.2).abs() < 1e-12);

        let mut c = Rectangle::new(0.0, 0.0, 1.0, 1.0);
        let plain = c.avoid_collision_with_direction(&b, Vector2::ZERO);
        assert_eq!(plain.x, 0.0);
        assert!((plain.y + 0.2).abs() < 1e-12);
    }

    #[test]
    fn outline_and_degenerate_fast_path() {
        let r = Rectangle::new(1.0, 1.0, 3.0, 2.0);
        let kinds: Vec<_> = r.path_iter(None).map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            [
                PathElementKind::MoveTo,
                PathElementKind::LineTo,
                PathElementKind::LineTo,
                PathElementKind::LineTo,
                PathElementKind::LineTo,
                PathElementKind::Close,
            ]
        );
        let flat = Rectangle::new(1.0, 1.0, 3.0, 1.0);
        assert_eq!(flat.path_iter(None).count(), 0);
        assert_eq!(flat.path_iter(Some(&Transform2D::from_scale(2.0, 2.0))).count(), 0);
    }

    #[test]
    fn kurbo_rect_round_trip() {
        let r = Rectangle::new(1.0, 2.0, 3.0, 4.0);
        let k: kurbo::Rect = r.into();
        assert_eq!(Rectangle::from(k), r);
    }
}
