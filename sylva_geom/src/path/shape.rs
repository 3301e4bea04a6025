// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::GeomError;
use crate::path::crossings::{CrossingOptions, crossings_from_point};
use crate::path::element::{PathElement, WindingRule};
use crate::path::flatten::FlatteningPathIter;
use crate::path::iter::{Identity, PathElements, PathIterator, PointMapper};
use crate::shape::segment::closest_point_on_segment;
use crate::shape::{Rectangle, Segment, Shape2D};
use crate::transform2d::Transform2D;
use crate::tuple2::{Point2, Vector2};

/// An owned sequence of path elements with a winding rule.
///
/// The first element is always a `MoveTo`; drawing commands on an empty path
/// fail with [`GeomError::MissingMoveTo`]. Containment treats every subpath as
/// implicitly closed and includes the outline itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    elements: Vec<PathElement>,
    winding_rule: WindingRule,
}

impl Path {
    /// An empty path with the non-zero winding rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty path with the given winding rule.
    pub fn with_winding_rule(winding_rule: WindingRule) -> Self {
        Self {
            elements: Vec::new(),
            winding_rule,
        }
    }

    /// Collect the elements of `iter`, keeping its winding rule.
    pub fn from_path_iter<I: PathIterator>(iter: I) -> Self {
        let winding_rule = iter.winding_rule();
        Self {
            elements: iter.collect(),
            winding_rule,
        }
    }

    /// Winding rule used for containment.
    pub const fn winding_rule(&self) -> WindingRule {
        self.winding_rule
    }

    /// Change the winding rule.
    pub fn set_winding_rule(&mut self, rule: WindingRule) {
        self.winding_rule = rule;
    }

    /// Stored elements, in order.
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Number of stored elements, drawable or not.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// The point the next drawing command starts from.
    pub fn current_point(&self) -> Option<Point2> {
        self.elements.last().map(PathElement::to)
    }

    fn subpath_start(&self) -> Option<Point2> {
        self.elements.iter().rev().find_map(|e| match e {
            PathElement::MoveTo { to, .. } => Some(*to),
            _ => None,
        })
    }

    /// Start a new subpath at `p`. A `MoveTo` directly following another
    /// `MoveTo` replaces it.
    pub fn move_to(&mut self, p: Point2) {
        if let Some(PathElement::MoveTo { to, .. }) = self.elements.last_mut() {
            *to = p;
            return;
        }
        let from = self.current_point().unwrap_or(Point2::ORIGIN);
        self.elements.push(PathElement::MoveTo { from, to: p });
    }

    /// Line from the current point to `p`.
    pub fn line_to(&mut self, p: Point2) -> Result<(), GeomError> {
        let from = self.current_point().ok_or(GeomError::MissingMoveTo)?;
        self.elements.push(PathElement::LineTo { from, to: p });
        Ok(())
    }

    /// Quadratic curve from the current point to `to`.
    pub fn quad_to(&mut self, ctrl: Point2, to: Point2) -> Result<(), GeomError> {
        let from = self.current_point().ok_or(GeomError::MissingMoveTo)?;
        self.elements.push(PathElement::QuadTo { from, ctrl, to });
        Ok(())
    }

    /// Cubic curve from the current point to `to`.
    pub fn curve_to(&mut self, ctrl1: Point2, ctrl2: Point2, to: Point2) -> Result<(), GeomError> {
        let from = self.current_point().ok_or(GeomError::MissingMoveTo)?;
        self.elements.push(PathElement::CurveTo {
            from,
            ctrl1,
            ctrl2,
            to,
        });
        Ok(())
    }

    /// Close the current subpath. Does nothing on an empty or already closed path.
    pub fn close_path(&mut self) {
        let (Some(last), Some(start)) = (self.elements.last(), self.subpath_start()) else {
            return;
        };
        if matches!(last, PathElement::Close { .. }) {
            return;
        }
        let from = last.to();
        self.elements.push(PathElement::Close { from, to: start });
    }

    /// Drop the last element.
    pub fn remove_last(&mut self) -> Option<PathElement> {
        self.elements.pop()
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Whether the path is made of lines only.
    pub fn is_polyline(&self) -> bool {
        !self
            .elements
            .iter()
            .any(|e| matches!(e, PathElement::QuadTo { .. } | PathElement::CurveTo { .. }))
    }

    /// Apply `transform` to every stored point.
    pub fn transform(&mut self, transform: &Transform2D) {
        for e in &mut self.elements {
            *e = e.map_points(|p| transform.transformed(p));
        }
    }

    /// Element iterator mapping points through `mapper`.
    pub fn iter_with<M: PointMapper>(&self, mapper: M) -> PathElements<'_, M> {
        PathElements::new(&self.elements, self.winding_rule, self.is_polyline(), mapper)
    }

    /// Element iterator copying the stored coordinates.
    pub fn iter(&self) -> PathElements<'_, Identity> {
        self.iter_with(Identity)
    }

    /// Bounds of every stored point, control points included.
    pub fn control_bounds(&self) -> Rectangle {
        let mut points = self.elements.iter().flat_map(|e| {
            let mut pts = [e.to(); 3];
            match *e {
                PathElement::QuadTo { ctrl, .. } => pts[1] = ctrl,
                PathElement::CurveTo { ctrl1, ctrl2, .. } => {
                    pts[1] = ctrl1;
                    pts[2] = ctrl2;
                }
                _ => {}
            }
            pts
        });
        let Some(first) = points.next() else {
            return Rectangle::ZERO;
        };
        let mut r = Rectangle::from_corners(first, first);
        for p in points {
            r.add_point(p);
        }
        r
    }

    /// Convert to a Kurbo Bézier path.
    pub fn to_bez_path(&self) -> kurbo::BezPath {
        self.elements.iter().map(PathElement::to_kurbo).collect()
    }

    /// Straight edges of the outline after flattening curves. Only explicit
    /// `Close` elements produce closing edges.
    pub fn flattened_edges(&self) -> Vec<Segment> {
        FlatteningPathIter::new(self.iter())
            .filter_map(|e| match e {
                PathElement::LineTo { from, to } | PathElement::Close { from, to } if from != to => {
                    Some(Segment::new(from, to))
                }
                _ => None,
            })
            .collect()
    }

    /// Length of the flattened outline.
    pub fn length(&self) -> f64 {
        self.flattened_edges().iter().map(Segment::length).sum()
    }

    fn closest_on_outline(&self, p: Point2) -> Option<Point2> {
        let mut best: Option<(f64, Point2)> = None;
        for e in FlatteningPathIter::new(self.iter()) {
            let q = match e {
                PathElement::MoveTo { to, .. } => to,
                other => closest_point_on_segment(other.from(), other.to(), p),
            };
            let d = q.distance_squared(p);
            if best.is_none_or(|(bd, _)| d < bd) {
                best = Some((d, q));
            }
        }
        best.map(|(_, q)| q)
    }
}

impl Shape2D for Path {
    fn is_empty(&self) -> bool {
        !self.elements.iter().any(PathElement::is_drawable)
    }

    fn contains(&self, p: Point2) -> bool {
        crossings_from_point(self.iter(), p, CrossingOptions::CLOSED).is_inside(self.winding_rule)
    }

    fn closest_point_to(&self, p: Point2) -> Point2 {
        if self.contains(p) {
            return p;
        }
        self.closest_on_outline(p).unwrap_or(p)
    }

    /// Exact bounds of the drawn outline; empty paths give [`Rectangle::ZERO`].
    fn to_bounding_box(&self) -> Rectangle {
        if self.elements.is_empty() {
            return Rectangle::ZERO;
        }
        kurbo::Shape::bounding_box(&self.to_bez_path()).into()
    }

    fn translate(&mut self, v: Vector2) {
        for e in &mut self.elements {
            *e = e.map_points(|p| p + v);
        }
    }

    fn path_iter(&self, transform: Option<&Transform2D>) -> Box<dyn PathIterator + '_> {
        match transform {
            Some(t) => Box::new(self.iter_with(*t)),
            None => Box::new(self.iter()),
        }
    }
}

impl TryFrom<&kurbo::BezPath> for Path {
    type Error = GeomError;

    /// Fails with [`GeomError::MissingMoveTo`] when `bez` draws before moving.
    fn try_from(bez: &kurbo::BezPath) -> Result<Self, GeomError> {
        let mut path = Self::new();
        for el in bez.elements() {
            match *el {
                kurbo::PathEl::MoveTo(p) => path.move_to(p.into()),
                kurbo::PathEl::LineTo(p) => path.line_to(p.into())?,
                kurbo::PathEl::QuadTo(c, p) => path.quad_to(c.into(), p.into())?,
                kurbo::PathEl::CurveTo(c1, c2, p) => {
                    path.curve_to(c1.into(), c2.into(), p.into())?;
                }
                kurbo::PathEl::ClosePath => path.close_path(),
            }
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::element::PathElementKind;

    fn triangle() -> Path {
        let mut p = Path::new();
        p.move_to(Point2::new(0.0, 0.0));
        p.line_to(Point2::new(10.0, 0.0)).unwrap();
        p.line_to(Point2::new(10.0, 10.0)).unwrap();
        p.close_path();
        p
    }

    #[test]
    fn drawing_without_move_fails() {
        let mut p = Path::new();
        assert_eq!(p.line_to(Point2::new(1.0, 1.0)), Err(GeomError::MissingMoveTo));
        assert_eq!(
            p.curve_to(Point2::ORIGIN, Point2::ORIGIN, Point2::ORIGIN),
            Err(GeomError::MissingMoveTo)
        );
        p.close_path();
        assert_eq!(p.len(), 0);
    }

    #[test]
    fn consecutive_moves_collapse() {
        let mut p = Path::new();
        p.move_to(Point2::new(1.0, 1.0));
        p.move_to(Point2::new(2.0, 2.0));
        assert_eq!(p.len(), 1);
        assert_eq!(p.current_point(), Some(Point2::new(2.0, 2.0)));
        assert!(p.is_empty());
    }

    #[test]
    fn close_records_subpath_start_once() {
        let mut p = triangle();
        p.close_path();
        assert_eq!(p.len(), 4);
        let last = p.elements()[3];
        assert_eq!(last.kind(), PathElementKind::Close);
        assert_eq!(last.from(), Point2::new(10.0, 10.0));
        assert_eq!(last.to(), Point2::new(0.0, 0.0));
    }

    #[test]
    fn containment_and_distance() {
        let p = triangle();
        assert!(p.contains(Point2::new(8.0, 2.0)));
        assert!(p.contains(Point2::new(5.0, 5.0)));
        assert!(!p.contains(Point2::new(2.0, 8.0)));
        assert_eq!(p.distance(Point2::new(8.0, 2.0)), 0.0);
        assert_eq!(p.distance(Point2::new(13.0, 4.0)), 3.0);
        assert_eq!(p.length(), 20.0 + 200f64.sqrt());
    }

    #[test]
    fn even_odd_excludes_overlap() {
        let mut p = Path::with_winding_rule(WindingRule::EvenOdd);
        for offset in [0.0, 2.0] {
            p.move_to(Point2::new(offset, 0.0));
            p.line_to(Point2::new(offset + 4.0, 0.0)).unwrap();
            p.line_to(Point2::new(offset + 4.0, 4.0)).unwrap();
            p.line_to(Point2::new(offset, 4.0)).unwrap();
            p.close_path();
        }
        assert!(p.contains(Point2::new(1.0, 1.0)));
        assert!(!p.contains(Point2::new(3.0, 1.0)));
        p.set_winding_rule(WindingRule::NonZero);
        assert!(p.contains(Point2::new(3.0, 1.0)));
    }

    #[test]
    fn bounds_and_kurbo_conversion() {
        let mut p = Path::new();
        p.move_to(Point2::new(0.0, 0.0));
        p.quad_to(Point2::new(5.0, 10.0), Point2::new(10.0, 0.0)).unwrap();
        assert!(!p.is_polyline());
        assert_eq!(p.control_bounds(), Rectangle::new(0.0, 0.0, 10.0, 10.0));
        let b = p.to_bounding_box();
        assert!((b.max_y() - 5.0).abs() < 1e-9);
        let back = Path::try_from(&p.to_bez_path()).unwrap();
        assert_eq!(back, p);
        let mut bad = kurbo::BezPath::new();
        bad.line_to((1.0, 1.0));
        assert_eq!(Path::try_from(&bad), Err(GeomError::MissingMoveTo));
    }

    #[test]
    fn transformed_iteration_maps_every_point() {
        let p = triangle();
        let t = Transform2D::from_translation(1.0, 2.0);
        let moved = p.create_transformed_shape(&t);
        let mut expected = p.clone();
        expected.translate(Vector2::new(1.0, 2.0));
        assert_eq!(moved.elements(), expected.elements());
        assert_eq!(p.iter().next_element().map(|e| e.kind()), Ok(PathElementKind::MoveTo));
    }
}
