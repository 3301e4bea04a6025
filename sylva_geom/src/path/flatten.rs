// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replacing curves by chains of lines.

use alloc::collections::VecDeque;

use kurbo::{CubicBez, ParamCurve, QuadBez};

use crate::path::element::{PathElement, WindingRule};
use crate::path::iter::PathIterator;
use crate::shape::segment::closest_point_on_segment;
use crate::tuple2::Point2;

/// Default flatness tolerance: the largest distance allowed between a curve
/// and the lines replacing it.
pub const SPLINE_APPROXIMATION_RATIO: f64 = 0.1;

/// Curves are never split deeper than this, whatever the tolerance.
const MAX_SUBDIVISION_DEPTH: u32 = 10;

/// Wraps a [`PathIterator`] and replaces every `QuadTo`/`CurveTo` by `LineTo`s.
///
/// Curves are split in halves until their control points lie within the
/// tolerance of the chord. Other elements pass through unchanged.
#[derive(Clone, Debug)]
pub struct FlatteningPathIter<I> {
    inner: I,
    tolerance_sq: f64,
    pending: VecDeque<Point2>,
    last: Point2,
}

impl<I: PathIterator> FlatteningPathIter<I> {
    /// Flatten `inner` with [`SPLINE_APPROXIMATION_RATIO`].
    pub fn new(inner: I) -> Self {
        Self::with_tolerance(inner, SPLINE_APPROXIMATION_RATIO)
    }

    /// Flatten `inner` with a custom tolerance. Non-positive values still
    /// terminate thanks to the subdivision depth limit.
    pub fn with_tolerance(inner: I, tolerance: f64) -> Self {
        Self {
            inner,
            tolerance_sq: tolerance * tolerance,
            pending: VecDeque::new(),
            last: Point2::ORIGIN,
        }
    }

    /// The wrapped iterator.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: PathIterator> Iterator for FlatteningPathIter<I> {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        loop {
            if let Some(to) = self.pending.pop_front() {
                let from = self.last;
                self.last = to;
                return Some(PathElement::LineTo { from, to });
            }
            let e = self.inner.next()?;
            match e {
                PathElement::QuadTo { from, ctrl, to } => {
                    self.last = from;
                    push_quad(
                        QuadBez::new(from, ctrl, to),
                        self.tolerance_sq,
                        0,
                        &mut self.pending,
                    );
                }
                PathElement::CurveTo {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                } => {
                    self.last = from;
                    push_cubic(
                        CubicBez::new(from, ctrl1, ctrl2, to),
                        self.tolerance_sq,
                        0,
                        &mut self.pending,
                    );
                }
                other => {
                    self.last = other.to();
                    return Some(other);
                }
            }
        }
    }
}

impl<I: PathIterator> PathIterator for FlatteningPathIter<I> {
    fn winding_rule(&self) -> WindingRule {
        self.inner.winding_rule()
    }

    fn is_polyline(&self) -> bool {
        true
    }
}

fn flat_enough(ctrl: kurbo::Point, p0: kurbo::Point, p1: kurbo::Point, tolerance_sq: f64) -> bool {
    let (c, a, b) = (Point2::from(ctrl), Point2::from(p0), Point2::from(p1));
    closest_point_on_segment(a, b, c).distance_squared(c) <= tolerance_sq
}

fn push_quad(q: QuadBez, tolerance_sq: f64, depth: u32, out: &mut VecDeque<Point2>) {
    if depth >= MAX_SUBDIVISION_DEPTH || flat_enough(q.p1, q.p0, q.p2, tolerance_sq) {
        out.push_back(q.p2.into());
        return;
    }
    let (a, b) = q.subdivide();
    push_quad(a, tolerance_sq, depth + 1, out);
    push_quad(b, tolerance_sq, depth + 1, out);
}

fn push_cubic(c: CubicBez, tolerance_sq: f64, depth: u32, out: &mut VecDeque<Point2>) {
    if depth >= MAX_SUBDIVISION_DEPTH
        || (flat_enough(c.p1, c.p0, c.p3, tolerance_sq)
            && flat_enough(c.p2, c.p0, c.p3, tolerance_sq))
    {
        out.push_back(c.p3.into());
        return;
    }
    let (a, b) = c.subdivide();
    push_cubic(a, tolerance_sq, depth + 1, out);
    push_cubic(b, tolerance_sq, depth + 1, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::element::PathElementKind;
    use crate::path::iter::{Identity, ShapePathIter};
    use alloc::vec::Vec;

    #[test]
    fn circle_outline_flattens_within_tolerance() {
        let center = Point2::new(5.0, 5.0);
        let it = FlatteningPathIter::new(ShapePathIter::ellipse(center, 3.0, 3.0, Identity));
        assert!(it.is_polyline());
        let elems: Vec<_> = it.collect();
        assert!(elems.len() > 8);
        assert!(elems
            .iter()
            .all(|e| e.kind() != PathElementKind::CurveTo && e.kind() != PathElementKind::QuadTo));
        for e in &elems {
            let d = e.to().distance(center);
            assert!((d - 3.0).abs() < 0.1, "vertex off the circle: {d}");
        }
        for pair in elems.windows(2) {
            assert_eq!(pair[1].from(), pair[0].to());
        }
        assert_eq!(elems.last().map(|e| e.kind()), Some(PathElementKind::Close));
    }

    #[test]
    fn lines_pass_through_unchanged() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 2.0);
        let elems: Vec<_> = FlatteningPathIter::new(ShapePathIter::line(a, b, Identity)).collect();
        assert_eq!(
            elems,
            [
                PathElement::MoveTo { from: a, to: a },
                PathElement::LineTo { from: a, to: b },
            ]
        );
    }
}
