// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path iteration protocol and the iterators produced by shapes.

use crate::error::GeomError;
use crate::path::element::{PathElement, WindingRule};
use crate::transform2d::Transform2D;
use crate::tuple2::Point2;

/// A forward-only, non-restartable stream of [`PathElement`]s.
///
/// Exhaustion is reported through [`Iterator::next`] returning `None`, or as
/// [`GeomError::NoMoreElements`] through [`PathIterator::next_element`].
pub trait PathIterator: Iterator<Item = PathElement> {
    /// Winding rule of the described outline. Fixed for the iterator's lifetime.
    fn winding_rule(&self) -> WindingRule;

    /// Whether the stream is made of lines only.
    fn is_polyline(&self) -> bool;

    /// Pull the next element, failing once the stream is exhausted.
    fn next_element(&mut self) -> Result<PathElement, GeomError> {
        self.next().ok_or(GeomError::NoMoreElements)
    }

    /// Path iterators are read-only; removal always fails.
    fn remove(&mut self) -> Result<(), GeomError> {
        Err(GeomError::Unsupported("path iterators are read-only"))
    }
}

impl<I: PathIterator + ?Sized> PathIterator for &mut I {
    fn winding_rule(&self) -> WindingRule {
        (**self).winding_rule()
    }

    fn is_polyline(&self) -> bool {
        (**self).is_polyline()
    }
}

impl<I: PathIterator + ?Sized> PathIterator for alloc::boxed::Box<I> {
    fn winding_rule(&self) -> WindingRule {
        (**self).winding_rule()
    }

    fn is_polyline(&self) -> bool {
        (**self).is_polyline()
    }
}

/// Coordinate mapping applied by an iterator to every point it emits.
pub trait PointMapper {
    /// Map one point.
    fn map_point(&self, p: Point2) -> Point2;
}

/// Mapper that copies coordinates unchanged.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl PointMapper for Identity {
    #[inline]
    fn map_point(&self, p: Point2) -> Point2 {
        p
    }
}

impl PointMapper for Transform2D {
    #[inline]
    fn map_point(&self, p: Point2) -> Point2 {
        self.transformed(p)
    }
}

impl<M: PointMapper + ?Sized> PointMapper for &M {
    #[inline]
    fn map_point(&self, p: Point2) -> Point2 {
        (**self).map_point(p)
    }
}

/// Upper bound on the elements a primitive shape outline needs.
const MAX_PRIMITIVE_ELEMENTS: usize = 6;

/// Iterator over the outline of a primitive shape (rectangle, circle, ellipse,
/// segment, oriented rectangle).
///
/// The untransformed elements are resolved once at construction; stepping maps
/// them through `M` without allocating. A degenerate shape produces an iterator
/// that is exhausted from the start.
#[derive(Clone, Debug)]
pub struct ShapePathIter<M> {
    elements: [PathElement; MAX_PRIMITIVE_ELEMENTS],
    len: usize,
    index: usize,
    mapper: M,
    polyline: bool,
}

impl<M: PointMapper> ShapePathIter<M> {
    /// An iterator that yields nothing.
    pub(crate) fn empty(mapper: M, polyline: bool) -> Self {
        Self {
            elements: [PathElement::MoveTo {
                from: Point2::ORIGIN,
                to: Point2::ORIGIN,
            }; MAX_PRIMITIVE_ELEMENTS],
            len: 0,
            index: 0,
            mapper,
            polyline,
        }
    }

    /// A closed polygon through `points`: one `MoveTo`, one `LineTo` per vertex
    /// back to the first, then `Close`.
    pub(crate) fn polygon(points: [Point2; 4], mapper: M) -> Self {
        let mut it = Self::empty(mapper, true);
        let start = points[0];
        it.push(PathElement::MoveTo {
            from: start,
            to: start,
        });
        let mut last = start;
        for &p in points[1..].iter().chain(core::iter::once(&start)) {
            it.push(PathElement::LineTo { from: last, to: p });
            last = p;
        }
        it.push(PathElement::Close {
            from: last,
            to: start,
        });
        it
    }

    /// An axis-aligned ellipse drawn as four cubic arcs, counter-clockwise
    /// from the rightmost point in a y-up frame.
    pub(crate) fn ellipse(center: Point2, rx: f64, ry: f64, mapper: M) -> Self {
        let mut it = Self::empty(mapper, false);
        let kx = rx * CTRL_POINT_RATIO;
        let ky = ry * CTRL_POINT_RATIO;
        let (cx, cy) = (center.x, center.y);
        let start = Point2::new(cx + rx, cy);
        it.push(PathElement::MoveTo {
            from: start,
            to: start,
        });
        let arcs = [
            (
                Point2::new(cx + rx, cy + ky),
                Point2::new(cx + kx, cy + ry),
                Point2::new(cx, cy + ry),
            ),
            (
                Point2::new(cx - kx, cy + ry),
                Point2::new(cx - rx, cy + ky),
                Point2::new(cx - rx, cy),
            ),
            (
                Point2::new(cx - rx, cy - ky),
                Point2::new(cx - kx, cy - ry),
                Point2::new(cx, cy - ry),
            ),
            (
                Point2::new(cx + kx, cy - ry),
                Point2::new(cx + rx, cy - ky),
                start,
            ),
        ];
        let mut last = start;
        for (ctrl1, ctrl2, to) in arcs {
            it.push(PathElement::CurveTo {
                from: last,
                ctrl1,
                ctrl2,
                to,
            });
            last = to;
        }
        it.push(PathElement::Close {
            from: last,
            to: start,
        });
        it
    }

    /// An open two-point polyline.
    pub(crate) fn line(p1: Point2, p2: Point2, mapper: M) -> Self {
        let mut it = Self::empty(mapper, true);
        it.push(PathElement::MoveTo { from: p1, to: p1 });
        it.push(PathElement::LineTo { from: p1, to: p2 });
        it
    }

    fn push(&mut self, e: PathElement) {
        self.elements[self.len] = e;
        self.len += 1;
    }
}

/// Distance of cubic control points along the tangent, as a fraction of the
/// radius, for a quarter-circle approximation.
pub const CTRL_POINT_RATIO: f64 = 0.552_284_749_830_793_3;

impl<M: PointMapper> Iterator for ShapePathIter<M> {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        if self.index >= self.len {
            return None;
        }
        let e = self.elements[self.index];
        self.index += 1;
        Some(e.map_points(|p| self.mapper.map_point(p)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl<M: PointMapper> ExactSizeIterator for ShapePathIter<M> {}

impl<M: PointMapper> PathIterator for ShapePathIter<M> {
    fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }

    fn is_polyline(&self) -> bool {
        self.polyline
    }
}

/// Iterator over the stored elements of a [`Path`](crate::Path).
#[derive(Clone, Debug)]
pub struct PathElements<'a, M> {
    inner: core::slice::Iter<'a, PathElement>,
    mapper: M,
    winding_rule: WindingRule,
    polyline: bool,
}

impl<'a, M: PointMapper> PathElements<'a, M> {
    pub(crate) fn new(
        elements: &'a [PathElement],
        winding_rule: WindingRule,
        polyline: bool,
        mapper: M,
    ) -> Self {
        Self {
            inner: elements.iter(),
            mapper,
            winding_rule,
            polyline,
        }
    }
}

impl<M: PointMapper> Iterator for PathElements<'_, M> {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        let mapper = &self.mapper;
        self.inner
            .next()
            .map(|e| e.map_points(|p| mapper.map_point(p)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<M: PointMapper> ExactSizeIterator for PathElements<'_, M> {}

impl<M: PointMapper> PathIterator for PathElements<'_, M> {
    fn winding_rule(&self) -> WindingRule {
        self.winding_rule
    }

    fn is_polyline(&self) -> bool {
        self.polyline
    }
}
