// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pairwise intersection tests between shape kinds.
//!
//! [`intersects`] dispatches on the pair of [`ShapeKind`](crate::ShapeKind)s to
//! one routine per pairing. Conventions:
//!
//! - Two areas intersect only when their interiors overlap; touching
//!   boundaries do not count.
//! - Segments, and path outlines when compared edge by edge, are closed: they
//!   intersect anything they touch.
//! - Empty shapes intersect nothing.

use crate::path::Path;
use crate::path::crossings::{CrossingOptions, crossings_from_point, crossings_from_rect};
use crate::shape::ellipse::closest_point_on_ellipse_boundary;
use crate::shape::segment::{closest_point_on_segment, orientation};
use crate::shape::{Circle, Ellipse, OrientedRectangle, Rectangle, Segment, Shape, Shape2D};
use crate::tuple2::{Point2, Vector2};

bitflags::bitflags! {
    /// Cohen–Sutherland region code of a point relative to a rectangle.
    ///
    /// Points on the boundary have an empty code.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct OutCode: u8 {
        /// Left of the rectangle.
        const LEFT   = 0b0001;
        /// Right of the rectangle.
        const RIGHT  = 0b0010;
        /// Below the rectangle.
        const BOTTOM = 0b0100;
        /// Above the rectangle.
        const TOP    = 0b1000;
    }
}

impl OutCode {
    /// Region code of `p` relative to `[min, max]`.
    pub fn of(p: Point2, min: Point2, max: Point2) -> Self {
        let mut code = Self::empty();
        if p.x < min.x {
            code |= Self::LEFT;
        } else if p.x > max.x {
            code |= Self::RIGHT;
        }
        if p.y < min.y {
            code |= Self::BOTTOM;
        } else if p.y > max.y {
            code |= Self::TOP;
        }
        code
    }
}

/// Whether the two shapes intersect.
pub fn intersects(a: &Shape, b: &Shape) -> bool {
    use Shape as S;
    match (a, b) {
        (S::Rectangle(r), S::Rectangle(s)) => rect_rect(r, s),
        (S::Rectangle(r), S::Circle(c)) | (S::Circle(c), S::Rectangle(r)) => rect_circle(r, c),
        (S::Rectangle(r), S::Ellipse(e)) | (S::Ellipse(e), S::Rectangle(r)) => rect_ellipse(r, e),
        (S::Rectangle(r), S::Segment(s)) | (S::Segment(s), S::Rectangle(r)) => rect_segment(r, s),
        (S::Rectangle(r), S::OrientedRectangle(o)) | (S::OrientedRectangle(o), S::Rectangle(r)) => {
            rect_oriented(r, o)
        }
        (S::Rectangle(r), S::Path(p)) | (S::Path(p), S::Rectangle(r)) => rect_path(r, p),
        (S::Circle(c), S::Circle(d)) => circle_circle(c, d),
        (S::Circle(c), S::Ellipse(e)) | (S::Ellipse(e), S::Circle(c)) => circle_ellipse(c, e),
        (S::Circle(c), S::Segment(s)) | (S::Segment(s), S::Circle(c)) => circle_segment(c, s),
        (S::Circle(c), S::OrientedRectangle(o)) | (S::OrientedRectangle(o), S::Circle(c)) => {
            circle_oriented(c, o)
        }
        (S::Ellipse(e), S::Ellipse(f)) => ellipse_ellipse(e, f),
        (S::Ellipse(e), S::Segment(s)) | (S::Segment(s), S::Ellipse(e)) => ellipse_segment(e, s),
        (S::Ellipse(e), S::OrientedRectangle(o)) | (S::OrientedRectangle(o), S::Ellipse(e)) => {
            ellipse_oriented(e, o)
        }
        (S::Segment(s), S::Segment(t)) => segment_segment(s, t),
        (S::Segment(s), S::OrientedRectangle(o)) | (S::OrientedRectangle(o), S::Segment(s)) => {
            segment_oriented(s, o)
        }
        (S::OrientedRectangle(o), S::OrientedRectangle(q)) => oriented_oriented(o, q),
        (S::Path(p), other) | (other, S::Path(p)) => path_shape(p, other),
    }
}

/// Rectangle against rectangle: the open interiors overlap on both axes.
pub fn rect_rect(a: &Rectangle, b: &Rectangle) -> bool {
    !a.is_empty()
        && !b.is_empty()
        && a.min_x() < b.max_x()
        && b.min_x() < a.max_x()
        && a.min_y() < b.max_y()
        && b.min_y() < a.max_y()
}

/// Rectangle against circle: the point of the rectangle closest to the center
/// lies strictly inside the circle.
pub fn rect_circle(r: &Rectangle, c: &Circle) -> bool {
    if r.is_empty() || c.is_empty() {
        return false;
    }
    let q = r.closest_point_to(c.center());
    q.distance_squared(c.center()) < c.radius() * c.radius()
}

/// Rectangle against ellipse, tested in the space where the ellipse is the unit circle.
pub fn rect_ellipse(r: &Rectangle, e: &Ellipse) -> bool {
    if r.is_empty() || e.is_empty() {
        return false;
    }
    let to_unit = unit_space(e.center(), e.radii());
    let scaled = Rectangle::from_corners(to_unit(r.min()), to_unit(r.max()));
    let q = scaled.closest_point_to(Point2::ORIGIN);
    q.to_vector().length_squared() < 1.0
}

/// Rectangle against segment, by Cohen–Sutherland clipping. Touching the
/// boundary counts.
pub fn rect_segment(r: &Rectangle, s: &Segment) -> bool {
    if r.is_empty() || s.is_empty() {
        return false;
    }
    clip_segment(s.p1, s.p2, r.min(), r.max())
}

/// Rectangle against oriented rectangle, by separating axes.
pub fn rect_oriented(r: &Rectangle, o: &OrientedRectangle) -> bool {
    if r.is_empty() || o.is_empty() {
        return false;
    }
    let corners = [
        r.min(),
        Point2::new(r.max_x(), r.min_y()),
        r.max(),
        Point2::new(r.min_x(), r.max_y()),
    ];
    let axes = [
        Vector2::new(1.0, 0.0),
        Vector2::new(0.0, 1.0),
        o.axis_r(),
        o.axis_s(),
    ];
    no_separating_axis(&corners, &o.corners(), &axes)
}

/// Rectangle against path, by crossing number under the path's winding rule.
pub fn rect_path(r: &Rectangle, p: &Path) -> bool {
    if r.is_empty() || p.is_empty() {
        return false;
    }
    crossings_from_rect(p.iter(), r.min(), r.max(), CrossingOptions::INTERSECTION)
        .is_inside(p.winding_rule())
}

/// Circle against circle: centers closer than the sum of radii.
pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let r = a.radius() + b.radius();
    a.center().distance_squared(b.center()) < r * r
}

/// Circle against ellipse, tested in the space where the circle is the unit circle.
pub fn circle_ellipse(c: &Circle, e: &Ellipse) -> bool {
    if c.is_empty() || e.is_empty() {
        return false;
    }
    let r = c.radius();
    unit_circle_meets_ellipse(c.center(), Vector2::new(r, r), e.center(), e.radii())
}

/// Ellipse against ellipse, tested in the space where `a` is the unit circle.
pub fn ellipse_ellipse(a: &Ellipse, b: &Ellipse) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    unit_circle_meets_ellipse(a.center(), a.radii(), b.center(), b.radii())
}

/// Circle against segment. Touching counts.
pub fn circle_segment(c: &Circle, s: &Segment) -> bool {
    if c.is_empty() || s.is_empty() {
        return false;
    }
    let q = closest_point_on_segment(s.p1, s.p2, c.center());
    q.distance_squared(c.center()) <= c.radius() * c.radius()
}

/// Ellipse against segment, tested in the space where the ellipse is the unit circle.
pub fn ellipse_segment(e: &Ellipse, s: &Segment) -> bool {
    if e.is_empty() || s.is_empty() {
        return false;
    }
    let to_unit = unit_space(e.center(), e.radii());
    let q = closest_point_on_segment(to_unit(s.p1), to_unit(s.p2), Point2::ORIGIN);
    q.to_vector().length_squared() <= 1.0
}

/// Circle against oriented rectangle, as unit circle against a convex polygon.
pub fn circle_oriented(c: &Circle, o: &OrientedRectangle) -> bool {
    if c.is_empty() || o.is_empty() {
        return false;
    }
    let r = c.radius();
    unit_circle_meets_polygon(o.corners().map(unit_space(c.center(), Vector2::new(r, r))))
}

/// Ellipse against oriented rectangle, as unit circle against a convex polygon.
pub fn ellipse_oriented(e: &Ellipse, o: &OrientedRectangle) -> bool {
    if e.is_empty() || o.is_empty() {
        return false;
    }
    unit_circle_meets_polygon(o.corners().map(unit_space(e.center(), e.radii())))
}

/// Segment against segment, by orientation tests. Touching and collinear
/// overlap count.
pub fn segment_segment(a: &Segment, b: &Segment) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let d1 = orientation(b.p1, b.p2, a.p1);
    let d2 = orientation(b.p1, b.p2, a.p2);
    let d3 = orientation(a.p1, a.p2, b.p1);
    let d4 = orientation(a.p1, a.p2, b.p2);
    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }
    (d1 == 0.0 && within_box(b.p1, b.p2, a.p1))
        || (d2 == 0.0 && within_box(b.p1, b.p2, a.p2))
        || (d3 == 0.0 && within_box(a.p1, a.p2, b.p1))
        || (d4 == 0.0 && within_box(a.p1, a.p2, b.p2))
}

/// Segment against oriented rectangle, clipped in the rectangle's frame.
pub fn segment_oriented(s: &Segment, o: &OrientedRectangle) -> bool {
    if s.is_empty() || o.is_empty() {
        return false;
    }
    let (er, es) = (o.extent_r(), o.extent_s());
    clip_segment(
        o.to_local(s.p1),
        o.to_local(s.p2),
        Point2::new(-er, -es),
        Point2::new(er, es),
    )
}

/// Oriented rectangle against oriented rectangle, by separating axes.
pub fn oriented_oriented(a: &OrientedRectangle, b: &OrientedRectangle) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let axes = [a.axis_r(), a.axis_s(), b.axis_r(), b.axis_s()];
    no_separating_axis(&a.corners(), &b.corners(), &axes)
}

/// Path against any shape.
///
/// The flattened outline is compared edge by edge; failing that, the shapes
/// intersect when one contains a point of the other. An open path encloses
/// nothing, as in [`rect_path`].
pub fn path_shape(p: &Path, other: &Shape) -> bool {
    if p.is_empty() || other.is_empty() {
        return false;
    }
    if let Shape::Rectangle(r) = other {
        return rect_path(r, p);
    }
    let edges = p.flattened_edges();
    if edges.iter().any(|e| segment_shape(e, other)) {
        return true;
    }
    let holds = |pt: Point2| match other {
        Shape::Path(q) => path_encloses(q, pt),
        _ => other.contains(pt),
    };
    if p.elements().first().is_some_and(|e| holds(e.to())) {
        return true;
    }
    other
        .path_iter(None)
        .next()
        .is_some_and(|e| path_encloses(p, e.to()))
}

/// Point containment under the same crossing options as [`rect_path`].
fn path_encloses(p: &Path, pt: Point2) -> bool {
    crossings_from_point(p.iter(), pt, CrossingOptions::INTERSECTION).is_inside(p.winding_rule())
}

fn segment_shape(s: &Segment, other: &Shape) -> bool {
    match other {
        Shape::Rectangle(r) => rect_segment(r, s),
        Shape::Circle(c) => circle_segment(c, s),
        Shape::Ellipse(e) => ellipse_segment(e, s),
        Shape::Segment(t) => segment_segment(s, t),
        Shape::OrientedRectangle(o) => segment_oriented(s, o),
        Shape::Path(q) => q.flattened_edges().iter().any(|e| segment_segment(s, e)),
    }
}

/// Map from world space into the space where the ellipse `(center, radii)` is the unit circle.
fn unit_space(center: Point2, radii: Vector2) -> impl Fn(Point2) -> Point2 {
    move |p| Point2::new((p.x - center.x) / radii.x, (p.y - center.y) / radii.y)
}

fn unit_circle_meets_ellipse(
    circle_center: Point2,
    circle_radii: Vector2,
    center: Point2,
    radii: Vector2,
) -> bool {
    let to_unit = unit_space(circle_center, circle_radii);
    let c = to_unit(center);
    let rx = radii.x / circle_radii.x;
    let ry = radii.y / circle_radii.y;
    // Origin relative to the scaled ellipse.
    let o = Point2::new(-c.x, -c.y);
    let (nx, ny) = (o.x / rx, o.y / ry);
    if nx * nx + ny * ny <= 1.0 {
        return true;
    }
    closest_point_on_ellipse_boundary(rx, ry, o).distance_squared(o) < 1.0
}

fn unit_circle_meets_polygon(poly: [Point2; 4]) -> bool {
    let origin = Point2::ORIGIN;
    let edges = || (0..poly.len()).map(|i| (poly[i], poly[(i + 1) % poly.len()]));
    let (mut left, mut right) = (false, false);
    for (a, b) in edges() {
        let o = orientation(a, b, origin);
        left |= o > 0.0;
        right |= o < 0.0;
    }
    if !(left && right) {
        return true;
    }
    edges().any(|(a, b)| {
        closest_point_on_segment(a, b, origin)
            .to_vector()
            .length_squared()
            < 1.0
    })
}

fn project(points: &[Point2], axis: Vector2) -> (f64, f64) {
    points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        let d = p.to_vector().dot(axis);
        (lo.min(d), hi.max(d))
    })
}

fn no_separating_axis(a: &[Point2], b: &[Point2], axes: &[Vector2]) -> bool {
    axes.iter().all(|&axis| {
        let (amin, amax) = project(a, axis);
        let (bmin, bmax) = project(b, axis);
        amin < bmax && bmin < amax
    })
}

fn within_box(a: Point2, b: Point2, p: Point2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Cohen–Sutherland: whether `p1–p2` touches the closed box `[min, max]`.
fn clip_segment(mut p1: Point2, mut p2: Point2, min: Point2, max: Point2) -> bool {
    let mut c1 = OutCode::of(p1, min, max);
    let mut c2 = OutCode::of(p2, min, max);
    // Each round pins one coordinate of one endpoint onto a boundary line.
    for _ in 0..8 {
        if (c1 | c2).is_empty() {
            return true;
        }
        if !(c1 & c2).is_empty() {
            return false;
        }
        let first = !c1.is_empty();
        let code = if first { c1 } else { c2 };
        let (dx, dy) = (p2.x - p1.x, p2.y - p1.y);
        let q = if code.contains(OutCode::TOP) {
            Point2::new(p1.x + dx * (max.y - p1.y) / dy, max.y)
        } else if code.contains(OutCode::BOTTOM) {
            Point2::new(p1.x + dx * (min.y - p1.y) / dy, min.y)
        } else if code.contains(OutCode::RIGHT) {
            Point2::new(max.x, p1.y + dy * (max.x - p1.x) / dx)
        } else {
            Point2::new(min.x, p1.y + dy * (min.x - p1.x) / dx)
        };
        if first {
            p1 = q;
            c1 = OutCode::of(p1, min, max);
        } else {
            p2 = q;
            c2 = OutCode::of(p2, min, max);
        }
    }
    (c1 | c2).is_empty()
}
