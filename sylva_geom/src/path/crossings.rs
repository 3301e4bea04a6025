// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crossing-number tests of a path against a point or a rectangle.
//!
//! The path is walked once. Each edge contributes to a signed count of the
//! crossings between the path and the ray (or the rectangle's horizontal
//! "shadow") extending towards positive x. Counts are expressed in half-crossing
//! units, so a full crossing contributes `±2`; masking the count with
//! [`WindingRule::crossing_mask`] tells whether the reference is inside.
//! Curves are flattened with [`SPLINE_APPROXIMATION_RATIO`] before counting.

use crate::path::element::{PathElement, WindingRule};
use crate::path::flatten::{FlatteningPathIter, SPLINE_APPROXIMATION_RATIO};
use crate::path::iter::PathIterator;
use crate::shape::segment::closest_point_on_segment;
use crate::tuple2::Point2;

/// Result of a crossing-number walk.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Crossings {
    /// The path touches the reference; the count is meaningless.
    Intersects,
    /// Signed number of half crossings.
    Count(i32),
}

impl Crossings {
    /// Whether the reference lies inside the path under `rule`, counting a
    /// direct intersection as inside.
    pub fn is_inside(self, rule: WindingRule) -> bool {
        match self {
            Self::Intersects => true,
            Self::Count(n) => n & rule.crossing_mask() != 0,
        }
    }
}

/// Controls how an open path is treated at the end of the walk.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CrossingOptions {
    /// Count the implicit edge from the last point back to the subpath start.
    pub closeable: bool,
    /// When the path ends open and `closeable` is off, report no crossings so
    /// that only a direct [`Crossings::Intersects`] can make the test succeed.
    pub only_intersect_when_open: bool,
}

impl CrossingOptions {
    /// Treat every subpath as closed; the usual containment setting.
    pub const CLOSED: Self = Self {
        closeable: true,
        only_intersect_when_open: false,
    };

    /// Setting used by shape intersection tests.
    pub const INTERSECTION: Self = Self {
        closeable: false,
        only_intersect_when_open: true,
    };
}

impl Default for CrossingOptions {
    fn default() -> Self {
        Self::CLOSED
    }
}

/// Crossings of the line `(x0, y0)–(x1, y1)` with the shadow of the rectangle.
///
/// Returns `None` when the line enters the rectangle's interior.
pub fn rect_crossings_for_line(
    crossings: i32,
    rxmin: f64,
    rymin: f64,
    rxmax: f64,
    rymax: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) -> Option<i32> {
    if y0 >= rymax && y1 >= rymax {
        return Some(crossings);
    }
    if y0 <= rymin && y1 <= rymin {
        return Some(crossings);
    }
    if x0 <= rxmin && x1 <= rxmin {
        return Some(crossings);
    }
    if x0 >= rxmax && x1 >= rxmax {
        return Some(shadow_crossings(crossings, rymin, rymax, y0, y1));
    }
    // Both ranges overlap: an endpoint strictly inside settles it.
    if (x0 > rxmin && x0 < rxmax && y0 > rymin && y0 < rymax)
        || (x1 > rxmin && x1 < rxmax && y1 > rymin && y1 < rymax)
    {
        return None;
    }
    // X coordinates where the line meets the rectangle's top and bottom.
    let mut xi0 = x0;
    if y0 < rymin {
        xi0 += (rymin - y0) * (x1 - x0) / (y1 - y0);
    } else if y0 > rymax {
        xi0 += (rymax - y0) * (x1 - x0) / (y1 - y0);
    }
    let mut xi1 = x1;
    if y1 < rymin {
        xi1 += (rymin - y1) * (x0 - x1) / (y0 - y1);
    } else if y1 > rymax {
        xi1 += (rymax - y1) * (x0 - x1) / (y0 - y1);
    }
    if xi0 <= rxmin && xi1 <= rxmin {
        return Some(crossings);
    }
    if xi0 >= rxmax && xi1 >= rxmax {
        return Some(shadow_crossings(crossings, rymin, rymax, y0, y1));
    }
    None
}

fn shadow_crossings(mut crossings: i32, rymin: f64, rymax: f64, y0: f64, y1: f64) -> i32 {
    if y0 < y1 {
        if y0 <= rymin {
            crossings += 1;
        }
        if y1 >= rymax {
            crossings += 1;
        }
    } else if y1 < y0 {
        if y1 <= rymin {
            crossings -= 1;
        }
        if y0 >= rymax {
            crossings -= 1;
        }
    }
    crossings
}

/// Crossings of the ray from `p` towards positive x with the line `a–b`,
/// in half-crossing units.
pub fn point_crossings_for_line(p: Point2, a: Point2, b: Point2) -> i32 {
    if p.y < a.y && p.y < b.y {
        return 0;
    }
    if p.y >= a.y && p.y >= b.y {
        return 0;
    }
    if p.x >= a.x && p.x >= b.x {
        return 0;
    }
    let step = if a.y < b.y { 2 } else { -2 };
    if p.x < a.x && p.x < b.x {
        return step;
    }
    let x_intercept = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
    if p.x >= x_intercept {
        return 0;
    }
    step
}

/// Walk `iter` and count its crossings with the rectangle `[min, max]`.
///
/// An empty rectangle has no crossings.
pub fn crossings_from_rect<I: PathIterator>(
    iter: I,
    min: Point2,
    max: Point2,
    options: CrossingOptions,
) -> Crossings {
    if max.x <= min.x || max.y <= min.y {
        return Crossings::Count(0);
    }
    let line = |count: i32, a: Point2, b: Point2| {
        rect_crossings_for_line(count, min.x, min.y, max.x, max.y, a.x, a.y, b.x, b.y)
    };
    walk(iter, options, line)
}

/// Walk `iter` and count the crossings of the ray from `p` towards positive x.
///
/// A point lying exactly on an edge yields [`Crossings::Intersects`].
pub fn crossings_from_point<I: PathIterator>(
    iter: I,
    p: Point2,
    options: CrossingOptions,
) -> Crossings {
    let line = |count: i32, a: Point2, b: Point2| {
        if closest_point_on_segment(a, b, p) == p {
            None
        } else {
            Some(count + point_crossings_for_line(p, a, b))
        }
    };
    walk(iter, options, line)
}

fn walk<I, F>(iter: I, options: CrossingOptions, mut line: F) -> Crossings
where
    I: PathIterator,
    F: FnMut(i32, Point2, Point2) -> Option<i32>,
{
    let mut elements = FlatteningPathIter::with_tolerance(iter, SPLINE_APPROXIMATION_RATIO);
    let Some(first) = elements.next() else {
        return Crossings::Count(0);
    };
    let mut mov = first.to();
    let mut cur = mov;
    let mut count = 0;
    for e in elements {
        let step = match e {
            PathElement::MoveTo { to, .. } => {
                let closed = if cur != mov && options.closeable {
                    line(count, cur, mov)
                } else {
                    Some(count)
                };
                mov = to;
                cur = to;
                closed
            }
            PathElement::LineTo { to, .. } => {
                let r = line(count, cur, to);
                cur = to;
                r
            }
            PathElement::Close { .. } => {
                let r = if cur != mov { line(count, cur, mov) } else { Some(count) };
                cur = mov;
                r
            }
            // Flattening leaves no curves behind; treat a stray one as its chord.
            PathElement::QuadTo { to, .. } | PathElement::CurveTo { to, .. } => {
                let r = line(count, cur, to);
                cur = to;
                r
            }
        };
        match step {
            Some(n) => count = n,
            None => return Crossings::Intersects,
        }
    }
    if cur != mov {
        if options.closeable {
            return match line(count, cur, mov) {
                Some(n) => Crossings::Count(n),
                None => Crossings::Intersects,
            };
        }
        if options.only_intersect_when_open {
            return Crossings::Count(0);
        }
    }
    Crossings::Count(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::iter::{Identity, ShapePathIter};

    fn square() -> ShapePathIter<Identity> {
        ShapePathIter::polygon(
            [
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
            ],
            Identity,
        )
    }

    #[test]
    fn point_inside_and_outside_square() {
        let inside = crossings_from_point(square(), Point2::new(5.0, 5.0), CrossingOptions::CLOSED);
        assert!(inside.is_inside(WindingRule::NonZero));
        assert!(inside.is_inside(WindingRule::EvenOdd));
        let outside =
            crossings_from_point(square(), Point2::new(15.0, 5.0), CrossingOptions::CLOSED);
        assert_eq!(outside, Crossings::Count(0));
        let on_edge =
            crossings_from_point(square(), Point2::new(10.0, 5.0), CrossingOptions::CLOSED);
        assert_eq!(on_edge, Crossings::Intersects);
    }

    #[test]
    fn rectangle_shadow_counts_full_crossings() {
        // The square lies entirely to the right of the rectangle and spans it vertically.
        let c = crossings_from_rect(
            square(),
            Point2::new(-5.0, 2.0),
            Point2::new(-1.0, 4.0),
            CrossingOptions::CLOSED,
        );
        // One edge crosses upward (+2), the other downward (-2).
        assert_eq!(c, Crossings::Count(0));
        let overlapping = crossings_from_rect(
            square(),
            Point2::new(8.0, 8.0),
            Point2::new(12.0, 12.0),
            CrossingOptions::INTERSECTION,
        );
        assert_eq!(overlapping, Crossings::Intersects);
    }

    #[test]
    fn rectangle_inside_path_is_enclosed() {
        let c = crossings_from_rect(
            square(),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 3.0),
            CrossingOptions::INTERSECTION,
        );
        assert!(c.is_inside(WindingRule::NonZero));
        assert!(c.is_inside(WindingRule::EvenOdd));
    }

    #[test]
    fn empty_rectangle_has_no_crossings() {
        let c = crossings_from_rect(
            square(),
            Point2::new(5.0, 5.0),
            Point2::new(5.0, 6.0),
            CrossingOptions::INTERSECTION,
        );
        assert_eq!(c, Crossings::Count(0));
    }

    #[test]
    fn open_path_reports_only_direct_hits() {
        let open = ShapePathIter::line(Point2::new(0.0, 0.0), Point2::new(0.0, 10.0), Identity);
        let c = crossings_from_rect(
            open,
            Point2::new(-5.0, 2.0),
            Point2::new(-1.0, 4.0),
            CrossingOptions::INTERSECTION,
        );
        assert_eq!(c, Crossings::Count(0));
    }
}
