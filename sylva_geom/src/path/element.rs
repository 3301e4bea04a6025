// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path elements and winding rules.

use smallvec::{SmallVec, smallvec};

use crate::error::GeomError;
use crate::tuple2::Point2;

/// Discriminant of a [`PathElement`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathElementKind {
    /// Start a new subpath.
    MoveTo,
    /// Straight line.
    LineTo,
    /// Quadratic Bézier curve with one control point.
    QuadTo,
    /// Cubic Bézier curve with two control points.
    CurveTo,
    /// Close the current subpath back to its start.
    Close,
}

/// Rule deciding which points enclosed by a path are inside it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WindingRule {
    /// Inside when the signed crossing count is non-zero.
    #[default]
    NonZero,
    /// Inside when the crossing count is odd.
    EvenOdd,
}

impl WindingRule {
    /// Mask applied to a crossing count; a non-zero result means "inside".
    #[inline]
    pub const fn crossing_mask(self) -> i32 {
        match self {
            Self::NonZero => -1,
            Self::EvenOdd => 2,
        }
    }
}

/// One element of a path, stored with absolute coordinates.
///
/// Every element carries its resolved source point (`from`), so it can be
/// interpreted without replaying the elements before it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathElement {
    /// Start a new subpath at `to`. `from` is the previous current point.
    MoveTo {
        /// Previous current point.
        from: Point2,
        /// Start of the new subpath.
        to: Point2,
    },
    /// Line from `from` to `to`.
    LineTo {
        /// Source point.
        from: Point2,
        /// Target point.
        to: Point2,
    },
    /// Quadratic curve from `from` to `to`.
    QuadTo {
        /// Source point.
        from: Point2,
        /// Control point.
        ctrl: Point2,
        /// Target point.
        to: Point2,
    },
    /// Cubic curve from `from` to `to`.
    CurveTo {
        /// Source point.
        from: Point2,
        /// First control point.
        ctrl1: Point2,
        /// Second control point.
        ctrl2: Point2,
        /// Target point.
        to: Point2,
    },
    /// Close the subpath: `to` is the subpath's start point.
    Close {
        /// Current point before closing.
        from: Point2,
        /// Start of the subpath being closed.
        to: Point2,
    },
}

impl PathElement {
    /// Build an element from its kind, the previous current point, and the
    /// coordinates that follow the source point (the layout of [`Self::to_array`]).
    ///
    /// `Close` reads the subpath start from the first two coordinates.
    pub fn new_instance(
        kind: PathElementKind,
        last: Point2,
        coords: &[f64],
    ) -> Result<Self, GeomError> {
        let needed = match kind {
            PathElementKind::MoveTo | PathElementKind::LineTo | PathElementKind::Close => 2,
            PathElementKind::QuadTo => 4,
            PathElementKind::CurveTo => 6,
        };
        if coords.len() < needed {
            return Err(GeomError::InvalidArgument(
                "not enough coordinates for path element",
            ));
        }
        let pt = |i: usize| Point2::new(coords[2 * i], coords[2 * i + 1]);
        Ok(match kind {
            PathElementKind::MoveTo => Self::MoveTo { from: last, to: pt(0) },
            PathElementKind::LineTo => Self::LineTo { from: last, to: pt(0) },
            PathElementKind::QuadTo => Self::QuadTo {
                from: last,
                ctrl: pt(0),
                to: pt(1),
            },
            PathElementKind::CurveTo => Self::CurveTo {
                from: last,
                ctrl1: pt(0),
                ctrl2: pt(1),
                to: pt(2),
            },
            PathElementKind::Close => Self::Close { from: last, to: pt(0) },
        })
    }

    /// The element's kind.
    pub const fn kind(&self) -> PathElementKind {
        match self {
            Self::MoveTo { .. } => PathElementKind::MoveTo,
            Self::LineTo { .. } => PathElementKind::LineTo,
            Self::QuadTo { .. } => PathElementKind::QuadTo,
            Self::CurveTo { .. } => PathElementKind::CurveTo,
            Self::Close { .. } => PathElementKind::Close,
        }
    }

    /// Source point.
    pub const fn from(&self) -> Point2 {
        match *self {
            Self::MoveTo { from, .. }
            | Self::LineTo { from, .. }
            | Self::QuadTo { from, .. }
            | Self::CurveTo { from, .. }
            | Self::Close { from, .. } => from,
        }
    }

    /// Target point.
    pub const fn to(&self) -> Point2 {
        match *self {
            Self::MoveTo { to, .. }
            | Self::LineTo { to, .. }
            | Self::QuadTo { to, .. }
            | Self::CurveTo { to, .. }
            | Self::Close { to, .. } => to,
        }
    }

    /// Whether every control and target point equals the source point.
    pub fn is_empty(&self) -> bool {
        match *self {
            Self::MoveTo { from, to } | Self::LineTo { from, to } | Self::Close { from, to } => {
                from == to
            }
            Self::QuadTo { from, ctrl, to } => from == ctrl && from == to,
            Self::CurveTo {
                from,
                ctrl1,
                ctrl2,
                to,
            } => from == ctrl1 && from == ctrl2 && from == to,
        }
    }

    /// Whether the element leaves a visible trace.
    ///
    /// `MoveTo` and `Close` never draw; the others draw unless empty.
    pub fn is_drawable(&self) -> bool {
        match self {
            Self::MoveTo { .. } | Self::Close { .. } => false,
            _ => !self.is_empty(),
        }
    }

    /// Coordinates of the element except the source point.
    ///
    /// `Close` has no coordinates of its own.
    pub fn to_array(&self) -> SmallVec<[f64; 6]> {
        match *self {
            Self::MoveTo { to, .. } | Self::LineTo { to, .. } => smallvec![to.x, to.y],
            Self::QuadTo { ctrl, to, .. } => smallvec![ctrl.x, ctrl.y, to.x, to.y],
            Self::CurveTo {
                ctrl1, ctrl2, to, ..
            } => smallvec![ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y],
            Self::Close { .. } => SmallVec::new(),
        }
    }

    /// Apply `f` to every point of the element, source point included.
    #[must_use]
    pub fn map_points(&self, mut f: impl FnMut(Point2) -> Point2) -> Self {
        match *self {
            Self::MoveTo { from, to } => Self::MoveTo {
                from: f(from),
                to: f(to),
            },
            Self::LineTo { from, to } => Self::LineTo {
                from: f(from),
                to: f(to),
            },
            Self::QuadTo { from, ctrl, to } => Self::QuadTo {
                from: f(from),
                ctrl: f(ctrl),
                to: f(to),
            },
            Self::CurveTo {
                from,
                ctrl1,
                ctrl2,
                to,
            } => Self::CurveTo {
                from: f(from),
                ctrl1: f(ctrl1),
                ctrl2: f(ctrl2),
                to: f(to),
            },
            Self::Close { from, to } => Self::Close {
                from: f(from),
                to: f(to),
            },
        }
    }

    /// Convert to a Kurbo path element (source point dropped).
    pub fn to_kurbo(&self) -> kurbo::PathEl {
        match *self {
            Self::MoveTo { to, .. } => kurbo::PathEl::MoveTo(to.into()),
            Self::LineTo { to, .. } => kurbo::PathEl::LineTo(to.into()),
            Self::QuadTo { ctrl, to, .. } => kurbo::PathEl::QuadTo(ctrl.into(), to.into()),
            Self::CurveTo {
                ctrl1, ctrl2, to, ..
            } => kurbo::PathEl::CurveTo(ctrl1.into(), ctrl2.into(), to.into()),
            Self::Close { .. } => kurbo::PathEl::ClosePath,
        }
    }
}
