// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 3D shapes: axis-aligned boxes and spheres.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::error::GeomError;
use crate::transform3d::Transform3D;
use crate::tuple3::{Point3, Vector3};

/// Queries every 3D shape answers.
pub trait Shape3D {
    /// Whether the shape has no volume.
    fn is_empty(&self) -> bool;

    /// Whether `p` belongs to the shape (boundary included).
    fn contains(&self, p: Point3) -> bool;

    /// Point of the shape nearest to `p`; `p` itself when contained.
    fn closest_point_to(&self, p: Point3) -> Point3;

    /// Squared Euclidean distance from `p` to the shape.
    fn distance_squared(&self, p: Point3) -> f64 {
        self.closest_point_to(p).distance_squared(p)
    }

    /// Euclidean distance from `p` to the shape.
    fn distance(&self, p: Point3) -> f64 {
        self.distance_squared(p).sqrt()
    }

    /// Manhattan distance from `p` to the closest point of the shape.
    fn distance_l1(&self, p: Point3) -> f64 {
        self.closest_point_to(p).distance_l1(p)
    }

    /// Chebyshev distance from `p` to the closest point of the shape.
    fn distance_linf(&self, p: Point3) -> f64 {
        self.closest_point_to(p).distance_linf(p)
    }

    /// Move the shape by `v`.
    fn translate(&mut self, v: Vector3);

    /// Smallest axis-aligned box enclosing the shape.
    fn to_bounding_box(&self) -> AlignedBox3;

    /// The shape mapped through `transform`.
    ///
    /// Boxes map to the bounds of their transformed corners and spheres scale
    /// their radius by the largest axis scale, so the result always encloses the
    /// exact image.
    fn create_transformed_shape(&self, transform: &Transform3D) -> Shape3;
}

/// An axis-aligned box `[min, max]` with ordered corners.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AlignedBox3 {
    min: Point3,
    max: Point3,
}

impl AlignedBox3 {
    /// Box spanning two corners, in any order.
    pub fn from_corners(p1: Point3, p2: Point3) -> Self {
        Self {
            min: Point3::new(p1.x.min(p2.x), p1.y.min(p2.y), p1.z.min(p2.z)),
            max: Point3::new(p1.x.max(p2.x), p1.y.max(p2.y), p1.z.max(p2.z)),
        }
    }

    /// Box from its minimum corner and size. Fails on a negative extent.
    pub fn new(min: Point3, size: Vector3) -> Result<Self, GeomError> {
        if size.x < 0.0 || size.y < 0.0 || size.z < 0.0 {
            return Err(GeomError::InvalidArgument("negative box extent"));
        }
        Ok(Self {
            min,
            max: min + size,
        })
    }

    /// Minimum corner.
    pub const fn min(&self) -> Point3 {
        self.min
    }

    /// Maximum corner.
    pub const fn max(&self) -> Point3 {
        self.max
    }

    /// Center point.
    pub fn center(&self) -> Point3 {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Grow to include `p`.
    pub fn add_point(&mut self, p: Point3) {
        self.min = Point3::new(self.min.x.min(p.x), self.min.y.min(p.y), self.min.z.min(p.z));
        self.max = Point3::new(self.max.x.max(p.x), self.max.y.max(p.y), self.max.z.max(p.z));
    }

    /// Whether `other` lies entirely inside this box (boundaries may touch).
    pub fn contains_box(&self, other: &Self) -> bool {
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.min.z >= self.min.z
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
            && other.max.z <= self.max.z
    }

    /// The eight corners.
    pub fn corners(&self) -> [Point3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Point3::new(a.x, a.y, a.z),
            Point3::new(b.x, a.y, a.z),
            Point3::new(a.x, b.y, a.z),
            Point3::new(b.x, b.y, a.z),
            Point3::new(a.x, a.y, b.z),
            Point3::new(b.x, a.y, b.z),
            Point3::new(a.x, b.y, b.z),
            Point3::new(b.x, b.y, b.z),
        ]
    }
}

impl Shape3D for AlignedBox3 {
    fn is_empty(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y || self.max.z <= self.min.z
    }

    fn contains(&self, p: Point3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    fn closest_point_to(&self, p: Point3) -> Point3 {
        Point3::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
            p.z.clamp(self.min.z, self.max.z),
        )
    }

    fn translate(&mut self, v: Vector3) {
        self.min += v;
        self.max += v;
    }

    fn to_bounding_box(&self) -> AlignedBox3 {
        *self
    }

    fn create_transformed_shape(&self, transform: &Transform3D) -> Shape3 {
        let corners = self.corners();
        let first = transform.transformed(corners[0]);
        let mut out = Self {
            min: first,
            max: first,
        };
        for &c in &corners[1..] {
            out.add_point(transform.transformed(c));
        }
        Shape3::Box(out)
    }
}

/// A closed ball.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Sphere3 {
    center: Point3,
    radius: f64,
}

impl Sphere3 {
    /// Create a sphere. Fails on a negative or non-finite radius.
    pub fn new(center: Point3, radius: f64) -> Result<Self, GeomError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeomError::InvalidArgument("sphere radius must be finite and non-negative"));
        }
        Ok(Self { center, radius })
    }

    /// Center of the sphere.
    pub const fn center(&self) -> Point3 {
        self.center
    }

    /// Radius of the sphere.
    pub const fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape3D for Sphere3 {
    fn is_empty(&self) -> bool {
        self.radius <= 0.0
    }

    fn contains(&self, p: Point3) -> bool {
        self.center.distance_squared(p) <= self.radius * self.radius
    }

    fn closest_point_to(&self, p: Point3) -> Point3 {
        let v = p - self.center;
        let len = v.length();
        if len <= self.radius {
            return p;
        }
        self.center + v * (self.radius / len)
    }

    fn distance(&self, p: Point3) -> f64 {
        (self.center.distance(p) - self.radius).max(0.0)
    }

    fn translate(&mut self, v: Vector3) {
        self.center += v;
    }

    fn to_bounding_box(&self) -> AlignedBox3 {
        let r = Vector3::new(self.radius, self.radius, self.radius);
        AlignedBox3::from_corners(self.center - r, self.center + r)
    }

    fn create_transformed_shape(&self, transform: &Transform3D) -> Shape3 {
        Shape3::Sphere(Self {
            center: transform.transformed(self.center),
            radius: self.radius * transform.max_scale(),
        })
    }
}

/// Closed sum of the 3D shape kinds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape3 {
    /// Axis-aligned box.
    Box(AlignedBox3),
    /// Sphere.
    Sphere(Sphere3),
}

impl Shape3 {
    /// Whether the two shapes share interior points. Empty shapes intersect nothing.
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        match (self, other) {
            (Self::Box(a), Self::Box(b)) => box_box(a, b),
            (Self::Box(b), Self::Sphere(s)) | (Self::Sphere(s), Self::Box(b)) => box_sphere(b, s),
            (Self::Sphere(a), Self::Sphere(b)) => {
                let r = a.radius + b.radius;
                a.center.distance_squared(b.center) < r * r
            }
        }
    }

    fn as_shape3d(&self) -> &dyn Shape3D {
        match self {
            Self::Box(b) => b,
            Self::Sphere(s) => s,
        }
    }

    fn as_shape3d_mut(&mut self) -> &mut dyn Shape3D {
        match self {
            Self::Box(b) => b,
            Self::Sphere(s) => s,
        }
    }
}

fn box_box(a: &AlignedBox3, b: &AlignedBox3) -> bool {
    a.min.x < b.max.x
        && b.min.x < a.max.x
        && a.min.y < b.max.y
        && b.min.y < a.max.y
        && a.min.z < b.max.z
        && b.min.z < a.max.z
}

fn box_sphere(b: &AlignedBox3, s: &Sphere3) -> bool {
    b.closest_point_to(s.center).distance_squared(s.center) < s.radius * s.radius
}

impl Shape3D for Shape3 {
    fn is_empty(&self) -> bool {
        self.as_shape3d().is_empty()
    }

    fn contains(&self, p: Point3) -> bool {
        self.as_shape3d().contains(p)
    }

    fn closest_point_to(&self, p: Point3) -> Point3 {
        self.as_shape3d().closest_point_to(p)
    }

    fn distance(&self, p: Point3) -> f64 {
        self.as_shape3d().distance(p)
    }

    fn translate(&mut self, v: Vector3) {
        self.as_shape3d_mut().translate(v);
    }

    fn to_bounding_box(&self) -> AlignedBox3 {
        self.as_shape3d().to_bounding_box()
    }

    fn create_transformed_shape(&self, transform: &Transform3D) -> Shape3 {
        self.as_shape3d().create_transformed_shape(transform)
    }
}

impl From<AlignedBox3> for Shape3 {
    fn from(b: AlignedBox3) -> Self {
        Self::Box(b)
    }
}

impl From<Sphere3> for Shape3 {
    fn from(s: Sphere3) -> Self {
        Self::Sphere(s)
    }
}
