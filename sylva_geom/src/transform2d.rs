// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D affine transform stored as a row-major 3×3 matrix.

use core::ops::Mul;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::tuple2::{Point2, Vector2};

/// A 2D affine transform.
///
/// The matrix is row major with a fixed bottom row:
///
/// ```text
/// | m00 m01 m02 |
/// | m10 m11 m12 |
/// |  0   0   1  |
/// ```
///
/// `m02`/`m12` hold the translation. Every mutator works in place; the
/// `transformed*` methods return a new value and never touch the receiver.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform2D {
    /// Row 0, column 0.
    pub m00: f64,
    /// Row 0, column 1.
    pub m01: f64,
    /// Row 0, column 2 (x translation).
    pub m02: f64,
    /// Row 1, column 0.
    pub m10: f64,
    /// Row 1, column 1.
    pub m11: f64,
    /// Row 1, column 2 (y translation).
    pub m12: f64,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// The identity transform.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0);

    /// Create a transform from the six free matrix entries.
    pub const fn new(m00: f64, m01: f64, m02: f64, m10: f64, m11: f64, m12: f64) -> Self {
        Self {
            m00,
            m01,
            m02,
            m10,
            m11,
            m12,
        }
    }

    /// Overwrite the six free matrix entries.
    pub fn set(&mut self, m00: f64, m01: f64, m02: f64, m10: f64, m11: f64, m12: f64) {
        *self = Self::new(m00, m01, m02, m10, m11, m12);
    }

    /// Reset to the identity.
    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Whether this is exactly the identity.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Build a pure translation.
    pub const fn from_translation(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, dx, 0.0, 1.0, dy)
    }

    /// Build a pure rotation (radians, counter-clockwise in a y-up frame).
    pub fn from_rotation(angle: f64) -> Self {
        let mut t = Self::IDENTITY;
        t.make_rotation_matrix(angle);
        t
    }

    /// Build a pure scale.
    pub const fn from_scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, 0.0, sy, 0.0)
    }

    // --- translation ---

    /// Set the translation column, leaving rotation, scale, and shear untouched.
    ///
    /// See [`Self::make_translation_matrix`] for the variant that resets everything.
    pub fn set_translation(&mut self, x: f64, y: f64) {
        self.m02 = x;
        self.m12 = y;
    }

    /// Replace the whole matrix by a pure translation; rotation and scale are discarded.
    pub fn make_translation_matrix(&mut self, dx: f64, dy: f64) {
        *self = Self::from_translation(dx, dy);
    }

    /// Shift the translation column by `(dx, dy)`.
    ///
    /// The shift is applied after the existing transform.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.m02 += dx;
        self.m12 += dy;
    }

    /// The translation column.
    pub const fn translation(&self) -> Vector2 {
        Vector2::new(self.m02, self.m12)
    }

    /// X translation.
    pub const fn translation_x(&self) -> f64 {
        self.m02
    }

    /// Y translation.
    pub const fn translation_y(&self) -> f64 {
        self.m12
    }

    // --- rotation ---

    /// Rotation angle encoded by the linear block, in radians.
    pub fn rotation(&self) -> f64 {
        self.m10.atan2(self.m00)
    }

    /// Replace the rotation while keeping the per-axis scale and the translation.
    pub fn set_rotation(&mut self, angle: f64) {
        let scale = self.scale();
        let (sin, cos) = (angle.sin(), angle.cos());
        self.m00 = scale.x * cos;
        self.m01 = -scale.y * sin;
        self.m10 = scale.x * sin;
        self.m11 = scale.y * cos;
    }

    /// Replace the whole matrix by a pure rotation; translation and scale are discarded.
    pub fn make_rotation_matrix(&mut self, angle: f64) {
        let (sin, cos) = (angle.sin(), angle.cos());
        *self = Self::new(cos, -sin, 0.0, sin, cos, 0.0);
    }

    /// Post-multiply by a rotation: `self = self * R(angle)`.
    pub fn rotate(&mut self, angle: f64) {
        self.post_mul(&Self::from_rotation(angle));
    }

    // --- scale ---

    /// Per-axis scale factors (lengths of the two basis columns).
    pub fn scale(&self) -> Vector2 {
        Vector2::new(self.m00.hypot(self.m10), self.m01.hypot(self.m11))
    }

    /// Replace the per-axis scale while keeping rotation and translation.
    pub fn set_scale(&mut self, sx: f64, sy: f64) {
        let current = self.scale();
        let rotation = self.rotation();
        if current.x == 0.0 || current.y == 0.0 {
            let (sin, cos) = (rotation.sin(), rotation.cos());
            self.m00 = sx * cos;
            self.m01 = -sy * sin;
            self.m10 = sx * sin;
            self.m11 = sy * cos;
            return;
        }
        self.m00 *= sx / current.x;
        self.m10 *= sx / current.x;
        self.m01 *= sy / current.y;
        self.m11 *= sy / current.y;
    }

    /// Replace the whole matrix by a pure scale.
    pub fn make_scale_matrix(&mut self, sx: f64, sy: f64) {
        *self = Self::from_scale(sx, sy);
    }

    /// Post-multiply by a scale: `self = self * S(sx, sy)`.
    pub fn scale_by(&mut self, sx: f64, sy: f64) {
        self.m00 *= sx;
        self.m10 *= sx;
        self.m01 *= sy;
        self.m11 *= sy;
    }

    // --- composition ---

    /// `self = self * other`.
    pub fn post_mul(&mut self, other: &Self) {
        *self = self.product(other);
    }

    /// `self = other * self`.
    pub fn pre_mul(&mut self, other: &Self) {
        *self = other.product(self);
    }

    /// `self = a * b`.
    pub fn set_mul(&mut self, a: &Self, b: &Self) {
        *self = a.product(b);
    }

    // Matrix product `self * rhs`: `rhs` is applied first.
    fn product(&self, rhs: &Self) -> Self {
        Self::new(
            self.m00 * rhs.m00 + self.m01 * rhs.m10,
            self.m00 * rhs.m01 + self.m01 * rhs.m11,
            self.m00 * rhs.m02 + self.m01 * rhs.m12 + self.m02,
            self.m10 * rhs.m00 + self.m11 * rhs.m10,
            self.m10 * rhs.m01 + self.m11 * rhs.m11,
            self.m10 * rhs.m02 + self.m11 * rhs.m12 + self.m12,
        )
    }

    /// Determinant of the linear block.
    pub fn determinant(&self) -> f64 {
        self.m00 * self.m11 - self.m01 * self.m10
    }

    /// Inverse transform, or `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;
        let m00 = self.m11 * inv;
        let m01 = -self.m01 * inv;
        let m10 = -self.m10 * inv;
        let m11 = self.m00 * inv;
        Some(Self::new(
            m00,
            m01,
            -(m00 * self.m02 + m01 * self.m12),
            m10,
            m11,
            -(m10 * self.m02 + m11 * self.m12),
        ))
    }

    // --- application ---

    /// Apply to `p` in place: `p = M · [x, y, 1]ᵗ`.
    #[inline]
    pub fn transform(&self, p: &mut Point2) {
        let x = self.m00 * p.x + self.m01 * p.y + self.m02;
        let y = self.m10 * p.x + self.m11 * p.y + self.m12;
        p.x = x;
        p.y = y;
    }

    /// Apply to `p` and write the result into `out`; `p` is left unchanged.
    #[inline]
    pub fn transform_to(&self, p: &Point2, out: &mut Point2) {
        out.x = self.m00 * p.x + self.m01 * p.y + self.m02;
        out.y = self.m10 * p.x + self.m11 * p.y + self.m12;
    }

    /// Apply to a copy of `p`.
    #[inline]
    pub fn transformed(&self, p: Point2) -> Point2 {
        let mut out = p;
        self.transform(&mut out);
        out
    }

    /// Apply the linear block only (no translation) to `v` in place.
    #[inline]
    pub fn transform_vector(&self, v: &mut Vector2) {
        let x = self.m00 * v.x + self.m01 * v.y;
        let y = self.m10 * v.x + self.m11 * v.y;
        v.x = x;
        v.y = y;
    }

    /// Apply the linear block only to a copy of `v`.
    #[inline]
    pub fn transformed_vector(&self, v: Vector2) -> Vector2 {
        let mut out = v;
        self.transform_vector(&mut out);
        out
    }
}

impl Mul for Transform2D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.product(&rhs)
    }
}

impl Mul<Point2> for Transform2D {
    type Output = Point2;

    fn mul(self, rhs: Point2) -> Point2 {
        self.transformed(rhs)
    }
}

impl From<kurbo::Affine> for Transform2D {
    fn from(a: kurbo::Affine) -> Self {
        let [m00, m10, m01, m11, m02, m12] = a.as_coeffs();
        Self::new(m00, m01, m02, m10, m11, m12)
    }
}

impl From<Transform2D> for kurbo::Affine {
    fn from(t: Transform2D) -> Self {
        Self::new([t.m00, t.m10, t.m01, t.m11, t.m02, t.m12])
    }
}
