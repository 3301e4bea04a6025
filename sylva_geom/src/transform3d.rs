// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 3D affine transform and the quaternion used to build its rotation block.

use core::ops::Mul;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::tuple3::{Point3, Vector3};

/// A rotation quaternion `x·i + y·j + z·k + w`.
///
/// Transform mutators never check normalization: a non-unit quaternion
/// silently produces a scaled or skewed rotation block.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quaternion {
    /// `i` component.
    pub x: f64,
    /// `j` component.
    pub y: f64,
    /// `k` component.
    pub z: f64,
    /// Scalar component.
    pub w: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a quaternion from raw components.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians around `axis`. A zero axis yields the identity.
    pub fn from_axis_angle(axis: Vector3, angle: f64) -> Self {
        let Some(axis) = axis.normalized() else {
            return Self::IDENTITY;
        };
        let half = angle * 0.5;
        let s = half.sin();
        Self::new(axis.x * s, axis.y * s, axis.z * s, half.cos())
    }

    /// Extract the rotation of the linear block of `m`, removing per-axis scale first.
    pub fn from_matrix(m: &Transform3D) -> Self {
        let scale = m.scale();
        let sx = if scale.x == 0.0 { 1.0 } else { scale.x };
        let sy = if scale.y == 0.0 { 1.0 } else { scale.y };
        let sz = if scale.z == 0.0 { 1.0 } else { scale.z };
        let (m00, m01, m02) = (m.m00 / sx, m.m01 / sy, m.m02 / sz);
        let (m10, m11, m12) = (m.m10 / sx, m.m11 / sy, m.m12 / sz);
        let (m20, m21, m22) = (m.m20 / sx, m.m21 / sy, m.m22 / sz);

        let trace = m00 + m11 + m22;
        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, 0.25 * s)
        } else if m00 > m11 && m00 > m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
            Self::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
            Self::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
            Self::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
        }
    }

    /// Euclidean norm of the four components.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Scale to unit length in place. Returns `false` for the zero quaternion.
    pub fn normalize(&mut self) -> bool {
        let len = self.length();
        if len == 0.0 {
            return false;
        }
        self.x /= len;
        self.y /= len;
        self.z /= len;
        self.w /= len;
        true
    }

    /// The conjugate (inverse rotation for unit quaternions).
    pub const fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Equivalent rotation up to sign: `q` and `-q` encode the same rotation.
    pub fn same_rotation(&self, other: &Self, epsilon: f64) -> bool {
        let d = self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w;
        (d.abs() - self.length() * other.length()).abs() <= epsilon
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product: `self * rhs` applies `rhs` first.
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

/// A 3D affine transform stored as a row-major 4×4 matrix.
///
/// ```text
/// | m00 m01 m02 m03 |
/// | m10 m11 m12 m13 |
/// | m20 m21 m22 m23 |
/// |  0   0   0   1  |
/// ```
///
/// The bottom row is fixed and therefore not stored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform3D {
    /// Row 0, column 0.
    pub m00: f64,
    /// Row 0, column 1.
    pub m01: f64,
    /// Row 0, column 2.
    pub m02: f64,
    /// Row 0, column 3 (x translation).
    pub m03: f64,
    /// Row 1, column 0.
    pub m10: f64,
    /// Row 1, column 1.
    pub m11: f64,
    /// Row 1, column 2.
    pub m12: f64,
    /// Row 1, column 3 (y translation).
    pub m13: f64,
    /// Row 2, column 0.
    pub m20: f64,
    /// Row 2, column 1.
    pub m21: f64,
    /// Row 2, column 2.
    pub m22: f64,
    /// Row 2, column 3 (z translation).
    pub m23: f64,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform3D {
    /// The identity transform.
    pub const IDENTITY: Self = Self::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0,
    );

    /// Create a transform from the twelve free matrix entries.
    pub const fn new(
        m00: f64,
        m01: f64,
        m02: f64,
        m03: f64,
        m10: f64,
        m11: f64,
        m12: f64,
        m13: f64,
        m20: f64,
        m21: f64,
        m22: f64,
        m23: f64,
    ) -> Self {
        Self {
            m00,
            m01,
            m02,
            m03,
            m10,
            m11,
            m12,
            m13,
            m20,
            m21,
            m22,
            m23,
        }
    }

    /// Overwrite the twelve free matrix entries.
    pub fn set(
        &mut self,
        m00: f64,
        m01: f64,
        m02: f64,
        m03: f64,
        m10: f64,
        m11: f64,
        m12: f64,
        m13: f64,
        m20: f64,
        m21: f64,
        m22: f64,
        m23: f64,
    ) {
        *self = Self::new(
            m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23,
        );
    }

    /// Reset to the identity.
    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Whether this is exactly the identity.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    // --- translation ---

    /// Set the translation column only; rotation, scale, and shear are kept.
    ///
    /// See [`Self::make_translation_matrix`] for the variant that resets everything.
    pub fn set_translation(&mut self, x: f64, y: f64, z: f64) {
        self.m03 = x;
        self.m13 = y;
        self.m23 = z;
    }

    /// Replace the whole matrix by a pure translation.
    pub fn make_translation_matrix(&mut self, dx: f64, dy: f64, dz: f64) {
        *self = Self::IDENTITY;
        self.set_translation(dx, dy, dz);
    }

    /// Shift the translation column by `(dx, dy, dz)`.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.m03 += dx;
        self.m13 += dy;
        self.m23 += dz;
    }

    /// The translation column.
    pub const fn translation(&self) -> Vector3 {
        Vector3::new(self.m03, self.m13, self.m23)
    }

    /// X translation.
    pub const fn translation_x(&self) -> f64 {
        self.m03
    }

    /// Y translation.
    pub const fn translation_y(&self) -> f64 {
        self.m13
    }

    /// Z translation.
    pub const fn translation_z(&self) -> f64 {
        self.m23
    }

    // --- rotation ---

    /// Rotation of the linear block as a quaternion.
    pub fn rotation(&self) -> Quaternion {
        Quaternion::from_matrix(self)
    }

    /// Overwrite the 3×3 rotation block from `q`; the translation column is kept.
    ///
    /// `q` must already be normalized.
    pub fn set_rotation(&mut self, q: &Quaternion) {
        let (a, b, c, d) = (q.x, q.y, q.z, q.w);
        self.m00 = 1.0 - 2.0 * b * b - 2.0 * c * c;
        self.m10 = 2.0 * (a * b + d * c);
        self.m20 = 2.0 * (a * c - d * b);

        self.m01 = 2.0 * (a * b - d * c);
        self.m11 = 1.0 - 2.0 * a * a - 2.0 * c * c;
        self.m21 = 2.0 * (b * c + d * a);

        self.m02 = 2.0 * (a * c + d * b);
        self.m12 = 2.0 * (b * c - d * a);
        self.m22 = 1.0 - 2.0 * a * a - 2.0 * b * b;
    }

    /// Replace the whole matrix by the rotation `q` with no translation.
    pub fn make_rotation_matrix(&mut self, q: &Quaternion) {
        self.set_rotation(q);
        self.m03 = 0.0;
        self.m13 = 0.0;
        self.m23 = 0.0;
    }

    /// Post-multiply by the rotation `q`: `self = self * R(q)`.
    pub fn rotate(&mut self, q: &Quaternion) {
        let mut r = Self::IDENTITY;
        r.make_rotation_matrix(q);
        self.post_mul(&r);
    }

    // --- scale ---

    /// Per-axis scale factors (lengths of the three basis columns).
    pub fn scale(&self) -> Vector3 {
        Vector3::new(
            Vector3::new(self.m00, self.m10, self.m20).length(),
            Vector3::new(self.m01, self.m11, self.m21).length(),
            Vector3::new(self.m02, self.m12, self.m22).length(),
        )
    }

    /// Largest per-axis scale factor.
    pub fn max_scale(&self) -> f64 {
        let s = self.scale();
        s.x.max(s.y).max(s.z)
    }

    /// Post-multiply by a scale: `self = self * S(sx, sy, sz)`.
    pub fn scale_by(&mut self, sx: f64, sy: f64, sz: f64) {
        self.m00 *= sx;
        self.m10 *= sx;
        self.m20 *= sx;
        self.m01 *= sy;
        self.m11 *= sy;
        self.m21 *= sy;
        self.m02 *= sz;
        self.m12 *= sz;
        self.m22 *= sz;
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

    fn product(&self, r: &Self) -> Self {
        Self::new(
            self.m00 * r.m00 + self.m01 * r.m10 + self.m02 * r.m20,
            self.m00 * r.m01 + self.m01 * r.m11 + self.m02 * r.m21,
            self.m00 * r.m02 + self.m01 * r.m12 + self.m02 * r.m22,
            self.m00 * r.m03 + self.m01 * r.m13 + self.m02 * r.m23 + self.m03,
            self.m10 * r.m00 + self.m11 * r.m10 + self.m12 * r.m20,
            self.m10 * r.m01 + self.m11 * r.m11 + self.m12 * r.m21,
            self.m10 * r.m02 + self.m11 * r.m12 + self.m12 * r.m22,
            self.m10 * r.m03 + self.m11 * r.m13 + self.m12 * r.m23 + self.m13,
            self.m20 * r.m00 + self.m21 * r.m10 + self.m22 * r.m20,
            self.m20 * r.m01 + self.m21 * r.m11 + self.m22 * r.m21,
            self.m20 * r.m02 + self.m21 * r.m12 + self.m22 * r.m22,
            self.m20 * r.m03 + self.m21 * r.m13 + self.m22 * r.m23 + self.m23,
        )
    }

    /// Determinant of the 3×3 linear block.
    pub fn determinant(&self) -> f64 {
        self.m00 * (self.m11 * self.m22 - self.m12 * self.m21)
            - self.m01 * (self.m10 * self.m22 - self.m12 * self.m20)
            + self.m02 * (self.m10 * self.m21 - self.m11 * self.m20)
    }

    // --- application ---

    /// Apply to `p` in place: `p = M · [x, y, z, 1]ᵗ`.
    #[inline]
    pub fn transform(&self, p: &mut Point3) {
        let x = self.m00 * p.x + self.m01 * p.y + self.m02 * p.z + self.m03;
        let y = self.m10 * p.x + self.m11 * p.y + self.m12 * p.z + self.m13;
        let z = self.m20 * p.x + self.m21 * p.y + self.m22 * p.z + self.m23;
        p.set(x, y, z);
    }

    /// Apply to `p` and write the result into `out`.
    #[inline]
    pub fn transform_to(&self, p: &Point3, out: &mut Point3) {
        out.x = self.m00 * p.x + self.m01 * p.y + self.m02 * p.z + self.m03;
        out.y = self.m10 * p.x + self.m11 * p.y + self.m12 * p.z + self.m13;
        out.z = self.m20 * p.x + self.m21 * p.y + self.m22 * p.z + self.m23;
    }

    /// Apply to a copy of `p`.
    #[inline]
    pub fn transformed(&self, p: Point3) -> Point3 {
        let mut out = p;
        self.transform(&mut out);
        out
    }

    /// Apply the linear block only to `v` in place.
    #[inline]
    pub fn transform_vector(&self, v: &mut Vector3) {
        let x = self.m00 * v.x + self.m01 * v.y + self.m02 * v.z;
        let y = self.m10 * v.x + self.m11 * v.y + self.m12 * v.z;
        let z = self.m20 * v.x + self.m21 * v.y + self.m22 * v.z;
        v.set(x, y, z);
    }
}

impl Mul for Transform3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.product(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    fn close(a: Point3, b: Point3) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn quarter_turn_about_z() {
        let q = Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), FRAC_PI_2);
        let mut t = Transform3D::IDENTITY;
        t.make_rotation_matrix(&q);
        assert!(close(
            t.transformed(Point3::new(1.0, 0.0, 0.0)),
            Point3::new(0.0, 1.0, 0.0)
        ));
    }

    #[test]
    fn set_rotation_keeps_translation_but_make_rotation_clears_it() {
        let q = Quaternion::from_axis_angle(Vector3::new(1.0, 0.0, 0.0), 0.4);
        let mut t = Transform3D::IDENTITY;
        t.set_translation(1.0, 2.0, 3.0);
        t.set_rotation(&q);
        assert_eq!(t.translation(), Vector3::new(1.0, 2.0, 3.0));
        t.make_rotation_matrix(&q);
        assert_eq!(t.translation(), Vector3::ZERO);
    }

    #[test]
    fn set_translation_versus_make_translation() {
        let q = Quaternion::from_axis_angle(Vector3::new(0.0, 1.0, 0.0), 1.0);
        let mut t = Transform3D::IDENTITY;
        t.make_rotation_matrix(&q);
        let rotated = t;
        t.set_translation(4.0, 5.0, 6.0);
        assert_eq!(t.m00, rotated.m00);
        assert_eq!(t.m21, rotated.m21);
        t.make_translation_matrix(4.0, 5.0, 6.0);
        let mut expected = Transform3D::IDENTITY;
        expected.translate(4.0, 5.0, 6.0);
        assert_eq!(t, expected);
    }

    #[test]
    fn rotation_round_trips_through_matrix() {
        let mut q = Quaternion::new(0.1, -0.7, 0.3, 0.6);
        assert!(q.normalize());
        let mut t = Transform3D::IDENTITY;
        t.set_rotation(&q);
        t.scale_by(2.0, 2.0, 2.0);
        assert!(t.rotation().same_rotation(&q, 1e-9));
        let s = t.scale();
        assert!((s.x - 2.0).abs() < 1e-9 && (s.z - 2.0).abs() < 1e-9);
    }

    #[test]
    fn in_place_and_copy_variants_agree() {
        let q = Quaternion::from_axis_angle(Vector3::new(1.0, 1.0, 0.0), 0.9);
        let mut t = Transform3D::IDENTITY;
        t.make_rotation_matrix(&q);
        t.translate(1.0, -1.0, 2.0);
        let p = Point3::new(3.0, 4.0, 5.0);
        let mut a = p;
        t.transform(&mut a);
        let mut b = Point3::ORIGIN;
        t.transform_to(&p, &mut b);
        assert_eq!(a, b);
        assert_eq!(t.transformed(p), a);
    }

    #[test]
    fn composition_matches_quaternion_product() {
        let qa = Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), 0.5);
        let qb = Quaternion::from_axis_angle(Vector3::new(1.0, 0.0, 0.0), 0.25);
        let mut ta = Transform3D::IDENTITY;
        ta.make_rotation_matrix(&qa);
        let mut tb = Transform3D::IDENTITY;
        tb.make_rotation_matrix(&qb);
        let mut tab = Transform3D::IDENTITY;
        tab.make_rotation_matrix(&(qa * qb));
        let p = Point3::new(0.3, -2.0, 1.5);
        assert!(close((ta * tb).transformed(p), tab.transformed(p)));
        assert!((tab.determinant() - 1.0).abs() < 1e-9);
    }
}
