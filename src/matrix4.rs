//! 4x4 Matrix implementation.

use super::consts::EPSILON;
use super::{MatrixError, Vector3};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A 4x4 matrix stored in column-major order.
/// Used for 3D transformations (model, view, projection matrices).
///
/// Transform methods come in mutating/value pairs (`translate`/`translated`,
/// `rotate_x`/`rotated_x`, ...). The mutating form rewrites only the columns
/// the operation affects and leaves the rest untouched; the value form copies
/// first. Both produce identical elements for the same inputs.
///
/// Vectors are column vectors on the right (`m * v`), so products chain
/// right-to-left: transforming by `a.multiply(&b)` applies `b` first, then `a`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix4 {
    /// Matrix elements in column-major order.
    /// [m00, m10, m20, m30, m01, m11, m21, m31, m02, m12, m22, m32, m03, m13, m23, m33]
    pub elements: [f32; 16],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        elements: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Zero matrix.
    pub const ZERO: Self = Self {
        elements: [0.0; 16],
    };

    /// Create a new Matrix4 from elements in row-major order.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self {
            elements: [
                m00, m10, m20, m30,
                m01, m11, m21, m31,
                m02, m12, m22, m32,
                m03, m13, m23, m33,
            ],
        }
    }

    /// Create from column-major array.
    #[inline]
    pub const fn from_cols_array(elements: [f32; 16]) -> Self {
        Self { elements }
    }

    /// Create identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Set to identity matrix.
    #[inline]
    pub fn set_identity(&mut self) -> &mut Self {
        self.elements = Self::IDENTITY.elements;
        self
    }

    /// Copy from another matrix.
    #[inline]
    pub fn copy(&mut self, m: &Matrix4) -> &mut Self {
        self.elements = m.elements;
        self
    }

    /// Extract the position (translation) component.
    #[inline]
    pub fn get_position(&self) -> Vector3 {
        Vector3 {
            x: self.elements[12],
            y: self.elements[13],
            z: self.elements[14],
        }
    }

    /// Set the position (translation) component.
    #[inline]
    pub fn set_position(&mut self, v: &Vector3) -> &mut Self {
        self.elements[12] = v.x;
        self.elements[13] = v.y;
        self.elements[14] = v.z;
        self
    }

    /// Calculate the determinant.
    ///
    /// A singular matrix yields 0; callers relying on invertibility must
    /// check for it.
    pub fn determinant(&self) -> f32 {
        let e = &self.elements;

        // 2x2 minors of the column pair (0, 1) ...
        let b00 = e[0] * e[5] - e[1] * e[4];
        let b01 = e[0] * e[6] - e[2] * e[4];
        let b02 = e[0] * e[7] - e[3] * e[4];
        let b03 = e[1] * e[6] - e[2] * e[5];
        let b04 = e[1] * e[7] - e[3] * e[5];
        let b05 = e[2] * e[7] - e[3] * e[6];
        // ... and of the column pair (2, 3)
        let b06 = e[8] * e[13] - e[9] * e[12];
        let b07 = e[8] * e[14] - e[10] * e[12];
        let b08 = e[8] * e[15] - e[11] * e[12];
        let b09 = e[9] * e[14] - e[10] * e[13];
        let b10 = e[9] * e[15] - e[11] * e[13];
        let b11 = e[10] * e[15] - e[11] * e[14];

        b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06
    }

    /// Multiply this matrix by another.
    ///
    /// Transforming a column vector by the product applies `other` first,
    /// then `self`.
    pub fn multiply(&self, other: &Matrix4) -> Self {
        let a = &self.elements;
        let b = &other.elements;
        let mut out = [0.0; 16];

        // Cache one column of `other` at a time
        let (b0, b1, b2, b3) = (b[0], b[1], b[2], b[3]);
        out[0] = b0 * a[0] + b1 * a[4] + b2 * a[8] + b3 * a[12];
        out[1] = b0 * a[1] + b1 * a[5] + b2 * a[9] + b3 * a[13];
        out[2] = b0 * a[2] + b1 * a[6] + b2 * a[10] + b3 * a[14];
        out[3] = b0 * a[3] + b1 * a[7] + b2 * a[11] + b3 * a[15];

        let (b0, b1, b2, b3) = (b[4], b[5], b[6], b[7]);
        out[4] = b0 * a[0] + b1 * a[4] + b2 * a[8] + b3 * a[12];
        out[5] = b0 * a[1] + b1 * a[5] + b2 * a[9] + b3 * a[13];
        out[6] = b0 * a[2] + b1 * a[6] + b2 * a[10] + b3 * a[14];
        out[7] = b0 * a[3] + b1 * a[7] + b2 * a[11] + b3 * a[15];

        let (b0, b1, b2, b3) = (b[8], b[9], b[10], b[11]);
        out[8] = b0 * a[0] + b1 * a[4] + b2 * a[8] + b3 * a[12];
        out[9] = b0 * a[1] + b1 * a[5] + b2 * a[9] + b3 * a[13];
        out[10] = b0 * a[2] + b1 * a[6] + b2 * a[10] + b3 * a[14];
        out[11] = b0 * a[3] + b1 * a[7] + b2 * a[11] + b3 * a[15];

        let (b0, b1, b2, b3) = (b[12], b[13], b[14], b[15]);
        out[12] = b0 * a[0] + b1 * a[4] + b2 * a[8] + b3 * a[12];
        out[13] = b0 * a[1] + b1 * a[5] + b2 * a[9] + b3 * a[13];
        out[14] = b0 * a[2] + b1 * a[6] + b2 * a[10] + b3 * a[14];
        out[15] = b0 * a[3] + b1 * a[7] + b2 * a[11] + b3 * a[15];

        Self { elements: out }
    }

    /// Pre-multiply this matrix by another.
    pub fn premultiply(&self, other: &Matrix4) -> Self {
        other.multiply(self)
    }

    /// Multiply by a scalar.
    pub fn multiply_scalar(&mut self, s: f32) -> &mut Self {
        for e in &mut self.elements {
            *e *= s;
        }
        self
    }

    /// Translate by the given vector, in place.
    ///
    /// Recomputes the translation column from columns 0-2 and the old
    /// translation; the other columns are untouched. The translation is
    /// applied before this matrix's existing transform.
    pub fn translate(&mut self, v: &Vector3) -> &mut Self {
        let e = &mut self.elements;
        e[12] = e[0] * v.x + e[4] * v.y + e[8] * v.z + e[12];
        e[13] = e[1] * v.x + e[5] * v.y + e[9] * v.z + e[13];
        e[14] = e[2] * v.x + e[6] * v.y + e[10] * v.z + e[14];
        e[15] = e[3] * v.x + e[7] * v.y + e[11] * v.z + e[15];
        self
    }

    /// Return this matrix translated by the given vector.
    pub fn translated(&self, v: &Vector3) -> Self {
        let mut m = *self;
        m.translate(v);
        m
    }

    /// Scale by the given vector, in place.
    ///
    /// Columns 0-2 are scaled by x, y and z; the translation column is
    /// untouched.
    pub fn scale(&mut self, v: &Vector3) -> &mut Self {
        let e = &mut self.elements;
        e[0] *= v.x;
        e[1] *= v.x;
        e[2] *= v.x;
        e[3] *= v.x;
        e[4] *= v.y;
        e[5] *= v.y;
        e[6] *= v.y;
        e[7] *= v.y;
        e[8] *= v.z;
        e[9] *= v.z;
        e[10] *= v.z;
        e[11] *= v.z;
        self
    }

    /// Return this matrix scaled by the given vector.
    pub fn scaled(&self, v: &Vector3) -> Self {
        let mut m = *self;
        m.scale(v);
        m
    }

    /// Rotate around an arbitrary axis, in place.
    ///
    /// Fails with [`MatrixError::DegenerateAxis`] when the axis is too short
    /// to normalize (length below 1e-6), leaving the matrix unchanged. The
    /// axis does not need to be pre-normalized.
    pub fn rotate(&mut self, rad: f32, axis: &Vector3) -> Result<&mut Self, MatrixError> {
        let len = axis.length();
        if len < EPSILON {
            return Err(MatrixError::DegenerateAxis);
        }

        let inv_len = 1.0 / len;
        let x = axis.x * inv_len;
        let y = axis.y * inv_len;
        let z = axis.z * inv_len;

        let s = rad.sin();
        let c = rad.cos();
        let t = 1.0 - c;

        // Rodrigues rotation basis
        let b00 = x * x * t + c;
        let b01 = y * x * t + z * s;
        let b02 = z * x * t - y * s;
        let b10 = x * y * t - z * s;
        let b11 = y * y * t + c;
        let b12 = z * y * t + x * s;
        let b20 = x * z * t + y * s;
        let b21 = y * z * t - x * s;
        let b22 = z * z * t + c;

        let e = &mut self.elements;
        let (a00, a01, a02, a03) = (e[0], e[1], e[2], e[3]);
        let (a10, a11, a12, a13) = (e[4], e[5], e[6], e[7]);
        let (a20, a21, a22, a23) = (e[8], e[9], e[10], e[11]);

        e[0] = a00 * b00 + a10 * b01 + a20 * b02;
        e[1] = a01 * b00 + a11 * b01 + a21 * b02;
        e[2] = a02 * b00 + a12 * b01 + a22 * b02;
        e[3] = a03 * b00 + a13 * b01 + a23 * b02;
        e[4] = a00 * b10 + a10 * b11 + a20 * b12;
        e[5] = a01 * b10 + a11 * b11 + a21 * b12;
        e[6] = a02 * b10 + a12 * b11 + a22 * b12;
        e[7] = a03 * b10 + a13 * b11 + a23 * b12;
        e[8] = a00 * b20 + a10 * b21 + a20 * b22;
        e[9] = a01 * b20 + a11 * b21 + a21 * b22;
        e[10] = a02 * b20 + a12 * b21 + a22 * b22;
        e[11] = a03 * b20 + a13 * b21 + a23 * b22;

        Ok(self)
    }

    /// Return this matrix rotated around an arbitrary axis.
    ///
    /// Fails with [`MatrixError::DegenerateAxis`] when the axis is too short
    /// to normalize.
    pub fn rotated(&self, rad: f32, axis: &Vector3) -> Result<Self, MatrixError> {
        let mut m = *self;
        m.rotate(rad, axis)?;
        Ok(m)
    }

    /// Rotate around the X axis, in place.
    pub fn rotate_x(&mut self, rad: f32) -> &mut Self {
        let s = rad.sin();
        let c = rad.cos();

        let e = &mut self.elements;
        let (a10, a11, a12, a13) = (e[4], e[5], e[6], e[7]);
        let (a20, a21, a22, a23) = (e[8], e[9], e[10], e[11]);

        e[4] = a10 * c + a20 * s;
        e[5] = a11 * c + a21 * s;
        e[6] = a12 * c + a22 * s;
        e[7] = a13 * c + a23 * s;
        e[8] = a20 * c - a10 * s;
        e[9] = a21 * c - a11 * s;
        e[10] = a22 * c - a12 * s;
        e[11] = a23 * c - a13 * s;
        self
    }

    /// Return this matrix rotated around the X axis.
    pub fn rotated_x(&self, rad: f32) -> Self {
        let mut m = *self;
        m.rotate_x(rad);
        m
    }

    /// Rotate around the Y axis, in place.
    pub fn rotate_y(&mut self, rad: f32) -> &mut Self {
        let s = rad.sin();
        let c = rad.cos();

        let e = &mut self.elements;
        let (a00, a01, a02, a03) = (e[0], e[1], e[2], e[3]);
        let (a20, a21, a22, a23) = (e[8], e[9], e[10], e[11]);

        e[0] = a00 * c - a20 * s;
        e[1] = a01 * c - a21 * s;
        e[2] = a02 * c - a22 * s;
        e[3] = a03 * c - a23 * s;
        e[8] = a00 * s + a20 * c;
        e[9] = a01 * s + a21 * c;
        e[10] = a02 * s + a22 * c;
        e[11] = a03 * s + a23 * c;
        self
    }

    /// Return this matrix rotated around the Y axis.
    pub fn rotated_y(&self, rad: f32) -> Self {
        let mut m = *self;
        m.rotate_y(rad);
        m
    }

    /// Rotate around the Z axis, in place.
    pub fn rotate_z(&mut self, rad: f32) -> &mut Self {
        let s = rad.sin();
        let c = rad.cos();

        let e = &mut self.elements;
        let (a00, a01, a02, a03) = (e[0], e[1], e[2], e[3]);
        let (a10, a11, a12, a13) = (e[4], e[5], e[6], e[7]);

        e[0] = a00 * c + a10 * s;
        e[1] = a01 * c + a11 * s;
        e[2] = a02 * c + a12 * s;
        e[3] = a03 * c + a13 * s;
        e[4] = a10 * c - a00 * s;
        e[5] = a11 * c - a01 * s;
        e[6] = a12 * c - a02 * s;
        e[7] = a13 * c - a03 * s;
        self
    }

    /// Return this matrix rotated around the Z axis.
    pub fn rotated_z(&self, rad: f32) -> Self {
        let mut m = *self;
        m.rotate_z(rad);
        m
    }

    /// Create a right-handed perspective projection matrix with an OpenGL
    /// -1..1 depth range.
    ///
    /// `fovy` is the vertical field of view in radians, `aspect` is
    /// width/height. The caller must keep `fovy` inside (0, pi) and
    /// `near != far`; degenerate inputs propagate as infinities or NaN
    /// rather than being guarded.
    pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fovy / 2.0).tan();
        let nf = 1.0 / (near - far);

        Self {
            elements: [
                f / aspect, 0.0, 0.0, 0.0,
                0.0, f, 0.0, 0.0,
                0.0, 0.0, (far + near) * nf, -1.0,
                0.0, 0.0, 2.0 * far * near * nf, 0.0,
            ],
        }
    }

    /// Create a view matrix looking from `eye` towards `center`.
    ///
    /// Returns the identity matrix when `eye` and `center` coincide within
    /// 1e-6 on every axis. When `up` is parallel to the view direction the
    /// degenerate basis vectors collapse to zero instead of dividing by zero.
    pub fn look_at(eye: &Vector3, center: &Vector3, up: &Vector3) -> Self {
        if (eye.x - center.x).abs() < EPSILON
            && (eye.y - center.y).abs() < EPSILON
            && (eye.z - center.z).abs() < EPSILON
        {
            return Self::IDENTITY;
        }

        let z = (*eye - *center).normalized();
        let x = up.cross(&z).normalized();
        let y = z.cross(&x).normalized();

        // Basis vectors form the rows of the upper-left 3x3: this is the
        // inverse of the camera's frame, per view-matrix convention.
        Self {
            elements: [
                x.x, y.x, z.x, 0.0,
                x.y, y.y, z.y, 0.0,
                x.z, y.z, z.z, 0.0,
                -x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0,
            ],
        }
    }

    /// Transform a Vector3 as a point (with translation and perspective
    /// divide).
    pub fn transform_point(&self, v: &Vector3) -> Vector3 {
        let e = &self.elements;
        let w = 1.0 / (e[3] * v.x + e[7] * v.y + e[11] * v.z + e[15]);
        Vector3 {
            x: (e[0] * v.x + e[4] * v.y + e[8] * v.z + e[12]) * w,
            y: (e[1] * v.x + e[5] * v.y + e[9] * v.z + e[13]) * w,
            z: (e[2] * v.x + e[6] * v.y + e[10] * v.z + e[14]) * w,
        }
    }

    /// Transform a Vector3 as a direction (without translation).
    pub fn transform_direction(&self, v: &Vector3) -> Vector3 {
        let e = &self.elements;
        Vector3 {
            x: e[0] * v.x + e[4] * v.y + e[8] * v.z,
            y: e[1] * v.x + e[5] * v.y + e[9] * v.z,
            z: e[2] * v.x + e[6] * v.y + e[10] * v.z,
        }
    }

    /// Check if approximately equal to another matrix.
    pub fn approx_eq(&self, other: &Matrix4, epsilon: f32) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }

    /// Convert to column-major 2D array (for GPU uniform buffers).
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        let e = &self.elements;
        [
            [e[0], e[1], e[2], e[3]],
            [e[4], e[5], e[6], e[7]],
            [e[8], e[9], e[10], e[11]],
            [e[12], e[13], e[14], e[15]],
        ]
    }
}

impl std::ops::Mul for Matrix4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<f32> for Matrix4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        let mut m = self;
        m.multiply_scalar(rhs);
        m
    }
}

impl std::ops::Mul<Vector3> for Matrix4 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.transform_point(&rhs)
    }
}

impl From<[f32; 16]> for Matrix4 {
    fn from(elements: [f32; 16]) -> Self {
        Self::from_cols_array(elements)
    }
}

impl From<Matrix4> for [f32; 16] {
    fn from(m: Matrix4) -> Self {
        m.elements
    }
}

impl From<glam::Mat4> for Matrix4 {
    fn from(m: glam::Mat4) -> Self {
        Self {
            elements: m.to_cols_array(),
        }
    }
}

impl From<Matrix4> for glam::Mat4 {
    fn from(m: Matrix4) -> Self {
        glam::Mat4::from_cols_array(&m.elements)
    }
}
