//! # ren-math
//!
//! 4x4 matrix algebra for 3D transform composition: model/view/projection
//! construction, rigid-body transforms (translate, rotate, scale), camera
//! view derivation (look-at) and perspective projection.
//!
//! Matrices are single-precision and column-major: element `4*col + row`
//! holds the entry at (row, col), matching the layout GPUs and the wider
//! graphics ecosystem expect. Vectors are column vectors on the right, so
//! transforms compose right-to-left.
//!
//! ## Example
//!
//! ```
//! use ren_math::{Matrix4, Vector3};
//!
//! let mut model = Matrix4::identity();
//! model
//!     .translate(&Vector3::new(0.0, 1.0, -5.0))
//!     .rotate_y(ren_math::deg_to_rad(45.0));
//!
//! let view = Matrix4::look_at(
//!     &Vector3::new(0.0, 2.0, 8.0),
//!     &Vector3::ZERO,
//!     &Vector3::UP,
//! );
//! let projection = Matrix4::perspective(ren_math::deg_to_rad(60.0), 16.0 / 9.0, 0.1, 100.0);
//!
//! let mvp = projection.multiply(&view).multiply(&model);
//! let clip = mvp.transform_point(&Vector3::ZERO);
//! # let _clip = clip;
//! ```

#![warn(missing_docs)]

mod error;
mod matrix4;
mod vector3;

pub use error::MatrixError;
pub use matrix4::Matrix4;
pub use vector3::Vector3;

/// Common math constants.
pub mod consts {
    /// Pi constant.
    pub const PI: f32 = std::f32::consts::PI;
    /// Two times Pi.
    pub const TWO_PI: f32 = PI * 2.0;
    /// Half of Pi.
    pub const HALF_PI: f32 = PI / 2.0;
    /// Degrees to radians conversion factor.
    pub const DEG2RAD: f32 = PI / 180.0;
    /// Radians to degrees conversion factor.
    pub const RAD2DEG: f32 = 180.0 / PI;
    /// Small epsilon for floating point comparisons.
    pub const EPSILON: f32 = 1e-6;
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * consts::DEG2RAD
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * consts::RAD2DEG
}
