//! Fixed-size vectors, matrices and quaternions.
//!
//! The dimensions of every type are const generic parameters, so shape mismatches (adding a
//! [`Vec2`] to a [`Vec3`], multiplying a 2x3 by a 2x3 matrix) are compile errors rather than
//! runtime panics.
//!
//! # Overview
//!
//! - [`Vector<T, N>`] is an `N`-element column vector. [`Vec2`], [`Vec3`] and [`Vec4`] provide
//!   named `x`, `y`, `z`, `w` fields.
//! - [`Matrix<T, R, C>`] is an `R`x`C` matrix, stored as `R` rows. Matrices multiply column vectors
//!   from the left, so a transform `m` applied to `v` is written `m * v` and `a * b` applies `b`
//!   first.
//! - Square matrices of any size have a determinant, cofactor matrix, adjoint and inverse. 2x2,
//!   3x3 and 4x4 matrices use closed forms, larger ones cofactor (Laplace) expansion.
//! - [`Quat<T>`] is a quaternion, typically used as a rotation in 3D space.
//!
//! # Conventions
//!
//! - Angles are in radians.
//! - Rotations are counterclockwise when looking against the rotation axis (right-handed).
//! - Projection matrices map to OpenGL clip space (depth from `-1` to `1`).
//! - `==` compares exactly. Vectors, matrices and quaternions implement the [`approx`] crate's
//!   `AbsDiffEq`, `RelativeEq` and `UlpsEq` traits for comparing the results of floating-point
//!   computations.
//!
//! # Examples
//!
//! ```
//! # use ndv::*;
//! use approx::assert_abs_diff_eq;
//! use std::f32::consts::FRAC_PI_2;
//!
//! let model = Mat4f::translation(vec3(0.0, 0.0, -5.0)) * Mat4f::rotation(Vec3f::Y, FRAC_PI_2);
//! let p = model * vec4(1.0, 0.0, 0.0, 1.0);
//! assert_abs_diff_eq!(p, vec4(0.0, 0.0, -6.0, 1.0), epsilon = 1e-6);
//!
//! let inverse = model.inverse();
//! assert_abs_diff_eq!(inverse * p, vec4(1.0, 0.0, 0.0, 1.0), epsilon = 1e-5);
//! ```
//!
//! # Cargo features
//!
//! - `bytemuck` (enabled by default): implements [`bytemuck::Zeroable`] and [`bytemuck::Pod`] for
//!   vectors, matrices and quaternions, so that they can be uploaded to the GPU directly.

mod matrix;
mod quat;
mod traits;
mod vector;

pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use vector::*;
