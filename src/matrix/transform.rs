//! Construction of transformation matrices.
//!
//! All matrices here transform column vectors (`matrix * vector`). 3D transforms use homogeneous
//! coordinates, with the translation in the last column.

use crate::{
    traits::{Float, Number, Trig},
    Mat2, Mat3, Mat4, Matrix, One, Quat, Vec3, Vector, Zero,
};

impl<T, const N: usize> Matrix<T, N, N> {
    /// Creates a scaling matrix that scales the first `K` axes by the elements of `factors`.
    ///
    /// Axes past `K` are left unscaled, so a [`Vec3`] can create a homogeneous 4x4 scaling matrix.
    ///
    /// # Panics
    ///
    /// Panics if `K` is larger than `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let scale = Mat4::scaling(vec3(2, 3, 4));
    /// assert_eq!(scale, Matrix::from_diagonal([2, 3, 4, 1]));
    /// assert_eq!(scale * vec4(1, 1, 1, 1), vec4(2, 3, 4, 1));
    /// ```
    pub fn scaling<const K: usize>(factors: Vector<T, K>) -> Self
    where
        T: Zero + One + Copy,
    {
        assert!(K <= N, "cannot scale {K} axes with a {N}x{N} matrix");
        Self::from_fn(|row, col| match row {
            _ if row != col => T::ZERO,
            _ if row < K => factors[row],
            _ => T::ONE,
        })
    }

    /// Applies a scaling *before* the transformation described by `self`.
    ///
    /// This is equivalent to `*self = *self * Matrix::scaling(factors)`, which multiplies column `i`
    /// of `self` with `factors[i]`.
    ///
    /// # Panics
    ///
    /// Panics if `K` is larger than `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let mut m = Mat3::diag(2);
    /// m.scale(vec2(5, 7));
    /// assert_eq!(m, Matrix::from_diagonal([10, 14, 2]));
    /// ```
    pub fn scale<const K: usize>(&mut self, factors: Vector<T, K>)
    where
        T: Number,
    {
        assert!(K <= N, "cannot scale {K} axes with a {N}x{N} matrix");
        for row in &mut self.0 {
            for (elem, factor) in row.as_mut_slice().iter_mut().zip(factors.into_array()) {
                *elem = *elem * factor;
            }
        }
    }

    /// Returns `self` with a scaling applied before it.
    ///
    /// See [`Matrix::scale`].
    pub fn scaled<const K: usize>(mut self, factors: Vector<T, K>) -> Self
    where
        T: Number,
    {
        self.scale(factors);
        self
    }

    /// Returns whether the bottom row of this matrix is `(0, ..., 0, 1)`.
    ///
    /// Affine matrices combine a linear transformation with a translation. Projection matrices
    /// are not affine.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// assert!(Mat4::translation(vec3(1.0, 2.0, 3.0)).is_affine());
    /// assert!(!Mat4::perspective(1.0, 1.5, 0.1, 100.0).is_affine());
    /// ```
    pub fn is_affine(&self) -> bool
    where
        T: Zero + One + PartialEq,
    {
        let bottom = &self.0[N - 1];
        bottom.as_slice().iter().enumerate().all(|(col, elem)| {
            if col == N - 1 {
                *elem == T::ONE
            } else {
                *elem == T::ZERO
            }
        })
    }
}

impl<T: Number + Trig> Mat2<T> {
    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane (Y up, X right).
    pub fn rotation_clockwise(radians: T) -> Self {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane (Y up, X right).
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// use approx::assert_relative_eq;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let rot = Mat2::rotation_counterclockwise(FRAC_PI_2);
    /// assert_relative_eq!(rot * Vec2f::X, Vec2f::Y);
    /// ```
    pub fn rotation_counterclockwise(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([[cos, -sin], [sin, cos]])
    }
}

impl<T: Float> Mat3<T> {
    /// Creates a rotation matrix that rotates counterclockwise by `radians` around `axis` (when
    /// looking against the direction of `axis`).
    ///
    /// `axis` does not have to be normalized, but must not be zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// use approx::assert_relative_eq;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let rot = Mat3::rotation(vec3(0.0, 0.0, 5.0), FRAC_PI_2);
    /// assert_relative_eq!(rot * Vec3f::X, Vec3f::Y);
    /// ```
    pub fn rotation(axis: Vec3<T>, radians: T) -> Self {
        // Rodrigues' rotation formula.
        let [x, y, z] = axis.normalize().into_array();
        let (sin, cos) = radians.sin_cos();
        let t = T::ONE - cos;

        #[rustfmt::skip]
        let rot = Self::from_rows([
            [cos + x * x * t,     x * y * t - z * sin, x * z * t + y * sin],
            [y * x * t + z * sin, cos + y * y * t,     y * z * t - x * sin],
            [z * x * t - y * sin, z * y * t + x * sin, cos + z * z * t    ],
        ]);
        rot
    }

    /// Creates the rotation matrix corresponding to the unit quaternion `q`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let q = Quatf::from_axis_angle(vec3(1.0, 1.0, 0.0), 0.75);
    /// let m = Mat3::from_quat(q);
    /// assert_abs_diff_eq!(m * vec3(0.5, -2.0, 3.0), q * vec3(0.5, -2.0, 3.0), epsilon = 1e-6);
    /// ```
    pub fn from_quat(q: Quat<T>) -> Self {
        let (w, x, y, z) = (q.w, q.x, q.y, q.z);
        let two = T::ONE + T::ONE;

        #[rustfmt::skip]
        let rot = Self::from_rows([
            [T::ONE - two * (y * y + z * z), two * (x * y - w * z),           two * (x * z + w * y)          ],
            [two * (x * y + w * z),          T::ONE - two * (x * x + z * z), two * (y * z - w * x)          ],
            [two * (x * z - w * y),          two * (y * z + w * x),           T::ONE - two * (x * x + y * y)],
        ]);
        rot
    }
}

impl<T: Zero + One + Copy> Mat4<T> {
    /// Creates a homogeneous transformation matrix from a linear transformation and a translation.
    ///
    /// The result applies `linear` first, then moves the result by `translation`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let m = Mat4::from_affine(Mat3::diag(2), vec3(1, 2, 3));
    /// assert_eq!(m * vec4(1, 1, 1, 1), vec4(3, 4, 5, 1));
    /// assert_eq!(m * vec4(1, 1, 1, 0), vec4(2, 2, 2, 0));
    /// ```
    pub fn from_affine(linear: Mat3<T>, translation: Vec3<T>) -> Self {
        Self::from_fn(|row, col| match (row, col) {
            (3, 3) => T::ONE,
            (3, _) => T::ZERO,
            (_, 3) => translation[row],
            _ => linear[(row, col)],
        })
    }

    /// Creates a translation matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let m = Mat4::translation(vec3(1, 2, 3));
    /// assert_eq!(m * vec4(10, 10, 10, 1), vec4(11, 12, 13, 1));
    /// assert_eq!(m[(0, 3)], 1);
    /// ```
    pub fn translation(offset: Vec3<T>) -> Self {
        Self::from_affine(Mat3::IDENTITY, offset)
    }
}

impl<T: Number> Mat4<T> {
    /// Applies a translation *before* the transformation described by `self`.
    ///
    /// Equivalent to `*self = *self * Mat4::translation(offset)`.
    pub fn translate(&mut self, offset: Vec3<T>) {
        *self = *self * Self::translation(offset);
    }
}

impl<T: Float> Mat4<T> {
    /// Creates a homogeneous matrix rotating by `radians` around `axis`.
    ///
    /// See [`Mat3::rotation`].
    pub fn rotation(axis: Vec3<T>, radians: T) -> Self {
        Self::from_affine(Mat3::rotation(axis, radians), Vec3::ZERO)
    }

    /// Applies a rotation *before* the transformation described by `self`.
    pub fn rotate(&mut self, axis: Vec3<T>, radians: T) {
        *self = *self * Self::rotation(axis, radians);
    }

    /// Creates the homogeneous rotation matrix corresponding to the unit quaternion `q`.
    pub fn from_quat(q: Quat<T>) -> Self {
        Self::from_affine(Mat3::from_quat(q), Vec3::ZERO)
    }

    /// Creates a matrix that places an object at `eye`, with its Z axis pointing at `target`.
    ///
    /// The columns of the rotational part are the *right*, *up* and *forward* directions, where
    /// *right* is perpendicular to `up` and *forward*. The last column holds `eye`.
    ///
    /// Inverting the result yields a view matrix for a camera at `eye` that looks down its local
    /// +Z axis. The projections in this module expect a camera looking down -Z, so the inverse
    /// has to be turned around the up axis first:
    ///
    /// ```
    /// # use ndv::*;
    /// let placement = Mat4f::look_at(vec3(0.0, 2.0, 5.0), Vec3::ZERO, Vec3::Y);
    /// let view = Mat4f::scaling(vec3(-1.0, 1.0, -1.0)) * placement.inverse();
    /// let clip = Mat4f::perspective(1.0, 1.5, 0.1, 100.0) * view * vec4(0.0, 0.0, 0.0, 1.0);
    /// assert!(clip.w > 0.0);
    /// ```
    ///
    /// `eye` and `target` must not coincide, and `up` must not be parallel to the view direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// use approx::assert_relative_eq;
    ///
    /// let eye = vec3(0.0, 0.0, 5.0);
    /// let m = Mat4::look_at(eye, Vec3::ZERO, Vec3f::Y);
    /// assert_relative_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), eye.extend(1.0));
    /// assert_relative_eq!(m * Vec4f::Z, -Vec4f::Z);
    /// ```
    pub fn look_at(eye: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self {
        let forward = (target - eye).normalize();
        let right = up.cross(forward).normalize();
        let up = forward.cross(right);
        Self::from_affine(Mat3::from_columns([right, up, forward]), eye)
    }

    /// Creates an orthographic projection matrix that maps the given box to the `[-1, 1]` cube.
    ///
    /// Follows the OpenGL convention: the camera looks down the negative Z axis, and `near` and
    /// `far` are distances along it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let m = Mat4::orthographic(0.0, 800.0, 0.0, 600.0, -1.0, 1.0);
    /// assert_abs_diff_eq!(
    ///     m * vec4(800.0, 600.0, 0.0, 1.0),
    ///     vec4(1.0, 1.0, 0.0, 1.0),
    ///     epsilon = 1e-6
    /// );
    /// assert_abs_diff_eq!(
    ///     m * vec4(0.0, 0.0, 1.0, 1.0),
    ///     vec4(-1.0, -1.0, -1.0, 1.0),
    ///     epsilon = 1e-6
    /// );
    /// ```
    #[doc(alias = "ortho")]
    pub fn orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let two = T::ONE + T::ONE;
        let (w, h, d) = (right - left, top - bottom, far - near);
        let zero = T::ZERO;

        #[rustfmt::skip]
        let proj = Self::from_rows([
            [two / w, zero,    zero,     -(right + left) / w],
            [zero,    two / h, zero,     -(top + bottom) / h],
            [zero,    zero,    -two / d, -(far + near) / d  ],
            [zero,    zero,    zero,     T::ONE             ],
        ]);
        proj
    }

    /// Creates a perspective projection matrix for the given view frustum.
    ///
    /// `left`, `right`, `bottom` and `top` describe the near clipping plane. Follows the OpenGL
    /// convention (camera looking down the negative Z axis, depth mapped to `[-1, 1]`).
    pub fn frustum(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let two = T::ONE + T::ONE;
        let (w, h, d) = (right - left, top - bottom, far - near);
        let zero = T::ZERO;

        #[rustfmt::skip]
        let proj = Self::from_rows([
            [two * near / w, zero,           (right + left) / w, zero                  ],
            [zero,           two * near / h, (top + bottom) / h, zero                  ],
            [zero,           zero,           -(far + near) / d,  -two * far * near / d ],
            [zero,           zero,           -T::ONE,            zero                  ],
        ]);
        proj
    }

    /// Creates a symmetric perspective projection matrix.
    ///
    /// `fovy` is the vertical field of view in radians, `aspect` the ratio of width to height.
    /// Points at distance `near` in front of the camera map to depth -1, at `far` to depth 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let proj = Mat4::perspective(1.2, 16.0 / 9.0, 0.5, 50.0);
    /// let clip = proj * vec4(0.0, 0.0, -50.0, 1.0);
    /// assert_abs_diff_eq!(clip.z / clip.w, 1.0, epsilon = 1e-5);
    /// ```
    pub fn perspective(fovy: T, aspect: T, near: T, far: T) -> Self {
        let two = T::ONE + T::ONE;
        let f = T::ONE / (fovy / two).tan();
        let zero = T::ZERO;

        #[rustfmt::skip]
        let proj = Self::from_rows([
            [f / aspect, zero, zero,                      zero                          ],
            [zero,       f,    zero,                      zero                          ],
            [zero,       zero, (far + near) / (near - far), two * far * near / (near - far)],
            [zero,       zero, -T::ONE,                   zero                          ],
        ]);
        proj
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::{vec2, vec3, vec4, Mat3f, Mat4f, Quatf, Vec3f, Vec4f};

    use super::*;

    #[test]
    fn scaling() {
        assert_eq!(
            Mat3::scaling(vec2(2, 3)),
            Matrix::from_rows([[2, 0, 0], [0, 3, 0], [0, 0, 1]])
        );
        assert_eq!(Mat2::scaling(vec2(4, 5)), Matrix::from_diagonal([4, 5]));
        assert_eq!(Mat4::scaling(vec3(1, 1, 1)), Mat4::IDENTITY);
    }

    #[test]
    #[should_panic(expected = "cannot scale 4 axes with a 3x3 matrix")]
    fn scaling_too_many_axes() {
        Mat3::scaling(vec4(1, 2, 3, 4));
    }

    #[test]
    fn scale_post_multiplies() {
        let t = Mat4::translation(vec3(10.0, 20.0, 30.0));
        let m = t.scaled(vec3(2.0, 3.0, 4.0));
        assert_eq!(m, t * Mat4::scaling(vec3(2.0, 3.0, 4.0)));

        // Scaling is applied first, then the translation.
        assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(12.0, 23.0, 34.0, 1.0));
        assert!(m.is_affine());
    }

    #[test]
    fn translate() {
        let mut m = Mat4::scaling(vec3(2, 2, 2));
        m.translate(vec3(1, 2, 3));
        // The translation happens before the scaling.
        assert_eq!(m * vec4(0, 0, 0, 1), vec4(2, 4, 6, 1));
        // Directions are unaffected.
        assert_eq!(m * vec4(1, 0, 0, 0), vec4(2, 0, 0, 0));
    }

    #[test]
    fn rotation() {
        let rot = Mat4f::rotation(Vec3f::Z, FRAC_PI_2);
        assert_relative_eq!(rot * Vec4f::X, Vec4f::Y);
        assert_relative_eq!(rot * Vec4f::Y, -Vec4f::X);
        assert_eq!(rot * Vec4f::W, Vec4f::W);

        let rot = Mat3f::rotation(Vec3f::X, FRAC_PI_2);
        assert_relative_eq!(rot * Vec3f::Y, Vec3f::Z);

        let rot = Mat3f::rotation(Vec3f::Y, FRAC_PI_2);
        assert_relative_eq!(rot * Vec3f::Z, Vec3f::X);
    }

    #[test]
    fn rotation_is_orthonormal() {
        let axis = vec3(0.3, -1.2, 2.0);
        let rot = Mat3f::rotation(axis, 1.1);
        assert_abs_diff_eq!(rot * rot.transpose(), Mat3f::IDENTITY, epsilon = 1e-6);
        assert_abs_diff_eq!(rot.determinant(), 1.0, epsilon = 1e-6);
        // The axis is left in place.
        assert_abs_diff_eq!(rot * axis, axis, epsilon = 1e-5);
        // Unnormalized axes are accepted.
        assert_abs_diff_eq!(Mat3f::rotation(axis * 7.0, 1.1), rot, epsilon = 1e-6);
    }

    #[test]
    fn rotation_2d() {
        let ccw = Mat2::rotation_counterclockwise(PI / 2.0);
        let cw = Mat2::rotation_clockwise(PI / 2.0);
        assert_relative_eq!(ccw * vec2(1.0, 0.0), vec2(0.0, 1.0));
        assert_relative_eq!(cw * vec2(1.0, 0.0), vec2(0.0, -1.0));
        assert_abs_diff_eq!(ccw * cw, Mat2::IDENTITY, epsilon = 1e-6);
    }

    #[test]
    fn quat_to_matrix() {
        let axis = vec3(-1.0, 0.5, 2.0);
        let q = Quatf::from_axis_angle(axis, 2.5);
        assert_abs_diff_eq!(Mat3::from_quat(q), Mat3f::rotation(axis, 2.5), epsilon = 1e-6);
        assert_abs_diff_eq!(Mat4::from_quat(q), Mat4f::rotation(axis, 2.5), epsilon = 1e-6);
        assert_eq!(Mat4::from_quat(Quatf::IDENTITY), Mat4f::IDENTITY);

        let v = vec3(4.0, -1.0, 0.5);
        assert_abs_diff_eq!(Mat3::from_quat(q) * v, q.rotate(v), epsilon = 1e-5);
    }

    #[test]
    fn look_at() {
        let eye = vec3(1.0, 2.0, 3.0);
        let target = vec3(1.0, 2.0, -7.0);
        let m = Mat4f::look_at(eye, target, Vec3f::Y);

        assert!(m.is_affine());
        assert_relative_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), eye.extend(1.0));
        // Local Z points at the target.
        assert_relative_eq!((m * vec4(0.0, 0.0, 10.0, 1.0)).truncate(), target);
        // Local Y stays up.
        assert_relative_eq!(m * Vec4f::Y, Vec4f::Y);

        let rotation = Mat3::from_fn(|r, c| m[(r, c)]);
        assert_abs_diff_eq!(rotation.determinant(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn look_at_camera() {
        let placement = Mat4f::look_at(vec3(0.0, 2.0, 5.0), Vec3f::ZERO, Vec3f::Y);
        let view = Mat4f::scaling(vec3(-1.0, 1.0, -1.0)) * placement.inverse();
        let proj = Mat4f::perspective(1.0, 1.5, 0.1, 100.0);
        let ndc = |p: Vec3f| {
            let clip = proj * view * p.extend(1.0);
            assert!(clip.w > 0.0, "{p:?} is behind the camera");
            clip.truncate() / clip.w
        };

        // The target is in the center of the screen, inside the depth range.
        let center = ndc(Vec3f::ZERO);
        assert_abs_diff_eq!(center.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(center.y, 0.0, epsilon = 1e-6);
        assert!(center.z > -1.0 && center.z < 1.0);

        // World X is screen right, world Y is screen up.
        assert!(ndc(Vec3f::X).x > 0.0);
        assert!(ndc(Vec3f::Y).y > 0.0);
        // Closer points get smaller depth values.
        assert!(ndc(vec3(0.0, 0.0, 1.0)).z < center.z);
    }

    #[test]
    fn orthographic() {
        let m = Mat4f::orthographic(-2.0, 6.0, -1.0, 3.0, 0.5, 10.5);
        assert_abs_diff_eq!(
            m * vec4(-2.0, -1.0, -0.5, 1.0),
            vec4(-1.0, -1.0, -1.0, 1.0),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            m * vec4(6.0, 3.0, -10.5, 1.0),
            vec4(1.0, 1.0, 1.0, 1.0),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            m * vec4(2.0, 1.0, -5.5, 1.0),
            vec4(0.0, 0.0, 0.0, 1.0),
            epsilon = 1e-6
        );
        assert!(m.is_affine());
    }

    #[test]
    fn perspective() {
        let (near, far) = (0.1, 100.0);
        let m = Mat4f::perspective(FRAC_PI_2, 2.0, near, far);
        assert_eq!(m[(3, 2)], -1.0);
        assert_eq!(m[(3, 3)], 0.0);
        assert!(!m.is_affine());

        let ndc = |p: Vec4f| {
            let clip = m * p;
            clip.truncate() / clip.w
        };
        assert_abs_diff_eq!(ndc(vec4(0.0, 0.0, -near, 1.0)).z, -1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(ndc(vec4(0.0, 0.0, -far, 1.0)).z, 1.0, epsilon = 1e-5);
        // 90° vertical field of view: the top edge is at 45°.
        assert_abs_diff_eq!(ndc(vec4(0.0, 5.0, -5.0, 1.0)).y, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(ndc(vec4(10.0, 0.0, -5.0, 1.0)).x, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn symmetric_frustum() {
        let (fovy, aspect, near, far) = (1.1f64, 1.25, 0.25, 40.0);
        let top = near * (fovy / 2.0).tan();
        let right = top * aspect;
        assert_abs_diff_eq!(
            Mat4::frustum(-right, right, -top, top, near, far),
            Mat4::perspective(fovy, aspect, near, far),
            epsilon = 1e-12
        );
    }

    #[test]
    fn affine() {
        assert!(Mat3::<i32>::IDENTITY.is_affine());
        assert!(Mat4::translation(vec3(1, 2, 3)).is_affine());
        assert!(!Mat3::from_rows([[1, 0, 0], [0, 1, 0], [0, 1, 1]]).is_affine());
        assert!(!Mat3::<i32>::ZERO.is_affine());
    }
}
