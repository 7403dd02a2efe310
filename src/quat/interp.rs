//! Interpolation between rotations.

use crate::{traits::Float, Quat};

/// Below this value of `1 - cos(angle)`, [`Quat::slerp`] interpolates linearly.
const SLERP_LINEAR_THRESHOLD: f32 = 0.001;

impl<T: Float> Quat<T> {
    /// Spherical linear interpolation from `self` (at `t = 0`) to `other` (at `t = 1`).
    ///
    /// Interpolates along the shorter great arc, with constant angular velocity. Both quaternions
    /// should have unit length. If they are almost parallel, this falls back to
    /// [`Quat::nlerp`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// use approx::assert_abs_diff_eq;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let a = Quatf::IDENTITY;
    /// let b = Quatf::from_rotation_z(FRAC_PI_2);
    /// let mid = a.slerp(b, 0.5);
    /// assert_abs_diff_eq!(mid, Quatf::from_rotation_z(FRAC_PI_2 / 2.0), epsilon = 1e-6);
    /// ```
    #[doc(alias = "interpolate")]
    pub fn slerp(self, other: Self, t: T) -> Self {
        let (other, cos) = self.shorter_path(other);
        if T::ONE - cos < T::from_f32(SLERP_LINEAR_THRESHOLD) {
            return self.lerp(other, t).normalize();
        }

        let angle = cos.acos();
        let sin = angle.sin();
        let a = ((T::ONE - t) * angle).sin() / sin;
        let b = (t * angle).sin() / sin;
        self * a + other * b
    }

    /// Normalized linear interpolation from `self` to `other`.
    ///
    /// Takes the shorter path like [`Quat::slerp`], but does not move at a constant angular
    /// velocity.
    pub fn nlerp(self, other: Self, t: T) -> Self {
        let (other, _) = self.shorter_path(other);
        self.lerp(other, t).normalize()
    }

    /// Spherical quadrangle interpolation.
    ///
    /// Interpolates from `self` to `other` along a curve shaped by the control points `s1` and
    /// `s2`. Chaining segments whose control points are chosen consistently yields a smooth
    /// (C¹-continuous) rotation path.
    pub fn squad(self, other: Self, s1: Self, s2: Self, t: T) -> Self {
        let two = T::ONE + T::ONE;
        let outer = self.slerp(other, t);
        let inner = s1.slerp(s2, t);
        outer.slerp(inner, two * t * (T::ONE - t))
    }

    /// Returns the rotation by half the angle of `self`, around the same axis.
    ///
    /// `self` must not be a rotation by a full turn (`w == -1`).
    pub fn half(self) -> Self {
        (self + Self::IDENTITY).normalize()
    }

    fn lerp(self, other: Self, t: T) -> Self {
        Self::from_vec(self.into_vec().lerp(other.into_vec(), t))
    }

    /// `q` and `-q` describe the same rotation. Flips `other` onto the hemisphere of `self` and
    /// returns it together with the (non-negative) dot product.
    fn shorter_path(self, other: Self) -> (Self, T) {
        let cos = self.dot(other);
        if cos < T::ZERO {
            (-other, -cos)
        } else {
            (other, cos)
        }
    }
}
