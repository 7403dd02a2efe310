mod interp;
mod ops;
mod view;

use std::fmt;

use crate::{
    traits::{Float, Number, Sqrt, Trig},
    vec4, One, Vec3, Vector, Zero,
};

pub use view::WXYZ;

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] components.
pub type Quatd = Quat<f64>;

/// A quaternion consisting of a real part `w` and 3 imaginary parts `x`, `y` and `z`.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
/// Multiplying two of them composes their rotations: `a * b` first rotates by `b`, then by `a`.
///
/// The components are stored in the order `w`, `x`, `y`, `z`, which is also the order used by
/// indexing and by [`Quat::new`]. They can be accessed as fields:
///
/// ```
/// # use ndv::*;
/// let q = Quatf::IDENTITY;
/// assert_eq!((q.w, q.x, q.y, q.z), (1.0, 0.0, 0.0, 0.0));
/// assert_eq!(q[0], 1.0);
/// assert_eq!(q[1], 0.0);
/// ```
///
/// Operations that assume a unit quaternion ([`Quat::rotate`], the interpolation functions) don't
/// check that precondition.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
}

impl<T> Quat<T> {
    /// Creates a quaternion from its real part `w` and its imaginary parts `x`, `y` and `z`.
    #[inline]
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self {
            vec: vec4(w, x, y, z),
        }
    }

    /// Creates a quaternion with all components set to `value`.
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self {
            vec: Vector::splat(value),
        }
    }

    /// Creates a quaternion from a real part and a vector of imaginary parts.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let q = Quat::from_parts(1, vec3(2, 3, 4));
    /// assert_eq!(q, Quat::new(1, 2, 3, 4));
    /// assert_eq!(q.vector(), vec3(2, 3, 4));
    /// ```
    pub fn from_parts(w: T, vector: Vec3<T>) -> Self {
        let [x, y, z] = vector.into_array();
        Self::new(w, x, y, z)
    }

    /// Creates a quaternion from a 4-dimensional [`Vector`] holding `w`, `x`, `y` and `z`.
    #[inline]
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Returns the components as a [`Vector`] in `w`, `x`, `y`, `z` order.
    #[inline]
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Returns the real part `w`.
    pub fn scalar(&self) -> T
    where
        T: Copy,
    {
        self.vec[0]
    }

    /// Returns the imaginary parts `x`, `y` and `z` as a [`Vec3`].
    pub fn vector(&self) -> Vec3<T>
    where
        T: Copy,
    {
        let [_, x, y, z] = self.vec.into_array();
        Vec3::from([x, y, z])
    }

    /// Creates a unit quaternion rotating counterclockwise by `radians` around `axis` (when looking
    /// against the direction of `axis`).
    ///
    /// `axis` is normalized first, so it may have any non-zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// use approx::assert_abs_diff_eq;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let q = Quat::from_axis_angle(vec3(0.0, 0.0, 3.0), FRAC_PI_2);
    /// assert_abs_diff_eq!(q.rotate(Vec3f::X), Vec3f::Y, epsilon = 1e-6);
    /// assert_abs_diff_eq!(q.length(), 1.0, epsilon = 1e-6);
    /// ```
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self
    where
        T: Float,
    {
        let (sin, cos) = (radians / (T::ONE + T::ONE)).sin_cos();
        Self::from_parts(cos, axis.normalize() * sin)
    }

    /// Creates a unit quaternion rotating by `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians / (T::ONE + T::ONE)).sin_cos();
        Self::new(cos, sin, T::ZERO, T::ZERO)
    }

    /// Creates a unit quaternion rotating by `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians / (T::ONE + T::ONE)).sin_cos();
        Self::new(cos, T::ZERO, sin, T::ZERO)
    }

    /// Creates a unit quaternion rotating by `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians / (T::ONE + T::ONE)).sin_cos();
        Self::new(cos, T::ZERO, T::ZERO, sin)
    }

    /// Creates a quaternion that rotates around the X, Y and Z axes, in that order.
    #[doc(alias = "euler")]
    pub fn from_rotation_xyz(x: T, y: T, z: T) -> Self
    where
        T: Number + Trig,
    {
        Self::from_rotation_z(z) * Self::from_rotation_y(y) * Self::from_rotation_x(x)
    }

    /// Returns the squared length of this quaternion.
    pub fn length_squared(&self) -> T
    where
        T: Number,
    {
        self.vec.length_squared()
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, rotating a vector with this quaternion will scale the
    /// vector in addition to rotating it. When using quaternions to model rotations, it is
    /// advisable to ensure that quaternions are always of length one.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Computes the 4-dimensional dot product of `self` and `other`.
    ///
    /// For unit quaternions, this is the cosine of half the angle between the rotations.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.vec.dot(other.vec)
    }

    /// Returns the conjugate of this quaternion, which has its imaginary parts negated.
    ///
    /// The conjugate of a unit quaternion is its inverse.
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        let [w, x, y, z] = self.vec.into_array();
        Self::new(w, -x, -y, -z)
    }

    /// Returns the multiplicative inverse of this quaternion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let q = Quat::new(1.0, 2.0, -1.0, 0.5);
    /// assert_abs_diff_eq!(q * q.inverse(), Quat::IDENTITY, epsilon = 1e-12);
    /// ```
    pub fn inverse(self) -> Self
    where
        T: Number,
    {
        self.conjugate() / self.length_squared()
    }

    /// Rotates `v` by the rotation this quaternion describes.
    ///
    /// `self` has to be a unit quaternion. `q * v` is a shorthand for `q.rotate(v)`.
    pub fn rotate(self, v: Vec3<T>) -> Vec3<T>
    where
        T: Number,
    {
        (self * Self::from_parts(T::ZERO, v) * self.conjugate()).vector()
    }
}

impl<T: Zero + One> Default for Quat<T> {
    /// Returns [`Quat::IDENTITY`].
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("w", &self.w)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

/// Prints `{ w, x, y, z }` with 3 decimal places, unless a different precision is requested.
///
/// ```
/// # use ndv::*;
/// assert_eq!(Quatf::IDENTITY.to_string(), "{ 1.000, 0.000, 0.000, 0.000 }");
/// assert_eq!(format!("{:.1}", Quat::new(0.5, 0.2, 0.0, -1.0)), "{ 0.5, 0.2, 0.0, -1.0 }");
/// ```
impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(3);
        write!(
            f,
            "{{ {:.p$}, {:.p$}, {:.p$}, {:.p$} }}",
            self.w, self.x, self.y, self.z
        )
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::{vec3, Vec3f};

    use super::*;

    #[test]
    fn identity() {
        let q = Quatf::IDENTITY;
        assert_eq!(q.w, 1.0);
        assert_eq!((q.x, q.y, q.z), (0.0, 0.0, 0.0));
        assert_eq!(q[0], 1.0);
        assert_eq!(q[1], 0.0);
        assert_eq!(Quatf::default(), q);
        assert_eq!(q.scalar(), 1.0);
        assert_eq!(q.vector(), Vec3f::ZERO);
    }

    #[test]
    fn field_access() {
        let mut q = Quat::new(1, 2, 3, 4);
        q.y = 30;
        q[3] = 40;
        assert_eq!(q.into_vec(), [1, 2, 30, 40]);
        assert_eq!(Quat::splat(7), Quat::new(7, 7, 7, 7));
        assert_eq!(Quat::from_vec(q.into_vec()), q);
    }

    #[test]
    fn rotate_quarter_turn() {
        let q = Quatf::from_axis_angle(Vec3f::Z, FRAC_PI_2);
        assert_abs_diff_eq!(q.rotate(Vec3f::X), Vec3f::Y, epsilon = 1e-6);
        assert_abs_diff_eq!(q * Vec3f::Y, -Vec3f::X, epsilon = 1e-6);
        assert_abs_diff_eq!(q * Vec3f::Z, Vec3f::Z, epsilon = 1e-6);
    }

    #[test]
    fn axis_rotations() {
        let angle = 0.6;
        assert_relative_eq!(Quatf::from_rotation_x(angle), Quatf::from_axis_angle(Vec3f::X, angle));
        assert_relative_eq!(Quatf::from_rotation_y(angle), Quatf::from_axis_angle(Vec3f::Y, angle));
        assert_relative_eq!(Quatf::from_rotation_z(angle), Quatf::from_axis_angle(Vec3f::Z, angle));
        assert_abs_diff_eq!(Quatf::from_rotation_y(FRAC_PI_2) * Vec3f::Z, Vec3f::X, epsilon = 1e-6);
        assert_abs_diff_eq!(Quatf::from_rotation_x(FRAC_PI_2) * Vec3f::Y, Vec3f::Z, epsilon = 1e-6);
    }

    #[test]
    fn rotation_sequence() {
        let q = Quatf::from_rotation_xyz(FRAC_PI_2, FRAC_PI_2, 0.0);
        // X first: Y -> Z, then Y: Z -> X.
        assert_abs_diff_eq!(q * Vec3f::Y, Vec3f::X, epsilon = 1e-6);
        assert_relative_eq!(Quatf::from_rotation_xyz(0.0, 0.0, 0.3), Quatf::from_rotation_z(0.3));
    }

    #[test]
    fn unit_length() {
        let q = Quatf::from_axis_angle(vec3(1.0, -2.0, 0.5), 2.0);
        assert_abs_diff_eq!(q.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(q * q.conjugate(), Quatf::IDENTITY, epsilon = 1e-6);
        assert_abs_diff_eq!(q.conjugate() * q, Quatf::IDENTITY, epsilon = 1e-6);
        assert_abs_diff_eq!(q.inverse(), q.conjugate(), epsilon = 1e-6);
    }

    #[test]
    fn hamilton_product() {
        let (i, j, k) = (
            Quat::new(0, 1, 0, 0),
            Quat::new(0, 0, 1, 0),
            Quat::new(0, 0, 0, 1),
        );
        let minus_one = Quat::new(-1, 0, 0, 0);
        assert_eq!(i * i, minus_one);
        assert_eq!(j * j, minus_one);
        assert_eq!(k * k, minus_one);
        assert_eq!(i * j * k, minus_one);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
    }

    #[test]
    fn composition_order() {
        let a = Quatf::from_rotation_z(FRAC_PI_2);
        let b = Quatf::from_rotation_x(PI);
        let v = vec3(0.3, 1.0, -2.0);
        assert_abs_diff_eq!((a * b).rotate(v), a.rotate(b.rotate(v)), epsilon = 1e-6);

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn inverse_non_unit() {
        let q = Quat::new(2.0f64, -1.0, 0.5, 3.0);
        assert_abs_diff_eq!(q * q.inverse(), Quat::IDENTITY, epsilon = 1e-12);
        assert_abs_diff_eq!(q.inverse() * q, Quat::IDENTITY, epsilon = 1e-12);
    }

    #[test]
    fn fmt() {
        assert_eq!(Quatf::IDENTITY.to_string(), "{ 1.000, 0.000, 0.000, 0.000 }");
        assert_eq!(
            format!("{:.2}", Quat::new(0.5, 1.0, -2.0, 0.126)),
            "{ 0.50, 1.00, -2.00, 0.13 }"
        );
        assert_eq!(
            format!("{:?}", Quat::new(1, 2, 3, 4)),
            "Quat { w: 1, x: 2, y: 3, z: 4 }"
        );
    }
}
