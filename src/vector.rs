use std::{array, fmt};

use crate::{
    traits::{Float, Number, Sqrt},
    Mat2, MinMax, One, Trig, Zero,
};

mod ops;
mod view;

pub use view::{XY, XYZ, XYZW};

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions create vectors from exactly `N`
///   values. Arrays convert via [`From`].
/// - [`Vector::splat`] broadcasts one value into every element.
/// - [`Vector::from_slice`] fills the leading elements from a slice of up to `N` values and
///   defaults the rest.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - [`Vector::ZERO`] is the all-zero vector, and for up to 4 dimensions `Vector::X`, `Vector::Y`,
///   `Vector::Z` and `Vector::W` are the unit axes.
///
/// # Element Access
///
/// - For 2, 3 and 4 dimensions, elements are accessible as fields `x`, `y`, `z` and `w`.
/// - [`Index`] and [`IndexMut`] work like on arrays and panic when out of bounds.
/// - [`Vector::as_array`], [`Vector::as_slice`] and [`Vector::into_array`] expose the elements.
///
/// # Comparison
///
/// `==` compares elements exactly, also for floats. Results of floating-point computations are
/// better compared with the [`approx`] traits ([`AbsDiffEq`], [`RelativeEq`], [`UlpsEq`]), which
/// are implemented element-wise.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`AbsDiffEq`]: approx::AbsDiffEq
/// [`RelativeEq`]: approx::RelativeEq
/// [`UlpsEq`]: approx::UlpsEq
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to [`T::ZERO`][Zero::ZERO].
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = vec2(T::ONE, T::ZERO);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = vec2(T::ZERO, T::ONE);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = vec3(T::ONE, T::ZERO, T::ZERO);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = vec3(T::ZERO, T::ONE, T::ZERO);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = vec3(T::ZERO, T::ZERO, T::ONE);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = vec4(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = vec4(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = vec4(T::ZERO, T::ZERO, T::ONE, T::ZERO);
    /// A unit vector pointing in the W direction.
    pub const W: Self = vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector from the leading elements in `elems`.
    ///
    /// Elements past the end of `elems` are initialized with their [`Default`] value.
    ///
    /// # Panics
    ///
    /// Panics if `elems` has more than `N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// assert_eq!(Vec4i::from_slice(&[7, 8]), vec4(7, 8, 0, 0));
    /// assert_eq!(Vec2f::from_slice(&[]), Vec2f::ZERO);
    /// ```
    pub fn from_slice(elems: &[T]) -> Self
    where
        T: Copy + Default,
    {
        assert!(
            elems.len() <= N,
            "attempt to create a {N}-element vector from {} elements",
            elems.len()
        );
        Self::from_fn(|i| elems.get(i).copied().unwrap_or_default())
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let v = Vector::from_fn(|i| i * 3);
    /// assert_eq!(v, vec4(0, 3, 6, 9));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let v = vec3(1, 2, 3).map(|i| i as f32 * 0.5);
    /// assert_eq!(v, vec3(0.5, 1.0, 1.5));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let v = vec2(1, 2).zip(vec2('a', 'b'));
    /// assert_eq!(v, vec2((1, 'a'), (2, 'b')));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| match iter.next() {
            Some(pair) => pair,
            None => unreachable!("both vectors have `N` elements"),
        })
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_slice()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the sum of all elements.
    pub fn sum(self) -> T
    where
        T: Number,
    {
        self.0.into_iter().fold(T::ZERO, |acc, elem| acc + elem)
    }

    /// Returns the product of all elements.
    pub fn product(self) -> T
    where
        T: Number,
    {
        self.0.into_iter().fold(T::ONE, |acc, elem| acc * elem)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// assert_eq!(a.dot(b), b.dot(a));
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.zip(other)
            .0
            .into_iter()
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// Unlike [`Vector::length`], this also works for integer vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// assert_eq!(vec2(4, -3).length_squared(), 25);
    /// ```
    pub fn length_squared(self) -> T
    where
        T: Number,
    {
        self.dot(self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// Only available for floating-point elements:
    ///
    /// ```compile_fail
    /// # use ndv::*;
    /// let len = vec2(3, 4).length();
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(self) -> T
    where
        T: Number + Sqrt,
    {
        self.length_squared().sqrt()
    }

    /// Returns the squared distance between the points `self` and `other`.
    pub fn distance_squared(self, other: Self) -> T
    where
        T: Number,
    {
        (self - other).length_squared()
    }

    /// Returns the distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// assert_eq!(vec3(1.0, 1.0, 1.0).distance(vec3(1.0, 4.0, 5.0)), 5.0);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        (self - other).length()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// A zero-length vector has no direction. Normalizing one divides by zero and yields NaN
    /// elements; use [`Vector::try_normalize`] when the input might be degenerate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Normalizes this vector, or returns [`None`] if its length is zero or not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// assert_eq!(Vec2f::ZERO.try_normalize(), None);
    /// assert_eq!(vec2(0.0, -2.0).try_normalize(), Some(-Vec2f::Y));
    /// ```
    pub fn try_normalize(self) -> Option<Self>
    where
        T: Float,
    {
        let length = self.length();
        if length == T::ZERO || !length.is_finite() {
            return None;
        }
        Some(self / length)
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both vectors must have non-zero length. The cosine is passed to `acos` unclamped, so
    /// rounding errors on (anti)parallel vectors can push it outside of `[-1, 1]` and produce NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// use approx::assert_relative_eq;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_relative_eq!(Vec3f::Y.angle(Vec3f::X), FRAC_PI_2);
    /// assert_relative_eq!(vec2(0.0, 2.0).angle(vec2(-3.0, 0.0)), FRAC_PI_2);
    /// ```
    pub fn angle(self, other: Self) -> T
    where
        T: Number + Trig + Sqrt,
    {
        (self.dot(other) / (self.length() * other.length())).acos()
    }

    /// Reflects the incident direction `self` off a surface with the unit normal `normal`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let bounced = vec2(1.0, -1.0).reflect(Vec2f::Y);
    /// assert_eq!(bounced, vec2(1.0, 1.0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self
    where
        T: Number,
    {
        self - normal * ((T::ONE + T::ONE) * normal.dot(self))
    }

    /// Refracts the unit incident direction `self` through a surface with the unit normal
    /// `normal`, following Snell's law.
    ///
    /// `eta` is the ratio of the refractive indices (incident over transmitted). On total internal
    /// reflection the square root of a negative number is taken and the result contains NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// // Matching media let light pass straight through.
    /// let dir = vec3(0.6, -0.8, 0.0);
    /// assert_abs_diff_eq!(dir.refract(Vec3f::Y, 1.0), dir, epsilon = 1e-6);
    /// ```
    pub fn refract(self, normal: Self, eta: T) -> Self
    where
        T: Number + Sqrt,
    {
        let cos_i = -normal.dot(self);
        let k = T::ONE - eta * eta * (T::ONE - cos_i * cos_i);
        self * eta + normal * (eta * cos_i - k.sqrt())
    }

    /// Refracts `self` when passing from a medium with refractive index `n1` into one with
    /// refractive index `n2`.
    ///
    /// Equivalent to `self.refract(normal, n1 / n2)`.
    pub fn refract_between(self, normal: Self, n1: T, n2: T) -> Self
    where
        T: Number + Sqrt,
    {
        self.refract(normal, n1 / n2)
    }

    /// Orients the normal `self` so that it faces against the `incident` direction.
    ///
    /// Returns `self` if `reference` points against `incident` (their dot product is negative),
    /// and `-self` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let incident = vec3(0.0, -1.0, 0.0);
    /// assert_eq!(Vec3f::Y.face_forward(incident, Vec3f::Y), Vec3f::Y);
    /// assert_eq!(Vec3f::Y.face_forward(incident, -Vec3f::Y), -Vec3f::Y);
    /// ```
    #[doc(alias = "faceforward")]
    pub fn face_forward(self, incident: Self, reference: Self) -> Self
    where
        T: Number + PartialOrd,
    {
        if reference.dot(incident) < T::ZERO {
            self
        } else {
            -self
        }
    }

    /// Linearly interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        self + (other - self) * t
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let v = vec3(-4, 2, 9).clamp(Vector::splat(0), Vector::splat(5));
    /// assert_eq!(v, vec3(0, 2, 5));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        vec3(x, y, value)
    }

    /// Returns `self` rotated counterclockwise by a quarter turn: `(-y, x)`.
    ///
    /// Only 2-dimensional vectors have a unique perpendicular:
    ///
    /// ```compile_fail
    /// # use ndv::*;
    /// let p = vec3(1, 0, 0).perpendicular();
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// assert_eq!(vec2(2, 1).perpendicular(), vec2(-1, 2));
    /// assert_eq!(vec2(2, 1).perpendicular().dot(vec2(2, 1)), 0);
    /// ```
    pub fn perpendicular(self) -> Self
    where
        T: Number,
    {
        let [x, y] = self.0;
        vec2(-y, x)
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is the Z coordinate of the cross product of both vectors extended with Z = 0.
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.perpendicular().dot(other)
    }

    /// Rotates `self` clockwise in the 2D plane (Y up, X right).
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_clockwise(radians) * self
    }

    /// Rotates `self` counterclockwise in the 2D plane (Y up, X right).
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// use approx::assert_relative_eq;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_relative_eq!(Vec2f::X.rotate_counterclockwise(FRAC_PI_2), Vec2f::Y);
    /// ```
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_counterclockwise(radians) * self
    }

    /// Computes the signed clockwise rotation in radians needed to align `self` with `other`.
    ///
    /// Assumes the Y axis points up. Also see [`Vector::angle`] for the unsigned angle.
    pub fn signed_angle_to(self, other: Self) -> T
    where
        T: Number + Trig,
    {
        -self.perp_dot(other).atan2(self.dot(other))
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        vec2(x, y)
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(1.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 1.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        vec4(x, y, z, value)
    }

    /// Computes the (right-handed) cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs. Swapping the arguments inverts it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    ///
    /// Typically used to drop the `w` coordinate of a homogeneous point.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        vec3(x, y, z)
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Prints the elements with their [`Display`][fmt::Display] impl, forwarding any precision.
impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        f.write_str(")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Z.z, 1.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec4(1, 2, 3, 4);
        v.z = 30;
        v[3] = 40;
        assert_eq!((v.x, v.y, v.z, v.w), (1, 2, 30, 40));
        assert_eq!(v, [1, 2, 30, 40]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_out_of_bounds() {
        let v = vec3(1, 2, 3);
        let i = v.as_slice().len();
        let _ = v[i];
    }

    #[test]
    #[should_panic(expected = "3-element vector from 4 elements")]
    fn from_slice_too_long() {
        Vec3i::from_slice(&[1, 2, 3, 4]);
    }

    #[test]
    fn compound_assignment() {
        let mut v = Vec2i::splat(3);
        v += vec2(1, 2);
        assert_eq!(v, vec2(4, 5));

        v -= vec2(4, 4);
        assert_eq!(v, vec2(0, 1));

        v *= 6;
        assert_eq!(v, vec2(0, 6));

        v /= vec2(1, 3);
        assert_eq!(v, vec2(0, 2));

        v += 1;
        assert_eq!(v, vec2(1, 3));
    }

    #[test]
    fn broadcast() {
        let v: Vec3i = vec3(1, 2, 3);
        assert_eq!(v + 1, vec3(2, 3, 4));
        assert_eq!(v - 1, vec3(0, 1, 2));
        assert_eq!(v * 2, vec3(2, 4, 6));
        assert_eq!(vec3(2, 4, 6) / 2, v);
        assert_eq!(2i32 * v, vec3(2, 4, 6));
        assert_eq!(10i32 - v, vec3(9, 8, 7));
        assert_eq!(1.0f64 / vec2(2.0f64, 4.0), vec2(0.5, 0.25));
    }

    #[test]
    fn negation_cancels() {
        let v: Vec4f = vec4(1.5, -2.0, 0.25, 8.0);
        assert_eq!(v + (-v), Vec4f::ZERO);
        assert_eq!(vec2(3, -7) + -vec2(3, -7), Vec2i::ZERO);
    }

    #[test]
    fn exact_equality() {
        // `==` has no tolerance, even when the difference is a single rounding step.
        let sum = vec2(0.1f64, 0.2) + vec2(0.2, 0.1);
        assert_ne!(sum, vec2(0.3, 0.3));
        assert_relative_eq!(sum, vec2(0.3, 0.3));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:.3}", vec2(1.0, 0.5)), "(1.000, 0.500)");
    }

    #[test]
    fn dot_and_length() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).length_squared(), 35);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(vec4(1.0, 1.0, 1.0, 1.0).length(), 2.0);
        assert_eq!(vec2(1, 1).distance_squared(vec2(4, 5)), 25);
    }

    #[test]
    fn normalize() {
        let n = vec3(3.0, 0.0, -4.0).normalize();
        assert_relative_eq!(n, vec3(0.6, 0.0, -0.8));
        assert_relative_eq!(n.length(), 1.0);

        // No guard against zero length.
        assert!(Vec3f::ZERO.normalize().x.is_nan());
        assert_eq!(Vec3f::ZERO.try_normalize(), None);
        assert_eq!(vec3(f32::INFINITY, 0.0, 0.0).try_normalize(), None);
    }

    #[test]
    fn cross() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(-4.0, 0.5, 2.0);
        assert_eq!(a.cross(b), -b.cross(a));
        assert_relative_eq!(a.dot(a.cross(b)), 0.0);
        assert_eq!(Vec3i::Z.cross(Vec3i::X), Vec3i::Y);
    }

    #[test]
    fn angle() {
        assert_relative_eq!(Vec3f::Y.angle(Vec3f::X), FRAC_PI_2);
        assert_relative_eq!(Vec3f::Y.angle(Vec3f::Y), 0.0);
        assert_relative_eq!(Vec3f::Y.angle(-Vec3f::Y), PI);
        assert_relative_eq!(vec2(1.0, 1.0).angle(vec2(1.0, -1.0)), FRAC_PI_2);
    }

    #[test]
    fn reflect() {
        assert_eq!(vec2(1, -1).reflect(vec2(0, 1)), vec2(1, 1));
        assert_eq!(vec3(0.0, 0.0, -2.0).reflect(Vec3f::Z), vec3(0.0, 0.0, 2.0));
    }

    #[test]
    fn refract() {
        // Entering a denser medium bends towards the normal.
        let incident = vec2(1.0f32, -1.0).normalize();
        let refracted = incident.refract_between(Vec2f::Y, 1.0, 1.5);
        assert_abs_diff_eq!(refracted.length(), 1.0, epsilon = 1e-6);
        assert!(refracted.x < incident.x);
        assert!(refracted.y < 0.0);

        // Snell: n1 * sin(i) = n2 * sin(t)
        assert_abs_diff_eq!(incident.x, 1.5 * refracted.x, epsilon = 1e-6);

        // Total internal reflection is not detected.
        let grazing = vec2(0.9f32, -0.1).normalize();
        assert!(grazing.refract(Vec2f::Y, 1.5).x.is_nan());
    }

    #[test]
    fn face_forward() {
        let incident = vec2(1.0, -1.0);
        let n = vec2(0.0, -1.0);
        assert_eq!(n.face_forward(incident, Vec2f::Y), n);
        assert_eq!(n.face_forward(incident, -Vec2f::Y), -n);
    }

    #[test]
    fn perpendicular() {
        assert_eq!(Vec2i::X.perpendicular(), Vec2i::Y);
        assert_eq!(Vec2i::Y.perpendicular(), -Vec2i::X);
        assert_eq!(Vec2f::X.perp_dot(Vec2f::Y), 1.0);
        assert_eq!(Vec2f::Y.perp_dot(Vec2f::X), -1.0);
    }

    #[test]
    fn rotate() {
        assert_relative_eq!(Vec2f::Y.rotate_clockwise(TAU / 4.0), Vec2f::X);
        assert_relative_eq!(Vec2f::Y.rotate_clockwise(TAU / 2.0), -Vec2f::Y);
        assert_relative_eq!(Vec2f::X.rotate_counterclockwise(TAU / 4.0), Vec2f::Y);
    }

    #[test]
    fn signed_angle() {
        assert_relative_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), TAU / 4.0);
        assert_relative_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), -TAU / 4.0);
        assert_relative_eq!(Vec2f::Y.signed_angle_to(Vec2f::Y), 0.0);
    }

    #[test]
    fn resize() {
        let v = vec2(1, 2).extend(3);
        assert_eq!(v, vec3(1, 2, 3));
        assert_eq!(v.extend(4).truncate(), v);
        assert_eq!(v.truncate(), vec2(1, 2));
        assert_eq!(vec4(1, 2, 3, 4).sum(), 10);
        assert_eq!(vec4(1, 2, 3, 4).product(), 24);
    }

    #[test]
    fn lerp() {
        let a = vec2(0.0, 10.0);
        let b = vec2(4.0, 20.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), vec2(2.0, 15.0));
    }
}
