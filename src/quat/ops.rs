use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{traits::Number, Quat, Vec3};

/// Component access in `w`, `x`, `y`, `z` order.
impl<T> Index<usize> for Quat<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vec[index]
    }
}

impl<T> IndexMut<usize> for Quat<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.vec[index]
    }
}

impl<T, U> PartialEq<Quat<U>> for Quat<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Quat<U>) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

/// Compares components. `q` and `-q` are the same rotation, but not approximately equal.
impl<T> AbsDiffEq for Quat<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.vec.abs_diff_eq(&other.vec, epsilon)
    }
}

impl<T> RelativeEq for Quat<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.vec.relative_eq(&other.vec, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Quat<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.vec.ulps_eq(&other.vec, epsilon, max_ulps)
    }
}

impl<T: Neg> Neg for Quat<T> {
    type Output = Quat<T::Output>;

    fn neg(self) -> Self::Output {
        Quat { vec: -self.vec }
    }
}

/// Component-wise addition.
impl<T: Add> Add for Quat<T> {
    type Output = Quat<T::Output>;

    fn add(self, rhs: Self) -> Self::Output {
        Quat {
            vec: self.vec + rhs.vec,
        }
    }
}

/// Component-wise subtraction.
impl<T: Sub> Sub for Quat<T> {
    type Output = Quat<T::Output>;

    fn sub(self, rhs: Self) -> Self::Output {
        Quat {
            vec: self.vec - rhs.vec,
        }
    }
}

impl<T: AddAssign> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.vec += rhs.vec;
    }
}

impl<T: SubAssign> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.vec -= rhs.vec;
    }
}

/// The Hamilton product.
///
/// Not commutative: when both operands are rotations, `self * rhs` applies `rhs` first.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let [w1, x1, y1, z1] = self.vec.into_array();
        let [w2, x2, y2, z2] = rhs.vec.into_array();
        Self::new(
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
        )
    }
}

/// `a *= b` is `a = a * b`, so the rotation `b` is applied before `a`.
impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a vector; see [`Quat::rotate`].
impl<T: Number> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Self::Output {
        self.rotate(rhs)
    }
}

/// Scales all components.
impl<T: Number> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self {
            vec: self.vec * rhs,
        }
    }
}

impl<T: Number> MulAssign<T> for Quat<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Number> Div<T> for Quat<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self {
            vec: self.vec / rhs,
        }
    }
}

impl<T: Number> DivAssign<T> for Quat<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn component_wise() {
        let a = Quat::new(1, 2, 3, 4);
        let b = Quat::new(10, 20, 30, 40);
        assert_eq!(a + b, Quat::new(11, 22, 33, 44));
        assert_eq!(b - a, Quat::new(9, 18, 27, 36));
        assert_eq!(-a, Quat::new(-1, -2, -3, -4));
        assert_eq!(a * 2, Quat::new(2, 4, 6, 8));
        assert_eq!(b / 10, Quat::new(1, 2, 3, 4));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        c *= 2;
        c /= 20;
        assert_eq!(c, a);
    }

    #[test]
    fn product() {
        let a = Quat::new(1, 2, 3, 4);
        let b = Quat::new(5, 6, 7, 8);
        assert_eq!(a * b, Quat::new(-60, 12, 30, 24));
        assert_eq!(b * a, Quat::new(-60, 20, 14, 32));
        assert_eq!(a * Quat::IDENTITY, a);
        assert_eq!(Quat::IDENTITY * a, a);
    }

    #[test]
    fn approx() {
        let q = Quat::new(0.1f32, 0.2, 0.3, 0.4);
        assert_relative_eq!(q * 3.0 / 3.0, q);
        assert_abs_diff_eq!(q, q * 1.01, epsilon = 0.01);
    }
}
