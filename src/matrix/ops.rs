use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{traits::Number, Matrix, Vector};

/// Row access.
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = Vector<T, C>;

    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.0[row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.0[row]
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0 == other.0
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

impl<T: Neg, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T: Add, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Matrix<T::Output, R, C>;

    fn add(self, rhs: Self) -> Self::Output {
        let mut rhs = rhs.0.into_iter();
        Matrix::new(self.0.map(|row| match rhs.next() {
            Some(other) => row + other,
            None => unreachable!(),
        }))
    }
}

/// Element-wise subtraction.
impl<T: Sub, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Matrix<T::Output, R, C>;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut rhs = rhs.0.into_iter();
        Matrix::new(self.0.map(|row| match rhs.next() {
            Some(other) => row - other,
            None => unreachable!(),
        }))
    }
}

impl<T: AddAssign, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs += rhs;
        }
    }
}

impl<T: SubAssign, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs -= rhs;
        }
    }
}

/// Matrix * Column Vector.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| self.0[row].dot(rhs))
    }
}

/// Matrix * Matrix.
///
/// The inner dimensions have to match, which is checked at compile time:
///
/// ```compile_fail
/// # use ndv::*;
/// let product = Mat2x3::<i32>::IDENTITY * Mat2x3::<i32>::IDENTITY;
/// ```
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Number,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Only square matrices can be multiplied in place, since the shape must not change.
impl<T: Number, const N: usize> MulAssign for Matrix<T, N, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// Matrix / Scalar.
impl<T, const R: usize, const C: usize> Div<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

impl<T, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! scalar_lhs {
    ($($ty:ty),+) => {
        $(
            /// Scalar * Matrix.
            impl<const R: usize, const C: usize> Mul<Matrix<$ty, R, C>> for $ty {
                type Output = Matrix<$ty, R, C>;

                fn mul(self, rhs: Matrix<$ty, R, C>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

scalar_lhs!(f32, f64, i8, i16, i32, i64, i128);

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq, assert_ulps_eq};

    use crate::{vec2, vec3, Mat2, Mat2x3, Mat3, Mat3x2, Mat4, Mat4f};

    use super::*;

    #[test]
    fn mul_vector() {
        let m = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m * vec3(1, 0, -1), vec2(-2, -2));
        assert_eq!(Mat3::IDENTITY * vec3(7, 8, 9), vec3(7, 8, 9));
    }

    #[test]
    fn mul_matrix() {
        let a = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        let b = Mat3x2::from_rows([[7, 8], [9, 10], [11, 12]]);
        assert_eq!(a * b, Mat2::from_rows([[58, 64], [139, 154]]));
        assert_eq!(
            b * a,
            Mat3::from_rows([[39, 54, 69], [49, 68, 87], [59, 82, 105]])
        );
    }

    #[test]
    fn mul_assign() {
        let a = Mat2::from_rows([[1, 2], [3, 4]]);
        let b = Mat2::from_rows([[0, 1], [1, 0]]);
        let mut m = a;
        m *= b;
        assert_eq!(m, a * b);
        assert_eq!(m, Mat2::from_rows([[2, 1], [4, 3]]));

        m *= 2;
        assert_eq!(m, Mat2::from_rows([[4, 2], [8, 6]]));
        m /= 2;
        assert_eq!(m, a * b);
    }

    #[test]
    fn elementwise() {
        let a = Mat2::from_rows([[1, 2], [3, 4]]);
        let b = Mat2::from_rows([[10, 20], [30, 40]]);
        assert_eq!(a + b, Mat2::from_rows([[11, 22], [33, 44]]));
        assert_eq!(b - a, Mat2::from_rows([[9, 18], [27, 36]]));
        assert_eq!(-a, Mat2::from_rows([[-1, -2], [-3, -4]]));
        assert_eq!(a + -a, Mat2::ZERO);

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        assert_eq!(3i32 * a, a * 3);
    }

    #[test]
    fn identity_is_neutral() {
        let m = Mat4::from_fn(|r, c| (r * 4 + c) as f32 * 0.5);
        assert_eq!(m * Mat4f::IDENTITY, m);
        assert_eq!(Mat4f::IDENTITY * m, m);
    }

    #[test]
    fn approx() {
        let m = Mat2::from_rows([[0.1f32, 0.2], [0.3, 0.4]]);
        assert_relative_eq!(m * 3.0 / 3.0, m);
        assert_abs_diff_eq!(m, m * 1.01, epsilon = 0.01);
        assert_ulps_eq!(m, Mat2::from_fn(|r, c| m[(r, c)] + 1e-8));

        // One element out of tolerance is enough.
        let mut n = m;
        n[(1, 0)] += 0.1;
        assert!(m.abs_diff_ne(&n, 0.01));
        assert!(m.relative_ne(&n, 1e-6, 0.1));
        assert!(!m.ulps_eq(&n, 0.0, 4));
    }
}
