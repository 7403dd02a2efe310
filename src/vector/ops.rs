//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

/// Vectors are approximately equal if all of their elements are.
impl<T, const N: usize> AbsDiffEq for Vector<T, N>
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

impl<T, const N: usize> RelativeEq for Vector<T, N>
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

impl<T, const N: usize> UlpsEq for Vector<T, N>
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

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

// Every arithmetic operator exists in two flavors: element-wise between two vectors, and with a
// scalar that is broadcast to all elements.
macro_rules! arith {
    ($($op:ident::$method:ident, $op_assign:ident::$method_assign:ident: $sym:tt;)+) => {
        $(
            impl<T, const N: usize> $op<Vector<T, N>> for Vector<T, N>
            where
                T: $op,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| l $sym r)
                }
            }

            impl<T, const N: usize> $op<T> for Vector<T, N>
            where
                T: $op + Copy,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem $sym rhs)
                }
            }

            impl<T, const N: usize> $op_assign<Vector<T, N>> for Vector<T, N>
            where
                T: $op_assign,
            {
                fn $method_assign(&mut self, rhs: Vector<T, N>) {
                    for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
                        lhs.$method_assign(rhs);
                    }
                }
            }

            impl<T, const N: usize> $op_assign<T> for Vector<T, N>
            where
                T: $op_assign + Copy,
            {
                fn $method_assign(&mut self, rhs: T) {
                    for lhs in &mut self.0 {
                        lhs.$method_assign(rhs);
                    }
                }
            }
        )+
    };
}

arith! {
    Add::add, AddAssign::add_assign: +;
    Sub::sub, SubAssign::sub_assign: -;
    Mul::mul, MulAssign::mul_assign: *;
    Div::div, DivAssign::div_assign: /;
}

// `scalar <op> vector` can't be written generically, since the scalar is the `Self` type of the
// impl. Cover the primitive number types instead.
macro_rules! scalar_lhs {
    ($($ty:ty),+) => {
        $(
            impl<const N: usize> Add<Vector<$ty, N>> for $ty {
                type Output = Vector<$ty, N>;

                fn add(self, rhs: Vector<$ty, N>) -> Self::Output {
                    rhs.map(|elem| self + elem)
                }
            }

            impl<const N: usize> Sub<Vector<$ty, N>> for $ty {
                type Output = Vector<$ty, N>;

                fn sub(self, rhs: Vector<$ty, N>) -> Self::Output {
                    rhs.map(|elem| self - elem)
                }
            }

            impl<const N: usize> Mul<Vector<$ty, N>> for $ty {
                type Output = Vector<$ty, N>;

                fn mul(self, rhs: Vector<$ty, N>) -> Self::Output {
                    rhs.map(|elem| self * elem)
                }
            }

            impl<const N: usize> Div<Vector<$ty, N>> for $ty {
                type Output = Vector<$ty, N>;

                fn div(self, rhs: Vector<$ty, N>) -> Self::Output {
                    rhs.map(|elem| self / elem)
                }
            }
        )+
    };
}

scalar_lhs!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
