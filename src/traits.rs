use std::ops;

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;

    /// Computes the sine and cosine of `self` at once.
    fn sin_cos(self) -> (Self, Self)
    where
        Self: Copy,
    {
        (self.sin(), self.cos())
    }
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}
macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point numbers.
///
/// Operations that only make sense for real numbers (lengths, rotations, interpolation) are bounded
/// on this trait, so attempting to use them with integer element types fails to compile.
pub trait Float: Number + Sqrt + Trig + MinMax + PartialOrd {
    /// Returns the absolute value of `self`.
    fn abs(self) -> Self;

    /// Converts an [`f32`] literal to `Self`.
    fn from_f32(v: f32) -> Self;

    /// Returns `true` if `self` is neither infinite nor NaN.
    fn is_finite(self) -> bool;
}

macro_rules! zero_one {
    ($zero:literal, $one:literal: $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1: u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
zero_one!(0.0, 1.0: f32, f64);

macro_rules! float_impls {
    ($($ty:ident),+) => {
        $(
            impl MinMax for $ty {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Trig for $ty {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }
            }

            impl Sqrt for $ty {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Float for $ty {
                fn abs(self) -> Self {
                    self.abs()
                }

                fn from_f32(v: f32) -> Self {
                    v.into()
                }

                fn is_finite(self) -> bool {
                    self.is_finite()
                }
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max() {
        assert_eq!(MinMax::min(3i32, -1), -1);
        assert_eq!(MinMax::max(3u8, 7), 7);
        assert_eq!(MinMax::clamp(12i32, 0, 10), 10);
        assert_eq!(MinMax::clamp(-0.5f32, 0.0, 1.0), 0.0);
        assert_eq!(MinMax::min(f32::NAN, 1.0), 1.0);
    }

    #[test]
    fn constants() {
        assert_eq!(i64::ZERO, 0);
        assert_eq!(u16::ONE, 1);
        assert_eq!(f64::ONE, 1.0);
        assert_eq!(<f32 as Float>::from_f32(0.25), 0.25);
        assert_eq!(<f64 as Float>::from_f32(0.5), 0.5);
    }

    #[test]
    fn sin_cos() {
        let (s, c) = Trig::sin_cos(0.0f32);
        assert_eq!(s, 0.0);
        assert_eq!(c, 1.0);
    }
}
