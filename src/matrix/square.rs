//! Determinants, cofactors and inverses of square matrices.
//!
//! 2x2, 3x3 and 4x4 matrices use closed-form expressions. Every other size expands the
//! determinant along the first remaining row, recursing over lists of row and column indices into
//! the original matrix until a 3x3 closed form is reached. The size check is on the const
//! parameter `N`, so each monomorphized method only contains the path for its own size.

use std::array;

use crate::{traits::Number, Matrix};

impl<T: Number, const N: usize> Matrix<T, N, N> {
    /// Returns the [determinant] of the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 9, 3],
    ///     [2, 0, 4],
    ///     [3, 7, 0],
    /// ]);
    /// assert_eq!(mat.determinant(), 150);
    /// assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);
    /// assert_eq!(Matrix::<f64, 10, 10>::IDENTITY.determinant(), 1.0);
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        match N {
            4 => {
                let ([s0, s1, s2, s3, s4, s5], [c0, c1, c2, c3, c4, c5]) = self.pair_minors();
                s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
            }
            _ => {
                let all: [usize; N] = array::from_fn(|i| i);
                self.laplace(&all, &all)
            }
        }
    }

    /// Returns the determinant of the matrix left after removing `row` and `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn minor(&self, row: usize, col: usize) -> T {
        assert!(
            row < N && col < N,
            "minor ({row}, {col}) out of bounds for a {N}x{N} matrix"
        );
        let rows = Self::indices_without(row);
        let cols = Self::indices_without(col);
        self.laplace(&rows[..N - 1], &cols[..N - 1])
    }

    /// Returns the matrix of cofactors.
    ///
    /// The cofactor at `(row, col)` is the [minor] at `(row, col)`, negated if `row + col` is odd.
    ///
    /// [minor]: Matrix::minor
    pub fn cofactor(&self) -> Self {
        match N {
            4 => {
                let adjoint = self.adjoint4();
                Self::from_fn(|r, c| adjoint[c][r])
            }
            _ => Self::from_fn(|row, col| {
                let minor = self.minor(row, col);
                if (row + col) % 2 == 0 {
                    minor
                } else {
                    -minor
                }
            }),
        }
    }

    /// Returns the adjoint (or *adjugate*) of this matrix: the transpose of its [cofactor] matrix.
    ///
    /// [cofactor]: Matrix::cofactor
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.adjoint(), Matrix::from_rows([
    ///     [4, -2],
    ///     [-3, 1],
    /// ]));
    /// ```
    #[doc(alias = "adjugate")]
    pub fn adjoint(&self) -> Self {
        self.cofactor().transpose()
    }

    /// Inverts this matrix, returning [`None`] if it is singular (if its determinant is zero).
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let mat = Matrix::from_rows([
    ///     [2.0, 0.0],
    ///     [0.0, 4.0],
    /// ]);
    /// assert_eq!(mat.checked_inverse(), Some(Matrix::from_diagonal([0.5, 0.25])));
    /// assert_eq!(Mat2f::ZERO.checked_inverse(), None);
    /// ```
    #[doc(alias = "invert")]
    pub fn checked_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            return None;
        }
        Some(self.adjoint() / det)
    }

    /// Inverts this matrix.
    ///
    /// A singular matrix (one with a determinant of exactly zero) has no inverse. In that case
    /// [`Matrix::ZERO`] is returned. Use [`Matrix::checked_inverse`] to detect this case instead.
    ///
    /// Only exactly zero determinants are detected. Nearly singular matrices yield very large
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let mat = Matrix::from_rows([
    ///     [4.0, 7.0],
    ///     [2.0, 6.0],
    /// ]);
    /// assert_abs_diff_eq!(mat * mat.inverse(), Mat2::IDENTITY, epsilon = 1e-12);
    ///
    /// let singular = Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [2.0, 4.0],
    /// ]);
    /// assert_eq!(singular.inverse(), Mat2d::ZERO);
    /// ```
    pub fn inverse(&self) -> Self {
        match self.checked_inverse() {
            Some(inverse) => inverse,
            None => {
                log::trace!("attempt to invert a singular {N}x{N} matrix; returning zero matrix");
                Self::ZERO
            }
        }
    }

    /// Determinant of the square matrix formed by the elements at `rows` x `cols`.
    ///
    /// Expands along `rows[0]`. `rows` and `cols` have the same length.
    fn laplace(&self, rows: &[usize], cols: &[usize]) -> T {
        let e = |r: usize, c: usize| self.0[rows[r]][cols[c]];
        match cols.len() {
            0 => T::ONE,
            1 => e(0, 0),
            2 => e(0, 0) * e(1, 1) - e(0, 1) * e(1, 0),
            3 => {
                e(0, 0) * (e(1, 1) * e(2, 2) - e(1, 2) * e(2, 1))
                    - e(0, 1) * (e(1, 0) * e(2, 2) - e(1, 2) * e(2, 0))
                    + e(0, 2) * (e(1, 0) * e(2, 1) - e(1, 1) * e(2, 0))
            }
            len => {
                let mut rest = [0; N];
                (0..len).fold(T::ZERO, |acc, skip| {
                    for (i, &col) in cols.iter().enumerate() {
                        if i < skip {
                            rest[i] = col;
                        } else if i > skip {
                            rest[i - 1] = col;
                        }
                    }
                    let term = e(0, skip) * self.laplace(&rows[1..], &rest[..len - 1]);
                    if skip % 2 == 0 {
                        acc + term
                    } else {
                        acc - term
                    }
                })
            }
        }
    }

    /// `0..N` without `skip`, in the leading `N - 1` slots.
    fn indices_without(skip: usize) -> [usize; N] {
        array::from_fn(|i| if i < skip { i } else { i + 1 })
    }

    /// Returns the six 2x2 minors of the upper two rows and the six of the lower two rows, ordered
    /// by column pair `(0,1), (0,2), (0,3), (1,2), (1,3), (2,3)`.
    ///
    /// Only called for 4x4 matrices.
    fn pair_minors(&self) -> ([T; 6], [T; 6]) {
        let minors = |top: usize| {
            let (r0, r1) = (self.0[top], self.0[top + 1]);
            let m = |i: usize, j: usize| r0[i] * r1[j] - r1[i] * r0[j];
            [m(0, 1), m(0, 2), m(0, 3), m(1, 2), m(1, 3), m(2, 3)]
        };
        (minors(0), minors(2))
    }

    /// Rows of the adjoint of a 4x4 matrix, from the shared pair minors.
    fn adjoint4(&self) -> [[T; 4]; 4] {
        let a = |r: usize, c: usize| self.0[r][c];
        let (a00, a01, a02, a03) = (a(0, 0), a(0, 1), a(0, 2), a(0, 3));
        let (a10, a11, a12, a13) = (a(1, 0), a(1, 1), a(1, 2), a(1, 3));
        let (a20, a21, a22, a23) = (a(2, 0), a(2, 1), a(2, 2), a(2, 3));
        let (a30, a31, a32, a33) = (a(3, 0), a(3, 1), a(3, 2), a(3, 3));
        let ([s0, s1, s2, s3, s4, s5], [c0, c1, c2, c3, c4, c5]) = self.pair_minors();

        #[rustfmt::skip]
        let adjoint = [
            [ a11 * c5 - a12 * c4 + a13 * c3, -a01 * c5 + a02 * c4 - a03 * c3,  a31 * s5 - a32 * s4 + a33 * s3, -a21 * s5 + a22 * s4 - a23 * s3],
            [-a10 * c5 + a12 * c2 - a13 * c1,  a00 * c5 - a02 * c2 + a03 * c1, -a30 * s5 + a32 * s2 - a33 * s1,  a20 * s5 - a22 * s2 + a23 * s1],
            [ a10 * c4 - a11 * c2 + a13 * c0, -a00 * c4 + a01 * c2 - a03 * c0,  a30 * s4 - a31 * s2 + a33 * s0, -a20 * s4 + a21 * s2 - a23 * s0],
            [-a10 * c3 + a11 * c1 - a12 * c0,  a00 * c3 - a01 * c1 + a02 * c0, -a30 * s3 + a31 * s1 - a32 * s0,  a20 * s3 - a21 * s1 + a22 * s0],
        ];
        adjoint
    }
}

macro_rules! submatrix {
    ($($n:literal => $m:literal),+) => {
        $(
            impl<T: Copy> Matrix<T, $n, $n> {
                #[doc = concat!("Returns the ", $m, "x", $m, " matrix left after removing `row` and `col`.")]
                ///
                /// The remaining rows and columns keep their relative order. Its determinant is
                /// [`Matrix::minor`].
                ///
                /// # Panics
                ///
                /// Panics if `row` or `col` is out of bounds.
                pub fn submatrix(&self, row: usize, col: usize) -> Matrix<T, $m, $m> {
                    assert!(
                        row < $n && col < $n,
                        "submatrix index ({row}, {col}) out of bounds for a {}x{} matrix",
                        $n,
                        $n,
                    );
                    Matrix::from_fn(|r, c| {
                        let r = if r < row { r } else { r + 1 };
                        let c = if c < col { c } else { c + 1 };
                        self.0[r][c]
                    })
                }
            }
        )+
    };
}

submatrix!(3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7, 9 => 8, 10 => 9);
