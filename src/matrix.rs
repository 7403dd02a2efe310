use std::{array, fmt, mem::ManuallyDrop};

use crate::{Number, One, Vector, Zero};

mod ops;
mod square;
mod transform;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// The matrix is stored as `R` row [`Vector`]s. Vectors are treated as *column* vectors, so a
/// point is transformed with `matrix * point`, and matrices compose right-to-left.
///
/// Both dimensions must be at least 2. Matrices with a single row or column are plain vectors, and
/// using one fails to compile:
///
/// ```compile_fail
/// # use ndv::*;
/// let row = Matrix::from_rows([[1, 2, 3]]);
/// ```
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] take an array of rows or columns. Rows are
///   the natural reading order of a matrix literal.
/// - [`Matrix::from_flat`] fills the matrix row by row from a slice, [`Matrix::from_nested`] takes
///   a slice of row slices. Both leave elements they don't cover at zero.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - For square matrices, [`Matrix::from_diagonal`] and [`Matrix::diag`] create a matrix that is
///   zero outside of its diagonal.
/// - Transformation matrices can be created with [`Matrix::scaling`], [`Matrix::rotation`],
///   [`Matrix::translation`], [`Matrix::look_at`], [`Matrix::perspective`] and friends.
///
/// [`Matrix::ZERO`] has every element set to 0, [`Matrix::IDENTITY`] is the multiplicative
/// identity, which is also what [`Matrix::default`] returns.
///
/// # Element Access
///
/// Indexing with a single `usize` returns a row, so `mat[row][col]` accesses an element.
/// [`Matrix`] also implements [`Index`] and [`IndexMut`] for tuples of `(row, col)`. Indices are
/// 0-based.
///
/// ```
/// # use ndv::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[(0, 0)] = 4;
/// mat[1][0] = 5;
/// assert_eq!(mat[0], vec2(4, 1));
/// assert_eq!(mat[(1, 0)], 5);
/// assert_eq!(mat[1][1], 3);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([Vector<T, C>; R]);

#[cfg(feature = "bytemuck")]
#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Evaluating this fails the build for single-row and single-column matrices.
    const SHAPE: () = assert!(
        R > 1 && C > 1,
        "matrices need at least 2 rows and 2 columns; use `Vector` instead"
    );

    /// The smallest dimension of the matrix (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Every constructor funnels through here, so that the shape check is always instantiated.
    #[allow(clippy::let_unit_value)]
    const fn new(rows: [Vector<T, C>; R]) -> Self {
        let () = Self::SHAPE;
        Self(rows)
    }

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self::new(rows.map(Into::into))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let mat = Matrix::from_columns([
    ///     vec3(1, 2, 3),
    ///     vec3(4, 5, 6),
    /// ]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 4],
    ///     [2, 5],
    ///     [3, 6],
    /// ]));
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        // Each row takes the next element of every column.
        let mut columns = columns.map(|col| col.into().into_array().into_iter());
        Self::from_fn(|_, col| match columns[col].next() {
            Some(elem) => elem,
            None => unreachable!("each column has `R` elements"),
        })
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`]. Elements are produced in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::new(array::from_fn(|row| Vector::from_fn(|col| cb(row, col))))
    }

    /// Creates a [`Matrix`] from a flat slice of elements, filling it row by row.
    ///
    /// Elements not covered by `elems` are set to zero.
    ///
    /// # Panics
    ///
    /// Panics if `elems` has more than `R * C` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let mat = Mat2x3::from_flat(&[1, 2, 3, 4]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 0, 0],
    /// ]));
    /// ```
    pub fn from_flat(elems: &[T]) -> Self
    where
        T: Zero + Copy,
    {
        assert!(
            elems.len() <= R * C,
            "attempt to create a {R}x{C} matrix from {} elements",
            elems.len()
        );
        Self::from_fn(|row, col| elems.get(row * C + col).copied().unwrap_or(T::ZERO))
    }

    /// Creates a [`Matrix`] from a slice of rows.
    ///
    /// Rows may be shorter than `C`, and there may be fewer than `R` of them. Elements not covered
    /// are set to zero.
    ///
    /// # Panics
    ///
    /// Panics if there are more than `R` rows, or if any row has more than `C` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let mat = Mat3::from_nested(&[&[1, 2], &[3]]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2, 0],
    ///     [3, 0, 0],
    ///     [0, 0, 0],
    /// ]));
    /// ```
    pub fn from_nested(rows: &[&[T]]) -> Self
    where
        T: Zero + Copy,
    {
        assert!(
            rows.len() <= R,
            "attempt to create a matrix with {R} rows from {} rows",
            rows.len()
        );
        if let Some(row) = rows.iter().find(|row| row.len() > C) {
            panic!(
                "attempt to create a matrix with {C} columns from a row of {} elements",
                row.len()
            );
        }

        Self::from_fn(|row, col| {
            rows.get(row)
                .and_then(|r| r.get(col))
                .copied()
                .unwrap_or(T::ZERO)
        })
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix::new(self.0.map(|row| row.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R> {
        Matrix::from_columns(self.0)
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|r| r.as_slice().get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|r| r.as_mut_slice().get_mut(col))
    }

    /// Returns a copy of the row at index `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        self.0[row]
    }

    /// Returns a copy of the column at index `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.column(1), vec2(1, 4));
    /// assert_eq!(mat.row(1), vec3(3, 4, 5));
    /// ```
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        assert!(col < C, "column index {col} out of bounds for {C} columns");
        Vector::from_fn(|row| self.0[row][col])
    }

    /// Returns a reference to the rows of this matrix.
    #[inline]
    pub const fn as_rows(&self) -> &[Vector<T, C>; R] {
        &self.0
    }

    /// Converts this matrix into its array of rows.
    #[inline]
    pub fn into_rows(self) -> [Vector<T, C>; R] {
        self.0
    }

    /// Returns `self`, but with the element at `(row, col)` replaced with `elem`, without dropping
    /// the old element at that position.
    ///
    /// Needed to construct constants without requiring `T: Copy`.
    const fn with_leaky_elem(self, row: usize, col: usize, elem: T) -> Self {
        union Leak<T, const R: usize, const C: usize> {
            plain: ManuallyDrop<Matrix<T, R, C>>,
            wrapped: ManuallyDrop<Matrix<ManuallyDrop<T>, R, C>>,
        }

        // Safety: `ManuallyDrop<T>` has the same layout as `T`, and overwriting a `ManuallyDrop`
        // just leaks the previous value.
        unsafe {
            let mut wrapped = ManuallyDrop::into_inner(
                Leak {
                    plain: ManuallyDrop::new(self),
                }
                .wrapped,
            );
            wrapped.0[row].0[col] = ManuallyDrop::new(elem);

            ManuallyDrop::into_inner(
                Leak {
                    wrapped: ManuallyDrop::new(wrapped),
                }
                .plain,
            )
        }
    }
}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self::new([Vector::<T, C>::ZERO; R]);
}

impl<T: Zero + One, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let v = vec3(4, -2, 7);
    /// assert_eq!(Mat3::IDENTITY * v, v);
    /// assert_eq!(Mat4f::default(), Mat4f::IDENTITY);
    /// ```
    pub const IDENTITY: Self = {
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            this = this.with_leaky_elem(i, i, T::ONE);
            i += 1;
        }
        this
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Creates a square matrix with every diagonal element set to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let m = Mat4::diag(2);
    /// assert_eq!(m[0][0], 2);
    /// assert_eq!(m[3][3], 2);
    /// assert_eq!(m[0][1], 0);
    /// assert_eq!(Mat3::diag(1.0), Mat3d::IDENTITY);
    /// ```
    pub fn diag(elem: T) -> Self
    where
        T: Zero + Copy,
    {
        Self::from_diagonal(Vector::splat(elem))
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use ndv::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3f::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Zero + One,
{
    /// Returns [`Matrix::IDENTITY`].
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rows stay on one line, even with `{:#?}`.
        struct Row<'a, T, const C: usize>(&'a Vector<T, C>);

        impl<T: fmt::Debug, const C: usize> fmt::Debug for Row<'_, T, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("[")?;
                for (i, elem) in self.0.as_slice().iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                f.write_str("]")
            }
        }

        f.debug_list().entries(self.0.iter().map(Row)).finish()
    }
}

/// Prints one row per line, using the [`Display`][fmt::Display] impl of [`Vector`].
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            fmt::Display::fmt(row, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Vec3};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Matrix::from_rows([[0, 1], [2, 3]]),
            Matrix::from_columns([[0, 2], [1, 3]]),
        );
        assert_eq!(
            Mat3x2::from_rows([[0, 1], [2, 3], [4, 5]]).transpose(),
            Mat2x3::from_rows([[0, 2, 4], [1, 3, 5]]),
        );
        assert_eq!(Mat2::from([[1, 2], [3, 4]]), Matrix::from_rows([[1, 2], [3, 4]]));
    }

    #[test]
    fn transpose_twice() {
        let m = Mat3x4::from_fn(|r, c| (r * 4 + c) as i32);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose()[(3, 1)], m[(1, 3)]);
    }

    #[test]
    fn identity() {
        assert_eq!(
            Mat3::<i32>::IDENTITY,
            Matrix::from_rows([[1, 0, 0], [0, 1, 0], [0, 0, 1]])
        );
        assert_eq!(
            Mat2x3::<i32>::IDENTITY,
            Matrix::from_rows([[1, 0, 0], [0, 1, 0]])
        );
        assert_eq!(Mat4f::default(), Mat4f::IDENTITY);
        assert_eq!(Mat2::<i32>::ZERO, Matrix::from_rows([[0, 0], [0, 0]]));
    }

    #[test]
    fn diag() {
        let m = Mat4::diag(2);
        assert_eq!(m[0][0], 2);
        assert_eq!(m[1][1], 2);
        assert_eq!(m.into_diagonal(), Vector::splat(2));
        for row in 0..4 {
            for col in 0..4 {
                if row != col {
                    assert_eq!(m[row][col], 0);
                }
            }
        }
    }

    #[test]
    fn partial_construction() {
        assert_eq!(Mat2::<i32>::from_flat(&[]), Mat2::<i32>::ZERO);
        assert_eq!(
            Mat3::from_flat(&[1, 2, 3, 4, 5, 6, 7, 8, 9]),
            Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]])
        );
        assert_eq!(
            Mat2x3::from_nested(&[&[], &[7, 8, 9]]),
            Matrix::from_rows([[0, 0, 0], [7, 8, 9]])
        );
    }

    #[test]
    #[should_panic(expected = "2x2 matrix from 5 elements")]
    fn from_flat_too_long() {
        Mat2::from_flat(&[1, 2, 3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "row of 3 elements")]
    fn from_nested_row_too_long() {
        Mat2::from_nested(&[&[1, 2], &[1, 2, 3]]);
    }

    #[test]
    fn rows_and_columns() {
        let mut m = Mat3x2::from_rows([[1, 2], [3, 4], [5, 6]]);
        assert_eq!(m.row(2), vec2(5, 6));
        assert_eq!(m.column(1), vec3(2, 4, 6));
        assert_eq!(m.as_rows()[1], vec2(3, 4));

        m[1] = vec2(30, 40);
        m[2][0] = 50;
        assert_eq!(
            m.into_rows(),
            [vec2(1, 2), vec2(30, 40), vec2(50, 6)]
        );
    }

    #[test]
    #[should_panic]
    fn row_out_of_bounds() {
        let m = Mat2::<i32>::IDENTITY;
        let row = m.as_rows().len();
        let _row = m[row];
    }

    #[test]
    fn get() {
        let mut m = Mat2x3::from_rows([[0, 1, 2], [3, 4, 5]]);
        assert_eq!(m.get(1, 2), Some(&5));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
        if let Some(elem) = m.get_mut(0, 0) {
            *elem = -1;
        }
        assert_eq!(m[(0, 0)], -1);
    }

    #[test]
    fn fmt() {
        let m = Mat2::from_rows([[0, 1], [2, 3]]);
        assert_eq!(format!("{:?}", m), "[[0, 1], [2, 3]]");
        assert_eq!(format!("{:#?}", m), "[\n    [0, 1],\n    [2, 3],\n]");
        assert_eq!(format!("{}", m), "(0, 1)\n(2, 3)");

        let v: Vec3<f32> = vec3(0.5, 1.0, 2.0);
        let m = Matrix::from_rows([v, v]);
        assert_eq!(format!("{:.1}", m), "(0.5, 1.0, 2.0)\n(0.5, 1.0, 2.0)");
    }
}
