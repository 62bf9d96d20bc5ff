pub mod aliases;
mod norm;
mod ops;
mod util;
pub mod vector;

use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

/// Fixed-size matrix with `R` rows and `C` columns.
///
/// Storage is row-major: `data[row][col]`. Stack-allocated, no-std
/// compatible. Dimensions are type parameters, so shape mismatches in
/// arithmetic fail to compile; the only runtime contract is bounds-checked
/// indexing, which panics on violation.
///
/// # Examples
///
/// ```
/// use minimat::Matrix;
///
/// let a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.shape(), (2, 2));
///
/// let z: Matrix<f64, 2, 3> = Matrix::zeros();
/// assert_eq!(z[(1, 2)], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize> {
    pub(crate) data: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix from a row-major 2D array (R arrays of C elements).
    #[inline]
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        Self { data: rows }
    }

    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        R
    }

    /// Number of columns.
    #[inline]
    pub const fn ncols(&self) -> usize {
        C
    }

    /// The `(rows, cols)` pair.
    #[inline]
    pub const fn shape(&self) -> (usize, usize) {
        (R, C)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix filled with zeros.
    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); C]; R],
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    /// Zero-filled matrix.
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Create an identity matrix (square matrices only).
    pub fn eye() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }
}

// Index by (row, col) tuple. Out-of-range access is a contract violation
// and panics; it is never reported as a recoverable error.
impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < R && col < C,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            R,
            C
        );
        &self.data[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < R && col < C,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            R,
            C
        );
        &mut self.data[row][col]
    }
}

pub use aliases::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_and_eye() {
        let z: Matrix<f64, 3, 3> = Matrix::zeros();
        assert_eq!(z[(0, 0)], 0.0);
        assert_eq!(z[(2, 2)], 0.0);

        let id: Matrix<f64, 3, 3> = Matrix::eye();
        assert_eq!(id[(0, 0)], 1.0);
        assert_eq!(id[(1, 1)], 1.0);
        assert_eq!(id[(0, 1)], 0.0);
    }

    #[test]
    fn default_is_zero_filled() {
        let m: Matrix<i32, 2, 3> = Matrix::default();
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], 0);
            }
        }
    }

    #[test]
    fn from_rows_and_index() {
        let m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(m[(1, 1)], 4.0);
    }

    #[test]
    fn index_mut() {
        let mut m: Matrix<f64, 2, 2> = Matrix::zeros();
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
    }

    #[test]
    fn shape_non_square() {
        let m: Matrix<f64, 2, 3> = Matrix::zeros();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m.shape(), (2, 3));
    }

    #[test]
    fn copies_are_independent() {
        let mut a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = a;
        a[(0, 0)] = 99;
        assert_eq!(b[(0, 0)], 1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn row_out_of_range_panics() {
        let m: Matrix<i32, 2, 3> = Matrix::zeros();
        let _ = m[(2, 0)];
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn col_out_of_range_panics() {
        let mut m: Matrix<i32, 2, 3> = Matrix::zeros();
        m[(0, 3)] = 1;
    }
}
