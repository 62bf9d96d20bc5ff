use core::fmt;

use crate::Matrix;

// ── Constructors ────────────────────────────────────────────────────

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use minimat::Matrix;
    /// let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| {
    ///     if i == j { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, Matrix::eye());
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self
    where
        T: Copy + Default,
    {
        let mut data = [[T::default(); C]; R];
        for i in 0..R {
            for j in 0..C {
                data[i][j] = f(i, j);
            }
        }
        Self { data }
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Row-major rendering: values space-separated, one row per line, newline
/// after every row. A vector (C = 1) therefore prints one scalar per line.
/// Human-readable output, not a parseable format.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..R {
            for j in 0..C {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[i][j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
