use core::ops::{Index, IndexMut};

use crate::traits::Scalar;
use crate::Matrix;

/// A column vector (N×1 matrix).
///
/// Vectors are addressed with a single index (`v[i]`) and add dot products,
/// norms, and cross products (3-element vectors) on top of the matrix
/// arithmetic they inherit. Convert to a 1×N row with `.transpose()`.
///
/// # Examples
///
/// ```
/// use minimat::Vector;
///
/// let v = Vector::from_array([3.0_f64, 4.0]);
/// assert_eq!(v[0], 3.0);
/// assert_eq!(v.dot(&v), 25.0);
/// assert!((v.norm() - 5.0).abs() < 1e-12);
/// ```
pub type Vector<T, const N: usize> = Matrix<T, N, 1>;

impl<T, const N: usize> Vector<T, N> {
    /// Create a vector from a 1D array.
    ///
    /// ```
    /// use minimat::Vector;
    /// let v = Vector::from_array([1.0, 2.0, 3.0]);
    /// assert_eq!(v[0], 1.0);
    /// ```
    #[inline]
    pub fn from_array(data: [T; N]) -> Self {
        Self::from_rows(data.map(|x| [x]))
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// True only for the degenerate zero-length vector.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Create a vector filled with a single value.
    #[inline]
    pub fn fill(value: T) -> Self {
        Self::from_array([value; N])
    }

    /// Dot product of two vectors. The sum accumulates in `T`.
    ///
    /// ```
    /// use minimat::Vector;
    /// let a = Vector::from_array([1.0, 2.0, 3.0]);
    /// let b = Vector::from_array([4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0); // 1*4 + 2*5 + 3*6
    /// ```
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self[i] * rhs[i];
        }
        sum
    }
}

// Single-index access: v[i] instead of v[(i, 0)]
impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        assert!(i < N, "index {} out of bounds for length-{} vector", i, N);
        &self.data[i][0]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        assert!(i < N, "index {} out of bounds for length-{} vector", i, N);
        &mut self.data[i][0]
    }
}

// ── Vector size aliases ─────────────────────────────────────────────

/// A 1-element column vector.
pub type Vector1<T> = Vector<T, 1>;
/// A 2-element column vector.
pub type Vector2<T> = Vector<T, 2>;
/// A 3-element column vector.
///
/// Adds `cross()` for cross products in addition to all `Vector` methods.
pub type Vector3<T> = Vector<T, 3>;
/// A 4-element column vector.
pub type Vector4<T> = Vector<T, 4>;

impl<T: Scalar> Vector3<T> {
    /// Cross product of two 3-vectors.
    ///
    /// ```
    /// use minimat::Vector3;
    /// let x = Vector3::from_array([1.0, 0.0, 0.0]);
    /// let y = Vector3::from_array([0.0, 1.0, 0.0]);
    /// let z = x.cross(&y);
    /// assert_eq!(z[2], 1.0); // x × y = z
    /// ```
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::from_array([
            self[1] * rhs[2] - self[2] * rhs[1],
            self[2] * rhs[0] - self[0] * rhs[2],
            self[0] * rhs[1] - self[1] * rhs[0],
        ])
    }
}
