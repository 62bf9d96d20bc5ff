use num_traits::{Float, ToPrimitive};

use crate::matrix::vector::Vector;
use crate::traits::Scalar;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Squared L2 norm (dot product with self). No sqrt, works with integers.
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: Scalar + ToPrimitive, const N: usize> Vector<T, N> {
    /// L2 (Euclidean) norm.
    ///
    /// The squared sum accumulates in `T` and is widened to `f64` only for
    /// the square root. For large integral `T` the sum can overflow before
    /// the cast; returns `NaN` if the sum is not representable as `f64`.
    ///
    /// ```
    /// use minimat::Vector;
    /// let u = Vector::from_array([1, 2, 3]);
    /// assert!((u.norm() - 14.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn norm(&self) -> f64 {
        match self.norm_squared().to_f64() {
            Some(s) => Float::sqrt(s),
            None => f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norm_squared() {
        let v = Vector::from_array([3.0, 4.0]);
        assert_eq!(v.norm_squared(), 25.0);
    }

    #[test]
    fn norm_squared_integer() {
        let v = Vector::from_array([3, 4]);
        assert_eq!(v.norm_squared(), 25);
    }

    #[test]
    fn norm() {
        let v = Vector::from_array([3.0_f64, 4.0]);
        assert!((v.norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn norm_integer_vector() {
        let u = Vector::from_array([1, 2, 3]);
        assert!((u.norm() - 14.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn norm_zero_vector() {
        let z = Vector::<f64, 4>::zeros();
        assert_eq!(z.norm(), 0.0);
    }

    #[test]
    fn norm_non_negative() {
        let v = Vector::from_array([-3.0, 4.0, -12.0]);
        assert!(v.norm() >= 0.0);
        assert!((v.norm() - 13.0).abs() < 1e-12);
    }

    #[test]
    fn norm_accumulates_in_element_type() {
        // The sum 2^60 + 1 is exact in u64 but rounds to 2^60 when widened
        // to f64, so the norm comes out as exactly 2^30.
        let v = Vector::from_array([1_u64 << 30, 1]);
        assert_eq!(v.norm_squared(), (1_u64 << 60) + 1);
        assert_eq!(v.norm(), (1_u64 << 30) as f64);
    }
}
