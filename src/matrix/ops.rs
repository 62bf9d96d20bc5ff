use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;
use crate::Matrix;

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        for i in 0..R {
            for j in 0..C {
                out[(i, j)] = self[(i, j)] + rhs[(i, j)];
            }
        }
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..R {
            for j in 0..C {
                self[(i, j)] = self[(i, j)] + rhs[(i, j)];
            }
        }
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        for i in 0..R {
            for j in 0..C {
                out[(i, j)] = self[(i, j)] - rhs[(i, j)];
            }
        }
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..R {
            for j in 0..C {
                self[(i, j)] = self[(i, j)] - rhs[(i, j)];
            }
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        let mut out = Self::zeros();
        for i in 0..R {
            for j in 0..C {
                out[(i, j)] = T::zero() - self[(i, j)];
            }
        }
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> Neg for &Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;

    fn neg(self) -> Matrix<T, R, C> {
        (*self).neg()
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign<&Matrix<T, R, C>> for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: &Matrix<T, R, C>) {
        self.add_assign(*rhs);
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign<&Matrix<T, R, C>> for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: &Matrix<T, R, C>) {
        self.sub_assign(*rhs);
    }
}

// ── Matrix multiplication: (R×C) * (C×P) → (R×P) ────────────────────

impl<T: Scalar, const R: usize, const C: usize, const P: usize> Mul<Matrix<T, C, P>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, P>;

    fn mul(self, rhs: Matrix<T, C, P>) -> Matrix<T, R, P> {
        let mut out = Matrix::<T, R, P>::zeros();
        for i in 0..R {
            for j in 0..P {
                let mut sum = T::zero();
                for k in 0..C {
                    sum = sum + self[(i, k)] * rhs[(k, j)];
                }
                out[(i, j)] = sum;
            }
        }
        out
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let mut out = self;
        for i in 0..R {
            for j in 0..C {
                out[(i, j)] = self[(i, j)] * rhs;
            }
        }
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: T) {
        for i in 0..R {
            for j in 0..C {
                self[(i, j)] = self[(i, j)] * rhs;
            }
        }
    }
}

// ── Reference variants for same-shape binary ops ────────────────────
// Matrix is Copy, so &Matrix ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T: Scalar, const R: usize, const C: usize> $Op<Matrix<T, R, C>>
            for &Matrix<T, R, C>
        {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: Matrix<T, R, C>) -> Matrix<T, R, C> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<&Matrix<T, R, C>>
            for Matrix<T, R, C>
        {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: &Matrix<T, R, C>) -> Matrix<T, R, C> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<&Matrix<T, R, C>>
            for &Matrix<T, R, C>
        {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: &Matrix<T, R, C>) -> Matrix<T, R, C> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);

// ── Reference variants for matrix multiplication ────────────────────

impl<T: Scalar, const R: usize, const C: usize, const P: usize> Mul<Matrix<T, C, P>>
    for &Matrix<T, R, C>
{
    type Output = Matrix<T, R, P>;
    fn mul(self, rhs: Matrix<T, C, P>) -> Matrix<T, R, P> {
        (*self).mul(rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize, const P: usize> Mul<&Matrix<T, C, P>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, P>;
    fn mul(self, rhs: &Matrix<T, C, P>) -> Matrix<T, R, P> {
        self.mul(*rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize, const P: usize> Mul<&Matrix<T, C, P>>
    for &Matrix<T, R, C>
{
    type Output = Matrix<T, R, P>;
    fn mul(self, rhs: &Matrix<T, C, P>) -> Matrix<T, R, P> {
        (*self).mul(*rhs)
    }
}

// ── Reference variant for scalar multiplication ─────────────────────

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for &Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;
    fn mul(self, rhs: T) -> Matrix<T, R, C> {
        (*self).mul(rhs)
    }
}

// ── scalar * matrix (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    rhs * self
                }
            }

            impl<const R: usize, const C: usize> Mul<&Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: &Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    *rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Transpose ───────────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Transpose: (R×C) → (C×R). Pure; returns a new matrix.
    pub fn transpose(&self) -> Matrix<T, C, R> {
        let mut out = Matrix::<T, C, R>::zeros();
        for i in 0..R {
            for j in 0..C {
                out[(j, i)] = self[(i, j)];
            }
        }
        out
    }
}
