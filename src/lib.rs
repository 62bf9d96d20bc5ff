//! # minimat
//!
//! Small stack-allocated matrices and column vectors with const-generic
//! dimensions. No heap allocation, no-std compatible.
//!
//! Shapes live in the type: adding a 2×3 to a 3×2, or multiplying matrices
//! with incompatible inner dimensions, is a compile error rather than a
//! runtime check. Out-of-range element access is the one runtime contract,
//! and it panics.
//!
//! ## Quick start
//!
//! ```
//! use minimat::{Matrix, Vector};
//!
//! let a = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
//! let b = Matrix::from_rows([[7, 8], [9, 10], [11, 12]]);
//! let c = a * b; // (2×3) * (3×2) → (2×2)
//! assert_eq!(c[(0, 0)], 58);
//! assert_eq!(c[(1, 1)], 154);
//!
//! let u = Vector::from_array([1, 2, 3]);
//! let v = Vector::from_array([4, 5, 6]);
//! assert_eq!(u.dot(&v), 32);
//! assert!((u.norm() - 14.0_f64.sqrt()).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Fixed-size `Matrix<T, R, C>` with const-generic dimensions.
//!   Row-major `[[T; C]; R]` storage. Arithmetic, transpose, indexing, and
//!   `Display` formatting. [`Vector<T, N>`] is a type alias for the N×1
//!   column form and adds single-index access, dot products, norms, and
//!   cross products (3-element vectors).
//!
//! - [`traits`] — the [`Scalar`] element trait
//!   (`Copy + PartialEq + Debug + Zero + One + Num`).
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod matrix;
pub mod traits;

pub use matrix::aliases::{Matrix1, Matrix2, Matrix3, Matrix4};
pub use matrix::vector::{Vector, Vector1, Vector2, Vector3, Vector4};
pub use matrix::Matrix;
pub use traits::Scalar;
