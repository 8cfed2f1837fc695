//! Strassen matrix multiplication over `i32`, with swappable kernels.
//!
//! I wanted to see how much of Strassen's asymptotic win survives on real
//! hardware once the base case is fast. The recursion splits both operands
//! into quadrant views (no copies), builds seven half-size products and
//! hands anything at or below a threshold to a base-case kernel. Three
//! kernel sets plug in: a naive triple loop, a column-cached loop, and a
//! 4-lane SIMD version. All of them produce bit-identical results, with
//! wrapping `i32` arithmetic throughout.
//!
//! ## Usage
//!
//! ```
//! use strassen::{Matrix, StrassenConfig, Strategy, multiply_with};
//!
//! let a = Matrix::identity(128);
//! let b = Matrix::from_fn(128, |r, c| (r * 128 + c) as i32);
//!
//! let c = multiply_with(Strategy::Simd, &StrassenConfig::default(), &a, &b).unwrap();
//! assert_eq!(c, b);
//! ```
//!
//! Custom kernel sets implement [`Kernels`]; the composer is generic over it:
//!
//! ```
//! use strassen::{Matrix, StrassenConfig, SimdKernels};
//! use strassen::strassen::multiply;
//!
//! let a = Matrix::from_fn(8, |r, c| (r + c) as i32);
//! let strict = SimdKernels::strict();
//! let config = StrassenConfig::with_threshold(4);
//! assert!(multiply(&strict, &config, &a, &a).is_ok());
//! ```
//!
//! For large matrices, run the top levels on multiple threads:
//!
//! ```
//! use strassen::{Matrix, StrassenConfig, CachedKernels, multiply_parallel};
//!
//! let a = Matrix::from_fn(256, |r, c| ((r ^ c) % 7) as i32 - 3);
//! let config = StrassenConfig::default().parallel(1);
//! let c = multiply_parallel(&CachedKernels, &config, &a, &a).unwrap();
//! assert_eq!(c.side(), 256);
//! ```
//!
//! ## What's inside
//!
//! - Zero-copy submatrix views
//! - Naive, column-cached and SSE4.1 base-case kernels
//! - Scalar and 4-lane add/subtract
//! - Sequential and scoped-thread recursive composers

pub mod elementwise;
pub mod error;
pub mod generate;
pub mod io;
pub mod kernels;
pub mod matrix;
pub mod strassen;
pub mod threaded;

pub use error::{MatmulError, Result};
pub use matrix::{Elem, Matrix, Mismatch, View, first_mismatch, matrices_equal};
pub use strassen::{
    CachedKernels, DEFAULT_THRESHOLD, Kernels, NaiveKernels, SimdKernels, StrassenConfig, Strategy,
    direct_with, multiply_with,
};
pub use threaded::multiply_parallel;
