//! Base-case multipliers used once recursion stops.
//!
//! All three compute `res[r][c] = Σ left[r][x] * right[x][c]` in `i32` with
//! wrapping arithmetic and return identical matrices for the same input.
//!
//! Available kernels:
//! - `naive`: i-j-x triple loop, strided column access on `right`
//! - `cached`: copies each column of `right` into a contiguous buffer first
//! - `simd`: column cache plus 4-lane multiply-accumulate (SSE4.1 when present)

pub mod cached;
pub mod lanes;
pub mod naive;
pub mod simd;

pub use lanes::{LANES, Tail};
