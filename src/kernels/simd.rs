//! Column-cached multiplication with 4-lane multiply-accumulate.

use crate::error::Result;
use crate::kernels::cached::fill_column;
use crate::kernels::lanes::{self, Isa, Tail};
use crate::matrix::{Elem, Matrix, View};

/// Same column caching as [`super::cached::multiply`], but each dot product
/// loads 4 values from `left`'s row and 4 from the cached column, multiplies
/// them lane by lane, accumulates across chunks and finally sums the 4
/// accumulator lanes.
///
/// With [`Tail::Reject`] a side that is not a multiple of 4 fails with
/// `UnsupportedSize`. With [`Tail::Scalar`] the remaining `side % 4` terms
/// of every dot product are added one at a time. Nothing is dropped.
///
/// # Example
///
/// ```
/// use strassen::Matrix;
/// use strassen::kernels::{Tail, simd};
///
/// let a = Matrix::identity(4);
/// let b = Matrix::from_vec(4, (0..16).collect()).unwrap();
/// assert_eq!(simd::multiply(a.view(), b.view(), Tail::Reject).unwrap(), b);
/// assert!(simd::multiply(a.view_at(0, 0, 2), b.view_at(0, 0, 2), Tail::Reject).is_err());
/// ```
pub fn multiply(left: View<'_>, right: View<'_>, tail: Tail) -> Result<Matrix> {
    debug_assert_eq!(left.side(), right.side(), "multiply: side mismatch");
    let s = left.side();
    tail.check(s)?;

    let isa = Isa::detect();
    let mut res = Matrix::zeros(s);
    let mut column: Vec<Elem> = vec![0; s];

    for c in 0..s {
        fill_column(right, c, &mut column);
        for r in 0..s {
            res.set(r, c, lanes::dot(isa, left.row(r), &column));
        }
    }
    Ok(res)
}
