//! Vectorized add/subtract, 4 lanes per step.

use crate::elementwise::Op;
use crate::error::Result;
use crate::kernels::lanes::{self, Isa, Tail};
use crate::matrix::{Matrix, View};

/// Same contract as [`super::scalar::combine`], processing each row in
/// chunks of 4.
///
/// With [`Tail::Reject`] a side that is not a multiple of 4 fails with
/// `UnsupportedSize`; with [`Tail::Scalar`] the last `side % 4` cells of
/// each row are combined one by one.
pub fn combine(op: Op, left: View<'_>, right: View<'_>, tail: Tail) -> Result<Matrix> {
    debug_assert_eq!(left.side(), right.side(), "combine: side mismatch");
    let s = left.side();
    tail.check(s)?;

    let isa = Isa::detect();
    let mut out = Matrix::zeros(s);
    for r in 0..s {
        lanes::combine(isa, op, left.row(r), right.row(r), out.row_mut(r));
    }
    Ok(out)
}
