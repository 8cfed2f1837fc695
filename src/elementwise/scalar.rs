use crate::elementwise::Op;
use crate::matrix::{Matrix, View};

/// `out[r][c] = op(left[r][c], right[r][c])`, one cell at a time.
///
/// Both views must have the same side; this is not checked outside debug
/// builds.
pub fn combine(op: Op, left: View<'_>, right: View<'_>) -> Matrix {
    debug_assert_eq!(left.side(), right.side(), "combine: side mismatch");
    let s = left.side();
    let mut out = Matrix::zeros(s);
    for r in 0..s {
        for c in 0..s {
            out.set(r, c, op.apply(left.get(r, c), right.get(r, c)));
        }
    }
    out
}
