use crate::matrix::{Elem, Matrix, View};

/// Textbook triple-loop multiplication of two equal-size views.
///
/// The innermost loop walks down a column of `right`, so every step is a
/// stride-`n` jump in the backing matrix. Slow on purpose: this is the
/// baseline every other kernel is checked and timed against.
///
/// Products and sums wrap on overflow.
pub fn multiply(left: View<'_>, right: View<'_>) -> Matrix {
    debug_assert_eq!(left.side(), right.side(), "multiply: side mismatch");
    let s = left.side();
    let mut res = Matrix::zeros(s);
    for r in 0..s {
        for c in 0..s {
            let mut acc: Elem = 0;
            for x in 0..s {
                acc = acc.wrapping_add(left.get(r, x).wrapping_mul(right.get(x, c)));
            }
            res.set(r, c, acc);
        }
    }
    res
}
