use crate::matrix::{Elem, Matrix, View};

/// Column-cached multiplication of two equal-size views.
///
/// For each output column `c`, column `c` of `right` is first copied into a
/// contiguous buffer. Every dot product then reads `left`'s row and the
/// buffer sequentially instead of striding through `right`.
///
/// Gives the same (wrapping) result as [`super::naive::multiply`].
pub fn multiply(left: View<'_>, right: View<'_>) -> Matrix {
    debug_assert_eq!(left.side(), right.side(), "multiply: side mismatch");
    let s = left.side();
    let mut res = Matrix::zeros(s);
    let mut column: Vec<Elem> = vec![0; s];

    for c in 0..s {
        fill_column(right, c, &mut column);
        for r in 0..s {
            let acc = left
                .row(r)
                .iter()
                .zip(&column)
                .fold(0 as Elem, |acc, (&a, &b)| acc.wrapping_add(a.wrapping_mul(b)));
            res.set(r, c, acc);
        }
    }
    res
}

/// Copy column `c` of `src` into `column`.
#[inline]
pub(crate) fn fill_column(src: View<'_>, c: usize, column: &mut [Elem]) {
    for (x, slot) in column.iter_mut().enumerate() {
        *slot = src.get(x, c);
    }
}
