use crate::matrix::square::{Elem, Matrix};

/// Read-only window onto a `side`×`side` block of a [`Matrix`].
///
/// Reading logical cell (r, c) reads `src[row + r][col + c]`. Nothing is
/// copied; the view borrows the backing matrix for its lifetime.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    src: &'a Matrix,
    row: usize,
    col: usize,
    side: usize,
}

impl<'a> View<'a> {
    /// Bounds are the caller's responsibility here; [`Matrix::view_at`]
    /// is the checked entry point.
    #[inline]
    pub(crate) fn new(src: &'a Matrix, row: usize, col: usize, side: usize) -> Self {
        debug_assert!(row + side <= src.side() && col + side <= src.side());
        Self {
            src,
            row,
            col,
            side,
        }
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Elem {
        self.src.get(self.row + r, self.col + c)
    }

    /// Logical row `r`, borrowed straight from the backing storage.
    #[inline]
    pub fn row(&self, r: usize) -> &'a [Elem] {
        &self.src.row(self.row + r)[self.col..self.col + self.side]
    }

    /// Split into top-left, top-right, bottom-left, bottom-right.
    ///
    /// The side must be even.
    #[inline]
    pub fn quadrants(&self) -> [View<'a>; 4] {
        debug_assert!(self.side % 2 == 0, "quadrants of odd side {}", self.side);
        let h = self.side / 2;
        [
            View::new(self.src, self.row, self.col, h),
            View::new(self.src, self.row, self.col + h, h),
            View::new(self.src, self.row + h, self.col, h),
            View::new(self.src, self.row + h, self.col + h, h),
        ]
    }

    /// Materialize the block as its own matrix.
    pub fn to_matrix(&self) -> Matrix {
        let mut out = Matrix::zeros(self.side);
        for r in 0..self.side {
            out.row_mut(r).copy_from_slice(self.row(r));
        }
        out
    }
}
