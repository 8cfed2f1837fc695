//! Owned square matrix, result placement and equality checks.

use crate::error::{MatmulError, Result};
use crate::matrix::view::View;

/// Element type of every matrix. Arithmetic on it always wraps.
pub type Elem = i32;

/// Owned N×N matrix stored row-major in a flat buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    side: usize,
    data: Vec<Elem>,
}

impl Matrix {
    /// All-zero matrix, used as the destination for placement.
    pub fn zeros(side: usize) -> Self {
        Self {
            side,
            data: vec![0; side * side],
        }
    }

    pub fn identity(side: usize) -> Self {
        Self::from_fn(side, |r, c| Elem::from(r == c))
    }

    /// Fill cell (r, c) with `f(r, c)`.
    pub fn from_fn(side: usize, mut f: impl FnMut(usize, usize) -> Elem) -> Self {
        let mut data = Vec::with_capacity(side * side);
        for r in 0..side {
            for c in 0..side {
                data.push(f(r, c));
            }
        }
        Self { side, data }
    }

    /// Wrap a row-major buffer of `side * side` values.
    pub fn from_vec(side: usize, data: Vec<Elem>) -> Result<Self> {
        if data.len() != side * side {
            return Err(MatmulError::LengthMismatch {
                side,
                len: data.len(),
            });
        }
        Ok(Self { side, data })
    }

    /// Build from nested rows. Every row must be as long as there are rows.
    ///
    /// ```
    /// use strassen::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m.get(1, 0), 3);
    /// assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Elem>>) -> Result<Self> {
        let side = rows.len();
        let mut data = Vec::with_capacity(side * side);
        for row in rows {
            if row.len() != side {
                return Err(MatmulError::ShapeMismatch {
                    expected: side,
                    rows: side,
                    cols: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self { side, data })
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Elem {
        self.data[r * self.side + c]
    }

    /// Row `r` as a contiguous slice.
    #[inline]
    pub fn row(&self, r: usize) -> &[Elem] {
        &self.data[r * self.side..(r + 1) * self.side]
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, r: usize) -> &mut [Elem] {
        &mut self.data[r * self.side..(r + 1) * self.side]
    }

    #[inline]
    pub(crate) fn set(&mut self, r: usize, c: usize, value: Elem) {
        self.data[r * self.side + c] = value;
    }

    pub fn as_slice(&self) -> &[Elem] {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<Elem>> {
        self.data.chunks(self.side.max(1)).map(<[Elem]>::to_vec).collect()
    }

    /// View over the whole matrix.
    #[inline]
    pub fn view(&self) -> View<'_> {
        View::new(self, 0, 0, self.side)
    }

    /// View over the `side`×`side` block starting at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if the block does not fit inside the matrix.
    #[inline]
    pub fn view_at(&self, row: usize, col: usize, side: usize) -> View<'_> {
        assert!(
            row + side <= self.side && col + side <= self.side,
            "view {}x{} at ({}, {}) exceeds {}x{} matrix",
            side,
            side,
            row,
            col,
            self.side,
            self.side
        );
        View::new(self, row, col, side)
    }

    /// Copy every cell of `src` into `self` starting at (`row`, `col`).
    ///
    /// `self` must already have its final size; `src` must fit inside it.
    pub fn place(&mut self, src: &Matrix, row: usize, col: usize) {
        debug_assert!(row + src.side <= self.side, "placement overflows rows");
        debug_assert!(col + src.side <= self.side, "placement overflows columns");
        for r in 0..src.side {
            self.row_mut(row + r)[col..col + src.side].copy_from_slice(src.row(r));
        }
    }
}

/// First point at which two matrices disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    Side { left: usize, right: usize },
    Cell {
        row: usize,
        col: usize,
        left: Elem,
        right: Elem,
    },
}

/// Locate the first disagreement between `a` and `b`, scanning row-major.
pub fn first_mismatch(a: &Matrix, b: &Matrix) -> Option<Mismatch> {
    if a.side != b.side {
        return Some(Mismatch::Side {
            left: a.side,
            right: b.side,
        });
    }
    a.data
        .iter()
        .zip(&b.data)
        .position(|(x, y)| x != y)
        .map(|i| Mismatch::Cell {
            row: i / a.side,
            col: i % a.side,
            left: a.data[i],
            right: b.data[i],
        })
}

/// True iff both matrices have the same side and equal cells.
pub fn matrices_equal(a: &Matrix, b: &Matrix) -> bool {
    first_mismatch(a, b).is_none()
}
