//! Pairwise add/subtract of two equal-size views.
//!
//! Both combinators allocate a new matrix for their output. That matrix is
//! what the recursive composer takes its next view over.
//!
//! Available implementations:
//! - `scalar`: one cell at a time
//! - `simd`: 4 cells per step along each row

pub mod scalar;
pub mod simd;

use crate::matrix::Elem;

/// Which combination to apply cell by cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
}

impl Op {
    #[inline]
    pub fn apply(self, a: Elem, b: Elem) -> Elem {
        match self {
            Op::Add => a.wrapping_add(b),
            Op::Sub => a.wrapping_sub(b),
        }
    }
}
