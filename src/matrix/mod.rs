//! Square integer matrices and zero-copy views into them.
//!
//! Every kernel in the crate reads its operands through a [`View`] and
//! produces a freshly allocated [`Matrix`]. Sub-blocks are addressed by
//! offset, never copied out.

pub mod square;
pub mod view;

pub use square::{Elem, Matrix, Mismatch, first_mismatch, matrices_equal};
pub use view::View;
