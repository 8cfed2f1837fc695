//! 4-lane i32 primitives shared by the vectorized kernels.
//!
//! On x86_64 the lanes map onto one SSE4.1 register (`_mm_mullo_epi32`
//! keeps the low 32 bits of each product, `_mm_add_epi32` wraps). Other
//! targets, or CPUs without SSE4.1, run an unrolled 4-lane loop with the
//! same wrapping semantics, so both paths give bit-identical results.

use crate::elementwise::Op;
use crate::error::{MatmulError, Result};
use crate::matrix::Elem;

/// Width of one vector chunk.
pub const LANES: usize = 4;

/// What the vectorized kernels do with the last `side % 4` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tail {
    /// Finish the remainder with scalar wrapping arithmetic.
    #[default]
    Scalar,
    /// Refuse any side that is not a multiple of [`LANES`].
    Reject,
}

impl Tail {
    pub(crate) fn check(self, side: usize) -> Result<()> {
        if self == Tail::Reject && side % LANES != 0 {
            return Err(MatmulError::UnsupportedSize {
                side,
                reason: "vectorized kernels need a multiple of 4",
            });
        }
        Ok(())
    }
}

/// Instruction set picked once per kernel call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Isa {
    #[cfg(target_arch = "x86_64")]
    Sse41,
    Portable,
}

impl Isa {
    #[inline]
    pub(crate) fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("sse4.1") {
                return Isa::Sse41;
            }
        }
        Isa::Portable
    }
}

#[inline]
fn main_len(len: usize) -> usize {
    len / LANES * LANES
}

#[inline]
fn hsum(lanes: [Elem; LANES]) -> Elem {
    lanes.iter().fold(0, |acc: Elem, &x| acc.wrapping_add(x))
}

/// Wrapping dot product of two equal-length slices.
#[inline]
pub(crate) fn dot(isa: Isa, a: &[Elem], b: &[Elem]) -> Elem {
    debug_assert_eq!(a.len(), b.len());
    let main = main_len(a.len());
    let head = match isa {
        // SAFETY: Sse41 is only produced after runtime detection.
        #[cfg(target_arch = "x86_64")]
        Isa::Sse41 => unsafe { dot_sse41(&a[..main], &b[..main]) },
        Isa::Portable => dot_portable(&a[..main], &b[..main]),
    };
    a[main..]
        .iter()
        .zip(&b[main..])
        .fold(head, |acc, (&x, &y)| acc.wrapping_add(x.wrapping_mul(y)))
}

/// `out[i] = op(a[i], b[i])` over equal-length slices.
#[inline]
pub(crate) fn combine(isa: Isa, op: Op, a: &[Elem], b: &[Elem], out: &mut [Elem]) {
    debug_assert!(a.len() == b.len() && a.len() == out.len());
    let main = main_len(a.len());
    match isa {
        // SAFETY: Sse41 is only produced after runtime detection.
        #[cfg(target_arch = "x86_64")]
        Isa::Sse41 => unsafe { combine_sse41(op, &a[..main], &b[..main], &mut out[..main]) },
        Isa::Portable => combine_portable(op, &a[..main], &b[..main], &mut out[..main]),
    }
    for i in main..a.len() {
        out[i] = op.apply(a[i], b[i]);
    }
}

fn dot_portable(a: &[Elem], b: &[Elem]) -> Elem {
    let mut acc = [0 as Elem; LANES];
    for (ca, cb) in a.chunks_exact(LANES).zip(b.chunks_exact(LANES)) {
        for l in 0..LANES {
            acc[l] = acc[l].wrapping_add(ca[l].wrapping_mul(cb[l]));
        }
    }
    hsum(acc)
}

fn combine_portable(op: Op, a: &[Elem], b: &[Elem], out: &mut [Elem]) {
    for ((ca, cb), co) in a
        .chunks_exact(LANES)
        .zip(b.chunks_exact(LANES))
        .zip(out.chunks_exact_mut(LANES))
    {
        for l in 0..LANES {
            co[l] = op.apply(ca[l], cb[l]);
        }
    }
}

/// # Safety
///
/// CPU must support SSE4.1; slice lengths must be equal multiples of 4.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse4.1")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn dot_sse41(a: &[Elem], b: &[Elem]) -> Elem {
    use std::arch::x86_64::*;

    let mut acc = _mm_setzero_si128();
    for (ca, cb) in a.chunks_exact(LANES).zip(b.chunks_exact(LANES)) {
        let va = _mm_loadu_si128(ca.as_ptr() as *const __m128i);
        let vb = _mm_loadu_si128(cb.as_ptr() as *const __m128i);
        acc = _mm_add_epi32(acc, _mm_mullo_epi32(va, vb));
    }

    let mut lanes = [0 as Elem; LANES];
    _mm_storeu_si128(lanes.as_mut_ptr() as *mut __m128i, acc);
    hsum(lanes)
}

/// # Safety
///
/// CPU must support SSE4.1; slice lengths must be equal multiples of 4.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse4.1")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn combine_sse41(op: Op, a: &[Elem], b: &[Elem], out: &mut [Elem]) {
    use std::arch::x86_64::*;

    for ((ca, cb), co) in a
        .chunks_exact(LANES)
        .zip(b.chunks_exact(LANES))
        .zip(out.chunks_exact_mut(LANES))
    {
        let va = _mm_loadu_si128(ca.as_ptr() as *const __m128i);
        let vb = _mm_loadu_si128(cb.as_ptr() as *const __m128i);
        let vr = match op {
            Op::Add => _mm_add_epi32(va, vb),
            Op::Sub => _mm_sub_epi32(va, vb),
        };
        _mm_storeu_si128(co.as_mut_ptr() as *mut __m128i, vr);
    }
}
