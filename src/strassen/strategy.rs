//! The (base multiplier, adder, subtracter) bundle the composer runs with.

use std::fmt;
use std::str::FromStr;

use crate::elementwise::{self, Op};
use crate::error::{MatmulError, Result};
use crate::kernels::{self, Tail};
use crate::matrix::{Matrix, View};

/// Capability set threaded unchanged through every level of one
/// multiplication.
pub trait Kernels {
    /// Short label for logs and reports.
    fn name(&self) -> &str;

    /// Multiply two equal-size views directly.
    fn base_multiply(&self, left: View<'_>, right: View<'_>) -> Result<Matrix>;

    fn add(&self, left: View<'_>, right: View<'_>) -> Result<Matrix>;

    fn subtract(&self, left: View<'_>, right: View<'_>) -> Result<Matrix>;

    /// Reject a side these kernels will be asked to handle, before any work
    /// starts. The default accepts everything.
    fn check_side(&self, _side: usize) -> Result<()> {
        Ok(())
    }
}

/// Naive triple loop with scalar combinators.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveKernels;

impl Kernels for NaiveKernels {
    fn name(&self) -> &str {
        "naive"
    }

    fn base_multiply(&self, left: View<'_>, right: View<'_>) -> Result<Matrix> {
        Ok(kernels::naive::multiply(left, right))
    }

    fn add(&self, left: View<'_>, right: View<'_>) -> Result<Matrix> {
        Ok(elementwise::scalar::combine(Op::Add, left, right))
    }

    fn subtract(&self, left: View<'_>, right: View<'_>) -> Result<Matrix> {
        Ok(elementwise::scalar::combine(Op::Sub, left, right))
    }
}

/// Column-cached multiplier with scalar combinators.
#[derive(Debug, Clone, Copy, Default)]
pub struct CachedKernels;

impl Kernels for CachedKernels {
    fn name(&self) -> &str {
        "cached"
    }

    fn base_multiply(&self, left: View<'_>, right: View<'_>) -> Result<Matrix> {
        Ok(kernels::cached::multiply(left, right))
    }

    fn add(&self, left: View<'_>, right: View<'_>) -> Result<Matrix> {
        Ok(elementwise::scalar::combine(Op::Add, left, right))
    }

    fn subtract(&self, left: View<'_>, right: View<'_>) -> Result<Matrix> {
        Ok(elementwise::scalar::combine(Op::Sub, left, right))
    }
}

/// Vectorized multiplier and combinators.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimdKernels {
    pub tail: Tail,
}

impl SimdKernels {
    /// Fails with `UnsupportedSize` on any side that is not a multiple of 4.
    pub fn strict() -> Self {
        Self { tail: Tail::Reject }
    }
}

impl Kernels for SimdKernels {
    fn name(&self) -> &str {
        match self.tail {
            Tail::Scalar => "simd",
            Tail::Reject => "simd-strict",
        }
    }

    fn base_multiply(&self, left: View<'_>, right: View<'_>) -> Result<Matrix> {
        kernels::simd::multiply(left, right, self.tail)
    }

    fn add(&self, left: View<'_>, right: View<'_>) -> Result<Matrix> {
        elementwise::simd::combine(Op::Add, left, right, self.tail)
    }

    fn subtract(&self, left: View<'_>, right: View<'_>) -> Result<Matrix> {
        elementwise::simd::combine(Op::Sub, left, right, self.tail)
    }

    fn check_side(&self, side: usize) -> Result<()> {
        self.tail.check(side)
    }
}

/// Named kernel presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Naive,
    Cached,
    Simd,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Naive, Strategy::Cached, Strategy::Simd];

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::Cached => "cached",
            Strategy::Simd => "simd",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strategy {
    type Err = MatmulError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "naive" | "simple" => Ok(Strategy::Naive),
            "cached" => Ok(Strategy::Cached),
            "simd" => Ok(Strategy::Simd),
            _ => Err(MatmulError::Parse {
                what: "strategy",
                token: s.to_string(),
            }),
        }
    }
}
