//! Strassen divide-and-conquer multiplication.
//!
//! Each level splits both operands into quadrants (as views, no copies),
//! forms the seven half-size products
//!
//! ```text
//! M1 = A11 (B12 - B22)        M5 = (A11 + A22)(B11 + B22)
//! M2 = (A11 + A12) B22        M6 = (A12 - A22)(B21 + B22)
//! M3 = (A21 + A22) B11        M7 = (A11 - A21)(B11 + B12)
//! M4 = A22 (B21 - B11)
//! ```
//!
//! and places
//!
//! ```text
//! C11 = (M5 + M4) - (M2 - M6)     C12 = M1 + M2
//! C21 = M3 + M4                   C22 = (M5 + M1) - (M3 + M7)
//! ```
//!
//! into a fresh result. Sums and differences are materialized through the
//! [`Kernels`] combinators; once the side drops to the threshold the base
//! multiplier takes over.

pub mod config;
pub mod strategy;

pub use config::{DEFAULT_THRESHOLD, StrassenConfig};
pub use strategy::{CachedKernels, Kernels, NaiveKernels, SimdKernels, Strategy};

use tracing::{debug, trace};

use crate::error::{MatmulError, Result};
use crate::matrix::{Matrix, View};

/// Number of half-size products per level.
pub(crate) const PRODUCTS: usize = 7;

/// Recursion levels needed to bring `side` down to `threshold`.
///
/// Fails with `UnsupportedSize` for an empty matrix, or when a level above
/// the threshold has an odd side and cannot be split into quadrants.
///
/// ```
/// use strassen::strassen::recursion_depth;
///
/// assert_eq!(recursion_depth(64, 64).unwrap(), 0);
/// assert_eq!(recursion_depth(256, 64).unwrap(), 2);
/// assert_eq!(recursion_depth(96, 16).unwrap(), 3);
/// assert!(recursion_depth(100, 16).is_err()); // 100 -> 50 -> 25 is odd
/// ```
pub fn recursion_depth(side: usize, threshold: usize) -> Result<usize> {
    if threshold == 0 {
        return Err(MatmulError::InvalidConfig(
            "recursion threshold must be at least 1".to_string(),
        ));
    }
    if side == 0 {
        return Err(MatmulError::UnsupportedSize {
            side,
            reason: "matrix is empty",
        });
    }
    let mut s = side;
    let mut depth = 0;
    while s > threshold {
        if s % 2 != 0 {
            return Err(MatmulError::UnsupportedSize {
                side: s,
                reason: "odd side cannot be split into quadrants",
            });
        }
        s /= 2;
        depth += 1;
    }
    Ok(depth)
}

/// Validate shapes, config and every side the kernels will see.
pub(crate) fn plan<K: Kernels + ?Sized>(
    kernels: &K,
    config: &StrassenConfig,
    left: View<'_>,
    right: View<'_>,
) -> Result<usize> {
    config.validate()?;
    check_shapes(left, right)?;
    let depth = recursion_depth(left.side(), config.threshold)?;
    let mut s = left.side();
    for _ in 0..=depth {
        kernels.check_side(s)?;
        s /= 2;
    }
    Ok(depth)
}

fn check_shapes(left: View<'_>, right: View<'_>) -> Result<()> {
    if left.side() != right.side() {
        return Err(MatmulError::ShapeMismatch {
            expected: left.side(),
            rows: right.side(),
            cols: right.side(),
        });
    }
    Ok(())
}

/// Strassen product of two full matrices on the calling thread.
///
/// ```
/// use strassen::{Matrix, StrassenConfig};
/// use strassen::strassen::{NaiveKernels, multiply};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// let c = multiply(&NaiveKernels, &StrassenConfig::with_threshold(1), &a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
/// ```
pub fn multiply<K: Kernels + ?Sized>(
    kernels: &K,
    config: &StrassenConfig,
    left: &Matrix,
    right: &Matrix,
) -> Result<Matrix> {
    multiply_views(kernels, config, left.view(), right.view())
}

/// Same as [`multiply`], on views.
pub fn multiply_views<K: Kernels + ?Sized>(
    kernels: &K,
    config: &StrassenConfig,
    left: View<'_>,
    right: View<'_>,
) -> Result<Matrix> {
    let depth = plan(kernels, config, left, right)?;
    debug!(
        kernels = kernels.name(),
        side = left.side(),
        threshold = config.threshold,
        depth,
        "strassen multiply"
    );
    recurse(kernels, config.threshold, left, right)
}

/// Base-case kernel on the whole input, no decomposition.
pub fn direct<K: Kernels + ?Sized>(kernels: &K, left: &Matrix, right: &Matrix) -> Result<Matrix> {
    check_shapes(left.view(), right.view())?;
    if left.side() == 0 {
        return Err(MatmulError::UnsupportedSize {
            side: 0,
            reason: "matrix is empty",
        });
    }
    kernels.check_side(left.side())?;
    debug!(kernels = kernels.name(), side = left.side(), "direct multiply");
    kernels.base_multiply(left.view(), right.view())
}

/// Run a named preset, in parallel when `config.parallel_depth > 0`.
pub fn multiply_with(
    strategy: Strategy,
    config: &StrassenConfig,
    left: &Matrix,
    right: &Matrix,
) -> Result<Matrix> {
    match strategy {
        Strategy::Naive => run(&NaiveKernels, config, left, right),
        Strategy::Cached => run(&CachedKernels, config, left, right),
        Strategy::Simd => run(&SimdKernels::default(), config, left, right),
    }
}

/// [`direct`] for a named preset.
pub fn direct_with(strategy: Strategy, left: &Matrix, right: &Matrix) -> Result<Matrix> {
    match strategy {
        Strategy::Naive => direct(&NaiveKernels, left, right),
        Strategy::Cached => direct(&CachedKernels, left, right),
        Strategy::Simd => direct(&SimdKernels::default(), left, right),
    }
}

fn run<K: Kernels + Sync>(
    kernels: &K,
    config: &StrassenConfig,
    left: &Matrix,
    right: &Matrix,
) -> Result<Matrix> {
    if config.parallel_depth > 0 {
        crate::threaded::multiply_parallel(kernels, config, left, right)
    } else {
        multiply(kernels, config, left, right)
    }
}

pub(crate) fn recurse<K: Kernels + ?Sized>(
    kernels: &K,
    threshold: usize,
    left: View<'_>,
    right: View<'_>,
) -> Result<Matrix> {
    let s = left.side();
    if s <= threshold {
        return kernels.base_multiply(left, right);
    }
    trace!(side = s, "split");

    let a = left.quadrants();
    let b = right.quadrants();
    let mul = |l: View<'_>, r: View<'_>| recurse(kernels, threshold, l, r);
    let m = Product::ALL
        .into_iter()
        .map(|which| product(kernels, which, &a, &b, &mul))
        .collect::<Result<Vec<_>>>()?;
    assemble(kernels, s, &m)
}

/// One of the seven half-size products of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Product {
    M1,
    M2,
    M3,
    M4,
    M5,
    M6,
    M7,
}

impl Product {
    /// In the order [`assemble`] expects them.
    pub(crate) const ALL: [Product; PRODUCTS] = [
        Product::M1,
        Product::M2,
        Product::M3,
        Product::M4,
        Product::M5,
        Product::M6,
        Product::M7,
    ];
}

/// Compute `which` from the operand quadrants, using `mul` for the
/// half-size multiplication.
pub(crate) fn product<K, F>(
    kernels: &K,
    which: Product,
    a: &[View<'_>; 4],
    b: &[View<'_>; 4],
    mul: &F,
) -> Result<Matrix>
where
    K: Kernels + ?Sized,
    F: Fn(View<'_>, View<'_>) -> Result<Matrix> + ?Sized,
{
    let [a11, a12, a21, a22] = *a;
    let [b11, b12, b21, b22] = *b;
    match which {
        Product::M1 => {
            let r = kernels.subtract(b12, b22)?;
            mul(a11, r.view())
        }
        Product::M2 => {
            let l = kernels.add(a11, a12)?;
            mul(l.view(), b22)
        }
        Product::M3 => {
            let l = kernels.add(a21, a22)?;
            mul(l.view(), b11)
        }
        Product::M4 => {
            let r = kernels.subtract(b21, b11)?;
            mul(a22, r.view())
        }
        Product::M5 => {
            let l = kernels.add(a11, a22)?;
            let r = kernels.add(b11, b22)?;
            mul(l.view(), r.view())
        }
        Product::M6 => {
            let l = kernels.subtract(a12, a22)?;
            let r = kernels.add(b21, b22)?;
            mul(l.view(), r.view())
        }
        Product::M7 => {
            let l = kernels.subtract(a11, a21)?;
            let r = kernels.add(b11, b12)?;
            mul(l.view(), r.view())
        }
    }
}

/// Combine M1..M7 into the four quadrants of a `side`×`side` result.
pub(crate) fn assemble<K: Kernels + ?Sized>(
    kernels: &K,
    side: usize,
    m: &[Matrix],
) -> Result<Matrix> {
    debug_assert_eq!(m.len(), PRODUCTS);
    let h = side / 2;
    let mut res = Matrix::zeros(side);

    let l = kernels.add(m[4].view(), m[3].view())?;
    let r = kernels.subtract(m[1].view(), m[5].view())?;
    res.place(&kernels.subtract(l.view(), r.view())?, 0, 0);

    res.place(&kernels.add(m[0].view(), m[1].view())?, 0, h);

    res.place(&kernels.add(m[2].view(), m[3].view())?, h, 0);

    let l = kernels.add(m[4].view(), m[0].view())?;
    let r = kernels.add(m[2].view(), m[6].view())?;
    res.place(&kernels.subtract(l.view(), r.view())?, h, h);

    Ok(res)
}
