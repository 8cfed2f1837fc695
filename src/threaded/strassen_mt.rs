//! Multi-threaded Strassen on scoped threads.

use std::num::NonZeroUsize;
use std::panic;
use std::thread;

use tracing::debug;

use crate::error::{MatmulError, Result};
use crate::matrix::{Matrix, View};
use crate::strassen::{Kernels, PRODUCTS, Product, StrassenConfig, assemble, plan, product, recurse};

/// Strassen product with the top levels spread across threads.
///
/// Each parallel level spawns one thread per product, so `L` levels run
/// `7^L` leaf branches at once. `config.parallel_depth` is capped twice:
/// by the number of levels the input actually recurses, and so that `7^L`
/// stays within the machine's available parallelism (one level is always
/// allowed). Below the parallel levels the sequential composer takes over.
///
/// Gives exactly the result of [`crate::strassen::multiply`].
pub fn multiply_parallel<K: Kernels + Sync + ?Sized>(
    kernels: &K,
    config: &StrassenConfig,
    left: &Matrix,
    right: &Matrix,
) -> Result<Matrix> {
    let depth = plan(kernels, config, left.view(), right.view())?;
    let workers = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    let levels = config
        .parallel_depth
        .min(depth)
        .min(max_parallel_levels(workers));
    debug!(
        kernels = kernels.name(),
        side = left.side(),
        threshold = config.threshold,
        depth,
        requested = config.parallel_depth,
        workers,
        levels,
        "parallel strassen multiply"
    );
    fan_out(kernels, config.threshold, levels, left.view(), right.view())
}

/// Deepest fan-out whose `7^levels` leaf branches fit in `workers`, never
/// less than one level.
fn max_parallel_levels(workers: usize) -> usize {
    let mut levels = 1;
    let mut branches = PRODUCTS * PRODUCTS;
    while branches <= workers {
        levels += 1;
        branches = branches.saturating_mul(PRODUCTS);
    }
    levels
}

fn fan_out<K: Kernels + Sync + ?Sized>(
    kernels: &K,
    threshold: usize,
    levels: usize,
    left: View<'_>,
    right: View<'_>,
) -> Result<Matrix> {
    if levels == 0 || left.side() <= threshold {
        return recurse(kernels, threshold, left, right);
    }

    let a = left.quadrants();
    let b = right.quadrants();

    let results: Vec<Result<Matrix>> = thread::scope(|scope| {
        let handles: Vec<_> = Product::ALL
            .into_iter()
            .map(|which| {
                let (a, b) = (&a, &b);
                thread::Builder::new()
                    .name(format!("strassen-{which:?}"))
                    .spawn_scoped(scope, move || {
                        let mul =
                            |l: View<'_>, r: View<'_>| fan_out(kernels, threshold, levels - 1, l, r);
                        product(kernels, which, a, b, &mul)
                    })
            })
            .collect();

        // Threads that did start are still joined before reporting a spawn failure.
        handles
            .into_iter()
            .map(|spawned| match spawned {
                Ok(handle) => handle
                    .join()
                    .unwrap_or_else(|payload| panic::resume_unwind(payload)),
                Err(e) => Err(MatmulError::Io(e)),
            })
            .collect()
    });

    let m = results.into_iter().collect::<Result<Vec<_>>>()?;
    assemble(kernels, left.side(), &m)
}
