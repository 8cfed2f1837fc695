//! Random test input.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matrix::{Elem, Matrix};

/// Smallest generated value.
pub const MIN_VALUE: Elem = -4;
/// Largest generated value.
pub const MAX_VALUE: Elem = 5;

/// `side`×`side` matrix with values drawn uniformly from
/// [`MIN_VALUE`]..=[`MAX_VALUE`].
pub fn random_matrix<R: Rng + ?Sized>(side: usize, rng: &mut R) -> Matrix {
    Matrix::from_fn(side, |_, _| rng.gen_range(MIN_VALUE..=MAX_VALUE))
}

/// Two random matrices of the same side. A fixed `seed` gives the same pair
/// every time; `None` seeds from the OS.
pub fn random_pair(side: usize, seed: Option<u64>) -> (Matrix, Matrix) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let left = random_matrix(side, &mut rng);
    let right = random_matrix(side, &mut rng);
    (left, right)
}
