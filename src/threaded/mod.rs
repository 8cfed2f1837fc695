//! Multi-threaded Strassen.
//!
//! The seven products of a level only read the shared operands and
//! allocate their own temporaries, so they can run on separate threads.
//! Results are assembled in fixed order; the output does not depend on
//! which thread finishes first.
//!
//! Available implementations:
//! - `strassen_mt`: fans out the top `parallel_depth` levels on scoped threads,
//!   never more levels than the cores can keep busy

pub mod strassen_mt;

pub use strassen_mt::multiply_parallel;
