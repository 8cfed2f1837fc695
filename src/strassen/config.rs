use crate::error::{MatmulError, Result};

/// Side length at or below which recursion stops by default.
pub const DEFAULT_THRESHOLD: usize = 64;

/// Tuning for one multiplication call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrassenConfig {
    /// Sides `<= threshold` go straight to the base-case kernel.
    pub threshold: usize,
    /// Number of top recursion levels whose seven products run on their own
    /// threads. 0 keeps everything on the calling thread; the parallel
    /// composer caps it by the available cores.
    pub parallel_depth: usize,
}

impl Default for StrassenConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            parallel_depth: 0,
        }
    }
}

impl StrassenConfig {
    pub fn with_threshold(threshold: usize) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn parallel(mut self, depth: usize) -> Self {
        self.parallel_depth = depth;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(MatmulError::InvalidConfig(
                "recursion threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
