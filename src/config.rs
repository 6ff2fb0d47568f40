use crate::error::PlainsightError;

/// Runtime budgets for the hill-climbing search.
///
/// The defaults are tuned for short ciphertexts; all three values are
/// ordinary configuration, not invariants of the algorithm.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of independent restarts.
    pub restarts: usize,
    /// Iteration budget per restart.
    pub iterations: usize,
    /// Candidate neighbor keys sampled per iteration.
    pub neighbor_samples: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            restarts: 500,
            iterations: 10_000,
            neighbor_samples: 200,
        }
    }
}

impl SearchConfig {
    /// Reject budgets that would make the search a no-op.
    pub fn validate(&self) -> Result<(), PlainsightError> {
        if self.restarts == 0 {
            return Err(PlainsightError::Config(
                "restarts must be at least 1".into(),
            ));
        }
        if self.iterations == 0 {
            return Err(PlainsightError::Config(
                "iterations must be at least 1".into(),
            ));
        }
        if self.neighbor_samples == 0 {
            return Err(PlainsightError::Config(
                "neighbor_samples must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
