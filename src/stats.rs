//! `Stats` simply aggregates restart counters without any logging or
//! persistence. It is mainly used by the CLI and test helpers.

use crate::search::Climb;

#[derive(Debug, Default, Clone)]
pub struct Stats {
    pub restarts: u64,
    pub iterations: u64,
    pub accepted_steps: u64,
    pub local_optima: u64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished restart into the totals.
    pub fn record(&mut self, climb: &Climb) {
        self.restarts += 1;
        self.iterations += climb.iterations as u64;
        self.accepted_steps += climb.accepted.len() as u64;
        if climb.converged {
            self.local_optima += 1;
        }
    }

    pub fn report(&self) {
        eprintln!(
            "Ran {} restarts ({} converged), {} iterations, {} accepted steps",
            self.restarts, self.local_optima, self.iterations, self.accepted_steps
        );
    }
}
