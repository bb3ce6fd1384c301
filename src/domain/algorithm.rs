//! Algorithm enum for selecting the step implementation.
//!
//! Both variants compute the same generation; they differ only in whether
//! candidate cells are evaluated on one thread or on the rayon pool.

use super::{LiveSet, step};

/// Available evolution algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Candidate cells evaluated one after another
    #[default]
    Serial,
    /// Candidate cells evaluated on the rayon thread pool
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Sparse set, single thread",
            Algorithm::Parallel => "Sparse set, rayon over candidate cells",
        }
    }

    /// Compute the next generation with this algorithm
    pub fn advance(self, live: &LiveSet) -> LiveSet {
        match self {
            Algorithm::Serial => step::advance(live),
            Algorithm::Parallel => step::advance_parallel(live),
        }
    }
}
