//! Advancing a `LiveSet` by one generation.
//!
//! Only live cells and their immediate neighbors can change state, so each
//! step first builds that candidate set and evaluates the rule over it
//! alone. Work per generation is proportional to the live population, not
//! to any grid area.

use std::collections::HashSet;

use rayon::prelude::*;

use super::{Coord, LiveSet, rules};

/// Cells that must be evaluated for the next generation.
pub type CandidateSet = HashSet<Coord>;

/// Every live coordinate plus its whole Moore neighborhood.
pub fn candidate_cells(live: &LiveSet) -> CandidateSet {
    let mut candidates = CandidateSet::with_capacity(live.len() * 9);
    for &c in live {
        candidates.insert(c);
        candidates.extend(rules::neighbors(c));
    }
    candidates
}

/// Pure functional evolution - returns the next generation (serial)
pub fn advance(live: &LiveSet) -> LiveSet {
    candidate_cells(live)
        .into_iter()
        .filter(|&c| rules::next_state(live, c))
        .collect()
}

/// Parallel evolution using rayon.
/// Gives the same set as [`advance`]; pays off once the population is in the thousands.
pub fn advance_parallel(live: &LiveSet) -> LiveSet {
    let next: HashSet<Coord> = candidate_cells(live)
        .into_par_iter()
        .filter(|&c| rules::next_state(live, c))
        .collect();
    LiveSet::from(next)
}

/// Advance `n` generations
pub fn advance_by(live: &LiveSet, n: usize) -> LiveSet {
    (0..n).fold(live.clone(), |current, _| advance(&current))
}

/// The unbounded sequence G0, G1 = advance(G0), ...
/// Callers decide when to stop pulling.
pub fn generations(seed: LiveSet) -> impl Iterator<Item = LiveSet> {
    std::iter::successors(Some(seed), |current| Some(advance(current)))
}
