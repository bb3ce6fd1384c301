use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::domain::{Algorithm, LiveSet};

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic; the
/// caller owns pacing and rendering.
#[derive(Clone, Debug)]
pub struct GameState {
    pub live: LiveSet,
    pub algorithm: Algorithm,
    pub generation: u64,
    /// Stop after this many rendered generations; `None` runs forever
    pub generation_limit: Option<u64>,
    pub last_evolution_time: Duration,
}

impl GameState {
    pub fn new(seed: LiveSet) -> Self {
        Self {
            live: seed,
            algorithm: Algorithm::default(),
            generation: 0,
            generation_limit: None,
            last_evolution_time: Duration::ZERO,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_limit(mut self, limit: Option<u64>) -> Self {
        self.generation_limit = limit;
        self
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn is_finished(&self) -> bool {
        self.generation_limit
            .is_some_and(|limit| self.generation >= limit)
    }

    /// Advance one generation. A finished state is returned unchanged.
    pub fn tick(mut self) -> Self {
        if self.is_finished() {
            return self;
        }

        let start = Instant::now();
        self.live = self.algorithm.advance(&self.live);
        self.last_evolution_time = start.elapsed();
        self.generation += 1;

        debug!(
            "generation {} population {} in {:?} ({})",
            self.generation,
            self.live.len(),
            self.last_evolution_time,
            self.algorithm.name()
        );
        if self.live.is_empty() {
            trace!("population died out at generation {}", self.generation);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    #[test]
    fn test_tick_counts_generations() {
        let state = GameState::new(presets::blinker().at(0, 0)).tick().tick().tick();
        assert_eq!(state.generation, 3);
        assert_eq!(state.live, crate::domain::advance(&presets::blinker().at(0, 0)));
    }

    #[test]
    fn test_limit_stops_ticking() {
        let mut state = GameState::new(presets::glider().at(0, 0)).with_limit(Some(2));
        assert!(!state.is_finished());
        state = state.tick().tick();
        assert!(state.is_finished());
        let frozen = state.live.clone();
        state = state.tick();
        assert_eq!(state.generation, 2);
        assert_eq!(state.live, frozen);
    }

    #[test]
    fn test_zero_limit_is_finished_immediately() {
        assert!(GameState::new(LiveSet::new()).with_limit(Some(0)).is_finished());
    }

    #[test]
    fn test_unlimited_never_finishes() {
        let mut state = GameState::new(LiveSet::new());
        for _ in 0..100 {
            state = state.tick();
        }
        assert!(!state.is_finished());
        assert_eq!(state.population(), 0);
    }

    #[test]
    fn test_parallel_state_matches_serial() {
        let seed = presets::r_pentomino().at(0, 0);
        let mut serial = GameState::new(seed.clone());
        let mut parallel = GameState::new(seed).with_algorithm(Algorithm::Parallel);
        for _ in 0..40 {
            serial = serial.tick();
            parallel = parallel.tick();
        }
        assert_eq!(serial.live, parallel.live);
    }
}
