mod algorithm;
mod cell;
mod coord;
mod live_set;
mod patterns;
pub mod rules;
pub mod step;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use coord::Coord;
pub use live_set::LiveSet;
pub use patterns::{Pattern, merge, presets, random_soup};
pub use rules::{live_neighbor_count, neighbors, next_state};
pub use step::{CandidateSet, advance, advance_by, advance_parallel, candidate_cells, generations};
