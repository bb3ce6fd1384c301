//! Moore neighborhood and the B3/S23 rule, evaluated against a snapshot.

use super::{Cell, Coord, LiveSet};

/// Offsets of the Moore neighborhood, row by row from the top-left.
#[rustfmt::skip]
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// The cells at Chebyshev distance 1 from `c`, in a fixed order.
///
/// Always eight, except on the `i64` edges of the plane: neighbors that
/// cannot be represented are left out rather than wrapped to the far side,
/// so an edge cell has five and a corner cell three.
pub fn neighbors(c: Coord) -> impl Iterator<Item = Coord> {
    MOORE_OFFSETS
        .into_iter()
        .filter_map(move |(dx, dy)| c.checked_offset(dx, dy))
}

/// Count live neighbors of `c` (0..=8)
pub fn live_neighbor_count(live: &LiveSet, c: Coord) -> u8 {
    neighbors(c).filter(|&n| live.contains(n)).count() as u8
}

/// Whether `c` is alive in the generation after `live`.
pub fn next_state(live: &LiveSet, c: Coord) -> bool {
    Cell::at(live, c).next(live_neighbor_count(live, c)).is_alive()
}
