use super::{Coord, LiveSet};

/// What one coordinate looks like in a `LiveSet` snapshot.
/// The set stores only membership; this is the two-valued view the
/// B3/S23 transition is written against.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    /// Read `c` out of a snapshot: alive exactly when it is a member
    pub fn at(live: &LiveSet, c: Coord) -> Self {
        if live.contains(c) { Cell::Alive } else { Cell::Dead }
    }

    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// B3/S23: born on 3 live neighbors, survives on 2 or 3.
    /// Total over every count; anything above 8 cannot occur and dies.
    pub const fn next(self, live_neighbors: u8) -> Self {
        match (self, live_neighbors) {
            (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
