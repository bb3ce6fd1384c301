use std::collections::HashSet;
use std::collections::hash_set;

use super::Coord;

/// LiveSet is the whole state of the automaton: the set of live coordinates.
/// Absence means dead. Generations are separate values; stepping never
/// mutates an existing set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiveSet {
    cells: HashSet<Coord>,
}

impl LiveSet {
    /// Create an empty set (every cell dead)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.cells.contains(&c)
    }

    /// Number of live cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over live coordinates in unspecified order
    pub fn iter(&self) -> hash_set::Iter<'_, Coord> {
        self.cells.iter()
    }

    /// A copy of this set with every coordinate shifted by `(dx, dy)`
    pub fn translate(&self, dx: i64, dy: i64) -> Self {
        self.cells.iter().map(|c| c.offset(dx, dy)).collect()
    }

    /// Set union; duplicates collapse to a single entry
    pub fn union(&self, other: &LiveSet) -> Self {
        self.cells.union(&other.cells).copied().collect()
    }

    /// Smallest rectangle holding every live cell, as (top-left, bottom-right)
    /// inclusive corners. `None` when empty.
    pub fn bounding_box(&self) -> Option<(Coord, Coord)> {
        let mut iter = self.cells.iter();
        let first = *iter.next()?;
        Some(iter.fold((first, first), |(min, max), c| {
            (
                Coord::new(min.x.min(c.x), min.y.min(c.y)),
                Coord::new(max.x.max(c.x), max.y.max(c.y)),
            )
        }))
    }
}

impl FromIterator<Coord> for LiveSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(i64, i64)> for LiveSet {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        iter.into_iter().map(Coord::from).collect()
    }
}

impl From<HashSet<Coord>> for LiveSet {
    fn from(cells: HashSet<Coord>) -> Self {
        Self { cells }
    }
}

impl<'a> IntoIterator for &'a LiveSet {
    type Item = &'a Coord;
    type IntoIter = hash_set::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for LiveSet {
    type Item = Coord;
    type IntoIter = hash_set::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
