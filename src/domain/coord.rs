/// A cell position on the unbounded plane.
/// `x` grows to the right and `y` grows downward, matching row-major display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Shift by `(dx, dy)`, wrapping at the `i64` extremes.
    /// Used to translate and anchor whole patterns; the rule itself goes
    /// through [`Coord::checked_offset`].
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Shift by `(dx, dy)`, or `None` if the result falls off the plane.
    pub const fn checked_offset(self, dx: i64, dy: i64) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// Chebyshev (king-move) distance.
    pub fn chebyshev(self, other: Coord) -> u64 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}
