use crate::domain::Coord;

/// Viewport is the finite window of the plane that gets rendered.
/// Live cells outside it keep evolving; they just aren't drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Top-left cell of the window
    pub origin: Coord,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            origin: Coord::default(),
            width,
            height,
        }
    }

    pub fn with_origin(mut self, origin: Coord) -> Self {
        self.origin = origin;
        self
    }

    pub fn contains(&self, c: Coord) -> bool {
        let inside = |v: i64, start: i64, len: u32| {
            v.checked_sub(start).is_some_and(|d| (0..len as i64).contains(&d))
        };
        inside(c.x, self.origin.x, self.width) && inside(c.y, self.origin.y, self.height)
    }

    /// Column and row of `c` inside the window, if it is visible
    pub fn cell_offset(&self, c: Coord) -> Option<(usize, usize)> {
        self.contains(c).then(|| {
            ((c.x - self.origin.x) as usize, (c.y - self.origin.y) as usize)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_half_open() {
        let v = Viewport::new(3, 2);
        assert!(v.contains(Coord::new(0, 0)));
        assert!(v.contains(Coord::new(2, 1)));
        assert!(!v.contains(Coord::new(3, 1)));
        assert!(!v.contains(Coord::new(2, 2)));
        assert!(!v.contains(Coord::new(-1, 0)));
    }

    #[test]
    fn test_cell_offset_is_relative_to_origin() {
        let v = Viewport::new(3, 2).with_origin(Coord::new(5, -1));
        assert_eq!(v.cell_offset(Coord::new(5, -1)), Some((0, 0)));
        assert_eq!(v.cell_offset(Coord::new(7, 0)), Some((2, 1)));
        assert_eq!(v.cell_offset(Coord::new(4, 0)), None);
    }

    #[test]
    fn test_far_cells_are_not_visible() {
        let v = Viewport::new(4, 4).with_origin(Coord::new(-2, 0));
        assert!(!v.contains(Coord::new(i64::MAX, 0)));
        assert!(!v.contains(Coord::new(0, i64::MIN)));
    }

    #[test]
    fn test_empty_viewport() {
        let v = Viewport::new(0, 0);
        assert!(!v.contains(Coord::new(0, 0)));
    }
}
