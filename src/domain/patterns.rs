use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{Coord, LiveSet};

/// A named seed configuration, stored relative to its top-left corner
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: i64,
    pub height: i64,
    pub cells: Vec<(i64, i64)>,
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i64, i64)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().map_or(0, |x| x + 1);
        let height = cells.iter().map(|(_, y)| *y).max().map_or(0, |y| y + 1);
        Self { name, description, width, height, cells }
    }

    /// The pattern's live cells with its top-left corner anchored at `(x, y)`
    pub fn at(&self, x: i64, y: i64) -> LiveSet {
        let anchor = Coord::new(x, y);
        self.cells
            .iter()
            .map(|&(dx, dy)| anchor.offset(dx, dy))
            .collect()
    }
}

/// Union of any number of live sets. Overlapping cells appear once.
pub fn merge<'a, I>(sets: I) -> LiveSet
where
    I: IntoIterator<Item = &'a LiveSet>,
{
    sets.into_iter().flatten().copied().collect()
}

/// A `width` x `height` rectangle of random cells anchored at `(x, y)`.
/// Each cell is alive with probability `density` (clamped to 0..=1).
/// The same seed always yields the same soup.
pub fn random_soup(x: i64, y: i64, width: u32, height: u32, density: f64, seed: u64) -> LiveSet {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut rng = StdRng::seed_from_u64(seed);
    let anchor = Coord::new(x, y);
    (0..height as i64)
        .flat_map(|dy| (0..width as i64).map(move |dx| (dx, dy)))
        .filter(|_| rng.random_bool(density))
        .map(|(dx, dy)| anchor.offset(dx, dy))
        .collect()
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Block - 4-cell still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    /// Blinker - horizontal line of three, period 2
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (1, 0), (2, 0)]
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ]
        )
    }

    pub fn pulsar() -> Pattern {
        Pattern::new(
            "Pulsar",
            "Oscillator (period 3)",
            vec![
                // Top
                (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
                // Upper middle
                (0, 2), (5, 2), (7, 2), (12, 2),
                (0, 3), (5, 3), (7, 3), (12, 3),
                (0, 4), (5, 4), (7, 4), (12, 4),
                // Center
                (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
                (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
                // Lower middle
                (0, 8), (5, 8), (7, 8), (12, 8),
                (0, 9), (5, 9), (7, 9), (12, 9),
                (0, 10), (5, 10), (7, 10), (12, 10),
                // Bottom
                (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
            ]
        )
    }

    /// Glider - moves one cell down and right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// Lightweight Spaceship (LWSS), moves two cells left every 4 generations
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ]
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ]
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (1, 0),
                (3, 1),
                (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
            ]
        )
    }

    /// Gosper Glider Gun - emits a glider every 30 generations, forever
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                // Left square
                (0, 4), (0, 5),
                (1, 4), (1, 5),

                // Left circle
                (10, 4), (10, 5), (10, 6),
                (11, 3), (11, 7),
                (12, 2), (12, 8),
                (13, 2), (13, 8),
                (14, 5),
                (15, 3), (15, 7),
                (16, 4), (16, 5), (16, 6),
                (17, 5),

                // Middle pieces
                (20, 2), (20, 3), (20, 4),
                (21, 2), (21, 3), (21, 4),
                (22, 1), (22, 5),
                (24, 0), (24, 1), (24, 5), (24, 6),

                // Right square
                (34, 2), (34, 3),
                (35, 2), (35, 3),
            ]
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            glider(),
            lwss(),
            r_pentomino(),
            acorn(),
            glider_gun(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::presets::*;
    use super::*;
    use crate::domain::step::{advance, advance_by};
    use proptest::prelude::*;

    #[test]
    fn test_cell_counts() {
        assert_eq!(block().at(0, 0).len(), 4);
        assert_eq!(blinker().at(0, 0).len(), 3);
        assert_eq!(toad().at(0, 0).len(), 6);
        assert_eq!(glider().at(0, 0).len(), 5);
        assert_eq!(r_pentomino().at(0, 0).len(), 5);
        assert_eq!(glider_gun().at(0, 0).len(), 36);
    }

    #[test]
    fn test_dimensions() {
        let gun = glider_gun();
        assert_eq!((gun.width, gun.height), (36, 9));
        assert_eq!((glider().width, glider().height), (3, 3));
        let empty = Pattern::new("Empty", "", vec![]);
        assert_eq!((empty.width, empty.height), (0, 0));
    }

    #[test]
    fn test_anchor_offsets_cells() {
        let b = block().at(40, 18);
        assert!(b.contains(Coord::new(40, 18)));
        assert!(b.contains(Coord::new(41, 19)));
        assert_eq!(b, block().at(0, 0).translate(40, 18));
    }

    #[test]
    fn test_still_life() {
        let b = block().at(7, -2);
        assert_eq!(advance(&b), b);
    }

    #[test]
    fn test_period_two_oscillators() {
        for pattern in [blinker(), toad(), beacon()] {
            let p = pattern.at(3, 4);
            assert_ne!(advance(&p), p, "{}", pattern.name);
            assert_eq!(advance_by(&p, 2), p, "{}", pattern.name);
        }
    }

    #[test]
    fn test_pulsar_period_three() {
        let p = pulsar().at(0, 0);
        assert_eq!(p.len(), 48);
        assert_ne!(advance(&p), p);
        assert_eq!(advance_by(&p, 3), p);
    }

    #[test]
    fn test_glider_moves_diagonally() {
        let g = glider().at(-8, 3);
        assert_eq!(advance_by(&g, 4), g.translate(1, 1));
    }

    #[test]
    fn test_lwss_moves_left() {
        let s = lwss().at(20, 5);
        assert_eq!(advance_by(&s, 4), s.translate(-2, 0));
    }

    #[test]
    fn test_r_pentomino_grows() {
        let r = r_pentomino().at(30, 15);
        let later = advance_by(&r, 50);
        assert!(later.len() > r.len());
        assert_ne!(advance(&later), later);
    }

    #[test]
    fn test_glider_gun_emits_gliders() {
        let gun = glider_gun().at(5, 10);
        let after_one_period = advance_by(&gun, 30);
        assert_eq!(after_one_period.len(), gun.len() + 5);
        assert!(gun.iter().all(|c| after_one_period.contains(*c)));

        let later = advance_by(&after_one_period, 270);
        assert_eq!(later.len(), 86);
    }

    #[test]
    fn test_merge_mixed_demo() {
        let mixed = merge(&[
            glider().at(5, 5),
            blinker().at(25, 12),
            block().at(40, 18),
            toad().at(15, 20),
        ]);
        assert_eq!(mixed.len(), 5 + 3 + 4 + 6);
    }

    #[test]
    fn test_merge_of_nothing_is_empty() {
        assert!(merge(&[] as &[LiveSet]).is_empty());
    }

    #[test]
    fn test_all_patterns_names_unique() {
        let names: Vec<_> = all_patterns().iter().map(|p| p.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_dimensions_match_anchored_bounds() {
        for pattern in all_patterns() {
            let (top_left, bottom_right) = pattern.at(10, -5).bounding_box().unwrap();
            assert_eq!(top_left, Coord::new(10, -5), "{}", pattern.name);
            assert_eq!(
                bottom_right,
                Coord::new(10 + pattern.width - 1, -5 + pattern.height - 1),
                "{}",
                pattern.name
            );
        }
    }

    #[test]
    fn test_soup_is_seeded() {
        let a = random_soup(0, 0, 30, 20, 0.3, 42);
        let b = random_soup(0, 0, 30, 20, 0.3, 42);
        assert_eq!(a, b);
        assert!(a.iter().all(|c| (0..30).contains(&c.x) && (0..20).contains(&c.y)));
    }

    #[test]
    fn test_soup_density_extremes() {
        assert!(random_soup(0, 0, 10, 10, 0.0, 1).is_empty());
        assert_eq!(random_soup(-5, -5, 10, 10, 1.0, 1).len(), 100);
        assert_eq!(random_soup(0, 0, 4, 4, 7.5, 1).len(), 16);
        assert!(random_soup(0, 0, 4, 4, f64::NAN, 1).is_empty());
    }

    fn arb_live_set() -> impl Strategy<Value = LiveSet> {
        prop::collection::vec((-20..20i64, -20..20i64), 0..50)
            .prop_map(|cells| cells.into_iter().collect::<LiveSet>())
    }

    proptest! {
        #[test]
        fn test_merge_is_union(a in arb_live_set(), b in arb_live_set()) {
            let merged = merge([&a, &b]);
            prop_assert!(merged.iter().all(|c| a.contains(*c) || b.contains(*c)));
            prop_assert!(a.iter().chain(b.iter()).all(|c| merged.contains(*c)));
            prop_assert_eq!(&merged, &merge([&b, &a]));
            prop_assert_eq!(merged, a.union(&b));
        }

        #[test]
        fn test_merge_idempotent(a in arb_live_set()) {
            prop_assert_eq!(merge([&a, &a]), a);
        }

        #[test]
        fn test_blinker_oscillates_anywhere(x in -1_000_000..1_000_000i64, y in -1_000_000..1_000_000i64) {
            let p = blinker().at(x, y);
            prop_assert_ne!(&advance(&p), &p);
            prop_assert_eq!(advance_by(&p, 2), p);
        }

        #[test]
        fn test_glider_translates_anywhere(x in -1_000_000..1_000_000i64, y in -1_000_000..1_000_000i64) {
            let g = glider().at(x, y);
            prop_assert_eq!(advance_by(&g, 4), g.translate(1, 1));
        }
    }
}
