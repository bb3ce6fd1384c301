//! Demo catalogue and run settings.
//!
//! Settings come from the command line, then interactive prompts, then the
//! defaults below. Nothing is read from or written to disk.

use std::time::Duration;

use crate::domain::{Algorithm, Coord, LiveSet, merge, presets, random_soup};

use super::Viewport;

pub const DEFAULT_DELAY_MS: u64 = 200;
pub const MIN_DELAY_MS: u64 = 50;
pub const MAX_DELAY_MS: u64 = 1000;

/// Fraction of live cells in the random soup demo
pub const SOUP_DENSITY: f64 = 0.3;

/// A seed pattern bundled with the viewport and generation count it is meant to be watched with
#[derive(Clone, Debug)]
pub struct PatternConfig {
    pub pattern: LiveSet,
    pub width: u32,
    pub height: u32,
    pub generations: u64,
}

impl PatternConfig {
    fn new(pattern: LiveSet, width: u32, height: u32, generations: u64) -> Self {
        Self { pattern, width, height, generations }
    }
}

/// The demos offered by the menu, in menu order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Demo {
    #[default]
    Glider,
    Oscillators,
    RPentomino,
    GliderGun,
    Mixed,
    Soup,
}

impl Demo {
    pub fn all() -> [Demo; 6] {
        [
            Demo::Glider,
            Demo::Oscillators,
            Demo::RPentomino,
            Demo::GliderGun,
            Demo::Mixed,
            Demo::Soup,
        ]
    }

    /// Menu key that selects this demo
    pub fn selector(self) -> &'static str {
        match self {
            Demo::Glider => "1",
            Demo::Oscillators => "2",
            Demo::RPentomino => "3",
            Demo::GliderGun => "4",
            Demo::Mixed => "5",
            Demo::Soup => "6",
        }
    }

    pub fn from_selector(selector: &str) -> Option<Demo> {
        Demo::all().into_iter().find(|d| d.selector() == selector)
    }

    pub fn title(self) -> &'static str {
        match self {
            Demo::Glider => "Glider (moves across screen)",
            Demo::Oscillators => "Oscillators (blinker and toad)",
            Demo::RPentomino => "R-pentomino (chaotic growth)",
            Demo::GliderGun => "Glider Gun (creates gliders)",
            Demo::Mixed => "Mixed patterns",
            Demo::Soup => "Random soup",
        }
    }

    /// Only the gun keeps producing new cells forever
    pub fn is_meant_to_run_forever(self) -> bool {
        self == Demo::GliderGun
    }

    /// Build the seed for this demo. `seed` only affects [`Demo::Soup`].
    pub fn config(self, seed: u64) -> PatternConfig {
        match self {
            Demo::Glider => PatternConfig::new(presets::glider().at(5, 5), 50, 25, 100),
            Demo::Oscillators => PatternConfig::new(
                merge(&[presets::blinker().at(10, 10), presets::toad().at(20, 10)]),
                40,
                20,
                50,
            ),
            Demo::RPentomino => PatternConfig::new(presets::r_pentomino().at(30, 15), 60, 30, 200),
            Demo::GliderGun => PatternConfig::new(presets::glider_gun().at(5, 10), 80, 40, 300),
            Demo::Mixed => PatternConfig::new(
                merge(&[
                    presets::glider().at(5, 5),
                    presets::blinker().at(25, 12),
                    presets::block().at(40, 18),
                    presets::toad().at(15, 20),
                ]),
                50,
                25,
                150,
            ),
            Demo::Soup => PatternConfig::new(random_soup(0, 0, 60, 30, SOUP_DENSITY, seed), 60, 30, 200),
        }
    }
}

/// Whether the driver stops after the demo's generation count
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Limited,
    Infinite,
}

/// Everything the driver loop needs, after fallbacks have been applied
#[derive(Clone, Debug)]
pub struct Settings {
    pub demo: Demo,
    pub mode: RunMode,
    pub delay: Duration,
    pub algorithm: Algorithm,
    /// Overrides the demo's generation count in limited mode
    pub generations: Option<u64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub origin: Coord,
    pub seed: u64,
    pub clear_screen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            demo: Demo::default(),
            mode: RunMode::default(),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            algorithm: Algorithm::default(),
            generations: None,
            width: None,
            height: None,
            origin: Coord::default(),
            seed: 0,
            clear_screen: true,
        }
    }
}

impl Settings {
    pub fn viewport(&self, config: &PatternConfig) -> Viewport {
        Viewport::new(
            self.width.unwrap_or(config.width),
            self.height.unwrap_or(config.height),
        )
        .with_origin(self.origin)
    }

    /// `None` means run until interrupted
    pub fn generation_limit(&self, config: &PatternConfig) -> Option<u64> {
        match self.mode {
            RunMode::Infinite => None,
            RunMode::Limited => Some(self.generations.unwrap_or(config.generations)),
        }
    }
}
