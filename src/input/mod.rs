//! Operator input: prompts, and lenient parsing that falls back to defaults
//! instead of failing.

mod args;

pub use args::Args;

use std::io::{self, BufRead, Write};
use std::time::Duration;

use log::{info, warn};

use crate::application::{Demo, RunMode, Settings, config};
use crate::domain::{Algorithm, Coord};
use crate::ui;

/// Print `prompt` and read one trimmed line. End of input reads as empty.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Resolve a menu selector, `None` if it names no demo
pub fn parse_demo(choice: &str) -> Option<Demo> {
    Demo::from_selector(choice.trim())
}

/// `b` (either case) selects infinite mode; anything else is limited
pub fn parse_mode(choice: &str) -> RunMode {
    if choice.trim().eq_ignore_ascii_case("b") {
        RunMode::Infinite
    } else {
        RunMode::Limited
    }
}

/// Empty or non-numeric input gives the default delay; numbers are clamped
/// to the allowed range.
pub fn parse_delay(choice: &str) -> Duration {
    let choice = choice.trim();
    let ms = if choice.is_empty() {
        config::DEFAULT_DELAY_MS
    } else {
        match choice.parse::<u64>() {
            Ok(ms) => ms.clamp(config::MIN_DELAY_MS, config::MAX_DELAY_MS),
            Err(e) => {
                warn!("ignoring delay {:?} ({}), using {}ms", choice, e, config::DEFAULT_DELAY_MS);
                config::DEFAULT_DELAY_MS
            }
        }
    };
    Duration::from_millis(ms)
}

/// Build the run settings from the command line, prompting on `input` for
/// pattern, mode and delay when they were not given.
pub fn resolve_settings<R: BufRead, W: Write>(
    args: &Args,
    input: &mut R,
    output: &mut W,
) -> io::Result<Settings> {
    if args.pattern.is_none() || args.mode.is_none() || args.delay.is_none() {
        writeln!(output, "{}", ui::menu())?;
    }

    let pattern = match &args.pattern {
        Some(p) => p.clone(),
        None => prompt(input, output, ui::PATTERN_PROMPT)?,
    };
    let mode = match &args.mode {
        Some(m) => m.clone(),
        None => prompt(input, output, ui::MODE_PROMPT)?,
    };
    let delay = match &args.delay {
        Some(d) => d.clone(),
        None => prompt(input, output, &ui::delay_prompt())?,
    };

    let demo = match parse_demo(&pattern) {
        Some(demo) => demo,
        None => {
            warn!("unknown pattern choice {:?}, falling back to {:?}", pattern, Demo::default());
            writeln!(output, "Invalid choice. Running glider demo...")?;
            Demo::default()
        }
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    if demo == Demo::Soup {
        info!("random soup seed {}", seed);
    }

    Ok(Settings {
        demo,
        mode: parse_mode(&mode),
        delay: parse_delay(&delay),
        algorithm: if args.parallel { Algorithm::Parallel } else { Algorithm::Serial },
        generations: args.generations,
        width: args.width,
        height: args.height,
        origin: Coord::new(args.origin_x, args.origin_y),
        seed,
        clear_screen: !args.no_clear,
    })
}
