//! Parsing command-line arguments.

use std::ffi::OsString;

use clap::{Arg, ArgAction, ArgMatches, Command, command, value_parser};

/// Raw command-line settings. Pattern, mode and delay stay as strings so
/// they go through the same fallback parsing as interactive answers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub pattern: Option<String>,
    pub mode: Option<String>,
    pub delay: Option<String>,
    pub generations: Option<u64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub origin_x: i64,
    pub origin_y: i64,
    pub parallel: bool,
    pub seed: Option<u64>,
    pub no_clear: bool,
    pub verbosity: u8,
}

impl Args {
    pub fn command() -> Command {
        command!()
            .long_about(
                "Conway's Game of Life on an unbounded plane\n\
                 \n\
                 Live cells are drawn as `#`, dead cells as `.`. Only the \
                 viewport is drawn; the pattern itself is never clipped.\n\
                 Any of --pattern, --mode and --delay left out is asked for \
                 interactively.",
            )
            .arg(
                Arg::new("pattern")
                    .help("Demo to run (1-6); anything else runs the glider")
                    .short('p')
                    .long("pattern")
                    .value_name("CHOICE"),
            )
            .arg(
                Arg::new("mode")
                    .help("`a` stops after the generation count, `b` runs until interrupted")
                    .short('m')
                    .long("mode")
                    .value_name("a|b"),
            )
            .arg(
                Arg::new("delay")
                    .help("Milliseconds per generation (50-1000, default 200)")
                    .short('d')
                    .long("delay")
                    .value_name("MS"),
            )
            .arg(
                Arg::new("generations")
                    .help("Override the demo's generation count in limited mode")
                    .short('g')
                    .long("generations")
                    .value_name("N")
                    .value_parser(value_parser!(u64).range(1..)),
            )
            .arg(
                Arg::new("width")
                    .help("Viewport width in cells")
                    .long("width")
                    .value_parser(value_parser!(u32).range(1..)),
            )
            .arg(
                Arg::new("height")
                    .help("Viewport height in cells")
                    .long("height")
                    .value_parser(value_parser!(u32).range(1..)),
            )
            .arg(
                Arg::new("origin-x")
                    .help("Leftmost column shown")
                    .long("origin-x")
                    .allow_negative_numbers(true)
                    .value_parser(value_parser!(i64))
                    .default_value("0"),
            )
            .arg(
                Arg::new("origin-y")
                    .help("Topmost row shown")
                    .long("origin-y")
                    .allow_negative_numbers(true)
                    .value_parser(value_parser!(i64))
                    .default_value("0"),
            )
            .arg(
                Arg::new("parallel")
                    .help("Evaluate each generation on all cores")
                    .long("parallel")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("seed")
                    .help("Seed for the random soup demo")
                    .long("seed")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("no-clear")
                    .help("Print frames one after another instead of redrawing")
                    .long("no-clear")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("verbose")
                    .help("Log more to stderr (repeat for more)")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::Count),
            )
    }

    /// Parses the process arguments, exiting with usage on error.
    pub fn parse() -> Self {
        Self::from_matches(&Self::command().get_matches())
    }

    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::from_matches(&Self::command().try_get_matches_from(args)?))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            pattern: matches.get_one::<String>("pattern").cloned(),
            mode: matches.get_one::<String>("mode").cloned(),
            delay: matches.get_one::<String>("delay").cloned(),
            generations: matches.get_one::<u64>("generations").copied(),
            width: matches.get_one::<u32>("width").copied(),
            height: matches.get_one::<u32>("height").copied(),
            origin_x: matches.get_one::<i64>("origin-x").copied().unwrap_or(0),
            origin_y: matches.get_one::<i64>("origin-y").copied().unwrap_or(0),
            parallel: matches.get_flag("parallel"),
            seed: matches.get_one::<u64>("seed").copied(),
            no_clear: matches.get_flag("no-clear"),
            verbosity: matches.get_count("verbose"),
        }
    }
}
