use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use log::{LevelFilter, debug, info};
use simple_logger::SimpleLogger;
use sparse_life::{
    GameState, Result,
    application::RunMode,
    error,
    input::{self, Args},
    rendering::{self, FrameOptions},
    ui,
};

/// Pause between the settings summary and the first frame
const START_PAUSE: Duration = Duration::from_secs(1);

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        let _ = error::report(&mut io::stderr(), &err);
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new().with_level(level).env().init()?;
    Ok(())
}

fn run(args: Args) -> Result<()> {
    init_logging(args.verbosity)?;
    info!("Starting {} v{} ...", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let mut stdout = io::stdout();
    let settings = input::resolve_settings(&args, &mut io::stdin().lock(), &mut stdout)?;
    debug!("resolved settings: {:?}", settings);

    let config = settings.demo.config(settings.seed);
    let viewport = settings.viewport(&config);
    let limit = settings.generation_limit(&config);
    let mut state = GameState::new(config.pattern)
        .with_algorithm(settings.algorithm)
        .with_limit(limit);

    writeln!(stdout, "\nStarting simulation...\n")?;
    writeln!(stdout, "{}", ui::mode_banner(settings.mode))?;
    writeln!(stdout, "Speed: {}ms per generation", settings.delay.as_millis())?;
    stdout.flush()?;
    thread::sleep(START_PAUSE);

    let options = FrameOptions {
        clear_screen: settings.clear_screen,
        show_stop_hint: settings.mode == RunMode::Infinite,
    };
    info!(
        "running {:?} ({} cells) in a {}x{} viewport",
        settings.demo,
        state.population(),
        viewport.width,
        viewport.height
    );

    debug!(
        "stepping with {} ({})",
        settings.algorithm.name(),
        settings.algorithm.description()
    );
    if let Some((top_left, bottom_right)) = state.live.bounding_box() {
        debug!("seed spans {:?} to {:?}", top_left, bottom_right);
    }

    while !state.is_finished() {
        rendering::draw_frame(&mut stdout, &state, &viewport, options)?;
        thread::sleep(settings.delay);
        state = state.tick();
    }

    writeln!(stdout, "\nSimulation complete!")?;
    info!("stopped after {} generations", state.generation);
    Ok(())
}
