use crate::application::{Demo, RunMode, config};

pub const TITLE: &str = "Conway's Game of Life";

pub const PATTERN_PROMPT: &str = "Enter pattern choice (1-6): ";
pub const MODE_PROMPT: &str = "Enter mode (a/b): ";

pub fn delay_prompt() -> String {
    format!(
        "Enter speed in ms ({}-{}, default {}): ",
        config::MIN_DELAY_MS,
        config::MAX_DELAY_MS,
        config::DEFAULT_DELAY_MS
    )
}

/// The startup menu listing demos and run modes
pub fn menu() -> String {
    let mut lines = vec![
        TITLE.to_string(),
        "=".repeat(TITLE.len()),
        String::new(),
        "Choose a demo:".to_string(),
    ];
    lines.extend(Demo::all().into_iter().map(|demo| {
        let suffix = if demo.is_meant_to_run_forever() { " - INFINITE" } else { "" };
        format!("{}. {}{}", demo.selector(), demo.title(), suffix)
    }));
    lines.extend([
        String::new(),
        "Run mode:".to_string(),
        "a. Limited generations (stops automatically)".to_string(),
        "b. Infinite mode (run forever, press Ctrl+C to stop)".to_string(),
        String::new(),
    ]);
    lines.join("\n")
}

pub fn mode_banner(mode: RunMode) -> &'static str {
    match mode {
        RunMode::Infinite => "INFINITE MODE - Press Ctrl+C to stop",
        RunMode::Limited => "LIMITED MODE - Will stop automatically",
    }
}
