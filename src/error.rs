//! Errors of the terminal driver. The simulation core cannot fail.

use std::io::{self, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("could not initialise logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Write the one line a failed run ends with.
/// Goes straight to `out` rather than through `log`, since the logger
/// may be the thing that failed to start.
pub fn report<W: Write>(out: &mut W, err: &Error) -> io::Result<()> {
    writeln!(out, "error: {err}")
}
