//! Program-boundary termination for user-facing applications.

use std::io::{self, Write};
use std::process;

use chrono::Utc;

use crate::fault::Fault;
use crate::render;

/// Terminate the process after an unrecoverable error.
///
/// A structured report prints a timestamped banner followed by its indented
/// JSON rendering, then exits with status 1. A foreign error that was never
/// masked is re-raised raw instead. Meant for program entry points:
///
/// ```no_run
/// use faultline::Fault;
///
/// fn run() -> Result<(), Fault> {
///     // ...
///     Ok(())
/// }
///
/// fn main() {
///     if let Err(err) = run() {
///         faultline::fatal(err.mask());
///     }
/// }
/// ```
pub fn fatal(err: Fault) -> ! {
    if matches!(err, Fault::Opaque(_)) {
        panic!("{err}");
    }

    tracing::error!(error = %err, "program terminating after unrecoverable error");

    let mut stdout = io::stdout().lock();
    let _ = write_banner(&mut stdout, &err);
    let _ = stdout.flush();

    process::exit(1);
}

pub(crate) fn write_banner(out: &mut impl Write, err: &Fault) -> io::Result<()> {
    writeln!(out, "program panic at {}", Utc::now())?;
    writeln!(out)?;
    for line in render::json_pretty(Some(err)).lines() {
        writeln!(out, "    {line}")?;
    }
    writeln!(out)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests unwrap for brevity")]
mod tests;
