//! Report printing for extraction runs.
//!
//! Kept apart from `core` so the pipeline can be used as a library without
//! printing side effects.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{NameCollision, RunResult};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the outcome of a run to stdout.
pub fn print_result(result: &RunResult, verbose: bool) {
    print_result_to(result, &mut io::stdout().lock());
    print_skipped_warning_to(result.skipped_count, verbose, &mut io::stderr().lock());
}

/// Print the outcome of a run to a custom writer.
pub fn print_result_to<W: Write>(result: &RunResult, writer: &mut W) {
    if let Some(collision) = &result.collision {
        print_collision_to(collision, writer);
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            "Name collision found - no files written".red()
        );
        return;
    }

    for output in &result.outputs {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Wrote {} {} to {}",
                output.record_count,
                if output.record_count == 1 {
                    "record"
                } else {
                    "records"
                },
                output.path.display()
            )
            .green()
        );
    }
}

/// Print a collision with every path that declares the colliding name.
pub fn print_collision_to<W: Write>(collision: &NameCollision, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: Name collision detected on \"{}\"  {}",
        "error".bold().red(),
        collision.name,
        collision.output.dimmed().cyan()
    );
    for path in &collision.paths {
        let _ = writeln!(writer, "  {} Used in {}", "-->".blue(), path);
    }
}

/// Print a warning about entries that could not be read while scanning.
///
/// Verbose runs already reported each entry as it was skipped.
pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}
