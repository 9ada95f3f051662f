//! Command handlers for the `equatec` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading
//! files and reporting diagnostics live here.

use std::io::IsTerminal;

use equate_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use equate_diagnostic::{Diagnostic, DiagnosticQueue};

mod check;
mod debug;
mod expand;
mod explain;

pub use check::check_files;
pub use debug::{lex_file, parse_file};
pub use expand::expand_files;
pub use explain::explain_error;

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("cannot read '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

/// Read every file, exiting on the first one that can't be read.
pub(crate) fn read_files(paths: &[String]) -> Vec<(String, String)> {
    paths
        .iter()
        .map(|path| (path.clone(), read_file(path)))
        .collect()
}

/// Error and warning totals across a run.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Counts {
    pub errors: usize,
    pub warnings: usize,
}

/// Print `diagnostics` for one file to stderr, in source order.
///
/// Diagnostics pass through a [`DiagnosticQueue`], so duplicates are
/// dropped and errors past the limit are not shown. Returns what was shown.
pub(crate) fn report(
    path: &str,
    source: &str,
    diagnostics: &[Diagnostic],
    color: ColorMode,
) -> Counts {
    let mut queue = DiagnosticQueue::new();
    for diagnostic in diagnostics {
        queue.add(diagnostic.clone());
    }
    let counts = Counts {
        errors: queue.error_count(),
        warnings: queue.warning_count(),
    };
    if queue.is_empty() {
        return counts;
    }
    let mut emitter = TerminalEmitter::stderr(color, std::io::stderr().is_terminal())
        .with_source(path, source);
    emitter.emit_all(&queue.flush());
    emitter.flush();
    counts
}

/// Print the error/warning summary for a whole run.
pub(crate) fn report_summary(counts: Counts, color: ColorMode) {
    if counts.errors == 0 && counts.warnings == 0 {
        return;
    }
    let mut emitter = TerminalEmitter::stderr(color, std::io::stderr().is_terminal());
    emitter.emit_summary(counts.errors, counts.warnings);
    emitter.flush();
}
