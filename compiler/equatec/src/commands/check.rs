//! The `check` command: expand without printing, report diagnostics.

use super::{read_files, report, report_summary, Counts};
use crate::{expand_sources, ExpandOptions};

/// Check `paths` and print a one-line result per file.
///
/// Exits with status 1 if any file produced an error.
pub fn check_files(paths: &[String], options: &ExpandOptions) {
    let sources = read_files(paths);
    let results = expand_sources(&sources, options);

    let mut totals = Counts::default();
    for ((path, source), result) in sources.iter().zip(&results) {
        let counts = report(path, source, &result.diagnostics, options.color);
        totals.errors += counts.errors;
        totals.warnings += counts.warnings;

        if result.failed_to_parse() {
            println!("SKIPPED: {path} (not expanded: syntax errors)");
        } else if counts.errors == 0 {
            let generated = result.generated_count();
            let plural = if generated == 1 { "" } else { "s" };
            println!("OK: {path} ({generated} extension{plural})");
        }
    }

    report_summary(totals, options.color);
    if totals.errors > 0 {
        std::process::exit(1);
    }
}
