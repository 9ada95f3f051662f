//! The `expand` command: print expanded source for each file.

use super::{read_files, report, report_summary, Counts};
use crate::{expand_sources, EmitMode, ExpandOptions};

/// Expand `paths` and print the result to stdout, in argument order.
///
/// Exits with status 1 if any file produced an error.
pub fn expand_files(paths: &[String], options: &ExpandOptions) {
    let sources = read_files(paths);
    let results = expand_sources(&sources, options);

    let mut totals = Counts::default();
    let several = sources.len() > 1;
    for ((path, source), result) in sources.iter().zip(&results) {
        let counts = report(path, source, &result.diagnostics, options.color);
        totals.errors += counts.errors;
        totals.warnings += counts.warnings;

        let text = match options.emit {
            EmitMode::Source => &result.output,
            EmitMode::Extensions => &result.extensions,
        };
        if several {
            println!("// {path}");
        }
        print!("{text}");
        if several && !text.ends_with('\n') {
            println!();
        }
    }

    report_summary(totals, options.color);
    if totals.errors > 0 {
        std::process::exit(1);
    }
}
