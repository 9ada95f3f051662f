//! Expanded-source assembly.
//!
//! The expanded source is the original text with two kinds of edits:
//! consumed macro attributes are cut out, and each anchor's generated
//! declarations are inserted after it, separated by a blank line. Nothing
//! else in the original text changes.

use equate_expand::FileExpansion;
use equate_ir::Span;

use crate::printer::print_generated;

enum Edit {
    Remove(Span),
    Insert { at: usize, text: String },
}

impl Edit {
    fn position(&self) -> usize {
        match self {
            Edit::Remove(span) => span.to_range().start,
            Edit::Insert { at, .. } => *at,
        }
    }
}

/// Apply `expansion` to `source`.
///
/// An attribute alone on its line takes the whole line with it; otherwise
/// only the attribute and the blanks after it are removed.
pub fn splice(source: &str, expansion: &FileExpansion) -> String {
    let mut edits: Vec<Edit> = expansion
        .expansions
        .iter()
        .map(|expanded| {
            let newline = line_ending(source, expanded.anchor);
            Edit::Insert {
                at: expanded.anchor.to_range().end,
                text: expanded
                    .generated
                    .iter()
                    .map(|generated| {
                        let printed = print_generated(generated);
                        let printed = if newline == "\n" {
                            printed
                        } else {
                            printed.replace('\n', newline)
                        };
                        format!("{newline}{newline}{printed}")
                    })
                    .collect(),
            }
        })
        .collect();
    edits.extend(
        expansion
            .consumed_attributes
            .iter()
            .map(|span| Edit::Remove(*span)),
    );
    // Stable sort: an insertion goes before a removal at the same offset.
    edits.sort_by_key(Edit::position);

    let mut out = String::with_capacity(source.len() + 128 * expansion.expansions.len());
    let mut pos = 0;
    for edit in edits {
        match edit {
            Edit::Insert { at, text } => {
                let Some(before) = source.get(pos..at) else {
                    continue;
                };
                out.push_str(before);
                out.push_str(&text);
                pos = at;
            }
            Edit::Remove(span) => {
                let range = span.to_range();
                let Some(before) = source.get(pos..range.start) else {
                    continue;
                };
                out.push_str(before);
                pos = remove_attribute(source, range.end, &mut out);
            }
        }
    }
    out.push_str(source.get(pos..).unwrap_or_default());
    out
}

/// The line terminator used by the declaration at `anchor`: the first one
/// inside it, else the one ending its last line. `\n` when it has neither.
fn line_ending(source: &str, anchor: Span) -> &'static str {
    let start = anchor.to_range().start;
    let Some(rest) = source.get(start..) else {
        return "\n";
    };
    match rest.find('\n') {
        Some(i) if i > 0 && rest.as_bytes()[i - 1] == b'\r' => "\r\n",
        _ => "\n",
    }
}

/// Skip the blanks after an attribute ending at `end`. When the attribute
/// was the only thing on its line, also drop the line's indentation and
/// its newline. Returns the position to continue copying from.
fn remove_attribute(source: &str, end: usize, out: &mut String) -> usize {
    let rest = source.get(end..).unwrap_or_default();
    let blanks = rest.len() - rest.trim_start_matches([' ', '\t']).len();
    let after = end + blanks;
    let rest = &rest[blanks..];

    let newline_len = if rest.starts_with("\r\n") {
        2
    } else {
        usize::from(rest.starts_with('\n'))
    };
    let line_start = out.rfind('\n').map_or(0, |i| i + 1);
    let alone_on_line = out[line_start..].chars().all(|c| c == ' ' || c == '\t');
    if newline_len > 0 && alone_on_line {
        out.truncate(line_start);
        return after + newline_len;
    }
    after
}

/// Print every generated declaration of `expansion`, blank-line separated,
/// with a trailing newline. Empty when nothing was generated.
pub fn print_extensions(expansion: &FileExpansion) -> String {
    let mut out = String::new();
    for generated in expansion.generated() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&print_generated(generated));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests;
