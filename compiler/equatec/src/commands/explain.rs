//! The `explain` command: display documentation for error codes.

use equate_diagnostic::{ErrorCode, ErrorDocs};

/// Display detailed documentation for a given error code string.
pub fn explain_error(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Known codes:");
        for (phase, codes) in codes_by_phase() {
            eprintln!("  {phase:<10} {}", codes.join(", "));
        }
        std::process::exit(1);
    };

    if let Some(doc) = ErrorDocs::get(code) {
        println!("{doc}");
    } else {
        eprintln!("No documentation available for {code_str}");
        std::process::exit(1);
    }
}

fn phase(code: ErrorCode) -> &'static str {
    if code.is_lexer_error() {
        "lexer"
    } else if code.is_parser_error() {
        "parser"
    } else if code.is_expansion_error() {
        "expansion"
    } else if code.is_internal_error() {
        "internal"
    } else {
        "other"
    }
}

/// Documented codes grouped by phase, in code order.
fn codes_by_phase() -> Vec<(&'static str, Vec<&'static str>)> {
    let mut groups: Vec<(&'static str, Vec<&'static str>)> = Vec::new();
    for code in ErrorDocs::all_codes() {
        let phase = phase(code);
        match groups.last_mut() {
            Some((last, codes)) if *last == phase => codes.push(code.as_str()),
            _ => groups.push((phase, vec![code.as_str()])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn codes_are_grouped_by_phase() {
        assert_eq!(
            codes_by_phase(),
            vec![
                ("lexer", vec!["E0001", "E0002", "E0003"]),
                ("parser", vec!["E1001", "E1002", "E1003", "E1004"]),
                ("expansion", vec!["E2001", "E2002"]),
                ("internal", vec!["E9001"]),
            ]
        );
    }
}
