use equate_diagnostic::{ErrorCode, Severity};
use equate_ir::{EqualityFunction, Expr};
use pretty_assertions::assert_eq;

use super::*;

fn run(source: &str) -> SourceExpansion {
    expand_source(source, &MacroRegistry::new(), &ExclusionConfig::default())
}

#[test]
fn expands_and_splices() {
    let result = run("@Equatable\nstruct P {\n    let x: Int\n}\n");
    assert!(!result.has_errors());
    assert_eq!(result.generated_count(), 1);
    assert_eq!(
        result.output,
        "struct P {\n    let x: Int\n}\n\nextension P: Equatable {\n    static func ==(lhs: P, rhs: P) -> Bool {\n        return lhs.x == rhs.x\n    }\n}\n"
    );
    assert!(result.output.ends_with(&result.extensions));
}

#[test]
fn front_end_errors_stop_expansion() {
    let source = "@Equatable\nstruct P {\n    let x: Int\n";
    let result = run(source);
    assert!(result.has_errors());
    assert_eq!(result.output, source);
    assert!(result.expansion.is_empty());
    assert!(result.diagnostics.iter().all(|d| d.code.is_parser_error()));
    assert!(result.failed_to_parse());
}

#[test]
fn lex_errors_stop_expansion() {
    let source = "@Equatable\nstruct P {\n    let x = \"open\n}\n";
    let result = run(source);
    assert!(result.has_errors());
    assert_eq!(result.diagnostics[0].code, ErrorCode::E0002);
    assert!(result.failed_to_parse());
    assert_eq!(result.output, source);
}

#[test]
fn expansion_warnings_do_not_block_output() {
    let result = run("@Equatable\nstruct P {\n    let (a, b) = (1, 2)\n    let c: Int\n}");
    assert!(!result.has_errors());
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].severity, Severity::Warning);
    assert_eq!(result.generated_count(), 1);
    assert!(!result.failed_to_parse());
}

#[test]
fn round_trip_accepts_printed_output() {
    let generated = GeneratedDeclaration::equatable(
        "Options",
        EqualityFunction {
            visibility: None,
            operand_type: "Options".to_string(),
            body: Expr::conjunction([Expr::field_eq("default"), Expr::field_eq("in")])
                .unwrap_or_else(|| Expr::field_eq("default")),
        },
    );
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    assert!(round_trips(&generated, Span::DUMMY, &mut diagnostics));
    assert!(diagnostics.is_empty());
}

#[test]
fn round_trip_rejects_unparseable_output() {
    let generated = GeneratedDeclaration::equatable(
        "Broken",
        EqualityFunction {
            visibility: None,
            operand_type: "Broken".to_string(),
            body: Expr::field_eq("x"),
        },
    );
    let mut renamed = generated.clone();
    renamed.extended_type = "Broken {".to_string();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    assert!(!round_trips(&renamed, Span::new(0, 4), &mut diagnostics));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E9001);
    assert_eq!(diagnostics[0].message, "failed to build extension");
}

#[test]
fn sources_keep_input_order() {
    let sources: Vec<(String, String)> = (0..8)
        .map(|i| {
            (
                format!("file{i}.swift"),
                format!("@Equatable\nstruct T{i} {{\n    let v{i}: Int\n}}\n"),
            )
        })
        .collect();
    for parallel in [true, false] {
        let options = ExpandOptions {
            parallel,
            ..ExpandOptions::default()
        };
        let results = expand_sources(&sources, &options);
        let names: Vec<_> = results
            .iter()
            .flat_map(|r| r.expansion.generated().map(|g| g.extended_type.clone()))
            .collect();
        let expected: Vec<_> = (0..8).map(|i| format!("T{i}")).collect();
        assert_eq!(names, expected);
    }
}
