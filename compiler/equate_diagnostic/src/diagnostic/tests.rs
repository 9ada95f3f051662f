use super::*;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("test error")
        .with_label(Span::new(0, 5), "here")
        .with_secondary_label(Span::new(8, 9), "context")
        .with_note("some context")
        .with_suggestion("try this");

    assert_eq!(diag.code, ErrorCode::E2001);
    assert_eq!(diag.message, "test error");
    assert!(diag.is_error());
    assert!(!diag.is_warning());
    assert_eq!(diag.labels.len(), 2);
    assert!(diag.labels[0].is_primary);
    assert!(!diag.labels[1].is_primary);
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_primary_span_skips_secondary_labels() {
    let diag = Diagnostic::warning(ErrorCode::E2002)
        .with_secondary_label(Span::new(1, 2), "context")
        .with_label(Span::new(10, 15), "here");
    assert_eq!(diag.primary_span(), Some(Span::new(10, 15)));
    assert!(diag.is_warning());
}

#[test]
fn test_primary_span_none_without_labels() {
    let diag = Diagnostic::error(ErrorCode::E9001).with_message("failed to build extension");
    assert_eq!(diag.primary_span(), None);
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("unexpected token")
        .with_label(Span::new(0, 5), "here")
        .with_note("while parsing a struct");

    let output = diag.to_string();
    assert!(output.starts_with("error[E1001]: unexpected token"));
    assert!(output.contains("0..5: here"));
    assert!(output.contains("note: while parsing a struct"));
}
