use equate_diagnostic::Diagnostic;
use equate_ir::{Expr, SourceFile};
use pretty_assertions::assert_eq;

use super::*;
use crate::EquatableMacro;

fn parse(source: &str) -> SourceFile {
    let lexed = equate_lexer::lex(source);
    let parsed = equate_parse::parse(source, &lexed.tokens);
    assert!(parsed.errors.is_empty(), "parse errors: {:?}", parsed.errors);
    parsed.file
}

fn expand(source: &str, registry: &MacroRegistry) -> (FileExpansion, Vec<Diagnostic>) {
    let file = parse(source);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let expansion = expand_file(&file, registry, &ExclusionConfig::default(), &mut diagnostics);
    (expansion, diagnostics)
}

fn slices<'a>(source: &'a str, spans: &[Span]) -> Vec<&'a str> {
    spans.iter().filter_map(|span| span.slice(source)).collect()
}

#[test]
fn expands_top_level_struct_and_consumes_markers() {
    let source = "@Equatable\nstruct Item {\n    let id: Int\n    @SkipEquatable let cache: [Int]\n}\n";
    let (expansion, diagnostics) = expand(source, &MacroRegistry::new());

    assert!(diagnostics.is_empty());
    assert_eq!(
        slices(source, &expansion.consumed_attributes),
        vec!["@Equatable", "@SkipEquatable"]
    );
    assert_eq!(expansion.expansions.len(), 1);
    let generated = &expansion.expansions[0].generated[0];
    assert_eq!(generated.extended_type, "Item");
    assert_eq!(generated.function.body, Expr::field_eq("id"));
    let anchor = expansion.expansions[0].anchor;
    assert_eq!(anchor.slice(source).map(|s| s.ends_with('}')), Some(true));
}

#[test]
fn unregistered_attributes_are_left_alone() {
    let source = "@equatable\nstruct Item {\n    @SkipEquatable let id: Int\n}\n";
    let mut registry = MacroRegistry::empty();
    registry.alias("equatable", "Equatable");
    let (expansion, _) = expand(source, &registry);

    assert_eq!(slices(source, &expansion.consumed_attributes), vec!["@equatable"]);
    // The marker isn't registered, but the classifier still honours it.
    assert_eq!(expansion.generated().count(), 0);
}

#[test]
fn rejected_declaration_is_reported_once() {
    let source = "@Equatable\nclass Model {\n    var id = 0\n}\n";
    let (expansion, diagnostics) = expand(source, &MacroRegistry::new());
    assert!(expansion.expansions.is_empty());
    assert_eq!(expansion.consumed_attributes.len(), 1);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].is_error());
}

#[test]
fn nested_extension_macros_are_not_expanded() {
    let source = "struct Outer {\n    @Equatable\n    struct Inner {\n        let x: Int\n    }\n}\n";
    let (expansion, diagnostics) = expand(source, &MacroRegistry::new());
    assert!(expansion.is_empty());
    assert!(diagnostics.is_empty());
}

#[test]
fn multiple_declarations_keep_source_order() {
    let source = "@Equatable\nstruct A {\n    let a: Int\n}\n\nstruct Plain {}\n\n@Equatable\npublic struct B {\n    let b: Int\n}\n";
    let (expansion, _) = expand(source, &MacroRegistry::new());
    let names: Vec<_> = expansion
        .generated()
        .map(|g| g.extended_type.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B"]);
    assert!(expansion.expansions[0].anchor.end < expansion.expansions[1].anchor.start);
}

#[test]
fn empty_struct_consumes_attribute_without_output() {
    let source = "@Equatable\nstruct Marker {\n    static let shared = Marker()\n}\n";
    let (expansion, diagnostics) = expand(source, &MacroRegistry::new());
    assert!(expansion.expansions.is_empty());
    assert_eq!(expansion.consumed_attributes.len(), 1);
    assert!(diagnostics.is_empty());
}

#[test]
fn custom_registration() {
    static EQ: EquatableMacro = EquatableMacro;
    let mut registry = MacroRegistry::empty();
    registry.register(&EQ);
    let source = "@Equatable struct P { var x = 1 }\n";
    let (expansion, _) = expand(source, &registry);
    assert_eq!(expansion.generated().count(), 1);
}
