use equate_diagnostic::Diagnostic;
use equate_expand::{expand_file, ExclusionConfig, FileExpansion, MacroRegistry};
use pretty_assertions::assert_eq;

use super::*;

fn expand(source: &str, registry: &MacroRegistry) -> FileExpansion {
    let lexed = equate_lexer::lex(source);
    let parsed = equate_parse::parse(source, &lexed.tokens);
    assert!(parsed.errors.is_empty(), "parse errors: {:?}", parsed.errors);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    expand_file(&parsed.file, registry, &ExclusionConfig::default(), &mut diagnostics)
}

#[test]
fn nothing_to_expand_is_identity() {
    let source = "struct Plain {\n    let x: Int\n}\n";
    let expansion = expand(source, &MacroRegistry::new());
    assert_eq!(splice(source, &expansion), source);
    assert_eq!(print_extensions(&expansion), "");
}

#[test]
fn removes_attribute_line_and_appends_extension() {
    let source = "@Equatable\nstruct Point {\n    let x: Int\n    let y: Int\n}\n";
    let expansion = expand(source, &MacroRegistry::new());
    assert_eq!(
        splice(source, &expansion),
        "struct Point {
    let x: Int
    let y: Int
}

extension Point: Equatable {
    static func ==(lhs: Point, rhs: Point) -> Bool {
        return lhs.x == rhs.x && lhs.y == rhs.y
    }
}
"
    );
}

#[test]
fn inline_markers_keep_the_rest_of_the_line() {
    let source = "@Equatable struct Item {\n    @SkipEquatable   let cache: [Int]\n    let id: Int\n}";
    let expansion = expand(source, &MacroRegistry::new());
    assert_eq!(
        splice(source, &expansion),
        "struct Item {
    let cache: [Int]
    let id: Int
}

extension Item: Equatable {
    static func ==(lhs: Item, rhs: Item) -> Bool {
        return lhs.id == rhs.id
    }
}"
    );
}

#[test]
fn indented_marker_line_is_removed_whole() {
    let source = "@Equatable\nstruct Item {\n    @SkipEquatable\n    var cache: [Int] = []\n    let id: Int\n}";
    let expansion = expand(source, &MacroRegistry::new());
    let spliced = splice(source, &expansion);
    assert!(spliced.starts_with("struct Item {\n    var cache: [Int] = []\n    let id: Int\n}\n\n"));
}

#[test]
fn unregistered_attributes_stay() {
    let source = "@equatable\nstruct S {\n    @SkipEquatable let a: Int\n    let b: Int\n}";
    let mut registry = MacroRegistry::empty();
    registry.alias("equatable", "Equatable");
    let expansion = expand(source, &registry);
    assert_eq!(
        splice(source, &expansion),
        "struct S {
    @SkipEquatable let a: Int
    let b: Int
}

extension S: Equatable {
    static func ==(lhs: S, rhs: S) -> Bool {
        return lhs.b == rhs.b
    }
}"
    );
}

#[test]
fn rejected_declaration_loses_attribute_only() {
    let source = "@Equatable\nclass Model {\n}\n";
    let expansion = expand(source, &MacroRegistry::new());
    assert_eq!(splice(source, &expansion), "class Model {\n}\n");
}

#[test]
fn multiple_anchors_and_following_text() {
    let source = "import Foundation\n\n@Equatable\nstruct A {\n    let a: Int\n}\n\n// trailing\n@Equatable\npublic struct B {\n    let b: Int\n}\n";
    let expansion = expand(source, &MacroRegistry::new());
    assert_eq!(
        splice(source, &expansion),
        "import Foundation

struct A {
    let a: Int
}

extension A: Equatable {
    static func ==(lhs: A, rhs: A) -> Bool {
        return lhs.a == rhs.a
    }
}

// trailing
public struct B {
    let b: Int
}

extension B: Equatable {
    public static func ==(lhs: B, rhs: B) -> Bool {
        return lhs.b == rhs.b
    }
}
"
    );
    assert_eq!(
        print_extensions(&expansion),
        "extension A: Equatable {
    static func ==(lhs: A, rhs: A) -> Bool {
        return lhs.a == rhs.a
    }
}

extension B: Equatable {
    public static func ==(lhs: B, rhs: B) -> Bool {
        return lhs.b == rhs.b
    }
}
"
    );
}

#[test]
fn crlf_attribute_line() {
    let source = "@Equatable\r\nstruct P {\r\n    let x: Int\r\n}";
    let expansion = expand(source, &MacroRegistry::new());
    assert!(splice(source, &expansion).starts_with("struct P {\r\n"));
}

#[test]
fn crlf_source_gets_crlf_extension() {
    let source = "@Equatable\r\nstruct P {\r\n    let x: Int\r\n}\r\n";
    let expansion = expand(source, &MacroRegistry::new());
    assert_eq!(
        splice(source, &expansion),
        "struct P {\r\n    let x: Int\r\n}\r\n\r\nextension P: Equatable {\r\n    static func ==(lhs: P, rhs: P) -> Bool {\r\n        return lhs.x == rhs.x\r\n    }\r\n}\r\n"
    );
}

#[test]
fn single_line_declaration_uses_following_line_ending() {
    let source = "@Equatable struct P { let x: Int }\r\nstruct Q {}\r\n";
    let expansion = expand(source, &MacroRegistry::new());
    let spliced = splice(source, &expansion);
    assert!(spliced.starts_with("struct P { let x: Int }\r\n\r\nextension P: Equatable {\r\n"));
    assert!(!spliced.replace("\r\n", "").contains('\n'));
}
