#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use equate_ir::{
    Attribute, BindingPattern, DeclKind, Declaration, Introducer, Modifier, ModifierKind,
    PatternBinding, Span, VariableDecl, Visibility,
};
use pretty_assertions::assert_eq;

use super::*;

fn property(names: &[&str], span: Span) -> Declaration {
    let bindings = names
        .iter()
        .map(|name| PatternBinding::new(BindingPattern::Identifier((*name).to_string()), span))
        .collect();
    Declaration::new(
        DeclKind::Variable(VariableDecl {
            introducer: Introducer::Let,
            bindings,
        }),
        span,
    )
}

fn record(kind: DeclKind, members: Vec<Declaration>) -> Declaration {
    Declaration::new(kind, Span::new(0, 100))
        .with_name("Sample")
        .with_members(members)
}

#[test]
fn accepts_struct_and_keeps_member_order() {
    let decl = record(
        DeclKind::Struct,
        vec![
            property(&["title"], Span::new(10, 20)),
            property(&["count"], Span::new(21, 30)),
        ],
    );
    let lowered = validate(&decl).unwrap();
    assert_eq!(lowered.name, "Sample");
    assert_eq!(lowered.visibility, None);
    let names: Vec<_> = lowered.members.iter().filter_map(Member::name).collect();
    assert_eq!(names, vec!["title", "count"]);
}

#[test]
fn rejects_every_other_kind() {
    for kind in [
        DeclKind::Class,
        DeclKind::Enum,
        DeclKind::Protocol,
        DeclKind::Actor,
        DeclKind::Extension,
        DeclKind::Function,
        DeclKind::Other("union".to_string()),
    ] {
        let describe = kind.describe().to_string();
        let err = validate(&record(kind, Vec::new())).unwrap_err();
        assert_eq!(
            err,
            ExpandError::UnsupportedDeclarationKind {
                kind: describe,
                span: Span::new(0, 100),
            }
        );
    }
}

#[test]
fn rejects_struct_without_member_block() {
    let decl = Declaration::new(DeclKind::Struct, Span::new(0, 9)).with_name("Unit");
    assert!(matches!(
        validate(&decl),
        Err(ExpandError::UnsupportedDeclarationKind { .. })
    ));
}

#[test]
fn rejects_unnamed_struct() {
    let decl = Declaration::new(DeclKind::Struct, Span::new(0, 9)).with_members(Vec::new());
    let err = validate(&decl).unwrap_err();
    assert_eq!(err.to_string(), "@Equatable can only be applied to record types, not unnamed struct");
}

#[test]
fn splits_multi_binding_declarations() {
    let member = property(&["a", "b"], Span::new(5, 15))
        .with_attribute(Attribute::new("SkipEquatable", Span::new(1, 4)))
        .with_modifier(Modifier::new(ModifierKind::Static, Span::new(4, 5)));
    let lowered = validate(&record(DeclKind::Struct, vec![member])).unwrap();
    assert_eq!(lowered.members.len(), 2);
    for member in &lowered.members {
        assert!(member.is_static);
        assert!(member.has_attribute("SkipEquatable"));
    }
    assert_eq!(lowered.members[1].name(), Some("b"));
}

#[test]
fn drops_non_property_members() {
    let decl = record(
        DeclKind::Struct,
        vec![
            Declaration::new(DeclKind::Function, Span::new(1, 2)).with_name("render"),
            property(&["value"], Span::new(3, 4)),
            Declaration::new(DeclKind::Initializer, Span::new(5, 6)),
            Declaration::new(DeclKind::Struct, Span::new(7, 8))
                .with_name("Nested")
                .with_members(vec![property(&["inner"], Span::new(7, 8))]),
        ],
    );
    let lowered = validate(&decl).unwrap();
    assert_eq!(lowered.members, vec![Member::named("value", Span::new(3, 4))]);
}

#[test]
fn copies_strongest_visibility_and_inheritance() {
    let decl = record(DeclKind::Struct, Vec::new())
        .with_modifier(Modifier::new(
            ModifierKind::Access(Visibility::FilePrivate),
            Span::new(0, 11),
        ))
        .with_modifier(Modifier::new(
            ModifierKind::Access(Visibility::Public),
            Span::new(12, 18),
        ))
        .with_inherited("View")
        .with_inherited("Sendable");
    let lowered = validate(&decl).unwrap();
    assert_eq!(lowered.visibility, Some(Visibility::Public));
    assert_eq!(lowered.inherited, vec!["View", "Sendable"]);
}
