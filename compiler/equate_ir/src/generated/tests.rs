use super::*;
use pretty_assertions::assert_eq;

#[test]
fn conjunction_is_left_associative() {
    let expr = Expr::conjunction(["a", "b", "c"].map(Expr::field_eq));
    let expected = Expr::binary(
        BinaryOp::And,
        Expr::binary(BinaryOp::And, Expr::field_eq("a"), Expr::field_eq("b")),
        Expr::field_eq("c"),
    );
    assert_eq!(expr, Some(expected));
}

#[test]
fn conjunction_of_nothing_is_none() {
    assert_eq!(Expr::conjunction(Vec::new()), None);
}

#[test]
fn single_operand_is_not_wrapped() {
    assert_eq!(
        Expr::conjunction([Expr::field_eq("title")]),
        Some(Expr::field_eq("title"))
    );
}

#[test]
fn compared_fields_preserve_order() {
    let function = EqualityFunction {
        visibility: None,
        operand_type: "T".into(),
        body: Expr::conjunction(["title", "isSkipable", "count"].map(Expr::field_eq))
            .unwrap_or_else(|| Expr::field_eq("unreachable")),
    };
    assert_eq!(function.compared_fields(), vec!["title", "isSkipable", "count"]);
}

#[test]
fn compared_field_requires_matching_sides() {
    let mismatched = Expr::binary(BinaryOp::Eq, Expr::field(LHS, "a"), Expr::field(RHS, "b"));
    assert_eq!(mismatched.compared_field(), None);
    assert_eq!(Expr::field_eq("a").compared_field(), Some("a"));
}

#[test]
fn equatable_conformance() {
    let decl = GeneratedDeclaration::equatable(
        "Row",
        EqualityFunction {
            visibility: Some(Visibility::Public),
            operand_type: "Row".into(),
            body: Expr::field_eq("id"),
        },
    );
    assert_eq!(decl.conformances, vec![EQUATABLE_CONFORMANCE.to_string()]);
    assert_eq!(BinaryOp::And.as_str(), "&&");
}
