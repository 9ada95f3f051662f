//! Synthesized output syntax.
//!
//! The synthesizer builds these nodes directly instead of formatting text;
//! printers in `equate_fmt` and the proc-macro host lower them afterwards.
//! Tests compare these values rather than printed output.

use crate::Visibility;

/// The conformance every generated declaration adds.
pub const EQUATABLE_CONFORMANCE: &str = "Equatable";
/// Name of the left operand parameter.
pub const LHS: &str = "lhs";
/// Name of the right operand parameter.
pub const RHS: &str = "rhs";
/// The operator the generated function implements.
pub const EQ_OPERATOR: &str = "==";

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    /// `==`
    Eq,
    /// `&&`
    And,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Eq => "==",
            BinaryOp::And => "&&",
        }
    }
}

/// Expression forms the synthesizer emits.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// `base.field`
    Field { base: String, field: String },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn field(base: impl Into<String>, field: impl Into<String>) -> Self {
        Expr::Field {
            base: base.into(),
            field: field.into(),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// `lhs.field == rhs.field`
    pub fn field_eq(field: &str) -> Self {
        Expr::binary(BinaryOp::Eq, Expr::field(LHS, field), Expr::field(RHS, field))
    }

    /// Left-associative `&&` chain over `operands`; `None` when empty.
    pub fn conjunction(operands: impl IntoIterator<Item = Expr>) -> Option<Expr> {
        operands
            .into_iter()
            .reduce(|acc, next| Expr::binary(BinaryOp::And, acc, next))
    }

    /// The `==` comparisons of an `&&` chain, left to right.
    pub fn conjuncts(&self) -> Vec<&Expr> {
        let mut out = Vec::new();
        self.collect_conjuncts(&mut out);
        out
    }

    fn collect_conjuncts<'a>(&'a self, out: &mut Vec<&'a Expr>) {
        match self {
            Expr::Binary {
                op: BinaryOp::And,
                left,
                right,
            } => {
                left.collect_conjuncts(out);
                right.collect_conjuncts(out);
            }
            other => out.push(other),
        }
    }

    /// For `lhs.f == rhs.f`, the field name `f`.
    pub fn compared_field(&self) -> Option<&str> {
        match self {
            Expr::Binary {
                op: BinaryOp::Eq,
                left,
                right,
            } => match (left.as_ref(), right.as_ref()) {
                (Expr::Field { field: l, .. }, Expr::Field { field: r, .. }) if l == r => Some(l),
                _ => None,
            },
            _ => None,
        }
    }
}

/// `static func ==(lhs: T, rhs: T) -> Bool { return <body> }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EqualityFunction {
    /// Copied from the record; `None` means no explicit modifier.
    pub visibility: Option<Visibility>,
    pub operand_type: String,
    pub body: Expr,
}

impl EqualityFunction {
    /// Field names compared by the body, in evaluation order.
    pub fn compared_fields(&self) -> Vec<&str> {
        self.body
            .conjuncts()
            .into_iter()
            .filter_map(Expr::compared_field)
            .collect()
    }
}

/// `extension T: Equatable { <function> }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GeneratedDeclaration {
    pub extended_type: String,
    pub conformances: Vec<String>,
    pub function: EqualityFunction,
}

impl GeneratedDeclaration {
    pub fn equatable(extended_type: impl Into<String>, function: EqualityFunction) -> Self {
        GeneratedDeclaration {
            extended_type: extended_type.into(),
            conformances: vec![EQUATABLE_CONFORMANCE.to_string()],
            function,
        }
    }
}

#[cfg(test)]
mod tests;
