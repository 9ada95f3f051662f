//! Equality declaration synthesis.

use equate_ir::generated::{EQUATABLE_CONFORMANCE, LHS, RHS};
use equate_ir::keywords::is_identifier;
use equate_ir::{EqualityFunction, Expr, GeneratedDeclaration, Member, TypeDeclaration};

use crate::ExpandError;

/// Build `extension T: Equatable { static func ==(lhs: T, rhs: T) -> Bool }`
/// comparing `included` in order.
///
/// Returns `Ok(None)` when `included` is empty: no comparable members means
/// no declaration at all, not an always-true `==`.
///
/// # Errors
///
/// [`ExpandError::SynthesisAssemblyFailure`] when the assembled declaration
/// fails [`check_assembly`]. Nothing is generated in that case.
pub fn synthesize(
    record: &TypeDeclaration,
    included: &[Member],
) -> Result<Option<GeneratedDeclaration>, ExpandError> {
    let mut comparisons = Vec::with_capacity(included.len());
    for member in included {
        let Some(name) = member.name() else {
            return Err(assembly_failure(
                record,
                format!("member `{}` has no simple name", member.binding),
            ));
        };
        comparisons.push(Expr::field_eq(name));
    }
    let Some(body) = Expr::conjunction(comparisons) else {
        return Ok(None);
    };

    let generated = GeneratedDeclaration::equatable(
        record.name.clone(),
        EqualityFunction {
            visibility: record.visibility,
            operand_type: record.name.clone(),
            body,
        },
    );
    check_assembly(&generated).map_err(|reason| assembly_failure(record, reason))?;
    tracing::debug!(
        record = %record.name,
        fields = generated.function.compared_fields().len(),
        "synthesized equality"
    );
    Ok(Some(generated))
}

fn assembly_failure(record: &TypeDeclaration, reason: String) -> ExpandError {
    ExpandError::SynthesisAssemblyFailure {
        reason,
        span: record.span,
    }
}

/// Structural checks on a generated declaration.
///
/// The extended and operand types must be the same identifier, the only
/// conformance is `Equatable`, and the body must be a non-empty `&&` chain
/// of `lhs.f == rhs.f` over identifier fields.
pub(crate) fn check_assembly(generated: &GeneratedDeclaration) -> Result<(), String> {
    if !is_identifier(&generated.extended_type) {
        return Err(format!(
            "`{}` is not a valid type name",
            generated.extended_type
        ));
    }
    if generated.function.operand_type != generated.extended_type {
        return Err(format!(
            "operand type `{}` does not match extended type `{}`",
            generated.function.operand_type, generated.extended_type
        ));
    }
    if generated.conformances != [EQUATABLE_CONFORMANCE] {
        return Err(format!(
            "unexpected conformance list `{}`",
            generated.conformances.join(", ")
        ));
    }

    let conjuncts = generated.function.body.conjuncts();
    if conjuncts.is_empty() {
        return Err("equality body compares no fields".to_string());
    }
    for conjunct in conjuncts {
        check_comparison(conjunct)?;
    }
    Ok(())
}

fn check_comparison(expr: &Expr) -> Result<(), String> {
    let Expr::Binary { left, right, .. } = expr else {
        return Err("equality body contains a bare field access".to_string());
    };
    let Some(field) = expr.compared_field() else {
        return Err("equality body contains a comparison of different fields".to_string());
    };
    if !is_identifier(field) {
        return Err(format!("`{field}` is not a valid field name"));
    }
    match (left.as_ref(), right.as_ref()) {
        (Expr::Field { base: l, .. }, Expr::Field { base: r, .. }) if l == LHS && r == RHS => {
            Ok(())
        }
        _ => Err(format!("comparison of `{field}` does not read `lhs` then `rhs`")),
    }
}
