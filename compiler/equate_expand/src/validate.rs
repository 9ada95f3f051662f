//! Input validation and lowering.
//!
//! Only struct declarations with a member block are accepted. Everything
//! else is rejected here so the later stages can assume a record.

use equate_ir::{DeclKind, Declaration, Member, TypeDeclaration};
use smallvec::SmallVec;

use crate::ExpandError;

/// Accept a struct declaration and lower it to the record model.
///
/// Each pattern binding of a property declaration becomes its own
/// [`Member`]; bindings of one declaration share its attribute names and
/// static flag. Members that are not properties are dropped.
///
/// # Errors
///
/// [`ExpandError::UnsupportedDeclarationKind`] for anything that is not a
/// named struct with a member block.
pub fn validate(decl: &Declaration) -> Result<TypeDeclaration, ExpandError> {
    if decl.kind != DeclKind::Struct {
        return Err(unsupported(decl.kind.describe(), decl));
    }
    let Some(name) = decl.name.as_deref().filter(|name| !name.is_empty()) else {
        return Err(unsupported("unnamed struct", decl));
    };
    let Some(member_decls) = &decl.members else {
        return Err(unsupported("struct without a member block", decl));
    };

    let mut record = TypeDeclaration::new(name, decl.span);
    record.visibility = decl.visibility();
    record.inherited.clone_from(&decl.inherited);
    record.members = member_decls.iter().flat_map(lower_members).collect();
    Ok(record)
}

fn unsupported(kind: &str, decl: &Declaration) -> ExpandError {
    ExpandError::UnsupportedDeclarationKind {
        kind: kind.to_string(),
        span: decl.span,
    }
}

/// The members contributed by one member declaration, in binding order.
fn lower_members(decl: &Declaration) -> Vec<Member> {
    let Some(var) = decl.as_variable() else {
        return Vec::new();
    };
    let attributes: SmallVec<[String; 2]> =
        decl.attributes.iter().map(|attr| attr.name.clone()).collect();
    let is_static = decl.is_type_scope();

    var.bindings
        .iter()
        .map(|binding| Member {
            binding: binding.pattern.clone(),
            is_static,
            attributes: attributes.clone(),
            ty: binding.ty.clone(),
            span: binding.span,
        })
        .collect()
}

#[cfg(test)]
mod tests;
