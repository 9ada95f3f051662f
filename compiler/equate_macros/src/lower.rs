//! Rust item to engine `Declaration`.
//!
//! The engine speaks in byte-offset spans; a proc macro has token spans
//! instead. Each lowered node gets a synthetic one-byte span whose start
//! indexes a [`SpanTable`], so diagnostics map back to the right token.

use equate_ir::{
    Attribute, BindingPattern, DeclKind, Declaration, Introducer, Modifier, ModifierKind,
    PatternBinding, Span, VariableDecl, Visibility,
};
use proc_macro2::Span as TokenSpan;
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::spanned::Spanned;

/// Role marker the `#[equatable(view)]` argument adds to the inherited list.
pub(crate) const VIEW_ROLE: &str = "view";

/// Attribute name of the field-level skip marker.
pub(crate) const SKIP_MARKER: &str = "skip_equatable";

/// Token spans of lowered nodes, indexed by synthetic span start.
#[derive(Default)]
pub(crate) struct SpanTable {
    spans: Vec<TokenSpan>,
}

impl SpanTable {
    fn push(&mut self, span: TokenSpan) -> Span {
        let index = u32::try_from(self.spans.len()).unwrap_or(u32::MAX - 1);
        self.spans.push(span);
        Span::new(index, index + 1)
    }

    /// The token span a synthetic span stands for.
    pub(crate) fn resolve(&self, span: Span) -> TokenSpan {
        self.spans
            .get(span.start as usize)
            .copied()
            .unwrap_or_else(TokenSpan::call_site)
    }
}

/// Lower a derive input into a declaration.
///
/// Only `#[equatable(...)]` arguments can fail; shape problems (enums,
/// tuple fields) are left for the engine to report.
pub(crate) fn lower(input: &syn::DeriveInput) -> syn::Result<(Declaration, SpanTable)> {
    let mut table = SpanTable::default();
    let span = table.push(input.ident.span());

    let kind = match &input.data {
        syn::Data::Struct(_) => DeclKind::Struct,
        syn::Data::Enum(_) => DeclKind::Enum,
        syn::Data::Union(_) => DeclKind::Other("union".to_string()),
    };
    let mut decl = Declaration::new(kind, span).with_name(input.ident.unraw().to_string());
    if let Some(visibility) = lower_visibility(&input.vis) {
        let modifier_span = table.push(input.vis.span());
        decl = decl.with_modifier(Modifier::new(ModifierKind::Access(visibility), modifier_span));
    }
    for role in struct_roles(&input.attrs)? {
        decl = decl.with_inherited(role);
    }

    let members = match &input.data {
        syn::Data::Struct(data) => lower_fields(&data.fields, &mut table),
        syn::Data::Enum(_) | syn::Data::Union(_) => Vec::new(),
    };
    Ok((decl.with_members(members), table))
}

fn lower_visibility(vis: &syn::Visibility) -> Option<Visibility> {
    match vis {
        syn::Visibility::Public(_) => Some(Visibility::Public),
        syn::Visibility::Restricted(restricted) => {
            let path = restricted.path.to_token_stream().to_string();
            Some(match path.as_str() {
                "crate" => Visibility::Package,
                "self" => Visibility::Private,
                _ => Visibility::Internal,
            })
        }
        syn::Visibility::Inherited => None,
    }
}

/// Inherited role names from `#[equatable(...)]` on the struct.
fn struct_roles(attrs: &[syn::Attribute]) -> syn::Result<Vec<String>> {
    let mut roles = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("equatable")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(VIEW_ROLE) {
                roles.push(VIEW_ROLE.to_string());
                Ok(())
            } else {
                Err(meta.error("unsupported equatable argument, expected `view`"))
            }
        })?;
    }
    Ok(roles)
}

fn lower_fields(fields: &syn::Fields, table: &mut SpanTable) -> Vec<Declaration> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let span = table.push(field.span());
            let pattern = match &field.ident {
                Some(ident) => BindingPattern::Identifier(ident.unraw().to_string()),
                None => BindingPattern::Positional(index),
            };
            let binding =
                PatternBinding::new(pattern, span).with_type(field.ty.to_token_stream().to_string());
            let mut decl = Declaration::new(
                DeclKind::Variable(VariableDecl {
                    introducer: Introducer::Let,
                    bindings: vec![binding],
                }),
                span,
            );
            for attr in &field.attrs {
                let attr_span = table.push(attr.span());
                decl = decl.with_attribute(Attribute::new(attribute_name(attr), attr_span));
            }
            decl
        })
        .collect()
}

/// `#[a::b(...)]` is named `a::b`.
fn attribute_name(attr: &syn::Attribute) -> String {
    attr.path()
        .segments
        .iter()
        .map(|segment| segment.ident.unraw().to_string())
        .collect::<Vec<_>>()
        .join("::")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Tests can panic")]

    use pretty_assertions::assert_eq;
    use syn::parse_quote;

    use super::*;

    fn binding_names(decl: &Declaration) -> Vec<String> {
        decl.members
            .iter()
            .flatten()
            .filter_map(Declaration::as_variable)
            .flat_map(|var| var.bindings.iter().map(|b| b.pattern.to_string()))
            .collect()
    }

    #[test]
    fn lowers_named_struct() {
        let input: syn::DeriveInput = parse_quote! {
            #[equatable(view)]
            pub struct Row {
                title: String,
                #[skip_equatable]
                r#type: u8,
            }
        };
        let (decl, _) = lower(&input).unwrap();
        assert_eq!(decl.kind, DeclKind::Struct);
        assert_eq!(decl.name.as_deref(), Some("Row"));
        assert_eq!(decl.visibility(), Some(Visibility::Public));
        assert_eq!(decl.inherited, vec![VIEW_ROLE.to_string()]);
        assert_eq!(binding_names(&decl), vec!["title", "type"]);
        let members = decl.members.unwrap();
        assert!(members[1].has_attribute(SKIP_MARKER));
    }

    #[test]
    fn tuple_fields_are_positional() {
        let input: syn::DeriveInput = parse_quote! {
            struct Meters(f64, pub(crate) u8);
        };
        let (decl, _) = lower(&input).unwrap();
        assert_eq!(binding_names(&decl), vec!["0", "1"]);
    }

    #[test]
    fn enums_keep_their_kind() {
        let input: syn::DeriveInput = parse_quote! {
            enum Direction { Up, Down }
        };
        let (decl, _) = lower(&input).unwrap();
        assert_eq!(decl.kind, DeclKind::Enum);
        assert_eq!(decl.members, Some(Vec::new()));
    }

    #[test]
    fn restricted_visibility() {
        let input: syn::DeriveInput = parse_quote! {
            pub(crate) struct Local { x: u8 }
        };
        let (decl, _) = lower(&input).unwrap();
        assert_eq!(decl.visibility(), Some(Visibility::Package));
    }

    #[test]
    fn unknown_argument_is_an_error() {
        let input: syn::DeriveInput = parse_quote! {
            #[equatable(deep)]
            struct Tree { left: u8 }
        };
        let err = lower(&input).err().unwrap();
        assert_eq!(
            err.to_string(),
            "unsupported equatable argument, expected `view`"
        );
    }

    #[test]
    fn qualified_attribute_names() {
        let input: syn::DeriveInput = parse_quote! {
            struct S {
                #[serde::skip]
                x: u8,
            }
        };
        let (decl, _) = lower(&input).unwrap();
        let members = decl.members.unwrap();
        assert!(members[0].has_attribute("serde::skip"));
    }
}
