//! Engine run and `impl PartialEq` generation.

use equate_diagnostic::Diagnostic;
use equate_expand::{expand_equatable, ExclusionConfig};
use equate_ir::GeneratedDeclaration;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;

use crate::lower::{lower, SpanTable, SKIP_MARKER, VIEW_ROLE};

/// Exclusion rules for Rust structs.
///
/// Rust has no framework-managed property wrappers, so that rule is off.
fn rust_config() -> ExclusionConfig {
    ExclusionConfig::new()
        .without_wrapper_attributes()
        .with_skip_marker(SKIP_MARKER)
        .with_view_marker(VIEW_ROLE)
}

pub(crate) fn derive_equatable(input: &syn::DeriveInput) -> syn::Result<TokenStream> {
    let (decl, table) = lower(input)?;
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let generated = expand_equatable(&decl, &rust_config(), &mut diagnostics);

    // Stable proc macros can't emit warnings, so every diagnostic fails
    // the derive.
    if let Some(error) = to_syn_error(&diagnostics, &table) {
        return Err(error);
    }
    Ok(generated
        .map(|generated| impl_partial_eq(input, &generated))
        .unwrap_or_default())
}

fn to_syn_error(diagnostics: &[Diagnostic], table: &SpanTable) -> Option<syn::Error> {
    diagnostics
        .iter()
        .map(|diagnostic| {
            let span = diagnostic
                .primary_span()
                .map_or_else(proc_macro2::Span::call_site, |span| table.resolve(span));
            syn::Error::new(span, format!("{}: {}", diagnostic.code, diagnostic.message))
        })
        .reduce(|mut combined, next| {
            combined.combine(next);
            combined
        })
}

fn impl_partial_eq(input: &syn::DeriveInput, generated: &GeneratedDeclaration) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let comparisons = generated
        .function
        .compared_fields()
        .into_iter()
        .map(|field| {
            let ident = field_ident(input, field);
            quote! { self.#ident == other.#ident }
        });

    quote! {
        #[automatically_derived]
        impl #impl_generics ::core::cmp::PartialEq for #name #ty_generics #where_clause {
            fn eq(&self, other: &Self) -> bool {
                #(#comparisons)&&*
            }
        }
    }
}

/// The field's original identifier, so `r#type` stays raw.
fn field_ident(input: &syn::DeriveInput, name: &str) -> syn::Ident {
    let syn::Data::Struct(data) = &input.data else {
        return format_ident!("{}", name);
    };
    data.fields
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .find(|ident| ident.unraw() == name)
        .cloned()
        .unwrap_or_else(|| format_ident!("{}", name))
}

#[cfg(test)]
mod tests;
