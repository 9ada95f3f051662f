//! `#[derive(Equatable)]` for Rust structs.
//!
//! The derive lowers the struct into the engine's host-neutral
//! `Declaration`, runs the same validator, classifier, and synthesizer the
//! `equatec` driver uses, and lowers the generated equality function into
//! an `impl PartialEq`.
//!
//! ```text
//! #[derive(Equatable)]
//! #[equatable(view)]
//! struct Row {
//!     title: String,
//!     #[skip_equatable]
//!     cached_width: f32,
//!     body: Rendered,
//! }
//! ```
//!
//! generates
//!
//! ```text
//! impl PartialEq for Row {
//!     fn eq(&self, other: &Self) -> bool {
//!         self.title == other.title
//!     }
//! }
//! ```
//!
//! Exclusion rules:
//! - `#[skip_equatable]` on a field leaves it out.
//! - `#[equatable(view)]` on the struct gives it the view role: a field
//!   named `body` is left out.
//!
//! A struct with no compared fields gets no impl at all. Enums and unions
//! are rejected, and so are tuple-struct fields, which have no name to
//! compare by.

mod derive;
mod lower;

use proc_macro::TokenStream;

/// Derive `PartialEq` over the fields relevant for equality.
///
/// # Attributes
///
/// ## Struct-level
/// - `#[equatable(view)]` - The struct has the view role; its `body` field
///   is not compared.
///
/// ## Field-level
/// - `#[skip_equatable]` - Never compare this field.
#[proc_macro_derive(Equatable, attributes(equatable, skip_equatable))]
pub fn derive_equatable(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    match derive::derive_equatable(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
