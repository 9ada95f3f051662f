//! Equate IR - shared data model for the Equatable synthesizer.
//!
//! This crate contains the plain-value structures every phase agrees on:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - The host-neutral declaration model (`Declaration`, `DeclKind`, ...)
//! - The validated record model (`TypeDeclaration`, `Member`)
//! - The synthesized output (`GeneratedDeclaration`)
//!
//! Every type is an immutable value description of source structure. Nothing
//! here holds global state, so all of it is `Send + Sync` and can be handed
//! between threads freely.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
pub mod generated;
pub mod keywords;
pub mod record;
mod span;
mod token;

pub use ast::{
    Attribute, BindingPattern, DeclKind, Declaration, Introducer, Modifier, ModifierKind,
    PatternBinding, SourceFile, VariableDecl, Visibility,
};
pub use generated::{BinaryOp, EqualityFunction, Expr, GeneratedDeclaration};
pub use record::{Member, TypeDeclaration};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
