//! Equate printer
//!
//! Lowers generated declarations to source text and splices them into the
//! file they were expanded from.
//!
//! # Modules
//!
//! - [`emitter`]: Output abstraction for string output
//! - [`printer`]: `GeneratedDeclaration` to text
//! - [`splice`]: Expanded source (original text, consumed attributes removed,
//!   extensions inserted after their anchors)

pub mod emitter;
pub mod printer;
pub mod splice;

pub use emitter::{Emitter, StringEmitter};
pub use printer::{print_expr, print_generated, Printer};
pub use splice::{print_extensions, splice};

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;
