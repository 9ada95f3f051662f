//! Equatable expansion driver.
//!
//! ```text
//! source text
//!     │
//!     ▼
//! lex() ──► TokenList
//!     │
//!     ▼
//! parse() ──► SourceFile
//!     │
//!     ▼
//! expand_file() ──► FileExpansion ──► round-trip check
//!     │
//!     ▼
//! splice() ──► expanded source
//! ```
//!
//! A file with lexer or parser errors is not expanded. Each file is
//! expanded independently, so [`expand_sources`] runs them on the rayon
//! pool.

pub mod commands;
mod options;
mod pipeline;
mod tracing_setup;

pub use options::{parse_expand_options, EmitMode, ExpandOptions};
pub use pipeline::{expand_source, expand_sources, SourceExpansion};
pub use tracing_setup::init_tracing;
