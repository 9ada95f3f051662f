//! Diagnostic system for expansion and front-end errors.
//!
//! Every phase reports through the same shape:
//! - Error codes for searchability (`equatec explain E2001`)
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes and suggestions (how to fix)
//!
//! Hosts receive diagnostics through a [`DiagnosticSink`]; the engine never
//! returns a diagnostic in place of its output.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod queue;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::{ErrorCode, ParseErrorCodeError};
pub use errors::ErrorDocs;
pub use queue::{DiagnosticConfig, DiagnosticQueue, DiagnosticSink};
