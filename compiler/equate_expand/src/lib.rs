//! Equatable expansion engine.
//!
//! Three stages, strictly forward:
//! - [`validate`]: accept a struct declaration, lower it to a `TypeDeclaration`
//! - [`classify`]: partition members into included and excluded
//! - [`synthesize`]: build the `extension T: Equatable` declaration
//!
//! Every stage is a pure function of its input and an immutable
//! [`ExclusionConfig`]. Diagnostics go to a host-provided
//! [`DiagnosticSink`]; nothing here panics or aborts the host.
//!
//! [`expand_file`] is the host side: it walks a parsed file, dispatches
//! macro attributes through the [`MacroRegistry`], and records which
//! attributes were consumed.

mod classify;
mod config;
mod error;
mod expansion;
mod registry;
mod synthesize;
mod validate;

pub use classify::{classify, ClassificationResult, Exclusion, ExclusionReason};
pub use config::{
    ExclusionConfig, DEFAULT_ROLE_MEMBER, DEFAULT_SKIP_MARKER, DEFAULT_VIEW_MARKER,
    DEFAULT_WRAPPER_ATTRIBUTES,
};
pub use error::ExpandError;
pub use expansion::{expand_file, DeclarationExpansion, FileExpansion};
pub use registry::{
    EquatableMacro, MacroDefinition, MacroRegistry, MacroRole, SkipEquatableMacro,
};
pub use synthesize::synthesize;
pub use validate::validate;

use equate_diagnostic::DiagnosticSink;
use equate_ir::{Declaration, GeneratedDeclaration};

/// Run validator, classifier, and synthesizer over one declaration.
///
/// Returns the generated declaration, or `None` when the declaration is
/// rejected, has no comparable members, or fails to assemble. Rejections
/// and failures are reported to `sink`.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(decl = decl.name.as_deref().unwrap_or("<unnamed>"))
)]
pub fn expand_equatable(
    decl: &Declaration,
    config: &ExclusionConfig,
    sink: &mut dyn DiagnosticSink,
) -> Option<GeneratedDeclaration> {
    let record = match validate(decl) {
        Ok(record) => record,
        Err(error) => {
            tracing::debug!(%error, "rejected");
            sink.report(error.to_diagnostic());
            return None;
        }
    };

    let classification = classify(&record, config, sink);
    match synthesize(&record, &classification.included) {
        Ok(generated) => {
            if generated.is_none() {
                tracing::debug!("no comparable members; nothing generated");
            }
            generated
        }
        Err(error) => {
            tracing::debug!(%error, "assembly failed");
            sink.report(error.to_diagnostic());
            None
        }
    }
}
