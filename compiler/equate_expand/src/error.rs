//! Expansion errors.

use equate_diagnostic::{Diagnostic, ErrorCode};
use equate_ir::Span;

/// Everything that can go wrong while expanding one declaration.
///
/// None of these abort the host. Each maps to one diagnostic; the first
/// and last mean "no output", the middle one only drops a member.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    #[error("@Equatable can only be applied to record types, not {kind}")]
    UnsupportedDeclarationKind { kind: String, span: Span },

    #[error("member binding `{binding}` has no simple name")]
    MalformedMemberBinding { binding: String, span: Span },

    #[error("failed to build extension: {reason}")]
    SynthesisAssemblyFailure { reason: String, span: Span },
}

impl ExpandError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExpandError::UnsupportedDeclarationKind { .. } => ErrorCode::E2001,
            ExpandError::MalformedMemberBinding { .. } => ErrorCode::E2002,
            ExpandError::SynthesisAssemblyFailure { .. } => ErrorCode::E9001,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ExpandError::UnsupportedDeclarationKind { span, .. }
            | ExpandError::MalformedMemberBinding { span, .. }
            | ExpandError::SynthesisAssemblyFailure { span, .. } => *span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ExpandError::UnsupportedDeclarationKind { kind, span } => {
                Diagnostic::error(self.code())
                    .with_message("@Equatable can only be applied to record types")
                    .with_label(*span, format!("this is a `{kind}` declaration"))
                    .with_note("no code is generated for this declaration")
                    .with_suggestion("declare the type as a `struct`")
            }
            ExpandError::MalformedMemberBinding { binding, span } => {
                Diagnostic::warning(self.code())
                    .with_message(format!("member binding `{binding}` has no simple name"))
                    .with_label(*span, "not compared")
                    .with_note("the member is left out of the generated `==`")
            }
            ExpandError::SynthesisAssemblyFailure { reason, span } => {
                Diagnostic::error(self.code())
                    .with_message("failed to build extension")
                    .with_label(*span, reason.clone())
                    .with_note("this is an internal error; no code is generated")
            }
        }
    }
}
