//! Parse error types.
//!
//! Errors carry an `ErrorContext` naming the construct being parsed, for
//! "while parsing a struct declaration" style notes.

use equate_diagnostic::{Diagnostic, ErrorCode};
use equate_ir::Span;

/// What was being parsed when an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    SourceFile,
    TypeDeclaration,
    MemberBlock,
    InheritanceClause,
    Attribute,
    Property,
    TypeAnnotation,
    Function,
}

impl ErrorContext {
    /// A phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::SourceFile => "a source file",
            Self::TypeDeclaration => "a type declaration",
            Self::MemberBlock => "a member block",
            Self::InheritanceClause => "an inheritance clause",
            Self::Attribute => "an attribute",
            Self::Property => "a property declaration",
            Self::TypeAnnotation => "a type annotation",
            Self::Function => "a function declaration",
        }
    }
}

/// Parse error with error code for rich diagnostics.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    pub context: Option<ErrorContext>,
    /// A related location, e.g. the opening delimiter of an unclosed group.
    pub related: Option<(Span, String)>,
}

impl ParseError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
            related: None,
        }
    }

    /// Attach `context` unless a more specific one is already set.
    #[must_use]
    pub fn or_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    #[must_use]
    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related = Some((span, message.into()));
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, "here");
        if let Some((span, message)) = &self.related {
            diag = diag.with_secondary_label(*span, message);
        }
        if let Some(context) = self.context {
            diag = diag.with_note(format!("while parsing {}", context.description()));
        }
        diag
    }
}
