//! Lexer error types.

use equate_diagnostic::{Diagnostic, ErrorCode};
use equate_ir::Span;

/// A lexical error and where it occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that starts no token.
    InvalidCharacter(char),
    /// Missing closing `"` (or `"""`).
    UnterminatedString,
    /// Missing `*/` before end of file.
    UnterminatedBlockComment,
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        LexError { span, kind }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::InvalidCharacter(_) => ErrorCode::E0001,
            LexErrorKind::UnterminatedString => ErrorCode::E0002,
            LexErrorKind::UnterminatedBlockComment => ErrorCode::E0003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code());
        match self.kind {
            LexErrorKind::InvalidCharacter(c) => diag
                .with_message(format!("invalid character `{}`", c.escape_default()))
                .with_label(self.span, "not valid here"),
            LexErrorKind::UnterminatedString => diag
                .with_message("unterminated string literal")
                .with_label(self.span, "string starts here")
                .with_suggestion("add the closing quote"),
            LexErrorKind::UnterminatedBlockComment => diag
                .with_message("unterminated block comment")
                .with_label(Span::new(self.span.start, self.span.start + 2), "comment starts here")
                .with_note("block comments nest; each `/*` needs its own `*/`"),
        }
    }
}
