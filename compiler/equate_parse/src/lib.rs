//! Recursive descent parser for the declaration language.
//!
//! Builds the host-neutral `SourceFile` model. Only declaration structure is
//! parsed: function bodies, initializer expressions, and accessor blocks are
//! skipped by delimiter balancing, since expansion never looks inside them.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError};

use equate_diagnostic::ErrorCode;
use equate_ir::{Declaration, SourceFile, Span, Token, TokenKind, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens, source),
            errors: Vec::new(),
        }
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    #[inline]
    fn skip_newlines(&mut self) {
        self.cursor.skip_newlines();
    }

    /// Run `f`, tagging any error it returns with `context`.
    fn in_error_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        f(self).map_err(|e| e.or_context(context))
    }

    /// Parse a whole file.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_file(mut self) -> ParseOutput {
        let declarations = self.parse_declarations(false);
        tracing::debug!(
            declarations = declarations.len(),
            errors = self.errors.len(),
            "parsed source file"
        );
        ParseOutput {
            file: SourceFile { declarations },
            errors: self.errors,
        }
    }

    /// Parse declarations until end of input, or until a closing `}` when
    /// `in_block` is set. The `}` itself is left for the caller.
    fn parse_declarations(&mut self, in_block: bool) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        loop {
            self.cursor.skip_separators();
            if self.is_at_end() || (in_block && self.check(TokenKind::RBrace)) {
                break;
            }
            if self.check(TokenKind::RBrace) {
                self.errors.push(
                    ParseError::new(ErrorCode::E1001, "unexpected `}`", self.current_span())
                        .or_context(ErrorContext::SourceFile),
                );
                self.advance();
                continue;
            }

            let start = self.cursor.position();
            match self.parse_declaration() {
                Ok(Some(decl)) => declarations.push(decl),
                Ok(None) => {}
                Err(error) => {
                    let context = if in_block {
                        ErrorContext::MemberBlock
                    } else {
                        ErrorContext::SourceFile
                    };
                    tracing::trace!(code = %error.code, span = %error.span, "recovering");
                    self.errors.push(error.or_context(context));
                    self.synchronize();
                }
            }

            // Every iteration must consume something.
            if self.cursor.position() == start {
                self.advance();
            }
        }
        declarations
    }

    /// Recovery: skip to the end of the current line, keeping delimiters
    /// balanced. Stops before a `}` that closes the enclosing block.
    fn synchronize(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.current_kind() {
                TokenKind::Eof => return,
                TokenKind::Newline | TokenKind::Semicolon if depth == 0 => return,
                kind if kind.is_open_delimiter() => depth += 1,
                kind if kind.is_close_delimiter() => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.advance();
        }
    }
}

/// Parse output: the file model plus any errors.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseOutput {
    pub file: SourceFile,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse a lexed source file.
pub fn parse(source: &str, tokens: &TokenList) -> ParseOutput {
    Parser::new(source, tokens).parse_file()
}
