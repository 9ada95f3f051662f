//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.
//! Tokens carry no text; the cursor slices it out of the source on demand.

use equate_diagnostic::ErrorCode;
use equate_ir::{keywords, Span, Token, TokenKind, TokenList};

use crate::ParseError;

pub struct Cursor<'a> {
    tokens: &'a TokenList,
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        Cursor {
            tokens,
            source,
            pos: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token.
    ///
    /// Invariant: the position never passes the trailing `Eof`.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the last consumed token, or `Span::DUMMY` at the start.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    /// Kind of the last consumed token.
    pub fn previous_kind(&self) -> Option<TokenKind> {
        self.pos.checked_sub(1).map(|i| self.tokens[i].kind)
    }

    /// Kind of the token `n` positions ahead, clamped to `Eof`.
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.peek_token(n).kind
    }

    /// The token `n` positions ahead, clamped to `Eof`.
    pub fn peek_token(&self, n: usize) -> Token {
        let index = (self.pos + n).min(self.tokens.last_index());
        self.tokens[index]
    }

    /// The next token that is not a newline, at or after the current one.
    pub fn peek_past_newlines(&self) -> Token {
        self.tokens
            .iter()
            .skip(self.pos)
            .find(|t| t.kind != TokenKind::Newline)
            .copied()
            .unwrap_or_else(|| self.tokens[self.tokens.last_index()])
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Whether the current token is an identifier spelled exactly `text`.
    pub fn check_ident_text(&self, text: &str) -> bool {
        self.check(TokenKind::Ident) && self.current_text() == text
    }

    /// Advance and return the consumed token. Never moves past `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = *self.current();
        if self.pos < self.tokens.last_index() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn skip_newlines(&mut self) {
        while self.check(TokenKind::Newline) {
            self.advance();
        }
    }

    /// Skip newlines and `;` separators between declarations.
    pub fn skip_separators(&mut self) {
        while self.check(TokenKind::Newline) || self.check(TokenKind::Semicolon) {
            self.advance();
        }
    }

    /// Whether `second` starts exactly where `first` ends.
    pub fn spans_adjacent(first: Span, second: Span) -> bool {
        first.end == second.start
    }

    /// Source text of a span; empty if the span falls outside the source.
    pub fn text(&self, span: Span) -> &'a str {
        span.slice(self.source).unwrap_or_default()
    }

    pub fn current_text(&self) -> &'a str {
        self.text(self.current_span())
    }

    /// Source text from the start of `first` to the end of `last`, trimmed.
    pub fn text_between(&self, first: Span, last: Span) -> &'a str {
        self.text(first.merge(last)).trim()
    }

    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kind: TokenKind) -> ParseError {
        ParseError::new(
            ErrorCode::E1001,
            format!("expected {kind}, found {}", self.current_kind()),
            self.current_span(),
        )
    }

    /// Expect an identifier and return it with backticks removed.
    pub fn expect_ident(&mut self) -> Result<(String, Span), ParseError> {
        if self.check(TokenKind::Ident) {
            let token = self.advance();
            Ok((keywords::unescape(self.text(token.span)).to_string(), token.span))
        } else {
            Err(self.make_expect_ident_error())
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_ident_error(&self) -> ParseError {
        ParseError::new(
            ErrorCode::E1003,
            format!("expected identifier, found {}", self.current_kind()),
            self.current_span(),
        )
    }
}
