//! Skipping by delimiter balance, and raw text capture for types.
//!
//! Bodies, initializers, and type annotations are never parsed into trees.
//! Types are kept as trimmed source text; everything else is stepped over.

use equate_diagnostic::ErrorCode;
use equate_ir::{Span, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Step over a bracketed group starting at the current open delimiter.
    ///
    /// Returns the spans of the opening and closing delimiters.
    pub(super) fn skip_group(&mut self) -> Result<(Span, Span), ParseError> {
        let open = self.advance();
        let mut depth = 1usize;
        loop {
            let token = self.advance();
            match token.kind {
                TokenKind::Eof => return Err(unclosed(open.kind, open.span, token.span)),
                kind if kind.is_open_delimiter() => depth += 1,
                kind if kind.is_close_delimiter() => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok((open.span, token.span));
                    }
                }
                _ => {}
            }
        }
    }

    /// Step over a generic parameter clause `<...>`.
    pub(super) fn skip_generic_params(&mut self) -> Result<(), ParseError> {
        let open = self.advance();
        let mut depth = 1usize;
        while depth > 0 {
            let token = self.advance();
            match token.kind {
                TokenKind::Lt => depth += 1,
                TokenKind::Gt => depth -= 1,
                TokenKind::Eof => return Err(unclosed(open.kind, open.span, token.span)),
                _ => {}
            }
        }
        Ok(())
    }

    /// Capture a type as source text, stopping before a depth-0 token for
    /// which `stop` holds (or a depth-0 closing delimiter).
    pub(super) fn collect_type_text(
        &mut self,
        stop: impl Fn(TokenKind) -> bool,
    ) -> Result<(String, Span), ParseError> {
        let first = self.current_span();
        let mut last = None;
        let mut opens: Vec<(TokenKind, Span)> = Vec::new();
        loop {
            let kind = self.current_kind();
            if kind == TokenKind::Eof {
                if let Some((open, open_span)) = opens.pop() {
                    return Err(unclosed(open, open_span, self.current_span()));
                }
                break;
            }
            if opens.is_empty() && (stop(kind) || kind.is_close_delimiter() || kind == TokenKind::Gt)
            {
                break;
            }
            match kind {
                TokenKind::LParen | TokenKind::LBracket | TokenKind::Lt => {
                    opens.push((kind, self.current_span()));
                }
                TokenKind::RParen | TokenKind::RBracket | TokenKind::Gt => {
                    opens.pop();
                }
                _ => {}
            }
            last = Some(self.advance().span);
        }

        match last {
            Some(last) => Ok((self.cursor.text_between(first, last).to_string(), first.merge(last))),
            None => Err(ParseError::new(
                ErrorCode::E1001,
                format!("expected a type, found {}", self.current_kind()),
                self.current_span(),
            )),
        }
    }

    /// Step over an initializer expression.
    ///
    /// The expression ends at a depth-0 `,`, `;`, closing delimiter, or
    /// newline. A newline does not end it when the next line continues it
    /// (`.modifier()`, a binary operator) or the line ends in a binary
    /// operator, unless the next line starts a declaration.
    /// A `{ willSet/didSet ... }` block is left for the caller.
    pub(super) fn skip_expression(&mut self) -> Result<(), ParseError> {
        loop {
            match self.current_kind() {
                TokenKind::Eof | TokenKind::Comma | TokenKind::Semicolon => return Ok(()),
                kind if kind.is_close_delimiter() => return Ok(()),
                TokenKind::Newline => {
                    if !self.expression_continues() {
                        return Ok(());
                    }
                    self.skip_newlines();
                }
                TokenKind::LBrace if self.at_observer_block() => return Ok(()),
                kind if kind.is_open_delimiter() => {
                    self.skip_group()?;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Called at a newline inside an expression.
    ///
    /// `1...`, `y as Int?` and `x++` end in tokens that look like
    /// operators, so a trailing `.`/`?` never continues on its own and a
    /// line that starts a declaration always ends the expression.
    fn expression_continues(&self) -> bool {
        let next = self.cursor.peek_past_newlines();
        if self.starts_declaration(next) {
            return false;
        }
        let trailing_operator = matches!(
            self.cursor.previous_kind(),
            Some(
                TokenKind::Op
                    | TokenKind::AndAnd
                    | TokenKind::EqEq
                    | TokenKind::Eq
                    | TokenKind::Colon
            )
        );
        let leading_operator = matches!(
            next.kind,
            TokenKind::Dot
                | TokenKind::Op
                | TokenKind::AndAnd
                | TokenKind::EqEq
                | TokenKind::Question
                | TokenKind::Colon
        );
        trailing_operator || leading_operator
    }

    /// `{` opening a property observer block rather than a closure.
    fn at_observer_block(&self) -> bool {
        let next = self.cursor.peek_token(1);
        let next = if next.kind == TokenKind::Newline {
            // peek_past_newlines from the `{` itself would return the `{`.
            let mut n = 1;
            while self.cursor.peek_kind(n) == TokenKind::Newline {
                n += 1;
            }
            self.cursor.peek_token(n)
        } else {
            next
        };
        next.kind == TokenKind::Ident
            && matches!(self.cursor.text(next.span), "willSet" | "didSet")
    }

    /// Step over a function signature and its body, if it has one.
    ///
    /// A newline ends a body-less requirement (protocol members) unless the
    /// next line opens the body or continues the signature.
    pub(super) fn skip_signature_and_body(&mut self) -> Result<(), ParseError> {
        loop {
            match self.current_kind() {
                TokenKind::LBrace => {
                    self.skip_group()?;
                    return Ok(());
                }
                TokenKind::Newline => {
                    let next = self.cursor.peek_past_newlines().kind;
                    if !matches!(next, TokenKind::LBrace | TokenKind::Arrow | TokenKind::Where) {
                        return Ok(());
                    }
                    self.skip_newlines();
                }
                TokenKind::Eof | TokenKind::Semicolon => return Ok(()),
                kind if kind.is_close_delimiter() => return Ok(()),
                kind if kind.is_open_delimiter() => {
                    self.skip_group()?;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Step over the rest of a one-line declaration.
    pub(super) fn skip_to_line_end(&mut self) -> Result<(), ParseError> {
        loop {
            match self.current_kind() {
                TokenKind::Eof | TokenKind::Newline | TokenKind::Semicolon => return Ok(()),
                kind if kind.is_close_delimiter() => return Ok(()),
                kind if kind.is_open_delimiter() => {
                    self.skip_group()?;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }
}

fn unclosed(open: TokenKind, open_span: Span, eof: Span) -> ParseError {
    ParseError::new(ErrorCode::E1002, format!("unclosed {open}"), eof)
        .with_related(open_span, "opened here")
}
