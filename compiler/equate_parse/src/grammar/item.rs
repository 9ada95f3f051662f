//! Type declarations, functions, and one-line declarations.

use equate_diagnostic::ErrorCode;
use equate_ir::{DeclKind, Declaration, Span, TokenKind};

use crate::{Cursor, ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// `struct Name<T>: A, B where T: C { members }`
    pub(super) fn parse_type_declaration(
        &mut self,
        kind: DeclKind,
    ) -> Result<Declaration, ParseError> {
        self.in_error_context(ErrorContext::TypeDeclaration, |p| {
            p.advance();
            let name = if kind == DeclKind::Extension {
                p.collect_type_text(|k| {
                    matches!(
                        k,
                        TokenKind::Colon | TokenKind::LBrace | TokenKind::Where | TokenKind::Newline
                    )
                })?
                .0
            } else {
                p.cursor.expect_ident()?.0
            };
            if p.check(TokenKind::Lt) {
                p.skip_generic_params()?;
            }

            let mut decl = Declaration::new(kind, Span::DUMMY).with_name(name);
            if p.cursor.eat(TokenKind::Colon) {
                decl.inherited = p.in_error_context(ErrorContext::InheritanceClause, Self::parse_inheritance)?;
            }
            if p.cursor.eat(TokenKind::Where) {
                p.collect_type_text(|k| k == TokenKind::LBrace)?;
            }

            p.skip_newlines();
            let open = p.cursor.expect(TokenKind::LBrace)?;
            let members = p.parse_declarations(true);
            if !p.cursor.eat(TokenKind::RBrace) {
                return Err(ParseError::new(
                    ErrorCode::E1002,
                    format!("unclosed {}", TokenKind::LBrace),
                    p.current_span(),
                )
                .with_related(open.span, "member block opened here")
                .or_context(ErrorContext::MemberBlock));
            }
            Ok(decl.with_members(members))
        })
    }

    /// Comma-separated inheritance entries, each kept as trimmed text.
    fn parse_inheritance(&mut self) -> Result<Vec<String>, ParseError> {
        let mut inherited = Vec::new();
        loop {
            self.skip_newlines();
            let (ty, _) = self.collect_type_text(|k| {
                matches!(
                    k,
                    TokenKind::Comma | TokenKind::LBrace | TokenKind::Where | TokenKind::Newline
                )
            })?;
            inherited.push(ty);
            self.skip_newlines();
            if !self.cursor.eat(TokenKind::Comma) {
                return Ok(inherited);
            }
        }
    }

    /// `func`, `init`, `deinit`, and `subscript`; signature and body skipped.
    pub(super) fn parse_function(&mut self, kind: DeclKind) -> Result<Declaration, ParseError> {
        self.in_error_context(ErrorContext::Function, |p| {
            let keyword = p.advance();
            let name = match kind {
                DeclKind::Function => p.parse_function_name()?,
                _ => p.cursor.text(keyword.span).to_string(),
            };
            if kind == DeclKind::Initializer
                && (p.check(TokenKind::Question) || p.check(TokenKind::Bang))
            {
                p.advance();
            }
            if p.check(TokenKind::Lt) {
                p.skip_generic_params()?;
            }
            p.skip_signature_and_body()?;
            Ok(Declaration::new(kind, Span::DUMMY).with_name(name))
        })
    }

    /// An identifier, or an operator spelled by adjacent operator tokens
    /// (`==`, `<=`, `+`).
    fn parse_function_name(&mut self) -> Result<String, ParseError> {
        if self.check(TokenKind::Ident) {
            return Ok(self.cursor.expect_ident()?.0);
        }

        let first = self.current_span();
        let mut last: Option<Span> = None;
        while is_operator_token(self.current_kind())
            && last.map_or(true, |prev| Cursor::spans_adjacent(prev, self.current_span()))
        {
            last = Some(self.advance().span);
        }
        match last {
            Some(last) => Ok(self.cursor.text_between(first, last).to_string()),
            None => Err(ParseError::new(
                ErrorCode::E1003,
                format!("expected function name, found {}", self.current_kind()),
                self.current_span(),
            )),
        }
    }

    /// `case`, `typealias`, `import`, `operator`, ...: named by the first
    /// identifier after the keyword, the rest of the line skipped.
    pub(super) fn parse_line_declaration(
        &mut self,
        kind: DeclKind,
    ) -> Result<Declaration, ParseError> {
        self.advance();
        let mut decl = Declaration::new(kind, Span::DUMMY);
        if self.check(TokenKind::Ident) {
            decl.name = Some(self.cursor.expect_ident()?.0);
        }
        self.skip_to_line_end()?;
        Ok(decl)
    }
}

fn is_operator_token(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::EqEq
            | TokenKind::Eq
            | TokenKind::Op
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Bang
            | TokenKind::AndAnd
            | TokenKind::Amp
            | TokenKind::Question
            | TokenKind::Dot
    )
}
