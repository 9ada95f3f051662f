//! Property declarations: `let a: Int`, `var x = 0, y = 0`, `var body: some View { ... }`.

use equate_diagnostic::ErrorCode;
use equate_ir::{
    BindingPattern, DeclKind, Declaration, Introducer, PatternBinding, Span, TokenKind,
    VariableDecl,
};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    pub(super) fn parse_variable(&mut self) -> Result<Declaration, ParseError> {
        self.in_error_context(ErrorContext::Property, |p| {
            let introducer = if p.advance().kind == TokenKind::Let {
                Introducer::Let
            } else {
                Introducer::Var
            };

            let mut bindings = vec![p.parse_pattern_binding()?];
            while p.cursor.eat(TokenKind::Comma) {
                p.skip_newlines();
                bindings.push(p.parse_pattern_binding()?);
            }

            let var = VariableDecl {
                introducer,
                bindings,
            };
            Ok(Declaration::new(DeclKind::Variable(var), Span::DUMMY))
        })
    }

    fn parse_pattern_binding(&mut self) -> Result<PatternBinding, ParseError> {
        let start = self.current_span();
        let pattern = self.parse_binding_pattern()?;
        let mut binding = PatternBinding::new(pattern, Span::DUMMY);

        if self.cursor.eat(TokenKind::Colon) {
            let (ty, _) = self.in_error_context(ErrorContext::TypeAnnotation, |p| {
                p.collect_type_text(|k| {
                    matches!(
                        k,
                        TokenKind::Eq
                            | TokenKind::LBrace
                            | TokenKind::Newline
                            | TokenKind::Semicolon
                            | TokenKind::Comma
                    )
                })
            })?;
            binding.ty = Some(ty);
        }
        if self.cursor.eat(TokenKind::Eq) {
            binding.has_initializer = true;
            self.skip_expression()?;
        }
        if self.check(TokenKind::LBrace) {
            self.skip_group()?;
            binding.has_accessors = true;
        }

        binding.span = start.merge(self.previous_span());
        Ok(binding)
    }

    fn parse_binding_pattern(&mut self) -> Result<BindingPattern, ParseError> {
        match self.current_kind() {
            TokenKind::Ident if self.cursor.current_text() == "_" => {
                self.advance();
                Ok(BindingPattern::Wildcard)
            }
            TokenKind::Ident => Ok(BindingPattern::Identifier(self.cursor.expect_ident()?.0)),
            TokenKind::LParen => {
                self.advance();
                let mut elements = Vec::new();
                loop {
                    self.skip_newlines();
                    if self.check(TokenKind::RParen) {
                        break;
                    }
                    elements.push(self.parse_binding_pattern()?);
                    self.skip_newlines();
                    if !self.cursor.eat(TokenKind::Comma) {
                        break;
                    }
                }
                self.cursor.expect(TokenKind::RParen)?;
                Ok(BindingPattern::Tuple(elements))
            }
            found => Err(ParseError::new(
                ErrorCode::E1003,
                format!("expected a binding name, found {found}"),
                self.current_span(),
            )),
        }
    }
}
