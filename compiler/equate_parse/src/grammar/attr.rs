//! Attributes (`@State`, `@available(iOS 17, *)`) and declaration modifiers.

use equate_ir::{Attribute, Modifier, ModifierKind, Span, Token, TokenKind, Visibility};

use crate::{Cursor, ErrorContext, ParseError, Parser};

/// Contextual words that act as modifiers in declaration position.
const MODIFIER_WORDS: &[&str] = &[
    "public",
    "package",
    "internal",
    "fileprivate",
    "private",
    "open",
    "final",
    "lazy",
    "weak",
    "unowned",
    "override",
    "required",
    "convenience",
    "mutating",
    "nonmutating",
    "dynamic",
    "optional",
    "indirect",
    "nonisolated",
    "isolated",
    "distributed",
    "prefix",
    "postfix",
    "infix",
    "consuming",
    "borrowing",
];

impl Parser<'_> {
    pub(super) fn parse_attributes(&mut self) -> Result<Vec<Attribute>, ParseError> {
        let mut attributes = Vec::new();
        while self.check(TokenKind::At) {
            let attribute = self.in_error_context(ErrorContext::Attribute, Self::parse_attribute)?;
            attributes.push(attribute);
            self.skip_newlines();
        }
        Ok(attributes)
    }

    /// `@` name (`.` name)* argument-list?
    ///
    /// The argument list must touch the name: `@Foo(x)` has arguments,
    /// `@Foo (x)` does not.
    fn parse_attribute(&mut self) -> Result<Attribute, ParseError> {
        let at = self.advance();
        let (mut name, _) = self.cursor.expect_ident()?;
        while self.check(TokenKind::Dot) && self.cursor.peek_kind(1) == TokenKind::Ident {
            self.advance();
            let (segment, _) = self.cursor.expect_ident()?;
            name.push('.');
            name.push_str(&segment);
        }

        let mut arguments = None;
        if self.check(TokenKind::LParen)
            && Cursor::spans_adjacent(self.previous_span(), self.current_span())
        {
            let (open, close) = self.skip_group()?;
            arguments = Some(
                self.cursor
                    .text(Span::new(open.end, close.start))
                    .trim()
                    .to_string(),
            );
        }

        let attribute = Attribute::new(name, at.span.merge(self.previous_span()));
        Ok(match arguments {
            Some(arguments) => attribute.with_arguments(arguments),
            None => attribute,
        })
    }

    pub(super) fn parse_modifiers(&mut self) -> Vec<Modifier> {
        let mut modifiers = Vec::new();
        loop {
            let start = self.current_span();
            let kind = match self.current_kind() {
                TokenKind::Static => {
                    self.advance();
                    ModifierKind::Static
                }
                TokenKind::Class if self.class_is_modifier() => {
                    self.advance();
                    ModifierKind::Class
                }
                TokenKind::Ident if self.at_modifier_word() => self.parse_word_modifier(),
                _ => break,
            };
            modifiers.push(Modifier::new(kind, start.merge(self.previous_span())));
            self.skip_newlines();
        }
        modifiers
    }

    /// Whether `token` can only begin a declaration: a declaration keyword,
    /// `@`, `#`, `static`, or a modifier word such as `public`.
    pub(super) fn starts_declaration(&self, token: Token) -> bool {
        match token.kind {
            kind if kind.is_decl_keyword() => true,
            TokenKind::At | TokenKind::Hash | TokenKind::Static => true,
            TokenKind::Ident => MODIFIER_WORDS.contains(&self.cursor.text(token.span)),
            _ => false,
        }
    }

    /// `class var`, `class func`, `class override func`, ...
    fn class_is_modifier(&self) -> bool {
        let next = self.cursor.peek_token(1);
        match next.kind {
            TokenKind::Var
            | TokenKind::Let
            | TokenKind::Func
            | TokenKind::Subscript
            | TokenKind::Static => true,
            TokenKind::Ident => MODIFIER_WORDS.contains(&self.cursor.text(next.span)),
            _ => false,
        }
    }

    /// A modifier word not used as a name: `final` in `final class`, but
    /// not `open` in `open = true`.
    fn at_modifier_word(&self) -> bool {
        if !MODIFIER_WORDS.contains(&self.cursor.current_text()) {
            return false;
        }
        match self.cursor.peek_kind(1) {
            TokenKind::LParen => {
                self.cursor.peek_kind(2) == TokenKind::Ident
                    && self.cursor.peek_kind(3) == TokenKind::RParen
            }
            TokenKind::Colon
            | TokenKind::Eq
            | TokenKind::EqEq
            | TokenKind::Dot
            | TokenKind::Comma
            | TokenKind::Op
            | TokenKind::RParen => false,
            _ => true,
        }
    }

    /// `private`, `private(set)`, `unowned(safe)`, `final`, ...
    fn parse_word_modifier(&mut self) -> ModifierKind {
        let word = self.cursor.current_text();
        self.advance();

        let mut argument = None;
        if self.check(TokenKind::LParen) {
            self.advance();
            argument = Some(self.cursor.current_text());
            self.advance();
            self.advance();
        }

        match (Visibility::from_keyword(word), argument) {
            (Some(vis), None) => ModifierKind::Access(vis),
            (Some(vis), Some("set")) => ModifierKind::SetterAccess(vis),
            _ => ModifierKind::Other(word.to_string()),
        }
    }
}
