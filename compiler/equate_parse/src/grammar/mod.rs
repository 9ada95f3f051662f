//! Declaration grammar.
//!
//! ```text
//! declaration := attribute* modifier* (type_decl | property | function | line_decl)
//! type_decl   := ("struct" | "class" | "enum" | "protocol" | "actor" | "extension")
//!                name generics? (":" inheritance)? where_clause? "{" declaration* "}"
//! property    := ("let" | "var") binding ("," binding)*
//! binding     := pattern (":" type)? ("=" expression)? accessor_block?
//! ```

mod attr;
mod item;
mod skip;
mod var;

use equate_diagnostic::ErrorCode;
use equate_ir::{DeclKind, Declaration, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse one declaration with its attributes and modifiers.
    ///
    /// Returns `Ok(None)` for lines that declare nothing, such as `#if`
    /// compiler directives.
    pub(crate) fn parse_declaration(&mut self) -> Result<Option<Declaration>, ParseError> {
        let start = self.current_span();
        let attributes = self.parse_attributes()?;
        let modifiers = self.parse_modifiers();

        let decl = match self.current_kind() {
            TokenKind::Struct => self.parse_type_declaration(DeclKind::Struct)?,
            TokenKind::Class => self.parse_type_declaration(DeclKind::Class)?,
            TokenKind::Enum => self.parse_type_declaration(DeclKind::Enum)?,
            TokenKind::Protocol => self.parse_type_declaration(DeclKind::Protocol)?,
            TokenKind::Extension => self.parse_type_declaration(DeclKind::Extension)?,
            TokenKind::Ident if self.at_contextual_keyword("actor") => {
                self.parse_type_declaration(DeclKind::Actor)?
            }
            TokenKind::Ident if self.at_contextual_keyword("macro") => {
                self.parse_line_declaration(DeclKind::Other("macro".to_string()))?
            }
            TokenKind::Ident if self.at_contextual_keyword("precedencegroup") => {
                self.parse_line_declaration(DeclKind::Other("precedencegroup".to_string()))?
            }
            TokenKind::Let | TokenKind::Var => self.parse_variable()?,
            TokenKind::Func => self.parse_function(DeclKind::Function)?,
            TokenKind::Init => self.parse_function(DeclKind::Initializer)?,
            TokenKind::Deinit => self.parse_function(DeclKind::Deinitializer)?,
            TokenKind::Subscript => self.parse_function(DeclKind::Subscript)?,
            TokenKind::Case => self.parse_line_declaration(DeclKind::EnumCase)?,
            TokenKind::Typealias => self.parse_line_declaration(DeclKind::TypeAlias)?,
            TokenKind::Associatedtype => self.parse_line_declaration(DeclKind::AssociatedType)?,
            TokenKind::Import => self.parse_line_declaration(DeclKind::Import)?,
            TokenKind::OperatorKw => self.parse_line_declaration(DeclKind::Operator)?,
            TokenKind::Hash if attributes.is_empty() && modifiers.is_empty() => {
                // `#if`, `#endif`, `#warning(...)`: nothing to declare.
                self.skip_to_line_end()?;
                return Ok(None);
            }
            found if !attributes.is_empty() || !modifiers.is_empty() => {
                return Err(ParseError::new(
                    ErrorCode::E1004,
                    format!("expected declaration after attributes and modifiers, found {found}"),
                    self.current_span(),
                ));
            }
            found => {
                return Err(ParseError::new(
                    ErrorCode::E1004,
                    format!("expected declaration, found {found}"),
                    self.current_span(),
                ));
            }
        };

        let span = start.merge(self.previous_span());
        Ok(Some(Declaration {
            attributes,
            modifiers,
            span,
            ..decl
        }))
    }

    /// An identifier used as a declaration keyword (`actor Counter`).
    fn at_contextual_keyword(&self, keyword: &str) -> bool {
        self.cursor.check_ident_text(keyword) && self.cursor.peek_kind(1) == TokenKind::Ident
    }
}
