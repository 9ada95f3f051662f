//! Token types produced by the lexer.
//!
//! Tokens carry no payload: identifier and literal text is recovered by
//! slicing the source with the token's span.

use std::fmt;

use crate::Span;

/// Token kinds for the declaration language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Identifier, including backticked (`` `default` ``) and `$0`-style names.
    Ident,
    /// Integer literal.
    Int,
    /// Floating-point literal.
    Float,
    /// String literal (single or multi-line).
    Str,

    // Declaration keywords
    Struct,
    Class,
    Enum,
    Protocol,
    Extension,
    Func,
    Init,
    Deinit,
    Subscript,
    Var,
    Let,
    Typealias,
    Associatedtype,
    Case,
    Import,
    Static,
    Where,
    OperatorKw,
    Return,

    // Punctuation
    At,
    Hash,
    Backslash,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Lt,
    Gt,
    Colon,
    Semicolon,
    Comma,
    Dot,
    Eq,
    EqEq,
    AndAnd,
    Arrow,
    Question,
    Bang,
    Amp,
    /// Any other operator character (`+`, `-`, `*`, `/`, `%`, `|`, `^`, `~`).
    Op,

    /// Significant newline; declarations and initializers end at one.
    Newline,
    /// End of input. Every `TokenList` ends with exactly one.
    Eof,
}

impl TokenKind {
    /// Human-readable description used in parser diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer literal",
            TokenKind::Float => "float literal",
            TokenKind::Str => "string literal",
            TokenKind::Struct => "`struct`",
            TokenKind::Class => "`class`",
            TokenKind::Enum => "`enum`",
            TokenKind::Protocol => "`protocol`",
            TokenKind::Extension => "`extension`",
            TokenKind::Func => "`func`",
            TokenKind::Init => "`init`",
            TokenKind::Deinit => "`deinit`",
            TokenKind::Subscript => "`subscript`",
            TokenKind::Var => "`var`",
            TokenKind::Let => "`let`",
            TokenKind::Typealias => "`typealias`",
            TokenKind::Associatedtype => "`associatedtype`",
            TokenKind::Case => "`case`",
            TokenKind::Import => "`import`",
            TokenKind::Static => "`static`",
            TokenKind::Where => "`where`",
            TokenKind::OperatorKw => "`operator`",
            TokenKind::Return => "`return`",
            TokenKind::At => "`@`",
            TokenKind::Hash => "`#`",
            TokenKind::Backslash => "`\\`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::Colon => "`:`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::Dot => "`.`",
            TokenKind::Eq => "`=`",
            TokenKind::EqEq => "`==`",
            TokenKind::AndAnd => "`&&`",
            TokenKind::Arrow => "`->`",
            TokenKind::Question => "`?`",
            TokenKind::Bang => "`!`",
            TokenKind::Amp => "`&`",
            TokenKind::Op => "operator",
            TokenKind::Newline => "newline",
            TokenKind::Eof => "end of file",
        }
    }

    /// Whether this token opens a bracketed group.
    pub fn is_open_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::LParen | TokenKind::LBrace | TokenKind::LBracket
        )
    }

    /// Whether this token closes a bracketed group.
    pub fn is_close_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket
        )
    }

    /// Whether this token starts a declaration.
    pub fn is_decl_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Struct
                | TokenKind::Class
                | TokenKind::Enum
                | TokenKind::Protocol
                | TokenKind::Extension
                | TokenKind::Func
                | TokenKind::Init
                | TokenKind::Deinit
                | TokenKind::Subscript
                | TokenKind::Var
                | TokenKind::Let
                | TokenKind::Typealias
                | TokenKind::Associatedtype
                | TokenKind::Case
                | TokenKind::Import
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A token with its source location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lexer output: a token stream terminated by `TokenKind::Eof`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Build a list, appending the terminating `Eof` at `end`.
    pub fn new(mut tokens: Vec<Token>, end: u32) -> Self {
        tokens.push(Token::new(TokenKind::Eof, Span::point(end)));
        TokenList { tokens }
    }

    /// Number of tokens, including the trailing `Eof`.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// A list always holds at least the `Eof` token.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token kinds only, without spans. Handy in tests.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Index of the last token (`Eof`).
    pub fn last_index(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
