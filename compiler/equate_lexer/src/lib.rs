//! Lexer for the declaration language using logos.
//!
//! Produces a `TokenList` plus any lexical errors. Lexing never stops at an
//! error: invalid characters are dropped, and unterminated literals still
//! yield a token so the parser can keep going.

mod lex_error;

pub use lex_error::{LexError, LexErrorKind};

use equate_ir::{Span, Token, TokenKind, TokenList};
use logos::Logos;

/// Whether a delimited construct found its closing delimiter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Termination {
    Closed,
    Unclosed,
}

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\f]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment(Termination),

    #[token("\n")]
    Newline,

    #[token("struct")]
    Struct,
    #[token("class")]
    Class,
    #[token("enum")]
    Enum,
    #[token("protocol")]
    Protocol,
    #[token("extension")]
    Extension,
    #[token("func")]
    Func,
    #[token("init")]
    Init,
    #[token("deinit")]
    Deinit,
    #[token("subscript")]
    Subscript,
    #[token("var")]
    Var,
    #[token("let")]
    Let,
    #[token("typealias")]
    Typealias,
    #[token("associatedtype")]
    Associatedtype,
    #[token("case")]
    Case,
    #[token("import")]
    Import,
    #[token("static")]
    Static,
    #[token("where")]
    Where,
    #[token("operator")]
    Operator,
    #[token("return")]
    Return,

    #[token("@")]
    At,
    #[token("#")]
    Hash,
    #[token("\\")]
    Backslash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("&&")]
    AndAnd,
    #[token("->")]
    Arrow,
    #[token("?")]
    Question,
    #[token("!")]
    Bang,
    #[token("&")]
    Amp,
    #[regex(r"[+\-*/%|^~]")]
    Op,

    #[regex(r"0x[0-9a-fA-F][0-9a-fA-F_]*")]
    #[regex(r"0o[0-7][0-7_]*")]
    #[regex(r"0b[01][01_]*")]
    #[regex(r"[0-9][0-9_]*")]
    Int,

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+")]
    Float,

    // `"`, `"""`, and raw `#"`/`#"""` strings; the callback finds the end.
    #[regex(r#"#*""#, string_literal)]
    Str(Termination),

    #[regex(r"[\p{XID_Start}_]\p{XID_Continue}*")]
    #[regex(r"`[^`\n]+`")]
    #[regex(r"\$\p{XID_Continue}+")]
    Ident,
}

/// Consume a (nesting) block comment after its opening `/*`.
fn block_comment(lex: &mut logos::Lexer<'_, RawToken>) -> Termination {
    let rest = lex.remainder().as_bytes();
    let mut depth = 1usize;
    let mut i = 0;
    while i < rest.len() {
        if rest[i..].starts_with(b"/*") {
            depth += 1;
            i += 2;
        } else if rest[i..].starts_with(b"*/") {
            depth -= 1;
            i += 2;
            if depth == 0 {
                lex.bump(i);
                return Termination::Closed;
            }
        } else {
            i += 1;
        }
    }
    lex.bump(rest.len());
    Termination::Unclosed
}

/// Consume a string literal after its opening `#*"`.
fn string_literal(lex: &mut logos::Lexer<'_, RawToken>) -> Termination {
    let hashes = lex.slice().len() - 1;
    let (len, termination) = scan_string(lex.remainder().as_bytes(), hashes);
    lex.bump(len);
    termination
}

/// Scan a string that opened with `hashes` `#`s and one `"`; `rest` starts
/// right after that quote. Returns the bytes consumed.
///
/// `""` right after the quote makes it a multi-line string. A single-line
/// string that reaches a newline is unclosed and stops before it.
fn scan_string(rest: &[u8], hashes: usize) -> (usize, Termination) {
    let multiline = rest.starts_with(b"\"\"");
    let open = if multiline { 2 } else { 0 };
    let mut close = if multiline { b"\"\"\"".to_vec() } else { b"\"".to_vec() };
    close.resize(close.len() + hashes, b'#');

    let rest = &rest[open..];
    let mut i = 0;
    while i < rest.len() {
        if rest[i..].starts_with(&close) {
            return (open + i + close.len(), Termination::Closed);
        }
        match rest[i] {
            b'\n' if !multiline => return (open + i, Termination::Unclosed),
            b'\\' if rest[i + 1..].iter().take_while(|&&b| b == b'#').count() >= hashes => {
                let after = i + 1 + hashes;
                if rest.get(after) == Some(&b'(') {
                    let (len, termination) = scan_interpolation(&rest[after + 1..], multiline);
                    i = after + 1 + len;
                    if termination == Termination::Unclosed {
                        return (open + i, termination);
                    }
                } else {
                    i = after + 1;
                }
            }
            _ => i += 1,
        }
    }
    (open + rest.len(), Termination::Unclosed)
}

/// Scan an interpolation `\( ... )` after its `(`, including nested
/// parentheses and string literals.
fn scan_interpolation(rest: &[u8], multiline: bool) -> (usize, Termination) {
    let mut depth = 1usize;
    let mut i = 0;
    while i < rest.len() {
        match rest[i] {
            b'(' => {
                depth += 1;
                i += 1;
            }
            b')' => {
                depth -= 1;
                i += 1;
                if depth == 0 {
                    return (i, Termination::Closed);
                }
            }
            b'\n' if !multiline => return (i, Termination::Unclosed),
            b'"' | b'#' => {
                let hashes = rest[i..].iter().take_while(|&&b| b == b'#').count();
                if rest.get(i + hashes) != Some(&b'"') {
                    i += hashes;
                    continue;
                }
                let (len, termination) = scan_string(&rest[i + hashes + 1..], hashes);
                i += hashes + 1 + len;
                if termination == Termination::Unclosed {
                    return (i, termination);
                }
            }
            _ => i += 1,
        }
    }
    (rest.len(), Termination::Unclosed)
}

/// Lexer output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex source text into a `TokenList`.
///
/// Comments are dropped. A block comment that spans lines leaves a
/// `Newline` behind, since newlines terminate declarations.
pub fn lex(source: &str) -> LexOutput {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = span_of(logos.span());
        let slice = logos.slice();

        match result {
            Ok(RawToken::LineComment) => {}
            Ok(RawToken::BlockComment(termination)) => {
                if termination == Termination::Unclosed {
                    errors.push(LexError::new(span, LexErrorKind::UnterminatedBlockComment));
                }
                if slice.contains('\n') {
                    tokens.push(Token::new(TokenKind::Newline, Span::point(span.end)));
                }
            }
            Ok(RawToken::Str(termination)) => {
                if termination == Termination::Unclosed {
                    errors.push(LexError::new(span, LexErrorKind::UnterminatedString));
                }
                tokens.push(Token::new(TokenKind::Str, span));
            }
            Ok(raw) => {
                if let Some(kind) = convert_token(raw) {
                    tokens.push(Token::new(kind, span));
                }
            }
            Err(()) => {
                let found = slice.chars().next().unwrap_or('\u{FFFD}');
                errors.push(LexError::new(span, LexErrorKind::InvalidCharacter(found)));
            }
        }
    }

    LexOutput {
        tokens: TokenList::new(tokens, offset_of(source.len())),
        errors,
    }
}

/// Saturating conversion; sources past `u32::MAX` bytes clamp to the end.
fn offset_of(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}

fn span_of(range: std::ops::Range<usize>) -> Span {
    Span::new(offset_of(range.start), offset_of(range.end))
}

/// Map a raw token to its `TokenKind`. Trivia maps to `None`.
fn convert_token(raw: RawToken) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::LineComment | RawToken::BlockComment(_) => return None,
        RawToken::Newline => TokenKind::Newline,

        RawToken::Ident => TokenKind::Ident,
        RawToken::Int => TokenKind::Int,
        RawToken::Float => TokenKind::Float,
        RawToken::Str(_) => TokenKind::Str,

        RawToken::Struct => TokenKind::Struct,
        RawToken::Class => TokenKind::Class,
        RawToken::Enum => TokenKind::Enum,
        RawToken::Protocol => TokenKind::Protocol,
        RawToken::Extension => TokenKind::Extension,
        RawToken::Func => TokenKind::Func,
        RawToken::Init => TokenKind::Init,
        RawToken::Deinit => TokenKind::Deinit,
        RawToken::Subscript => TokenKind::Subscript,
        RawToken::Var => TokenKind::Var,
        RawToken::Let => TokenKind::Let,
        RawToken::Typealias => TokenKind::Typealias,
        RawToken::Associatedtype => TokenKind::Associatedtype,
        RawToken::Case => TokenKind::Case,
        RawToken::Import => TokenKind::Import,
        RawToken::Static => TokenKind::Static,
        RawToken::Where => TokenKind::Where,
        RawToken::Operator => TokenKind::OperatorKw,
        RawToken::Return => TokenKind::Return,

        RawToken::At => TokenKind::At,
        RawToken::Hash => TokenKind::Hash,
        RawToken::Backslash => TokenKind::Backslash,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::AndAnd => TokenKind::AndAnd,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::Question => TokenKind::Question,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Op => TokenKind::Op,
    };
    Some(kind)
}

#[cfg(test)]
mod tests;
