use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    let output = lex(source);
    assert!(output.errors.is_empty(), "unexpected errors: {:?}", output.errors);
    output.tokens.kinds()
}

fn texts(source: &str) -> Vec<&str> {
    lex(source)
        .tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| t.span.slice(source).unwrap_or_default())
        .collect()
}

#[test]
fn empty_source_is_just_eof() {
    let output = lex("");
    assert_eq!(output.tokens.kinds(), vec![TokenKind::Eof]);
    assert_eq!(output.tokens[0].span, Span::point(0));
}

#[test]
fn struct_header() {
    assert_eq!(
        kinds("@Equatable\nstruct Point: Hashable {"),
        vec![
            TokenKind::At,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Struct,
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::Ident,
            TokenKind::LBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords_need_word_boundary() {
    assert_eq!(
        kinds("structure letter var"),
        vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Var, TokenKind::Eof]
    );
}

#[test]
fn modifiers_are_identifiers() {
    assert_eq!(texts("public private(set) var"), vec!["public", "private", "(", "set", ")", "var"]);
    assert_eq!(lex("public").tokens[0].kind, TokenKind::Ident);
}

#[test]
fn escaped_and_dollar_identifiers() {
    assert_eq!(
        kinds("`default` $0"),
        vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]
    );
    assert_eq!(texts("let `class` = 1"), vec!["let", "`class`", "=", "1"]);
}

#[test]
fn comments_are_dropped() {
    assert_eq!(
        kinds("let a // trailing\nlet b /* inline */ = 1"),
        vec![
            TokenKind::Let,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Let,
            TokenKind::Ident,
            TokenKind::Eq,
            TokenKind::Int,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn multi_line_block_comment_leaves_a_newline() {
    assert_eq!(
        kinds("let a /* one\ntwo */ let b"),
        vec![
            TokenKind::Let,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Let,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn block_comments_nest() {
    assert_eq!(
        kinds("/* outer /* inner */ still outer */ var"),
        vec![TokenKind::Var, TokenKind::Eof]
    );
}

#[test]
fn unterminated_block_comment() {
    let output = lex("var a /* never closed");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::UnterminatedBlockComment);
    assert_eq!(output.errors[0].span, Span::new(6, 21));
}

#[test]
fn string_literals() {
    assert_eq!(
        texts(r#"let s = "a \"quoted\" word""#),
        vec!["let", "s", "=", r#""a \"quoted\" word""#]
    );
    assert_eq!(kinds(r#""""#), vec![TokenKind::Str, TokenKind::Eof]);
}

#[test]
fn multiline_string_is_one_token() {
    let source = "let s = \"\"\"\n  line \"one\"\n  \"\"\"\nlet t";
    let output = lex(source);
    assert!(output.errors.is_empty());
    assert_eq!(
        output.tokens.kinds(),
        vec![
            TokenKind::Let,
            TokenKind::Ident,
            TokenKind::Eq,
            TokenKind::Str,
            TokenKind::Newline,
            TokenKind::Let,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unterminated_string_still_yields_token() {
    let output = lex("let s = \"open\nlet t");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::UnterminatedString);
    assert_eq!(output.errors[0].span, Span::new(8, 13));
    assert_eq!(output.tokens[3].kind, TokenKind::Str);
    assert_eq!(output.tokens[4].kind, TokenKind::Newline);
}

#[test]
fn raw_strings_close_on_matching_hashes() {
    assert_eq!(
        texts(r##"let s = #"a"b"#"##),
        vec!["let", "s", "=", r##"#"a"b"#"##]
    );
    assert_eq!(
        texts(r###"x = ##"one "# two"## + y"###),
        vec!["x", "=", r###"##"one "# two"##"###, "+", "y"]
    );
    assert_eq!(kinds(r##"#"\"#"##), vec![TokenKind::Str, TokenKind::Eof]);
}

#[test]
fn raw_multiline_string() {
    let source = "let s = #\"\"\"\n  \"\"\" inside\n  \"\"\"#\nlet t";
    let output = lex(source);
    assert!(output.errors.is_empty(), "{:?}", output.errors);
    assert_eq!(
        output.tokens.kinds(),
        vec![
            TokenKind::Let,
            TokenKind::Ident,
            TokenKind::Eq,
            TokenKind::Str,
            TokenKind::Newline,
            TokenKind::Let,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn hash_directives_are_not_strings() {
    assert_eq!(
        kinds("#if DEBUG"),
        vec![TokenKind::Hash, TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]
    );
}

#[test]
fn interpolation_may_contain_strings() {
    let source = r#"let s = "\(1 + "}")" + "\(f(")", g(x)))!""#;
    assert_eq!(
        texts(source),
        vec!["let", "s", "=", r#""\(1 + "}")""#, "+", r#""\(f(")", g(x)))!""#]
    );
    assert_eq!(
        texts(r##"#"\#(name) says "hi""#"##),
        vec![r##"#"\#(name) says "hi""#"##]
    );
}

#[test]
fn interpolation_in_multiline_string() {
    let source = "\"\"\"\n\\(a ? \"\"\"\n x \"\"\" : \"y\")\n\"\"\"";
    assert_eq!(kinds(source), vec![TokenKind::Str, TokenKind::Eof]);
}

#[test]
fn unclosed_interpolation_stops_at_line_end() {
    let output = lex("let s = \"\\(a + \"b\"\nlet t");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::UnterminatedString);
    assert_eq!(output.tokens[3].kind, TokenKind::Str);
    assert_eq!(output.tokens[4].kind, TokenKind::Newline);
    assert_eq!(output.tokens[5].kind, TokenKind::Let);
}

#[test]
fn unicode_identifiers() {
    assert_eq!(
        texts("let café: Int\nvar 名前 = $0ñ"),
        vec!["let", "café", ":", "Int", "\n", "var", "名前", "=", "$0ñ"]
    );
    assert_eq!(
        kinds("_größe"),
        vec![TokenKind::Ident, TokenKind::Eof]
    );
}

#[test]
fn numbers() {
    assert_eq!(
        kinds("42 1_000 0xFF 0b101 3.14 1e9"),
        vec![
            TokenKind::Int,
            TokenKind::Int,
            TokenKind::Int,
            TokenKind::Int,
            TokenKind::Float,
            TokenKind::Float,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn operators() {
    assert_eq!(
        kinds("== && -> = < > ? ! & + -"),
        vec![
            TokenKind::EqEq,
            TokenKind::AndAnd,
            TokenKind::Arrow,
            TokenKind::Eq,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Question,
            TokenKind::Bang,
            TokenKind::Amp,
            TokenKind::Op,
            TokenKind::Op,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn invalid_character_is_reported_and_skipped() {
    let output = lex("let a ¤ b");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::InvalidCharacter('¤'));
    assert_eq!(
        output.tokens.kinds(),
        vec![TokenKind::Let, TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]
    );
}

#[test]
fn spans_cover_source_text() {
    let source = "struct Point {}";
    let output = lex(source);
    assert_eq!(output.tokens[1].span, Span::new(7, 12));
    assert_eq!(output.tokens.iter().last().map(|t| t.span), Some(Span::point(15)));
}
