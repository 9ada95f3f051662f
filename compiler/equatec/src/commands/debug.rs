//! Debug commands: `parse` and `lex` for inspecting front-end output.

use equate_ir::{DeclKind, Declaration};

use super::read_file;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let lexed = equate_lexer::lex(&content);

    println!("Tokens for '{}' ({} tokens):", path, lexed.tokens.len());
    for tok in lexed.tokens.iter() {
        println!("  {:?} @ {:?}", tok.kind, tok.span);
    }
    if !lexed.errors.is_empty() {
        println!();
        println!("Errors:");
        for error in &lexed.errors {
            println!("  {:?}: {}", error.span, error.to_diagnostic().message);
        }
    }
}

/// Parse a file and display its declaration tree.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    let lexed = equate_lexer::lex(&content);
    let parsed = equate_parse::parse(&content, &lexed.tokens);

    println!("Parse result for '{path}':");
    println!("  Declarations: {}", parsed.file.declarations.len());
    println!("  Errors: {}", parsed.errors.len());

    if !parsed.file.declarations.is_empty() {
        println!();
        for decl in &parsed.file.declarations {
            print_declaration(decl, 1);
        }
    }

    if !parsed.errors.is_empty() {
        println!();
        println!("Errors:");
        for error in &parsed.errors {
            println!("  {:?}: {}", error.span, error.message);
        }
    }
}

fn print_declaration(decl: &Declaration, depth: usize) {
    let indent = "  ".repeat(depth);
    let attributes: String = decl
        .attributes
        .iter()
        .map(|attr| format!("@{} ", attr.name))
        .collect();
    let modifiers: String = decl
        .modifiers
        .iter()
        .map(|m| format!("{:?} ", m.kind))
        .collect();
    let name = match &decl.kind {
        DeclKind::Variable(var) => var
            .bindings
            .iter()
            .map(|b| match &b.ty {
                Some(ty) => format!("{}: {ty}", b.pattern),
                None => b.pattern.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => decl.name.clone().unwrap_or_default(),
    };
    let inherited = if decl.inherited.is_empty() {
        String::new()
    } else {
        format!(" : {}", decl.inherited.join(", "))
    };
    println!(
        "{indent}{attributes}{modifiers}{} {name}{inherited}",
        decl.kind.describe()
    );
    for member in decl.members.iter().flatten() {
        print_declaration(member, depth + 1);
    }
}
