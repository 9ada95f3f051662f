//! Generated declaration printer.
//!
//! Prints exactly one layout:
//!
//! ```text
//! extension T: Equatable {
//!     public static func ==(lhs: T, rhs: T) -> Bool {
//!         return lhs.a == rhs.a && lhs.b == rhs.b
//!     }
//! }
//! ```
//!
//! Names that are reserved words are printed backticked.

use equate_ir::generated::EQ_OPERATOR;
use equate_ir::generated::{LHS, RHS};
use equate_ir::keywords::is_reserved;
use equate_ir::{BinaryOp, EqualityFunction, Expr, GeneratedDeclaration};

use crate::emitter::{Emitter, StringEmitter};

/// Prints generated declarations to an [`Emitter`].
pub struct Printer<E: Emitter> {
    emitter: E,
    indent: usize,
}

impl<E: Emitter> Printer<E> {
    pub fn new(emitter: E) -> Self {
        Printer { emitter, indent: 0 }
    }

    /// Consume the printer, returning its emitter.
    pub fn into_emitter(self) -> E {
        self.emitter
    }

    pub fn print_generated(&mut self, generated: &GeneratedDeclaration) {
        self.start_line();
        self.emitter.emit("extension ");
        self.emitter.emit(&name(&generated.extended_type));
        if !generated.conformances.is_empty() {
            self.emitter.emit(": ");
            let conformances: Vec<_> = generated.conformances.iter().map(|c| name(c)).collect();
            self.emitter.emit(&conformances.join(", "));
        }
        self.emitter.emit(" {");
        self.emitter.emit_newline();

        self.indent += 1;
        self.print_function(&generated.function);
        self.indent -= 1;

        self.start_line();
        self.emitter.emit("}");
    }

    fn print_function(&mut self, function: &EqualityFunction) {
        let operand = name(&function.operand_type);
        self.start_line();
        if let Some(visibility) = function.visibility {
            self.emitter.emit(visibility.as_str());
            self.emitter.emit_space();
        }
        self.emitter.emit(&format!(
            "static func {EQ_OPERATOR}({LHS}: {operand}, {RHS}: {operand}) -> Bool {{"
        ));
        self.emitter.emit_newline();

        self.indent += 1;
        self.start_line();
        self.emitter.emit("return ");
        self.print_expr(&function.body);
        self.emitter.emit_newline();
        self.indent -= 1;

        self.start_line();
        self.emitter.emit("}");
        self.emitter.emit_newline();
    }

    pub fn print_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Field { base, field } => {
                self.emitter.emit(&name(base));
                self.emitter.emit(".");
                self.emitter.emit(&name(field));
            }
            Expr::Binary { op, left, right } => {
                self.print_operand(*op, left, false);
                self.emitter.emit_space();
                self.emitter.emit(op.as_str());
                self.emitter.emit_space();
                self.print_operand(*op, right, true);
            }
        }
    }

    /// `==` binds tighter than `&&`, and both associate to the left, so
    /// parentheses are only needed for a right-nested operand of the same
    /// operator or an `&&` under `==`.
    fn print_operand(&mut self, parent: BinaryOp, operand: &Expr, is_right: bool) {
        let needs_parens = match operand {
            Expr::Field { .. } => false,
            Expr::Binary { op, .. } => {
                (*op == parent && is_right) || (parent == BinaryOp::Eq && *op == BinaryOp::And)
            }
        };
        if needs_parens {
            self.emitter.emit("(");
            self.print_expr(operand);
            self.emitter.emit(")");
        } else {
            self.print_expr(operand);
        }
    }

    fn start_line(&mut self) {
        self.emitter.emit_indent(self.indent);
    }
}

/// An identifier as it must appear in source.
fn name(ident: &str) -> String {
    if is_reserved(ident) {
        format!("`{ident}`")
    } else {
        ident.to_string()
    }
}

/// Print one generated declaration, without a trailing newline.
pub fn print_generated(generated: &GeneratedDeclaration) -> String {
    let mut printer = Printer::new(StringEmitter::new());
    printer.print_generated(generated);
    printer.into_emitter().output()
}

pub fn print_expr(expr: &Expr) -> String {
    let mut printer = Printer::new(StringEmitter::new());
    printer.print_expr(expr);
    printer.into_emitter().output()
}
