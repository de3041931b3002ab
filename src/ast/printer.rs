//! Indented listing of a syntax tree.
//!
//! Each node is one line, children are indented two spaces below their
//! parent and absent subtrees print nothing:
//!
//! ```text
//! Read: x
//! Assign to: x
//!   Op: +
//!     Id: x
//!     Const: 1
//! ```

use std::fmt::{self, Display, Formatter, Write};

use super::{ast::StmtSequence, expressions::Expr, statements::Stmt};

const INDENT: usize = 2;

struct TreePrinter<'a, W: Write> {
    out: &'a mut W,
    indent: usize,
}

impl<'a, W: Write> TreePrinter<'a, W> {
    fn new(out: &'a mut W) -> Self {
        TreePrinter { out, indent: 0 }
    }

    fn line(&mut self, text: fmt::Arguments) -> fmt::Result {
        writeln!(self.out, "{:indent$}{}", "", text, indent = self.indent)
    }

    fn nested<F>(&mut self, print: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        self.indent += INDENT;
        let result = print(self);
        self.indent -= INDENT;
        result
    }

    fn sequence(&mut self, sequence: &StmtSequence) -> fmt::Result {
        for stmt in sequence {
            self.stmt(stmt)?;
        }
        Ok(())
    }

    fn optional_expr(&mut self, expr: Option<&Expr>) -> fmt::Result {
        match expr {
            Some(expr) => self.expr(expr),
            None => Ok(()),
        }
    }

    fn stmt(&mut self, stmt: &Stmt) -> fmt::Result {
        match stmt {
            Stmt::If(stmt) => {
                self.line(format_args!("If"))?;
                self.nested(|printer| {
                    printer.optional_expr(stmt.condition.as_ref())?;
                    printer.sequence(&stmt.then_body)?;
                    match &stmt.else_body {
                        Some(else_body) => printer.sequence(else_body),
                        None => Ok(()),
                    }
                })
            }
            Stmt::Repeat(stmt) => {
                self.line(format_args!("Repeat"))?;
                self.nested(|printer| {
                    printer.sequence(&stmt.body)?;
                    printer.optional_expr(stmt.condition.as_ref())
                })
            }
            Stmt::Assign(stmt) => {
                self.line(format_args!("Assign to: {}", stmt.name))?;
                self.nested(|printer| printer.optional_expr(stmt.value.as_ref()))
            }
            Stmt::Read(stmt) => {
                self.line(format_args!("Read: {}", stmt.name.as_deref().unwrap_or("")))
            }
            Stmt::Write(stmt) => {
                self.line(format_args!("Write"))?;
                self.nested(|printer| printer.optional_expr(stmt.value.as_ref()))
            }
        }
    }

    fn expr(&mut self, expr: &Expr) -> fmt::Result {
        match expr {
            Expr::Op(op) => {
                self.line(format_args!("Op: {}", op.operator))?;
                self.nested(|printer| {
                    printer.optional_expr(op.left.as_deref())?;
                    printer.optional_expr(op.right.as_deref())
                })
            }
            Expr::Const(constant) => self.line(format_args!("Const: {}", constant.value)),
            Expr::Id(id) => self.line(format_args!("Id: {}", id.name)),
        }
    }
}

impl Display for StmtSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        TreePrinter::new(f).sequence(self)
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        TreePrinter::new(f).stmt(self)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        TreePrinter::new(f).expr(self)
    }
}
