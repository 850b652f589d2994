use crate::codegen::ast::*;
use crate::config::GeneratorConfig;

/// Render a synthesized function as source text ending in a single newline.
pub fn render_function(function: &FunctionDecl, config: &GeneratorConfig) -> String {
    let mut pp = PrettyPrinter::new(config);
    pp.emit_function(function);
    pp.buf
}

struct PrettyPrinter {
    buf: String,
    indent: usize,
    indent_unit: String,
    semicolons: bool,
    comments: bool,
}

impl PrettyPrinter {
    fn new(config: &GeneratorConfig) -> Self {
        Self {
            buf: String::new(),
            indent: 0,
            indent_unit: " ".repeat(config.output.indent_width),
            semicolons: config.output.semicolons,
            comments: config.output.comments,
        }
    }

    fn write(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    fn newline(&mut self) {
        self.buf.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.buf.push_str(&self.indent_unit);
        }
    }

    fn indent(&mut self) {
        self.indent += 1;
    }

    fn dedent(&mut self) {
        self.indent -= 1;
    }

    // ── Function ─────────────────────────────────────────────────────

    fn emit_function(&mut self, function: &FunctionDecl) {
        if function.is_async {
            self.write("async ");
        }
        self.write("function ");
        self.write(&function.name);
        self.write("() ");
        self.emit_body(&function.body);
        self.newline();
    }

    // ── Block ────────────────────────────────────────────────────────

    fn emit_body(&mut self, stmts: &[Stmt]) {
        self.write("{");
        self.newline();
        self.indent();
        for stmt in stmts {
            if matches!(stmt, Stmt::Comment(_)) && !self.comments {
                continue;
            }
            self.write_indent();
            self.emit_stmt(stmt);
            self.newline();
        }
        self.dedent();
        self.write_indent();
        self.write("}");
    }

    // ── Statements ───────────────────────────────────────────────────

    fn emit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Comment(text) => self.emit_comment(text),
            Stmt::Const { name, value } => {
                self.write("const ");
                self.write(name);
                self.write(" = ");
                self.emit_expr(value);
                if self.semicolons {
                    self.write(";");
                }
            }
            Stmt::If(if_stmt) => self.emit_if(if_stmt),
            Stmt::While { condition, body } => {
                self.write("while (");
                self.write(condition);
                self.write(") ");
                self.emit_body(body);
            }
        }
    }

    // One `//` line per source line, each at the current indent.
    fn emit_comment(&mut self, text: &str) {
        let mut lines = text.lines();
        match lines.next() {
            Some(first) => self.write_comment_line(first),
            None => self.write("//"),
        }
        for line in lines {
            self.newline();
            self.write_indent();
            self.write_comment_line(line);
        }
    }

    fn write_comment_line(&mut self, line: &str) {
        let line = line.trim_end();
        if line.is_empty() {
            self.write("//");
        } else {
            self.write("// ");
            self.write(line);
        }
    }

    fn emit_if(&mut self, stmt: &IfStmt) {
        self.write("if (");
        self.write(&stmt.condition);
        self.write(") ");
        self.emit_body(&stmt.then_body);
        match &stmt.else_branch {
            Some(ElseBranch::ElseIf(next)) => {
                self.write(" else ");
                self.emit_if(next);
            }
            Some(ElseBranch::Else(body)) => {
                self.write(" else ");
                self.emit_body(body);
            }
            None => {}
        }
    }

    // ── Expressions ──────────────────────────────────────────────────

    fn emit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Ident(name) => self.write(name),
            Expr::Call { callee, args } => {
                self.write(callee);
                self.write("(");
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_expr(arg);
                }
                self.write(")");
            }
            Expr::Await(inner) => {
                self.write("await ");
                self.emit_expr(inner);
            }
        }
    }
}
