//! Statement tree produced by lowering, consumed by the pretty printer.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: String,
    pub is_async: bool,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// A `// text` line.
    Comment(String),
    /// `const <name> = <value>`
    Const { name: String, value: Expr },
    If(IfStmt),
    While { condition: String, body: Vec<Stmt> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    /// Emitted verbatim; never parsed.
    pub condition: String,
    pub then_body: Vec<Stmt>,
    pub else_branch: Option<ElseBranch>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElseBranch {
    ElseIf(Box<IfStmt>),
    Else(Vec<Stmt>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Ident(String),
    Call { callee: String, args: Vec<Expr> },
    Await(Box<Expr>),
}
