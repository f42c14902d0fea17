//!
//!
use marl_syntax::Span;

#[derive(Clone, Debug, PartialEq)]
///
pub struct Module {
    pub stmts: Box<[Stmt]>,
}

#[derive(Clone, Debug, PartialEq)]
///
pub enum Stmt {
    Assign(Box<AssignStmt>),
    Extern(Box<ExternStmt>),
    Error(Span),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssignStmt {
    pub name: String,
    pub name_span: Span,
    pub value: Expr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExternStmt {
    pub expr: Expr,
    /// Span of the wrapped expression (excluding the `::` marker),
    /// echoed verbatim when the statement runs.
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
///
pub enum Expr {
    Ident(String, Span),
    Int(i64, Span),
    Float(f64, Span),
    Str(String, Span),
    List(Box<[Expr]>),
    Record(Module),
    If(Box<IfExpr>),
    Switch(Box<SwitchExpr>),
    FnDef(Box<FnDefExpr>),
    Call(Box<CallExpr>),
    Attr(Box<AttrExpr>),
    Group(Box<Expr>),
    Error(Span),
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfExpr {
    pub cond: Expr,
    pub then: Expr,
    pub otherwise: Expr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwitchExpr {
    pub scrutinee: Expr,
    pub cases: Box<[CaseArm]>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CaseArm {
    pub guard: Expr,
    pub body: Expr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FnDefExpr {
    pub params: Box<[String]>,
    pub body: Expr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CallExpr {
    pub callee: Expr,
    pub args: Box<[Expr]>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttrExpr {
    pub object: Expr,
    pub name: String,
    pub name_span: Span,
}
