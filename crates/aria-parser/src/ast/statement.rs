//! Statement AST nodes
//!
//! This module defines all statement types in the Aria language, including:
//! - Variable declarations (`val`) and assignments
//! - Return and assert
//! - Control flow (if/elsif/else, while/else, for/else, match)

use super::*;
use crate::token::Span;

/// Statement inside a block or at file scope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    /// `return [expr];`
    Return(ReturnStatement),

    /// `expr;`
    Expression(ExpressionStatement),

    /// `val name [op expr];`
    VariableDeclaration(VariableDeclaration),

    /// `name op expr;`
    Assignment(AssignmentStatement),

    /// `assert expr;`
    Assert(AssertStatement),

    /// `if expr { } elsif expr { } else { }`
    If(IfStatement),

    /// `while expr { } [else { }]`
    While(WhileStatement),

    /// `for name in expr { } [else { }]`
    For(ForStatement),

    /// `match name { case Variant(x) => { } }`
    Match(MatchStatement),
}

impl Statement {
    /// Get the span of this statement
    pub fn span(&self) -> &Span {
        match self {
            Statement::Return(s) => &s.span,
            Statement::Expression(s) => &s.span,
            Statement::VariableDeclaration(s) => &s.span,
            Statement::Assignment(s) => &s.span,
            Statement::Assert(s) => &s.span,
            Statement::If(s) => &s.span,
            Statement::While(s) => &s.span,
            Statement::For(s) => &s.span,
            Statement::Match(s) => &s.span,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Statement::Return(_) => NodeKind::ReturnStatement,
            Statement::Expression(_) => NodeKind::ExpressionStatement,
            Statement::VariableDeclaration(_) => NodeKind::VariableDeclaration,
            Statement::Assignment(_) => NodeKind::AssignmentStatement,
            Statement::Assert(_) => NodeKind::AssertStatement,
            Statement::If(_) => NodeKind::IfStatement,
            Statement::While(_) => NodeKind::WhileStatement,
            Statement::For(_) => NodeKind::ForStatement,
            Statement::Match(_) => NodeKind::MatchStatement,
        }
    }

    /// Check if this statement is a control-flow statement
    pub fn is_control_flow(&self) -> bool {
        matches!(
            self,
            Statement::If(_) | Statement::While(_) | Statement::For(_) | Statement::Match(_)
        )
    }
}

// ============================================================================
// Simple statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDeclaration {
    pub name: Identifier,
    pub initializer: Option<Initializer>,
    pub span: Span,
}

/// The `op expr` tail of a `val` declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Initializer {
    pub operator: AssignOperator,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentStatement {
    pub target: Identifier,
    pub operator: AssignOperator,
    pub value: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssertStatement {
    pub condition: Expression,
    pub span: Span,
}

/// `=` and the compound assignment operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AssignOperator {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    RemainderAssign,
    ShiftLeftAssign,
    ShiftRightAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
}

impl AssignOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignOperator::Assign => "=",
            AssignOperator::AddAssign => "+=",
            AssignOperator::SubtractAssign => "-=",
            AssignOperator::MultiplyAssign => "*=",
            AssignOperator::DivideAssign => "/=",
            AssignOperator::RemainderAssign => "%=",
            AssignOperator::ShiftLeftAssign => "<<=",
            AssignOperator::ShiftRightAssign => ">>=",
            AssignOperator::BitAndAssign => "&=",
            AssignOperator::BitOrAssign => "|=",
            AssignOperator::BitXorAssign => "^=",
        }
    }

    /// The binary operator a compound assignment applies, if any
    pub fn binary_operator(self) -> Option<BinaryOperator> {
        match self {
            AssignOperator::Assign => None,
            AssignOperator::AddAssign => Some(BinaryOperator::Add),
            AssignOperator::SubtractAssign => Some(BinaryOperator::Subtract),
            AssignOperator::MultiplyAssign => Some(BinaryOperator::Multiply),
            AssignOperator::DivideAssign => Some(BinaryOperator::Divide),
            AssignOperator::RemainderAssign => Some(BinaryOperator::Remainder),
            AssignOperator::ShiftLeftAssign => Some(BinaryOperator::ShiftLeft),
            AssignOperator::ShiftRightAssign => Some(BinaryOperator::ShiftRight),
            AssignOperator::BitAndAssign => Some(BinaryOperator::BitAnd),
            AssignOperator::BitOrAssign => Some(BinaryOperator::BitOr),
            AssignOperator::BitXorAssign => Some(BinaryOperator::BitXor),
        }
    }
}

// ============================================================================
// Control flow
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_block: Block,
    pub elsif_clauses: Vec<ElsifClause>,
    pub else_clause: Option<ElseClause>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElsifClause {
    pub condition: Expression,
    pub body: Block,
    pub span: Span,
}

/// `else { ... }`
///
/// On `while` and `for` this is the completion clause: it runs only when
/// the loop finishes without exiting early.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElseClause {
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Block,
    pub else_clause: Option<ElseClause>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForStatement {
    pub variable: Identifier,
    pub iterable: Expression,
    pub body: Block,
    pub else_clause: Option<ElseClause>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchStatement {
    pub subject: Identifier,

    /// Never empty
    pub arms: Vec<MatchArm>,

    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchArm {
    pub pattern: Pattern,
    pub body: Block,
    pub span: Span,
}
