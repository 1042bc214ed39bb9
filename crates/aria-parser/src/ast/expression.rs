//! Expression AST nodes
//!
//! Aria has a single flat tier of left-associative binary operators, a prefix
//! `-`, and the `!!` unwrap suffix. Member access (`a.b`) and method calls
//! (`a.f(x)`) are binary expressions with the `.` operator.

use super::*;
use crate::token::Span;

/// Expression (produces a value)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    /// `left op right`
    Binary(BinaryExpression),

    /// `-operand`
    Unary(UnaryExpression),

    /// `operand!!`
    Postfix(PostfixExpression),

    /// `( expr )`
    Parenthesized(ParenthesizedExpression),

    /// `42`
    Number(NumberLiteral),

    /// `"text"`
    String(StringLiteral),

    /// `[a, b, c]`
    Array(ArrayLiteral),

    /// `alloc(Type) { .field = expr }`
    Alloc(AllocCall),

    /// `name(args)`
    Call(FunctionCall),

    /// `Type::Case(args)`
    EnumValue(EnumValue),

    /// `name`
    Identifier(Identifier),
}

impl Expression {
    pub fn span(&self) -> &Span {
        match self {
            Expression::Binary(e) => &e.span,
            Expression::Unary(e) => &e.span,
            Expression::Postfix(e) => &e.span,
            Expression::Parenthesized(e) => &e.span,
            Expression::Number(e) => &e.span,
            Expression::String(e) => &e.span,
            Expression::Array(e) => &e.span,
            Expression::Alloc(e) => &e.span,
            Expression::Call(e) => &e.span,
            Expression::EnumValue(e) => &e.span,
            Expression::Identifier(e) => &e.span,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Expression::Binary(_) => NodeKind::BinaryExpression,
            Expression::Unary(_) => NodeKind::UnaryExpression,
            Expression::Postfix(_) => NodeKind::PostfixExpression,
            Expression::Parenthesized(_) => NodeKind::ParenthesizedExpression,
            Expression::Number(_) => NodeKind::Number,
            Expression::String(_) => NodeKind::String,
            Expression::Array(_) => NodeKind::Array,
            Expression::Alloc(_) => NodeKind::AllocCall,
            Expression::Call(_) => NodeKind::FunctionCall,
            Expression::EnumValue(_) => NodeKind::EnumValue,
            Expression::Identifier(_) => NodeKind::Identifier,
        }
    }

    /// Check if this expression is a literal
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Expression::Number(_) | Expression::String(_) | Expression::Array(_)
        )
    }

    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Expression::Identifier(id) => Some(id),
            _ => None,
        }
    }
}

// ============================================================================
// Operators
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub right: Box<Expression>,
    pub span: Span,
}

impl BinaryExpression {
    /// `object.field`
    pub fn is_field_access(&self) -> bool {
        self.operator == BinaryOperator::Dot && matches!(*self.right, Expression::Identifier(_))
    }

    /// `object.method(args)`
    pub fn is_method_call(&self) -> bool {
        self.operator == BinaryOperator::Dot && matches!(*self.right, Expression::Call(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    ShiftLeft,
    ShiftRight,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    BitAnd,
    BitOr,
    BitXor,
    /// Member access: `.`
    Dot,
}

impl BinaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Remainder => "%",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::Greater => ">",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::Dot => ".",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOperator {
    /// `-`
    Negate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostfixExpression {
    pub operator: PostfixOperator,
    pub operand: Box<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PostfixOperator {
    /// `!!`
    Unwrap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParenthesizedExpression {
    pub expression: Box<Expression>,
    pub span: Span,
}

// ============================================================================
// Literals
// ============================================================================

/// Decimal integer literal, kept as written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberLiteral {
    pub value: String,
    pub span: Span,
}

impl NumberLiteral {
    /// The numeric value, or `None` if it does not fit in a `u64`
    pub fn as_u64(&self) -> Option<u64> {
        self.value.parse().ok()
    }
}

/// String literal; `value` is the raw text between the quotes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringLiteral {
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayLiteral {
    pub elements: Vec<Expression>,
    pub span: Span,
}

// ============================================================================
// Calls and allocation
// ============================================================================

/// `alloc(Type)` with an optional initializer block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocCall {
    pub ty: Type,
    pub initializer: Option<AllocBlock>,
    pub span: Span,
}

/// `{ .x = 1, .y = 2 }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocBlock {
    pub fields: Vec<FieldInitializer>,
    pub span: Span,
}

/// `.name = value`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldInitializer {
    pub name: Identifier,
    pub value: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionCall {
    pub callee: Identifier,
    pub arguments: Vec<Expression>,
    pub span: Span,
}

/// `Type::Case` or `Type::Case(args)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumValue {
    pub ty: Type,
    pub case: Identifier,
    pub arguments: Option<Vec<Expression>>,
    pub span: Span,
}
