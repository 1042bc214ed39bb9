//! Operator precedence table for expression parsing.
//!
//! Aria has a single binary tier: every binary operator, `.` included,
//! binds equally and associates to the left, so `a + b * c` is
//! `(a + b) * c`. Prefix `-` binds tighter than any binary operator and
//! the `!!` suffix tighter still.

use crate::ast::BinaryOperator;
use crate::token::TokenKind;

/// Operator precedence level (higher = tighter binding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    None = 0,
    Binary = 1,  // + - * / % << >> == != < > <= >= & | ^ .
    Unary = 2,   // -
    Postfix = 3, // !!
    Primary = 4, // literals, identifiers, calls, ( )
}

impl Precedence {
    /// The next tighter level, used for the right operand of a
    /// left-associative operator.
    pub fn next(self) -> Self {
        match self {
            Precedence::None => Precedence::Binary,
            Precedence::Binary => Precedence::Unary,
            Precedence::Unary => Precedence::Postfix,
            Precedence::Postfix | Precedence::Primary => Precedence::Primary,
        }
    }
}

/// Get the precedence of a token in infix position.
pub fn get_precedence(kind: &TokenKind) -> Precedence {
    if binary_operator(kind).is_some() {
        Precedence::Binary
    } else if matches!(kind, TokenKind::BangBang) {
        Precedence::Postfix
    } else {
        Precedence::None
    }
}

/// Map a token to the binary operator it denotes, if any.
pub fn binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    let operator = match kind {
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Minus => BinaryOperator::Subtract,
        TokenKind::Star => BinaryOperator::Multiply,
        TokenKind::Slash => BinaryOperator::Divide,
        TokenKind::Percent => BinaryOperator::Remainder,
        TokenKind::LessLess => BinaryOperator::ShiftLeft,
        TokenKind::GreaterGreater => BinaryOperator::ShiftRight,
        TokenKind::EqualEqual => BinaryOperator::Equal,
        TokenKind::BangEqual => BinaryOperator::NotEqual,
        TokenKind::Less => BinaryOperator::Less,
        TokenKind::Greater => BinaryOperator::Greater,
        TokenKind::LessEqual => BinaryOperator::LessEqual,
        TokenKind::GreaterEqual => BinaryOperator::GreaterEqual,
        TokenKind::Amp => BinaryOperator::BitAnd,
        TokenKind::Pipe => BinaryOperator::BitOr,
        TokenKind::Caret => BinaryOperator::BitXor,
        TokenKind::Dot => BinaryOperator::Dot,
        _ => return None,
    };
    Some(operator)
}
