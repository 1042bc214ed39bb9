//! Expression parsing
//!
//! Expressions are stratified as binary → unary → postfix → primary.
//! The binary level uses precedence climbing over the table in
//! [`super::precedence`]; with a single tier this yields flat
//! left-to-right grouping.

use super::guards::{check_depth, guarded};
use super::precedence::{binary_operator, get_precedence, Precedence};
use super::types::{at_enum_value, parse_type};
use super::{ParseError, Parser};
use crate::ast::*;
use crate::token::{Span, TokenKind};

/// Parse an expression.
pub fn parse_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    guarded(parser, "expression", |parser| {
        parse_binary_expression(parser, Precedence::Binary)
    })
}

/// Parse operators binding at least as tightly as `min_precedence`.
fn parse_binary_expression(
    parser: &mut Parser,
    min_precedence: Precedence,
) -> Result<Expression, ParseError> {
    let mut left = parse_unary_expression(parser)?;
    let mut folded = 0usize;

    loop {
        let precedence = get_precedence(parser.current_kind());
        if precedence < min_precedence {
            break;
        }
        let Some(operator) = binary_operator(parser.current_kind()) else {
            break;
        };
        check_depth(parser, folded, "binary expression")?;
        parser.advance();

        // Left-associative: the right operand only takes tighter operators.
        let right = parse_binary_expression(parser, precedence.next())?;

        let span = left.span().merge(right.span());
        left = Expression::Binary(BinaryExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            span,
        });
        folded += 1;
    }

    Ok(left)
}

/// Parse prefix `-` (right-associative, stackable) or a postfix expression.
fn parse_unary_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    if !parser.check(&TokenKind::Minus) {
        return parse_postfix_expression(parser);
    }

    guarded(parser, "unary expression", |parser| {
        let minus = parser.advance();
        let operand = parse_unary_expression(parser)?;
        let span = minus.span.merge(operand.span());
        Ok(Expression::Unary(UnaryExpression {
            operator: UnaryOperator::Negate,
            operand: Box::new(operand),
            span,
        }))
    })
}

/// Parse a primary followed by any number of `!!`.
fn parse_postfix_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    let mut expression = parse_primary(parser)?;
    let mut folded = 0usize;

    while parser.check(&TokenKind::BangBang) {
        check_depth(parser, folded, "postfix expression")?;
        let bang = parser.advance();
        let span = expression.span().merge(&bang.span);
        expression = Expression::Postfix(PostfixExpression {
            operator: PostfixOperator::Unwrap,
            operand: Box::new(expression),
            span,
        });
        folded += 1;
    }

    Ok(expression)
}

/// Parse a primary expression.
pub fn parse_primary(parser: &mut Parser) -> Result<Expression, ParseError> {
    let span = parser.current_span();

    match parser.current_kind() {
        TokenKind::Number(value) => {
            let value = value.clone();
            parser.advance();
            Ok(Expression::Number(NumberLiteral { value, span }))
        }

        TokenKind::String(value) => {
            let value = value.clone();
            parser.advance();
            Ok(Expression::String(StringLiteral { value, span }))
        }

        TokenKind::LeftBracket => parse_array_literal(parser),

        TokenKind::Alloc => parse_alloc_call(parser),

        TokenKind::LeftParen => {
            parser.advance();
            let expression = parse_expression(parser)?;
            let close = parser.expect(TokenKind::RightParen)?;
            Ok(Expression::Parenthesized(ParenthesizedExpression {
                expression: Box::new(expression),
                span: span.merge(&close.span),
            }))
        }

        // `Type::Case` takes priority over a bare identifier
        TokenKind::Identifier(_) if at_enum_value(parser) => parse_enum_value(parser),

        TokenKind::Identifier(_) if matches!(parser.peek(), Some(TokenKind::LeftParen)) => {
            let callee = parser.expect_identifier()?;
            let (arguments, close) = parse_arguments(parser)?;
            Ok(Expression::Call(FunctionCall {
                span: callee.span.merge(&close),
                callee,
                arguments,
            }))
        }

        TokenKind::Identifier(_) => Ok(Expression::Identifier(parser.expect_identifier()?)),

        _ => Err(parser.unexpected_token("an expression")),
    }
}

/// Parse `( [expr { , expr }] )`, returning the arguments and the span of
/// the closing parenthesis.
pub fn parse_arguments(parser: &mut Parser) -> Result<(Vec<Expression>, Span), ParseError> {
    parser.expect(TokenKind::LeftParen)?;
    let arguments = parse_expression_list(parser, &TokenKind::RightParen)?;
    let close = parser.expect(TokenKind::RightParen)?;
    Ok((arguments, close.span))
}

/// Comma-separated expressions up to (not including) `close`.
fn parse_expression_list(
    parser: &mut Parser,
    close: &TokenKind,
) -> Result<Vec<Expression>, ParseError> {
    let mut expressions = Vec::new();
    if parser.check(close) {
        return Ok(expressions);
    }

    loop {
        expressions.push(parse_expression(parser)?);
        if !parser.check(&TokenKind::Comma) {
            break;
        }
        parser.advance();
    }

    Ok(expressions)
}

/// Parse `[a, b, c]`.
fn parse_array_literal(parser: &mut Parser) -> Result<Expression, ParseError> {
    let open = parser.expect(TokenKind::LeftBracket)?;
    let elements = parse_expression_list(parser, &TokenKind::RightBracket)?;
    let close = parser.expect(TokenKind::RightBracket)?;

    Ok(Expression::Array(ArrayLiteral {
        elements,
        span: open.span.merge(&close.span),
    }))
}

/// Parse `alloc(Type)` and its optional `{ .field = expr, ... }` block.
///
/// A following `{` belongs to the alloc only when the next token is `.`;
/// otherwise it is left for the enclosing statement (`if alloc(T) { ... }`).
fn parse_alloc_call(parser: &mut Parser) -> Result<Expression, ParseError> {
    let alloc = parser.expect(TokenKind::Alloc)?;
    parser.expect(TokenKind::LeftParen)?;
    let ty = parse_type(parser)?;
    let close = parser.expect(TokenKind::RightParen)?;

    let initializer =
        if parser.check(&TokenKind::LeftBrace) && matches!(parser.peek(), Some(TokenKind::Dot)) {
            Some(parse_alloc_block(parser)?)
        } else {
            None
        };

    let end = initializer.as_ref().map_or(close.span, |block| block.span);
    Ok(Expression::Alloc(AllocCall {
        ty,
        initializer,
        span: alloc.span.merge(&end),
    }))
}

fn parse_alloc_block(parser: &mut Parser) -> Result<AllocBlock, ParseError> {
    guarded(parser, "alloc block", |parser| {
        let open = parser.expect(TokenKind::LeftBrace)?;
        let mut fields = Vec::new();

        loop {
            let dot = parser.expect(TokenKind::Dot)?;
            let name = parser.expect_identifier_for("a field name")?;
            parser.expect(TokenKind::Equal)?;
            let value = parse_expression(parser)?;
            fields.push(FieldInitializer {
                span: dot.span.merge(value.span()),
                name,
                value,
            });

            if !parser.check(&TokenKind::Comma) {
                break;
            }
            parser.advance();
            // Trailing comma
            if parser.check(&TokenKind::RightBrace) {
                break;
            }
        }

        let close = parser.expect(TokenKind::RightBrace)?;
        Ok(AllocBlock {
            fields,
            span: open.span.merge(&close.span),
        })
    })
}

/// Parse `Type::Case` or `Type::Case(args)`.
fn parse_enum_value(parser: &mut Parser) -> Result<Expression, ParseError> {
    let ty = parse_type(parser)?;
    parser.expect(TokenKind::ColonColon)?;
    let case = parser.expect_identifier_for("an enum case name")?;

    let (arguments, end) = if parser.check(&TokenKind::LeftParen) {
        let (arguments, close) = parse_arguments(parser)?;
        (Some(arguments), close)
    } else {
        (None, case.span)
    };

    Ok(Expression::EnumValue(EnumValue {
        span: ty.span.merge(&end),
        ty,
        case,
        arguments,
    }))
}
