//! Type reference parsing
//!
//! Types are only parsed in fixed slots (parameter annotations, return
//! types, `alloc(...)`, enum case fields, the left side of `::`), never
//! where an expression is expected.

use super::{ParseError, Parser};
use crate::ast::Type;
use crate::token::TokenKind;

/// Parse a dotted type reference: `int`, `geometry.Point`.
pub fn parse_type(parser: &mut Parser) -> Result<Type, ParseError> {
    let first = parser.expect_identifier_for("a type")?;
    let mut span = first.span;
    let mut segments = vec![first];

    while parser.check(&TokenKind::Dot) && matches!(parser.peek(), Some(TokenKind::Identifier(_))) {
        parser.advance();
        let segment = parser.expect_identifier()?;
        span = span.merge(&segment.span);
        segments.push(segment);
    }

    Ok(Type { segments, span })
}

/// Whether the tokens at the cursor form `IDENT { "." IDENT } "::"`,
/// i.e. the type half of an enum value.
pub fn at_enum_value(parser: &Parser) -> bool {
    let mut offset = 0;
    loop {
        match parser.peek_nth(offset) {
            Some(TokenKind::Identifier(_)) => {}
            _ => return false,
        }
        match parser.peek_nth(offset + 1) {
            Some(TokenKind::ColonColon) => return true,
            Some(TokenKind::Dot) => offset += 2,
            _ => return false,
        }
    }
}

/// Whether the current token can start a type.
pub fn starts_type(parser: &Parser) -> bool {
    parser.check(&TokenKind::Identifier(String::new()))
}
