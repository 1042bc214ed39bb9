//! Match pattern parsing
//!
//! A pattern is exactly `Variant(binding)`: one variant tag destructured
//! into one name. Anything else is an invalid pattern.

use super::{ParseError, Parser};
use crate::ast::{Identifier, Pattern};
use crate::token::TokenKind;

/// Parse `Variant(binding)`.
pub fn parse_pattern(parser: &mut Parser) -> Result<Pattern, ParseError> {
    let variant = pattern_identifier(parser, "expected a variant name")?;

    if !parser.check(&TokenKind::LeftParen) {
        return Err(ParseError::invalid_pattern(
            format!("expected `(` after `{}`", variant.name),
            parser.current_span(),
        ));
    }
    parser.advance();

    let binding = pattern_identifier(parser, "expected exactly one binding name")?;

    if !parser.check(&TokenKind::RightParen) {
        return Err(ParseError::invalid_pattern(
            "a pattern binds exactly one name",
            parser.current_span(),
        ));
    }
    let close = parser.advance();

    let span = variant.span.merge(&close.span);
    Ok(Pattern {
        variant,
        binding,
        span,
    })
}

fn pattern_identifier(parser: &mut Parser, reason: &str) -> Result<Identifier, ParseError> {
    if parser.check(&TokenKind::Identifier(String::new())) {
        parser.expect_identifier()
    } else {
        Err(ParseError::invalid_pattern(reason, parser.current_span()))
    }
}
