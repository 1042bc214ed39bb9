//! Parser guards to prevent stack overflow
//!
//! Every recursive rule (blocks, expressions, prefix operators) runs through
//! [`guarded`], which counts nesting depth and fails with a
//! `LimitExceeded` error once the configured maximum is passed.

use super::{ParseError, Parser};
use tracing::debug;

/// Run `rule` one nesting level deeper.
///
/// The depth counter is restored on every path, so `?` can be used freely
/// inside `rule`.
pub fn guarded<T>(
    parser: &mut Parser,
    name: &'static str,
    rule: impl FnOnce(&mut Parser) -> Result<T, ParseError>,
) -> Result<T, ParseError> {
    check_depth(parser, 0, name)?;

    parser.depth += 1;
    let result = rule(parser);
    parser.depth -= 1;
    result
}

/// Fail if `extra` more levels on top of the current depth would pass the
/// limit.
///
/// Loops that fold operators into a left-deep tree (`a + b + c`, `x!!!!`)
/// call this with the number of nodes folded so far, so the finished tree
/// is never deeper than the configured maximum.
pub fn check_depth(parser: &Parser, extra: usize, name: &'static str) -> Result<(), ParseError> {
    let limit = parser.config.max_nesting_depth;
    let depth = parser.depth.saturating_add(extra);
    if depth < limit {
        return Ok(());
    }

    debug!(depth, rule = name, "nesting limit reached");
    Err(ParseError::parser_limit_exceeded(
        format!("maximum nesting depth ({}) exceeded in {}", limit, name),
        parser.current_span(),
    )
    .with_suggestion("split deeply nested code into smaller functions"))
}
