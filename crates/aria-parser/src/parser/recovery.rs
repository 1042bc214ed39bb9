//! Error recovery strategies for the parser.
//!
//! When a rule fails, the loop that called it records the error and uses
//! these functions to skip ahead to a point where parsing can resume, so a
//! single pass reports several independent errors.

use super::Parser;
use crate::token::TokenKind;
use tracing::trace;

/// Where the parser was when a rule failed; decides which tokens are safe
/// restart points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncContext {
    /// File scope
    TopLevel,
    /// Statements inside `{ ... }`
    Block,
    /// Members of a struct or extension
    MemberBlock,
    /// Cases and nested structs of an enum
    EnumBody,
    /// Arms of a match statement
    Match,
}

/// Recover after a failed rule that started at token index `start`.
///
/// Always leaves the cursor strictly past `start` (unless at end of input),
/// then skips to the next restart point for `context`.
pub fn recover(parser: &mut Parser, start: usize, context: SyncContext) {
    if parser.is_halted() {
        return;
    }
    if parser.pos == start && !parser.at_eof() {
        parser.advance();
    }
    let skipped = synchronize(parser, context);
    trace!(?context, skipped, position = parser.pos, "resynchronized");
}

/// Skip tokens until a restart point for `context`; returns how many
/// tokens were skipped.
pub fn synchronize(parser: &mut Parser, context: SyncContext) -> usize {
    let start = parser.pos;
    let statements = matches!(context, SyncContext::TopLevel | SyncContext::Block);

    while !parser.at_eof() {
        let kind = parser.current_kind();

        if starts_item(kind) || (statements && starts_statement(kind)) {
            break;
        }
        if context == SyncContext::MemberBlock && starts_member(kind) {
            break;
        }
        if matches!(context, SyncContext::EnumBody | SyncContext::Match)
            && parser.check(&TokenKind::Case)
        {
            break;
        }
        if context == SyncContext::EnumBody && parser.check(&TokenKind::Struct) {
            break;
        }

        match kind {
            TokenKind::Semicolon if statements => {
                parser.advance();
                break;
            }
            TokenKind::LeftBrace => {
                skip_balanced(parser);
                if statements {
                    break;
                }
            }
            // A stray `}` at file scope has nothing to close
            TokenKind::RightBrace if context == SyncContext::TopLevel => {
                parser.advance();
                break;
            }
            TokenKind::RightBrace => break,
            _ => {
                parser.advance();
            }
        }
    }

    parser.pos - start
}

/// Skip a `{ ... }` group including nested groups. The cursor must be on
/// the opening brace; stops after the matching `}`, at end of input, or
/// before a file-scope declaration inside an unclosed group.
pub fn skip_balanced(parser: &mut Parser) {
    let mut depth = 0usize;
    while !parser.at_eof() && !parser.at_item_start() {
        match parser.current_kind() {
            TokenKind::LeftBrace => depth += 1,
            TokenKind::RightBrace => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    parser.advance();
                    return;
                }
            }
            _ => {}
        }
        parser.advance();
    }
}

/// Skip tokens until one of `expected` (or end of input).
pub fn skip_until(parser: &mut Parser, expected: &[TokenKind]) {
    while !parser.at_eof() && !parser.check_any(expected) {
        parser.advance();
    }
}

fn starts_statement(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Return
            | TokenKind::Val
            | TokenKind::Assert
            | TokenKind::If
            | TokenKind::While
            | TokenKind::For
            | TokenKind::Match
    )
}

/// `import`, `struct`, `extension`, `enum` or `func`.
pub fn starts_item(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Import
            | TokenKind::Struct
            | TokenKind::Extension
            | TokenKind::Enum
            | TokenKind::Func
    )
}

fn starts_member(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Func | TokenKind::Type | TokenKind::Operator | TokenKind::Reverse
    )
}
