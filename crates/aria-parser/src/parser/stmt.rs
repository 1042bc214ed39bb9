//! Statement parsing

use super::expr::parse_expression;
use super::guards::guarded;
use super::pattern::parse_pattern;
use super::recovery::{recover, SyncContext};
use super::{ParseError, Parser};
use crate::ast::*;
use crate::token::TokenKind;

/// Parse a statement.
pub fn parse_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    match parser.current_kind() {
        TokenKind::Return => parse_return_statement(parser),
        TokenKind::Val => parse_variable_declaration(parser),
        TokenKind::Assert => parse_assert_statement(parser),
        TokenKind::If => parse_if_statement(parser),
        TokenKind::While => parse_while_statement(parser),
        TokenKind::For => parse_for_statement(parser),
        TokenKind::Match => parse_match_statement(parser),

        TokenKind::Type | TokenKind::Operator | TokenKind::Reverse => Err(parser
            .unexpected_token("a statement")
            .with_suggestion(
                "type functions and operator overrides belong inside a struct or extension",
            )),

        _ => parse_expression_or_assignment(parser),
    }
}

/// Parse `{ statement* }`.
///
/// Errors inside the block are reported and skipped. If input ends, or a
/// file-scope declaration starts, before the closing brace, the statements
/// parsed so far are returned and an unterminated-block diagnostic is
/// recorded; the declaration is left for the caller.
pub fn parse_block(parser: &mut Parser) -> Result<Block, ParseError> {
    guarded(parser, "block", |parser| {
        let open = parser.expect(TokenKind::LeftBrace)?;
        let mut statements = Vec::new();

        while !parser.check(&TokenKind::RightBrace) && !parser.is_halted() {
            if parser.at_eof() || parser.at_item_start() {
                parser.report_unterminated(open.span);
                return Ok(Block {
                    statements,
                    span: open.span.merge(&parser.previous_span()),
                });
            }

            let start = parser.pos;
            match parse_statement(parser) {
                Ok(statement) => statements.push(statement),
                Err(err) => {
                    parser.report(err);
                    recover(parser, start, SyncContext::Block);
                }
            }
        }

        let close = parser.expect(TokenKind::RightBrace)?;
        Ok(Block {
            statements,
            span: open.span.merge(&close.span),
        })
    })
}

// ============================================================================
// Simple statements
// ============================================================================

/// Parse `return [expr];`
fn parse_return_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start = parser.expect(TokenKind::Return)?;

    let value = if parser.check(&TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expression(parser)?)
    };

    let semicolon = parser.expect(TokenKind::Semicolon)?;
    Ok(Statement::Return(ReturnStatement {
        value,
        span: start.span.merge(&semicolon.span),
    }))
}

/// Parse `val name [assign-op expr];`
fn parse_variable_declaration(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start = parser.expect(TokenKind::Val)?;
    let name = parser.expect_identifier_for("a variable name")?;

    let initializer = match assign_operator(parser.current_kind()) {
        Some(operator) => {
            parser.advance();
            let value = parse_expression(parser)?;
            Some(Initializer { operator, value })
        }
        None => None,
    };

    let semicolon = parser.expect(TokenKind::Semicolon)?;
    Ok(Statement::VariableDeclaration(VariableDeclaration {
        name,
        initializer,
        span: start.span.merge(&semicolon.span),
    }))
}

/// Parse `assert expr;`
fn parse_assert_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start = parser.expect(TokenKind::Assert)?;
    let condition = parse_expression(parser)?;
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(Statement::Assert(AssertStatement {
        condition,
        span: start.span.merge(&semicolon.span),
    }))
}

/// Parse `name assign-op expr;` or `expr;`.
///
/// The expression is parsed first; an assignment operator after it makes
/// this an assignment, which requires the expression to be a bare name.
fn parse_expression_or_assignment(parser: &mut Parser) -> Result<Statement, ParseError> {
    let expression = parse_expression(parser)?;

    if let Some(operator) = assign_operator(parser.current_kind()) {
        let target = match expression {
            Expression::Identifier(identifier) => identifier,
            _ => {
                return Err(parser
                    .unexpected_token("`;`")
                    .with_suggestion("only a plain variable name can be assigned to"));
            }
        };
        parser.advance();
        let value = parse_expression(parser)?;
        let semicolon = parser.expect(TokenKind::Semicolon)?;

        return Ok(Statement::Assignment(AssignmentStatement {
            span: target.span.merge(&semicolon.span),
            target,
            operator,
            value,
        }));
    }

    let semicolon = parser.expect(TokenKind::Semicolon)?;
    Ok(Statement::Expression(ExpressionStatement {
        span: expression.span().merge(&semicolon.span),
        expression,
    }))
}

/// Map an assignment operator token.
pub fn assign_operator(kind: &TokenKind) -> Option<AssignOperator> {
    let operator = match kind {
        TokenKind::Equal => AssignOperator::Assign,
        TokenKind::PlusEqual => AssignOperator::AddAssign,
        TokenKind::MinusEqual => AssignOperator::SubtractAssign,
        TokenKind::StarEqual => AssignOperator::MultiplyAssign,
        TokenKind::SlashEqual => AssignOperator::DivideAssign,
        TokenKind::PercentEqual => AssignOperator::RemainderAssign,
        TokenKind::LessLessEqual => AssignOperator::ShiftLeftAssign,
        TokenKind::GreaterGreaterEqual => AssignOperator::ShiftRightAssign,
        TokenKind::AmpEqual => AssignOperator::BitAndAssign,
        TokenKind::PipeEqual => AssignOperator::BitOrAssign,
        TokenKind::CaretEqual => AssignOperator::BitXorAssign,
        _ => return None,
    };
    Some(operator)
}

// ============================================================================
// Control flow
// ============================================================================

/// Parse `if cond { } { elsif cond { } } [else { }]`
fn parse_if_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start = parser.expect(TokenKind::If)?;
    let condition = parse_expression(parser)?;
    let then_block = parse_block(parser)?;
    let mut end = then_block.span;

    let mut elsif_clauses = Vec::new();
    while parser.check(&TokenKind::Elsif) {
        let elsif = parser.advance();
        let condition = parse_expression(parser)?;
        let body = parse_block(parser)?;
        end = body.span;
        elsif_clauses.push(ElsifClause {
            condition,
            span: elsif.span.merge(&body.span),
            body,
        });
    }

    let else_clause = parse_else_clause(parser)?;
    if let Some(clause) = &else_clause {
        end = clause.span;
    }

    Ok(Statement::If(IfStatement {
        condition,
        then_block,
        elsif_clauses,
        else_clause,
        span: start.span.merge(&end),
    }))
}

/// Parse `while cond { } [else { }]`
fn parse_while_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start = parser.expect(TokenKind::While)?;
    let condition = parse_expression(parser)?;
    let body = parse_block(parser)?;
    let else_clause = parse_else_clause(parser)?;

    let end = else_clause.as_ref().map_or(body.span, |clause| clause.span);
    Ok(Statement::While(WhileStatement {
        condition,
        body,
        else_clause,
        span: start.span.merge(&end),
    }))
}

/// Parse `for name in expr { } [else { }]`
fn parse_for_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start = parser.expect(TokenKind::For)?;
    let variable = parser.expect_identifier_for("a loop variable")?;
    parser.expect(TokenKind::In)?;
    let iterable = parse_expression(parser)?;
    let body = parse_block(parser)?;
    let else_clause = parse_else_clause(parser)?;

    let end = else_clause.as_ref().map_or(body.span, |clause| clause.span);
    Ok(Statement::For(ForStatement {
        variable,
        iterable,
        body,
        else_clause,
        span: start.span.merge(&end),
    }))
}

fn parse_else_clause(parser: &mut Parser) -> Result<Option<ElseClause>, ParseError> {
    if !parser.check(&TokenKind::Else) {
        return Ok(None);
    }
    let keyword = parser.advance();
    let body = parse_block(parser)?;
    Ok(Some(ElseClause {
        span: keyword.span.merge(&body.span),
        body,
    }))
}

/// Parse `match name { case Variant(x) => { } ... }`
fn parse_match_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start = parser.expect(TokenKind::Match)?;
    let subject = parser.expect_identifier_for("an identifier to match on")?;
    let open = parser.expect(TokenKind::LeftBrace)?;

    let mut arms = Vec::new();
    while !parser.check(&TokenKind::RightBrace) && !parser.is_halted() {
        if parser.at_eof() || parser.at_item_start() {
            parser.report_unterminated(open.span);
            return Ok(Statement::Match(MatchStatement {
                subject,
                arms,
                span: start.span.merge(&parser.previous_span()),
            }));
        }

        let arm_start = parser.pos;
        match parse_match_arm(parser) {
            Ok(arm) => {
                arms.push(arm);
                if parser.check(&TokenKind::Comma) {
                    parser.advance();
                }
            }
            Err(err) => {
                parser.report(err);
                recover(parser, arm_start, SyncContext::Match);
            }
        }
    }

    if arms.is_empty() {
        parser.report(parser.unexpected_token("`case`"));
    }

    let close = parser.expect(TokenKind::RightBrace)?;
    Ok(Statement::Match(MatchStatement {
        subject,
        arms,
        span: start.span.merge(&close.span),
    }))
}

fn parse_match_arm(parser: &mut Parser) -> Result<MatchArm, ParseError> {
    if !parser.check(&TokenKind::Case) {
        return Err(parser.unexpected_token("`case`"));
    }
    let case = parser.advance();
    let pattern = parse_pattern(parser)?;
    parser.expect(TokenKind::FatArrow)?;
    let body = parse_block(parser)?;

    Ok(MatchArm {
        pattern,
        span: case.span.merge(&body.span),
        body,
    })
}
