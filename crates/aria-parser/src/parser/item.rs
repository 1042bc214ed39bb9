//! Top-level item parsing: imports, structs, extensions, enums, functions.

use super::recovery::{recover, SyncContext};
use super::stmt::{parse_block, parse_statement};
use super::types::{parse_type, starts_type};
use super::{ParseError, Parser};
use crate::ast::*;
use crate::token::{Span, TokenKind};

/// Parse one item at file scope.
pub fn parse_item(parser: &mut Parser) -> Result<Item, ParseError> {
    match parser.current_kind() {
        TokenKind::Import => parse_import(parser).map(Item::Import),
        TokenKind::Struct => parse_struct_definition(parser).map(Item::Struct),
        TokenKind::Extension => parse_extension_definition(parser).map(Item::Extension),
        TokenKind::Enum => parse_enum_definition(parser).map(Item::Enum),
        TokenKind::Func => parse_function_definition(parser).map(Item::Function),

        TokenKind::Type | TokenKind::Operator | TokenKind::Reverse => Err(parser
            .unexpected_token("an item or statement")
            .with_suggestion(
                "type functions and operator overrides belong inside a struct or extension",
            )),

        _ => parse_statement(parser).map(Item::Statement),
    }
}

/// Parse `import [name from] module.path;`
fn parse_import(parser: &mut Parser) -> Result<Import, ParseError> {
    let start = parser.expect(TokenKind::Import)?;
    let first = parser.expect_identifier_for("a module name")?;

    let (item, mut path) = if parser.check(&TokenKind::From) {
        parser.advance();
        let module = parser.expect_identifier_for("a module name")?;
        (Some(first), vec![module])
    } else {
        (None, vec![first])
    };

    while parser.check(&TokenKind::Dot) {
        parser.advance();
        path.push(parser.expect_identifier_for("a module name")?);
    }

    let semicolon = parser.expect(TokenKind::Semicolon)?;
    Ok(Import {
        item,
        path,
        span: start.span.merge(&semicolon.span),
    })
}

/// Parse `struct Name { members }`
pub fn parse_struct_definition(parser: &mut Parser) -> Result<StructDefinition, ParseError> {
    let start = parser.expect(TokenKind::Struct)?;
    let name = parser.expect_identifier_for("a struct name")?;
    let (members, end) = parse_member_block(parser)?;

    Ok(StructDefinition {
        name,
        members,
        span: start.span.merge(&end),
    })
}

/// Parse `extension Name { members }`
fn parse_extension_definition(parser: &mut Parser) -> Result<ExtensionDefinition, ParseError> {
    let start = parser.expect(TokenKind::Extension)?;
    let name = parser.expect_identifier_for("a type name")?;
    let (members, end) = parse_member_block(parser)?;

    Ok(ExtensionDefinition {
        name,
        members,
        span: start.span.merge(&end),
    })
}

/// Parse the braced member list of a struct or extension, returning the
/// members and the span of the closing brace.
///
/// `func` starts a member here; any other file-scope keyword means the
/// block was never closed.
fn parse_member_block(parser: &mut Parser) -> Result<(Vec<Member>, Span), ParseError> {
    let open = parser.expect(TokenKind::LeftBrace)?;
    let mut members = Vec::new();

    while !parser.check(&TokenKind::RightBrace) && !parser.is_halted() {
        if parser.at_eof() || (parser.at_item_start() && !parser.check(&TokenKind::Func)) {
            parser.report_unterminated(open.span);
            return Ok((members, parser.previous_span()));
        }

        let start = parser.pos;
        match parse_member(parser) {
            Ok(member) => members.push(member),
            Err(err) => {
                parser.report(err);
                recover(parser, start, SyncContext::MemberBlock);
            }
        }
    }

    let close = parser.expect(TokenKind::RightBrace)?;
    Ok((members, close.span))
}

fn parse_member(parser: &mut Parser) -> Result<Member, ParseError> {
    match parser.current_kind() {
        TokenKind::Func => parse_function_definition(parser).map(Member::Function),
        TokenKind::Type => parse_type_function_definition(parser).map(Member::TypeFunction),
        TokenKind::Operator | TokenKind::Reverse => {
            parse_operator_override(parser).map(Member::Operator)
        }
        _ => Err(parser.unexpected_token("`func`, `type func` or `operator`")),
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Parse `enum Name { case A(int), struct Data { }, case B }`
fn parse_enum_definition(parser: &mut Parser) -> Result<EnumDefinition, ParseError> {
    let start = parser.expect(TokenKind::Enum)?;
    let name = parser.expect_identifier_for("an enum name")?;
    let open = parser.expect(TokenKind::LeftBrace)?;

    let mut items = Vec::new();
    let mut unterminated = false;
    while !parser.check(&TokenKind::RightBrace) && !parser.is_halted() {
        // Nested structs belong to the enum
        if parser.at_eof() || (parser.at_item_start() && !parser.check(&TokenKind::Struct)) {
            unterminated = true;
            break;
        }

        let item_start = parser.pos;
        let result = match parser.current_kind() {
            TokenKind::Case => parse_enum_case(parser).map(EnumItem::Case),
            TokenKind::Struct => parse_struct_definition(parser).map(EnumItem::Struct),
            _ => Err(parser.unexpected_token("`case` or `struct`")),
        };

        match result {
            Ok(item) => {
                let is_case = matches!(item, EnumItem::Case(_));
                items.push(item);
                if is_case && parser.check(&TokenKind::Comma) {
                    parser.advance();
                }
            }
            Err(err) => {
                parser.report(err);
                recover(parser, item_start, SyncContext::EnumBody);
            }
        }
    }

    let end = if unterminated {
        parser.report_unterminated(open.span);
        parser.previous_span()
    } else {
        parser.expect(TokenKind::RightBrace)?.span
    };

    let definition = EnumDefinition {
        name,
        items,
        span: start.span.merge(&end),
    };

    if definition.cases().next().is_none() {
        parser.report(ParseError::empty_enum(
            definition.name.name.clone(),
            definition.name.span,
        ));
    }

    Ok(definition)
}

/// Parse `case Name [ ( [type {, type}] ) ]`
fn parse_enum_case(parser: &mut Parser) -> Result<EnumCase, ParseError> {
    let start = parser.expect(TokenKind::Case)?;
    let name = parser.expect_identifier_for("a case name")?;

    if !parser.check(&TokenKind::LeftParen) {
        return Ok(EnumCase {
            span: start.span.merge(&name.span),
            name,
            fields: None,
        });
    }

    parser.advance();
    let mut fields = Vec::new();
    if !parser.check(&TokenKind::RightParen) {
        loop {
            fields.push(parse_type(parser)?);
            if !parser.check(&TokenKind::Comma) {
                break;
            }
            parser.advance();
        }
    }
    let close = parser.expect(TokenKind::RightParen)?;

    Ok(EnumCase {
        name,
        fields: Some(fields),
        span: start.span.merge(&close.span),
    })
}

// ============================================================================
// Functions
// ============================================================================

/// Parse `func name(params) [type] { body }`
pub fn parse_function_definition(parser: &mut Parser) -> Result<FunctionDefinition, ParseError> {
    let start = parser.expect(TokenKind::Func)?;
    let name = parser.expect_identifier_for("a function name")?;
    let parameters = parse_parameters(parser)?;
    let return_type = parse_return_type(parser)?;
    let body = parse_block(parser)?;

    Ok(FunctionDefinition {
        name,
        parameters,
        return_type,
        span: start.span.merge(&body.span),
        body,
    })
}

/// Parse `type func name(params) [type] { body }`
fn parse_type_function_definition(
    parser: &mut Parser,
) -> Result<FunctionDefinition, ParseError> {
    let start = parser.expect(TokenKind::Type)?;
    let mut function = parse_function_definition(parser)?;
    function.span = start.span.merge(&function.span);
    Ok(function)
}

/// Parse `[reverse] operator op (rhs|lhs) [type] { body }`
fn parse_operator_override(parser: &mut Parser) -> Result<OperatorOverride, ParseError> {
    let start = parser.current_span();
    let reverse = parser.check(&TokenKind::Reverse);
    if reverse {
        parser.advance();
    }
    parser.expect(TokenKind::Operator)?;

    let operator = overridable_operator(parser.current_kind()).ok_or_else(|| {
        parser
            .unexpected_token("an overridable operator")
            .with_suggestion("one of + - * / % << >> == != < > <= >= & | ^ u-")
    })?;
    parser.advance();

    parser.expect(TokenKind::LeftParen)?;
    let side = parser
        .current_kind()
        .as_identifier()
        .and_then(OperandSide::from_name)
        .ok_or_else(|| parser.unexpected_token("`rhs` or `lhs`"))?;
    parser.advance();
    parser.expect(TokenKind::RightParen)?;

    let return_type = parse_return_type(parser)?;
    let body = parse_block(parser)?;

    Ok(OperatorOverride {
        reverse,
        operator,
        side,
        return_type,
        span: start.merge(&body.span),
        body,
    })
}

/// Map a token to the operator it overrides.
pub fn overridable_operator(kind: &TokenKind) -> Option<OverridableOperator> {
    let operator = match kind {
        TokenKind::Plus => OverridableOperator::Add,
        TokenKind::Minus => OverridableOperator::Subtract,
        TokenKind::Star => OverridableOperator::Multiply,
        TokenKind::Slash => OverridableOperator::Divide,
        TokenKind::Percent => OverridableOperator::Remainder,
        TokenKind::LessLess => OverridableOperator::ShiftLeft,
        TokenKind::GreaterGreater => OverridableOperator::ShiftRight,
        TokenKind::EqualEqual => OverridableOperator::Equal,
        TokenKind::BangEqual => OverridableOperator::NotEqual,
        TokenKind::Less => OverridableOperator::Less,
        TokenKind::Greater => OverridableOperator::Greater,
        TokenKind::LessEqual => OverridableOperator::LessEqual,
        TokenKind::GreaterEqual => OverridableOperator::GreaterEqual,
        TokenKind::Amp => OverridableOperator::BitAnd,
        TokenKind::Pipe => OverridableOperator::BitOr,
        TokenKind::Caret => OverridableOperator::BitXor,
        TokenKind::Identifier(name) if name == "u-" => OverridableOperator::Negate,
        _ => return None,
    };
    Some(operator)
}

/// Parse `( [param {, param}] )`.
fn parse_parameters(parser: &mut Parser) -> Result<Vec<Parameter>, ParseError> {
    parser.expect(TokenKind::LeftParen)?;
    let mut parameters = Vec::new();

    if parser.check_any(&[TokenKind::Identifier(String::new()), TokenKind::DotDotDot]) {
        loop {
            parameters.push(parse_parameter(parser)?);
            if !parser.check(&TokenKind::Comma) {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::RightParen)?;
    Ok(parameters)
}

/// Parse `...` or `name [: type]`.
fn parse_parameter(parser: &mut Parser) -> Result<Parameter, ParseError> {
    if parser.check(&TokenKind::DotDotDot) {
        let token = parser.advance();
        return Ok(Parameter {
            kind: ParameterKind::Variadic,
            span: token.span,
        });
    }

    let name = parser.expect_identifier_for("a parameter")?;
    let (ty, span) = if parser.check(&TokenKind::Colon) {
        parser.advance();
        let ty = parse_type(parser)?;
        let span = name.span.merge(&ty.span);
        (Some(ty), span)
    } else {
        (None, name.span)
    };

    Ok(Parameter {
        kind: ParameterKind::Named { name, ty },
        span,
    })
}

/// An identifier between the parameter list and the body is the return type.
fn parse_return_type(parser: &mut Parser) -> Result<Option<Type>, ParseError> {
    if starts_type(parser) {
        parse_type(parser).map(Some)
    } else {
        Ok(None)
    }
}
