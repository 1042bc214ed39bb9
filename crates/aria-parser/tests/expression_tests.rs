//! Tests for expression parsing

use aria_parser::ast::*;
use aria_parser::parse;

/// Parse `source` as the expression of a single expression statement.
fn parse_expr(source: &str) -> Expression {
    let result = parse(&format!("{};", source));
    assert!(result.is_ok(), "Unexpected diagnostics: {:?}", result.diagnostics);
    match result.file.items.into_iter().next() {
        Some(Item::Statement(Statement::Expression(stmt))) => stmt.expression,
        other => panic!("Expected expression statement, got {:?}", other),
    }
}

fn as_binary(expression: &Expression) -> &BinaryExpression {
    match expression {
        Expression::Binary(binary) => binary,
        other => panic!("Expected binary expression, got {:?}", other),
    }
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_parse_number() {
    match parse_expr("1234") {
        Expression::Number(number) => {
            assert_eq!(number.value, "1234");
            assert_eq!(number.as_u64(), Some(1234));
        }
        _ => panic!("Expected number literal"),
    }
}

#[test]
fn test_parse_string() {
    match parse_expr("\"hi there\"") {
        Expression::String(string) => {
            assert_eq!(string.value, "hi there");
            assert_eq!(string.span.len(), 10);
        }
        _ => panic!("Expected string literal"),
    }
}

#[test]
fn test_parse_arrays() {
    match parse_expr("[1, \"two\", [3]]") {
        Expression::Array(array) => {
            assert_eq!(array.elements.len(), 3);
            assert!(matches!(array.elements[2], Expression::Array(_)));
        }
        _ => panic!("Expected array literal"),
    }

    match parse_expr("[]") {
        Expression::Array(array) => assert!(array.elements.is_empty()),
        _ => panic!("Expected array literal"),
    }
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_every_binary_operator() {
    let operators = [
        ("+", BinaryOperator::Add),
        ("-", BinaryOperator::Subtract),
        ("*", BinaryOperator::Multiply),
        ("/", BinaryOperator::Divide),
        ("%", BinaryOperator::Remainder),
        ("<<", BinaryOperator::ShiftLeft),
        (">>", BinaryOperator::ShiftRight),
        ("==", BinaryOperator::Equal),
        ("!=", BinaryOperator::NotEqual),
        ("<", BinaryOperator::Less),
        (">", BinaryOperator::Greater),
        ("<=", BinaryOperator::LessEqual),
        (">=", BinaryOperator::GreaterEqual),
        ("&", BinaryOperator::BitAnd),
        ("|", BinaryOperator::BitOr),
        ("^", BinaryOperator::BitXor),
        (".", BinaryOperator::Dot),
    ];

    for (symbol, expected) in operators {
        let expression = parse_expr(&format!("a {} b", symbol));
        let binary = as_binary(&expression);
        assert_eq!(binary.operator, expected);
        assert_eq!(binary.operator.as_str(), symbol);
    }
}

#[test]
fn test_binary_operators_share_one_precedence() {
    // No arithmetic tiers: (((1 + 2) * 3) == 9)
    let expression = parse_expr("1 + 2 * 3 == 9");
    let eq = as_binary(&expression);
    assert_eq!(eq.operator, BinaryOperator::Equal);
    let mul = as_binary(&eq.left);
    assert_eq!(mul.operator, BinaryOperator::Multiply);
    let add = as_binary(&mul.left);
    assert_eq!(add.operator, BinaryOperator::Add);
}

#[test]
fn test_parentheses_group() {
    let expression = parse_expr("a * (b + c)");
    let mul = as_binary(&expression);
    match &*mul.right {
        Expression::Parenthesized(paren) => {
            assert_eq!(as_binary(&paren.expression).operator, BinaryOperator::Add);
        }
        _ => panic!("Expected parenthesized expression"),
    }
}

#[test]
fn test_unary_minus_stacks() {
    match parse_expr("- - 5") {
        Expression::Unary(outer) => match *outer.operand {
            Expression::Unary(inner) => {
                assert_eq!(inner.operator, UnaryOperator::Negate);
                assert!(matches!(*inner.operand, Expression::Number(_)));
            }
            _ => panic!("Expected nested unary"),
        },
        _ => panic!("Expected unary expression"),
    }
}

#[test]
fn test_unwrap_suffix_repeats() {
    match parse_expr("lookup(k)!!!!") {
        Expression::Postfix(outer) => {
            assert_eq!(outer.operator, PostfixOperator::Unwrap);
            assert!(matches!(*outer.operand, Expression::Postfix(_)));
        }
        _ => panic!("Expected postfix expression"),
    }
}

// ============================================================================
// Member access and calls
// ============================================================================

#[test]
fn test_field_access_is_binary_dot() {
    let expression = parse_expr("T.field");
    let dot = as_binary(&expression);
    assert_eq!(dot.operator, BinaryOperator::Dot);
    assert!(dot.is_field_access());
    assert_eq!(dot.left.as_identifier().unwrap().name, "T");
    assert_eq!(dot.right.as_identifier().unwrap().name, "field");
}

#[test]
fn test_method_call_is_binary_dot_with_call() {
    let expression = parse_expr("list.get(0, 1)");
    let dot = as_binary(&expression);
    assert!(dot.is_method_call());
    match &*dot.right {
        Expression::Call(call) => {
            assert_eq!(call.callee.name, "get");
            assert_eq!(call.arguments.len(), 2);
        }
        _ => panic!("Expected function call"),
    }
}

#[test]
fn test_chained_access_groups_left() {
    let expression = parse_expr("a.b.c");
    let outer = as_binary(&expression);
    assert_eq!(outer.right.as_identifier().unwrap().name, "c");
    assert!(as_binary(&outer.left).is_field_access());
}

#[test]
fn test_function_call_without_arguments() {
    match parse_expr("now()") {
        Expression::Call(call) => {
            assert_eq!(call.callee.name, "now");
            assert!(call.arguments.is_empty());
            assert_eq!(call.span.end, 5);
        }
        _ => panic!("Expected function call"),
    }
}

// ============================================================================
// Enum values and allocation
// ============================================================================

#[test]
fn test_enum_value_is_not_binary() {
    match parse_expr("T::Case") {
        Expression::EnumValue(value) => {
            assert_eq!(value.ty.name(), "T");
            assert_eq!(value.case.name, "Case");
            assert!(value.arguments.is_none());
        }
        _ => panic!("Expected enum value"),
    }
}

#[test]
fn test_enum_value_with_dotted_type_and_arguments() {
    match parse_expr("shapes.Shape::Circle(radius * 2)") {
        Expression::EnumValue(value) => {
            assert_eq!(value.ty.segments.len(), 2);
            assert_eq!(value.case.name, "Circle");
            assert_eq!(value.arguments.as_ref().unwrap().len(), 1);
            assert_eq!(value.span.start, 0);
        }
        _ => panic!("Expected enum value"),
    }
}

#[test]
fn test_enum_value_inside_binary() {
    let expression = parse_expr("state == State::Idle");
    let eq = as_binary(&expression);
    assert!(matches!(*eq.right, Expression::EnumValue(_)));
}

#[test]
fn test_alloc_without_initializer() {
    match parse_expr("alloc(geo.Point)") {
        Expression::Alloc(alloc) => {
            assert_eq!(alloc.ty.name(), "geo.Point");
            assert!(alloc.initializer.is_none());
        }
        _ => panic!("Expected alloc call"),
    }
}

#[test]
fn test_alloc_block_binds_before_binary() {
    let expression = parse_expr("alloc(P) { .x = 1 } + other");
    let add = as_binary(&expression);
    match &*add.left {
        Expression::Alloc(alloc) => assert_eq!(alloc.initializer.as_ref().unwrap().fields.len(), 1),
        _ => panic!("Expected alloc call"),
    }
}

#[test]
fn test_alloc_field_values_are_expressions() {
    match parse_expr("alloc(Node) { .value = a + b, .next = Option::None, }") {
        Expression::Alloc(alloc) => {
            let fields = alloc.initializer.unwrap().fields;
            assert!(matches!(fields[0].value, Expression::Binary(_)));
            assert!(matches!(fields[1].value, Expression::EnumValue(_)));
        }
        _ => panic!("Expected alloc call"),
    }
}
