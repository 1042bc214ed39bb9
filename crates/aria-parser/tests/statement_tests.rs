//! Tests for statement parsing

use aria_parser::ast::*;
use aria_parser::parse;

fn parse_statement(source: &str) -> Statement {
    let result = parse(source);
    assert!(result.is_ok(), "Unexpected diagnostics: {:?}", result.diagnostics);
    assert_eq!(result.file.items.len(), 1);
    match result.file.items.into_iter().next() {
        Some(Item::Statement(statement)) => statement,
        other => panic!("Expected statement, got {:?}", other),
    }
}

// ============================================================================
// Variable declarations and assignments
// ============================================================================

#[test]
fn test_parse_val_with_initializer() {
    match parse_statement("val count = 42;") {
        Statement::VariableDeclaration(decl) => {
            assert_eq!(decl.name.name, "count");
            let init = decl.initializer.unwrap();
            assert_eq!(init.operator, AssignOperator::Assign);
            assert!(matches!(init.value, Expression::Number(ref n) if n.value == "42"));
        }
        _ => panic!("Expected variable declaration"),
    }
}

#[test]
fn test_parse_val_with_compound_initializer() {
    match parse_statement("val total += 1;") {
        Statement::VariableDeclaration(decl) => {
            assert_eq!(decl.initializer.unwrap().operator, AssignOperator::AddAssign);
        }
        _ => panic!("Expected variable declaration"),
    }
}

#[test]
fn test_parse_alloc_initializer() {
    match parse_statement("val x = alloc(Point) { .x = 1, .y = 2 };") {
        Statement::VariableDeclaration(decl) => match decl.initializer.unwrap().value {
            Expression::Alloc(alloc) => {
                assert_eq!(alloc.ty.name(), "Point");
                let block = alloc.initializer.unwrap();
                let names: Vec<&str> = block.fields.iter().map(|f| f.name.name.as_str()).collect();
                assert_eq!(names, vec!["x", "y"]);
            }
            _ => panic!("Expected alloc call"),
        },
        _ => panic!("Expected variable declaration"),
    }
}

#[test]
fn test_parse_assignment_operators() {
    let cases = [
        ("x = 1;", AssignOperator::Assign),
        ("x -= 1;", AssignOperator::SubtractAssign),
        ("x *= 1;", AssignOperator::MultiplyAssign),
        ("x /= 1;", AssignOperator::DivideAssign),
        ("x %= 1;", AssignOperator::RemainderAssign),
        ("x >>= 1;", AssignOperator::ShiftRightAssign),
        ("x &= 1;", AssignOperator::BitAndAssign),
        ("x |= 1;", AssignOperator::BitOrAssign),
        ("x ^= 1;", AssignOperator::BitXorAssign),
    ];

    for (source, expected) in cases {
        match parse_statement(source) {
            Statement::Assignment(assign) => {
                assert_eq!(assign.target.name, "x");
                assert_eq!(assign.operator, expected, "operator in {:?}", source);
            }
            _ => panic!("Expected assignment in {:?}", source),
        }
    }
}

#[test]
fn test_parse_assert_and_return() {
    match parse_statement("assert n >= 0;") {
        Statement::Assert(stmt) => {
            assert!(matches!(stmt.condition, Expression::Binary(_)));
        }
        _ => panic!("Expected assert statement"),
    }

    let result = parse("func f() { return; }");
    match &result.file.items[0] {
        Item::Function(func) => match &func.body.statements[0] {
            Statement::Return(ret) => assert!(ret.value.is_none()),
            _ => panic!("Expected return statement"),
        },
        _ => panic!("Expected function definition"),
    }
}

#[test]
fn test_parse_expression_statement() {
    match parse_statement("list.push(4)!!;") {
        Statement::Expression(stmt) => {
            assert_eq!(stmt.span.end, 15);
            match stmt.expression {
                Expression::Binary(binary) => {
                    assert_eq!(binary.operator, BinaryOperator::Dot);
                    // `!!` applies to the call, not to the whole access
                    match &*binary.right {
                        Expression::Postfix(postfix) => {
                            assert!(matches!(*postfix.operand, Expression::Call(_)))
                        }
                        _ => panic!("Expected postfix expression"),
                    }
                }
                _ => panic!("Expected binary expression"),
            }
        }
        _ => panic!("Expected expression statement"),
    }
}

// ============================================================================
// Control flow
// ============================================================================

#[test]
fn test_parse_if_elsif_else() {
    let source = "if x < 0 { sign = -1; } elsif x > 0 { sign = 1; } elsif y { } else { sign = 0; }";
    match parse_statement(source) {
        Statement::If(stmt) => {
            assert!(matches!(stmt.condition, Expression::Binary(_)));
            assert_eq!(stmt.then_block.statements.len(), 1);
            assert_eq!(stmt.elsif_clauses.len(), 2);
            assert!(stmt.elsif_clauses[1].body.is_empty());
            let else_clause = stmt.else_clause.unwrap();
            assert_eq!(else_clause.body.statements.len(), 1);
            assert_eq!(stmt.span.end, source.len());
        }
        _ => panic!("Expected if statement"),
    }
}

#[test]
fn test_parse_if_with_alloc_condition_keeps_body() {
    match parse_statement("if alloc(T) { x; }") {
        Statement::If(stmt) => {
            assert!(matches!(stmt.condition, Expression::Alloc(ref a) if a.initializer.is_none()));
            assert_eq!(stmt.then_block.statements.len(), 1);
        }
        _ => panic!("Expected if statement"),
    }
}

#[test]
fn test_parse_while_else() {
    match parse_statement("while i < n { i += 1; } else { done(); }") {
        Statement::While(stmt) => {
            assert_eq!(stmt.body.statements.len(), 1);
            assert!(stmt.else_clause.is_some());
        }
        _ => panic!("Expected while statement"),
    }
}

#[test]
fn test_parse_while_without_else() {
    match parse_statement("while running { tick(); }") {
        Statement::While(stmt) => assert!(stmt.else_clause.is_none()),
        _ => panic!("Expected while statement"),
    }
}

#[test]
fn test_parse_for_in_else() {
    match parse_statement("for item in items { total += item; } else { empty(); }") {
        Statement::For(stmt) => {
            assert_eq!(stmt.variable.name, "item");
            assert_eq!(stmt.iterable.as_identifier().unwrap().name, "items");
            assert!(stmt.else_clause.is_some());
        }
        _ => panic!("Expected for statement"),
    }
}

#[test]
fn test_parse_match() {
    match parse_statement("match shape { case Circle(r) => { return r; } }") {
        Statement::Match(stmt) => {
            assert_eq!(stmt.subject.name, "shape");
            assert_eq!(stmt.arms.len(), 1);
            let arm = &stmt.arms[0];
            assert_eq!(arm.pattern.variant.name, "Circle");
            assert_eq!(arm.pattern.binding.name, "r");
            assert_eq!(arm.body.statements.len(), 1);
        }
        _ => panic!("Expected match statement"),
    }
}

#[test]
fn test_parse_match_arms_with_optional_commas() {
    let source = "match r { case Ok(v) => { use(v); }, case Err(e) => { } case Pending(p) => { } }";
    match parse_statement(source) {
        Statement::Match(stmt) => {
            let variants: Vec<&str> = stmt
                .arms
                .iter()
                .map(|arm| arm.pattern.variant.name.as_str())
                .collect();
            assert_eq!(variants, vec!["Ok", "Err", "Pending"]);
        }
        _ => panic!("Expected match statement"),
    }
}

#[test]
fn test_nested_control_flow() {
    let source = r#"
        for row in rows {
            while row.busy() {
                if row.done() { return row; }
            }
        }
    "#;
    match parse_statement(source) {
        Statement::For(stmt) => match &stmt.body.statements[0] {
            Statement::While(inner) => {
                assert!(matches!(inner.body.statements[0], Statement::If(_)));
            }
            _ => panic!("Expected while statement"),
        },
        _ => panic!("Expected for statement"),
    }
}
