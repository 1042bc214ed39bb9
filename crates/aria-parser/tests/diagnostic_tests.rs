//! Tests for syntax diagnostics and error recovery

use aria_parser::ast::*;
use aria_parser::{parse, parse_with_config, render_diagnostics, DiagnosticKind, ParserConfig};

fn kinds(source: &str) -> Vec<DiagnosticKind> {
    parse(source).diagnostics.iter().map(|d| d.kind).collect()
}

// ============================================================================
// Missing and unexpected tokens
// ============================================================================

#[test]
fn test_missing_close_paren_recovers_at_next_item() {
    let result = parse("func f( { }\nstruct S { }");

    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.kind, DiagnosticKind::MissingToken);
    assert_eq!(diagnostic.message, "expected `)`, found `{`");
    assert_eq!(diagnostic.span.start, 8);

    assert_eq!(result.file.items.len(), 1);
    assert!(matches!(result.file.items[0], Item::Struct(ref s) if s.name.name == "S"));
}

#[test]
fn test_missing_semicolon() {
    let result = parse("val x = 1\nval y = 2;");

    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.kind, DiagnosticKind::MissingToken);
    assert_eq!(diagnostic.message, "expected `;`, found `val`");
    assert_eq!((diagnostic.span.line, diagnostic.span.column), (2, 1));
    assert_eq!(result.file.items.len(), 1);
}

#[test]
fn test_several_errors_in_one_block() {
    let source = "func f() { val = 1; val y = 2; assert; x = 3; }";
    let result = parse(source);

    assert_eq!(result.diagnostics.len(), 2);
    assert!(result
        .diagnostics
        .iter()
        .all(|d| d.kind == DiagnosticKind::UnexpectedToken));

    match &result.file.items[0] {
        Item::Function(func) => {
            let kinds: Vec<NodeKind> = func.body.statements.iter().map(|s| s.kind()).collect();
            assert_eq!(
                kinds,
                vec![NodeKind::VariableDeclaration, NodeKind::AssignmentStatement]
            );
        }
        _ => panic!("Expected function definition"),
    }
}

#[test]
fn test_stray_closing_brace_at_top_level() {
    let result = parse("} val x = 1;");

    assert_eq!(kinds("} val x = 1;"), vec![DiagnosticKind::UnexpectedToken]);
    assert_eq!(result.diagnostics[0].message, "expected an expression, found `}`");
    assert_eq!(result.file.items.len(), 1);
}

#[test]
fn test_member_only_declarations_at_top_level() {
    let result = parse("operator + (rhs) { }\nfunc ok() { }");

    assert_eq!(result.diagnostics[0].kind, DiagnosticKind::UnexpectedToken);
    assert!(result.diagnostics[0].suggestion.is_some());
    assert!(result
        .file
        .items
        .iter()
        .any(|item| matches!(item, Item::Function(f) if f.name.name == "ok")));
}

#[test]
fn test_declaration_inside_block_closes_it() {
    let result = parse("func f() { struct S { } x; }");

    let kinds: Vec<DiagnosticKind> = result.diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![DiagnosticKind::UnterminatedBlock, DiagnosticKind::UnexpectedToken]
    );
    assert_eq!(result.diagnostics[0].span.start, 9);
    assert_eq!(result.file.items.len(), 3);
    assert!(matches!(&result.file.items[1], Item::Struct(s) if s.name.name == "S"));
}

#[test]
fn test_assignment_to_field_is_rejected() {
    let result = parse("p.x = 1; y = 2;");

    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.kind, DiagnosticKind::UnexpectedToken);
    assert_eq!(diagnostic.span.start, 4);
    assert_eq!(result.file.items.len(), 1);
}

#[test]
fn test_bad_member_recovers_inside_struct() {
    let result = parse("struct S { val x; func ok() { } }");

    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(
        result.diagnostics[0].message,
        "expected `func`, `type func` or `operator`, found `val`"
    );
    match &result.file.items[0] {
        Item::Struct(def) => assert_eq!(def.members.len(), 1),
        _ => panic!("Expected struct definition"),
    }
}

// ============================================================================
// Blocks, literals, patterns, enums
// ============================================================================

#[test]
fn test_unterminated_block_keeps_partial_tree() {
    let result = parse("func f() { val x = 1;");

    assert_eq!(kinds("func f() { val x = 1;"), vec![DiagnosticKind::UnterminatedBlock]);
    assert_eq!(result.diagnostics[0].span.start, 9);
    match &result.file.items[0] {
        Item::Function(func) => assert_eq!(func.body.statements.len(), 1),
        _ => panic!("Expected function definition"),
    }
}

#[test]
fn test_nested_unterminated_blocks_report_once() {
    assert_eq!(
        kinds("func f() { while x { if y { z;"),
        vec![DiagnosticKind::UnterminatedBlock]
    );
}

fn item_names(file: &SourceFile) -> Vec<String> {
    file.items
        .iter()
        .map(|item| match item {
            Item::Function(f) => f.name.name.clone(),
            Item::Struct(s) => s.name.name.clone(),
            Item::Extension(e) => e.name.name.clone(),
            Item::Enum(e) => e.name.name.clone(),
            Item::Import(_) => "import".to_string(),
            Item::Statement(_) => "statement".to_string(),
        })
        .collect()
}

#[test]
fn test_items_after_unclosed_block_still_parse() {
    let source = "func f() { val x = 1;\nfunc g() { return 2; }\nstruct S { }\n";
    let result = parse(source);

    assert_eq!(kinds(source), vec![DiagnosticKind::UnterminatedBlock]);
    assert_eq!(result.diagnostics[0].span.start, 9);
    assert_eq!(item_names(&result.file), vec!["f", "g", "S"]);
    match &result.file.items[0] {
        Item::Function(func) => {
            assert_eq!(func.body.statements.len(), 1);
            assert_eq!(func.span.end, 21);
        }
        _ => panic!("Expected function definition"),
    }
}

#[test]
fn test_each_unclosed_function_is_reported() {
    let source = "func f() {\nfunc g() {\nfunc h() { }";
    let result = parse(source);

    assert_eq!(
        kinds(source),
        vec![DiagnosticKind::UnterminatedBlock, DiagnosticKind::UnterminatedBlock]
    );
    assert_eq!(item_names(&result.file), vec!["f", "g", "h"]);
}

#[test]
fn test_unclosed_method_ends_at_next_member() {
    let source = "struct S { func a() { x;\n func b() { }\n}\nenum E { case A }";
    let result = parse(source);

    assert_eq!(kinds(source), vec![DiagnosticKind::UnterminatedBlock]);
    assert_eq!(item_names(&result.file), vec!["S", "E"]);
    match &result.file.items[0] {
        Item::Struct(def) => assert_eq!(def.members.len(), 2),
        _ => panic!("Expected struct definition"),
    }
}

#[test]
fn test_unclosed_match_arm_reports_innermost_block() {
    let source = "func f() { match x { case A(a) => { y;\nenum E { case B }";
    let result = parse(source);

    assert_eq!(kinds(source), vec![DiagnosticKind::UnterminatedBlock]);
    assert_eq!(result.diagnostics[0].span.start, 34);
    assert_eq!(item_names(&result.file), vec!["f", "E"]);
}

#[test]
fn test_broken_statement_before_declaration() {
    let source = "func f() { val x = \nstruct S { }";
    let result = parse(source);

    assert_eq!(
        kinds(source),
        vec![DiagnosticKind::UnterminatedBlock, DiagnosticKind::UnexpectedToken]
    );
    assert_eq!(result.diagnostics[1].message, "expected an expression, found `struct`");
    assert_eq!(item_names(&result.file), vec!["f", "S"]);
}

#[test]
fn test_unclosed_struct_before_enum() {
    let source = "struct S { func a() { }\nenum E { case A }";
    let result = parse(source);

    assert_eq!(kinds(source), vec![DiagnosticKind::UnterminatedBlock]);
    assert_eq!(result.diagnostics[0].span.start, 9);
    assert_eq!(item_names(&result.file), vec!["S", "E"]);
}

#[test]
fn test_unterminated_string() {
    let result = parse("val s = \"abc;");

    let kinds: Vec<DiagnosticKind> = result.diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![DiagnosticKind::UnterminatedLiteral, DiagnosticKind::MissingToken]
    );
    assert_eq!(result.diagnostics[0].span.start, 8);
}

#[test]
fn test_string_stops_at_end_of_line() {
    let source = "val s = \"a\nb\";";
    let result = parse(source);

    let kinds: Vec<DiagnosticKind> = result.diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::UnterminatedLiteral,
            DiagnosticKind::MissingToken,
            DiagnosticKind::UnterminatedLiteral,
        ]
    );
    assert_eq!(result.diagnostics[1].message, "expected `;`, found `b`");
    assert_eq!(result.diagnostics[2].span.line, 2);
}

#[test]
fn test_unrecognized_character() {
    let result = parse("val a = 1 $ 2;");

    assert_eq!(result.diagnostics[0].kind, DiagnosticKind::UnrecognizedCharacter);
    assert_eq!(result.diagnostics[0].span.start, 10);
}

#[test]
fn test_invalid_patterns() {
    let source = "match s { case Circle() => { } case Square(x) => { } case Nested(Some(y)) => { } }";
    let result = parse(source);

    let kinds: Vec<DiagnosticKind> = result.diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![DiagnosticKind::InvalidPattern, DiagnosticKind::InvalidPattern]
    );
    match &result.file.items[0] {
        Item::Statement(Statement::Match(stmt)) => {
            assert_eq!(stmt.arms.len(), 1);
            assert_eq!(stmt.arms[0].pattern.variant.name, "Square");
        }
        _ => panic!("Expected match statement"),
    }
}

#[test]
fn test_match_without_arms() {
    let result = parse("match s { }");

    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].message, "expected `case`, found `}`");
}

#[test]
fn test_enum_without_cases() {
    let result = parse("enum Never { struct Marker { } }");

    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.kind, DiagnosticKind::EmptyEnum);
    assert_eq!(diagnostic.message, "enum `Never` has no cases");
    assert_eq!((diagnostic.span.start, diagnostic.span.end), (5, 10));
    assert_eq!(result.file.items.len(), 1);
}

// ============================================================================
// Ordering, budget, rendering
// ============================================================================

#[test]
fn test_diagnostics_are_in_source_order() {
    let result = parse("val = 1; x @;");

    let kinds: Vec<DiagnosticKind> = result.diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![DiagnosticKind::UnexpectedToken, DiagnosticKind::UnrecognizedCharacter]
    );
    assert!(result.diagnostics[0].span.start < result.diagnostics[1].span.start);
}

#[test]
fn test_diagnostic_budget_stops_the_pass() {
    let config = ParserConfig::default().with_max_diagnostics(3);
    let result = parse_with_config("val; val; val; val; val;", config);
    assert_eq!(result.diagnostics.len(), 3);

    let config = ParserConfig::default().with_max_diagnostics(2);
    let result = parse_with_config("@ @ @ @ @", config);
    assert_eq!(result.diagnostics.len(), 2);
}

#[test]
fn test_codes_are_distinct() {
    let all = [
        DiagnosticKind::UnrecognizedCharacter,
        DiagnosticKind::UnterminatedLiteral,
        DiagnosticKind::UnexpectedToken,
        DiagnosticKind::MissingToken,
        DiagnosticKind::UnterminatedBlock,
        DiagnosticKind::InvalidPattern,
        DiagnosticKind::EmptyEnum,
        DiagnosticKind::LimitExceeded,
    ];
    let mut codes: Vec<&str> = all.iter().map(|kind| kind.code()).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), all.len());
    assert!(all[..2].iter().all(|kind| kind.is_lexical()));
    assert!(all[2..].iter().all(|kind| !kind.is_lexical()));
}

#[test]
fn test_render_report() {
    let source = "func f( { }\n";
    let result = parse(source);
    let report = render_diagnostics("shapes.aria", source, &result.diagnostics).unwrap();

    assert!(report.contains("error[E0101]: expected `)`, found `{`"));
    assert!(report.contains("shapes.aria:1:9"));
    assert!(report.contains("missing token"));
}

#[test]
fn test_diagnostics_serialize_to_json() {
    let result = parse("val x = 1");
    let json = serde_json::to_value(&result.diagnostics).unwrap();

    assert_eq!(json[0]["kind"], "missing_token");
    assert_eq!(json[0]["message"], "expected `;`, found end of file");
    assert_eq!(json[0]["span"]["start"], 9);
    assert!(json[0].get("suggestion").is_none());
}
