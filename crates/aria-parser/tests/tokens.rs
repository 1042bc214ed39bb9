//! Basic token tests for the Aria lexer.

use aria_parser::{tokenize, LexError, Lexer, Span, TokenKind, TriviaKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    let (tokens, errors) = Lexer::new(source).tokenize();
    assert!(errors.is_empty(), "Unexpected lex errors: {:?}", errors);
    tokens.into_iter().map(|token| token.kind).collect()
}

fn assert_tokens(source: &str, expected: Vec<TokenKind>) {
    // Expected should include EOF
    let mut expected_with_eof = expected;
    expected_with_eof.push(TokenKind::Eof);

    assert_eq!(kinds(source), expected_with_eof, "Token mismatch");
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(name.to_string())
}

// Keywords tests
#[test]
fn test_keywords_items() {
    assert_tokens(
        "import from struct extension enum case func type operator reverse",
        vec![
            TokenKind::Import,
            TokenKind::From,
            TokenKind::Struct,
            TokenKind::Extension,
            TokenKind::Enum,
            TokenKind::Case,
            TokenKind::Func,
            TokenKind::Type,
            TokenKind::Operator,
            TokenKind::Reverse,
        ],
    );
}

#[test]
fn test_keywords_statements() {
    assert_tokens(
        "return val assert if elsif else while for in match alloc",
        vec![
            TokenKind::Return,
            TokenKind::Val,
            TokenKind::Assert,
            TokenKind::If,
            TokenKind::Elsif,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::For,
            TokenKind::In,
            TokenKind::Match,
            TokenKind::Alloc,
        ],
    );
}

#[test]
fn test_contextual_words_are_identifiers() {
    assert_tokens("rhs lhs u-", vec![ident("rhs"), ident("lhs"), ident("u-")]);
}

// Identifiers
#[test]
fn test_identifiers_with_hyphens_and_underscores() {
    assert_tokens(
        "max-len _tmp a1_b-2",
        vec![ident("max-len"), ident("_tmp"), ident("a1_b-2")],
    );
}

#[test]
fn test_identifier_cannot_start_with_digit() {
    assert_tokens("9lives", vec![TokenKind::Number("9".into()), ident("lives")]);
}

// Literals
#[test]
fn test_number_has_no_sign() {
    assert_tokens(
        "-42",
        vec![TokenKind::Minus, TokenKind::Number("42".into())],
    );
}

#[test]
fn test_string_keeps_raw_content() {
    assert_tokens(
        r#""hello\n world""#,
        vec![TokenKind::String(r"hello\n world".into())],
    );
}

#[test]
fn test_unterminated_string_reports_error() {
    let (tokens, errors) = Lexer::new("val s = \"open\nx;").tokenize();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        LexError::UnterminatedString { span } => {
            assert_eq!(span.line, 1);
            assert_eq!(span.column, 9);
        }
        other => panic!("Expected unterminated string, got {:?}", other),
    }
    assert_eq!(tokens[3].kind, TokenKind::String("open".into()));
    assert_eq!(tokens[4].span.line, 2);
}

// Operators
#[test]
fn test_multi_char_operators_are_greedy() {
    assert_tokens(
        "<<= >>= << >> <= >= == != :: !! => ...",
        vec![
            TokenKind::LessLessEqual,
            TokenKind::GreaterGreaterEqual,
            TokenKind::LessLess,
            TokenKind::GreaterGreater,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
            TokenKind::EqualEqual,
            TokenKind::BangEqual,
            TokenKind::ColonColon,
            TokenKind::BangBang,
            TokenKind::FatArrow,
            TokenKind::DotDotDot,
        ],
    );
}

#[test]
fn test_compound_assignment_operators() {
    assert_tokens(
        "+= -= *= /= %= &= |= ^=",
        vec![
            TokenKind::PlusEqual,
            TokenKind::MinusEqual,
            TokenKind::StarEqual,
            TokenKind::SlashEqual,
            TokenKind::PercentEqual,
            TokenKind::AmpEqual,
            TokenKind::PipeEqual,
            TokenKind::CaretEqual,
        ],
    );
}

#[test]
fn test_punctuation() {
    assert_tokens(
        "( ) { } [ ] , ; : .",
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::LeftBracket,
            TokenKind::RightBracket,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Dot,
        ],
    );
}

#[test]
fn test_enum_value_tokens() {
    assert_tokens(
        "Shape::Circle(1)",
        vec![
            ident("Shape"),
            TokenKind::ColonColon,
            ident("Circle"),
            TokenKind::LeftParen,
            TokenKind::Number("1".into()),
            TokenKind::RightParen,
        ],
    );
}

// Trivia and positions
#[test]
fn test_comments_are_trivia() {
    let (tokens, errors) = Lexer::new("# header\nval x; # trailing\n").tokenize();
    assert!(errors.is_empty());
    assert_eq!(tokens.len(), 4);

    let val = &tokens[0];
    assert_eq!(val.kind, TokenKind::Val);
    assert_eq!(val.leading_trivia[0].kind, TriviaKind::LineComment);
    assert_eq!(val.leading_trivia[0].text("# header\nval x; # trailing\n"), "# header\n");

    let eof = &tokens[3];
    assert_eq!(eof.kind, TokenKind::Eof);
    assert!(eof.leading_trivia.iter().any(|trivia| trivia.kind.is_comment()));
}

#[test]
fn test_line_and_column_tracking() {
    let (tokens, _) = Lexer::new("val a;\n  a += 1;").tokenize();
    let plus_equal = tokens
        .iter()
        .find(|token| token.kind == TokenKind::PlusEqual)
        .unwrap();
    assert_eq!(plus_equal.span, Span::new(11, 13, 2, 5));
}

#[test]
fn test_unexpected_character_continues() {
    let (tokens, errors) = Lexer::new("a $ b ~ c").tokenize();
    assert_eq!(errors.len(), 2);
    assert_eq!(tokens.len(), 4);
    assert_eq!(errors[1].span().column, 7);
}

#[test]
fn test_lazy_stream_ends_after_eof() {
    let mut lexer = tokenize("x");
    assert!(matches!(lexer.next(), Some(Ok(ref token)) if token.kind == ident("x")));
    assert!(matches!(lexer.next(), Some(Ok(ref token)) if token.kind == TokenKind::Eof));
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}
