//! Lexer for the Aria programming language.
//!
//! This module implements the lexer on top of the logos library. It converts
//! source code into a lazy stream of tokens with precise source locations.
//! Whitespace and `#` comments are collected as trivia and attached to the
//! following token.

use crate::token::{Span, Token, TokenKind};
use crate::trivia::{Trivia, TriviaKind};
use logos::Logos;
use std::mem;
use thiserror::Error;

/// Logos-based token enum for lexing.
///
/// This enum is used internally by logos for efficient tokenization.
/// It's converted to our main TokenKind enum after lexing.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    // Trivia (kept, not skipped)
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"#[^\n]*\n?")]
    Comment,

    // Keywords (must come before identifiers)
    #[token("import")]
    Import,

    #[token("from")]
    From,

    #[token("struct")]
    Struct,

    #[token("extension")]
    Extension,

    #[token("enum")]
    Enum,

    #[token("case")]
    Case,

    #[token("func")]
    Func,

    #[token("type")]
    Type,

    #[token("operator")]
    Operator,

    #[token("reverse")]
    Reverse,

    #[token("return")]
    Return,

    #[token("val")]
    Val,

    #[token("assert")]
    Assert,

    #[token("if")]
    If,

    #[token("elsif")]
    Elsif,

    #[token("else")]
    Else,

    #[token("while")]
    While,

    #[token("for")]
    For,

    #[token("in")]
    In,

    #[token("match")]
    Match,

    #[token("alloc")]
    Alloc,

    // Identifiers may contain interior hyphens: `u-`, `max-len`
    #[regex(r"[A-Za-z_][A-Za-z0-9_\-]*")]
    Identifier,

    #[regex(r"[0-9]+")]
    Number,

    // Strings have no escapes and end at the line
    #[regex(r#""[^"\n]*""#)]
    String,

    #[regex(r#""[^"\n]*"#)]
    UnterminatedString,

    // Operators (longest match wins)
    #[token("<<=")]
    LessLessEqual,

    #[token(">>=")]
    GreaterGreaterEqual,

    #[token("...")]
    DotDotDot,

    #[token("<<")]
    LessLess,

    #[token(">>")]
    GreaterGreater,

    #[token("==")]
    EqualEqual,

    #[token("!=")]
    BangEqual,

    #[token("<=")]
    LessEqual,

    #[token(">=")]
    GreaterEqual,

    #[token("+=")]
    PlusEqual,

    #[token("-=")]
    MinusEqual,

    #[token("*=")]
    StarEqual,

    #[token("/=")]
    SlashEqual,

    #[token("%=")]
    PercentEqual,

    #[token("&=")]
    AmpEqual,

    #[token("|=")]
    PipeEqual,

    #[token("^=")]
    CaretEqual,

    #[token("!!")]
    BangBang,

    #[token("::")]
    ColonColon,

    #[token("=>")]
    FatArrow,

    // Single-character tokens
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("<")]
    Less,

    #[token(">")]
    Greater,

    #[token("&")]
    Amp,

    #[token("|")]
    Pipe,

    #[token("^")]
    Caret,

    #[token("=")]
    Equal,

    #[token(".")]
    Dot,

    #[token(":")]
    Colon,

    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,

    #[token("{")]
    LeftBrace,

    #[token("}")]
    RightBrace,

    #[token("[")]
    LeftBracket,

    #[token("]")]
    RightBracket,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,
}

/// Lexer error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("Unexpected character '{char}' at {}:{}", span.line, span.column)]
    UnexpectedCharacter { char: char, span: Span },

    #[error("Unterminated string at {}:{}", span.line, span.column)]
    UnterminatedString { span: Span },
}

/// Start lexing `source`.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Main lexer structure.
///
/// Iterating yields tokens in source order, interleaved with lexical errors,
/// and ends with exactly one [`TokenKind::Eof`] token.
pub struct Lexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, LogosToken>,
    trivia: Vec<Trivia>,
    pending: Option<Token>,
    line: u32,
    column: u32,
    last_end: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: LogosToken::lexer(source),
            trivia: Vec::new(),
            pending: None,
            line: 1,
            column: 1,
            last_end: 0,
            finished: false,
        }
    }

    /// Lex the whole input eagerly.
    ///
    /// Lexing never stops at an error: every error is reported and the
    /// token vector always ends with `Eof`.
    pub fn tokenize(self) -> (Vec<Token>, Vec<LexError>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        for item in self {
            match item {
                Ok(token) => tokens.push(token),
                Err(err) => errors.push(err),
            }
        }
        (tokens, errors)
    }

    /// Format all errors with source context
    pub fn format_errors(errors: &[LexError], source: &str) -> String {
        errors
            .iter()
            .map(|e| e.format_with_source(source))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Compute the span of `range`, advancing the line/column cursor past it.
    fn locate(&mut self, range: std::ops::Range<usize>) -> Span {
        self.advance_position(range.start);
        let span = Span::new(range.start, range.end, self.line, self.column);
        self.advance_position(range.end);
        span
    }

    fn advance_position(&mut self, to: usize) {
        if to <= self.last_end {
            return;
        }
        for c in self.source[self.last_end..to].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.last_end = to;
    }

    fn emit(&mut self, kind: TokenKind, span: Span) -> Token {
        Token::new(kind, span).with_trivia(mem::take(&mut self.trivia))
    }

    fn convert_token(logos_token: LogosToken, slice: &str) -> TokenKind {
        match logos_token {
            LogosToken::Import => TokenKind::Import,
            LogosToken::From => TokenKind::From,
            LogosToken::Struct => TokenKind::Struct,
            LogosToken::Extension => TokenKind::Extension,
            LogosToken::Enum => TokenKind::Enum,
            LogosToken::Case => TokenKind::Case,
            LogosToken::Func => TokenKind::Func,
            LogosToken::Type => TokenKind::Type,
            LogosToken::Operator => TokenKind::Operator,
            LogosToken::Reverse => TokenKind::Reverse,
            LogosToken::Return => TokenKind::Return,
            LogosToken::Val => TokenKind::Val,
            LogosToken::Assert => TokenKind::Assert,
            LogosToken::If => TokenKind::If,
            LogosToken::Elsif => TokenKind::Elsif,
            LogosToken::Else => TokenKind::Else,
            LogosToken::While => TokenKind::While,
            LogosToken::For => TokenKind::For,
            LogosToken::In => TokenKind::In,
            LogosToken::Match => TokenKind::Match,
            LogosToken::Alloc => TokenKind::Alloc,
            LogosToken::Identifier => TokenKind::Identifier(slice.to_string()),
            LogosToken::Number => TokenKind::Number(slice.to_string()),
            LogosToken::String => TokenKind::String(slice[1..slice.len() - 1].to_string()),
            LogosToken::UnterminatedString => TokenKind::String(slice[1..].to_string()),
            LogosToken::LessLessEqual => TokenKind::LessLessEqual,
            LogosToken::GreaterGreaterEqual => TokenKind::GreaterGreaterEqual,
            LogosToken::DotDotDot => TokenKind::DotDotDot,
            LogosToken::LessLess => TokenKind::LessLess,
            LogosToken::GreaterGreater => TokenKind::GreaterGreater,
            LogosToken::EqualEqual => TokenKind::EqualEqual,
            LogosToken::BangEqual => TokenKind::BangEqual,
            LogosToken::LessEqual => TokenKind::LessEqual,
            LogosToken::GreaterEqual => TokenKind::GreaterEqual,
            LogosToken::PlusEqual => TokenKind::PlusEqual,
            LogosToken::MinusEqual => TokenKind::MinusEqual,
            LogosToken::StarEqual => TokenKind::StarEqual,
            LogosToken::SlashEqual => TokenKind::SlashEqual,
            LogosToken::PercentEqual => TokenKind::PercentEqual,
            LogosToken::AmpEqual => TokenKind::AmpEqual,
            LogosToken::PipeEqual => TokenKind::PipeEqual,
            LogosToken::CaretEqual => TokenKind::CaretEqual,
            LogosToken::BangBang => TokenKind::BangBang,
            LogosToken::ColonColon => TokenKind::ColonColon,
            LogosToken::FatArrow => TokenKind::FatArrow,
            LogosToken::Plus => TokenKind::Plus,
            LogosToken::Minus => TokenKind::Minus,
            LogosToken::Star => TokenKind::Star,
            LogosToken::Slash => TokenKind::Slash,
            LogosToken::Percent => TokenKind::Percent,
            LogosToken::Less => TokenKind::Less,
            LogosToken::Greater => TokenKind::Greater,
            LogosToken::Amp => TokenKind::Amp,
            LogosToken::Pipe => TokenKind::Pipe,
            LogosToken::Caret => TokenKind::Caret,
            LogosToken::Equal => TokenKind::Equal,
            LogosToken::Dot => TokenKind::Dot,
            LogosToken::Colon => TokenKind::Colon,
            LogosToken::LeftParen => TokenKind::LeftParen,
            LogosToken::RightParen => TokenKind::RightParen,
            LogosToken::LeftBrace => TokenKind::LeftBrace,
            LogosToken::RightBrace => TokenKind::RightBrace,
            LogosToken::LeftBracket => TokenKind::LeftBracket,
            LogosToken::RightBracket => TokenKind::RightBracket,
            LogosToken::Semicolon => TokenKind::Semicolon,
            LogosToken::Comma => TokenKind::Comma,
            LogosToken::Whitespace | LogosToken::Comment => {
                unreachable!("trivia is collected before conversion")
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return Some(Ok(token));
        }
        if self.finished {
            return None;
        }

        loop {
            let Some(result) = self.inner.next() else {
                self.finished = true;
                let end = self.source.len();
                let span = self.locate(end..end);
                return Some(Ok(self.emit(TokenKind::Eof, span)));
            };

            let span = self.locate(self.inner.span());
            let slice = self.inner.slice();

            match result {
                Ok(LogosToken::Whitespace) => {
                    self.trivia.push(Trivia::new(TriviaKind::Whitespace, span));
                }
                Ok(LogosToken::Comment) => {
                    self.trivia.push(Trivia::new(TriviaKind::LineComment, span));
                }
                Ok(LogosToken::UnterminatedString) => {
                    // Keep the partial literal so the parser sees a string here.
                    let kind = Self::convert_token(LogosToken::UnterminatedString, slice);
                    let token = self.emit(kind, span);
                    self.pending = Some(token);
                    return Some(Err(LexError::UnterminatedString { span }));
                }
                Ok(logos_token) => {
                    let kind = Self::convert_token(logos_token, slice);
                    return Some(Ok(self.emit(kind, span)));
                }
                Err(()) => {
                    let char = slice.chars().next().unwrap_or('\0');
                    return Some(Err(LexError::UnexpectedCharacter { char, span }));
                }
            }
        }
    }
}

impl LexError {
    /// Get the span of this error
    pub fn span(&self) -> &Span {
        match self {
            LexError::UnexpectedCharacter { span, .. } | LexError::UnterminatedString { span } => {
                span
            }
        }
    }

    /// Get a description of this error
    pub fn description(&self) -> String {
        match self {
            LexError::UnexpectedCharacter { char, .. } => {
                format!("Unexpected character '{}'", char)
            }
            LexError::UnterminatedString { .. } => "Unterminated string literal".to_string(),
        }
    }

    /// Get a hint for fixing this error
    pub fn hint(&self) -> Option<String> {
        match self {
            LexError::UnterminatedString { .. } => {
                Some("Add a closing quote before the end of the line".to_string())
            }
            LexError::UnexpectedCharacter { .. } => None,
        }
    }

    /// Format the error with source context
    pub fn format_with_source(&self, source: &str) -> String {
        let span = self.span();
        let mut result = String::new();

        result.push_str(&format!(
            "Error at {}:{}: {}\n",
            span.line,
            span.column,
            self.description()
        ));

        if let Some(error_line) = source.lines().nth((span.line - 1) as usize) {
            result.push_str("  |\n");
            result.push_str(&format!("{:3} | {}\n", span.line, error_line));
            result.push_str(&format!(
                "  | {}{}\n",
                " ".repeat(span.column as usize - 1),
                "^"
            ));
        }

        if let Some(hint) = self.hint() {
            result.push_str(&format!("\nHint: {}\n", hint));
        }

        result
    }
}
