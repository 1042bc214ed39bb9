//! Parse error types and error reporting

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::token::{Span, TokenKind};
use thiserror::Error;

/// A parse error with location and contextual information.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Parse error at {}:{}: {message}", span.line, span.column)]
pub struct ParseError {
    /// The kind of error that occurred
    pub kind: ParseErrorKind,

    /// Source location of the error
    pub span: Span,

    /// Human-readable error message
    pub message: String,

    /// Optional suggestion for fixing the error
    pub suggestion: Option<String>,
}

/// The kind of parse error.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// A token that cannot start or continue the current construct
    UnexpectedToken { expected: String, found: TokenKind },

    /// A specific token is required here
    MissingToken { expected: TokenKind, found: TokenKind },

    /// End of input before the closing `}`
    UnterminatedBlock,

    /// Match pattern not of the form `Variant(name)`
    InvalidPattern { reason: String },

    /// Enum declared without cases
    EmptyEnum { name: String },

    /// Parser exceeded its nesting limit
    ParserLimitExceeded { message: String },
}

/// Describe a token for messages: `foo`, `;`, end of file.
pub(crate) fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Eof => kind.to_string(),
        TokenKind::String(_) => "string literal".to_string(),
        TokenKind::Number(value) => format!("number `{}`", value),
        _ => format!("`{}`", kind),
    }
}

impl ParseError {
    /// Create an "unexpected token" error.
    pub fn unexpected_token(expected: impl Into<String>, found: TokenKind, span: Span) -> Self {
        let expected = expected.into();
        let message = format!("expected {}, found {}", expected, describe(&found));

        Self {
            kind: ParseErrorKind::UnexpectedToken { expected, found },
            span,
            message,
            suggestion: None,
        }
    }

    /// Create a "missing token" error.
    pub fn missing_token(expected: TokenKind, found: TokenKind, span: Span) -> Self {
        let message = format!("expected `{}`, found {}", expected, describe(&found));

        Self {
            kind: ParseErrorKind::MissingToken { expected, found },
            span,
            message,
            suggestion: None,
        }
    }

    /// Create an "unterminated block" error pointing at the opening brace.
    pub fn unterminated_block(open: Span) -> Self {
        Self {
            kind: ParseErrorKind::UnterminatedBlock,
            span: open,
            message: "this block is never closed".to_string(),
            suggestion: Some("add a closing `}`".to_string()),
        }
    }

    /// Create an "invalid pattern" error.
    pub fn invalid_pattern(reason: impl Into<String>, span: Span) -> Self {
        let reason = reason.into();
        Self {
            message: format!("invalid pattern: {}", reason),
            kind: ParseErrorKind::InvalidPattern { reason },
            span,
            suggestion: Some("patterns have the form `Variant(name)`".to_string()),
        }
    }

    /// Create an "empty enum" error.
    pub fn empty_enum(name: impl Into<String>, span: Span) -> Self {
        let name = name.into();
        Self {
            message: format!("enum `{}` has no cases", name),
            kind: ParseErrorKind::EmptyEnum { name },
            span,
            suggestion: Some("declare at least one `case`".to_string()),
        }
    }

    /// Create a "parser limit exceeded" error.
    pub fn parser_limit_exceeded(message: impl Into<String>, span: Span) -> Self {
        let message = message.into();
        Self {
            kind: ParseErrorKind::ParserLimitExceeded {
                message: message.clone(),
            },
            span,
            message,
            suggestion: None,
        }
    }

    /// Add a suggestion to this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Diagnostic classification of this error
    pub fn diagnostic_kind(&self) -> DiagnosticKind {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => DiagnosticKind::UnexpectedToken,
            ParseErrorKind::MissingToken { .. } => DiagnosticKind::MissingToken,
            ParseErrorKind::UnterminatedBlock => DiagnosticKind::UnterminatedBlock,
            ParseErrorKind::InvalidPattern { .. } => DiagnosticKind::InvalidPattern,
            ParseErrorKind::EmptyEnum { .. } => DiagnosticKind::EmptyEnum,
            ParseErrorKind::ParserLimitExceeded { .. } => DiagnosticKind::LimitExceeded,
        }
    }
}

impl From<ParseError> for Diagnostic {
    fn from(error: ParseError) -> Self {
        Diagnostic {
            kind: error.diagnostic_kind(),
            span: error.span,
            message: error.message,
            suggestion: error.suggestion,
        }
    }
}
