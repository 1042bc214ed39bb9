//! Diagnostic infrastructure for error reporting
//!
//! Lexer and parser errors are both flattened into [`Diagnostic`]s: a span,
//! a message and a classification. Diagnostics serialize with serde for
//! tooling and render as annotated source snippets through codespan-reporting.

use crate::lexer::LexError;
use crate::token::Span;
use codespan_reporting::diagnostic::{Diagnostic as CsDiagnostic, Label};
use codespan_reporting::files::SimpleFile;
use codespan_reporting::term;
use serde::Serialize;
use std::fmt;
use termcolor::NoColor;

/// Classification of a diagnostic.
///
/// Codes:
/// - E0001-E0099: lexical errors
/// - E0100-E0199: syntax errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A character no token starts with
    UnrecognizedCharacter,
    /// A string literal without its closing quote
    UnterminatedLiteral,
    /// A token that cannot start or continue the current construct
    UnexpectedToken,
    /// A specific required token is absent
    MissingToken,
    /// End of input inside `{ ... }`
    UnterminatedBlock,
    /// A match pattern other than `Variant(name)`
    InvalidPattern,
    /// An enum without any `case`
    EmptyEnum,
    /// Nesting depth exceeded the configured limit
    LimitExceeded,
}

impl DiagnosticKind {
    pub fn code(self) -> &'static str {
        match self {
            DiagnosticKind::UnrecognizedCharacter => "E0001",
            DiagnosticKind::UnterminatedLiteral => "E0002",
            DiagnosticKind::UnexpectedToken => "E0100",
            DiagnosticKind::MissingToken => "E0101",
            DiagnosticKind::UnterminatedBlock => "E0102",
            DiagnosticKind::InvalidPattern => "E0103",
            DiagnosticKind::EmptyEnum => "E0104",
            DiagnosticKind::LimitExceeded => "E0105",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DiagnosticKind::UnrecognizedCharacter => "unrecognized character",
            DiagnosticKind::UnterminatedLiteral => "unterminated literal",
            DiagnosticKind::UnexpectedToken => "unexpected token",
            DiagnosticKind::MissingToken => "missing token",
            DiagnosticKind::UnterminatedBlock => "unterminated block",
            DiagnosticKind::InvalidPattern => "invalid pattern",
            DiagnosticKind::EmptyEnum => "enum has no cases",
            DiagnosticKind::LimitExceeded => "nesting limit exceeded",
        }
    }

    pub fn is_lexical(self) -> bool {
        matches!(
            self,
            DiagnosticKind::UnrecognizedCharacter | DiagnosticKind::UnterminatedLiteral
        )
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A located error produced while lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub span: Span,
    pub message: String,
    pub kind: DiagnosticKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            span,
            message: message.into(),
            kind,
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Convert to a codespan diagnostic for rendering
    pub fn to_codespan<FileId: Copy>(&self, file_id: FileId) -> CsDiagnostic<FileId> {
        let label = Label::primary(file_id, self.span.start..self.span.end)
            .with_message(self.kind.description());
        let mut diagnostic = CsDiagnostic::error()
            .with_message(&self.message)
            .with_code(self.kind.code())
            .with_labels(vec![label]);
        if let Some(suggestion) = &self.suggestion {
            diagnostic = diagnostic.with_notes(vec![format!("help: {}", suggestion)]);
        }
        diagnostic
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error[{}] at {}:{}: {}",
            self.kind.code(),
            self.span.line,
            self.span.column,
            self.message
        )?;

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }

        Ok(())
    }
}

impl From<LexError> for Diagnostic {
    fn from(error: LexError) -> Self {
        let kind = match error {
            LexError::UnexpectedCharacter { .. } => DiagnosticKind::UnrecognizedCharacter,
            LexError::UnterminatedString { .. } => DiagnosticKind::UnterminatedLiteral,
        };
        let diagnostic = Diagnostic::new(kind, error.description(), *error.span());
        match error.hint() {
            Some(hint) => diagnostic.with_suggestion(hint),
            None => diagnostic,
        }
    }
}

/// Render diagnostics as a plain-text report with source snippets.
pub fn render_diagnostics(
    file_name: &str,
    source: &str,
    diagnostics: &[Diagnostic],
) -> Result<String, codespan_reporting::files::Error> {
    let file = SimpleFile::new(file_name, source);
    let config = term::Config::default();
    let mut writer = NoColor::new(Vec::new());

    for diagnostic in diagnostics {
        term::emit(&mut writer, &config, &file, &diagnostic.to_codespan(()))?;
    }

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}
