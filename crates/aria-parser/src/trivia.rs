//! Trivia: whitespace and comments.
//!
//! Trivia does not affect the shape of the syntax tree but is kept for
//! tooling such as formatters. The lexer attaches every run of trivia to
//! the token that follows it:
//!
//! ```text
//! "# note\n  val" -> Token{val} with leading trivia [LineComment, Whitespace]
//! ```

use crate::token::Span;

/// The kind of trivia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriviaKind {
    /// Spaces, tabs and newlines.
    Whitespace,
    /// A `#` comment, including its terminating newline.
    LineComment,
}

impl TriviaKind {
    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(self, TriviaKind::LineComment)
    }
}

/// A single piece of trivia.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub span: Span,
}

impl Trivia {
    pub fn new(kind: TriviaKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The source text of this trivia.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source)
    }
}

/// The comments in a trivia list, in source order.
pub fn comments(trivia: &[Trivia]) -> impl Iterator<Item = &Trivia> {
    trivia.iter().filter(|t| t.kind.is_comment())
}
