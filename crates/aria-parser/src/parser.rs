//! Parser for the Aria language
//!
//! This module implements a recursive descent parser that transforms
//! a token stream from the lexer into an Abstract Syntax Tree (AST).
//!
//! Rules live in submodules (`item`, `stmt`, `expr`, `types`, `pattern`)
//! as free functions over `&mut Parser`. A rule either returns its node or
//! a [`ParseError`]; the loops that repeat rules (file, block, member
//! block, enum body, match) turn errors into diagnostics and resynchronize,
//! so parsing always produces a tree.

pub mod error;
pub mod expr;
pub mod guards;
pub mod item;
pub mod pattern;
pub mod precedence;
pub mod recovery;
pub mod stmt;
pub mod types;

use crate::ast::{Identifier, SourceFile};
use crate::config::ParserConfig;
use crate::diagnostic::Diagnostic;
use crate::lexer::{LexError, Lexer};
use crate::token::{Span, Token, TokenKind};
use recovery::SyncContext;
use tracing::debug;

pub use error::{ParseError, ParseErrorKind};

/// Outcome of a parse: the (possibly partial) tree and every diagnostic,
/// in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub file: SourceFile,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    /// True when no lexical or syntax errors were reported.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// The tree if the input was well formed, otherwise the diagnostics.
    pub fn into_result(self) -> Result<SourceFile, Vec<Diagnostic>> {
        if self.diagnostics.is_empty() {
            Ok(self.file)
        } else {
            Err(self.diagnostics)
        }
    }
}

/// Parse `source` with the default configuration.
pub fn parse(source: &str) -> ParseResult {
    parse_with_config(source, ParserConfig::default())
}

/// Parse `source` with explicit limits.
pub fn parse_with_config(source: &str, config: ParserConfig) -> ParseResult {
    Parser::new(source, config).parse()
}

/// Parser state for the Aria programming language.
///
/// Decisions need at most two tokens of lookahead, except for the enum
/// value check (`a.b.C::D`), which scans a dotted path up to `::`.
pub struct Parser {
    /// Pre-tokenized input, always ending with `Eof`
    tokens: Vec<Token>,

    /// Current position in token stream
    pos: usize,

    /// Accumulated diagnostics (lexical and syntactic)
    diagnostics: Vec<Diagnostic>,

    config: ParserConfig,

    /// Current nesting depth, see [`guards::guarded`]
    depth: usize,

    /// Set once the diagnostic budget is used up
    halted: bool,

    /// Token index where an unterminated block was last reported
    unterminated_at: Option<usize>,
}

impl Parser {
    /// Create a new parser from source code.
    pub fn new(source: &str, config: ParserConfig) -> Self {
        Self::from_tokens(Lexer::new(source), config)
    }

    /// Create a parser from any lexer-shaped token stream.
    ///
    /// Lexical errors become diagnostics. An `Eof` token is appended if the
    /// stream does not end with one.
    pub fn from_tokens<I>(tokens: I, config: ParserConfig) -> Self
    where
        I: IntoIterator<Item = Result<Token, LexError>>,
    {
        let mut parser = Self {
            tokens: Vec::new(),
            pos: 0,
            diagnostics: Vec::new(),
            config,
            depth: 0,
            halted: false,
            unterminated_at: None,
        };

        for item in tokens {
            match item {
                Ok(token) => {
                    let is_eof = token.kind == TokenKind::Eof;
                    parser.tokens.push(token);
                    if is_eof {
                        break;
                    }
                }
                Err(err) => parser.report_diagnostic(Diagnostic::from(err)),
            }
        }

        let needs_eof = !matches!(parser.tokens.last(), Some(token) if token.kind == TokenKind::Eof);
        if needs_eof {
            let eof_span = match parser.tokens.last() {
                Some(last) => Span::new(last.span.end, last.span.end, last.span.line, last.span.column),
                None => Span::new(0, 0, 1, 1),
            };
            parser.tokens.push(Token::new(TokenKind::Eof, eof_span));
        }

        parser
    }

    /// Parse the entire source file.
    ///
    /// Never fails: malformed regions are reported as diagnostics and left
    /// out of the tree.
    pub fn parse(mut self) -> ParseResult {
        debug!(tokens = self.tokens.len(), "parsing source file");

        let mut items = Vec::new();
        while !self.at_eof() && !self.halted {
            let start = self.pos;
            match item::parse_item(&mut self) {
                Ok(item) => items.push(item),
                Err(err) => {
                    self.report(err);
                    recovery::recover(&mut self, start, SyncContext::TopLevel);
                }
            }
        }

        let end = self.tokens.last().map_or(0, |token| token.span.end);
        let file = SourceFile::new(items, Span::new(0, end, 1, 1));

        let mut diagnostics = self.diagnostics;
        diagnostics.sort_by_key(|diagnostic| diagnostic.span.start);

        debug!(
            items = file.items.len(),
            diagnostics = diagnostics.len(),
            "finished parsing source file"
        );

        ParseResult { file, diagnostics }
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Get the current token's kind.
    #[inline]
    pub fn current_kind(&self) -> &TokenKind {
        &self.tokens[self.pos].kind
    }

    /// Get the current token's span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.tokens[self.pos].span
    }

    /// Peek at the next token (lookahead).
    #[inline]
    pub fn peek(&self) -> Option<&TokenKind> {
        self.peek_nth(1)
    }

    /// Peek `n` tokens past the current one.
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<&TokenKind> {
        self.tokens.get(self.pos + n).map(|token| &token.kind)
    }

    /// Span of the most recently consumed token.
    pub fn previous_span(&self) -> Span {
        if self.pos == 0 {
            self.current_span()
        } else {
            self.tokens[self.pos - 1].span
        }
    }

    /// Advance to the next token, returning the previous current token.
    ///
    /// The cursor never moves past `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    /// Check if the current token matches the given kind.
    ///
    /// Payloads are ignored: any identifier matches `Identifier(_)`.
    #[inline]
    pub fn check(&self, expected: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(expected)
    }

    /// Check if the current token matches any of the given kinds.
    pub fn check_any(&self, expected: &[TokenKind]) -> bool {
        expected.iter().any(|kind| self.check(kind))
    }

    /// Check if we've reached EOF.
    #[inline]
    pub fn at_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token starts a file-scope declaration.
    #[inline]
    pub fn at_item_start(&self) -> bool {
        recovery::starts_item(self.current_kind())
    }

    /// Consume the current token if it matches the expected kind.
    ///
    /// A mismatch is a "missing token" error at the current token.
    pub fn expect(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        if self.check(&expected) {
            Ok(self.advance())
        } else {
            Err(ParseError::missing_token(
                expected,
                self.current_kind().clone(),
                self.current_span(),
            ))
        }
    }

    /// Consume an identifier token.
    pub fn expect_identifier(&mut self) -> Result<Identifier, ParseError> {
        match self.current_kind() {
            TokenKind::Identifier(name) => {
                let identifier = Identifier::new(name.clone(), self.current_span());
                self.advance();
                Ok(identifier)
            }
            _ => Err(self.unexpected_token("an identifier")),
        }
    }

    /// Consume an identifier token, reporting `message` as the expectation.
    pub fn expect_identifier_for(&mut self, message: &str) -> Result<Identifier, ParseError> {
        if self.check(&TokenKind::Identifier(String::new())) {
            self.expect_identifier()
        } else {
            Err(self.unexpected_token(message))
        }
    }

    // ========================================================================
    // Error Handling
    // ========================================================================

    /// Create an "unexpected token" error at the current token.
    pub fn unexpected_token(&self, expected: &str) -> ParseError {
        ParseError::unexpected_token(expected, self.current_kind().clone(), self.current_span())
    }

    /// Record a parse error as a diagnostic.
    pub fn report(&mut self, error: ParseError) {
        self.report_diagnostic(Diagnostic::from(error));
    }

    fn report_diagnostic(&mut self, diagnostic: Diagnostic) {
        if self.halted {
            return;
        }
        self.diagnostics.push(diagnostic);
        if self.diagnostics.len() >= self.config.max_diagnostics {
            debug!(
                limit = self.config.max_diagnostics,
                "diagnostic budget exhausted, stopping"
            );
            self.halted = true;
        }
    }

    /// Report an unclosed `{` that ends at the current token (end of input
    /// or a file-scope declaration). Enclosing blocks that end at the same
    /// token are not reported again.
    pub fn report_unterminated(&mut self, open: Span) {
        if self.unterminated_at != Some(self.pos) {
            self.unterminated_at = Some(self.pos);
            self.report(ParseError::unterminated_block(open));
        }
    }

    /// True once the diagnostic budget is exhausted.
    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}
