//! Aria Language Parser
//!
//! Lexer and parser for the Aria programming language: a small
//! curly-brace language with structs, extensions, enums, operator
//! overrides, `match` and C-like control flow.
//!
//! ```rust
//! let result = aria_parser::parse("func add(a: int, b: int) int { return a + b; }");
//! assert!(result.is_ok());
//! assert_eq!(result.file.items.len(), 1);
//! ```
//!
//! Parsing never aborts on malformed input. [`ParseResult`] always holds a
//! tree (partial if needed) together with every lexical and syntax
//! [`Diagnostic`], sorted by source position.

pub mod ast;
pub mod config;
pub mod diagnostic;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod trivia;

pub use ast::{NodeKind, SourceFile, Visitor};
pub use config::{ConfigError, ParserConfig};
pub use diagnostic::{render_diagnostics, Diagnostic, DiagnosticKind};
pub use lexer::{tokenize, LexError, Lexer};
pub use parser::{parse, parse_with_config, ParseError, ParseErrorKind, ParseResult, Parser};
pub use token::{Span, Token, TokenKind};
pub use trivia::{Trivia, TriviaKind};
