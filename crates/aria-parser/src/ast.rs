//! Abstract Syntax Tree (AST) for the Aria programming language.
//!
//! This module defines the complete AST structure for Aria, including:
//! - Top-level items (imports, structs, extensions, enums, functions)
//! - Statements (declarations, assignments, control flow)
//! - Expressions (literals, operators, calls, allocations, enum values)
//! - Type references and match patterns
//!
//! Every AST node owns its children and carries the `Span` it was parsed from.
//! Trees are never mutated after the parser builds them.

use crate::token::Span;
use serde::Serialize;

pub mod expression;
pub mod item;
pub mod kind;
pub mod pattern;
pub mod statement;
pub mod types;
pub mod visitor;

pub use expression::*;
pub use item::*;
pub use kind::*;
pub use pattern::*;
pub use statement::*;
pub use types::*;
pub use visitor::*;

/// Root node: one Aria source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceFile {
    /// Top-level items in source order
    pub items: Vec<Item>,

    /// Span covering the entire file
    pub span: Span,
}

impl SourceFile {
    pub fn new(items: Vec<Item>, span: Span) -> Self {
        Self { items, span }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The kind of every node in the tree, in pre-order.
    pub fn node_kinds(&self) -> Vec<NodeKind> {
        let mut collector = KindCollector::default();
        collector.visit_source_file(self);
        collector.kinds
    }
}

/// Identifier
///
/// Represents a name for a variable, function, struct, type segment, etc.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// Braced statement sequence: `{ ... }`
///
/// An empty block has an empty `statements` vector; it is never absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: Span,
}

impl Block {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[derive(Default)]
struct KindCollector {
    kinds: Vec<NodeKind>,
}

impl Visitor for KindCollector {
    fn enter_node(&mut self, kind: NodeKind, _span: Span) {
        self.kinds.push(kind);
    }
}
