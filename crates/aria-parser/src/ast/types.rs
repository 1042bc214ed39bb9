//! Type reference AST nodes

use super::*;
use crate::token::Span;

/// Type reference: `int`, `geometry.Point`
///
/// Only ever produced in type positions: parameter annotations, return
/// types, `alloc(...)`, enum case fields and the left side of `::`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Type {
    /// Dotted segments, never empty
    pub segments: Vec<Identifier>,
    pub span: Span,
}

impl Type {
    /// The full dotted name
    pub fn name(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.name.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// The last segment (the type's own name)
    pub fn last(&self) -> Option<&Identifier> {
        self.segments.last()
    }

    pub fn is_simple(&self) -> bool {
        self.segments.len() == 1
    }
}
