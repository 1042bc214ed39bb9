//! Pattern AST nodes
//!
//! Match arms destructure a single enum variant into exactly one name.

use super::*;
use crate::token::Span;

/// Pattern: `Variant(binding)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    pub variant: Identifier,
    pub binding: Identifier,
    pub span: Span,
}
