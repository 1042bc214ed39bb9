//! Item AST nodes
//!
//! This module defines everything that can appear at file scope besides
//! plain statements, plus the members of struct and extension blocks:
//! - Imports
//! - Struct, extension and enum definitions
//! - Functions, type functions and operator overrides

use super::*;
use crate::token::Span;

/// Top-level item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Item {
    /// `import [name from] a.b.c;`
    Import(Import),

    /// `struct Name { members }`
    Struct(StructDefinition),

    /// `extension Name { members }`
    Extension(ExtensionDefinition),

    /// `enum Name { cases and nested structs }`
    Enum(EnumDefinition),

    /// `func name(params) [Type] { body }`
    Function(FunctionDefinition),

    /// Any statement at file scope
    Statement(Statement),
}

impl Item {
    /// Get the span of this item
    pub fn span(&self) -> &Span {
        match self {
            Item::Import(i) => &i.span,
            Item::Struct(s) => &s.span,
            Item::Extension(e) => &e.span,
            Item::Enum(e) => &e.span,
            Item::Function(f) => &f.span,
            Item::Statement(s) => s.span(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Item::Import(_) => NodeKind::Import,
            Item::Struct(_) => NodeKind::StructDefinition,
            Item::Extension(_) => NodeKind::ExtensionDefinition,
            Item::Enum(_) => NodeKind::EnumDefinition,
            Item::Function(_) => NodeKind::FunctionDefinition,
            Item::Statement(s) => s.kind(),
        }
    }
}

// ============================================================================
// Imports
// ============================================================================

/// Import: `import a.b;` or `import item from a.b;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Import {
    /// The name before `from`, if present
    pub item: Option<Identifier>,

    /// Dotted module path, never empty
    pub path: Vec<Identifier>,

    pub span: Span,
}

impl Import {
    /// The module path joined with `.`
    pub fn path_string(&self) -> String {
        self.path
            .iter()
            .map(|segment| segment.name.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }
}

// ============================================================================
// Structs and extensions
// ============================================================================

/// Struct definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructDefinition {
    pub name: Identifier,
    pub members: Vec<Member>,
    pub span: Span,
}

/// Extension definition: adds members to an existing type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtensionDefinition {
    pub name: Identifier,
    pub members: Vec<Member>,
    pub span: Span,
}

/// Member of a struct or extension block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Member {
    /// Instance function: `func name(...)`
    Function(FunctionDefinition),

    /// Function bound to the type itself: `type func name(...)`
    TypeFunction(FunctionDefinition),

    /// `[reverse] operator + (rhs) { ... }`
    Operator(OperatorOverride),
}

impl Member {
    pub fn span(&self) -> &Span {
        match self {
            Member::Function(f) | Member::TypeFunction(f) => &f.span,
            Member::Operator(o) => &o.span,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Member::Function(_) => NodeKind::FunctionDefinition,
            Member::TypeFunction(_) => NodeKind::TypeFunctionDefinition,
            Member::Operator(_) => NodeKind::OperatorOverride,
        }
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Enum definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumDefinition {
    pub name: Identifier,

    /// Cases and nested struct definitions in source order.
    /// Contains at least one case.
    pub items: Vec<EnumItem>,

    pub span: Span,
}

impl EnumDefinition {
    pub fn cases(&self) -> impl Iterator<Item = &EnumCase> {
        self.items.iter().filter_map(|item| match item {
            EnumItem::Case(case) => Some(case),
            EnumItem::Struct(_) => None,
        })
    }

    /// Associated data types declared inside the enum
    pub fn structs(&self) -> impl Iterator<Item = &StructDefinition> {
        self.items.iter().filter_map(|item| match item {
            EnumItem::Struct(def) => Some(def),
            EnumItem::Case(_) => None,
        })
    }
}

/// Entry of an enum block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EnumItem {
    Case(EnumCase),
    Struct(StructDefinition),
}

/// Enum case: `case Circle(int)` or `case Empty`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumCase {
    pub name: Identifier,

    /// Associated field types; `None` when the case has no parentheses
    pub fields: Option<Vec<Type>>,

    pub span: Span,
}

// ============================================================================
// Functions
// ============================================================================

/// Function definition (also used for type functions)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDefinition {
    pub name: Identifier,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<Type>,
    pub body: Block,
    pub span: Span,
}

/// Function parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub kind: ParameterKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ParameterKind {
    /// `...`
    Variadic,

    /// `name` or `name: Type`
    Named {
        name: Identifier,
        ty: Option<Type>,
    },
}

impl Parameter {
    pub fn name(&self) -> Option<&Identifier> {
        match &self.kind {
            ParameterKind::Named { name, .. } => Some(name),
            ParameterKind::Variadic => None,
        }
    }

    pub fn ty(&self) -> Option<&Type> {
        match &self.kind {
            ParameterKind::Named { ty, .. } => ty.as_ref(),
            ParameterKind::Variadic => None,
        }
    }

    pub fn is_variadic(&self) -> bool {
        matches!(self.kind, ParameterKind::Variadic)
    }
}

// ============================================================================
// Operator overrides
// ============================================================================

/// Operator override: `[reverse] operator <op> (rhs|lhs) [Type] { body }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatorOverride {
    /// Defined with the operands swapped
    pub reverse: bool,
    pub operator: OverridableOperator,
    pub side: OperandSide,
    pub return_type: Option<Type>,
    pub body: Block,
    pub span: Span,
}

/// Operators a struct may override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OverridableOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    ShiftLeft,
    ShiftRight,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    BitAnd,
    BitOr,
    BitXor,
    /// Unary minus, spelled `u-`
    Negate,
}

impl OverridableOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            OverridableOperator::Add => "+",
            OverridableOperator::Subtract => "-",
            OverridableOperator::Multiply => "*",
            OverridableOperator::Divide => "/",
            OverridableOperator::Remainder => "%",
            OverridableOperator::ShiftLeft => "<<",
            OverridableOperator::ShiftRight => ">>",
            OverridableOperator::Equal => "==",
            OverridableOperator::NotEqual => "!=",
            OverridableOperator::Less => "<",
            OverridableOperator::Greater => ">",
            OverridableOperator::LessEqual => "<=",
            OverridableOperator::GreaterEqual => ">=",
            OverridableOperator::BitAnd => "&",
            OverridableOperator::BitOr => "|",
            OverridableOperator::BitXor => "^",
            OverridableOperator::Negate => "u-",
        }
    }
}

/// Which operand is the implicit `self` of an operator override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OperandSide {
    Rhs,
    Lhs,
}

impl OperandSide {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rhs" => Some(OperandSide::Rhs),
            "lhs" => Some(OperandSide::Lhs),
            _ => None,
        }
    }
}
