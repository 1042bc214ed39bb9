//! Node kind tags.

use serde::Serialize;
use std::fmt;

/// The kind of a syntax tree node.
///
/// `as_str` returns the stable snake_case name consumers match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    SourceFile,
    Import,
    StructDefinition,
    ExtensionDefinition,
    EnumDefinition,
    EnumCase,
    FunctionDefinition,
    TypeFunctionDefinition,
    OperatorOverride,
    Parameter,
    Block,
    ReturnStatement,
    ExpressionStatement,
    VariableDeclaration,
    AssignmentStatement,
    AssertStatement,
    IfStatement,
    ElsifClause,
    ElseClause,
    WhileStatement,
    ForStatement,
    MatchStatement,
    MatchArm,
    BinaryExpression,
    UnaryExpression,
    PostfixExpression,
    ParenthesizedExpression,
    AllocCall,
    AllocBlock,
    FieldInitializer,
    EnumValue,
    FunctionCall,
    Identifier,
    Number,
    String,
    Array,
    Type,
    Pattern,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::SourceFile => "source_file",
            NodeKind::Import => "import",
            NodeKind::StructDefinition => "struct_definition",
            NodeKind::ExtensionDefinition => "extension_definition",
            NodeKind::EnumDefinition => "enum_definition",
            NodeKind::EnumCase => "enum_case",
            NodeKind::FunctionDefinition => "function_definition",
            NodeKind::TypeFunctionDefinition => "type_function_definition",
            NodeKind::OperatorOverride => "operator_override",
            NodeKind::Parameter => "parameter",
            NodeKind::Block => "block",
            NodeKind::ReturnStatement => "return_statement",
            NodeKind::ExpressionStatement => "expression_statement",
            NodeKind::VariableDeclaration => "variable_declaration",
            NodeKind::AssignmentStatement => "assignment_statement",
            NodeKind::AssertStatement => "assert_statement",
            NodeKind::IfStatement => "if_statement",
            NodeKind::ElsifClause => "elsif_clause",
            NodeKind::ElseClause => "else_clause",
            NodeKind::WhileStatement => "while_statement",
            NodeKind::ForStatement => "for_statement",
            NodeKind::MatchStatement => "match_statement",
            NodeKind::MatchArm => "match_arm",
            NodeKind::BinaryExpression => "binary_expression",
            NodeKind::UnaryExpression => "unary_expression",
            NodeKind::PostfixExpression => "postfix_expression",
            NodeKind::ParenthesizedExpression => "parenthesized_expression",
            NodeKind::AllocCall => "alloc_call",
            NodeKind::AllocBlock => "alloc_block",
            NodeKind::FieldInitializer => "field_initializer",
            NodeKind::EnumValue => "enum_value",
            NodeKind::FunctionCall => "function_call",
            NodeKind::Identifier => "identifier",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Array => "array",
            NodeKind::Type => "type",
            NodeKind::Pattern => "pattern",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
