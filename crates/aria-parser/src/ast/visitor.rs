//! AST visitor pattern for traversing the syntax tree
//!
//! This module provides a visitor trait for walking the AST. Visitors can be used
//! for analysis, formatting, code generation, and other tree-walking operations.
//!
//! Every `walk_*` function brackets its node with [`Visitor::enter_node`] and
//! [`Visitor::leave_node`] and visits children in source order, so a visitor
//! that only implements those two hooks sees the whole tree in pre-order.
//!
//! # Example
//!
//! ```rust
//! use aria_parser::ast::*;
//!
//! struct CountIdentifiers {
//!     count: usize,
//! }
//!
//! impl Visitor for CountIdentifiers {
//!     fn visit_identifier(&mut self, _id: &Identifier) {
//!         self.count += 1;
//!     }
//! }
//! ```

use super::*;
use crate::token::Span;

/// AST visitor trait
///
/// Implement this trait to traverse the AST. Each visit method has a default
/// implementation that calls the corresponding walk function.
pub trait Visitor: Sized {
    /// Called before a node's children are visited
    fn enter_node(&mut self, _kind: NodeKind, _span: Span) {}

    /// Called after a node's children are visited
    fn leave_node(&mut self, _kind: NodeKind, _span: Span) {}

    // Top-level
    fn visit_source_file(&mut self, file: &SourceFile) {
        walk_source_file(self, file);
    }

    fn visit_item(&mut self, item: &Item) {
        walk_item(self, item);
    }

    fn visit_import(&mut self, import: &Import) {
        walk_import(self, import);
    }

    fn visit_struct_definition(&mut self, def: &StructDefinition) {
        walk_struct_definition(self, def);
    }

    fn visit_extension_definition(&mut self, def: &ExtensionDefinition) {
        walk_extension_definition(self, def);
    }

    fn visit_enum_definition(&mut self, def: &EnumDefinition) {
        walk_enum_definition(self, def);
    }

    fn visit_enum_case(&mut self, case: &EnumCase) {
        walk_enum_case(self, case);
    }

    fn visit_member(&mut self, member: &Member) {
        walk_member(self, member);
    }

    /// `kind` is either `FunctionDefinition` or `TypeFunctionDefinition`
    fn visit_function_definition(&mut self, func: &FunctionDefinition, kind: NodeKind) {
        walk_function_definition(self, func, kind);
    }

    fn visit_operator_override(&mut self, op: &OperatorOverride) {
        walk_operator_override(self, op);
    }

    fn visit_parameter(&mut self, param: &Parameter) {
        walk_parameter(self, param);
    }

    // Statements
    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        walk_statement(self, stmt);
    }

    fn visit_if_statement(&mut self, stmt: &IfStatement) {
        walk_if_statement(self, stmt);
    }

    fn visit_while_statement(&mut self, stmt: &WhileStatement) {
        walk_while_statement(self, stmt);
    }

    fn visit_for_statement(&mut self, stmt: &ForStatement) {
        walk_for_statement(self, stmt);
    }

    fn visit_match_statement(&mut self, stmt: &MatchStatement) {
        walk_match_statement(self, stmt);
    }

    fn visit_match_arm(&mut self, arm: &MatchArm) {
        walk_match_arm(self, arm);
    }

    // Expressions
    fn visit_expression(&mut self, expr: &Expression) {
        walk_expression(self, expr);
    }

    fn visit_binary_expression(&mut self, expr: &BinaryExpression) {
        walk_binary_expression(self, expr);
    }

    fn visit_alloc_call(&mut self, alloc: &AllocCall) {
        walk_alloc_call(self, alloc);
    }

    fn visit_function_call(&mut self, call: &FunctionCall) {
        walk_function_call(self, call);
    }

    fn visit_enum_value(&mut self, value: &EnumValue) {
        walk_enum_value(self, value);
    }

    // Leaves
    fn visit_type(&mut self, ty: &Type) {
        walk_type(self, ty);
    }

    fn visit_pattern(&mut self, pattern: &Pattern) {
        walk_pattern(self, pattern);
    }

    fn visit_identifier(&mut self, id: &Identifier) {
        walk_identifier(self, id);
    }
}

// ============================================================================
// Walk functions
// ============================================================================

pub fn walk_source_file<V: Visitor>(visitor: &mut V, file: &SourceFile) {
    visitor.enter_node(NodeKind::SourceFile, file.span);
    for item in &file.items {
        visitor.visit_item(item);
    }
    visitor.leave_node(NodeKind::SourceFile, file.span);
}

pub fn walk_item<V: Visitor>(visitor: &mut V, item: &Item) {
    match item {
        Item::Import(import) => visitor.visit_import(import),
        Item::Struct(def) => visitor.visit_struct_definition(def),
        Item::Extension(def) => visitor.visit_extension_definition(def),
        Item::Enum(def) => visitor.visit_enum_definition(def),
        Item::Function(func) => visitor.visit_function_definition(func, NodeKind::FunctionDefinition),
        Item::Statement(stmt) => visitor.visit_statement(stmt),
    }
}

pub fn walk_import<V: Visitor>(visitor: &mut V, import: &Import) {
    visitor.enter_node(NodeKind::Import, import.span);
    if let Some(item) = &import.item {
        visitor.visit_identifier(item);
    }
    for segment in &import.path {
        visitor.visit_identifier(segment);
    }
    visitor.leave_node(NodeKind::Import, import.span);
}

pub fn walk_struct_definition<V: Visitor>(visitor: &mut V, def: &StructDefinition) {
    visitor.enter_node(NodeKind::StructDefinition, def.span);
    visitor.visit_identifier(&def.name);
    for member in &def.members {
        visitor.visit_member(member);
    }
    visitor.leave_node(NodeKind::StructDefinition, def.span);
}

pub fn walk_extension_definition<V: Visitor>(visitor: &mut V, def: &ExtensionDefinition) {
    visitor.enter_node(NodeKind::ExtensionDefinition, def.span);
    visitor.visit_identifier(&def.name);
    for member in &def.members {
        visitor.visit_member(member);
    }
    visitor.leave_node(NodeKind::ExtensionDefinition, def.span);
}

pub fn walk_enum_definition<V: Visitor>(visitor: &mut V, def: &EnumDefinition) {
    visitor.enter_node(NodeKind::EnumDefinition, def.span);
    visitor.visit_identifier(&def.name);
    for item in &def.items {
        match item {
            EnumItem::Case(case) => visitor.visit_enum_case(case),
            EnumItem::Struct(nested) => visitor.visit_struct_definition(nested),
        }
    }
    visitor.leave_node(NodeKind::EnumDefinition, def.span);
}

pub fn walk_enum_case<V: Visitor>(visitor: &mut V, case: &EnumCase) {
    visitor.enter_node(NodeKind::EnumCase, case.span);
    visitor.visit_identifier(&case.name);
    for ty in case.fields.iter().flatten() {
        visitor.visit_type(ty);
    }
    visitor.leave_node(NodeKind::EnumCase, case.span);
}

pub fn walk_member<V: Visitor>(visitor: &mut V, member: &Member) {
    match member {
        Member::Function(func) => visitor.visit_function_definition(func, NodeKind::FunctionDefinition),
        Member::TypeFunction(func) => {
            visitor.visit_function_definition(func, NodeKind::TypeFunctionDefinition)
        }
        Member::Operator(op) => visitor.visit_operator_override(op),
    }
}

pub fn walk_function_definition<V: Visitor>(visitor: &mut V, func: &FunctionDefinition, kind: NodeKind) {
    visitor.enter_node(kind, func.span);
    visitor.visit_identifier(&func.name);
    for param in &func.parameters {
        visitor.visit_parameter(param);
    }
    if let Some(return_type) = &func.return_type {
        visitor.visit_type(return_type);
    }
    visitor.visit_block(&func.body);
    visitor.leave_node(kind, func.span);
}

pub fn walk_operator_override<V: Visitor>(visitor: &mut V, op: &OperatorOverride) {
    visitor.enter_node(NodeKind::OperatorOverride, op.span);
    if let Some(return_type) = &op.return_type {
        visitor.visit_type(return_type);
    }
    visitor.visit_block(&op.body);
    visitor.leave_node(NodeKind::OperatorOverride, op.span);
}

pub fn walk_parameter<V: Visitor>(visitor: &mut V, param: &Parameter) {
    visitor.enter_node(NodeKind::Parameter, param.span);
    if let ParameterKind::Named { name, ty } = &param.kind {
        visitor.visit_identifier(name);
        if let Some(ty) = ty {
            visitor.visit_type(ty);
        }
    }
    visitor.leave_node(NodeKind::Parameter, param.span);
}

pub fn walk_block<V: Visitor>(visitor: &mut V, block: &Block) {
    visitor.enter_node(NodeKind::Block, block.span);
    for stmt in &block.statements {
        visitor.visit_statement(stmt);
    }
    visitor.leave_node(NodeKind::Block, block.span);
}

pub fn walk_statement<V: Visitor>(visitor: &mut V, stmt: &Statement) {
    match stmt {
        Statement::If(s) => return visitor.visit_if_statement(s),
        Statement::While(s) => return visitor.visit_while_statement(s),
        Statement::For(s) => return visitor.visit_for_statement(s),
        Statement::Match(s) => return visitor.visit_match_statement(s),
        _ => {}
    }

    let kind = stmt.kind();
    let span = *stmt.span();
    visitor.enter_node(kind, span);
    match stmt {
        Statement::Return(s) => {
            if let Some(value) = &s.value {
                visitor.visit_expression(value);
            }
        }
        Statement::Expression(s) => visitor.visit_expression(&s.expression),
        Statement::VariableDeclaration(s) => {
            visitor.visit_identifier(&s.name);
            if let Some(init) = &s.initializer {
                visitor.visit_expression(&init.value);
            }
        }
        Statement::Assignment(s) => {
            visitor.visit_identifier(&s.target);
            visitor.visit_expression(&s.value);
        }
        Statement::Assert(s) => visitor.visit_expression(&s.condition),
        Statement::If(_) | Statement::While(_) | Statement::For(_) | Statement::Match(_) => {}
    }
    visitor.leave_node(kind, span);
}

fn walk_else_clause<V: Visitor>(visitor: &mut V, clause: &ElseClause) {
    visitor.enter_node(NodeKind::ElseClause, clause.span);
    visitor.visit_block(&clause.body);
    visitor.leave_node(NodeKind::ElseClause, clause.span);
}

pub fn walk_if_statement<V: Visitor>(visitor: &mut V, stmt: &IfStatement) {
    visitor.enter_node(NodeKind::IfStatement, stmt.span);
    visitor.visit_expression(&stmt.condition);
    visitor.visit_block(&stmt.then_block);
    for clause in &stmt.elsif_clauses {
        visitor.enter_node(NodeKind::ElsifClause, clause.span);
        visitor.visit_expression(&clause.condition);
        visitor.visit_block(&clause.body);
        visitor.leave_node(NodeKind::ElsifClause, clause.span);
    }
    if let Some(clause) = &stmt.else_clause {
        walk_else_clause(visitor, clause);
    }
    visitor.leave_node(NodeKind::IfStatement, stmt.span);
}

pub fn walk_while_statement<V: Visitor>(visitor: &mut V, stmt: &WhileStatement) {
    visitor.enter_node(NodeKind::WhileStatement, stmt.span);
    visitor.visit_expression(&stmt.condition);
    visitor.visit_block(&stmt.body);
    if let Some(clause) = &stmt.else_clause {
        walk_else_clause(visitor, clause);
    }
    visitor.leave_node(NodeKind::WhileStatement, stmt.span);
}

pub fn walk_for_statement<V: Visitor>(visitor: &mut V, stmt: &ForStatement) {
    visitor.enter_node(NodeKind::ForStatement, stmt.span);
    visitor.visit_identifier(&stmt.variable);
    visitor.visit_expression(&stmt.iterable);
    visitor.visit_block(&stmt.body);
    if let Some(clause) = &stmt.else_clause {
        walk_else_clause(visitor, clause);
    }
    visitor.leave_node(NodeKind::ForStatement, stmt.span);
}

pub fn walk_match_statement<V: Visitor>(visitor: &mut V, stmt: &MatchStatement) {
    visitor.enter_node(NodeKind::MatchStatement, stmt.span);
    visitor.visit_identifier(&stmt.subject);
    for arm in &stmt.arms {
        visitor.visit_match_arm(arm);
    }
    visitor.leave_node(NodeKind::MatchStatement, stmt.span);
}

pub fn walk_match_arm<V: Visitor>(visitor: &mut V, arm: &MatchArm) {
    visitor.enter_node(NodeKind::MatchArm, arm.span);
    visitor.visit_pattern(&arm.pattern);
    visitor.visit_block(&arm.body);
    visitor.leave_node(NodeKind::MatchArm, arm.span);
}

pub fn walk_expression<V: Visitor>(visitor: &mut V, expr: &Expression) {
    match expr {
        Expression::Binary(e) => visitor.visit_binary_expression(e),
        Expression::Alloc(e) => visitor.visit_alloc_call(e),
        Expression::Call(e) => visitor.visit_function_call(e),
        Expression::EnumValue(e) => visitor.visit_enum_value(e),
        Expression::Identifier(id) => visitor.visit_identifier(id),
        Expression::Unary(e) => {
            visitor.enter_node(NodeKind::UnaryExpression, e.span);
            visitor.visit_expression(&e.operand);
            visitor.leave_node(NodeKind::UnaryExpression, e.span);
        }
        Expression::Postfix(e) => {
            visitor.enter_node(NodeKind::PostfixExpression, e.span);
            visitor.visit_expression(&e.operand);
            visitor.leave_node(NodeKind::PostfixExpression, e.span);
        }
        Expression::Parenthesized(e) => {
            visitor.enter_node(NodeKind::ParenthesizedExpression, e.span);
            visitor.visit_expression(&e.expression);
            visitor.leave_node(NodeKind::ParenthesizedExpression, e.span);
        }
        Expression::Array(e) => {
            visitor.enter_node(NodeKind::Array, e.span);
            for element in &e.elements {
                visitor.visit_expression(element);
            }
            visitor.leave_node(NodeKind::Array, e.span);
        }
        Expression::Number(e) => {
            visitor.enter_node(NodeKind::Number, e.span);
            visitor.leave_node(NodeKind::Number, e.span);
        }
        Expression::String(e) => {
            visitor.enter_node(NodeKind::String, e.span);
            visitor.leave_node(NodeKind::String, e.span);
        }
    }
}

pub fn walk_binary_expression<V: Visitor>(visitor: &mut V, expr: &BinaryExpression) {
    visitor.enter_node(NodeKind::BinaryExpression, expr.span);
    visitor.visit_expression(&expr.left);
    visitor.visit_expression(&expr.right);
    visitor.leave_node(NodeKind::BinaryExpression, expr.span);
}

pub fn walk_alloc_call<V: Visitor>(visitor: &mut V, alloc: &AllocCall) {
    visitor.enter_node(NodeKind::AllocCall, alloc.span);
    visitor.visit_type(&alloc.ty);
    if let Some(block) = &alloc.initializer {
        visitor.enter_node(NodeKind::AllocBlock, block.span);
        for field in &block.fields {
            visitor.enter_node(NodeKind::FieldInitializer, field.span);
            visitor.visit_identifier(&field.name);
            visitor.visit_expression(&field.value);
            visitor.leave_node(NodeKind::FieldInitializer, field.span);
        }
        visitor.leave_node(NodeKind::AllocBlock, block.span);
    }
    visitor.leave_node(NodeKind::AllocCall, alloc.span);
}

pub fn walk_function_call<V: Visitor>(visitor: &mut V, call: &FunctionCall) {
    visitor.enter_node(NodeKind::FunctionCall, call.span);
    visitor.visit_identifier(&call.callee);
    for arg in &call.arguments {
        visitor.visit_expression(arg);
    }
    visitor.leave_node(NodeKind::FunctionCall, call.span);
}

pub fn walk_enum_value<V: Visitor>(visitor: &mut V, value: &EnumValue) {
    visitor.enter_node(NodeKind::EnumValue, value.span);
    visitor.visit_type(&value.ty);
    visitor.visit_identifier(&value.case);
    for arg in value.arguments.iter().flatten() {
        visitor.visit_expression(arg);
    }
    visitor.leave_node(NodeKind::EnumValue, value.span);
}

pub fn walk_type<V: Visitor>(visitor: &mut V, ty: &Type) {
    visitor.enter_node(NodeKind::Type, ty.span);
    for segment in &ty.segments {
        visitor.visit_identifier(segment);
    }
    visitor.leave_node(NodeKind::Type, ty.span);
}

pub fn walk_pattern<V: Visitor>(visitor: &mut V, pattern: &Pattern) {
    visitor.enter_node(NodeKind::Pattern, pattern.span);
    visitor.visit_identifier(&pattern.variant);
    visitor.visit_identifier(&pattern.binding);
    visitor.leave_node(NodeKind::Pattern, pattern.span);
}

pub fn walk_identifier<V: Visitor>(visitor: &mut V, id: &Identifier) {
    visitor.enter_node(NodeKind::Identifier, id.span);
    visitor.leave_node(NodeKind::Identifier, id.span);
}
