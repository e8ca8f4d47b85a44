//! Statement domain model
//!
//! A statement is one node of the linear control-flow chain. Ids are dense
//! and 0-based after extraction; the final statement has no successor.

use serde::{Deserialize, Serialize};
use tree_sitter::Node;

use crate::features::parsing::javascript::node_kinds;
use crate::shared::models::Span;

/// Closed set of statement categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementKind {
    VariableDeclaration,
    ExpressionStatement,
    FunctionDeclaration,
    ClassDeclaration,
    BlockStatement,
    IfStatement,
    SwitchStatement,
    ForStatement,
    ForInStatement,
    WhileStatement,
    DoWhileStatement,
    TryStatement,
    WithStatement,
    ReturnStatement,
    BreakStatement,
    ContinueStatement,
    ThrowStatement,
    LabeledStatement,
    EmptyStatement,
    DebuggerStatement,
    ImportDeclaration,
    ExportDeclaration,
    Other,
}

impl StatementKind {
    /// Map a tree-sitter node kind to its statement category
    pub fn from_node_kind(kind: &str) -> Self {
        match kind {
            node_kinds::LEXICAL_DECLARATION | node_kinds::VARIABLE_DECLARATION => {
                StatementKind::VariableDeclaration
            }
            node_kinds::EXPRESSION_STATEMENT => StatementKind::ExpressionStatement,
            node_kinds::FUNCTION_DECLARATION | node_kinds::GENERATOR_FUNCTION_DECLARATION => {
                StatementKind::FunctionDeclaration
            }
            node_kinds::CLASS_DECLARATION => StatementKind::ClassDeclaration,
            node_kinds::STATEMENT_BLOCK => StatementKind::BlockStatement,
            node_kinds::IF_STATEMENT => StatementKind::IfStatement,
            node_kinds::SWITCH_STATEMENT => StatementKind::SwitchStatement,
            node_kinds::FOR_STATEMENT => StatementKind::ForStatement,
            node_kinds::FOR_IN_STATEMENT => StatementKind::ForInStatement,
            node_kinds::WHILE_STATEMENT => StatementKind::WhileStatement,
            node_kinds::DO_STATEMENT => StatementKind::DoWhileStatement,
            node_kinds::TRY_STATEMENT => StatementKind::TryStatement,
            node_kinds::WITH_STATEMENT => StatementKind::WithStatement,
            node_kinds::RETURN_STATEMENT => StatementKind::ReturnStatement,
            node_kinds::BREAK_STATEMENT => StatementKind::BreakStatement,
            node_kinds::CONTINUE_STATEMENT => StatementKind::ContinueStatement,
            node_kinds::THROW_STATEMENT => StatementKind::ThrowStatement,
            node_kinds::LABELED_STATEMENT => StatementKind::LabeledStatement,
            node_kinds::EMPTY_STATEMENT => StatementKind::EmptyStatement,
            node_kinds::DEBUGGER_STATEMENT => StatementKind::DebuggerStatement,
            node_kinds::IMPORT_STATEMENT => StatementKind::ImportDeclaration,
            node_kinds::EXPORT_STATEMENT => StatementKind::ExportDeclaration,
            _ => StatementKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::VariableDeclaration => "VariableDeclaration",
            StatementKind::ExpressionStatement => "ExpressionStatement",
            StatementKind::FunctionDeclaration => "FunctionDeclaration",
            StatementKind::ClassDeclaration => "ClassDeclaration",
            StatementKind::BlockStatement => "BlockStatement",
            StatementKind::IfStatement => "IfStatement",
            StatementKind::SwitchStatement => "SwitchStatement",
            StatementKind::ForStatement => "ForStatement",
            StatementKind::ForInStatement => "ForInStatement",
            StatementKind::WhileStatement => "WhileStatement",
            StatementKind::DoWhileStatement => "DoWhileStatement",
            StatementKind::TryStatement => "TryStatement",
            StatementKind::WithStatement => "WithStatement",
            StatementKind::ReturnStatement => "ReturnStatement",
            StatementKind::BreakStatement => "BreakStatement",
            StatementKind::ContinueStatement => "ContinueStatement",
            StatementKind::ThrowStatement => "ThrowStatement",
            StatementKind::LabeledStatement => "LabeledStatement",
            StatementKind::EmptyStatement => "EmptyStatement",
            StatementKind::DebuggerStatement => "DebuggerStatement",
            StatementKind::ImportDeclaration => "ImportDeclaration",
            StatementKind::ExportDeclaration => "ExportDeclaration",
            StatementKind::Other => "Other",
        }
    }
}

/// One statement of the linear chain
#[derive(Debug, Clone)]
pub struct Statement<'tree> {
    /// Dense 0-based position in the sorted chain
    pub id: usize,
    /// 1-based source line the statement starts on
    pub line: u32,
    pub kind: StatementKind,
    /// Raw source slice spanning the statement
    pub snippet: String,
    pub span: Span,
    pub node: Node<'tree>,
}
