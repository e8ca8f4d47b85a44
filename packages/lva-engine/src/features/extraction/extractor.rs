//! Statement extraction: tree to linear chain
//!
//! Pre-order walk over the syntax tree collecting every statement node.
//! Traversal does not descend into function-like nodes, so nested function
//! bodies stay opaque; the function statement itself is still collected.
//! The chain is sorted by source line (stable for ties) and assigned dense
//! 0-based ids. This ordering is the only control-flow model: branching
//! constructs are ordinary statements here, not graph edges.

use tree_sitter::{Node, Tree};

use crate::features::extraction::{Statement, StatementKind};
use crate::features::parsing::javascript::{is_function_like, is_statement};
use crate::shared::models::{SourceText, Span};

/// Extract the ordered statement chain from a parsed tree
pub fn extract<'tree>(tree: &'tree Tree, source: &SourceText) -> Vec<Statement<'tree>> {
    let mut statements = Vec::new();
    collect(tree.root_node(), source, &mut statements);

    // Stable sort keeps tree-traversal order for same-line statements
    statements.sort_by_key(|s| s.line);
    for (id, statement) in statements.iter_mut().enumerate() {
        statement.id = id;
    }
    statements
}

fn collect<'tree>(node: Node<'tree>, source: &SourceText, out: &mut Vec<Statement<'tree>>) {
    if is_statement(node.kind()) {
        // A node whose snippet cannot be resolved is discarded
        if let Some(snippet) = source.slice_bytes(node.byte_range()) {
            let span = Span::of_node(&node);
            out.push(Statement {
                id: 0,
                line: span.start_line,
                kind: StatementKind::from_node_kind(node.kind()),
                snippet: snippet.to_string(),
                span,
                node,
            });
        }
    }

    // Nested function bodies are analyzed as opaque units
    if is_function_like(node.kind()) {
        return;
    }

    for i in 0..node.named_child_count() {
        if let Some(child) = node.named_child(i) {
            if !child.is_extra() {
                collect(child, source, out);
            }
        }
    }
}
