//! Tree-sitter parser for ECMAScript sources
//!
//! This is where the tree-sitter dependency lives. A parser is created per
//! invocation; the core stays a stateless function from text to tree.

use tree_sitter::{Node, Parser as TsParser, Tree};

use crate::errors::{AnalysisError, Result};
use crate::shared::models::{SourceText, Span};

/// JavaScript parser producing a span-annotated syntax tree
pub struct EcmaParser;

impl EcmaParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse source text, failing on the first grammar violation
    pub fn parse(&self, source: &SourceText) -> Result<Tree> {
        let mut parser = TsParser::new();
        parser
            .set_language(&tree_sitter_javascript::language())
            .map_err(|e| AnalysisError::parse(format!("failed to load grammar: {}", e)))?;

        let tree = parser
            .parse(source.as_str(), None)
            .ok_or_else(|| AnalysisError::parse("parser produced no tree"))?;

        let root = tree.root_node();
        if root.has_error() {
            let message = first_syntax_error(&root, source)
                .unwrap_or_else(|| "source contains a syntax error".to_string());
            return Err(AnalysisError::parse(message));
        }

        Ok(tree)
    }
}

impl Default for EcmaParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Locate the first error or missing node and describe it
fn first_syntax_error(node: &Node, source: &SourceText) -> Option<String> {
    if node.is_error() {
        let span = Span::of_node(node);
        let fragment = source
            .slice_bytes(node.byte_range())
            .unwrap_or("")
            .trim()
            .chars()
            .take(40)
            .collect::<String>();
        return Some(if fragment.is_empty() {
            format!("unexpected token at {}", span)
        } else {
            format!("unexpected token at {}: `{}`", span, fragment)
        });
    }
    if node.is_missing() {
        let span = Span::of_node(node);
        return Some(format!("missing {} at {}", node.kind(), span));
    }

    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            if let Some(message) = first_syntax_error(&child, source) {
                return Some(message);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_program() {
        let source = SourceText::new("let x = 5;\nconsole.log(x);");
        let tree = EcmaParser::new().parse(&source);
        assert!(tree.is_ok());
        assert_eq!(tree.unwrap().root_node().kind(), "program");
    }

    #[test]
    fn test_parse_empty_program() {
        let source = SourceText::new("");
        let tree = EcmaParser::new().parse(&source);
        assert!(tree.is_ok());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let source = SourceText::new("let x = ;");
        let err = EcmaParser::new().parse(&source).unwrap_err();
        assert_eq!(err.code(), "PARSE_ERROR");
    }

    #[test]
    fn test_unbalanced_brace_is_reported() {
        let source = SourceText::new("function f( {");
        let err = EcmaParser::new().parse(&source).unwrap_err();
        assert_eq!(err.code(), "PARSE_ERROR");
    }
}
