//! Source location types
//!
//! Lines are 1-based, columns are 0-based byte offsets within the line,
//! matching what tree-sitter reports after the +1 line adjustment.

use serde::{Deserialize, Serialize};

/// Single location in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Span in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl Span {
    pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Span of a tree-sitter node, with rows converted to 1-based lines
    pub fn of_node(node: &tree_sitter::Node) -> Self {
        Self::new(
            node.start_position().row as u32 + 1,
            node.start_position().column as u32,
            node.end_position().row as u32 + 1,
            node.end_position().column as u32,
        )
    }

    pub fn start(&self) -> Location {
        Location::new(self.start_line, self.start_col)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start_line, self.start_col, self.end_line, self.end_col
        )
    }
}
