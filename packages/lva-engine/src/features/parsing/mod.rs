//! Syntax provider: grammar configuration and the tree-sitter parser

pub mod javascript;
pub mod parser;

pub use parser::EcmaParser;
