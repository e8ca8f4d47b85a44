//! Statement extractor: linearizes the tree into the statement chain

pub mod extractor;
pub mod statement;

pub use extractor::extract;
pub use statement::{Statement, StatementKind};
