//! Common data models (source text, spans)

pub mod source;
pub mod span;

pub use source::SourceText;
pub use span::{Location, Span};
