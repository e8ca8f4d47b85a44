//! Result assembler: statement and line views of the analysis

pub mod assembler;
pub mod result;

pub use assembler::assemble;
pub use result::{AnalysisResult, CfgEntry, LineRecord, StatementRecord, Summary};
