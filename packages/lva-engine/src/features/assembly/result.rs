//! Externally consumed result types
//!
//! Field names serialize in camelCase so the JSON matches the shape the
//! host service exposes. Every name list is sorted at assembly time;
//! consumers and tests depend on stable ordering.

use serde::{Deserialize, Serialize};

use crate::features::extraction::StatementKind;

/// Complete result of one analysis invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Number of physical lines in the source
    pub total_lines: usize,
    pub statements: Vec<StatementRecord>,
    /// Simplified successor chain
    pub cfg: Vec<CfgEntry>,
    pub summary: Summary,
    /// Every physical line, statement-bearing or not
    pub line_by_line: Vec<LineRecord>,
}

/// Per-statement analysis output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementRecord {
    pub id: usize,
    pub line: u32,
    /// Trimmed source snippet of the statement
    pub code: String,
    pub kind: StatementKind,
    pub gen: Vec<String>,
    pub kill: Vec<String>,
    pub live_in: Vec<String>,
    pub live_out: Vec<String>,
}

/// One link of the linear successor chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfgEntry {
    pub id: usize,
    pub line: u32,
    /// The next statement id, `None` for the last statement
    pub successor: Option<usize>,
}

/// Whole-program aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_statements: usize,
    /// Sorted, de-duplicated names from every GEN and KILL set
    pub variables: Vec<String>,
}

/// Per-physical-line projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRecord {
    pub line: usize,
    pub code: String,
    pub is_statement: bool,
    /// Live-in of the owning statement, empty for non-statement lines
    pub live_variables: Vec<String>,
    pub gen: Vec<String>,
    pub kill: Vec<String>,
}
