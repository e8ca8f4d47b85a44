//! Analysis configuration
//!
//! Process-wide, read-only after initialization. Each analysis invocation
//! borrows the config; nothing else is shared between invocations.

use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, Result};

/// Run configuration for the analysis pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum accepted source length in characters (1..=1_000_000)
    pub max_source_len: usize,

    /// Maximum backward sweeps before the solver reports failure (1..=10_000)
    pub max_solver_iterations: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_source_len: 50_000,
            max_solver_iterations: 100,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_source_len == 0 || self.max_source_len > 1_000_000 {
            return Err(AnalysisError::config(format!(
                "max_source_len must be in 1..=1000000, got {}",
                self.max_source_len
            )));
        }
        if self.max_solver_iterations == 0 || self.max_solver_iterations > 10_000 {
            return Err(AnalysisError::config(format!(
                "max_solver_iterations must be in 1..=10000, got {}",
                self.max_solver_iterations
            )));
        }
        Ok(())
    }
}
