/*
 * lva-engine - Live Variable Analysis over straight-line ECMAScript
 *
 * Feature-First Layout:
 * - shared/    : source text and span models
 * - features/  : vertical slices (parsing → extraction → effects → liveness → assembly)
 * - pipeline/  : orchestration and the public analyze() entry point
 * - config/    : run configuration
 *
 * The control-flow model is deliberately a straight-line chain over
 * top-level statements in textual order: branching constructs contribute
 * their own GEN/KILL but never alter successor linkage, and nested
 * function bodies are opaque units. See the module docs for the exact
 * classification and dataflow rules.
 */

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

/// Feature modules (pipeline stages)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Shared models and utilities
pub mod shared;

pub use config::AnalysisConfig;
pub use errors::{AnalysisError, Result};
pub use features::assembly::{AnalysisResult, CfgEntry, LineRecord, StatementRecord, Summary};
pub use features::catalog;
pub use features::extraction::StatementKind;
pub use pipeline::{analyze, Analyzer};
