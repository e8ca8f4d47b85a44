//! Pipeline orchestration
//!
//! parse -> extract -> classify -> solve -> assemble, strictly sequential,
//! single pass; no stage mutates another's output after handoff. Each
//! invocation owns its input exclusively, so independent analyses can run
//! fully in parallel with no locking.

use crate::config::AnalysisConfig;
use crate::errors::{AnalysisError, Result};
use crate::features::assembly::{assemble, AnalysisResult};
use crate::features::effects::{classify, EffectSets};
use crate::features::extraction::extract;
use crate::features::liveness::solve;
use crate::features::parsing::EcmaParser;
use crate::shared::models::SourceText;

/// Stateless analysis entry point carrying the run configuration
#[derive(Debug)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Create an analyzer, validating the configuration once
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_defaults() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze one source text: a complete result or a terminal error,
    /// never a partial result
    pub fn analyze(&self, source: &str) -> Result<AnalysisResult> {
        match self.run(source) {
            Ok(result) => Ok(result),
            Err(error) => {
                tracing::error!("analysis aborted: {} ({})", error, error.code());
                Err(error)
            }
        }
    }

    fn run(&self, text: &str) -> Result<AnalysisResult> {
        let length = text.chars().count();
        if length > self.config.max_source_len {
            return Err(AnalysisError::InputTooLarge {
                length,
                limit: self.config.max_source_len,
            });
        }

        let source = SourceText::new(text);
        let tree = EcmaParser::new().parse(&source)?;

        let statements = extract(&tree, &source);
        tracing::debug!(
            "extracted {} statements over {} lines",
            statements.len(),
            source.line_count()
        );

        let effects: Vec<EffectSets> = statements
            .iter()
            .map(|statement| classify(statement, &source))
            .collect();

        let liveness = solve(&effects, &self.config)?;

        Ok(assemble(&source, &statements, &effects, &liveness))
    }
}

/// Analyze with the default configuration
pub fn analyze(source: &str) -> Result<AnalysisResult> {
    Analyzer::with_defaults().analyze(source)
}
