//! Backward liveness fixed point
//!
//! The chain is linear: each statement's only successor is the next one,
//! the last has none. Per statement:
//!
//! ```text
//! OUT[n] = IN[n + 1]              (empty for the last statement)
//! IN[n]  = GEN[n] ∪ (OUT[n] \ KILL[n])
//! ```
//!
//! Full backward sweeps repeat until nothing changes. One sweep reaches
//! the fixed point on a linear chain, so the iteration cap is a bound
//! against pathological inputs; hitting it without convergence is an
//! internal defect, surfaced as an analysis failure rather than a
//! truncated result.

use rustc_hash::FxHashSet;

use crate::config::AnalysisConfig;
use crate::errors::{AnalysisError, Result};
use crate::features::effects::EffectSets;

/// Live-in/live-out of one statement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LivenessSets {
    pub live_in: FxHashSet<String>,
    pub live_out: FxHashSet<String>,
}

/// Per-run sweep state, explicit so concurrent analyses cannot interfere
struct SolverContext {
    live_in: Vec<FxHashSet<String>>,
    live_out: Vec<FxHashSet<String>>,
    changed: bool,
}

impl SolverContext {
    fn new(len: usize) -> Self {
        Self {
            live_in: vec![FxHashSet::default(); len],
            live_out: vec![FxHashSet::default(); len],
            changed: true,
        }
    }
}

/// Solve the backward dataflow equations over the statement chain
pub fn solve(effects: &[EffectSets], config: &AnalysisConfig) -> Result<Vec<LivenessSets>> {
    let mut ctx = SolverContext::new(effects.len());
    let mut sweeps = 0usize;

    while ctx.changed {
        if sweeps == config.max_solver_iterations {
            return Err(AnalysisError::internal(format!(
                "liveness solver did not converge within {} sweeps",
                config.max_solver_iterations
            )));
        }
        ctx.changed = false;
        sweeps += 1;
        sweep(effects, &mut ctx);
    }

    tracing::debug!("liveness fixed point reached after {} sweeps", sweeps);

    Ok(ctx
        .live_in
        .into_iter()
        .zip(ctx.live_out)
        .map(|(live_in, live_out)| LivenessSets { live_in, live_out })
        .collect())
}

fn sweep(effects: &[EffectSets], ctx: &mut SolverContext) {
    for idx in (0..effects.len()).rev() {
        let new_out = if idx + 1 < effects.len() {
            ctx.live_in[idx + 1].clone()
        } else {
            FxHashSet::default()
        };

        let mut new_in = effects[idx].gen.clone();
        new_in.extend(
            new_out
                .iter()
                .filter(|name| !effects[idx].kill.contains(*name))
                .cloned(),
        );

        // Set equality, not reference equality, detects convergence
        if new_in != ctx.live_in[idx] || new_out != ctx.live_out[idx] {
            ctx.changed = true;
        }
        ctx.live_in[idx] = new_in;
        ctx.live_out[idx] = new_out;
    }
}
