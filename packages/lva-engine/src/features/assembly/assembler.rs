//! Result assembly
//!
//! The only place internal unordered sets become externally visible
//! sequences; every list is sorted here for deterministic output. Pure:
//! no failure modes of its own.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::features::assembly::result::{
    AnalysisResult, CfgEntry, LineRecord, StatementRecord, Summary,
};
use crate::features::effects::EffectSets;
use crate::features::extraction::Statement;
use crate::features::liveness::LivenessSets;
use crate::shared::models::SourceText;

/// Merge statements, effects, and liveness into the final result
pub fn assemble(
    source: &SourceText,
    statements: &[Statement<'_>],
    effects: &[EffectSets],
    liveness: &[LivenessSets],
) -> AnalysisResult {
    let mut records = Vec::with_capacity(statements.len());
    let mut cfg = Vec::with_capacity(statements.len());
    let mut variables: FxHashSet<String> = FxHashSet::default();
    // line -> owning statement; a later statement on the same line wins
    let mut line_owner: FxHashMap<usize, usize> = FxHashMap::default();

    for statement in statements {
        let effect = &effects[statement.id];
        let live = &liveness[statement.id];

        variables.extend(effect.gen.iter().cloned());
        variables.extend(effect.kill.iter().cloned());

        records.push(StatementRecord {
            id: statement.id,
            line: statement.line,
            code: statement.snippet.trim().to_string(),
            kind: statement.kind,
            gen: sorted(&effect.gen),
            kill: sorted(&effect.kill),
            live_in: sorted(&live.live_in),
            live_out: sorted(&live.live_out),
        });

        cfg.push(CfgEntry {
            id: statement.id,
            line: statement.line,
            successor: if statement.id + 1 < statements.len() {
                Some(statement.id + 1)
            } else {
                None
            },
        });

        line_owner.insert(statement.line as usize, statement.id);
    }

    let line_by_line = (1..=source.line_count())
        .map(|line| {
            let code = source.line(line).unwrap_or("").to_string();
            match line_owner.get(&line) {
                Some(&id) => LineRecord {
                    line,
                    code,
                    is_statement: true,
                    live_variables: records[id].live_in.clone(),
                    gen: records[id].gen.clone(),
                    kill: records[id].kill.clone(),
                },
                None => LineRecord {
                    line,
                    code,
                    is_statement: false,
                    live_variables: Vec::new(),
                    gen: Vec::new(),
                    kill: Vec::new(),
                },
            }
        })
        .collect();

    let summary = Summary {
        total_statements: statements.len(),
        variables: sorted(&variables),
    };

    AnalysisResult {
        total_lines: source.line_count(),
        statements: records,
        cfg,
        summary,
        line_by_line,
    }
}

fn sorted(set: &FxHashSet<String>) -> Vec<String> {
    let mut names: Vec<String> = set.iter().cloned().collect();
    names.sort();
    names
}
