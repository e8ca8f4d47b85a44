//! Per-statement GEN/KILL sets

use rustc_hash::FxHashSet;

/// Local effect of a single statement: variables read (GEN) and variables
/// (re)defined (KILL). After `apply_kill_precedence` the sets are disjoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectSets {
    pub gen: FxHashSet<String>,
    pub kill: FxHashSet<String>,
}

impl EffectSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// KILL wins: a name read and redefined in the same statement is
    /// superseded by the definition at the statement boundary
    pub fn apply_kill_precedence(&mut self) {
        let EffectSets { gen, kill } = self;
        gen.retain(|name| !kill.contains(name));
    }

    pub fn is_disjoint(&self) -> bool {
        self.gen.is_disjoint(&self.kill)
    }
}
