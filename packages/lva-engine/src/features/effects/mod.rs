//! Local-effect classifier: per-statement GEN/KILL sets

pub mod classifier;
pub mod effect_sets;

pub use classifier::classify;
pub use effect_sets::EffectSets;
