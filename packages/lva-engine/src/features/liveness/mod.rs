//! Liveness solver: backward dataflow fixed point over the chain

pub mod solver;

pub use solver::{solve, LivenessSets};
