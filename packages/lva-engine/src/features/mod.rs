//! Feature modules, one vertical slice per pipeline stage

pub mod assembly;
pub mod catalog;
pub mod effects;
pub mod extraction;
pub mod liveness;
pub mod parsing;
