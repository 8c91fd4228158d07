// Traits module
//
// Seams between threshold configuration and the runtime that evaluates it.
// The runtime side (pool sampling, condition evaluation) lives outside this crate.

pub mod condition;

#[cfg(test)]
pub use condition::MockMemoryPool;
pub use condition::{MemoryPool, UsageThresholdCondition, UsageThresholdConfiguration};
