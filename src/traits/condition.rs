use crate::error::Result;
use crate::memory::{MemoryPoolType, MemoryUsage};

#[cfg(test)]
use mockall::automock;

/// Handle to a live memory pool
///
/// Implemented by whatever samples the managed runtime. Conditions receive one of these when they are built from a
/// threshold and read usage through it.
#[cfg_attr(test, automock)]
pub trait MemoryPool: Send + Sync {
    /// Kind of pool behind this handle
    fn pool_type(&self) -> MemoryPoolType;

    /// Name the runtime reports for this pool
    fn name(&self) -> String;

    /// Current usage of the pool
    fn usage(&self) -> Result<MemoryUsage>;
}

/// Runtime condition derived from a usage threshold
///
/// Conditions are built by [`UsageThresholdConfiguration::to_condition`] and own both the threshold they evaluate
/// and the pool they sample.
///
/// # Examples
///
/// ```rust
/// use memory_thresholds::prelude::*;
///
/// struct NeverBreached<P> {
///     threshold: IncreaseOverTimeFrameThreshold,
///     pool: P,
/// }
///
/// impl<P: MemoryPool> UsageThresholdCondition for NeverBreached<P> {
///     type Configuration = IncreaseOverTimeFrameThreshold;
///     type Pool = P;
///
///     fn new(threshold: IncreaseOverTimeFrameThreshold, pool: P) -> Self {
///         Self { threshold, pool }
///     }
///
///     fn configuration(&self) -> &IncreaseOverTimeFrameThreshold {
///         &self.threshold
///     }
///
///     fn evaluate(&mut self) -> Result<bool> {
///         self.pool.usage().map(|_| false)
///     }
/// }
/// ```
pub trait UsageThresholdCondition: Send {
    /// Threshold type this condition evaluates
    type Configuration: UsageThresholdConfiguration;

    /// Pool handle this condition samples
    type Pool: MemoryPool;

    /// Build the condition for `configuration` over `pool`
    fn new(configuration: Self::Configuration, pool: Self::Pool) -> Self
    where
        Self: Sized;

    /// Threshold this condition was built from
    fn configuration(&self) -> &Self::Configuration;

    /// Sample the pool and report whether the threshold is currently breached
    fn evaluate(&mut self) -> Result<bool>;
}

/// A validated threshold that can be turned into a runtime condition
pub trait UsageThresholdConfiguration: Clone + Send + Sync {
    /// Pool kind the threshold applies to
    fn memory_pool_type(&self) -> MemoryPoolType;

    /// Build a runtime condition for this threshold over `pool`
    ///
    /// The threshold is copied into the condition, so the caller keeps its own value.
    fn to_condition<C>(&self, pool: C::Pool) -> C
    where
        C: UsageThresholdCondition<Configuration = Self>,
    {
        tracing::trace!(
            memory_pool = %self.memory_pool_type(),
            pool_name = %pool.name(),
            "building usage threshold condition"
        );
        C::new(self.clone(), pool)
    }
}
