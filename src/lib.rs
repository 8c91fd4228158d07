//! Memory Thresholds - typed "relative increase over a time frame" memory-usage thresholds
//!
//! An agent watching a managed runtime is typically configured with thresholds such as `+10%/5s`: "fire when the
//! usage of this memory pool grows by more than 10% within five seconds". This crate parses that notation into a
//! validated, immutable [`IncreaseOverTimeFrameThreshold`](threshold::IncreaseOverTimeFrameThreshold) and hands it to
//! whatever evaluates it at runtime.
//!
//! # Features
//!
//! - **Threshold parsing**: strict grammar with one precise error per failure
//! - **Memory pool identities**: closed set of pool kinds with configuration keys
//! - **Condition factory**: build a runtime condition from a threshold and a pool handle
//! - **Configuration loading** (`serde` feature): JSON documents of pool/threshold pairs
//!
//! # Examples
//!
//! ```rust
//! use memory_thresholds::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let threshold = parse(MemoryPoolType::Heap, "+10%/5s")?;
//!     assert_eq!(threshold.delta(), 10.0);
//!     assert_eq!(threshold.time_frame(), 5.0);
//!     assert_eq!(threshold.time_unit(), IntervalTimeUnit::Seconds);
//!
//!     // The time frame magnitude defaults to 1
//!     let threshold = parse(MemoryPoolType::Heap, "+10%/s")?;
//!     assert_eq!(threshold.time_frame(), 1.0);
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Every failure is returned as an [`Error`] describing which part of the value is wrong and what is accepted:
//!
//! ```rust
//! use memory_thresholds::prelude::*;
//!
//! let err = parse(MemoryPoolType::Heap, "+10%/5x").unwrap_err();
//! assert!(matches!(err, Error::UnknownTimeUnit { .. }));
//! assert!(err.to_string().ends_with("valid values are ms, s, m, h"));
//! ```
//!
//! # Thread Safety
//!
//! Parsing is a pure function over a shared, immutable compiled pattern. Thresholds are `Copy + Send + Sync`.
#![doc(html_root_url = "https://docs.rs/memory-thresholds/0.1.0")]

pub mod error;
pub use error::{Error, Result};

// Public modules
#[cfg(feature = "serde")]
pub mod config;
pub mod memory;
pub mod threshold;
pub mod traits;

/// Re-export common types for convenience
pub mod prelude {
    #[cfg(feature = "serde")]
    pub use crate::config::{ThresholdConfig, ThresholdsConfig};
    pub use crate::memory::{MemoryPoolType, MemoryUsage};
    pub use crate::threshold::{parse, IncreaseOverTimeFrameThreshold, IntervalTimeUnit};
    pub use crate::traits::{MemoryPool, UsageThresholdCondition, UsageThresholdConfiguration};
    pub use crate::Error;
    pub use crate::Result;
}
