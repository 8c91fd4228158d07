//! Memory pool identities
//!
//! Thresholds are always attached to one memory pool. This module defines the closed set of pool kinds a threshold
//! can target and the usage snapshot a runtime pool handle reports.
//!
//! ```
//! use memory_thresholds::memory::MemoryPoolType;
//!
//! let pool: MemoryPoolType = "old_gen".parse().unwrap();
//! assert_eq!(pool, MemoryPoolType::OldGen);
//! assert_eq!(pool.to_string(), "old_gen");
//! ```

/// Memory pool data types
pub mod types;

pub use types::*;
