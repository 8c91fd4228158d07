//! Increase-over-time-frame thresholds
//!
//! A threshold such as `+10%/5s` fires when the usage of a memory pool grows by more than 10% within 5 seconds. This
//! module turns the textual form into an [`IncreaseOverTimeFrameThreshold`] and reports precisely which part of the
//! value is wrong when it cannot.
//!
//! # Format
//!
//! ```text
//! +<delta>%/<time frame><unit>
//! ```
//!
//! - `delta` is a positive decimal number, the percentage increase
//! - `time frame` is an optional decimal number of at least `1`; `+10%/s` means `+10%/1s`
//! - `unit` is one of `ms`, `s`, `m`, `h`
//!
//! # Examples
//!
//! ```
//! use memory_thresholds::memory::MemoryPoolType;
//! use memory_thresholds::threshold::parse;
//! use memory_thresholds::Error;
//!
//! let threshold = parse(MemoryPoolType::OldGen, "+25%/h").unwrap();
//! assert_eq!(threshold.time_frame_duration().as_secs(), 3_600);
//!
//! match parse(MemoryPoolType::OldGen, "+%/5s") {
//!     Err(Error::MissingDelta { .. }) => {}
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

/// Threshold format constants
pub mod constants;

/// Threshold parsing
pub mod parser;

/// Threshold data types
pub mod types;

pub use parser::parse;
pub use types::*;
