use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::memory::MemoryPoolType;
use crate::traits::UsageThresholdConfiguration;

/// Unit of a threshold time frame
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IntervalTimeUnit {
    #[cfg_attr(feature = "serde", serde(rename = "ms"))]
    Milliseconds,
    #[cfg_attr(feature = "serde", serde(rename = "s"))]
    Seconds,
    #[cfg_attr(feature = "serde", serde(rename = "m"))]
    Minutes,
    #[cfg_attr(feature = "serde", serde(rename = "h"))]
    Hours,
}

impl IntervalTimeUnit {
    /// All units, in declaration order
    pub const ALL: [IntervalTimeUnit; 4] = [Self::Milliseconds, Self::Seconds, Self::Minutes, Self::Hours];

    /// Canonical literal of this unit
    pub fn literal(&self) -> &'static str {
        match self {
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
            Self::Minutes => "m",
            Self::Hours => "h",
        }
    }

    /// Look up a unit by its literal. Matching is exact and case-sensitive.
    pub fn from_literal(literal: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.literal() == literal)
    }

    /// Accepted literals joined with `", "`, in declaration order
    pub fn accepted_literals() -> String {
        Self::ALL.iter().map(|unit| unit.literal()).collect::<Vec<_>>().join(", ")
    }

    /// Length of a single unit in milliseconds
    pub fn as_millis(&self) -> u64 {
        match self {
            Self::Milliseconds => 1,
            Self::Seconds => 1_000,
            Self::Minutes => 60_000,
            Self::Hours => 3_600_000,
        }
    }

    /// Duration of `magnitude` units
    ///
    /// Negative, NaN or overflowing magnitudes saturate instead of panicking.
    pub fn to_duration(&self, magnitude: f64) -> Duration {
        let secs = magnitude * self.as_millis() as f64 / 1_000.0;
        Duration::try_from_secs_f64(secs).unwrap_or(if secs > 0.0 { Duration::MAX } else { Duration::ZERO })
    }
}

impl fmt::Display for IntervalTimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

/// Validated "relative increase over a time frame" threshold
///
/// Only produced by [`parse`](crate::threshold::parse), so every value satisfies `delta > 0` and
/// `time_frame >= 1`. The type is `Copy`: handing it to a condition never takes it away from its owner.
///
/// ```
/// use memory_thresholds::memory::MemoryPoolType;
/// use memory_thresholds::threshold::{parse, IntervalTimeUnit};
///
/// let threshold = parse(MemoryPoolType::Heap, "+10%/5s").unwrap();
/// assert_eq!(threshold.delta(), 10.0);
/// assert_eq!(threshold.time_frame(), 5.0);
/// assert_eq!(threshold.time_unit(), IntervalTimeUnit::Seconds);
/// assert_eq!(threshold.to_string(), "+10%/5s");
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct IncreaseOverTimeFrameThreshold {
    memory_pool_type: MemoryPoolType,
    delta: f64,
    time_frame: f64,
    time_unit: IntervalTimeUnit,
}

impl IncreaseOverTimeFrameThreshold {
    pub(crate) fn new(
        memory_pool_type: MemoryPoolType,
        delta: f64,
        time_frame: f64,
        time_unit: IntervalTimeUnit,
    ) -> Self {
        Self { memory_pool_type, delta, time_frame, time_unit }
    }

    /// Increase in memory usage, as a percentage
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Magnitude of the time frame, in [`time_unit`](Self::time_unit)s
    pub fn time_frame(&self) -> f64 {
        self.time_frame
    }

    pub fn time_unit(&self) -> IntervalTimeUnit {
        self.time_unit
    }

    /// Length of the time frame
    pub fn time_frame_duration(&self) -> Duration {
        self.time_unit.to_duration(self.time_frame)
    }
}

impl UsageThresholdConfiguration for IncreaseOverTimeFrameThreshold {
    fn memory_pool_type(&self) -> MemoryPoolType {
        self.memory_pool_type
    }
}

impl fmt::Display for IncreaseOverTimeFrameThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}%/{}{}", self.delta, self.time_frame, self.time_unit)
    }
}
