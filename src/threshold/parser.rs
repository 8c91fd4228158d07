use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::memory::MemoryPoolType;
use crate::threshold::constants::{DEFAULT_TIME_FRAME, INCREASE_OVER_TIME_FRAME_PATTERN, MIN_TIME_FRAME};
use crate::threshold::types::{IncreaseOverTimeFrameThreshold, IntervalTimeUnit};

static INCREASE_OVER_TIME_FRAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(INCREASE_OVER_TIME_FRAME_PATTERN).expect("valid increase-over-time-frame pattern"));

/// Parse an increase-over-time-frame threshold such as `+10%/5s` for `memory_pool`
///
/// Checks run in order and the first failure is returned:
///
/// 1. the value matches `+<delta>%/<time frame><unit>`
/// 2. the delta has at least one digit
/// 3. the delta is a number greater than zero
/// 4. the time frame, when given, is a number of at least one (it defaults to `1`)
/// 5. the unit is one of `ms`, `s`, `m`, `h`
///
/// # Examples
///
/// ```
/// use memory_thresholds::memory::MemoryPoolType;
/// use memory_thresholds::threshold::{parse, IntervalTimeUnit};
///
/// let threshold = parse(MemoryPoolType::Heap, "+0.5%/m").unwrap();
/// assert_eq!(threshold.delta(), 0.5);
/// assert_eq!(threshold.time_frame(), 1.0);
/// assert_eq!(threshold.time_unit(), IntervalTimeUnit::Minutes);
///
/// assert!(parse(MemoryPoolType::Heap, "+10%/5x").is_err());
/// ```
pub fn parse(memory_pool: MemoryPoolType, value: &str) -> Result<IncreaseOverTimeFrameThreshold> {
    let captures = INCREASE_OVER_TIME_FRAME
        .captures(value)
        .ok_or(Error::MalformedThreshold { pattern: INCREASE_OVER_TIME_FRAME_PATTERN })?;

    let delta_literal = &captures[1];
    let time_frame_literal = &captures[2];
    let unit_literal = &captures[3];

    let delta = parse_delta(delta_literal)?;
    let time_frame = parse_time_frame(time_frame_literal)?;
    let time_unit = IntervalTimeUnit::from_literal(unit_literal)
        .ok_or_else(|| Error::unknown_time_unit(unit_literal, IntervalTimeUnit::accepted_literals()))?;

    tracing::debug!(
        memory_pool = %memory_pool,
        delta,
        time_frame,
        time_unit = %time_unit,
        "parsed increase-over-time-frame threshold"
    );

    Ok(IncreaseOverTimeFrameThreshold::new(memory_pool, delta, time_frame, time_unit))
}

fn parse_delta(literal: &str) -> Result<f64> {
    if literal.is_empty() {
        return Err(Error::MissingDelta { pattern: INCREASE_OVER_TIME_FRAME_PATTERN });
    }

    let delta: f64 = literal.parse().map_err(|e| Error::invalid_delta(literal, Some(e)))?;
    if delta <= 0.0 || !delta.is_finite() {
        return Err(Error::invalid_delta(literal, None));
    }

    Ok(delta)
}

fn parse_time_frame(literal: &str) -> Result<f64> {
    if literal.is_empty() {
        return Ok(DEFAULT_TIME_FRAME);
    }

    let time_frame: f64 = literal.parse().map_err(|e| Error::invalid_time_frame(literal, Some(e)))?;
    if time_frame < MIN_TIME_FRAME || !time_frame.is_finite() {
        return Err(Error::invalid_time_frame(literal, None));
    }

    Ok(time_frame)
}
