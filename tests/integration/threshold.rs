use std::error::Error as _;
use std::thread;
use std::time::Duration;

use memory_thresholds::prelude::*;

use crate::common::{init_tracing, TestThresholdBuilder};

#[test]
fn test_documented_scenarios() {
    init_tracing();

    let threshold = parse(MemoryPoolType::Heap, "+10%/5s").unwrap();
    assert_eq!((threshold.delta(), threshold.time_frame(), threshold.time_unit()), (10.0, 5.0, IntervalTimeUnit::Seconds));

    let threshold = parse(MemoryPoolType::Heap, "+0.5%/m").unwrap();
    assert_eq!((threshold.delta(), threshold.time_frame(), threshold.time_unit()), (0.5, 1.0, IntervalTimeUnit::Minutes));

    let threshold = parse(MemoryPoolType::Heap, "+10%/s").unwrap();
    assert_eq!((threshold.delta(), threshold.time_frame(), threshold.time_unit()), (10.0, 1.0, IntervalTimeUnit::Seconds));

    assert!(matches!(parse(MemoryPoolType::Heap, "+%/5s"), Err(Error::MissingDelta { .. })));
    assert!(matches!(parse(MemoryPoolType::Heap, "+10%/5x"), Err(Error::UnknownTimeUnit { .. })));
    assert!(matches!(parse(MemoryPoolType::Heap, "+-5%/5s"), Err(Error::MalformedThreshold { .. })));
}

#[test]
fn test_built_values_parse_to_their_parts() {
    init_tracing();

    for unit in IntervalTimeUnit::ALL {
        for (delta, time_frame) in [("1", "1"), ("0.25", "90"), ("150", "2.5")] {
            let value = TestThresholdBuilder::new().delta(delta).time_frame(time_frame).unit(unit.literal()).build();
            let threshold = parse(MemoryPoolType::Survivor, &value).unwrap();

            assert_eq!(threshold.delta(), delta.parse::<f64>().unwrap(), "{value}");
            assert_eq!(threshold.time_frame(), time_frame.parse::<f64>().unwrap(), "{value}");
            assert_eq!(threshold.time_unit(), unit, "{value}");
        }

        let value = TestThresholdBuilder::new().without_time_frame().unit(unit.literal()).build();
        assert_eq!(parse(MemoryPoolType::Survivor, &value).unwrap().time_frame(), 1.0, "{value}");
    }
}

#[test]
fn test_display_parses_back() {
    for value in ["+10%/5s", "+0.5%/1m", "+25%/1h", "+12.5%/250ms"] {
        let threshold = parse(MemoryPoolType::CodeCache, value).unwrap();
        assert_eq!(threshold.to_string(), value);
        assert_eq!(parse(MemoryPoolType::CodeCache, &threshold.to_string()).unwrap(), threshold);
    }
}

#[test]
fn test_error_kinds_follow_validation_order() {
    let cases = [
        (TestThresholdBuilder::new().delta("").build(), "missing delta"),
        (TestThresholdBuilder::new().delta("0").unit("x").build(), "invalid delta"),
        (TestThresholdBuilder::new().time_frame("0.5").unit("x").build(), "invalid time frame"),
        (TestThresholdBuilder::new().unit("days").build(), "unknown unit"),
    ];

    for (value, expected) in cases {
        let err = parse(MemoryPoolType::Heap, &value).unwrap_err();
        let kind = match err {
            Error::MissingDelta { .. } => "missing delta",
            Error::InvalidDelta { .. } => "invalid delta",
            Error::InvalidTimeFrame { .. } => "invalid time frame",
            Error::UnknownTimeUnit { .. } => "unknown unit",
            _ => "other",
        };
        assert_eq!(kind, expected, "{value}");
    }
}

#[test]
fn test_non_numeric_parts_carry_cause() {
    let err = parse(MemoryPoolType::Heap, &TestThresholdBuilder::new().delta(".").build()).unwrap_err();
    assert!(err.source().is_some());

    let err = parse(MemoryPoolType::Heap, &TestThresholdBuilder::new().time_frame(".").build()).unwrap_err();
    assert!(err.source().is_some());

    let err = parse(MemoryPoolType::Heap, &TestThresholdBuilder::new().time_frame("0").build()).unwrap_err();
    assert!(err.source().is_none());
}

#[test]
fn test_time_frame_duration() {
    let threshold = parse(MemoryPoolType::Heap, "+10%/1.5m").unwrap();
    assert_eq!(threshold.time_frame_duration(), Duration::from_secs(90));

    let threshold = parse(MemoryPoolType::Heap, "+10%/ms").unwrap();
    assert_eq!(threshold.time_frame_duration(), Duration::from_millis(1));
}

#[test]
fn test_concurrent_parsing() {
    let handles: Vec<_> = (1..=4)
        .map(|i| {
            thread::spawn(move || -> Result<IncreaseOverTimeFrameThreshold> {
                parse(MemoryPoolType::Heap, &format!("+{i}%/{i}m"))
            })
        })
        .collect();

    for (i, handle) in (1..=4).zip(handles) {
        let threshold = handle.join().unwrap().unwrap();
        assert_eq!(threshold.delta(), i as f64);
        assert_eq!(threshold.time_frame(), i as f64);
    }
}
