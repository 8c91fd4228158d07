use std::num::ParseFloatError;

use crate::memory::MemoryPoolType;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("it must follow the pattern '{pattern}'")]
    MalformedThreshold { pattern: &'static str },

    #[error("it must follow the pattern '{pattern}' and have at least a digit before the '%' sign")]
    MissingDelta { pattern: &'static str },

    #[error(
        "the value '{value}' is not valid for the increase on memory usage in the time-frame: \
         must be a positive double (0 < n <= {:.2})",
        f64::MAX
    )]
    InvalidDelta {
        value: String,
        #[source]
        source: Option<ParseFloatError>,
    },

    #[error(
        "the value '{value}' is not valid for the time-frame of memory usage increase threshold: \
         must be a positive integer (0 < n <= {})",
        i32::MAX
    )]
    InvalidTimeFrame {
        value: String,
        #[source]
        source: Option<ParseFloatError>,
    },

    #[error(
        "the value '{value}' is not valid for the time unit of the time-frame of memory usage \
         increase threshold: valid values are {accepted}"
    )]
    UnknownTimeUnit { value: String, accepted: String },

    #[error("unknown memory pool '{0}'")]
    UnknownMemoryPool(String),

    #[error("invalid increase threshold for memory pool '{memory_pool}'")]
    InvalidThreshold {
        memory_pool: MemoryPoolType,
        #[source]
        source: Box<Error>,
    },

    #[cfg(feature = "serde")]
    #[error("invalid threshold configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_delta<S: Into<String>>(value: S, source: Option<ParseFloatError>) -> Self {
        Error::InvalidDelta { value: value.into(), source }
    }

    pub(crate) fn invalid_time_frame<S: Into<String>>(value: S, source: Option<ParseFloatError>) -> Self {
        Error::InvalidTimeFrame { value: value.into(), source }
    }

    pub(crate) fn unknown_time_unit<S: Into<String>, A: Into<String>>(value: S, accepted: A) -> Self {
        Error::UnknownTimeUnit { value: value.into(), accepted: accepted.into() }
    }

    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    pub(crate) fn invalid_threshold(memory_pool: MemoryPoolType, source: Error) -> Self {
        Error::InvalidThreshold { memory_pool, source: Box::new(source) }
    }
}

/// Result type for threshold parsing and configuration loading
pub type Result<T> = std::result::Result<T, Error>;
