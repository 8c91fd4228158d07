//! Threshold configuration documents
//!
//! Thresholds are usually supplied by the host agent as a list of pool/value pairs:
//!
//! ```json
//! {
//!   "thresholds": [
//!     { "memory_pool": "heap", "increase": "+10%/5s" },
//!     { "memory_pool": "metaspace", "increase": "+25%/h" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::memory::MemoryPoolType;
use crate::threshold::{self, IncreaseOverTimeFrameThreshold};

/// One configured threshold, before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Pool the threshold applies to
    pub memory_pool: MemoryPoolType,
    /// Threshold in `+<delta>%/<time frame><unit>` form
    pub increase: String,
}

impl ThresholdConfig {
    pub fn new<S: Into<String>>(memory_pool: MemoryPoolType, increase: S) -> Self {
        Self { memory_pool, increase: increase.into() }
    }

    /// Validate this entry
    ///
    /// Parse failures are wrapped in [`Error::InvalidThreshold`] so the caller can tell which pool was misconfigured.
    pub fn threshold(&self) -> Result<IncreaseOverTimeFrameThreshold> {
        threshold::parse(self.memory_pool, &self.increase).map_err(|e| {
            tracing::warn!(
                memory_pool = %self.memory_pool,
                value = %self.increase,
                error = %e,
                "rejecting increase-over-time-frame threshold"
            );
            Error::invalid_threshold(self.memory_pool, e)
        })
    }
}

/// Set of configured thresholds
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default)]
    pub thresholds: Vec<ThresholdConfig>,
}

impl ThresholdsConfig {
    /// Read a configuration document from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate every entry, stopping at the first invalid one
    pub fn thresholds(&self) -> Result<Vec<IncreaseOverTimeFrameThreshold>> {
        let thresholds = self.thresholds.iter().map(ThresholdConfig::threshold).collect::<Result<Vec<_>>>()?;

        tracing::info!(count = thresholds.len(), "loaded increase-over-time-frame thresholds");
        Ok(thresholds)
    }
}
