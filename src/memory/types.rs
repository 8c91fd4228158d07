use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Kind of managed memory pool a threshold is attached to
///
/// Each variant has a configuration key (`heap`, `code_cache`, ...) that is used both by
/// [`MemoryPoolType::from_key`] and by the serde representation.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MemoryPoolType {
    /// The whole heap
    Heap,
    /// JIT-compiled code cache
    CodeCache,
    /// Class metadata space
    Metaspace,
    /// Compressed class pointer space
    CompressedClass,
    /// Young generation allocation space
    Eden,
    /// Young generation survivor space
    Survivor,
    /// Tenured generation
    OldGen,
}

impl MemoryPoolType {
    /// All pool kinds, in declaration order
    pub const ALL: [MemoryPoolType; 7] = [
        Self::Heap,
        Self::CodeCache,
        Self::Metaspace,
        Self::CompressedClass,
        Self::Eden,
        Self::Survivor,
        Self::OldGen,
    ];

    /// Configuration key of this pool kind
    pub fn key(&self) -> &'static str {
        match self {
            Self::Heap => "heap",
            Self::CodeCache => "code_cache",
            Self::Metaspace => "metaspace",
            Self::CompressedClass => "compressed_class",
            Self::Eden => "eden",
            Self::Survivor => "survivor",
            Self::OldGen => "old_gen",
        }
    }

    /// Look up a pool kind by its configuration key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pool| pool.key() == key)
    }
}

impl fmt::Display for MemoryPoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MemoryPoolType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s).ok_or_else(|| Error::UnknownMemoryPool(s.to_string()))
    }
}

/// Point-in-time usage of a single memory pool, in bytes
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemoryUsage {
    /// Bytes currently occupied
    pub used: u64,
    /// Bytes committed by the runtime for this pool
    pub committed: u64,
    /// Upper bound of the pool, if it has one
    pub max: Option<u64>,
}
