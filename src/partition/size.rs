use super::{ParseSizeError, PartitionError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Maximum number of items per partition, validated to be at least 1.
///
/// Deserializes from a signed integer so that configuration values such as
/// `0` or `-3` are rejected with [`PartitionError::InvalidPartitionSize`]
/// instead of failing as a type mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PartitionSize(NonZeroUsize);

impl PartitionSize {
    /// Items per page when nothing else is configured
    pub const DEFAULT: PartitionSize = PartitionSize(match NonZeroUsize::new(10) {
        Some(n) => n,
        None => unreachable!(),
    });

    /// Validate a requested size.
    ///
    /// Sizes above `usize::MAX` saturate; any size at least as large as the
    /// sequence already yields a single partition.
    pub fn new(size: i64) -> Result<Self, PartitionError> {
        if size < 1 {
            return Err(PartitionError::InvalidPartitionSize { size });
        }

        let n = usize::try_from(size).unwrap_or(usize::MAX);
        NonZeroUsize::new(n)
            .map(Self)
            .ok_or(PartitionError::InvalidPartitionSize { size })
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PartitionSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for PartitionSize {
    type Error = PartitionError;

    fn try_from(size: i64) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl TryFrom<usize> for PartitionSize {
    type Error = PartitionError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(PartitionError::InvalidPartitionSize { size: 0 })
    }
}

impl FromStr for PartitionSize {
    type Err = ParseSizeError;

    /// Parse a decimal size; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size: i64 = s
            .trim()
            .parse()
            .map_err(|_| ParseSizeError::NotAnInteger(s.to_string()))?;
        Ok(Self::new(size)?)
    }
}

impl From<NonZeroUsize> for PartitionSize {
    fn from(size: NonZeroUsize) -> Self {
        Self(size)
    }
}

impl From<PartitionSize> for i64 {
    fn from(size: PartitionSize) -> Self {
        i64::try_from(size.get()).unwrap_or(i64::MAX)
    }
}

impl fmt::Display for PartitionSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
