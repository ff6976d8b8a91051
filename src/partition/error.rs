use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionError {
    #[error("Invalid partition size: {size} (must be at least 1)")]
    InvalidPartitionSize { size: i64 },
}

/// Failure to read a partition size from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSizeError {
    #[error("Partition size is not an integer: {0:?}")]
    NotAnInteger(String),

    #[error(transparent)]
    Invalid(#[from] PartitionError),
}
