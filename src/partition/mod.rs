mod error;
mod partitioner;
mod set;
mod size;


pub use error::{ParseSizeError, PartitionError};
pub use partitioner::{Partitioner, partition_owned, partition_with};
pub use set::{Partition, PartitionSet};
pub use size::PartitionSize;
